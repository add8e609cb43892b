//! CLI 종료 코드 및 출력 테스트

use std::process::{Command, Output};

fn run_cli(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_hangul-phonetics"))
        .args(args)
        .output()
        .unwrap()
}

#[test]
fn test_no_input_exits_2() {
    let output = run_cli(&[]);
    assert_eq!(output.status.code(), Some(2));
    assert!(!output.stderr.is_empty());
}

#[test]
fn test_blank_inline_text_exits_2() {
    let output = run_cli(&["--text", "  \n "]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_unreadable_file_exits_1() {
    let output = run_cli(&["/nonexistent/poem.txt"]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_structure_mode() {
    let output = run_cli(&["--text", "한글", "--structure"]);
    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("CVC CVC"));
    assert!(!stdout.contains("== 음운 지문 =="));
}

#[test]
fn test_mode_flags_are_exclusive() {
    let output = run_cli(&["--text", "한글", "--rhyme", "--structure"]);
    assert_ne!(output.status.code(), Some(0));
}
