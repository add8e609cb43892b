//! hangul-phonetics - 한글 텍스트 음운 분석 CLI

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgGroup, Parser};
use hangul_phonetics::config::{load_config_or_default, AnalysisConfig};
use hangul_phonetics::error::{read_text_file, Result};
use hangul_phonetics::input::resolve_text;
use hangul_phonetics::report::{build_report, render_json, render_text, ReportMode};

/// 한글 텍스트의 음운 특징(빈도, 모음조화, 각운, 음절 구조, 지문)을 분석합니다
#[derive(Parser, Debug)]
#[command(name = "hangul-phonetics", version, about)]
#[command(group(ArgGroup::new("mode").args(["fingerprint", "rhyme", "structure"])))]
struct Cli {
    /// 분석할 UTF-8 텍스트 파일
    file: Option<PathBuf>,

    /// 파일 대신 분석할 텍스트
    #[arg(short, long)]
    text: Option<String>,

    /// 음운 지문만 출력
    #[arg(long)]
    fingerprint: bool,

    /// 각운만 출력
    #[arg(long)]
    rhyme: bool,

    /// 음절 구조와 모음조화 패턴만 출력
    #[arg(long)]
    structure: bool,

    /// 이 파일의 텍스트와 음운 유사도 비교
    #[arg(long, value_name = "OTHER")]
    compare: Option<PathBuf>,

    /// JSON으로 출력
    #[arg(long)]
    json: bool,

    /// 분석 설정 파일 (JSON)
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,
}

impl Cli {
    fn mode(&self) -> ReportMode {
        if self.fingerprint {
            ReportMode::FingerprintOnly
        } else if self.rhyme {
            ReportMode::RhymeOnly
        } else if self.structure {
            ReportMode::StructureOnly
        } else {
            ReportMode::All
        }
    }
}

fn run(cli: &Cli) -> Result<String> {
    let config = match &cli.config {
        Some(path) => load_config_or_default(path),
        None => AnalysisConfig::default(),
    };

    let text = resolve_text(cli.text.as_deref(), cli.file.as_deref())?;
    let other = match &cli.compare {
        Some(path) => Some(read_text_file(path)?),
        None => None,
    };

    let report = build_report(&text, cli.mode(), other.as_deref(), &config);
    if cli.json {
        render_json(&report)
    } else {
        Ok(render_text(&report))
    }
}

fn main() -> ExitCode {
    // 로깅 초기화 (error/warn만 출력)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{}", e);
            eprintln!("오류: {}", e);
            ExitCode::from(e.exit_code())
        }
    }
}
