//! 음절 구조 패턴 (개음절 CV / 폐음절 CVC)

use crate::core::unicode::decompose;

/// 받침 없는 음절
pub const OPEN_SYLLABLE: &str = "CV";
/// 받침 있는 음절
pub const CLOSED_SYLLABLE: &str = "CVC";

/// 각 문자를 구조 토큰으로 바꿔 공백으로 연결
///
/// 한글 음절은 `CV`/`CVC`, 그 밖의 보이는 문자는 그대로, 공백 문자는 버림
pub fn structural_pattern(text: &str) -> String {
    let tokens: Vec<String> = text
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| match decompose(c) {
            Some(s) if s.has_jong() => CLOSED_SYLLABLE.to_string(),
            Some(_) => OPEN_SYLLABLE.to_string(),
            None => c.to_string(),
        })
        .collect();
    tokens.join(" ")
}
