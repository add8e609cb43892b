//! 어절별 모음조화 패턴

use serde::Serialize;

use crate::core::jamo::vowel_class;
use crate::core::unicode::decompose;

/// 어절과 그 모음조화 패턴 (`+` 양성, `-` 음성, `·` 중성)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HarmonyWord {
    pub word: String,
    pub pattern: String,
}

/// 공백으로 나눈 어절마다 음절의 모음 밝기를 기호로 나열
///
/// 한글 음절이 아닌 문자는 패턴에서 빠지며, 음절이 없는 어절은 결과에 포함되지 않음
pub fn vowel_harmony_analysis(text: &str) -> Vec<HarmonyWord> {
    text.split_whitespace()
        .filter_map(|word| {
            let pattern: String = word
                .chars()
                .filter_map(decompose)
                .map(|s| vowel_class(s.jung_index).symbol())
                .collect();
            if pattern.is_empty() {
                None
            } else {
                Some(HarmonyWord {
                    word: word.to_string(),
                    pattern,
                })
            }
        })
        .collect()
}
