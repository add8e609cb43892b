//! 텍스트 음운 분석
//!
//! 음절 분해 결과를 집계해 빈도, 모음조화, 각운, 음절 구조를 계산합니다.

pub mod analyzer;
pub mod harmony;
pub mod rhyme;
pub mod structure;

pub use analyzer::{analyze, AnalysisResult, FrequencyTable, Tendency, VowelHarmony};
pub use harmony::{vowel_harmony_analysis, HarmonyWord};
pub use rhyme::{find_rhymes, find_rhymes_with_config, RhymeGroup};
pub use structure::structural_pattern;
