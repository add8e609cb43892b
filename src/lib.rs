//! 한글 음절을 자모로 분해해 텍스트의 음운 특징을 분석하고,
//! 정규화된 음운 지문으로 텍스트 간 유사도를 비교합니다.
//!
//! ```
//! use hangul_phonetics::{compare, decompose, structural_pattern};
//!
//! let han = decompose('한').unwrap();
//! assert_eq!((han.cho, han.jung, han.jong), ('ㅎ', 'ㅏ', Some('ㄴ')));
//! assert_eq!(structural_pattern("한글"), "CVC CVC");
//! assert_eq!(compare("Hello", "World"), None);
//! ```

pub mod analysis;
pub mod config;
pub mod core;
pub mod error;
pub mod fingerprint;
pub mod input;
pub mod report;

pub use analysis::{analyze, find_rhymes, structural_pattern, vowel_harmony_analysis};
pub use config::AnalysisConfig;
pub use crate::core::unicode::{compose, decompose, is_syllable, DecomposedSyllable};
pub use error::PhoneticsError;
pub use fingerprint::{compare, fingerprint, Fingerprint};
