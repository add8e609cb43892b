//! 음운 지문 생성 및 비교

pub mod compare;
pub mod generator;

pub use compare::{compare, compare_with_config, cosine_similarity};
pub use generator::{fingerprint, fingerprint_with_config, round_to, Fingerprint};
