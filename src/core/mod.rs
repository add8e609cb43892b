//! 한글 자모 테이블과 음절 조합/분해

pub mod jamo;
pub mod unicode;
