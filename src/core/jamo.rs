//! 한글 자모 테이블 (초성/중성/종성) 및 모음 밝기 분류
//!
//! 모든 테이블은 호환용 자모(U+3131 ~ U+3163) 문자로 표기하며,
//! 인덱스는 유니코드 완성형 음절의 조합 순서를 그대로 따릅니다.

use std::collections::HashMap;

use lazy_static::lazy_static;
use serde::Serialize;

/// 초성 개수
pub const CHOSEONG_COUNT: usize = 19;
/// 중성 개수
pub const JUNGSEONG_COUNT: usize = 21;
/// 종성 개수 (종성 없음 포함)
pub const JONGSEONG_COUNT: usize = 28;

/// 초성 테이블
/// ㄱ(0) ㄲ(1) ㄴ(2) ㄷ(3) ㄸ(4) ㄹ(5) ㅁ(6) ㅂ(7) ㅃ(8) ㅅ(9)
/// ㅆ(10) ㅇ(11) ㅈ(12) ㅉ(13) ㅊ(14) ㅋ(15) ㅌ(16) ㅍ(17) ㅎ(18)
#[rustfmt::skip]
pub const CHOSEONG: [char; CHOSEONG_COUNT] = [
    'ㄱ', 'ㄲ', 'ㄴ', 'ㄷ', 'ㄸ', 'ㄹ', 'ㅁ', 'ㅂ', 'ㅃ', 'ㅅ',
    'ㅆ', 'ㅇ', 'ㅈ', 'ㅉ', 'ㅊ', 'ㅋ', 'ㅌ', 'ㅍ', 'ㅎ',
];

/// 중성 테이블
/// ㅏ(0) ㅐ(1) ㅑ(2) ㅒ(3) ㅓ(4) ㅔ(5) ㅕ(6) ㅖ(7) ㅗ(8) ㅘ(9)
/// ㅙ(10) ㅚ(11) ㅛ(12) ㅜ(13) ㅝ(14) ㅞ(15) ㅟ(16) ㅠ(17) ㅡ(18) ㅢ(19) ㅣ(20)
#[rustfmt::skip]
pub const JUNGSEONG: [char; JUNGSEONG_COUNT] = [
    'ㅏ', 'ㅐ', 'ㅑ', 'ㅒ', 'ㅓ', 'ㅔ', 'ㅕ', 'ㅖ', 'ㅗ', 'ㅘ',
    'ㅙ', 'ㅚ', 'ㅛ', 'ㅜ', 'ㅝ', 'ㅞ', 'ㅟ', 'ㅠ', 'ㅡ', 'ㅢ', 'ㅣ',
];

/// 종성 테이블 (0 = 종성 없음)
/// 없음(0) ㄱ(1) ㄲ(2) ㄳ(3) ㄴ(4) ㄵ(5) ㄶ(6) ㄷ(7) ㄹ(8) ㄺ(9)
/// ㄻ(10) ㄼ(11) ㄽ(12) ㄾ(13) ㄿ(14) ㅀ(15) ㅁ(16) ㅂ(17) ㅄ(18) ㅅ(19)
/// ㅆ(20) ㅇ(21) ㅈ(22) ㅊ(23) ㅋ(24) ㅌ(25) ㅍ(26) ㅎ(27)
#[rustfmt::skip]
pub const JONGSEONG: [Option<char>; JONGSEONG_COUNT] = [
    None,
    Some('ㄱ'), Some('ㄲ'), Some('ㄳ'), Some('ㄴ'), Some('ㄵ'), Some('ㄶ'), Some('ㄷ'),
    Some('ㄹ'), Some('ㄺ'), Some('ㄻ'), Some('ㄼ'), Some('ㄽ'), Some('ㄾ'), Some('ㄿ'),
    Some('ㅀ'), Some('ㅁ'), Some('ㅂ'), Some('ㅄ'), Some('ㅅ'), Some('ㅆ'), Some('ㅇ'),
    Some('ㅈ'), Some('ㅊ'), Some('ㅋ'), Some('ㅌ'), Some('ㅍ'), Some('ㅎ'),
];

/// 양성 모음
const BRIGHT_VOWELS: [char; 9] = ['ㅏ', 'ㅐ', 'ㅑ', 'ㅒ', 'ㅗ', 'ㅘ', 'ㅙ', 'ㅚ', 'ㅛ'];
/// 음성 모음
const DARK_VOWELS: [char; 9] = ['ㅓ', 'ㅔ', 'ㅕ', 'ㅖ', 'ㅜ', 'ㅝ', 'ㅞ', 'ㅟ', 'ㅠ'];

lazy_static! {
    static ref CHOSEONG_INDEX: HashMap<char, usize> =
        CHOSEONG.iter().enumerate().map(|(i, &c)| (c, i)).collect();
    static ref JUNGSEONG_INDEX: HashMap<char, usize> =
        JUNGSEONG.iter().enumerate().map(|(i, &c)| (c, i)).collect();
    static ref JONGSEONG_INDEX: HashMap<char, usize> = JONGSEONG
        .iter()
        .enumerate()
        .filter_map(|(i, c)| c.map(|c| (c, i)))
        .collect();
}

/// 모음 밝기 분류 (모음조화)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VowelClass {
    /// 양성 모음
    Bright,
    /// 음성 모음
    Dark,
    /// 중성 모음
    Neutral,
}

impl VowelClass {
    /// 모음조화 패턴 기호: 양성 `+`, 음성 `-`, 중성 `·`
    pub fn symbol(self) -> char {
        match self {
            VowelClass::Bright => '+',
            VowelClass::Dark => '-',
            VowelClass::Neutral => '·',
        }
    }
}

/// 중성 인덱스의 모음 밝기 분류
/// 범위를 벗어난 인덱스는 중성으로 취급
pub fn vowel_class(jung_index: usize) -> VowelClass {
    match JUNGSEONG.get(jung_index) {
        Some(v) if BRIGHT_VOWELS.contains(v) => VowelClass::Bright,
        Some(v) if DARK_VOWELS.contains(v) => VowelClass::Dark,
        _ => VowelClass::Neutral,
    }
}

/// 초성 자모의 인덱스
pub fn choseong_index(jamo: char) -> Option<usize> {
    CHOSEONG_INDEX.get(&jamo).copied()
}

/// 중성 자모의 인덱스
pub fn jungseong_index(jamo: char) -> Option<usize> {
    JUNGSEONG_INDEX.get(&jamo).copied()
}

/// 종성 자모의 인덱스 (1~27). 종성 없음(0)은 자모가 없으므로 조회되지 않음
pub fn jongseong_index(jamo: char) -> Option<usize> {
    JONGSEONG_INDEX.get(&jamo).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_sizes() {
        assert_eq!(CHOSEONG.len(), 19);
        assert_eq!(JUNGSEONG.len(), 21);
        assert_eq!(JONGSEONG.len(), 28);
        assert_eq!(JONGSEONG[0], None);
    }

    #[test]
    fn test_vowel_partition_covers_all() {
        let bright = (0..JUNGSEONG_COUNT)
            .filter(|&i| vowel_class(i) == VowelClass::Bright)
            .count();
        let dark = (0..JUNGSEONG_COUNT)
            .filter(|&i| vowel_class(i) == VowelClass::Dark)
            .count();
        let neutral = (0..JUNGSEONG_COUNT)
            .filter(|&i| vowel_class(i) == VowelClass::Neutral)
            .count();
        assert_eq!((bright, dark, neutral), (9, 9, 3));
    }

    #[test]
    fn test_vowel_class() {
        assert_eq!(vowel_class(0), VowelClass::Bright); // ㅏ
        assert_eq!(vowel_class(4), VowelClass::Dark); // ㅓ
        assert_eq!(vowel_class(18), VowelClass::Neutral); // ㅡ
        assert_eq!(vowel_class(20), VowelClass::Neutral); // ㅣ
    }

    #[test]
    fn test_index_lookup() {
        assert_eq!(choseong_index('ㄱ'), Some(0));
        assert_eq!(choseong_index('ㅎ'), Some(18));
        assert_eq!(jungseong_index('ㅣ'), Some(20));
        assert_eq!(jongseong_index('ㄴ'), Some(4));
        assert_eq!(jongseong_index('ㄸ'), None); // 종성 불가
        assert_eq!(choseong_index('ㅏ'), None);
        assert_eq!(choseong_index('a'), None);
    }

    #[test]
    fn test_vowel_symbols() {
        assert_eq!(VowelClass::Bright.symbol(), '+');
        assert_eq!(VowelClass::Dark.symbol(), '-');
        assert_eq!(VowelClass::Neutral.symbol(), '·');
    }
}
