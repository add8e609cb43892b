//! 유니코드 한글 음절 조합/분해 유틸리티

use serde::Serialize;

use super::jamo::{
    choseong_index, jongseong_index, jungseong_index, CHOSEONG, CHOSEONG_COUNT, JONGSEONG,
    JONGSEONG_COUNT, JUNGSEONG, JUNGSEONG_COUNT,
};

/// 한글 음절 시작 코드포인트 (가)
const HANGUL_SYLLABLE_BASE: u32 = 0xAC00;
/// 한글 음절 마지막 코드포인트 (힣)
const HANGUL_SYLLABLE_LAST: u32 = 0xD7A3;

/// 분해된 한글 음절
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DecomposedSyllable {
    /// 원래 음절 문자
    pub syllable: char,
    /// 초성 인덱스 (0~18)
    pub cho_index: usize,
    /// 중성 인덱스 (0~20)
    pub jung_index: usize,
    /// 종성 인덱스 (0~27, 0 = 종성 없음)
    pub jong_index: usize,
    /// 초성 자모
    pub cho: char,
    /// 중성 자모
    pub jung: char,
    /// 종성 자모 (없으면 None)
    pub jong: Option<char>,
}

impl DecomposedSyllable {
    /// 받침(종성)이 있는지
    pub fn has_jong(&self) -> bool {
        self.jong.is_some()
    }

    /// 각운 키: 중성 + 종성 (종성 없으면 중성만)
    pub fn ending_key(&self) -> String {
        let mut key = String::with_capacity(8);
        key.push(self.jung);
        if let Some(jong) = self.jong {
            key.push(jong);
        }
        key
    }
}

/// 완성형 한글 음절(가-힣)인지 확인
pub fn is_syllable(c: char) -> bool {
    (HANGUL_SYLLABLE_BASE..=HANGUL_SYLLABLE_LAST).contains(&(c as u32))
}

/// 초성/중성/종성 인덱스로 완성된 한글 유니코드 생성
/// - choseong: 초성 인덱스 (0~18)
/// - jungseong: 중성 인덱스 (0~20)
/// - jongseong: 종성 인덱스 (0~27, 0 = 종성 없음)
pub fn compose_syllable(choseong: usize, jungseong: usize, jongseong: usize) -> Option<char> {
    if choseong >= CHOSEONG_COUNT || jungseong >= JUNGSEONG_COUNT || jongseong >= JONGSEONG_COUNT {
        return None;
    }
    let code = HANGUL_SYLLABLE_BASE
        + ((choseong * JUNGSEONG_COUNT + jungseong) * JONGSEONG_COUNT + jongseong) as u32;
    char::from_u32(code)
}

/// 완성형 한글을 초성/중성/종성 인덱스로 분해
/// 반환: (초성 인덱스, 중성 인덱스, 종성 인덱스)
pub fn decompose_syllable(c: char) -> Option<(usize, usize, usize)> {
    if !is_syllable(c) {
        return None;
    }
    let offset = (c as u32 - HANGUL_SYLLABLE_BASE) as usize;
    let jongseong = offset % JONGSEONG_COUNT;
    let jungseong = (offset / JONGSEONG_COUNT) % JUNGSEONG_COUNT;
    let choseong = offset / JONGSEONG_COUNT / JUNGSEONG_COUNT;
    Some((choseong, jungseong, jongseong))
}

/// 완성형 한글을 자모 단위로 분해
/// 한글 음절이 아니면 None
pub fn decompose(c: char) -> Option<DecomposedSyllable> {
    let (cho_index, jung_index, jong_index) = decompose_syllable(c)?;
    Some(DecomposedSyllable {
        syllable: c,
        cho_index,
        jung_index,
        jong_index,
        cho: CHOSEONG[cho_index],
        jung: JUNGSEONG[jung_index],
        jong: JONGSEONG[jong_index],
    })
}

/// 자모 문자로 한글 음절 조합
///
/// 초성/중성이 테이블에 없으면 None.
/// 종성이 None이거나 종성 테이블에 없는 자모(공백 포함)면 종성 없음으로 처리
pub fn compose(cho: char, jung: char, jong: Option<char>) -> Option<char> {
    let cho_index = choseong_index(cho)?;
    let jung_index = jungseong_index(jung)?;
    let jong_index = jong.and_then(jongseong_index).unwrap_or(0);
    compose_syllable(cho_index, jung_index, jong_index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compose_syllable() {
        // 가 = 초성 ㄱ(0) + 중성 ㅏ(0) + 종성 없음(0)
        assert_eq!(compose_syllable(0, 0, 0), Some('가'));
        // 각 = 초성 ㄱ(0) + 중성 ㅏ(0) + 종성 ㄱ(1)
        assert_eq!(compose_syllable(0, 0, 1), Some('각'));
        // 한 = 초성 ㅎ(18) + 중성 ㅏ(0) + 종성 ㄴ(4)
        assert_eq!(compose_syllable(18, 0, 4), Some('한'));
        assert_eq!(compose_syllable(18, 20, 27), Some('힣'));
        // 범위 초과
        assert_eq!(compose_syllable(19, 0, 0), None);
        assert_eq!(compose_syllable(0, 21, 0), None);
        assert_eq!(compose_syllable(0, 0, 28), None);
    }

    #[test]
    fn test_decompose_syllable() {
        assert_eq!(decompose_syllable('가'), Some((0, 0, 0)));
        assert_eq!(decompose_syllable('한'), Some((18, 0, 4)));
        assert_eq!(decompose_syllable('글'), Some((0, 18, 8)));
        assert_eq!(decompose_syllable('힣'), Some((18, 20, 27)));

        // 한글이 아닌 문자
        assert_eq!(decompose_syllable('a'), None);
        assert_eq!(decompose_syllable('ㄱ'), None); // 낱자모
    }

    #[test]
    fn test_is_syllable_bounds() {
        assert!(is_syllable('가'));
        assert!(is_syllable('힣'));
        assert!(!is_syllable('\u{ABFF}'));
        assert!(!is_syllable('\u{D7A4}'));
        assert!(!is_syllable(' '));
    }

    #[test]
    fn test_decompose_han() {
        let s = decompose('한').unwrap();
        assert_eq!(s.cho, 'ㅎ');
        assert_eq!(s.jung, 'ㅏ');
        assert_eq!(s.jong, Some('ㄴ'));
        assert!(s.has_jong());
        assert_eq!(s.ending_key(), "ㅏㄴ");
    }

    #[test]
    fn test_decompose_ga() {
        let s = decompose('가').unwrap();
        assert_eq!(s.cho, 'ㄱ');
        assert_eq!(s.jung, 'ㅏ');
        assert_eq!(s.jong, None);
        assert!(!s.has_jong());
        assert_eq!(s.ending_key(), "ㅏ");
    }

    #[test]
    fn test_decompose_non_syllable() {
        assert_eq!(decompose('A'), None);
        assert_eq!(decompose('!'), None);
        assert_eq!(decompose('ㅏ'), None);
    }

    #[test]
    fn test_compose() {
        assert_eq!(compose('ㅎ', 'ㅏ', Some('ㄴ')), Some('한'));
        assert_eq!(compose('ㄱ', 'ㅏ', None), Some('가'));
        // 종성 테이블에 없는 값은 종성 없음
        assert_eq!(compose('ㄱ', 'ㅏ', Some(' ')), Some('가'));
        assert_eq!(compose('ㄱ', 'ㅏ', Some('ㄸ')), Some('가'));
        // 초성/중성을 찾을 수 없음
        assert_eq!(compose('ㅏ', 'ㅏ', None), None);
        assert_eq!(compose('ㄱ', 'ㄱ', None), None);
    }

    #[test]
    fn test_round_trip_sample() {
        for c in ['가', '각', '한', '글', '뷁', '힣'] {
            let s = decompose(c).unwrap();
            assert_eq!(compose(s.cho, s.jung, s.jong), Some(c));
        }
    }
}
