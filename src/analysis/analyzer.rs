//! 텍스트 전체의 자모 빈도 및 모음조화 집계

use serde::Serialize;

use crate::core::jamo::{
    vowel_class, VowelClass, CHOSEONG, CHOSEONG_COUNT, JONGSEONG, JONGSEONG_COUNT, JUNGSEONG,
    JUNGSEONG_COUNT,
};
use crate::core::unicode::{decompose, DecomposedSyllable};

/// 자모 빈도표: (자모, 출현 수), 출현 수 내림차순
/// 동률은 자모 테이블 순서를 유지
pub type FrequencyTable = Vec<(char, usize)>;

/// 모음조화 경향
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tendency {
    Bright,
    Dark,
    Balanced,
}

impl Tendency {
    pub fn label(self) -> &'static str {
        match self {
            Tendency::Bright => "bright",
            Tendency::Dark => "dark",
            Tendency::Balanced => "balanced",
        }
    }
}

/// 모음조화 집계
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VowelHarmony {
    /// 양성 모음 수
    pub bright: usize,
    /// 음성 모음 수
    pub dark: usize,
    /// 중성 모음 수
    pub neutral: usize,
    /// 경향 (양성 > 음성이면 bright, 반대면 dark, 같으면 balanced)
    pub tendency: Tendency,
}

impl VowelHarmony {
    fn from_counts(bright: usize, dark: usize, neutral: usize) -> Self {
        let tendency = if bright > dark {
            Tendency::Bright
        } else if dark > bright {
            Tendency::Dark
        } else {
            Tendency::Balanced
        };
        Self {
            bright,
            dark,
            neutral,
            tendency,
        }
    }

    pub fn total(&self) -> usize {
        self.bright + self.dark + self.neutral
    }
}

/// 텍스트 분석 결과
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResult {
    /// 분해된 음절 (출현 순서)
    pub syllables: Vec<DecomposedSyllable>,
    /// 전체 음절 수
    pub total_syllables: usize,
    /// 받침 있는 음절 수
    pub with_jong: usize,
    /// 받침 없는 음절 수
    pub without_jong: usize,
    /// 받침 비율 (0.0 ~ 1.0, 음절이 없으면 0)
    pub jong_ratio: f64,
    /// 초성 빈도
    pub cho_freq: FrequencyTable,
    /// 중성 빈도
    pub jung_freq: FrequencyTable,
    /// 종성 빈도 (받침 있는 음절만)
    pub jong_freq: FrequencyTable,
    /// 모음조화 집계
    pub vowel_harmony: VowelHarmony,
}

impl AnalysisResult {
    /// 한글 음절이 하나도 없는지
    pub fn is_empty(&self) -> bool {
        self.total_syllables == 0
    }

    /// 초성 원시 빈도 (테이블 순서)
    pub fn cho_count(&self, jamo: char) -> usize {
        lookup(&self.cho_freq, jamo)
    }

    /// 중성 원시 빈도 (테이블 순서)
    pub fn jung_count(&self, jamo: char) -> usize {
        lookup(&self.jung_freq, jamo)
    }
}

fn lookup(table: &FrequencyTable, jamo: char) -> usize {
    table
        .iter()
        .find(|(c, _)| *c == jamo)
        .map(|(_, n)| *n)
        .unwrap_or(0)
}

/// 테이블 순서의 카운트 배열을 내림차순 빈도표로 변환
/// 안정 정렬이므로 동률은 테이블 순서 유지, 0회 자모는 제외
fn to_frequency_table<I>(symbols: I, counts: &[usize]) -> FrequencyTable
where
    I: IntoIterator<Item = char>,
{
    let mut table: FrequencyTable = symbols
        .into_iter()
        .zip(counts.iter().copied())
        .filter(|&(_, n)| n > 0)
        .collect();
    table.sort_by(|a, b| b.1.cmp(&a.1));
    table
}

/// 텍스트를 음절 단위로 분해해 빈도/모음조화를 집계
///
/// 한글 음절이 아닌 문자는 건너뜁니다.
pub fn analyze(text: &str) -> AnalysisResult {
    let mut syllables = Vec::new();
    let mut cho_counts = [0usize; CHOSEONG_COUNT];
    let mut jung_counts = [0usize; JUNGSEONG_COUNT];
    let mut jong_counts = [0usize; JONGSEONG_COUNT];
    let mut with_jong = 0;
    let (mut bright, mut dark, mut neutral) = (0, 0, 0);
    let mut skipped = 0usize;

    for ch in text.chars() {
        let Some(syllable) = decompose(ch) else {
            skipped += 1;
            continue;
        };
        log::trace!(
            "{} -> {} {} {:?}",
            syllable.syllable,
            syllable.cho,
            syllable.jung,
            syllable.jong
        );

        cho_counts[syllable.cho_index] += 1;
        jung_counts[syllable.jung_index] += 1;
        if syllable.has_jong() {
            jong_counts[syllable.jong_index] += 1;
            with_jong += 1;
        }
        match vowel_class(syllable.jung_index) {
            VowelClass::Bright => bright += 1,
            VowelClass::Dark => dark += 1,
            VowelClass::Neutral => neutral += 1,
        }
        syllables.push(syllable);
    }

    let total_syllables = syllables.len();
    let jong_ratio = if total_syllables > 0 {
        with_jong as f64 / total_syllables as f64
    } else {
        0.0
    };

    log::debug!(
        "분석 완료: 음절 {}개 (받침 {}개), 비한글 {}개 건너뜀",
        total_syllables,
        with_jong,
        skipped
    );

    AnalysisResult {
        syllables,
        total_syllables,
        with_jong,
        without_jong: total_syllables - with_jong,
        jong_ratio,
        cho_freq: to_frequency_table(CHOSEONG, &cho_counts),
        jung_freq: to_frequency_table(JUNGSEONG, &jung_counts),
        // 종성 0번(없음)은 자모가 없으므로 1번부터
        jong_freq: to_frequency_table(JONGSEONG.iter().flatten().copied(), &jong_counts[1..]),
        vowel_harmony: VowelHarmony::from_counts(bright, dark, neutral),
    }
}
