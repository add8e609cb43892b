//! 음운 지문 생성
//!
//! 텍스트 길이와 무관하게 비교할 수 있도록 정규화한 요약값입니다.
//!
//! - 밝기: (양성 - 음성) / max(양성 + 음성, 1), -1.0 ~ 1.0
//! - 무게: 받침 비율, 0.0 ~ 1.0
//! - 리듬 규칙성: 1 - min(1, 행별 음절 수의 표준편차 / 평균)
//! - 자음/모음 다양성: 초성/중성 분포의 섀넌 엔트로피 / log2(테이블 크기)
//!
//! 반올림은 지문을 만드는 마지막 단계에서 한 번만 수행합니다.

use serde::Serialize;

use crate::analysis::analyzer::{analyze, AnalysisResult, FrequencyTable};
use crate::config::{AnalysisConfig, MAX_PRECISION};
use crate::core::jamo::{CHOSEONG, JUNGSEONG};
use crate::core::unicode::is_syllable;

/// 자모별 비율 분포 (테이블 순서, 0회 자모 포함)
pub type Profile = Vec<(char, f64)>;

/// 텍스트의 음운 지문
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Fingerprint {
    /// 전체 음절 수
    pub total_syllables: usize,
    /// 밝기 (-1.0 ~ 1.0)
    pub brightness: f64,
    /// 무게 = 받침 비율 (0.0 ~ 1.0)
    pub weight: f64,
    /// 리듬 규칙성 (0.0 ~ 1.0)
    pub rhythm_regularity: f64,
    /// 행당 평균 음절 수
    pub avg_line_length: f64,
    /// 자음(초성) 다양성 (0.0 ~ 1.0)
    pub consonant_diversity: f64,
    /// 모음(중성) 다양성 (0.0 ~ 1.0)
    pub vowel_diversity: f64,
    /// 초성 분포 (19개)
    pub cho_profile: Profile,
    /// 중성 분포 (21개)
    pub jung_profile: Profile,
    /// 빈도 상위 초성
    pub top_cho: Vec<char>,
    /// 빈도 상위 중성
    pub top_jung: Vec<char>,
}

/// 소수점 `decimals` 자리로 반올림 (0.5는 0에서 먼 쪽으로)
///
/// 자릿수는 최대 15로 제한
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals.min(MAX_PRECISION) as i32);
    (value * factor).round() / factor
}

/// 텍스트의 음운 지문 생성 (한글 음절이 없으면 None)
pub fn fingerprint(text: &str) -> Option<Fingerprint> {
    fingerprint_with_config(text, &AnalysisConfig::default())
}

/// 설정을 적용한 지문 생성
pub fn fingerprint_with_config(text: &str, config: &AnalysisConfig) -> Option<Fingerprint> {
    let analysis = analyze(text);
    fingerprint_from_analysis(text, &analysis, config)
}

/// 이미 계산된 분석 결과로 지문 생성
///
/// `analysis`는 반드시 같은 `text`를 `analyze`한 결과여야 합니다.
/// `text`는 행 단위 리듬 통계에만 쓰이고 나머지 값은 모두 `analysis`에서 나오므로,
/// 서로 다른 입력을 넘기면 두 출처가 섞인 지문이 됩니다.
pub fn fingerprint_from_analysis(
    text: &str,
    analysis: &AnalysisResult,
    config: &AnalysisConfig,
) -> Option<Fingerprint> {
    if analysis.is_empty() {
        log::debug!("한글 음절이 없어 지문을 만들지 않음");
        return None;
    }
    let total = analysis.total_syllables as f64;
    let ratio_precision = config.effective_ratio_precision();
    let ratio = |value: f64| round_to(value, ratio_precision);

    let harmony = &analysis.vowel_harmony;
    let polar = harmony.bright + harmony.dark;
    let brightness = (harmony.bright as f64 - harmony.dark as f64) / polar.max(1) as f64;

    let cho_counts: Vec<usize> = CHOSEONG.iter().map(|&c| analysis.cho_count(c)).collect();
    let jung_counts: Vec<usize> = JUNGSEONG.iter().map(|&c| analysis.jung_count(c)).collect();

    let (avg_line_length, rhythm_regularity) = line_rhythm(text);

    let fp = Fingerprint {
        total_syllables: analysis.total_syllables,
        brightness: ratio(brightness),
        weight: ratio(analysis.jong_ratio),
        rhythm_regularity: ratio(rhythm_regularity),
        avg_line_length: round_to(avg_line_length, config.effective_line_length_precision()),
        consonant_diversity: ratio(normalized_entropy(&cho_counts)),
        vowel_diversity: ratio(normalized_entropy(&jung_counts)),
        cho_profile: CHOSEONG
            .iter()
            .zip(&cho_counts)
            .map(|(&c, &n)| (c, ratio(n as f64 / total)))
            .collect(),
        jung_profile: JUNGSEONG
            .iter()
            .zip(&jung_counts)
            .map(|(&c, &n)| (c, ratio(n as f64 / total)))
            .collect(),
        top_cho: top_symbols(&analysis.cho_freq, config.top_n),
        top_jung: top_symbols(&analysis.jung_freq, config.top_n),
    };

    log::debug!(
        "지문: 밝기={} 무게={} 리듬={} 자음다양성={} 모음다양성={}",
        fp.brightness,
        fp.weight,
        fp.rhythm_regularity,
        fp.consonant_diversity,
        fp.vowel_diversity
    );
    Some(fp)
}

/// 빈도표 앞쪽 n개 자모
fn top_symbols(table: &FrequencyTable, n: usize) -> Vec<char> {
    table.iter().take(n).map(|&(c, _)| c).collect()
}

/// 행별 음절 수의 (평균, 규칙성)
///
/// 공백뿐인 행과 음절이 없는 행은 통계에서 제외
fn line_rhythm(text: &str) -> (f64, f64) {
    let counts: Vec<f64> = text
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.chars().filter(|&c| is_syllable(c)).count())
        .filter(|&n| n > 0)
        .map(|n| n as f64)
        .collect();

    if counts.is_empty() {
        return (0.0, 0.0);
    }

    let mean = counts.iter().sum::<f64>() / counts.len() as f64;
    if mean <= 0.0 {
        return (0.0, 0.0);
    }
    let variance = counts.iter().map(|n| (n - mean).powi(2)).sum::<f64>() / counts.len() as f64;
    let regularity = (1.0 - (variance.sqrt() / mean).min(1.0)).max(0.0);
    (mean, regularity)
}

/// 섀넌 엔트로피(밑 2)를 최대 엔트로피 log2(테이블 크기)로 나눈 값
fn normalized_entropy(counts: &[usize]) -> f64 {
    let total: usize = counts.iter().sum();
    if total == 0 || counts.len() < 2 {
        return 0.0;
    }
    let total = total as f64;
    let entropy: f64 = counts
        .iter()
        .filter(|&&n| n > 0)
        .map(|&n| {
            let p = n as f64 / total;
            p * (1.0 / p).log2()
        })
        .sum();
    (entropy / (counts.len() as f64).log2()).clamp(0.0, 1.0)
}
