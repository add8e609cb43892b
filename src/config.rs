//! 분석 설정 로드 (JSON)

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{read_text_file, PhoneticsError, Result};

/// 각운으로 인정하는 최소 음절 수
const MIN_RHYME_GROUP_FLOOR: usize = 2;

/// 반올림 자릿수 상한 (f64 유효 자릿수)
pub const MAX_PRECISION: u32 = 15;

/// 지문 생성/비교 설정
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct AnalysisConfig {
    /// 상위 초성/중성 개수
    #[serde(default = "default_top_n")]
    pub top_n: usize,
    /// 비율/다양성/분포 소수점 자릿수
    #[serde(default = "default_ratio_precision")]
    pub ratio_precision: u32,
    /// 평균 행 길이 소수점 자릿수
    #[serde(default = "default_line_length_precision")]
    pub line_length_precision: u32,
    /// 유사도 소수점 자릿수
    #[serde(default = "default_similarity_precision")]
    pub similarity_precision: u32,
    /// 각운 그룹 최소 크기 (2 미만은 2로 취급)
    #[serde(default = "default_min_rhyme_group")]
    pub min_rhyme_group: usize,
}

fn default_top_n() -> usize {
    3
}

fn default_ratio_precision() -> u32 {
    3
}

fn default_line_length_precision() -> u32 {
    1
}

fn default_similarity_precision() -> u32 {
    4
}

fn default_min_rhyme_group() -> usize {
    MIN_RHYME_GROUP_FLOOR
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            top_n: default_top_n(),
            ratio_precision: default_ratio_precision(),
            line_length_precision: default_line_length_precision(),
            similarity_precision: default_similarity_precision(),
            min_rhyme_group: default_min_rhyme_group(),
        }
    }
}

impl AnalysisConfig {
    /// 기본 설정 생성
    pub fn new() -> Self {
        Self::default()
    }

    /// 상위 자모 개수 설정
    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    /// 비율 자릿수 설정
    pub fn with_ratio_precision(mut self, decimals: u32) -> Self {
        self.ratio_precision = decimals;
        self
    }

    /// 평균 행 길이 자릿수 설정
    pub fn with_line_length_precision(mut self, decimals: u32) -> Self {
        self.line_length_precision = decimals;
        self
    }

    /// 유사도 자릿수 설정
    pub fn with_similarity_precision(mut self, decimals: u32) -> Self {
        self.similarity_precision = decimals;
        self
    }

    /// 각운 최소 그룹 크기 설정
    pub fn with_min_rhyme_group(mut self, size: usize) -> Self {
        self.min_rhyme_group = size;
        self
    }

    /// 실제 적용되는 각운 최소 크기
    pub fn effective_min_rhyme_group(&self) -> usize {
        self.min_rhyme_group.max(MIN_RHYME_GROUP_FLOOR)
    }

    /// 실제 적용되는 비율 자릿수 (최대 15)
    pub fn effective_ratio_precision(&self) -> u32 {
        self.ratio_precision.min(MAX_PRECISION)
    }

    /// 실제 적용되는 평균 행 길이 자릿수 (최대 15)
    pub fn effective_line_length_precision(&self) -> u32 {
        self.line_length_precision.min(MAX_PRECISION)
    }

    /// 실제 적용되는 유사도 자릿수 (최대 15)
    pub fn effective_similarity_precision(&self) -> u32 {
        self.similarity_precision.min(MAX_PRECISION)
    }
}

/// JSON 문자열에서 설정 파싱
pub fn parse_config(json: &str) -> Result<AnalysisConfig> {
    serde_json::from_str(json).map_err(|e| PhoneticsError::Config(e.to_string()))
}

/// 설정 파일 로드
pub fn load_config(path: &Path) -> Result<AnalysisConfig> {
    let content = read_text_file(path)?;
    parse_config(&content)
}

/// 설정 파일 로드 (실패 시 경고 후 기본값)
pub fn load_config_or_default(path: &Path) -> AnalysisConfig {
    match load_config(path) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("설정을 불러오지 못해 기본값을 사용합니다: {}", e);
            AnalysisConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AnalysisConfig::default();
        assert_eq!(config.top_n, 3);
        assert_eq!(config.ratio_precision, 3);
        assert_eq!(config.line_length_precision, 1);
        assert_eq!(config.similarity_precision, 4);
        assert_eq!(config.min_rhyme_group, 2);
    }

    #[test]
    fn test_builder_pattern() {
        let config = AnalysisConfig::new()
            .with_top_n(5)
            .with_ratio_precision(2)
            .with_similarity_precision(6)
            .with_min_rhyme_group(3);
        assert_eq!(config.top_n, 5);
        assert_eq!(config.ratio_precision, 2);
        assert_eq!(config.similarity_precision, 6);
        assert_eq!(config.effective_min_rhyme_group(), 3);
    }

    #[test]
    fn test_min_rhyme_group_floor() {
        let config = AnalysisConfig::new().with_min_rhyme_group(0);
        assert_eq!(config.effective_min_rhyme_group(), 2);
    }

    #[test]
    fn test_precision_ceiling() {
        let config = parse_config(
            r#"{"ratio_precision": 400, "line_length_precision": 4294967295, "similarity_precision": 16}"#,
        )
        .unwrap();
        assert_eq!(config.effective_ratio_precision(), MAX_PRECISION);
        assert_eq!(config.effective_line_length_precision(), MAX_PRECISION);
        assert_eq!(config.effective_similarity_precision(), MAX_PRECISION);

        let config = AnalysisConfig::new().with_line_length_precision(2);
        assert_eq!(config.line_length_precision, 2);
        assert_eq!(config.effective_line_length_precision(), 2);
    }

    #[test]
    fn test_load_config_from_file() {
        let path = std::env::temp_dir().join(format!(
            "hangul-phonetics-config-{}.json",
            std::process::id()
        ));
        let config = AnalysisConfig::new().with_top_n(5).with_similarity_precision(2);
        std::fs::write(&path, serde_json::to_string_pretty(&config).unwrap()).unwrap();

        let loaded = load_config(&path);
        let _ = std::fs::remove_file(&path);
        assert_eq!(loaded.unwrap(), config);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config = parse_config(r#"{"top_n": 5}"#).unwrap();
        assert_eq!(config.top_n, 5);
        assert_eq!(config.ratio_precision, 3);
        assert_eq!(config.similarity_precision, 4);
    }

    #[test]
    fn test_invalid_json() {
        let result = parse_config(r#"{"top_n": "many"}"#);
        assert!(matches!(result, Err(PhoneticsError::Config(_))));
    }

    #[test]
    fn test_missing_file_falls_back() {
        let config = load_config_or_default(Path::new("/nonexistent/config.json"));
        assert_eq!(config, AnalysisConfig::default());
    }
}
