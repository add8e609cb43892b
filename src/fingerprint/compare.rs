//! 지문 간 코사인 유사도

use super::generator::{fingerprint_with_config, round_to, Fingerprint};
use crate::config::AnalysisConfig;

impl Fingerprint {
    /// 비교용 특징 벡터
    ///
    /// 초성 분포(19) + 중성 분포(21) + [밝기, 무게, 리듬 규칙성]
    /// 다양성 점수는 포함하지 않음
    pub fn feature_vector(&self) -> Vec<f64> {
        self.cho_profile
            .iter()
            .chain(&self.jung_profile)
            .map(|&(_, share)| share)
            .chain([self.brightness, self.weight, self.rhythm_regularity])
            .collect()
    }

    /// 다른 지문과의 코사인 유사도 (반올림 전 값)
    pub fn similarity(&self, other: &Fingerprint) -> f64 {
        cosine_similarity(&self.feature_vector(), &other.feature_vector())
    }
}

/// 코사인 유사도. 어느 한쪽의 크기가 0이면 0
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    let dot: f64 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a = a.iter().map(|x| x * x).sum::<f64>().sqrt();
    let norm_b = b.iter().map(|x| x * x).sum::<f64>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot / (norm_a * norm_b)
}

/// 두 텍스트의 음운 유사도 (어느 쪽이든 한글 음절이 없으면 None)
pub fn compare(text_a: &str, text_b: &str) -> Option<f64> {
    compare_with_config(text_a, text_b, &AnalysisConfig::default())
}

/// 설정을 적용한 유사도 계산
pub fn compare_with_config(text_a: &str, text_b: &str, config: &AnalysisConfig) -> Option<f64> {
    let a = fingerprint_with_config(text_a, config)?;
    let b = fingerprint_with_config(text_b, config)?;
    Some(compare_fingerprints(&a, &b, config))
}

/// 이미 계산된 두 지문의 유사도
pub fn compare_fingerprints(a: &Fingerprint, b: &Fingerprint, config: &AnalysisConfig) -> f64 {
    let score = round_to(a.similarity(b), config.effective_similarity_precision());
    log::debug!("유사도: {}", score);
    score
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fingerprint::generator::fingerprint;

    #[test]
    fn test_feature_vector_shape() {
        let fp = fingerprint("한글").unwrap();
        let v = fp.feature_vector();
        assert_eq!(v.len(), 19 + 21 + 3);
        assert_eq!(v[40], fp.brightness);
        assert_eq!(v[41], fp.weight);
        assert_eq!(v[42], fp.rhythm_regularity);
    }

    #[test]
    fn test_identical_texts() {
        let text = "나 보기가 역겨워\n가실 때에는\n말없이 고이 보내 드리우리다";
        assert_eq!(compare(text, text), Some(1.0));
    }

    #[test]
    fn test_no_hangul() {
        assert_eq!(compare("Hello", "World"), None);
        assert_eq!(compare("안녕", "World"), None);
        assert_eq!(compare("", "안녕"), None);
    }

    #[test]
    fn test_symmetry_and_range() {
        let a = "가나다라마바사";
        let b = "어두운 밤거리에 불빛";
        let ab = compare(a, b).unwrap();
        let ba = compare(b, a).unwrap();
        assert_eq!(ab, ba);
        assert!((0.0..1.0).contains(&ab));
    }

    #[test]
    fn test_cosine_zero_vector() {
        assert_eq!(cosine_similarity(&[0.0, 0.0], &[1.0, 2.0]), 0.0);
        assert_eq!(cosine_similarity(&[1.0, 0.0], &[0.0, 1.0]), 0.0);
        assert!((cosine_similarity(&[1.0, 2.0], &[2.0, 4.0]) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_oversized_similarity_precision() {
        let config = crate::config::parse_config(
            r#"{"ratio_precision": 400, "similarity_precision": 4294967295}"#,
        )
        .unwrap();
        let score = compare_with_config("한글 사랑", "한글 사랑", &config).unwrap();
        assert!((score - 1.0).abs() < 1e-12);
    }
}
