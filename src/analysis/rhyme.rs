//! 각운(중성+종성) 그룹 검출

use serde::Serialize;

use super::analyzer::{analyze, AnalysisResult};
use crate::config::AnalysisConfig;

/// 같은 각운 키를 공유하는 음절 묶음
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RhymeGroup {
    /// 중성 + 종성 (종성 없으면 중성만)
    pub key: String,
    /// 해당 음절들 (중복 포함, 출현 순서)
    pub syllables: Vec<char>,
}

impl RhymeGroup {
    pub fn len(&self) -> usize {
        self.syllables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.syllables.is_empty()
    }
}

/// 텍스트의 각운 그룹 검출 (2회 이상 출현한 키만)
pub fn find_rhymes(text: &str) -> Vec<RhymeGroup> {
    find_rhymes_with_config(text, &AnalysisConfig::default())
}

/// 설정을 적용한 각운 검출
pub fn find_rhymes_with_config(text: &str, config: &AnalysisConfig) -> Vec<RhymeGroup> {
    rhymes_from_analysis(&analyze(text), config.effective_min_rhyme_group())
}

/// 분석 결과에서 각운 그룹 생성
///
/// 그룹 크기 내림차순, 동률은 키가 처음 나온 순서
pub fn rhymes_from_analysis(analysis: &AnalysisResult, min_group: usize) -> Vec<RhymeGroup> {
    let mut groups: Vec<RhymeGroup> = Vec::new();

    for syllable in &analysis.syllables {
        let key = syllable.ending_key();
        match groups.iter_mut().find(|g| g.key == key) {
            Some(group) => group.syllables.push(syllable.syllable),
            None => groups.push(RhymeGroup {
                key,
                syllables: vec![syllable.syllable],
            }),
        }
    }

    groups.retain(|g| g.len() >= min_group);
    groups.sort_by(|a, b| b.len().cmp(&a.len()));
    log::debug!("각운 그룹 {}개 검출", groups.len());
    groups
}
