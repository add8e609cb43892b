//! 분석 보고서 조립 및 텍스트 렌더링

use serde::Serialize;

use crate::analysis::analyzer::{analyze, AnalysisResult, FrequencyTable, VowelHarmony};
use crate::analysis::harmony::{vowel_harmony_analysis, HarmonyWord};
use crate::analysis::rhyme::{rhymes_from_analysis, RhymeGroup};
use crate::analysis::structure::structural_pattern;
use crate::config::AnalysisConfig;
use crate::fingerprint::compare::compare_fingerprints;
use crate::fingerprint::generator::{fingerprint_from_analysis, fingerprint_with_config, Fingerprint};

/// 출력할 보고서 범위
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportMode {
    /// 개요, 지문, 각운, 구조 모두
    All,
    FingerprintOnly,
    RhymeOnly,
    StructureOnly,
}

impl ReportMode {
    fn includes_overview(self) -> bool {
        self == ReportMode::All
    }

    fn includes_fingerprint(self) -> bool {
        matches!(self, ReportMode::All | ReportMode::FingerprintOnly)
    }

    fn includes_rhymes(self) -> bool {
        matches!(self, ReportMode::All | ReportMode::RhymeOnly)
    }

    fn includes_structure(self) -> bool {
        matches!(self, ReportMode::All | ReportMode::StructureOnly)
    }
}

/// 분석 개요 (음절 목록 제외)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Overview {
    pub total_syllables: usize,
    pub with_jong: usize,
    pub without_jong: usize,
    pub jong_ratio: f64,
    pub cho_freq: FrequencyTable,
    pub jung_freq: FrequencyTable,
    pub jong_freq: FrequencyTable,
    pub vowel_harmony: VowelHarmony,
}

impl From<&AnalysisResult> for Overview {
    fn from(a: &AnalysisResult) -> Self {
        Self {
            total_syllables: a.total_syllables,
            with_jong: a.with_jong,
            without_jong: a.without_jong,
            jong_ratio: a.jong_ratio,
            cho_freq: a.cho_freq.clone(),
            jung_freq: a.jung_freq.clone(),
            jong_freq: a.jong_freq.clone(),
            vowel_harmony: a.vowel_harmony,
        }
    }
}

/// 구조 섹션: 음절 구조 + 어절별 모음조화
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StructureSection {
    pub pattern: String,
    pub harmony: Vec<HarmonyWord>,
}

/// 다른 텍스트와의 비교 결과 (None = 비교 불가)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comparison {
    pub similarity: Option<f64>,
}

/// 선택된 섹션을 담은 보고서
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overview: Option<Overview>,
    /// 지문 섹션 선택 시 Some(None)은 "음절 없음"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fingerprint: Option<Option<Fingerprint>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rhymes: Option<Vec<RhymeGroup>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub structure: Option<StructureSection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comparison: Option<Comparison>,
}

/// 텍스트 한 번 분석으로 선택된 섹션을 모두 계산
pub fn build_report(
    text: &str,
    mode: ReportMode,
    other: Option<&str>,
    config: &AnalysisConfig,
) -> Report {
    let analysis = analyze(text);
    let fp = fingerprint_from_analysis(text, &analysis, config);

    let comparison = other.map(|other_text| Comparison {
        similarity: match (&fp, fingerprint_with_config(other_text, config)) {
            (Some(a), Some(b)) => Some(compare_fingerprints(a, &b, config)),
            _ => None,
        },
    });

    Report {
        overview: mode.includes_overview().then(|| Overview::from(&analysis)),
        fingerprint: mode.includes_fingerprint().then(|| fp.clone()),
        rhymes: mode
            .includes_rhymes()
            .then(|| rhymes_from_analysis(&analysis, config.effective_min_rhyme_group())),
        structure: mode.includes_structure().then(|| StructureSection {
            pattern: structural_pattern(text),
            harmony: vowel_harmony_analysis(text),
        }),
        comparison,
    }
}

fn format_freq(table: &FrequencyTable) -> String {
    if table.is_empty() {
        return "-".to_string();
    }
    table
        .iter()
        .map(|(c, n)| format!("{}:{}", c, n))
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_symbols(symbols: &[char]) -> String {
    symbols.iter().map(|c| c.to_string()).collect::<Vec<_>>().join(", ")
}

/// 개요 섹션
pub fn render_overview(overview: &Overview) -> String {
    let harmony = &overview.vowel_harmony;
    [
        "== 음운 분석 ==".to_string(),
        format!("음절 수: {}", overview.total_syllables),
        format!(
            "받침: 있음 {} / 없음 {} (비율 {:.3})",
            overview.with_jong, overview.without_jong, overview.jong_ratio
        ),
        format!("초성: {}", format_freq(&overview.cho_freq)),
        format!("중성: {}", format_freq(&overview.jung_freq)),
        format!("종성: {}", format_freq(&overview.jong_freq)),
        format!(
            "모음조화: 양성 {} / 음성 {} / 중성 {} ({})",
            harmony.bright,
            harmony.dark,
            harmony.neutral,
            harmony.tendency.label()
        ),
    ]
    .join("\n")
}

/// 지문 섹션
pub fn render_fingerprint(fp: Option<&Fingerprint>) -> String {
    let Some(fp) = fp else {
        return "== 음운 지문 ==\n한글 음절이 없습니다".to_string();
    };
    [
        "== 음운 지문 ==".to_string(),
        format!("음절 수: {}", fp.total_syllables),
        format!("밝기: {}", fp.brightness),
        format!("무게: {}", fp.weight),
        format!("리듬 규칙성: {}", fp.rhythm_regularity),
        format!("평균 행 길이: {}", fp.avg_line_length),
        format!("자음 다양성: {}", fp.consonant_diversity),
        format!("모음 다양성: {}", fp.vowel_diversity),
        format!("상위 초성: {}", format_symbols(&fp.top_cho)),
        format!("상위 중성: {}", format_symbols(&fp.top_jung)),
    ]
    .join("\n")
}

/// 각운 섹션
pub fn render_rhymes(rhymes: &[RhymeGroup]) -> String {
    let mut lines = vec!["== 각운 ==".to_string()];
    if rhymes.is_empty() {
        lines.push("반복되는 각운이 없습니다".to_string());
    }
    for group in rhymes {
        lines.push(format!(
            "{} ({}): {}",
            group.key,
            group.len(),
            format_symbols(&group.syllables)
        ));
    }
    lines.join("\n")
}

/// 구조 섹션
pub fn render_structure(section: &StructureSection) -> String {
    let mut lines = vec!["== 음절 구조 ==".to_string(), section.pattern.clone()];
    lines.push("== 모음조화 패턴 ==".to_string());
    for word in &section.harmony {
        lines.push(format!("{}\t{}", word.word, word.pattern));
    }
    lines.join("\n")
}

/// 비교 섹션
pub fn render_comparison(comparison: &Comparison) -> String {
    match comparison.similarity {
        Some(score) => format!("== 유사도 ==\n{}", score),
        None => "== 유사도 ==\n비교할 수 없습니다 (한글 음절 없음)".to_string(),
    }
}

/// 보고서 전체를 텍스트로 렌더링 (섹션 사이 빈 줄)
pub fn render_text(report: &Report) -> String {
    let mut sections = Vec::new();
    if let Some(overview) = &report.overview {
        sections.push(render_overview(overview));
    }
    if let Some(fp) = &report.fingerprint {
        sections.push(render_fingerprint(fp.as_ref()));
    }
    if let Some(rhymes) = &report.rhymes {
        sections.push(render_rhymes(rhymes));
    }
    if let Some(structure) = &report.structure {
        sections.push(render_structure(structure));
    }
    if let Some(comparison) = &report.comparison {
        sections.push(render_comparison(comparison));
    }
    sections.join("\n\n")
}

/// 보고서를 JSON으로 직렬화
pub fn render_json(report: &Report) -> crate::error::Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}
