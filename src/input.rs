//! 분석할 텍스트 결정 (인라인 텍스트 또는 파일)

use std::path::Path;

use crate::error::{read_text_file, PhoneticsError, Result};

/// 인라인 텍스트가 있으면 우선, 없으면 파일 내용
///
/// 둘 다 없거나 결과가 공백뿐이면 `MissingInput`
pub fn resolve_text(inline: Option<&str>, path: Option<&Path>) -> Result<String> {
    let text = match (inline, path) {
        (Some(text), _) => text.to_string(),
        (None, Some(path)) => {
            log::debug!("입력 파일: {}", path.display());
            read_text_file(path)?
        }
        (None, None) => return Err(PhoneticsError::MissingInput),
    };

    if text.trim().is_empty() {
        return Err(PhoneticsError::MissingInput);
    }
    Ok(text)
}
