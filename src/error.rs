//! 입력/설정/출력 단계의 에러 타입
//!
//! 분석 코어는 에러를 내지 않고 `Option`으로 "해당 없음"을 표현합니다.
//! 이 타입은 파일 입출력, 설정 파싱, CLI 입력 검증에서만 사용됩니다.

use std::fmt;
use std::path::PathBuf;

/// 입출력 및 설정 에러
#[derive(Debug)]
pub enum PhoneticsError {
    /// 분석할 텍스트가 없음 (경로/인라인 텍스트 미지정 또는 빈 입력)
    MissingInput,
    /// 파일 읽기 실패
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// 설정 JSON 파싱 실패
    Config(String),
    /// JSON 보고서 직렬화 실패
    Serialize(String),
}

impl fmt::Display for PhoneticsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PhoneticsError::MissingInput => {
                write!(f, "분석할 텍스트가 없습니다 (파일 경로 또는 --text 를 지정하세요)")
            }
            PhoneticsError::Io { path, source } => {
                write!(f, "파일 읽기 오류 ({}): {}", path.display(), source)
            }
            PhoneticsError::Config(message) => write!(f, "설정 파싱 오류: {}", message),
            PhoneticsError::Serialize(message) => write!(f, "직렬화 실패: {}", message),
        }
    }
}

impl std::error::Error for PhoneticsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PhoneticsError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for PhoneticsError {
    fn from(e: serde_json::Error) -> Self {
        PhoneticsError::Serialize(e.to_string())
    }
}

/// 입력 텍스트가 없을 때의 종료 코드
pub const EXIT_MISSING_INPUT: u8 = 2;
/// 그 밖의 실패 종료 코드
pub const EXIT_FAILURE: u8 = 1;

impl PhoneticsError {
    /// CLI 종료 코드: 입력 없음은 2, 나머지는 1
    pub fn exit_code(&self) -> u8 {
        match self {
            PhoneticsError::MissingInput => EXIT_MISSING_INPUT,
            _ => EXIT_FAILURE,
        }
    }
}

/// 크레이트 공용 Result 별칭
pub type Result<T> = std::result::Result<T, PhoneticsError>;

/// 경로 정보를 붙여 파일을 문자열로 읽기
pub fn read_text_file(path: &std::path::Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| PhoneticsError::Io {
        path: path.to_path_buf(),
        source,
    })
}
