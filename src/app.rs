//! 실행 흐름: 입력 파일과 두 테이블을 읽어 두 방식의 결과를 만든다

use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};

use clap::Parser;

use crate::config::LangDetectConfig;
use crate::core::source::read_text;
use crate::detection::{DetectError, Detection, Method};
use crate::table::{LanguageTable, TableError};

/// 명령행 인자
///
/// 경로는 `PathBuf`로 받으므로 UTF-8이 아닌 파일 이름도 그대로 열 수 있습니다.
/// 첫 번째 인자 뒤의 값은 무시합니다.
#[derive(Parser, Debug)]
#[command(
    name = "langdetect",
    version,
    about = "빈도 단어 / 트라이그램 방식으로 텍스트 파일의 언어를 판별합니다"
)]
pub struct Cli {
    /// 판별할 UTF-8 텍스트 파일
    #[arg(value_name = "TEXT_FILE")]
    pub text_file: PathBuf,

    /// 사용하지 않는 나머지 인자
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    pub ignored: Vec<OsString>,
}

/// 실행 에러
#[derive(Debug)]
pub enum AppError {
    /// 입력 텍스트 읽기 실패
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// 테이블 로드 실패
    Table {
        path: PathBuf,
        source: TableError,
    },
    /// 탐지 실패
    Detect(DetectError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Io { path, source } => {
                write!(f, "{}: 입력 파일 읽기 오류: {}", path.display(), source)
            }
            AppError::Table { path, source } => write!(f, "{}: {}", path.display(), source),
            AppError::Detect(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Io { source, .. } => Some(source),
            AppError::Table { source, .. } => Some(source),
            AppError::Detect(e) => Some(e),
        }
    }
}

impl From<DetectError> for AppError {
    fn from(e: DetectError) -> Self {
        AppError::Detect(e)
    }
}

/// 두 방식의 탐지 결과
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub word_frequency: Detection,
    pub ngram: Detection,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Result for the {} method: {}",
            Method::WordFrequency,
            self.word_frequency.language
        )?;
        write!(f, "Result for the {} method: {}", Method::Ngram, self.ngram.language)
    }
}

/// 이미 읽은 텍스트와 테이블로 두 방식 실행
pub fn detect_both(
    text: &str,
    count_table: &LanguageTable,
    ngram_table: &LanguageTable,
) -> Result<Report, AppError> {
    let word_frequency = Method::WordFrequency.detect(text, count_table)?;
    let ngram = Method::Ngram.detect(text, ngram_table)?;

    Ok(Report {
        word_frequency,
        ngram,
    })
}

fn load_table(path: &Path) -> Result<LanguageTable, AppError> {
    LanguageTable::load(path).map_err(|source| AppError::Table {
        path: path.to_path_buf(),
        source,
    })
}

/// 입력 파일과 설정의 두 테이블을 읽어 탐지 실행
///
/// 출력 전에 모든 파일을 읽으므로, 실패 시 부분 결과는 없습니다.
pub fn run(text_path: &Path, config: &LangDetectConfig) -> Result<Report, AppError> {
    let text = read_text(text_path).map_err(|source| AppError::Io {
        path: text_path.to_path_buf(),
        source,
    })?;

    let count_table = load_table(&config.count_table_path)?;
    let ngram_table = load_table(&config.ngram_table_path)?;

    detect_both(&text, &count_table, &ngram_table)
}
