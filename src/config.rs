//! 설정 파일 로드 (JSON)

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// 설정 파일 경로를 지정하는 환경 변수
pub const CONFIG_ENV: &str = "LANGDETECT_CONFIG";

/// 기본 설정 파일 이름 (작업 디렉토리 기준)
pub const DEFAULT_CONFIG_FILE: &str = "langdetect.json";

/// langdetect 설정
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct LangDetectConfig {
    /// 빈도 단어 방식 테이블 경로
    #[serde(default = "default_count_table_path")]
    pub count_table_path: PathBuf,
    /// N-gram 방식 테이블 경로
    #[serde(default = "default_ngram_table_path")]
    pub ngram_table_path: PathBuf,
}

fn default_count_table_path() -> PathBuf {
    PathBuf::from("data/count_method.json")
}

fn default_ngram_table_path() -> PathBuf {
    PathBuf::from("data/ngrams_method.json")
}

impl Default for LangDetectConfig {
    fn default() -> Self {
        Self {
            count_table_path: default_count_table_path(),
            ngram_table_path: default_ngram_table_path(),
        }
    }
}

impl LangDetectConfig {
    /// 새 설정 생성
    pub fn new() -> Self {
        Self::default()
    }

    /// 단어 테이블 경로 설정
    pub fn with_count_table_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.count_table_path = path.into();
        self
    }

    /// 트라이그램 테이블 경로 설정
    pub fn with_ngram_table_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.ngram_table_path = path.into();
        self
    }
}

/// 설정 파일 경로: $LANGDETECT_CONFIG 또는 ./langdetect.json
pub fn config_path() -> PathBuf {
    std::env::var_os(CONFIG_ENV)
        .filter(|p| !p.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE))
}

/// 설정 파일 로드 (파일 없거나 파싱 실패 시 기본값)
pub fn load_config() -> LangDetectConfig {
    load_config_from(&config_path())
}

/// 지정 경로에서 설정 로드
pub fn load_config_from(path: &std::path::Path) -> LangDetectConfig {
    match fs::read_to_string(path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
            log::warn!("설정 파일 파싱 실패, 기본값 사용 ({}): {}", path.display(), e);
            LangDetectConfig::default()
        }),
        Err(_) => LangDetectConfig::default(),
    }
}
