//! 탐지 방식 구분

use crate::table::LanguageTable;

use super::counting::counting_scores;
use super::ngram::ngram_scores;
use super::ranking::{DetectError, Detection};

/// 탐지 방식
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// 빈도 단어 방식
    WordFrequency,
    /// 트라이그램 방식
    Ngram,
}

impl Method {
    /// 출력 시 사용하는 방식 이름
    pub fn label(self) -> &'static str {
        match self {
            Method::WordFrequency => "word-frequency",
            Method::Ngram => "n-gram",
        }
    }

    /// 해당 방식으로 탐지 실행
    pub fn detect(self, text: &str, table: &LanguageTable) -> Result<Detection, DetectError> {
        match self {
            Method::WordFrequency => counting_scores(text, table),
            Method::Ngram => ngram_scores(text, table),
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
