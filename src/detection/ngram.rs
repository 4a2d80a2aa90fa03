//! N-gram(트라이그램) 방식 탐지

use crate::core::trigram::make_trigrams;
use crate::table::LanguageTable;

use super::ranking::{rank, DetectError, Detection};

/// 트라이그램 일치 수로 언어별 점수를 계산
pub fn ngram_scores(text: &str, table: &LanguageTable) -> Result<Detection, DetectError> {
    let trigrams = make_trigrams(text);
    rank(&trigrams, table)
}

/// 트라이그램 테이블 기준으로 가장 많이 일치하는 언어 이름 반환
pub fn ngram_detection(text: &str, table: &LanguageTable) -> Result<String, DetectError> {
    ngram_scores(text, table).map(|d| d.language)
}
