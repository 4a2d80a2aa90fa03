//! 빈도 단어 방식 탐지

use crate::core::tokenizer::tokenize;
use crate::table::LanguageTable;

use super::ranking::{rank, DetectError, Detection};

/// 토큰 일치 수로 언어별 점수를 계산
pub fn counting_scores(text: &str, table: &LanguageTable) -> Result<Detection, DetectError> {
    let tokens = tokenize(text);
    rank(&tokens, table)
}

/// 단어 테이블 기준으로 가장 많이 일치하는 언어 이름 반환
pub fn counting_detection(text: &str, table: &LanguageTable) -> Result<String, DetectError> {
    counting_scores(text, table).map(|d| d.language)
}
