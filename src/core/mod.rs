//! 입력 텍스트 전처리: 토큰 분리, 트라이그램 추출, 파일 읽기

pub mod source;
pub mod tokenizer;
pub mod trigram;
