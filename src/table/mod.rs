//! 언어별 점수 테이블
//!
//! 두 탐지 방식은 같은 구조의 JSON 테이블을 각각 사용합니다.
//!
//! ```json
//! {
//!   "en": { "the": 0.05, "and": 0.03 },
//!   "fr": { "le": 0.04, "la": 0.03 }
//! }
//! ```
//!
//! 언어 순서는 JSON 문서에 적힌 순서를 그대로 유지하며,
//! 동점일 때 어느 언어를 고를지가 이 순서로 결정됩니다.

mod model;

pub use model::{LanguageTable, ScoreMap, TableError};
