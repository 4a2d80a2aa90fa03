//! 언어 탐지
//!
//! 두 가지 독립적인 휴리스틱을 제공합니다:
//!
//! 1. **빈도 단어 방식** (`counting`): 공백으로 나눈 토큰이 각 언어의 단어 테이블에 몇 개 있는지 셈
//! 2. **N-gram 방식** (`ngram`): 문자 트라이그램이 각 언어의 트라이그램 테이블에 몇 개 있는지 셈
//!
//! 두 방식 모두 일치 수가 가장 많은 언어를 고르며, 동점이면 테이블에서 먼저 나온 언어를 택합니다.
//! 테이블의 점수 값은 사용하지 않고 키의 존재 여부만 셉니다.
//!
//! ```
//! use langdetect::detection::{counting_detection, ngram_detection};
//! use langdetect::table::LanguageTable;
//!
//! let words = LanguageTable::from_json(r#"{"en": {"the": 1, "a": 1}, "fr": {"le": 1, "la": 1}}"#).unwrap();
//! assert_eq!(counting_detection("the a cat", &words).unwrap(), "en");
//!
//! let trigrams = LanguageTable::from_json(r#"{"en": {"the": 1}, "fr": {"les": 1}}"#).unwrap();
//! assert_eq!(ngram_detection("the", &trigrams).unwrap(), "en");
//! ```

mod counting;
mod method;
mod ngram;
mod ranking;

pub use counting::{counting_detection, counting_scores};
pub use method::Method;
pub use ngram::{ngram_detection, ngram_scores};
pub use ranking::{count_matches, rank, DetectError, Detection};
