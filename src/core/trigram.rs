//! 문자 트라이그램 추출기
//!
//! 길이 3의 창을 한 글자씩 밀면서 부분 문자열을 만듭니다.
//! 창은 바이트가 아니라 문자(char) 단위이므로 다바이트 문자도 안전하게 잘립니다.

/// 트라이그램 길이
pub const TRIGRAM_LEN: usize = 3;

/// 텍스트의 모든 연속 3글자 부분 문자열을 시작 위치 순서대로 반환
///
/// 글자 수가 L이면 결과 길이는 `max(0, L - 2)` 입니다.
/// 공백, 구두점, 대소문자는 그대로 포함됩니다.
///
/// # Examples
/// ```
/// use langdetect::core::trigram::make_trigrams;
/// assert_eq!(make_trigrams("hello"), vec!["hel", "ell", "llo"]);
/// assert!(make_trigrams("ab").is_empty());
/// ```
pub fn make_trigrams(text: &str) -> Vec<&str> {
    // 각 문자의 시작 바이트 오프셋 + 끝 오프셋
    let boundaries: Vec<usize> = text
        .char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(text.len()))
        .collect();

    // boundaries에는 글자 수보다 하나 많은 원소가 있음
    boundaries
        .windows(TRIGRAM_LEN + 1)
        .map(|w| &text[w[0]..w[TRIGRAM_LEN]])
        .collect()
}
