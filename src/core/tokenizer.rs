//! 단어 토큰 분리기

/// 텍스트를 공백 문자(' ') 하나 기준으로 분리
///
/// 탭이나 개행은 구분자로 취급하지 않으며, 연속된 공백 사이의 빈 토큰도 그대로 유지합니다.
/// 대소문자 변환이나 구두점 제거는 하지 않습니다.
pub fn tokenize(text: &str) -> Vec<&str> {
    text.split(' ').collect()
}
