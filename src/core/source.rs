//! 입력 텍스트 파일 읽기

use std::fs;
use std::io;
use std::path::Path;

/// UTF-8 텍스트 파일을 통째로 읽고 줄바꿈을 `\n`으로 통일
pub fn read_text<P: AsRef<Path>>(path: P) -> io::Result<String> {
    let raw = fs::read_to_string(path)?;
    Ok(normalize_newlines(&raw))
}

/// `\r\n`과 단독 `\r`을 `\n`으로 변환
pub fn normalize_newlines(text: &str) -> String {
    if !text.contains('\r') {
        return text.to_string();
    }
    text.replace("\r\n", "\n").replace('\r', "\n")
}
