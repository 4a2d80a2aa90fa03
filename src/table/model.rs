//! 언어 테이블 로드 및 조회

use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// 언어 테이블 로드/파싱 에러
#[derive(Debug)]
pub enum TableError {
    /// 파일 읽기 실패
    IoError(std::io::Error),
    /// JSON 파싱 실패
    ParseError(String),
    /// 테이블 형식 오류
    FormatError(String),
    /// 언어가 하나도 없음
    Empty,
}

impl std::fmt::Display for TableError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TableError::IoError(e) => write!(f, "테이블 파일 읽기 오류: {}", e),
            TableError::ParseError(s) => write!(f, "JSON 파싱 오류: {}", s),
            TableError::FormatError(s) => write!(f, "테이블 형식 오류: {}", s),
            TableError::Empty => write!(f, "테이블에 언어가 없습니다"),
        }
    }
}

impl std::error::Error for TableError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TableError::IoError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for TableError {
    fn from(e: std::io::Error) -> Self {
        TableError::IoError(e)
    }
}

/// 한 언어의 키(단어 또는 트라이그램) -> 점수
///
/// 탐지는 키의 존재 여부만 사용하고 점수 값은 읽지 않습니다.
/// 숫자가 아닌 점수(`null`, 문자열 등)도 키로는 유효하며 점수만 `None`으로 남습니다.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScoreMap {
    scores: HashMap<String, Option<f64>>,
}

impl ScoreMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, score: impl Into<Option<f64>>) {
        self.scores.insert(key.into(), score.into());
    }

    /// 키 포함 여부
    pub fn contains(&self, key: &str) -> bool {
        self.scores.contains_key(key)
    }

    /// 키의 점수 조회 (키가 없거나 점수가 숫자가 아니면 None)
    pub fn score(&self, key: &str) -> Option<f64> {
        self.scores.get(key).copied().flatten()
    }

    #[cfg(test)]
    fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for ScoreMap {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        let mut map = ScoreMap::new();
        for (key, score) in iter {
            map.insert(key, score);
        }
        map
    }
}

/// 언어 이름 -> ScoreMap, 삽입 순서 유지
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LanguageTable {
    languages: Vec<(String, ScoreMap)>,
}

impl LanguageTable {
    /// 빈 테이블 생성
    pub fn new() -> Self {
        Self::default()
    }

    /// JSON 파일에서 테이블 로드
    ///
    /// 언어가 없는 테이블은 `TableError::Empty`로 거부합니다.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, TableError> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let reader = BufReader::new(file);

        let value: serde_json::Value = serde_json::from_reader(reader)
            .map_err(|e| TableError::ParseError(e.to_string()))?;

        let table = Self::from_json_value(&value)?;
        log::info!(
            "{}에서 언어 {}개 로드",
            path.display(),
            table.len()
        );
        Ok(table)
    }

    /// JSON 문자열에서 테이블 로드
    pub fn from_json(json_str: &str) -> Result<Self, TableError> {
        let value: serde_json::Value = serde_json::from_str(json_str)
            .map_err(|e| TableError::ParseError(e.to_string()))?;

        Self::from_json_value(&value)
    }

    /// serde_json::Value에서 테이블 생성
    fn from_json_value(value: &serde_json::Value) -> Result<Self, TableError> {
        let root = value
            .as_object()
            .ok_or_else(|| TableError::FormatError("최상위 값은 객체여야 합니다".into()))?;

        if root.is_empty() {
            return Err(TableError::Empty);
        }

        let mut table = LanguageTable::new();

        for (lang, entries) in root {
            let entries = entries.as_object().ok_or_else(|| {
                TableError::FormatError(format!("언어 '{}'의 값은 객체여야 합니다", lang))
            })?;

            let mut scores = ScoreMap::new();
            for (key, val) in entries {
                let score = val.as_f64();
                if score.is_none() {
                    log::debug!("{}: '{}' 점수가 숫자가 아님 ({})", lang, key, val);
                }
                scores.insert(key.as_str(), score);
            }

            table.insert(lang.as_str(), scores);
        }

        Ok(table)
    }

    /// 언어 추가
    ///
    /// 이미 있는 언어면 위치는 그대로 두고 내용만 교체합니다.
    pub fn insert(&mut self, language: impl Into<String>, scores: ScoreMap) {
        let language = language.into();
        match self.languages.iter().position(|(name, _)| *name == language) {
            Some(pos) => self.languages[pos].1 = scores,
            None => self.languages.push((language, scores)),
        }
    }

    /// 언어 이름으로 ScoreMap 조회
    #[cfg(test)]
    fn get(&self, language: &str) -> Option<&ScoreMap> {
        self.languages
            .iter()
            .find(|(name, _)| name == language)
            .map(|(_, scores)| scores)
    }

    /// (언어, ScoreMap)을 테이블 순서대로 순회
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ScoreMap)> {
        self.languages
            .iter()
            .map(|(name, scores)| (name.as_str(), scores))
    }

    /// 언어 이름 목록 (테이블 순서)
    #[cfg(test)]
    fn language_names(&self) -> Vec<&str> {
        self.iter().map(|(name, _)| name).collect()
    }

    /// 언어 수
    pub fn len(&self) -> usize {
        self.languages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }
}

impl<L: Into<String>> FromIterator<(L, ScoreMap)> for LanguageTable {
    fn from_iter<I: IntoIterator<Item = (L, ScoreMap)>>(iter: I) -> Self {
        let mut table = LanguageTable::new();
        for (language, scores) in iter {
            table.insert(language, scores);
        }
        table
    }
}
