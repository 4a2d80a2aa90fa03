//! 언어별 일치 수 집계 및 최댓값 선택

use crate::table::{LanguageTable, ScoreMap};

/// 탐지 에러
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetectError {
    /// 비교할 언어가 없음
    EmptyTable,
}

impl std::fmt::Display for DetectError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DetectError::EmptyTable => write!(f, "언어 테이블이 비어 있어 선택할 언어가 없습니다"),
        }
    }
}

impl std::error::Error for DetectError {}

/// 탐지 결과
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Detection {
    /// 일치 수가 가장 많은 언어
    pub language: String,
    /// 언어별 일치 수 (테이블 순서)
    pub counts: Vec<(String, usize)>,
}

impl Detection {
    /// 특정 언어의 일치 수
    pub fn count_for(&self, language: &str) -> Option<usize> {
        self.counts
            .iter()
            .find(|(name, _)| name == language)
            .map(|(_, count)| *count)
    }

    /// 선택된 언어의 일치 수
    pub fn best_count(&self) -> usize {
        self.count_for(&self.language).unwrap_or(0)
    }
}

/// 특징(토큰 또는 트라이그램) 중 ScoreMap에 키로 존재하는 것의 개수
///
/// 중복된 특징은 나올 때마다 셉니다.
pub fn count_matches(features: &[&str], scores: &ScoreMap) -> usize {
    features.iter().filter(|f| scores.contains(f)).count()
}

/// 테이블의 모든 언어에 대해 일치 수를 세고 최댓값 언어를 선택
///
/// 한 번의 순회로 처리하며, 엄격히 더 큰 값일 때만 갱신하므로
/// 동점이면 테이블에서 먼저 나온 언어가 남습니다.
pub fn rank(features: &[&str], table: &LanguageTable) -> Result<Detection, DetectError> {
    let mut counts = Vec::with_capacity(table.len());
    let mut best: Option<(usize, usize)> = None; // (index, count)

    for (index, (language, scores)) in table.iter().enumerate() {
        let count = count_matches(features, scores);
        log::debug!("{}: 일치 {}개", language, count);

        if best.map_or(true, |(_, top)| count > top) {
            best = Some((index, count));
        }
        counts.push((language.to_string(), count));
    }

    let (index, _) = best.ok_or(DetectError::EmptyTable)?;
    Ok(Detection {
        language: counts[index].0.clone(),
        counts,
    })
}
