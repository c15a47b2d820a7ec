//! Admission record entity and the normalized score/rank pair.

use serde::Serialize;

/// One row of historical admission data: a university + major + year + track
/// with its cutoff score and rank.
///
/// Owned by the record store; the application never mutates it.
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct AdmissionRecord {
    pub id: i64,
    pub year: i32,
    pub university_name: String,
    pub university_code: String,
    pub category: String,
    pub batch: String,
    pub subject_requirement: String,
    pub major: String,
    pub major_code: String,
    pub major_group: Option<String>,
    pub major_note: Option<String>,
    pub admission_count: Option<i32>,
    pub min_score: Option<f64>,
    pub min_rank: Option<i64>,
    pub school_location: String,
    pub school_nature: String,
    #[serde(rename = "is985")]
    #[sqlx(rename = "is_985")]
    pub is_985: bool,
    #[serde(rename = "is211")]
    #[sqlx(rename = "is_211")]
    pub is_211: bool,
}

/// Input data for inserting a record (used by the import tooling).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewAdmissionRecord {
    pub year: i32,
    pub university_name: String,
    pub university_code: String,
    pub category: String,
    pub batch: String,
    pub subject_requirement: String,
    pub major: String,
    pub major_code: String,
    pub major_group: Option<String>,
    pub major_note: Option<String>,
    pub admission_count: Option<i32>,
    pub min_score: Option<f64>,
    pub min_rank: Option<i64>,
    pub school_location: String,
    pub school_nature: String,
    pub is_985: bool,
    pub is_211: bool,
}

/// A validated (cutoff score, cutoff rank) observation for one year.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreRankPair {
    pub score: f64,
    pub rank: i64,
}

impl ScoreRankPair {
    /// Builds a pair from raw stored values.
    ///
    /// Legacy imports stored some numeric columns as text, so both sides are
    /// accepted as numbers or numeric strings. Returns `None` when either side
    /// is absent or does not parse to a finite number.
    pub fn from_raw(score: Option<&str>, rank: Option<&str>) -> Option<Self> {
        let score = parse_score(score?)?;
        let rank = parse_rank(rank?)?;
        Some(Self { score, rank })
    }
}

fn parse_score(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Ranks are integral; decimal text is truncated toward zero.
fn parse_rank(raw: &str) -> Option<i64> {
    let raw = raw.trim();
    if let Ok(rank) = raw.parse::<i64>() {
        return Some(rank);
    }
    raw.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && v.abs() < i64::MAX as f64)
        .map(|v| v.trunc() as i64)
}

/// Result of a score/rank lookup. Both fields are absent when nothing matched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ScoreRankMapping {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rank: Option<i64>,
}

impl ScoreRankMapping {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.score.is_none() && self.rank.is_none()
    }
}

impl From<ScoreRankPair> for ScoreRankMapping {
    fn from(pair: ScoreRankPair) -> Self {
        Self {
            score: Some(pair.score),
            rank: Some(pair.rank),
        }
    }
}
