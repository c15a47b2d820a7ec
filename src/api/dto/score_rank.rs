//! DTOs for the score/rank mapping endpoint.

use serde::Deserialize;
use serde_with::{NoneAsEmptyString, serde_as};

/// `GET /api/admission/score-rank-mapping?year=2025&score=600`
///
/// `year` is optional here so the handler can answer a missing year with a
/// validation error instead of a generic query rejection.
#[serde_as]
#[derive(Debug, Deserialize)]
pub struct ScoreRankQuery {
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub year: Option<i32>,

    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub score: Option<f64>,

    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub rank: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_strings_and_blanks() {
        let q: ScoreRankQuery =
            serde_json::from_str(r#"{"year":"2025","score":"493.5","rank":""}"#).unwrap();
        assert_eq!(q.year, Some(2025));
        assert_eq!(q.score, Some(493.5));
        assert_eq!(q.rank, None);
    }

    #[test]
    fn test_missing_fields_are_none() {
        let q: ScoreRankQuery = serde_json::from_str("{}").unwrap();
        assert!(q.year.is_none() && q.score.is_none() && q.rank.is_none());
    }
}
