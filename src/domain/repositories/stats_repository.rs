//! Repository trait for grouped admission statistics.

use crate::domain::criteria::AdmissionCriteria;
use crate::error::AppError;
use async_trait::async_trait;
use serde::Serialize;

/// Number of records sharing one cutoff score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreCount {
    pub score: f64,
    pub count: i64,
}

/// Number of records per school location.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocationCount {
    pub location: String,
    pub count: i64,
}

/// Number of records per major.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MajorCount {
    pub major: String,
    pub count: i64,
}

/// Average cutoff score of one year, rounded to the nearest integer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct YearAverage {
    pub year: i32,
    pub avg_score: i64,
}

/// Grouped aggregations backing the statistics charts.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgStatsRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StatsRepository: Send + Sync {
    /// Record counts per distinct non-null score, score ascending.
    async fn score_distribution(
        &self,
        criteria: &AdmissionCriteria,
    ) -> Result<Vec<ScoreCount>, AppError>;

    /// Record counts per location, most frequent first.
    async fn location_counts(
        &self,
        criteria: &AdmissionCriteria,
    ) -> Result<Vec<LocationCount>, AppError>;

    /// Record counts per major, most frequent first, at most `limit` entries.
    async fn major_counts(
        &self,
        criteria: &AdmissionCriteria,
        limit: i64,
    ) -> Result<Vec<MajorCount>, AppError>;

    /// Average score per year, year ascending. Years without scores report 0.
    async fn yearly_averages(
        &self,
        criteria: &AdmissionCriteria,
    ) -> Result<Vec<YearAverage>, AppError>;
}
