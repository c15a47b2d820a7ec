//! Repository trait for university-level lookups.

use crate::domain::entities::{MajorRanking, ScoreTrend, UniversityProfile, UniversitySummary};
use crate::error::AppError;
use async_trait::async_trait;

/// University catalog and profile data.
///
/// Universities are not a table of their own: summaries are derived from the
/// distinct university names in the admission data. Extended profiles and
/// major ratings live in optional side tables.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UniversityRepository: Send + Sync {
    /// One page of distinct universities, name ascending.
    async fn list(&self, offset: i64, limit: i64) -> Result<Vec<UniversitySummary>, AppError>;

    /// Number of distinct universities.
    async fn count(&self) -> Result<i64, AppError>;

    /// Universities whose name contains `keyword` (case-insensitive).
    async fn search(&self, keyword: &str, limit: i64) -> Result<Vec<UniversitySummary>, AppError>;

    /// Summary for an exact university name.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(summary))` if any admission record mentions the university
    /// - `Ok(None)` otherwise
    async fn find_summary(&self, name: &str) -> Result<Option<UniversitySummary>, AppError>;

    async fn find_profile(&self, name: &str) -> Result<Option<UniversityProfile>, AppError>;

    async fn major_rankings(&self, name: &str) -> Result<Vec<MajorRanking>, AppError>;

    /// Years with admission data for the university, newest first.
    async fn years(&self, name: &str) -> Result<Vec<i32>, AppError>;

    /// Per-year score aggregates, newest first.
    async fn score_trends(&self, name: &str) -> Result<Vec<ScoreTrend>, AppError>;

    /// Number of distinct (major, year) combinations.
    async fn count_major_years(&self, name: &str) -> Result<i64, AppError>;
}
