//! Repository trait for admission records.

use crate::domain::criteria::{AdmissionCriteria, QueryOptions};
use crate::domain::entities::{AdmissionRecord, ScoreRankPair};
use crate::domain::score_rank::PairOrder;
use crate::error::AppError;
use async_trait::async_trait;

/// Read access to the admission record store.
///
/// All operations are read-only and safe to cancel mid-flight.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgAdmissionRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AdmissionRepository: Send + Sync {
    /// Returns records matching `criteria`, ordered and paged by `options`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_many(
        &self,
        criteria: &AdmissionCriteria,
        options: &QueryOptions,
    ) -> Result<Vec<AdmissionRecord>, AppError>;

    /// Counts records matching `criteria`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn count(&self, criteria: &AdmissionCriteria) -> Result<i64, AppError>;

    /// Returns every valid (score, rank) pair observed in `year`.
    ///
    /// Records missing either value, or holding values that do not parse as
    /// numbers, are skipped. Pairs are ordered by the field named in `order`
    /// ascending, then by record id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn score_rank_pairs(
        &self,
        year: i32,
        order: PairOrder,
    ) -> Result<Vec<ScoreRankPair>, AppError>;

    /// Distinct admission years, newest first.
    async fn distinct_years(&self) -> Result<Vec<i32>, AppError>;

    /// Distinct school locations, alphabetical.
    async fn distinct_locations(&self) -> Result<Vec<String>, AppError>;
}
