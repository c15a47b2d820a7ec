//! Score/rank resolution service.

use std::sync::Arc;

use crate::domain::entities::ScoreRankMapping;
use crate::domain::repositories::AdmissionRepository;
use crate::domain::score_rank::{PairOrder, nearest_by_rank, nearest_by_score};
use crate::error::AppError;

/// Maps a score to the nearest observed rank for a year, or the reverse.
///
/// Each call performs one store query followed by an in-memory linear scan.
/// Nothing is cached between calls.
pub struct ScoreRankService<R: AdmissionRepository> {
    repository: Arc<R>,
}

impl<R: AdmissionRepository> ScoreRankService<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Resolves the nearest observed (score, rank) pair.
    ///
    /// `score` takes precedence when both inputs are given. With neither, or
    /// when the year has no usable pairs, the mapping is empty.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn resolve(
        &self,
        year: i32,
        score: Option<f64>,
        rank: Option<i64>,
    ) -> Result<ScoreRankMapping, AppError> {
        let nearest = match (score, rank) {
            (Some(score), _) => {
                let pairs = self
                    .repository
                    .score_rank_pairs(year, PairOrder::ByScore)
                    .await?;
                nearest_by_score(&pairs, score)
            }
            (None, Some(rank)) => {
                let pairs = self
                    .repository
                    .score_rank_pairs(year, PairOrder::ByRank)
                    .await?;
                nearest_by_rank(&pairs, rank)
            }
            (None, None) => None,
        };

        metrics::counter!("score_rank_resolutions_total").increment(1);

        Ok(nearest.map(ScoreRankMapping::from).unwrap_or_default())
    }
}
