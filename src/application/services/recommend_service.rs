//! Reach / match / safety recommendation service.

use std::sync::Arc;

use crate::domain::criteria::{AdmissionCriteria, LocationFilter, QueryOptions};
use crate::domain::entities::AdmissionRecord;
use crate::domain::recommendation::{Recommendation, RecommendationPolicy, Tier};
use crate::domain::repositories::AdmissionRepository;
use crate::error::AppError;

/// Optional filters shared by all three tiers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecommendFilters {
    /// Exact match.
    pub category: Option<String>,
    /// Case-insensitive substring of the subject requirement.
    pub subject_requirement: Option<String>,
    pub school_location: Option<LocationFilter>,
}

/// Partitions programs into reach, match and safety tiers around a score.
pub struct RecommendService<R: AdmissionRepository> {
    repository: Arc<R>,
    policy: RecommendationPolicy,
}

impl<R: AdmissionRepository> RecommendService<R> {
    pub fn new(repository: Arc<R>, policy: RecommendationPolicy) -> Self {
        Self { repository, policy }
    }

    pub fn policy(&self) -> &RecommendationPolicy {
        &self.policy
    }

    /// Runs the three tier queries concurrently.
    ///
    /// # Errors
    ///
    /// Returns the first store error; partial results are discarded.
    pub async fn recommend(
        &self,
        score: f64,
        year: i32,
        filters: RecommendFilters,
    ) -> Result<Recommendation, AppError> {
        let base = AdmissionCriteria::new()
            .with_year(year)
            .with_category(filters.category)
            .with_subject_like(filters.subject_requirement)
            .with_location(filters.school_location);

        let (reach, matched, safety) = tokio::try_join!(
            self.tier(&base, Tier::Reach, score),
            self.tier(&base, Tier::Match, score),
            self.tier(&base, Tier::Safety, score),
        )?;

        metrics::counter!("recommendations_total").increment(1);
        tracing::debug!(
            score,
            year,
            reach = reach.len(),
            matched = matched.len(),
            safety = safety.len(),
            "Recommendation computed"
        );

        Ok(Recommendation {
            reach,
            matched,
            safety,
        })
    }

    async fn tier(
        &self,
        base: &AdmissionCriteria,
        tier: Tier,
        score: f64,
    ) -> Result<Vec<AdmissionRecord>, AppError> {
        let criteria = base
            .clone()
            .with_score_range(self.policy.window(tier).around(score));
        let options = QueryOptions::new()
            .order(tier.order_by())
            .limit(self.policy.limit);

        self.repository.find_many(&criteria, &options).await
    }
}
