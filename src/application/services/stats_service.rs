//! Aggregate statistics for the dashboard charts.

use serde::Serialize;
use std::sync::Arc;

use crate::domain::criteria::{AdmissionCriteria, LocationFilter};
use crate::domain::repositories::{
    LocationCount, MajorCount, ScoreCount, StatsRepository, YearAverage,
};
use crate::error::AppError;

/// Number of majors reported in [`AdmissionStats::major_stats`].
pub const TOP_MAJORS: i64 = 20;

/// Optional filters for the statistics endpoint.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatsFilter {
    pub year: Option<i32>,
    /// Case-insensitive substring.
    pub major: Option<String>,
    /// Exact match.
    pub school_location: Option<String>,
}

impl StatsFilter {
    fn to_criteria(&self) -> AdmissionCriteria {
        let criteria = AdmissionCriteria::new()
            .with_major_like(self.major.clone())
            .with_location(
                self.school_location
                    .clone()
                    .and_then(|l| LocationFilter::from_values(vec![l])),
            );

        match self.year {
            Some(year) => criteria.with_year(year),
            None => criteria,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdmissionStats {
    pub score_distribution: Vec<ScoreCount>,
    pub location_stats: Vec<LocationCount>,
    pub major_stats: Vec<MajorCount>,
    pub yearly_trend: Vec<YearAverage>,
}

/// Service computing grouped statistics over admission records.
pub struct StatsService<R: StatsRepository> {
    repository: Arc<R>,
}

impl<R: StatsRepository> StatsService<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Computes all four aggregations under the same filter.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_stats(&self, filter: StatsFilter) -> Result<AdmissionStats, AppError> {
        let criteria = filter.to_criteria();

        let (score_distribution, location_stats, major_stats, yearly_trend) = tokio::try_join!(
            self.repository.score_distribution(&criteria),
            self.repository.location_counts(&criteria),
            self.repository.major_counts(&criteria, TOP_MAJORS),
            self.repository.yearly_averages(&criteria),
        )?;

        Ok(AdmissionStats {
            score_distribution,
            location_stats,
            major_stats,
            yearly_trend,
        })
    }
}
