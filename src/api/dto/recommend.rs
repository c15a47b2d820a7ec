//! DTOs for the recommendation endpoint.

use serde::Deserialize;
use serde_with::{OneOrMany, formats::PreferOne, serde_as};
use validator::Validate;

use crate::application::services::RecommendFilters;
use crate::domain::criteria::LocationFilter;

/// Year used when the request omits one.
pub const DEFAULT_YEAR: i32 = 2025;

/// `POST /api/admission/recommend`
///
/// ```json
/// { "score": 600, "year": 2025, "category": "物理类", "subject": "化学", "schoolLocation": ["北京", "上海"] }
/// ```
#[serde_as]
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RecommendRequest {
    /// Any number; windows that fall outside the data simply come back empty.
    pub score: f64,

    /// Sent by the frontend alongside the score and never read: tiers are
    /// defined by score windows only.
    #[serde(default)]
    pub rank: Option<i64>,

    #[validate(range(min = 1990, max = 2100))]
    #[serde(default)]
    pub year: Option<i32>,

    #[serde(default)]
    pub category: Option<String>,

    /// Case-insensitive substring of the subject requirement.
    #[serde(default, alias = "subjectRequirement")]
    pub subject: Option<String>,

    #[serde_as(as = "Option<OneOrMany<_, PreferOne>>")]
    #[serde(default)]
    pub school_location: Option<Vec<String>>,
}

impl RecommendRequest {
    pub fn year(&self) -> i32 {
        self.year.unwrap_or(DEFAULT_YEAR)
    }

    pub fn filters(&self) -> RecommendFilters {
        RecommendFilters {
            category: self.category.clone(),
            subject_requirement: self.subject.clone(),
            school_location: self
                .school_location
                .clone()
                .and_then(LocationFilter::from_values),
        }
    }
}
