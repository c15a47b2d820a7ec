//! DTOs for the statistics endpoint.

use serde::Deserialize;
use serde_with::{NoneAsEmptyString, serde_as};

use crate::application::services::StatsFilter;

/// `GET /api/admission/stats?year=2025&major=计算机&schoolLocation=北京`
#[serde_as]
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsQuery {
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub year: Option<i32>,

    #[serde(default)]
    pub major: Option<String>,

    #[serde(default)]
    pub school_location: Option<String>,
}

impl From<StatsQuery> for StatsFilter {
    fn from(q: StatsQuery) -> Self {
        StatsFilter {
            year: q.year,
            major: q.major,
            school_location: q.school_location,
        }
    }
}
