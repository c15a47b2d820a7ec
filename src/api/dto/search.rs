//! DTOs for search and export.

use serde::Deserialize;
use serde_with::{OneOrMany, formats::PreferOne, serde_as};

use crate::api::dto::pagination::resolve_page;
use crate::domain::criteria::{
    AdmissionCriteria, LocationFilter, NumericRange, OrderBy, SortField, SortOrder,
};

/// Default page size for search results.
pub const DEFAULT_SEARCH_PAGE_SIZE: i64 = 20;

/// Inclusive bounds; either side may be omitted.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct RangeParams<T> {
    pub min: Option<T>,
    pub max: Option<T>,
}

impl<T> From<RangeParams<T>> for NumericRange<T> {
    fn from(p: RangeParams<T>) -> Self {
        NumericRange {
            min: p.min,
            max: p.max,
        }
    }
}

/// Body of `POST /api/admission/search` and `POST /api/admission/export`.
///
/// ```json
/// {
///   "major": "计算机",
///   "schoolLocation": ["北京", "上海"],
///   "minScore": { "min": 600, "max": 650 },
///   "year": [2024, 2025],
///   "is985": true,
///   "page": 1,
///   "pageSize": 20,
///   "sortBy": "minScore",
///   "sortOrder": "desc"
/// }
/// ```
#[serde_as]
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchRequest {
    pub major: Option<String>,
    pub university_name: Option<String>,

    #[serde_as(as = "Option<OneOrMany<_, PreferOne>>")]
    pub school_location: Option<Vec<String>>,

    pub min_score: Option<RangeParams<f64>>,
    pub min_rank: Option<RangeParams<i64>>,

    #[serde_as(as = "Option<OneOrMany<_, PreferOne>>")]
    pub year: Option<Vec<i32>>,

    pub category: Option<String>,
    pub batch: Option<String>,

    #[serde(rename = "is985")]
    pub is_985: Option<bool>,
    #[serde(rename = "is211")]
    pub is_211: Option<bool>,

    pub page: Option<i64>,
    pub page_size: Option<i64>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
}

impl SearchRequest {
    pub fn criteria(&self) -> AdmissionCriteria {
        AdmissionCriteria::new()
            .with_major_like(self.major.clone())
            .with_university_like(self.university_name.clone())
            .with_location(
                self.school_location
                    .clone()
                    .and_then(LocationFilter::from_values),
            )
            .with_score_range(self.min_score.unwrap_or_default().into())
            .with_rank_range(self.min_rank.unwrap_or_default().into())
            .with_years(self.year.clone().unwrap_or_default())
            .with_category(self.category.clone())
            .with_batch(self.batch.clone())
            .with_elite_flags(self.is_985, self.is_211)
    }

    /// Primary sort key; unknown fields sort by score, order defaults to desc.
    pub fn order_by(&self) -> OrderBy {
        OrderBy {
            field: self
                .sort_by
                .as_deref()
                .map(SortField::from_param)
                .unwrap_or(SortField::MinScore),
            order: self
                .sort_order
                .as_deref()
                .map(SortOrder::from_param)
                .unwrap_or_default(),
        }
    }

    /// `(page, page_size)` with defaults applied.
    pub fn paging(&self) -> Result<(i64, i64), String> {
        resolve_page(self.page, self.page_size, DEFAULT_SEARCH_PAGE_SIZE)
    }
}
