//! DTOs for the university endpoints.

use serde::Deserialize;

/// Default page size for the university list.
pub const DEFAULT_UNIVERSITY_PAGE_SIZE: i64 = 50;

/// `GET /api/universities/search?keyword=浙江`
#[derive(Debug, Default, Deserialize)]
pub struct UniversitySearchQuery {
    #[serde(default)]
    pub keyword: String,
}
