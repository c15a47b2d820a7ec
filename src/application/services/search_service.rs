//! Filtered, sorted and paginated record search.

use serde::Serialize;
use std::sync::Arc;

use crate::domain::criteria::{AdmissionCriteria, OrderBy, QueryOptions};
use crate::domain::entities::AdmissionRecord;
use crate::domain::repositories::AdmissionRepository;
use crate::error::AppError;

/// One page of search results.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchPage {
    pub data: Vec<AdmissionRecord>,
    pub total: i64,
    pub page: i64,
    pub page_size: i64,
}

/// Search over admission records plus the distinct-value lookups used by
/// filter widgets.
pub struct SearchService<R: AdmissionRepository> {
    repository: Arc<R>,
}

impl<R: AdmissionRepository> SearchService<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Returns one page of matching records together with the total count.
    ///
    /// `page` is 1-based. The data query and the count run concurrently.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn search(
        &self,
        criteria: AdmissionCriteria,
        sort: OrderBy,
        page: i64,
        page_size: i64,
    ) -> Result<SearchPage, AppError> {
        let options = QueryOptions::new()
            .order(sort)
            .limit(page_size)
            .offset((page - 1).saturating_mul(page_size));

        let (data, total) = tokio::try_join!(
            self.repository.find_many(&criteria, &options),
            self.repository.count(&criteria),
        )?;

        Ok(SearchPage {
            data,
            total,
            page,
            page_size,
        })
    }

    /// Distinct years, newest first.
    pub async fn years(&self) -> Result<Vec<i32>, AppError> {
        self.repository.distinct_years().await
    }

    /// Distinct non-empty school locations, ascending.
    pub async fn locations(&self) -> Result<Vec<String>, AppError> {
        self.repository.distinct_locations().await
    }
}
