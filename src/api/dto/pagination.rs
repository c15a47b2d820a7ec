//! Pagination parameters shared by list endpoints.

use serde::Deserialize;
use serde_with::{NoneAsEmptyString, serde_as};

/// Largest accepted page size.
pub const MAX_PAGE_SIZE: i64 = 200;

/// Pagination query parameters (`?page=2&pageSize=50`).
///
/// Uses `serde_with` to parse numbers from query strings; empty values count
/// as absent.
#[serde_as]
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationParams {
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub page: Option<i64>,

    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub page_size: Option<i64>,
}

impl PaginationParams {
    /// See [`resolve_page`].
    pub fn resolve(&self, default_size: i64) -> Result<(i64, i64), String> {
        resolve_page(self.page, self.page_size, default_size)
    }
}

/// Applies defaults and validates a 1-based page request.
///
/// # Defaults
///
/// - `page`: 1
/// - `page_size`: `default_size`
///
/// # Validation
///
/// - Page must be > 0
/// - Page size must be between 1 and [`MAX_PAGE_SIZE`]
/// - The row offset `(page - 1) * page_size` must fit in an `i64`
///
/// # Returns
///
/// `(page, page_size)`.
pub fn resolve_page(
    page: Option<i64>,
    page_size: Option<i64>,
    default_size: i64,
) -> Result<(i64, i64), String> {
    let page = page.unwrap_or(1);
    let page_size = page_size.unwrap_or(default_size);

    if page < 1 {
        return Err("Page must be greater than 0".to_string());
    }

    if !(1..=MAX_PAGE_SIZE).contains(&page_size) {
        return Err(format!("Page size must be between 1 and {MAX_PAGE_SIZE}"));
    }

    if (page - 1).checked_mul(page_size).is_none() {
        return Err(format!("Page {page} is out of range"));
    }

    Ok((page, page_size))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        assert_eq!(resolve_page(None, None, 20).unwrap(), (1, 20));
        assert_eq!(resolve_page(None, None, 50).unwrap(), (1, 50));
    }

    #[test]
    fn test_custom_page_and_size() {
        assert_eq!(resolve_page(Some(3), Some(100), 20).unwrap(), (3, 100));
    }

    #[test]
    fn test_page_zero_is_error() {
        assert!(resolve_page(Some(0), None, 20).is_err());
        assert!(resolve_page(Some(-1), None, 20).is_err());
    }

    #[test]
    fn test_page_with_overflowing_offset_is_error() {
        assert!(resolve_page(Some(i64::MAX), None, 20).is_err());
        assert!(resolve_page(Some(i64::MAX / 200 + 2), Some(MAX_PAGE_SIZE), 20).is_err());

        let last = i64::MAX / 20 + 1;
        assert_eq!(resolve_page(Some(last), None, 20).unwrap(), (last, 20));
    }

    #[test]
    fn test_page_size_bounds() {
        assert!(resolve_page(None, Some(0), 20).is_err());
        assert!(resolve_page(None, Some(1), 20).is_ok());
        assert!(resolve_page(None, Some(MAX_PAGE_SIZE), 20).is_ok());
        assert!(resolve_page(None, Some(MAX_PAGE_SIZE + 1), 20).is_err());
    }

    #[test]
    fn test_query_string_parsing() {
        let p: PaginationParams = serde_json::from_str(r#"{"page":"2","pageSize":""}"#).unwrap();
        assert_eq!(p.page, Some(2));
        assert_eq!(p.page_size, None);

        assert!(serde_json::from_str::<PaginationParams>(r#"{"page":"abc"}"#).is_err());
    }
}
