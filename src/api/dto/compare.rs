//! DTOs for the compare endpoint.

use serde::Deserialize;
use validator::Validate;

/// `POST /api/admission/compare`
///
/// ```json
/// { "university": "浙江大学", "major": "计算机", "years": [2023, 2024, 2025] }
/// ```
#[derive(Debug, Deserialize, Validate)]
pub struct CompareRequest {
    #[validate(length(min = 1, message = "University is required"))]
    pub university: String,

    #[serde(default)]
    pub major: Option<String>,

    #[validate(length(min = 1, message = "At least one year is required"))]
    #[serde(default)]
    pub years: Vec<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_request() {
        let req: CompareRequest =
            serde_json::from_str(r#"{"university":"浙江大学","years":[2024]}"#).unwrap();
        assert!(req.validate().is_ok());
        assert!(req.major.is_none());
    }

    #[test]
    fn test_missing_years_fails_validation() {
        let req: CompareRequest = serde_json::from_str(r#"{"university":"浙江大学"}"#).unwrap();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_empty_university_fails_validation() {
        let req: CompareRequest =
            serde_json::from_str(r#"{"university":"","years":[2024]}"#).unwrap();
        assert!(req.validate().is_err());
    }
}
