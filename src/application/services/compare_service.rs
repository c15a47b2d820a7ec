//! Cross-year comparison for one university.

use serde::Serialize;
use serde_json::json;
use std::sync::Arc;

use crate::domain::criteria::{AdmissionCriteria, OrderBy, QueryOptions, SortField};
use crate::domain::entities::AdmissionRecord;
use crate::domain::repositories::AdmissionRepository;
use crate::error::AppError;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MajorCutoff {
    pub major: String,
    pub min_score: Option<f64>,
    pub min_rank: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YearCutoffs {
    pub year: i32,
    pub majors: Vec<MajorCutoff>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comparison {
    pub university: String,
    pub data: Vec<YearCutoffs>,
}

pub struct CompareService<R: AdmissionRepository> {
    repository: Arc<R>,
}

impl<R: AdmissionRepository> CompareService<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Groups a university's cutoffs by year for the requested years.
    ///
    /// `university` and `major` are case-insensitive substrings.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `university` is blank or `years` is
    /// empty. Returns [`AppError::Internal`] on database errors.
    pub async fn compare(
        &self,
        university: &str,
        major: Option<String>,
        years: Vec<i32>,
    ) -> Result<Comparison, AppError> {
        if university.trim().is_empty() {
            return Err(AppError::bad_request(
                "University is required",
                json!({ "field": "university" }),
            ));
        }
        if years.is_empty() {
            return Err(AppError::bad_request(
                "At least one year is required",
                json!({ "field": "years" }),
            ));
        }

        let criteria = AdmissionCriteria::new()
            .with_university_like(Some(university.to_string()))
            .with_major_like(major)
            .with_years(years);
        let options = QueryOptions::new()
            .order(OrderBy::asc(SortField::Year))
            .order(OrderBy::asc(SortField::Major));

        let records = self.repository.find_many(&criteria, &options).await?;

        Ok(Comparison {
            university: university.to_string(),
            data: group_by_year(records),
        })
    }
}

/// Groups records that are already sorted by year.
fn group_by_year(records: Vec<AdmissionRecord>) -> Vec<YearCutoffs> {
    let mut groups: Vec<YearCutoffs> = Vec::new();

    for r in records {
        let cutoff = MajorCutoff {
            major: r.major,
            min_score: r.min_score,
            min_rank: r.min_rank,
        };
        match groups.last_mut() {
            Some(group) if group.year == r.year => group.majors.push(cutoff),
            _ => groups.push(YearCutoffs {
                year: r.year,
                majors: vec![cutoff],
            }),
        }
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockAdmissionRepository;

    fn record(id: i64, year: i32, major: &str, score: f64) -> AdmissionRecord {
        AdmissionRecord {
            id,
            year,
            university_name: "复旦大学".to_string(),
            university_code: String::new(),
            category: String::new(),
            batch: String::new(),
            subject_requirement: String::new(),
            major: major.to_string(),
            major_code: String::new(),
            major_group: None,
            major_note: None,
            admission_count: None,
            min_score: Some(score),
            min_rank: None,
            school_location: String::new(),
            school_nature: String::new(),
            is_985: true,
            is_211: true,
        }
    }

    #[tokio::test]
    async fn test_compare_groups_by_year() {
        let mut mock_repo = MockAdmissionRepository::new();
        mock_repo
            .expect_find_many()
            .withf(|criteria, options| {
                criteria.university_name_contains.as_deref() == Some("复旦")
                    && criteria.years == Some(vec![2023, 2024])
                    && options.order_by
                        == vec![OrderBy::asc(SortField::Year), OrderBy::asc(SortField::Major)]
            })
            .times(1)
            .returning(|_, _| {
                Ok(vec![
                    record(1, 2023, "法学", 650.0),
                    record(2, 2023, "经济学", 655.0),
                    record(3, 2024, "法学", 652.0),
                ])
            });

        let service = CompareService::new(Arc::new(mock_repo));
        let result = service
            .compare("复旦", None, vec![2023, 2024])
            .await
            .unwrap();

        assert_eq!(result.university, "复旦");
        assert_eq!(result.data.len(), 2);
        assert_eq!(result.data[0].year, 2023);
        assert_eq!(result.data[0].majors.len(), 2);
        assert_eq!(result.data[1].majors[0].min_score, Some(652.0));
    }

    #[tokio::test]
    async fn test_compare_requires_years() {
        let mut mock_repo = MockAdmissionRepository::new();
        mock_repo.expect_find_many().times(0);

        let service = CompareService::new(Arc::new(mock_repo));
        let result = service.compare("复旦", None, vec![]).await;

        assert!(matches!(result, Err(AppError::Validation { .. })));
    }

    #[tokio::test]
    async fn test_compare_requires_university() {
        let service = CompareService::new(Arc::new(MockAdmissionRepository::new()));
        let result = service.compare("  ", None, vec![2024]).await;

        assert!(matches!(result, Err(AppError::Validation { .. })));
    }
}
