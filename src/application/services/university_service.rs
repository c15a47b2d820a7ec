//! University catalog and detail page assembly.

use serde::Serialize;
use serde_json::json;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use crate::domain::criteria::{AdmissionCriteria, OrderBy, QueryOptions, SortField};
use crate::domain::entities::{
    MajorRanking, UniversityAdmission, UniversityDetail, UniversityMajor, UniversityStats,
    UniversitySummary,
};
use crate::domain::repositories::{AdmissionRepository, UniversityRepository};
use crate::error::AppError;

/// Keyword search result cap.
pub const SEARCH_LIMIT: i64 = 20;

/// Rows of the latest year shown on the detail page.
pub const DETAIL_ADMISSION_LIMIT: i64 = 100;

/// Shown in place of an empty code.
const MISSING_CODE: &str = "-";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UniversityPage {
    pub universities: Vec<UniversitySummary>,
    pub total: i64,
    pub page: i64,
    pub page_size: i64,
    pub total_pages: i64,
}

pub struct UniversityService<U: UniversityRepository, A: AdmissionRepository> {
    universities: Arc<U>,
    admissions: Arc<A>,
}

impl<U: UniversityRepository, A: AdmissionRepository> UniversityService<U, A> {
    pub fn new(universities: Arc<U>, admissions: Arc<A>) -> Self {
        Self {
            universities,
            admissions,
        }
    }

    /// Lists distinct universities by name.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list(&self, page: i64, page_size: i64) -> Result<UniversityPage, AppError> {
        let (universities, total) = tokio::try_join!(
            self.universities.list((page - 1).saturating_mul(page_size), page_size),
            self.universities.count(),
        )?;

        Ok(UniversityPage {
            universities: universities.into_iter().map(with_code_placeholder).collect(),
            total,
            page,
            page_size,
            total_pages: (total + page_size - 1) / page_size,
        })
    }

    pub async fn search(&self, keyword: &str) -> Result<Vec<UniversitySummary>, AppError> {
        if keyword.trim().is_empty() {
            return Ok(Vec::new());
        }

        let universities = self.universities.search(keyword, SEARCH_LIMIT).await?;
        Ok(universities.into_iter().map(with_code_placeholder).collect())
    }

    /// Assembles everything the university detail page shows.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no admission record mentions the
    /// university. Returns [`AppError::Internal`] on database errors.
    pub async fn detail(&self, name: &str) -> Result<UniversityDetail, AppError> {
        let summary = self
            .universities
            .find_summary(name)
            .await?
            .ok_or_else(|| {
                AppError::not_found("University not found", json!({ "name": name }))
            })?;

        let (extended_info, rankings, years, score_trends, admission_data_count) = tokio::try_join!(
            self.universities.find_profile(name),
            self.universities.major_rankings(name),
            self.universities.years(name),
            self.universities.score_trends(name),
            self.universities.count_major_years(name),
        )?;

        let (majors, admission_data) = match years.first() {
            Some(&latest) => self.latest_year(name, latest, rankings).await?,
            None => (Vec::new(), Vec::new()),
        };

        Ok(UniversityDetail {
            basic_info: with_code_placeholder(summary),
            extended_info,
            stats: UniversityStats {
                major_count: majors.len(),
                admission_data_count: admission_data_count as usize,
                years,
            },
            majors,
            score_trends,
            admission_data,
        })
    }

    async fn latest_year(
        &self,
        name: &str,
        year: i32,
        rankings: Vec<MajorRanking>,
    ) -> Result<(Vec<UniversityMajor>, Vec<UniversityAdmission>), AppError> {
        let criteria = AdmissionCriteria::new()
            .with_university(name)
            .with_year(year);

        let by_major = QueryOptions::new().order(OrderBy::asc(SortField::Major));
        let by_score = QueryOptions::new()
            .order(OrderBy::desc(SortField::MinScore))
            .order(OrderBy::asc(SortField::Major))
            .limit(DETAIL_ADMISSION_LIMIT);

        let (records, top) = tokio::try_join!(
            self.admissions.find_many(&criteria, &by_major),
            self.admissions.find_many(&criteria, &by_score),
        )?;

        let mut rankings: HashMap<String, MajorRanking> = rankings
            .into_iter()
            .map(|r| (r.major_name.clone(), r))
            .collect();

        let mut seen = HashSet::new();
        let majors = records
            .into_iter()
            .filter(|r| seen.insert(r.major.clone()))
            .map(|r| UniversityMajor {
                ranking: rankings.remove(&r.major),
                code: placeholder_if_empty(r.major_code),
                name: r.major,
                min_score: r.min_score,
                min_rank: r.min_rank,
                category: r.category,
                batch: r.batch,
            })
            .collect();

        let admission_data = top
            .into_iter()
            .map(|r| UniversityAdmission {
                year: r.year,
                major: r.major,
                min_score: r.min_score,
                min_rank: r.min_rank,
                category: r.category,
                batch: r.batch,
            })
            .collect();

        Ok((majors, admission_data))
    }
}

fn placeholder_if_empty(code: String) -> String {
    if code.trim().is_empty() {
        MISSING_CODE.to_string()
    } else {
        code
    }
}

fn with_code_placeholder(mut summary: UniversitySummary) -> UniversitySummary {
    summary.code = placeholder_if_empty(summary.code);
    summary
}
