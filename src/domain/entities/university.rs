//! University-level views derived from admission records.

use serde::Serialize;

/// Catalog entry for one university.
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct UniversitySummary {
    pub name: String,
    pub code: String,
    pub location: String,
    pub nature: String,
    #[serde(rename = "is985")]
    #[sqlx(rename = "is_985")]
    pub is_985: bool,
    #[serde(rename = "is211")]
    #[sqlx(rename = "is_211")]
    pub is_211: bool,
}

/// Optional extended profile from the `university_details` table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct UniversityProfile {
    pub postgraduate_rate: Option<String>,
    pub ranking: Option<i32>,
    pub school_type: Option<String>,
    pub affiliation: Option<String>,
    pub founding_year: Option<i32>,
    pub master_points: Option<i32>,
    pub doctoral_points: Option<i32>,
    pub national_special_majors: Option<String>,
    pub website: Option<String>,
    pub description: Option<String>,
}

/// Discipline rating of one major at one university.
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct MajorRanking {
    #[serde(skip)]
    pub major_name: String,
    pub rating: Option<String>,
    #[serde(rename = "rank")]
    pub ranking: Option<i32>,
    pub score: Option<f64>,
}

/// Per-year cutoff aggregate for one university.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreTrend {
    pub year: i32,
    pub avg_score: i64,
    pub min_score: f64,
    pub max_score: f64,
}

/// A major offered in the latest admission year.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UniversityMajor {
    pub name: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_rank: Option<i64>,
    pub category: String,
    pub batch: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ranking: Option<MajorRanking>,
}

/// Admission row as shown on the university page.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UniversityAdmission {
    pub year: i32,
    pub major: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_rank: Option<i64>,
    pub category: String,
    pub batch: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UniversityStats {
    pub major_count: usize,
    pub admission_data_count: usize,
    pub years: Vec<i32>,
}

/// Everything the university detail page needs.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UniversityDetail {
    pub basic_info: UniversitySummary,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extended_info: Option<UniversityProfile>,
    pub stats: UniversityStats,
    pub majors: Vec<UniversityMajor>,
    pub score_trends: Vec<ScoreTrend>,
    pub admission_data: Vec<UniversityAdmission>,
}
