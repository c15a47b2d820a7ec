//! PostgreSQL implementation of university lookups.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{MajorRanking, ScoreTrend, UniversityProfile, UniversitySummary};
use crate::domain::repositories::UniversityRepository;
use crate::error::AppError;
use crate::infrastructure::persistence::criteria_sql::contains_pattern;

/// Picks one representative row per university: the newest year, then the
/// lowest id.
const SUMMARY_SELECT: &str = r#"
    SELECT DISTINCT ON (university_name)
        university_name AS name,
        university_code AS code,
        school_location AS location,
        school_nature AS nature,
        is_985,
        is_211
    FROM admission_data
"#;

/// PostgreSQL repository for university catalog and profile data.
pub struct PgUniversityRepository {
    pool: Arc<PgPool>,
}

impl PgUniversityRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UniversityRepository for PgUniversityRepository {
    async fn list(&self, offset: i64, limit: i64) -> Result<Vec<UniversitySummary>, AppError> {
        let universities = sqlx::query_as::<_, UniversitySummary>(&format!(
            "SELECT * FROM ({SUMMARY_SELECT} ORDER BY university_name, year DESC, id ASC) s \
             ORDER BY name ASC LIMIT $1 OFFSET $2"
        ))
        .bind(limit)
        .bind(offset)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(universities)
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count = sqlx::query_scalar("SELECT COUNT(DISTINCT university_name) FROM admission_data")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }

    async fn search(&self, keyword: &str, limit: i64) -> Result<Vec<UniversitySummary>, AppError> {
        let universities = sqlx::query_as::<_, UniversitySummary>(&format!(
            "SELECT * FROM ({SUMMARY_SELECT} WHERE university_name ILIKE $1 \
             ORDER BY university_name, year DESC, id ASC) s \
             ORDER BY name ASC LIMIT $2"
        ))
        .bind(contains_pattern(keyword))
        .bind(limit)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(universities)
    }

    async fn find_summary(&self, name: &str) -> Result<Option<UniversitySummary>, AppError> {
        let summary = sqlx::query_as::<_, UniversitySummary>(&format!(
            "{SUMMARY_SELECT} WHERE university_name = $1 \
             ORDER BY university_name, year DESC, id ASC"
        ))
        .bind(name)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(summary)
    }

    async fn find_profile(&self, name: &str) -> Result<Option<UniversityProfile>, AppError> {
        let profile = sqlx::query_as::<_, UniversityProfile>(
            r#"
            SELECT postgraduate_rate, ranking, school_type, affiliation, founding_year,
                   master_points, doctoral_points, national_special_majors, website,
                   description
            FROM university_details
            WHERE university_name = $1
            "#,
        )
        .bind(name)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(profile)
    }

    async fn major_rankings(&self, name: &str) -> Result<Vec<MajorRanking>, AppError> {
        let rankings = sqlx::query_as::<_, MajorRanking>(
            r#"
            SELECT major_name, rating, ranking, score
            FROM major_rankings
            WHERE university_name = $1
            ORDER BY major_name ASC, id ASC
            "#,
        )
        .bind(name)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rankings)
    }

    async fn years(&self, name: &str) -> Result<Vec<i32>, AppError> {
        let years = sqlx::query_scalar(
            "SELECT DISTINCT year FROM admission_data WHERE university_name = $1 ORDER BY year DESC",
        )
        .bind(name)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(years)
    }

    async fn score_trends(&self, name: &str) -> Result<Vec<ScoreTrend>, AppError> {
        let rows: Vec<(i32, f64, f64, f64)> = sqlx::query_as(
            r#"
            SELECT year, AVG(min_score), MIN(min_score), MAX(min_score)
            FROM admission_data
            WHERE university_name = $1 AND min_score IS NOT NULL
            GROUP BY year
            ORDER BY year DESC
            "#,
        )
        .bind(name)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows
            .into_iter()
            .map(|(year, avg, min, max)| ScoreTrend {
                year,
                avg_score: avg.round() as i64,
                min_score: min,
                max_score: max,
            })
            .collect())
    }

    async fn count_major_years(&self, name: &str) -> Result<i64, AppError> {
        let count = sqlx::query_scalar(
            r#"
            SELECT COUNT(*) FROM (
                SELECT DISTINCT major, year
                FROM admission_data
                WHERE university_name = $1
            ) t
            "#,
        )
        .bind(name)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(count)
    }
}
