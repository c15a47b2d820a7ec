//! PostgreSQL implementation of statistics repository.

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};
use std::sync::Arc;

use crate::domain::criteria::AdmissionCriteria;
use crate::domain::repositories::{
    LocationCount, MajorCount, ScoreCount, StatsRepository, YearAverage,
};
use crate::error::AppError;
use crate::infrastructure::persistence::criteria_sql::push_criteria;

/// PostgreSQL repository for grouped admission statistics.
pub struct PgStatsRepository {
    pool: Arc<PgPool>,
}

impl PgStatsRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StatsRepository for PgStatsRepository {
    async fn score_distribution(
        &self,
        criteria: &AdmissionCriteria,
    ) -> Result<Vec<ScoreCount>, AppError> {
        let criteria = criteria.clone().requiring_score();

        let mut qb = QueryBuilder::<Postgres>::new(
            "SELECT min_score AS score, COUNT(*) AS count FROM admission_data",
        );
        push_criteria(&mut qb, &criteria);
        qb.push(" GROUP BY min_score ORDER BY min_score ASC");

        let rows: Vec<(f64, i64)> = qb.build_query_as().fetch_all(self.pool.as_ref()).await?;

        Ok(rows
            .into_iter()
            .map(|(score, count)| ScoreCount { score, count })
            .collect())
    }

    async fn location_counts(
        &self,
        criteria: &AdmissionCriteria,
    ) -> Result<Vec<LocationCount>, AppError> {
        let mut qb = QueryBuilder::<Postgres>::new(
            "SELECT school_location, COUNT(*) AS count FROM admission_data",
        );
        push_criteria(&mut qb, criteria);
        qb.push(" GROUP BY school_location ORDER BY count DESC, school_location ASC");

        let rows: Vec<(String, i64)> = qb.build_query_as().fetch_all(self.pool.as_ref()).await?;

        Ok(rows
            .into_iter()
            .map(|(location, count)| LocationCount { location, count })
            .collect())
    }

    async fn major_counts(
        &self,
        criteria: &AdmissionCriteria,
        limit: i64,
    ) -> Result<Vec<MajorCount>, AppError> {
        let mut qb =
            QueryBuilder::<Postgres>::new("SELECT major, COUNT(*) AS count FROM admission_data");
        push_criteria(&mut qb, criteria);
        qb.push(" GROUP BY major ORDER BY count DESC, major ASC LIMIT ")
            .push_bind(limit);

        let rows: Vec<(String, i64)> = qb.build_query_as().fetch_all(self.pool.as_ref()).await?;

        Ok(rows
            .into_iter()
            .map(|(major, count)| MajorCount { major, count })
            .collect())
    }

    async fn yearly_averages(
        &self,
        criteria: &AdmissionCriteria,
    ) -> Result<Vec<YearAverage>, AppError> {
        let mut qb =
            QueryBuilder::<Postgres>::new("SELECT year, AVG(min_score) AS avg FROM admission_data");
        push_criteria(&mut qb, criteria);
        qb.push(" GROUP BY year ORDER BY year ASC");

        let rows: Vec<(i32, Option<f64>)> =
            qb.build_query_as().fetch_all(self.pool.as_ref()).await?;

        Ok(rows
            .into_iter()
            .map(|(year, avg)| YearAverage {
                year,
                avg_score: avg.unwrap_or(0.0).round() as i64,
            })
            .collect())
    }
}
