//! PostgreSQL implementation of the admission repository.

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};
use std::sync::Arc;

use crate::domain::criteria::{AdmissionCriteria, QueryOptions};
use crate::domain::entities::{AdmissionRecord, NewAdmissionRecord, ScoreRankPair};
use crate::domain::repositories::AdmissionRepository;
use crate::domain::score_rank::PairOrder;
use crate::error::AppError;
use crate::infrastructure::persistence::criteria_sql::{
    ADMISSION_COLUMNS, push_criteria, push_options,
};

/// Rows per INSERT statement; keeps bind parameters well under the
/// PostgreSQL limit of 65535.
const INSERT_CHUNK: usize = 1_000;

/// PostgreSQL repository for admission records.
///
/// Queries are built with [`QueryBuilder`] so every filter value is bound as
/// a parameter.
pub struct PgAdmissionRepository {
    pool: Arc<PgPool>,
}

impl PgAdmissionRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    /// Inserts records in chunks, returning the number of inserted rows.
    ///
    /// Used by the `admin import` command; the HTTP service never writes.
    pub async fn insert_batch(&self, records: &[NewAdmissionRecord]) -> Result<u64, AppError> {
        let mut inserted = 0;

        for chunk in records.chunks(INSERT_CHUNK) {
            let mut qb = QueryBuilder::<Postgres>::new(
                "INSERT INTO admission_data (year, university_name, university_code, category, \
                 batch, subject_requirement, major, major_code, major_group, major_note, \
                 admission_count, min_score, min_rank, school_location, school_nature, \
                 is_985, is_211) ",
            );

            qb.push_values(chunk, |mut row, r| {
                row.push_bind(r.year)
                    .push_bind(r.university_name.clone())
                    .push_bind(r.university_code.clone())
                    .push_bind(r.category.clone())
                    .push_bind(r.batch.clone())
                    .push_bind(r.subject_requirement.clone())
                    .push_bind(r.major.clone())
                    .push_bind(r.major_code.clone())
                    .push_bind(r.major_group.clone())
                    .push_bind(r.major_note.clone())
                    .push_bind(r.admission_count)
                    .push_bind(r.min_score)
                    .push_bind(r.min_rank)
                    .push_bind(r.school_location.clone())
                    .push_bind(r.school_nature.clone())
                    .push_bind(r.is_985)
                    .push_bind(r.is_211);
            });

            let result = qb.build().execute(self.pool.as_ref()).await?;
            inserted += result.rows_affected();
        }

        Ok(inserted)
    }

    /// Removes every admission record.
    pub async fn truncate(&self) -> Result<(), AppError> {
        sqlx::query("TRUNCATE TABLE admission_data RESTART IDENTITY")
            .execute(self.pool.as_ref())
            .await?;
        Ok(())
    }
}

#[async_trait]
impl AdmissionRepository for PgAdmissionRepository {
    async fn find_many(
        &self,
        criteria: &AdmissionCriteria,
        options: &QueryOptions,
    ) -> Result<Vec<AdmissionRecord>, AppError> {
        let mut qb = QueryBuilder::<Postgres>::new(format!(
            "SELECT {ADMISSION_COLUMNS} FROM admission_data"
        ));
        push_criteria(&mut qb, criteria);
        push_options(&mut qb, options);

        let rows = qb
            .build_query_as::<AdmissionRecord>()
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(rows)
    }

    async fn count(&self, criteria: &AdmissionCriteria) -> Result<i64, AppError> {
        let mut qb = QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM admission_data");
        push_criteria(&mut qb, criteria);

        let count = qb
            .build_query_scalar::<i64>()
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }

    async fn score_rank_pairs(
        &self,
        year: i32,
        order: PairOrder,
    ) -> Result<Vec<ScoreRankPair>, AppError> {
        let order_column = match order {
            PairOrder::ByScore => "min_score",
            PairOrder::ByRank => "min_rank",
        };

        // Values are read as text and parsed at this boundary so that legacy
        // text-typed imports resolve the same way as numeric columns.
        let rows: Vec<(Option<String>, Option<String>)> = sqlx::query_as(&format!(
            r#"
            SELECT min_score::text, min_rank::text
            FROM admission_data
            WHERE year = $1
              AND min_score IS NOT NULL
              AND min_rank IS NOT NULL
            ORDER BY {order_column} ASC, id ASC
            "#
        ))
        .bind(year)
        .fetch_all(self.pool.as_ref())
        .await?;

        let total = rows.len();
        let pairs: Vec<ScoreRankPair> = rows
            .iter()
            .filter_map(|(score, rank)| ScoreRankPair::from_raw(score.as_deref(), rank.as_deref()))
            .collect();

        if pairs.len() < total {
            tracing::debug!(
                year,
                dropped = total - pairs.len(),
                "Skipped non-numeric score/rank values"
            );
        }

        Ok(pairs)
    }

    async fn distinct_years(&self) -> Result<Vec<i32>, AppError> {
        let years = sqlx::query_scalar("SELECT DISTINCT year FROM admission_data ORDER BY year DESC")
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(years)
    }

    async fn distinct_locations(&self) -> Result<Vec<String>, AppError> {
        let locations = sqlx::query_scalar(
            r#"
            SELECT DISTINCT school_location
            FROM admission_data
            WHERE school_location <> ''
            ORDER BY school_location ASC
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(locations)
    }
}
