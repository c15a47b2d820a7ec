//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx. Filters
//! are composed at runtime with `QueryBuilder`, so every user-supplied value
//! is bound as a parameter.
//!
//! # Repositories
//!
//! - [`PgAdmissionRepository`] - Record queries, score/rank pairs, bulk import
//! - [`PgStatsRepository`] - Grouped aggregations
//! - [`PgUniversityRepository`] - University catalog and profiles

mod criteria_sql;
pub mod pg_admission_repository;
pub mod pg_stats_repository;
pub mod pg_university_repository;

pub use pg_admission_repository::PgAdmissionRepository;
pub use pg_stats_repository::PgStatsRepository;
pub use pg_university_repository::PgUniversityRepository;
