//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data operations; implementations live in
//! `crate::infrastructure::persistence`. Mock implementations are generated via
//! `mockall` for unit tests.
//!
//! # Available Repositories
//!
//! - [`AdmissionRepository`] - Filtered record queries and score/rank pairs
//! - [`StatsRepository`] - Grouped aggregations for charts
//! - [`UniversityRepository`] - University catalog and profiles
//!
//! # Testing
//!
//! See integration tests in `tests/repository_*.rs` for usage examples.

pub mod admission_repository;
pub mod stats_repository;
pub mod university_repository;

pub use admission_repository::AdmissionRepository;
pub use stats_repository::{LocationCount, MajorCount, ScoreCount, StatsRepository, YearAverage};
pub use university_repository::UniversityRepository;

#[cfg(test)]
pub use admission_repository::MockAdmissionRepository;
#[cfg(test)]
pub use stats_repository::MockStatsRepository;
#[cfg(test)]
pub use university_repository::MockUniversityRepository;
