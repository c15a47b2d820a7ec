//! Application layer services implementing business logic.
//!
//! This layer orchestrates domain operations by coordinating repository calls,
//! validation, and business rules. Services consume repository traits and provide
//! a clean API for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::ScoreRankService`] - Nearest score/rank lookup for a year
//! - [`services::RecommendService`] - Reach / match / safety partitioning
//! - [`services::SearchService`] - Filtered search and filter-widget lookups
//! - [`services::ExportService`] - CSV export of search results
//! - [`services::StatsService`] - Grouped statistics
//! - [`services::CompareService`] - Cross-year comparison
//! - [`services::UniversityService`] - University catalog and detail pages
//! - [`services::AuthService`] - Password login and session tokens
//! - [`services::AdvisorService`] - AI advisor chat

pub mod services;
