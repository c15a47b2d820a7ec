//! Business logic services for the application layer.

pub mod advisor_service;
pub mod auth_service;
pub mod compare_service;
pub mod export_service;
pub mod recommend_service;
pub mod score_rank_service;
pub mod search_service;
pub mod stats_service;
pub mod university_service;

pub use advisor_service::AdvisorService;
pub use auth_service::AuthService;
pub use compare_service::CompareService;
pub use export_service::ExportService;
pub use recommend_service::{RecommendFilters, RecommendService};
pub use score_rank_service::ScoreRankService;
pub use search_service::SearchService;
pub use stats_service::{StatsFilter, StatsService};
pub use university_service::UniversityService;
