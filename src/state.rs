//! Shared application state injected into every handler.

use sqlx::PgPool;
use std::sync::Arc;

use crate::application::services::{
    AdvisorService, AuthService, CompareService, ExportService, RecommendService,
    ScoreRankService, SearchService, StatsService, UniversityService,
};
use crate::domain::chat_provider::ChatProvider;
use crate::domain::recommendation::RecommendationPolicy;
use crate::infrastructure::persistence::{
    PgAdmissionRepository, PgStatsRepository, PgUniversityRepository,
};

/// Services wired to their PostgreSQL repositories.
///
/// Cloning is cheap: every field is an `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<PgPool>,
    pub score_rank_service: Arc<ScoreRankService<PgAdmissionRepository>>,
    pub recommend_service: Arc<RecommendService<PgAdmissionRepository>>,
    pub search_service: Arc<SearchService<PgAdmissionRepository>>,
    pub export_service: Arc<ExportService<PgAdmissionRepository>>,
    pub stats_service: Arc<StatsService<PgStatsRepository>>,
    pub compare_service: Arc<CompareService<PgAdmissionRepository>>,
    pub university_service: Arc<UniversityService<PgUniversityRepository, PgAdmissionRepository>>,
    pub auth_service: Arc<AuthService>,
    pub advisor_service: Arc<AdvisorService>,
}

impl AppState {
    /// Builds repositories over `pool` and the services on top of them.
    ///
    /// `chat_provider` is `None` when the advisor is not configured.
    pub fn new(
        pool: Arc<PgPool>,
        policy: RecommendationPolicy,
        auth_service: AuthService,
        chat_provider: Option<Arc<dyn ChatProvider>>,
    ) -> Self {
        let admissions = Arc::new(PgAdmissionRepository::new(pool.clone()));
        let stats = Arc::new(PgStatsRepository::new(pool.clone()));
        let universities = Arc::new(PgUniversityRepository::new(pool.clone()));

        Self {
            score_rank_service: Arc::new(ScoreRankService::new(admissions.clone())),
            recommend_service: Arc::new(RecommendService::new(admissions.clone(), policy)),
            search_service: Arc::new(SearchService::new(admissions.clone())),
            export_service: Arc::new(ExportService::new(admissions.clone())),
            stats_service: Arc::new(StatsService::new(stats)),
            compare_service: Arc::new(CompareService::new(admissions.clone())),
            university_service: Arc::new(UniversityService::new(universities, admissions)),
            auth_service: Arc::new(auth_service),
            advisor_service: Arc::new(AdvisorService::new(chat_provider)),
            db: pool,
        }
    }
}
