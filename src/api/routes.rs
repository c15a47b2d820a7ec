//! API route configuration.
//!
//! Routes are grouped by the protection they need; the top-level router in
//! [`crate::routes`] attaches authentication and rate limiting.

use crate::api::handlers::{
    chat_handler, compare_handler, export_handler, locations_handler, login_handler,
    recommend_handler, score_rank_handler, search_handler, stats_handler,
    university_detail_handler, university_list_handler, university_search_handler,
    verify_handler, years_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Session gate, reachable without a token.
///
/// # Endpoints
///
/// - `POST /auth/login`  - Exchange the access password for a session token
/// - `POST /auth/verify` - Check a bearer token
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/login", post(login_handler))
        .route("/auth/verify", post(verify_handler))
}

/// Data routes, protected by Bearer session authentication.
///
/// # Endpoints
///
/// - `GET  /admission/score-rank-mapping` - Nearest score/rank lookup
/// - `POST /admission/recommend`          - Reach / match / safety tiers
/// - `POST /admission/search`             - Filtered, paginated records
/// - `POST /admission/export`             - CSV export of a search
/// - `GET  /admission/stats`              - Dashboard aggregates
/// - `POST /admission/compare`            - Cutoffs of one university by year
/// - `GET  /admission/years`              - Distinct years
/// - `GET  /admission/locations`          - Distinct school locations
/// - `GET  /universities`                 - University catalog (paginated)
/// - `GET  /universities/search`          - University name search
/// - `GET  /universities/{name}`          - University detail page
/// - `POST /ai/chat`                      - AI advisor
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/admission/score-rank-mapping", get(score_rank_handler))
        .route("/admission/recommend", post(recommend_handler))
        .route("/admission/search", post(search_handler))
        .route("/admission/export", post(export_handler))
        .route("/admission/stats", get(stats_handler))
        .route("/admission/compare", post(compare_handler))
        .route("/admission/years", get(years_handler))
        .route("/admission/locations", get(locations_handler))
        .route("/universities", get(university_list_handler))
        .route("/universities/search", get(university_search_handler))
        .route("/universities/{name}", get(university_detail_handler))
        .route("/ai/chat", post(chat_handler))
}
