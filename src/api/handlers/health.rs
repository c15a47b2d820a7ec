//! Liveness and dependency report.

use axum::{Json, extract::State, http::StatusCode};
use std::time::Instant;

use crate::api::dto::health::{ComponentCheck, ComponentChecks, ComponentStatus, HealthReport};
use crate::state::AppState;

/// Reports the database and advisor status.
///
/// # Endpoint
///
/// `GET /api/health` (public)
///
/// Answers 200 while the database responds and 503 otherwise. An advisor
/// without an API key is reported as `disabled` and still counts as healthy.
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "database": { "status": "ok", "message": "Latest data year: 2025", "latencyMs": 2 },
///     "advisor": { "status": "disabled", "message": "ANTHROPIC_API_KEY is not set" }
///   }
/// }
/// ```
pub async fn health_handler(State(state): State<AppState>) -> (StatusCode, Json<HealthReport>) {
    let report = HealthReport::from_checks(ComponentChecks {
        database: database_check(&state).await,
        advisor: advisor_check(&state),
    });

    let status = if report.is_healthy() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status, Json(report))
}

async fn database_check(state: &AppState) -> ComponentCheck {
    let started = Instant::now();
    let latest = sqlx::query_scalar::<_, Option<i32>>("SELECT MAX(year) FROM admission_data")
        .fetch_one(state.db.as_ref())
        .await;
    let elapsed = started.elapsed().as_millis() as u64;

    match latest {
        Ok(Some(year)) => ComponentCheck::new(ComponentStatus::Ok, format!("Latest data year: {year}"))
            .with_latency(elapsed),
        Ok(None) => ComponentCheck::new(ComponentStatus::Ok, "Connected, no admission data loaded")
            .with_latency(elapsed),
        Err(e) => {
            tracing::warn!(error = %e, "Health check database query failed");
            ComponentCheck::new(ComponentStatus::Error, format!("Database error: {e}"))
        }
    }
}

fn advisor_check(state: &AppState) -> ComponentCheck {
    if state.advisor_service.is_enabled() {
        ComponentCheck::new(ComponentStatus::Ok, "Configured")
    } else {
        ComponentCheck::new(ComponentStatus::Disabled, "ANTHROPIC_API_KEY is not set")
    }
}
