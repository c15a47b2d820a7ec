//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /api/health`  - Health check: database, advisor (public)
//! - `POST /api/auth/*`  - Session gate (public, strict rate limit)
//! - `/api/*`            - REST API (Bearer session token required)
//! - everything else     - Frontend build from `STATIC_DIR`, when configured
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Single allowed browser origin
//! - **Rate limiting** - Per-IP token bucket (configurable for proxy deployments)
//! - **Authentication** - Bearer session token
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{auth, rate_limit, tracing};
use crate::config::Config;
use crate::state::AppState;
use anyhow::{Context, Result};
use axum::http::{HeaderValue, Method, header};
use axum::routing::get;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::{ServeDir, ServeFile};

/// Constructs the application router with all routes and middleware.
///
/// When `behind_proxy` is set, rate limiting reads the client IP from
/// `X-Forwarded-For` / `X-Real-IP` instead of the peer socket address;
/// enable it only behind a trusted reverse proxy.
///
/// # Errors
///
/// Returns an error if `cors_origin` is not a valid header value.
pub fn app_router(state: AppState, config: &Config) -> Result<NormalizePath<Router>> {
    let protected = api::routes::protected_routes()
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));
    let auth_routes = api::routes::auth_routes();

    let (protected, auth_routes) = if config.behind_proxy {
        (
            protected.layer(rate_limit::proxied_layer()),
            auth_routes.layer(rate_limit::proxied_secure_layer()),
        )
    } else {
        (
            protected.layer(rate_limit::layer()),
            auth_routes.layer(rate_limit::secure_layer()),
        )
    };

    let api_router = Router::new()
        .route("/health", get(health_handler))
        .merge(auth_routes)
        .merge(protected);

    let mut router = Router::new().nest("/api", api_router);

    if let Some(dir) = &config.static_dir {
        let index = format!("{}/index.html", dir.trim_end_matches('/'));
        router = router.fallback_service(ServeDir::new(dir).fallback(ServeFile::new(index)));
    }

    let router = router
        .with_state(state)
        .layer(cors_layer(&config.cors_origin)?)
        .layer(tracing::layer());

    Ok(NormalizePathLayer::trim_trailing_slash().layer(router))
}

/// Browser access for the configured frontend origin; `*` allows any origin.
pub fn cors_layer(origin: &str) -> Result<CorsLayer> {
    let allow_origin = if origin == "*" {
        AllowOrigin::any()
    } else {
        let value = HeaderValue::from_str(origin)
            .with_context(|| format!("Invalid CORS origin '{origin}'"))?;
        AllowOrigin::exact(value)
    };

    Ok(CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
        .expose_headers([header::CONTENT_DISPOSITION]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cors_layer_accepts_origin_and_wildcard() {
        assert!(cors_layer("http://localhost:5173").is_ok());
        assert!(cors_layer("*").is_ok());
    }

    #[test]
    fn test_cors_layer_rejects_invalid_origin() {
        assert!(cors_layer("http://bad\norigin").is_err());
    }
}
