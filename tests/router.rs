mod common;

use admission_advisor::config::Config;
use admission_advisor::routes::app_router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use sqlx::PgPool;
use std::path::PathBuf;
use tower::ServiceExt;

fn config(static_dir: Option<String>) -> Config {
    Config {
        database_url: "postgres://localhost/unused".to_string(),
        listen_addr: "127.0.0.1:0".to_string(),
        log_level: "info".to_string(),
        log_format: "text".to_string(),
        behind_proxy: false,
        access_password: common::TEST_PASSWORD.to_string(),
        session_signing_secret: common::TEST_SECRET.to_string(),
        session_ttl_seconds: 3600,
        cors_origin: "http://localhost:5173".to_string(),
        static_dir,
        anthropic_api_key: None,
        llm_model: "test-model".to_string(),
        llm_base_url: "http://127.0.0.1:1".to_string(),
        llm_max_tokens: 256,
        llm_timeout_seconds: 5,
        db_max_connections: 1,
        db_connect_timeout: 1,
        db_idle_timeout: 600,
        db_max_lifetime: 1800,
    }
}

// Requests below never reach a handler, so the pool is never connected.
fn lazy_pool() -> PgPool {
    PgPool::connect_lazy("postgres://localhost/unused").unwrap()
}

#[tokio::test]
async fn test_cors_preflight_for_configured_origin() {
    let state = common::create_test_state(lazy_pool());
    let app = app_router(state, &config(None)).unwrap();

    let response = app
        .oneshot(
            Request::builder()
                .method(Method::OPTIONS)
                .uri("/api/admission/search")
                .header(header::ORIGIN, "http://localhost:5173")
                .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
                .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "authorization,content-type")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "http://localhost:5173"
    );
}

#[tokio::test]
async fn test_invalid_cors_origin_fails_router_construction() {
    let state = common::create_test_state(lazy_pool());
    let mut config = config(None);
    config.cors_origin = "http://bad\norigin".to_string();

    assert!(app_router(state, &config).is_err());
}

#[tokio::test]
async fn test_static_fallback_serves_index() {
    let dir: PathBuf = std::env::temp_dir().join(format!("advisor-static-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("index.html"), "<html>advisor</html>").unwrap();

    let state = common::create_test_state(lazy_pool());
    let app = app_router(state, &config(Some(dir.to_string_lossy().into_owned()))).unwrap();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/universities/some-client-route")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(&body[..], b"<html>advisor</html>");

    std::fs::remove_dir_all(&dir).ok();
}
