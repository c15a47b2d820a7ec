mod common;

use axum::http::StatusCode;
use serde_json::json;
use sqlx::PgPool;

#[sqlx::test]
async fn test_login_success(pool: PgPool) {
    let server = common::test_server(common::create_test_state(pool));

    let response = server
        .post("/api/auth/login")
        .json(&json!({ "password": common::TEST_PASSWORD }))
        .await;

    response.assert_status_ok();
    let json = response.json::<serde_json::Value>();
    assert!(json["token"].as_str().unwrap().contains('.'));
    assert_eq!(json["expiresIn"], 3600);
}

#[sqlx::test]
async fn test_login_wrong_password(pool: PgPool) {
    let server = common::test_server(common::create_test_state(pool));

    let response = server
        .post("/api/auth/login")
        .json(&json!({ "password": "guess" }))
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
    assert_eq!(response.header("www-authenticate"), "Bearer");
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "unauthorized");
}

#[sqlx::test]
async fn test_login_malformed_body(pool: PgPool) {
    let server = common::test_server(common::create_test_state(pool));

    let response = server
        .post("/api/auth/login")
        .json(&json!({ "pass": "x" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
}

#[sqlx::test]
async fn test_verify(pool: PgPool) {
    let server = common::test_server(common::create_test_state(pool));

    let response = server
        .post("/api/auth/verify")
        .add_header("Authorization", common::bearer_token())
        .await;
    response.assert_status_ok();
    assert_eq!(response.json::<serde_json::Value>(), json!({ "valid": true }));

    let response = server
        .post("/api/auth/verify")
        .add_header("Authorization", "Bearer forged.00")
        .await;
    response.assert_status(StatusCode::UNAUTHORIZED);
    assert_eq!(response.json::<serde_json::Value>(), json!({ "valid": false }));

    let response = server.post("/api/auth/verify").await;
    response.assert_status(StatusCode::UNAUTHORIZED);
}

#[sqlx::test]
async fn test_protected_routes_require_token(pool: PgPool) {
    let server = common::test_server(common::create_test_state(pool));

    for path in [
        "/api/admission/years",
        "/api/admission/locations",
        "/api/admission/stats",
        "/api/universities",
    ] {
        let response = server.get(path).await;
        response.assert_status(StatusCode::UNAUTHORIZED);
        assert_eq!(response.header("www-authenticate"), "Bearer");
    }

    let response = server
        .get("/api/admission/years")
        .add_header("Authorization", "Bearer not-a-token")
        .await;
    response.assert_status(StatusCode::UNAUTHORIZED);

    let response = server
        .get("/api/admission/years")
        .add_header("Authorization", common::bearer_token())
        .await;
    response.assert_status_ok();
}
