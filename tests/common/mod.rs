#![allow(dead_code)]

use admission_advisor::api::handlers::health_handler;
use admission_advisor::api::middleware::auth;
use admission_advisor::api::routes::{auth_routes, protected_routes};
use admission_advisor::application::services::AuthService;
use admission_advisor::domain::chat_provider::ChatProvider;
use admission_advisor::domain::recommendation::RecommendationPolicy;
use admission_advisor::state::AppState;
use axum::{Router, middleware, routing::get};
use axum_test::TestServer;
use sqlx::PgPool;
use std::sync::Arc;

pub const TEST_PASSWORD: &str = "open-sesame";
pub const TEST_SECRET: &str = "test-signing-secret-0123";

/// Column values for one test row; unspecified columns use table defaults.
#[derive(Debug, Clone)]
pub struct Row {
    pub year: i32,
    pub university: &'static str,
    pub major: &'static str,
    pub score: Option<f64>,
    pub rank: Option<i64>,
    pub location: &'static str,
    pub category: &'static str,
    pub subject: &'static str,
    pub is_985: bool,
    pub is_211: bool,
}

impl Row {
    pub fn new(year: i32, university: &'static str, major: &'static str) -> Self {
        Self {
            year,
            university,
            major,
            score: None,
            rank: None,
            location: "",
            category: "物理类",
            subject: "",
            is_985: false,
            is_211: false,
        }
    }

    pub fn score(mut self, score: f64) -> Self {
        self.score = Some(score);
        self
    }

    pub fn rank(mut self, rank: i64) -> Self {
        self.rank = Some(rank);
        self
    }

    pub fn location(mut self, location: &'static str) -> Self {
        self.location = location;
        self
    }

    pub fn category(mut self, category: &'static str) -> Self {
        self.category = category;
        self
    }

    pub fn subject(mut self, subject: &'static str) -> Self {
        self.subject = subject;
        self
    }

    pub fn elite(mut self) -> Self {
        self.is_985 = true;
        self.is_211 = true;
        self
    }
}

pub async fn insert(pool: &PgPool, row: Row) -> i64 {
    sqlx::query_scalar(
        r#"
        INSERT INTO admission_data
            (year, university_name, university_code, category, batch, subject_requirement,
             major, min_score, min_rank, school_location, school_nature, is_985, is_211)
        VALUES ($1, $2, '', $3, '本科批', $4, $5, $6, $7, $8, '公办', $9, $10)
        RETURNING id
        "#,
    )
    .bind(row.year)
    .bind(row.university)
    .bind(row.category)
    .bind(row.subject)
    .bind(row.major)
    .bind(row.score)
    .bind(row.rank)
    .bind(row.location)
    .bind(row.is_985)
    .bind(row.is_211)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn insert_all(pool: &PgPool, rows: Vec<Row>) {
    for row in rows {
        insert(pool, row).await;
    }
}

/// The five-point score/rank table used by the resolver scenarios.
pub async fn seed_score_table(pool: &PgPool, year: i32) {
    let table = [
        (480.0, 52_000),
        (490.0, 47_000),
        (495.0, 45_000),
        (500.0, 42_000),
        (510.0, 37_000),
    ];
    for (i, (score, rank)) in table.into_iter().enumerate() {
        let major = ["哲学", "经济学", "法学", "教育学", "文学"][i];
        insert(pool, Row::new(year, "测试大学", major).score(score).rank(rank)).await;
    }
}

pub async fn insert_profile(pool: &PgPool, university: &str, ranking: i32) {
    sqlx::query("INSERT INTO university_details (university_name, ranking, website) VALUES ($1, $2, 'https://example.edu')")
        .bind(university)
        .bind(ranking)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn insert_major_ranking(pool: &PgPool, university: &str, major: &str, rating: &str) {
    sqlx::query("INSERT INTO major_rankings (university_name, major_name, rating, ranking) VALUES ($1, $2, $3, 1)")
        .bind(university)
        .bind(major)
        .bind(rating)
        .execute(pool)
        .await
        .unwrap();
}

pub fn test_auth_service() -> AuthService {
    AuthService::new(TEST_PASSWORD.to_string(), TEST_SECRET.to_string(), 3600)
}

pub fn create_test_state(pool: PgPool) -> AppState {
    create_test_state_with_provider(pool, None)
}

pub fn create_test_state_with_provider(
    pool: PgPool,
    provider: Option<Arc<dyn ChatProvider>>,
) -> AppState {
    AppState::new(
        Arc::new(pool),
        RecommendationPolicy::default(),
        test_auth_service(),
        provider,
    )
}

/// A valid bearer token for [`create_test_state`].
pub fn bearer_token() -> String {
    format!("Bearer {}", test_auth_service().login(TEST_PASSWORD).unwrap().token)
}

/// The `/api` tree with authentication but without rate limiting, which needs
/// a peer address the test transport does not provide.
pub fn api_app(state: AppState) -> Router {
    let protected =
        protected_routes().route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));

    Router::new()
        .nest(
            "/api",
            Router::new()
                .route("/health", get(health_handler))
                .merge(auth_routes())
                .merge(protected),
        )
        .with_state(state)
}

pub fn test_server(state: AppState) -> TestServer {
    TestServer::new(api_app(state)).unwrap()
}
