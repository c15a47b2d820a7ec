//! HTTP server initialization and runtime setup.
//!
//! Handles the database pool, migrations, the optional chat provider and the
//! Axum server lifecycle.

use crate::application::services::AuthService;
use crate::config::Config;
use crate::domain::chat_provider::ChatProvider;
use crate::domain::recommendation::RecommendationPolicy;
use crate::infrastructure::llm::{AnthropicClient, AnthropicSettings};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio_retry::Retry;
use tokio_retry::strategy::{ExponentialBackoff, jitter};
use url::Url;

/// Retries after the first failed connection attempt.
const CONNECT_RETRIES: usize = 5;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - PostgreSQL connection pool (with retries)
/// - Apply migrations
/// - Anthropic chat provider, when an API key is configured
/// - Axum HTTP server
///
/// # Errors
///
/// Returns an error if:
/// - Database connection fails after all retries
/// - Migrations fail
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let pool = connect_database(&config).await?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to run migrations")?;

    let chat_provider = build_chat_provider(&config)?;

    let auth_service = AuthService::new(
        config.access_password.clone(),
        config.session_signing_secret.clone(),
        config.session_ttl_seconds,
    );

    let state = AppState::new(
        Arc::new(pool),
        RecommendationPolicy::default(),
        auth_service,
        chat_provider,
    );

    let app = app_router(state, &config)?;

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    Ok(())
}

/// Connects with exponential backoff so the service survives a database that
/// starts after it.
async fn connect_database(config: &Config) -> Result<PgPool> {
    let options = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime));

    let strategy = ExponentialBackoff::from_millis(2)
        .factor(100)
        .max_delay(Duration::from_secs(5))
        .map(jitter)
        .take(CONNECT_RETRIES);

    Retry::spawn(strategy, || {
        let options = options.clone();
        async move {
            options
                .connect(&config.database_url)
                .await
                .inspect_err(|e| tracing::warn!(error = %e, "Database connection failed, retrying"))
        }
    })
    .await
    .context("Failed to connect to database")
}

fn build_chat_provider(config: &Config) -> Result<Option<Arc<dyn ChatProvider>>> {
    let Some(api_key) = &config.anthropic_api_key else {
        tracing::info!("AI advisor disabled (no ANTHROPIC_API_KEY)");
        return Ok(None);
    };

    let client = AnthropicClient::new(AnthropicSettings {
        api_key: api_key.clone(),
        base_url: Url::parse(&config.llm_base_url).context("Invalid LLM_BASE_URL")?,
        model: config.llm_model.clone(),
        max_tokens: config.llm_max_tokens,
        timeout: Duration::from_secs(config.llm_timeout_seconds),
    })?;

    tracing::info!(model = %client.model(), "AI advisor enabled");
    Ok(Some(Arc::new(client)))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}
