//! CLI administration tool for admission-advisor.
//!
//! Loads admission data, inspects the database and generates secrets without
//! going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Import a CSV export of the admission spreadsheet
//! cargo run --bin admin -- import data/admission_2025.csv
//!
//! # Replace all existing records without prompting
//! cargo run --bin admin -- import data/all.csv --truncate --yes
//!
//! # Records per year
//! cargo run --bin admin -- stats
//!
//! # Nearest score/rank lookup
//! cargo run --bin admin -- resolve --year 2025 --score 600
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//!
//! # Generate a session signing secret
//! cargo run --bin admin -- secret generate
//! ```
//!
//! # Environment Variables
//!
//! Database commands need `DATABASE_URL` or the `DB_HOST` / `DB_PORT` /
//! `DB_USER` / `DB_PASSWORD` / `DB_NAME` components, resolved the same way as
//! for the server.

use admission_advisor::application::services::ScoreRankService;
use admission_advisor::config::Config;
use admission_advisor::infrastructure::csv_import::parse_csv;
use admission_advisor::infrastructure::persistence::PgAdmissionRepository;

use anyhow::{Context, Result};
use clap::{ArgGroup, Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use std::path::PathBuf;
use std::sync::Arc;

/// CLI tool for managing admission-advisor.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Import admission records from a CSV file
    Import {
        /// Path to the CSV file (Chinese or English headers)
        file: PathBuf,

        /// Delete all existing records first
        #[arg(long)]
        truncate: bool,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Show record counts per year
    Stats,

    /// Resolve a score to a rank or a rank to a score
    #[command(group(ArgGroup::new("input").required(true).args(["score", "rank"])))]
    Resolve {
        #[arg(long)]
        year: i32,

        #[arg(long)]
        score: Option<f64>,

        #[arg(long)]
        rank: Option<i64>,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },

    /// Secret management
    Secret {
        #[command(subcommand)]
        action: SecretAction,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

#[derive(Subcommand)]
enum SecretAction {
    /// Generate a random value for SESSION_SIGNING_SECRET
    Generate {
        /// Print only the secret
        #[arg(long)]
        raw: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    if let Commands::Secret { action } = &cli.command {
        handle_secret_action(action);
        return Ok(());
    }

    let database_url = Config::load_database_url()?;

    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    match cli.command {
        Commands::Import {
            file,
            truncate,
            yes,
        } => import_records(&pool, file, truncate, yes).await?,
        Commands::Stats => handle_stats(&pool).await?,
        Commands::Resolve { year, score, rank } => resolve(&pool, year, score, rank).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
        Commands::Secret { .. } => {}
    }

    Ok(())
}

/// Imports records from a CSV file.
///
/// # Flow
///
/// 1. Parse the whole file, collecting rows that cannot be imported
/// 2. Show a summary and the first skipped rows
/// 3. Confirm (unless `--yes`); `--truncate` asks with default No
/// 4. Run migrations, optionally truncate, then insert in batches
async fn import_records(pool: &PgPool, file: PathBuf, truncate: bool, yes: bool) -> Result<()> {
    println!("{}", "📥 Import admission records".bright_blue().bold());
    println!();

    let data = std::fs::read(&file).with_context(|| format!("Failed to read {}", file.display()))?;
    let parsed = parse_csv(&data).map_err(|e| anyhow::anyhow!("{}", e))?;

    println!("  File:     {}", file.display().to_string().cyan());
    println!(
        "  Valid:    {}",
        parsed.records.len().to_string().bright_green().bold()
    );
    println!(
        "  Skipped:  {}",
        parsed.skipped.len().to_string().yellow().bold()
    );

    for row in parsed.skipped.iter().take(10) {
        println!(
            "    {} {}",
            format!("line {}:", row.line).bright_black(),
            row.reason
        );
    }
    if parsed.skipped.len() > 10 {
        println!("    {}", "...".bright_black());
    }
    println!();

    if parsed.records.is_empty() {
        println!("{}", "⚠️  Nothing to import".yellow());
        return Ok(());
    }

    if !yes {
        let prompt = if truncate {
            "Delete ALL existing records and import?"
        } else {
            "Import these records?"
        };

        let confirmed = Confirm::new()
            .with_prompt(prompt)
            .default(!truncate)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .context("Failed to run migrations")?;

    let repo = PgAdmissionRepository::new(Arc::new(pool.clone()));

    if truncate {
        repo.truncate()
            .await
            .map_err(|e| anyhow::anyhow!("Failed to truncate: {}", e))?;
        println!("{}", "🗑️  Existing records removed".yellow());
    }

    let inserted = repo
        .insert_batch(&parsed.records)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to insert records: {}", e))?;

    println!();
    println!(
        "{} {}",
        "✅ Imported".green().bold(),
        format!("{inserted} records").bright_white().bold()
    );
    println!();

    Ok(())
}

/// Displays record counts per year.
///
/// # Output Format
///
/// ```text
/// 📊 Statistics
///
///   Year   Records
///   ──────────────
///   2025   48210
///   2024   47733
///
///   Total: 95943
/// ```
async fn handle_stats(pool: &PgPool) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let rows: Vec<(i32, i64)> = sqlx::query_as(
        "SELECT year, COUNT(*) FROM admission_data GROUP BY year ORDER BY year DESC",
    )
    .fetch_all(pool)
    .await?;

    if rows.is_empty() {
        println!("{}", "  No records found".yellow());
        println!();
        println!(
            "  Import some with: {} admin import <file.csv>",
            "cargo run --bin".bright_cyan()
        );
        return Ok(());
    }

    println!(
        "  {:<6} {}",
        "Year".bright_white().bold(),
        "Records".bright_white().bold()
    );
    println!("  {}", "─".repeat(14).bright_black());

    for (year, count) in &rows {
        println!(
            "  {:<6} {}",
            year.to_string().cyan(),
            count.to_string().bright_green()
        );
    }

    let total: i64 = rows.iter().map(|(_, c)| c).sum();
    println!();
    println!("  Total: {}", total.to_string().bright_white().bold());
    println!();

    Ok(())
}

async fn resolve(pool: &PgPool, year: i32, score: Option<f64>, rank: Option<i64>) -> Result<()> {
    let repo = Arc::new(PgAdmissionRepository::new(Arc::new(pool.clone())));
    let service = ScoreRankService::new(repo);

    let mapping = service
        .resolve(year, score, rank)
        .await
        .map_err(|e| anyhow::anyhow!("Lookup failed: {}", e))?;

    match (mapping.score, mapping.rank) {
        (Some(s), Some(r)) => println!(
            "  {} score {} ↔ rank {}",
            year.to_string().bright_black(),
            s.to_string().bright_green().bold(),
            r.to_string().bright_green().bold()
        ),
        _ => println!("{}", format!("  No data for {year}").yellow()),
    }

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;
            let records: Option<i64> = sqlx::query_scalar(
                "SELECT reltuples::bigint FROM pg_class WHERE relname = 'admission_data'",
            )
            .fetch_optional(pool)
            .await?;

            println!("  PostgreSQL: {}", version.bright_white());
            match records {
                Some(n) => println!("  Records:    ~{}", n.max(0).to_string().bright_white()),
                None => println!("  Records:    {}", "not migrated".yellow()),
            }
            println!();
        }
    }

    Ok(())
}

fn handle_secret_action(action: &SecretAction) {
    match action {
        SecretAction::Generate { raw } => {
            let secret = generate_secret();
            if *raw {
                println!("{secret}");
                return;
            }

            println!("{}", "🔑 Session signing secret".bright_blue().bold());
            println!();
            println!("  SESSION_SIGNING_SECRET={}", secret.bright_yellow().bold());
            println!();
            println!(
                "{}",
                "⚠️  Changing this value signs out every session.".yellow()
            );
        }
    }
}

/// 32 random bytes, hex-encoded (64 characters).
fn generate_secret() -> String {
    use rand::Rng;
    let bytes: [u8; 32] = rand::rng().random();
    hex::encode(bytes)
}
