//! CLI administration tool for url-shortener.
//!
//! Reads the record store directly, without going through the HTTP API.
//! Inspection commands never count clicks.
//!
//! # Usage
//!
//! ```bash
//! # List all short URLs, newest first
//! cargo run --bin admin -- list
//!
//! # Show one record
//! cargo run --bin admin -- stats Ab3_x-9Z
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! Same as the server: `DATABASE_URL` or the `DB_*` components.

use url_shortener::application::services::{ListingService, StatsService};
use url_shortener::config::{Config, StoreKind};
use url_shortener::domain::entities::UrlRecord;
use url_shortener::domain::repositories::UrlRepository;
use url_shortener::error::AppError;
use url_shortener::infrastructure::persistence;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use std::sync::Arc;

/// CLI tool for managing url-shortener.
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
    /// List all short URLs, newest first
    List,

    /// Show statistics for one short URL
    Stats {
        /// The 8-character short id
        short_id: String,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = Config::from_env()?;
    config.validate()?;

    if config.store_kind() == StoreKind::Memory {
        println!(
            "{}",
            "⚠️  DATABASE_URL points at the in-memory store; it is always empty here".yellow()
        );
    }

    let repository = persistence::connect(&config).await?;

    match cli.command {
        Commands::List => list_urls(repository).await?,
        Commands::Stats { short_id } => show_stats(repository, &short_id).await?,
        Commands::Db { action } => handle_db_action(action, repository).await?,
    }

    Ok(())
}

/// Lists every record.
///
/// # Output Format
///
/// ```text
/// 📋 Short URLs
///
///   Short ID  Clicks  Created           Original URL
///   ──────────────────────────────────────────────────────────────
///   Ab3_x-9Z  12      2025-01-15 10:30  https://example.com
/// ```
async fn list_urls(repository: Arc<dyn UrlRepository>) -> Result<()> {
    println!("{}", "📋 Short URLs".bright_blue().bold());
    println!();

    let records = ListingService::new(repository)
        .list_all()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list URLs: {}", e))?;

    if records.is_empty() {
        println!("{}", "  No URLs found".yellow());
        return Ok(());
    }

    println!(
        "  {:<9} {:<7} {:<17} {}",
        "Short ID".bright_white().bold(),
        "Clicks".bright_white().bold(),
        "Created".bright_white().bold(),
        "Original URL".bright_white().bold()
    );
    println!("  {}", "─".repeat(75).bright_black());

    for record in &records {
        println!(
            "  {:<9} {:<7} {:<17} {}",
            record.short_id.cyan(),
            record.clicks.to_string().bright_green(),
            record
                .created_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black(),
            record.original_url
        );
    }

    println!();
    println!(
        "  Total: {}",
        records.len().to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

/// Prints one record's metadata.
async fn show_stats(repository: Arc<dyn UrlRepository>, short_id: &str) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    match StatsService::new(repository).get_stats(short_id).await {
        Ok(record) => print_record(&record),
        Err(AppError::NotFound { .. }) => {
            println!("  {} {}", "No URL with id".red(), short_id.cyan());
            println!();
        }
        Err(e) => anyhow::bail!("Failed to load statistics: {}", e),
    }

    Ok(())
}

fn print_record(record: &UrlRecord) {
    println!("  Short ID:     {}", record.short_id.cyan());
    println!("  Original URL: {}", record.original_url.bright_white());
    println!(
        "  Clicks:       {}",
        record.clicks.to_string().bright_green().bold()
    );
    println!(
        "  Created:      {}",
        record
            .created_at
            .format("%Y-%m-%d %H:%M:%S UTC")
            .to_string()
            .bright_black()
    );
    println!();
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, repository: Arc<dyn UrlRepository>) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            repository
                .ping()
                .await
                .map_err(|e| anyhow::anyhow!("Database check failed: {}", e))?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
    }

    Ok(())
}
