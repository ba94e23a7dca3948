//! Localist — seed importer entry point.
//!
//! Loads open-data business-licence records from a JSON file or URL and
//! imports them into the businesses table. Run once against an empty
//! database, or with `--truncate` to replace existing rows.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context};
use clap::Parser;
use localist::{
    config::Config,
    db::PostgresBusinessStore,
    logging,
    services::{LicenceRecord, SeedService},
    state::create_db_pool,
};

#[derive(Debug, Parser)]
#[command(name = "localist-seed", about = "Import business-licence records")]
struct Args {
    /// JSON file containing an array of licence records
    #[arg(long, conflicts_with = "url")]
    file: Option<PathBuf>,

    /// URL returning a JSON array of licence records
    #[arg(long)]
    url: Option<String>,

    /// Rows per INSERT statement
    #[arg(long, default_value_t = 100)]
    batch_size: usize,

    /// Remove existing business rows before importing
    #[arg(long)]
    truncate: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = Config::load().context("Failed to load configuration")?;
    config
        .validate()
        .map_err(|e| anyhow::anyhow!("Invalid configuration: {e}"))?;
    logging::init_logging(&config.logging).context("Failed to initialize logging")?;

    let records: Vec<LicenceRecord> = if let Some(url) = &args.url {
        tracing::info!(url, "Fetching licence records");
        reqwest::get(url)
            .await
            .context("Failed to fetch licence records")?
            .error_for_status()
            .context("Licence record endpoint answered with an error status")?
            .json()
            .await
            .context("Failed to parse licence records")?
    } else if let Some(file) = &args.file {
        tracing::info!(file = %file.display(), "Reading licence records");
        let raw = std::fs::read_to_string(file)
            .with_context(|| format!("Failed to read {}", file.display()))?;
        serde_json::from_str(&raw).context("Failed to parse licence records")?
    } else {
        bail!("either --file or --url is required");
    };

    tracing::info!(count = records.len(), "Loaded licence records");

    let pool = create_db_pool(&config)
        .await
        .context("Failed to create database pool")?;
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to run database migrations")?;

    let store = Arc::new(PostgresBusinessStore::new(pool));
    let seeder = SeedService::new(store);

    if args.truncate {
        seeder.clear().await.context("Failed to truncate businesses")?;
    }

    let report = seeder
        .seed(&records, args.batch_size)
        .await
        .context("Seeding failed")?;

    tracing::info!(
        total = report.total,
        retained = report.retained,
        skipped = report.skipped_unrecognized,
        inserted = report.inserted,
        "Seed import finished"
    );

    Ok(())
}
