mod analyzer;
mod config;
mod db;
mod error;
mod models;

use analyzer::DataAnalyzer;
use config::AppConfig;
use db::{queries, Database};
use tracing::{error, info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load config
    let config = AppConfig::load()?;

    // Init logging
    tracing_subscriber::fmt()
        .with_env_filter(&config.log_level)
        .init();

    info!("Starting Trip Analytics...");

    if let Err(e) = run(&config).await {
        error!("Trip analytics failed: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}

async fn run(config: &AppConfig) -> anyhow::Result<()> {
    // Init DB
    let database = Database::connect(&config.database_url).await?;
    info!("Connected to database");

    if database.is_connected().await {
        info!("Database connectivity check passed");
    } else {
        warn!("Database connectivity check failed");
    }

    let data_analyzer = DataAnalyzer::new(&database);

    let trips = data_analyzer.fetch_data(queries::SELECT_ALL_TRIPS).await?;
    info!("Fetched {} trip records", trips.len());

    let report = analyzer::analyze_null_values(&trips);
    println!("{report}");

    let before = trips.len();
    let cleaned = analyzer::clean_data(trips);
    info!(
        "Cleaned data: {} of {} records kept",
        cleaned.len(),
        before
    );

    let enriched = analyzer::add_time_columns(cleaned);
    if let Some(first) = enriched.first() {
        info!(
            "First trip: {:.1} min, {} {}-{:02}",
            first.trip_duration, first.day_of_week, first.year, first.month
        );
    }

    database.disconnect().await;
    info!("Connection to the database closed");

    Ok(())
}
