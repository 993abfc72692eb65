use anyhow::Result;
use ecotrack_rust::{config, server};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Parses a log level or `RUST_LOG`-style directive list
fn parse_log_filter(level: &str) -> Result<EnvFilter> {
    EnvFilter::try_new(level).map_err(|_| {
        anyhow::anyhow!(
            "Invalid log level: '{}'. Valid levels: error, warn, info, debug, trace",
            level
        )
    })
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (before logging setup)
    let config = match config::load().await {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // RUST_LOG overrides the configured level
    let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| config.server.logs.level.clone());

    let filter = match parse_log_filter(&log_level) {
        Ok(filter) => filter,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .init();

    info!(
        "Starting EcoTrack ESG Analyzer v{} with log level: {}",
        env!("CARGO_PKG_VERSION"),
        log_level
    );

    if config.llm.api_key.is_empty() {
        info!("OPENAI_API_KEY is not set; analyze requests will fail until it is provided");
    }

    server::run(config).await?;

    Ok(())
}
