use anyhow::Result;
use image_describer::{config, server, vision};
use tracing::info;

/// Validates that a log level string is valid
fn validate_log_level(level: &str) -> Result<()> {
    level
        .parse::<tracing_subscriber::filter::LevelFilter>()
        .map_err(|_| {
            anyhow::anyhow!(
                "Invalid log level: '{}'. Valid levels: error, warn, info, debug, trace",
                level
            )
        })?;
    Ok(())
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

    // The credential is resolved exactly once; without it there is nothing to serve.
    let api_key = match config.model.api_key() {
        Ok(key) => key,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    // Determine log level: environment variable overrides config
    let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| config.server.logs.level.clone());

    if let Err(e) = validate_log_level(&log_level) {
        eprintln!("{}", e);
        std::process::exit(1);
    }

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&log_level))
        .json()
        .init();

    info!("Starting image describer with log level: {}", log_level);
    info!(
        provider = %config.model.provider,
        model = %config.model.model,
        "Configuration loaded successfully"
    );

    let client = vision::create_client(&config.model, api_key)?;

    server::run(config, client).await?;

    Ok(())
}
