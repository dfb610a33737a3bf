//! M-Pulse API Server
//!
//! Run with: cargo run
//!
//! # Configuration
//!
//! Loaded from `--config <path>`, default config locations, or environment
//! variables (`MPULSE_HOST`, `MPULSE_PORT`, `MPULSE_REFRESH_INTERVAL_SECS`,
//! `MPULSE_LOG_LEVEL`, `MPULSE_LOG_FORMAT`). CLI flags win over both.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mpulse::api::{serve, AppState};
use mpulse::config::{generate_default_config, Config};

#[derive(Parser, Debug)]
#[command(name = "mpulse", version, about = "M-Pulse health command API server")]
struct Args {
    /// Path to a TOML config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the bind host
    #[arg(long)]
    host: Option<String>,

    /// Override the bind port
    #[arg(long)]
    port: Option<u16>,

    /// Print the default config file and exit
    #[arg(long)]
    print_default_config: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if args.print_default_config {
        print!("{}", generate_default_config());
        return Ok(());
    }

    let mut config = match &args.config {
        Some(path) => Config::load_with_env(path)
            .with_context(|| format!("loading config from {:?}", path))?,
        None => Config::load_default(),
    };
    if let Some(host) = args.host {
        config.api.host = host;
    }
    if let Some(port) = args.port {
        config.api.port = port;
    }

    init_tracing(&config);

    tracing::info!("Starting M-Pulse API server v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        "Snapshot refresh interval: {}s",
        config.refresh.interval_secs
    );

    let state = Arc::new(AppState::new(config));

    // Periodic snapshot refresh (the original dashboard's 5-minute timer)
    let refresh_handle = AppState::start_periodic_refresh(Arc::clone(&state));

    serve(Arc::clone(&state)).await?;

    refresh_handle.abort();
    tracing::info!("M-Pulse API server stopped");

    Ok(())
}

/// Initialize tracing per the logging config
fn init_tracing(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        tracing_subscriber::EnvFilter::new(format!(
            "mpulse={},tower_http=debug",
            config.logging.level
        ))
    });

    let registry = tracing_subscriber::registry().with(filter);

    if config.logging.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
