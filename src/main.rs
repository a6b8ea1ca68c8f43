use anyhow::{anyhow, Result};
use clap::Parser;
use env_logger::Env;
use log::{info, LevelFilter};

use earthpulse_resolver::config::Config;
use earthpulse_resolver::services::TokenDiscovery;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Override the configured result limit
    #[arg(long)]
    limit: Option<usize>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Parse command line arguments and setup logging
    let args = Args::parse();
    let log_level = match args.log_level.to_lowercase().as_str() {
        "error" => LevelFilter::Error,
        "warn" => LevelFilter::Warn,
        "info" => LevelFilter::Info,
        "debug" => LevelFilter::Debug,
        "trace" => LevelFilter::Trace,
        _ => LevelFilter::Info,
    };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level.to_string())).init();

    // Load configuration
    let mut config = Config::load().map_err(|e| anyhow!("Failed to load configuration: {}", e))?;
    if let Some(limit) = args.limit {
        config.gallery.result_limit = limit;
    }

    info!("Starting Earth Pulse token resolution...");
    info!("Network: {}, result limit: {}", config.network.name, config.gallery.result_limit);

    let discovery = TokenDiscovery::from_config(config)?;
    let tokens = discovery.resolve_tokens().await;

    info!("Resolution finished with {} tokens", tokens.len());
    println!("{}", serde_json::to_string_pretty(&tokens)?);

    Ok(())
}
