//! SentiView - Main Entry Point

use anyhow::Result;
use clap::Parser;
use sentiview_common::{init_logging, LoggingConfig};
use sentiview_config::{ConfigLoader, CONFIG_PATH_ENV};
use std::path::PathBuf;
use tracing::info;

/// Command line arguments
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Configuration file path
    #[arg(short, long, env = CONFIG_PATH_ENV)]
    config: Option<PathBuf>,

    /// Log level, overriding the configuration file
    #[arg(short, long)]
    log_level: Option<String>,

    /// Address to listen on, overriding the configuration file
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let config = ConfigLoader::load_with(args.config.as_deref(), |config| {
        if let Some(level) = args.log_level {
            config.logging.level = level;
        }
        if let Some(bind) = args.bind {
            config.server.bind_address = bind;
        }
    })?;

    init_logging(&LoggingConfig::from(&config.logging))?;
    info!(
        "Starting SentiView v{} with the {} engine",
        env!("CARGO_PKG_VERSION"),
        config.analysis.engine
    );

    sentiview_web::serve(config).await?;
    Ok(())
}
