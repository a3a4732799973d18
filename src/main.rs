//! jobboard - in-memory job listing service
//!
//! Main entry point for the jobboard CLI and server.

mod cli;
mod server;

use clap::Parser;
use tracing::{error, warn};

use jobboard_config::{ConfigLoader, ConfigValidator};

use crate::cli::{Cli, Commands};
use crate::server::{init_tracing, run_server};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = ConfigLoader::load_or_default(&cli.config)?;
    match cli.command {
        None => {}
        Some(Commands::Run(args)) => args.apply(&mut config),
    }

    let warnings = ConfigValidator::validate(&config)?.into_result()?;

    init_tracing(&config.logging)?;

    for warning in warnings {
        warn!("Config {}: {}", warning.path, warning.message);
    }

    if let Err(e) = run_server(config).await {
        error!("Server error: {}", e);
        return Err(e);
    }

    Ok(())
}
