//! Gwen configuration check.
//!
//! Loads `.env`, resolves the voice assistant's settings from the environment,
//! sets up logging and validates everything the assistant needs before it starts.

mod config;
mod logging;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::{debug, error, info};

use config::{AppConfig, ConfigError};

/// Command line options.
#[derive(Parser, Debug)]
#[command(name = "gwen-config")]
#[command(author, version, about = "Resolve and validate the Gwen voice assistant configuration", long_about = None)]
struct Cli {
    /// Environment file loaded before resolving settings
    #[arg(long, env = "GWEN_ENV_FILE", default_value = ".env")]
    env_file: PathBuf,

    /// Do not load the environment file
    #[arg(long)]
    no_dotenv: bool,

    /// Enable verbose logging
    #[arg(long, short = 'v')]
    verbose: bool,

    /// Print the resolved configuration as JSON (secrets masked)
    #[arg(long)]
    print_config: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logging depends on resolved settings, so the .env outcome is reported afterwards
    let dotenv = (!cli.no_dotenv).then(|| config::load_dotenv(&cli.env_file));

    let config = AppConfig::resolve();
    logging::init(config.log_level_value(), cli.verbose, &config.log_file_path);

    info!("🎤 Gwen configuration v{}", env!("CARGO_PKG_VERSION"));

    match dotenv {
        Some(Ok(true)) => debug!("Loaded environment file {}", cli.env_file.display()),
        Some(Ok(false)) => debug!("No environment file at {}", cli.env_file.display()),
        Some(Err(e)) => {
            error!("❌ {}", e);
            std::process::exit(1);
        }
        None => debug!("Environment file loading disabled"),
    }

    config.log_config();

    if let Err(e) = config.validate() {
        error!("❌ Configuration error: {}", e);
        if matches!(e, ConfigError::ResourceNotFound(_)) {
            error!("Point WAKE_WORD_PATH at the Porcupine keyword file (.ppn) for this platform.");
        }
        std::process::exit(1);
    }

    info!("✅ Configuration is valid");

    if cli.print_config {
        println!("{}", serde_json::to_string_pretty(&config.summary())?);
    }

    Ok(())
}
