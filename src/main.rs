//! keygate - API key gateway
//!
//! Serves `/health` publicly and the configured API prefix behind the API key
//! guard. Keys come from the environment variable named in the config
//! (`API_KEYS` by default) as a comma-separated list.

use clap::Parser;
use keygate::server::{self, ServerOptions};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(name = "keygate", version, about = "API key authentication gateway")]
struct Cli {
    /// Path to the YAML configuration file
    #[arg(short, long, env = "KEYGATE_CONFIG")]
    config: Option<PathBuf>,

    /// Host to bind
    #[arg(long)]
    host: Option<String>,

    /// Port to bind
    #[arg(short, long)]
    port: Option<u16>,
}

impl From<Cli> for ServerOptions {
    fn from(cli: Cli) -> Self {
        ServerOptions {
            config_path: cli.config,
            host: cli.host,
            port: cli.port,
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env file is normal in production
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    match server::run_server(cli.into()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Logging may not be installed yet when config loading fails
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
