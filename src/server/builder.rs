//! Server builder and run_server function
//!
//! `run_server` resolves configuration (file, environment, flags), installs
//! logging, then builds and starts the HTTP server.

use crate::auth::KeySet;
use crate::config::Config;
use crate::server::server::HttpServer;
use crate::utils::error::{GatewayError, Result};
use crate::utils::logging::init_logging;
use std::path::{Path, PathBuf};
use tracing::info;

/// Configuration file used when no path is given and the file exists
pub const DEFAULT_CONFIG_PATH: &str = "config/gateway.yaml";

/// Startup options, usually parsed from the command line
#[derive(Debug, Clone, Default)]
pub struct ServerOptions {
    /// Explicit configuration file; must exist when set
    pub config_path: Option<PathBuf>,
    /// Host override
    pub host: Option<String>,
    /// Port override
    pub port: Option<u16>,
}

impl ServerOptions {
    /// Resolve the effective configuration
    pub async fn load_config(&self) -> Result<Config> {
        let mut config = match &self.config_path {
            Some(path) => Config::from_file(path).await?,
            None if Path::new(DEFAULT_CONFIG_PATH).exists() => {
                Config::from_file(DEFAULT_CONFIG_PATH).await?
            }
            None => Config::from_env()?,
        };

        if let Some(host) = &self.host {
            config.gateway.server.host = host.clone();
        }
        if let Some(port) = self.port {
            config.gateway.server.port = port;
        }

        config.validate()?;
        Ok(config)
    }
}

/// Server builder for easier configuration
#[derive(Debug, Default)]
pub struct ServerBuilder {
    config: Option<Config>,
    keys: Option<KeySet>,
}

impl ServerBuilder {
    /// Create a new server builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set configuration
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Use these keys instead of reading the configured environment variable
    pub fn with_keys(mut self, keys: KeySet) -> Self {
        self.keys = Some(keys);
        self
    }

    /// Build the HTTP server
    pub fn build(self) -> Result<HttpServer> {
        let config = self
            .config
            .ok_or_else(|| GatewayError::Config("Configuration is required".to_string()))?;

        match self.keys {
            Some(keys) => HttpServer::with_keys(&config, keys),
            None => HttpServer::new(&config),
        }
    }
}

/// Run the server with automatic configuration loading
pub async fn run_server(options: ServerOptions) -> Result<()> {
    let config = options.load_config().await?;
    init_logging(config.logging())?;

    info!("Starting keygate {}", crate::VERSION);

    let server = ServerBuilder::new().with_config(config.clone()).build()?;
    info!(
        "Protected scope: {} (keys from ${})",
        config.server().api_prefix,
        config.auth().keys_env
    );
    info!("Server starting at: http://{}", config.server().address());

    server.start().await
}
