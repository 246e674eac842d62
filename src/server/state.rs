//! Application state shared across HTTP handlers

use crate::auth::ApiKeyGuard;
use crate::config::Config;
use std::sync::Arc;

/// HTTP server state shared across handlers
///
/// Both fields are read-only after startup and cheap to clone per worker.
#[derive(Clone, Debug)]
pub struct AppState {
    /// Gateway configuration (shared read-only)
    pub config: Arc<Config>,
    /// API key guard for the protected scope
    pub guard: ApiKeyGuard,
}

impl AppState {
    pub fn new(config: Config, guard: ApiKeyGuard) -> Self {
        Self {
            config: Arc::new(config),
            guard,
        }
    }

    /// Get gateway configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}
