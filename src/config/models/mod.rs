//! Configuration data models
//!
//! This module defines all configuration structures used throughout the gateway.

pub mod auth;
pub mod gateway;
pub mod logging;
pub mod server;

pub use auth::*;
pub use gateway::*;
pub use logging::*;
pub use server::*;

/// Default values for configuration
pub fn default_host() -> String {
    "0.0.0.0".to_string()
}

/// Default server port
pub fn default_port() -> u16 {
    8000
}

/// Default prefix of the API key protected scope
pub fn default_api_prefix() -> String {
    "/api".to_string()
}

/// Default environment variable holding the comma-separated key list
pub fn default_keys_env() -> String {
    "API_KEYS".to_string()
}

/// Default custom header carrying the API key
pub fn default_api_key_header() -> String {
    "x-api-key".to_string()
}

/// Default query parameter carrying the API key (when enabled)
pub fn default_query_param() -> String {
    "api_key".to_string()
}

/// Default log level directive
pub fn default_log_level() -> String {
    "info".to_string()
}

pub(crate) fn default_true() -> bool {
    true
}
