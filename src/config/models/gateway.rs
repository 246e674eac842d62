//! Gateway configuration

use super::*;
use crate::utils::error::{GatewayError, Result};
use serde::{Deserialize, Serialize};

/// Environment variable overriding the bind host
pub const ENV_HOST: &str = "KEYGATE_HOST";
/// Environment variable overriding the bind port
pub const ENV_PORT: &str = "KEYGATE_PORT";
/// Environment variable overriding the API key header name
pub const ENV_API_KEY_HEADER: &str = "KEYGATE_API_KEY_HEADER";
/// Environment variable enabling query parameter keys
pub const ENV_ALLOW_QUERY_PARAM: &str = "KEYGATE_ALLOW_QUERY_PARAM";
/// Environment variable overriding the log level
pub const ENV_LOG_LEVEL: &str = "KEYGATE_LOG_LEVEL";
/// Environment variable overriding the log format
pub const ENV_LOG_FORMAT: &str = "KEYGATE_LOG_FORMAT";

/// Main gateway configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GatewayConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// API key authentication configuration
    #[serde(default)]
    pub auth: ApiKeyAuthConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl GatewayConfig {
    /// Defaults with `KEYGATE_*` environment overrides applied
    pub fn from_env() -> Result<Self> {
        Self::default().with_env_overrides(|name| std::env::var(name).ok())
    }

    /// Apply overrides from a variable lookup, typically the process environment
    pub fn with_env_overrides<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup(ENV_HOST) {
            self.server.host = host;
        }
        if let Some(port) = lookup(ENV_PORT) {
            self.server.port = port
                .trim()
                .parse()
                .map_err(|_| GatewayError::config(format!("{} is not a valid port: {:?}", ENV_PORT, port)))?;
        }
        if let Some(header) = lookup(ENV_API_KEY_HEADER) {
            self.auth.header_name = header.trim().to_string();
        }
        if let Some(flag) = lookup(ENV_ALLOW_QUERY_PARAM) {
            self.auth.allow_query_param = parse_bool(&flag).ok_or_else(|| {
                GatewayError::config(format!("{} must be true or false: {:?}", ENV_ALLOW_QUERY_PARAM, flag))
            })?;
        }
        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            self.logging.level = level;
        }
        if let Some(format) = lookup(ENV_LOG_FORMAT) {
            self.logging.format = format.parse().map_err(GatewayError::Config)?;
        }
        Ok(self)
    }

    /// Merge two configurations, with other taking precedence
    pub fn merge(mut self, other: Self) -> Self {
        self.server = self.server.merge(other.server);
        self.auth = self.auth.merge(other.auth);
        self.logging = self.logging.merge(other.logging);
        self
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
