//! API key authentication configuration

use super::*;
use actix_web::http::header::HeaderName;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// API key authentication configuration
///
/// The keys themselves never live in the config file: `keys_env` names the
/// environment variable that holds the comma-separated key list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiKeyAuthConfig {
    /// Environment variable holding the comma-separated key list
    #[serde(default = "default_keys_env")]
    pub keys_env: String,
    /// Custom header checked when no `Authorization: ApiKey` header is present
    #[serde(default = "default_api_key_header")]
    pub header_name: String,
    /// Accept the key as a query parameter
    #[serde(default)]
    pub allow_query_param: bool,
    /// Query parameter name, used only when `allow_query_param` is set
    #[serde(default = "default_query_param")]
    pub query_param: String,
}

impl Default for ApiKeyAuthConfig {
    fn default() -> Self {
        Self {
            keys_env: default_keys_env(),
            header_name: default_api_key_header(),
            allow_query_param: false,
            query_param: default_query_param(),
        }
    }
}

impl ApiKeyAuthConfig {
    /// Merge auth configurations
    pub fn merge(mut self, other: Self) -> Self {
        if other.keys_env != default_keys_env() {
            self.keys_env = other.keys_env;
        }
        if other.header_name != default_api_key_header() {
            self.header_name = other.header_name;
        }
        if other.allow_query_param {
            self.allow_query_param = other.allow_query_param;
        }
        if other.query_param != default_query_param() {
            self.query_param = other.query_param;
        }
        self
    }

    /// Parsed header name
    pub fn header(&self) -> Result<HeaderName, String> {
        HeaderName::from_bytes(self.header_name.as_bytes())
            .map_err(|_| format!("Invalid API key header name: {:?}", self.header_name))
    }

    /// Validate authentication configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.keys_env.trim().is_empty() {
            return Err("API key environment variable name cannot be empty".to_string());
        }

        if self.header_name.is_empty() {
            return Err("API key header name cannot be empty".to_string());
        }

        let header = self.header()?;
        if header == actix_web::http::header::AUTHORIZATION {
            return Err(
                "API key header name cannot be 'authorization'; that header is always checked for the ApiKey scheme"
                    .to_string(),
            );
        }

        if self.allow_query_param && self.query_param.trim().is_empty() {
            return Err("Query parameter name cannot be empty when query keys are enabled".to_string());
        }

        Ok(())
    }
}

/// Warn about configurations that work but leak credentials
pub fn warn_insecure_config(config: &ApiKeyAuthConfig) {
    if config.allow_query_param {
        warn!(
            query_param = %config.query_param,
            "API keys are accepted in the query string; they may end up in access logs and browser history"
        );
    }
}
