//! Test fixtures

use actix_web::web;
use keygate::auth::KeySet;
use keygate::config::{ApiKeyAuthConfig, Config};
use keygate::server::{AppState, ServerBuilder};

/// Key list used by the scenario tests
pub const TEST_KEYS: &str = "abc123, def456";

/// Application state with default configuration and the given key list
pub fn app_state(keys: &str) -> web::Data<AppState> {
    app_state_with(keys, ApiKeyAuthConfig::default())
}

/// Application state with a custom auth configuration
pub fn app_state_with(keys: &str, auth: ApiKeyAuthConfig) -> web::Data<AppState> {
    let mut config = Config::default();
    config.gateway.auth = auth;

    let server = ServerBuilder::new()
        .with_config(config)
        .with_keys(KeySet::parse(keys))
        .build()
        .expect("test configuration is valid");

    web::Data::new(server.state().clone())
}
