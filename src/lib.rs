//! # keygate
//!
//! API key authentication for actix-web services, plus a small gateway that
//! hosts protected routes behind it.
//!
//! Requests to the protected scope must carry one of the configured shared
//! secrets, looked up in this order:
//!
//! 1. `Authorization: ApiKey <key>`
//! 2. a custom header, `x-api-key` by default
//! 3. the `api_key` query parameter, only when explicitly enabled
//!
//! Keys are compared in constant time against the whole key set. An empty key
//! set fails closed with HTTP 500; missing and invalid keys both get 401.
//!
//! ## Guarding your own routes
//!
//! ```rust,no_run
//! use actix_web::{App, HttpResponse, web};
//! use keygate::auth::{ApiKeyGuard, AuthContext, KeySet, log_rejection};
//! use keygate::config::ApiKeyAuthConfig;
//! use keygate::server::middleware::ApiKeyMiddleware;
//!
//! # fn build() -> keygate::Result<()> {
//! let guard = ApiKeyGuard::new(KeySet::from_env("API_KEYS"), &ApiKeyAuthConfig::default())?
//!     .on_rejected(log_rejection);
//!
//! let app = App::new().service(
//!     web::scope("/admin")
//!         .wrap(ApiKeyMiddleware::new(guard))
//!         .route(
//!             "/orders",
//!             web::get().to(|auth: web::ReqData<AuthContext>| async move {
//!                 HttpResponse::Ok().json(auth.authenticated_with_api_key)
//!             }),
//!         ),
//! );
//! # let _ = app;
//! # Ok(())
//! # }
//! ```

#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod auth;
pub mod config;
pub mod server;
pub mod utils;

pub use config::Config;
pub use utils::error::{GatewayError, Result};

/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
/// Description of the crate
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Gateway build information
#[derive(Debug, Clone)]
pub struct BuildInfo {
    /// Version number
    pub version: &'static str,
    /// Build timestamp (seconds since the Unix epoch)
    pub build_time: &'static str,
    /// Git commit hash
    pub git_hash: &'static str,
    /// Rust version
    pub rust_version: &'static str,
}

impl Default for BuildInfo {
    fn default() -> Self {
        Self {
            version: VERSION,
            build_time: env!("BUILD_TIME"),
            git_hash: env!("GIT_HASH"),
            rust_version: env!("RUST_VERSION"),
        }
    }
}

/// Build metadata recorded by `build.rs`
pub fn build_info() -> BuildInfo {
    BuildInfo::default()
}
