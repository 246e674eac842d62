//! HTTP server core implementation

use crate::auth::{ApiKeyGuard, KeySet, log_rejection};
use crate::config::{Config, CorsConfig, ServerConfig};
use crate::server::handlers::health_check;
use crate::server::middleware::{ApiKeyMiddleware, RequestIdMiddleware};
use crate::server::routes;
use crate::server::state::AppState;
use crate::utils::error::{GatewayError, Result};
use actix_cors::Cors;
use actix_web::{
    App, HttpServer as ActixHttpServer,
    middleware::DefaultHeaders,
    web,
};
use std::io::ErrorKind;
use tracing::{info, warn};
use tracing_actix_web::TracingLogger;

/// HTTP server
#[derive(Debug)]
pub struct HttpServer {
    /// Server configuration
    config: ServerConfig,
    /// Application state
    state: AppState,
}

impl HttpServer {
    /// Create a server, reading the key list from the configured environment variable
    pub fn new(config: &Config) -> Result<Self> {
        let keys = KeySet::from_env(&config.auth().keys_env);
        Self::with_keys(config, keys)
    }

    /// Create a server with an explicit key set
    pub fn with_keys(config: &Config, keys: KeySet) -> Result<Self> {
        info!("Creating HTTP server");

        if !keys.is_empty() {
            info!(keys = keys.len(), "Loaded API keys");
        }

        let guard = ApiKeyGuard::new(keys, config.auth())?.on_rejected(log_rejection);
        let state = AppState::new(config.clone(), guard);

        Ok(Self {
            config: config.server().clone(),
            state,
        })
    }

    /// Start the HTTP server
    pub async fn start(self) -> Result<()> {
        let bind_addr = self.config.address();
        let port = self.config.port;

        info!("Starting HTTP server on {}", bind_addr);

        let state = web::Data::new(self.state);

        let mut server = ActixHttpServer::new(move || create_app(state.clone()));
        if let Some(workers) = self.config.workers {
            server = server.workers(workers);
        }

        let server = server
            .bind(&bind_addr)
            .map_err(|e| format_bind_error(e, &bind_addr, port))?
            .run();

        info!("HTTP server listening on {}", bind_addr);

        server
            .await
            .map_err(|e| GatewayError::server(format!("Server error: {}", e)))?;

        info!("HTTP server stopped");
        Ok(())
    }

    /// Get server configuration
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Get application state
    pub fn state(&self) -> &AppState {
        &self.state
    }
}

/// Create the Actix-web application
///
/// `/health` is public; everything under the configured API prefix passes
/// through the API key guard.
pub fn create_app(
    state: web::Data<AppState>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let server_config = &state.config.gateway.server;
    let cors = build_cors(&server_config.cors);
    let api_key_layer = ApiKeyMiddleware::new(state.guard.clone());
    let protected = web::scope(&server_config.api_prefix)
        .wrap(api_key_layer)
        .configure(routes::configure_protected_routes);

    App::new()
        .app_data(state.clone())
        .wrap(cors)
        .wrap(DefaultHeaders::new().add(("Server", "keygate")))
        .wrap(RequestIdMiddleware)
        .wrap(TracingLogger::default())
        .route("/health", web::get().to(health_check))
        .service(protected)
}

fn build_cors(cors_config: &CorsConfig) -> Cors {
    if !cors_config.enabled {
        return Cors::default();
    }

    let mut cors = Cors::default();
    if cors_config.allows_all_origins() {
        cors = cors.allow_any_origin();
    } else {
        for origin in &cors_config.allowed_origins {
            cors = cors.allowed_origin(origin);
        }
    }

    let methods: Vec<actix_web::http::Method> = cors_config
        .allowed_methods
        .iter()
        .filter_map(|m| m.parse().ok())
        .collect();
    if !methods.is_empty() {
        cors = cors.allowed_methods(methods);
    }

    let headers: Vec<actix_web::http::header::HeaderName> = cors_config
        .allowed_headers
        .iter()
        .filter_map(|h| h.parse().ok())
        .collect();
    if !headers.is_empty() {
        cors = cors.allowed_headers(headers);
    }

    cors = cors.max_age(cors_config.max_age as usize);

    if cors_config.allow_credentials {
        cors = cors.supports_credentials();
    }
    cors
}

fn format_bind_error(error: std::io::Error, bind_addr: &str, port: u16) -> GatewayError {
    match error.kind() {
        ErrorKind::AddrInUse => {
            warn!(port, "Port already in use");
            GatewayError::server(format!(
                "Port {} is already in use; stop the other process or set KEYGATE_PORT / --port",
                port
            ))
        }
        ErrorKind::PermissionDenied => GatewayError::server(format!(
            "Permission denied binding {}; ports below 1024 need elevated privileges",
            bind_addr
        )),
        _ => GatewayError::server(format!("Failed to bind {}: {}", bind_addr, error)),
    }
}
