//! HTTP route handlers

use crate::server::state::AppState;
use actix_web::{HttpResponse, web};
use serde_json::json;

/// Health check endpoint handler
///
/// Reports 503 while no API keys are loaded so load balancers keep a
/// misconfigured instance out of rotation.
pub async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    let info = crate::build_info();
    let keys_loaded = state.guard.key_count() > 0;

    let body = json!({
        "status": if keys_loaded { "healthy" } else { "misconfigured" },
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": info.version,
        "git_hash": info.git_hash,
    });

    if keys_loaded {
        HttpResponse::Ok().json(body)
    } else {
        HttpResponse::ServiceUnavailable().json(body)
    }
}
