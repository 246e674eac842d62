//! Routes mounted inside the API key protected scope

mod session;

use actix_web::web;

/// Register protected routes; the caller wraps the scope with the guard
pub fn configure_protected_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/session", web::get().to(session::current_session));
}
