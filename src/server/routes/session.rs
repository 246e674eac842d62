//! Session introspection for API key clients

use crate::auth::AuthContext;
use crate::server::middleware::RequestId;
use actix_web::{HttpMessage, HttpRequest, HttpResponse, web};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct SessionResponse {
    authenticated_with_api_key: bool,
    credential_source: &'static str,
    request_id: Option<String>,
}

/// Describe how the caller authenticated
pub async fn current_session(auth: web::ReqData<AuthContext>, req: HttpRequest) -> HttpResponse {
    let request_id = req.extensions().get::<RequestId>().map(|id| id.0.clone());

    HttpResponse::Ok().json(SessionResponse {
        authenticated_with_api_key: auth.authenticated_with_api_key,
        credential_source: auth.source.as_str(),
        request_id,
    })
}
