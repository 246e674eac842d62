//! API key authentication types

use crate::utils::error::ErrorResponse;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use std::fmt;
use thiserror::Error;

/// Number of leading credential characters kept in audit records
pub const AUDIT_PREFIX_CHARS: usize = 6;

/// Where a credential was found
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialSource {
    /// `Authorization: ApiKey <value>`
    AuthorizationHeader,
    /// Configured custom header, `x-api-key` by default
    NamedHeader,
    /// Opt-in query parameter
    QueryParam,
}

impl CredentialSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            CredentialSource::AuthorizationHeader => "authorization_header",
            CredentialSource::NamedHeader => "named_header",
            CredentialSource::QueryParam => "query_param",
        }
    }
}

impl fmt::Display for CredentialSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Marker attached to request extensions after a successful check
///
/// Handlers read it with `web::ReqData<AuthContext>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthContext {
    pub authenticated_with_api_key: bool,
    pub source: CredentialSource,
}

/// Audit record for a request rejected because its credential did not match
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedAttempt {
    /// Peer IP address, when the transport exposes one
    pub client_address: Option<String>,
    /// Request path
    pub path: String,
    /// Credential prefix followed by `...`
    pub truncated_credential: String,
}

/// Failed authentication outcome
///
/// Missing and invalid credentials share status 401 and differ only in the
/// message. A missing key set is an operational fault and maps to 500.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    #[error("API key configuration missing on server.")]
    ServerMisconfigured,

    #[error("API key required.")]
    MissingCredential,

    #[error("Invalid API key.")]
    InvalidCredential,
}

impl ResponseError for AuthError {
    fn status_code(&self) -> StatusCode {
        match self {
            AuthError::ServerMisconfigured => StatusCode::INTERNAL_SERVER_ERROR,
            AuthError::MissingCredential | AuthError::InvalidCredential => StatusCode::UNAUTHORIZED,
        }
    }

    fn error_response(&self) -> HttpResponse {
        ErrorResponse::new(self.to_string()).respond(self.status_code())
    }
}

/// Shorten a credential for logging: the first few characters plus `...`
///
/// The ellipsis is always appended so a short credential is not mistaken for
/// a complete one in the logs.
pub fn truncate_credential(credential: &str) -> String {
    let prefix: String = credential.chars().take(AUDIT_PREFIX_CHARS).collect();
    format!("{}...", prefix)
}
