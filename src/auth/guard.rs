//! API key guard
//!
//! [`ApiKeyGuard::authenticate`] is the single decision point used by the
//! middleware: it needs no I/O and touches no shared mutable state, so it runs
//! synchronously on whichever worker handles the request.

use super::extractor::{AuthorizationHeader, CredentialExtractor, NamedHeader, QueryParam};
use super::key_set::KeySet;
use super::types::{AuthContext, AuthError, CredentialSource, RejectedAttempt, truncate_credential};
use crate::config::ApiKeyAuthConfig;
use crate::utils::error::{GatewayError, Result};
use actix_web::{HttpMessage, HttpRequest};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, error, warn};

/// Callback invoked for every request rejected with an invalid credential
pub type RejectionHook = Arc<dyn Fn(&RejectedAttempt) + Send + Sync>;

/// Validates requests against a [`KeySet`]
///
/// Cloning is cheap; clones share the key set and extractors.
#[derive(Clone)]
pub struct ApiKeyGuard {
    keys: Arc<KeySet>,
    extractors: Arc<[Box<dyn CredentialExtractor>]>,
    on_rejected: Option<RejectionHook>,
}

impl ApiKeyGuard {
    /// Build a guard from a key set and the authentication config
    pub fn new(keys: KeySet, config: &ApiKeyAuthConfig) -> Result<Self> {
        config.validate().map_err(GatewayError::Config)?;
        let header = config.header().map_err(GatewayError::Config)?;

        let mut extractors: Vec<Box<dyn CredentialExtractor>> =
            vec![Box::new(AuthorizationHeader), Box::new(NamedHeader::new(header))];
        if config.allow_query_param {
            extractors.push(Box::new(QueryParam::new(config.query_param.trim())));
        }

        if keys.is_empty() {
            error!(
                keys_env = %config.keys_env,
                "No API keys configured; every protected request will fail with 500"
            );
        }

        Ok(Self {
            keys: Arc::new(keys),
            extractors: extractors.into(),
            on_rejected: None,
        })
    }

    /// Install the audit callback for invalid credentials
    pub fn on_rejected<F>(mut self, hook: F) -> Self
    where
        F: Fn(&RejectedAttempt) + Send + Sync + 'static,
    {
        self.on_rejected = Some(Arc::new(hook));
        self
    }

    /// Number of configured keys
    pub fn key_count(&self) -> usize {
        self.keys.len()
    }

    /// First credential found, in extractor priority order
    pub fn extract_credential(&self, req: &HttpRequest) -> Option<(CredentialSource, String)> {
        self.extractors
            .iter()
            .find_map(|extractor| extractor.extract(req).map(|value| (extractor.source(), value)))
    }

    /// Authenticate a request
    ///
    /// On success the [`AuthContext`] marker is inserted into the request
    /// extensions and also returned.
    pub fn authenticate(&self, req: &HttpRequest) -> std::result::Result<AuthContext, AuthError> {
        if self.keys.is_empty() {
            error!(path = %req.path(), "Rejecting request: API key set is empty");
            return Err(AuthError::ServerMisconfigured);
        }

        let Some((source, credential)) = self.extract_credential(req) else {
            debug!(path = %req.path(), "No API key supplied");
            return Err(AuthError::MissingCredential);
        };

        if !self.keys.contains(&credential) {
            if let Some(hook) = &self.on_rejected {
                let attempt = RejectedAttempt {
                    client_address: req.peer_addr().map(|addr| addr.ip().to_string()),
                    path: req.path().to_string(),
                    truncated_credential: truncate_credential(&credential),
                };
                hook(&attempt);
            }
            return Err(AuthError::InvalidCredential);
        }

        let context = AuthContext {
            authenticated_with_api_key: true,
            source,
        };
        req.extensions_mut().insert(context);
        debug!(path = %req.path(), source = %source, "API key accepted");

        Ok(context)
    }
}

impl fmt::Debug for ApiKeyGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sources: Vec<CredentialSource> = self.extractors.iter().map(|e| e.source()).collect();
        f.debug_struct("ApiKeyGuard")
            .field("keys", &self.keys)
            .field("sources", &sources)
            .field("on_rejected", &self.on_rejected.is_some())
            .finish()
    }
}

/// Default audit hook: a structured warning per rejected attempt
pub fn log_rejection(attempt: &RejectedAttempt) {
    warn!(
        event = "api_key_rejected",
        client = attempt.client_address.as_deref().unwrap_or("unknown"),
        path = %attempt.path,
        credential = %attempt.truncated_credential,
        "Rejected request with invalid API key"
    );
}
