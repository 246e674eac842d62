//! API key authentication
//!
//! A request is accepted when the credential it carries is an exact member of
//! the configured [`KeySet`]. Credentials are looked up, in order, in the
//! `Authorization: ApiKey <key>` header, the configured custom header, and
//! (only when enabled) a query parameter.

mod extractor;
mod guard;
mod key_set;
mod types;


pub use extractor::{
    API_KEY_SCHEME, AuthorizationHeader, CredentialExtractor, NamedHeader, QueryParam,
};
pub use guard::{ApiKeyGuard, RejectionHook, log_rejection};
pub use key_set::KeySet;
pub use types::{
    AUDIT_PREFIX_CHARS, AuthContext, AuthError, CredentialSource, RejectedAttempt,
    truncate_credential,
};
