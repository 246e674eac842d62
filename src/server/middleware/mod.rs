//! HTTP middleware implementations
//!
//! - API key authentication for the protected scope
//! - Request ID tracking

mod api_key;
mod request_id;


pub use api_key::{ApiKeyMiddleware, ApiKeyMiddlewareService};
pub use request_id::{REQUEST_ID_HEADER, RequestId, RequestIdMiddleware, RequestIdMiddlewareService};
