//! Error handling for the gateway
//!
//! This module defines the gateway error type, its HTTP rendering and the
//! crate-wide `Result` alias.

mod helpers;
mod response;
mod types;


pub use response::ErrorResponse;
pub use types::{GatewayError, Result};
