//! Utility modules for the gateway
//!
//! - **error**: error types and their HTTP rendering
//! - **logging**: `tracing` subscriber setup

pub mod error;
pub mod logging;
