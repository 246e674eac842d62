//! Integration tests for keygate

pub mod api_key_guard_tests;
pub mod config_validation_tests;
