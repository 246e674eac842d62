//! Common test utilities for keygate

pub mod assertions;
pub mod fixtures;

pub use assertions::assert_error_response;
pub use fixtures::{TEST_KEYS, app_state, app_state_with};
