//! Utility functions
//!
//! Common field validators and logging setup.

pub mod logging;
pub mod validation;

pub use logging::setup_logging;
pub use validation::{is_valid_email, is_valid_phone, is_valid_phone_with};
