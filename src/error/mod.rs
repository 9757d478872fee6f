//! Error handling
//!
//! Defines error types for the credential core.

pub mod types;

pub use types::*;
