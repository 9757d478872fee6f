//! Password generation and strength checks
//!
//! Generated passwords are twelve characters with at least one uppercase
//! letter, lowercase letter, digit and special character. Strength checks
//! report the first rule a password breaks.

pub mod generator;
pub mod results;
pub mod validator;

pub use generator::{PASSWORD_LENGTH, SPECIAL_CHARS, generate_password, generate_password_with};
pub use results::{PasswordRule, PasswordVerdict};
pub use validator::{MIN_PASSWORD_LENGTH, validate_password, validate_password_with};
