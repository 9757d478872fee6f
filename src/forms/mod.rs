//! Account forms
//!
//! Field-by-field validation for the sign-up and sign-in screens. Every
//! field is checked and each one reports its first failure.

pub mod field_errors;
pub mod sign_in;
pub mod sign_up;

pub use field_errors::{Field, FieldErrors};
pub use sign_in::SignInForm;
pub use sign_up::SignUpForm;
