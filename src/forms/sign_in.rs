//! Sign-in form validation.

use crate::forms::field_errors::{Field, FieldErrors};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignInForm {
    pub login_id: String,
    pub password: String,
}

impl SignInForm {
    pub fn new(login_id: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            login_id: login_id.into(),
            password: password.into(),
        }
    }

    /// Both fields must be filled in. The login ID is trimmed first; the
    /// password is taken as typed.
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();

        if self.login_id.trim().is_empty() {
            errors.add(Field::LoginId, "Login ID is required");
        }

        if self.password.is_empty() {
            errors.add(Field::Password, "Password is required");
        }

        errors.into_result()
    }
}
