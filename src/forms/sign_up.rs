//! Sign-up form validation
//!
//! Validates a new employee account and issues its login ID.

use log::info;

use crate::config::CredentialConfig;
use crate::error::CredentialError;
use crate::forms::field_errors::{Field, FieldErrors};
use crate::identity::{Clock, LoginId, LoginIdGenerator, SerialSource, generate_login_id};
use crate::password::validate_password_with;
use crate::utils::validation::{is_valid_email, is_valid_phone_with};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignUpForm {
    pub company_name: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub confirm_password: String,
}

impl SignUpForm {
    /// Validates against the default policy.
    pub fn validate(&self) -> Result<(), FieldErrors> {
        self.validate_with(&CredentialConfig::default())
    }

    pub fn validate_with(&self, config: &CredentialConfig) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();

        let required = [
            (Field::CompanyName, &self.company_name, "Company name is required"),
            (Field::FirstName, &self.first_name, "First name is required"),
            (Field::LastName, &self.last_name, "Last name is required"),
            (Field::Email, &self.email, "Email is required"),
            (Field::Phone, &self.phone, "Phone number is required"),
        ];
        for (field, value, message) in required {
            if value.trim().is_empty() {
                errors.add(field, message);
            }
        }

        if !errors.contains(Field::Email) && !is_valid_email(&self.email) {
            errors.add(Field::Email, "Please enter a valid email address");
        }

        if !errors.contains(Field::Phone) && !is_valid_phone_with(&self.phone, config.phone_digits) {
            errors.add(
                Field::Phone,
                format!(
                    "Please enter a valid {}-digit phone number",
                    config.phone_digits
                ),
            );
        }

        if self.password.is_empty() {
            errors.add(Field::Password, "Password is required");
        } else {
            let verdict = validate_password_with(&self.password, config.min_password_length);
            if !verdict.is_valid {
                errors.add(Field::Password, verdict.message);
            }
        }

        if self.password != self.confirm_password {
            errors.add(Field::ConfirmPassword, "Passwords do not match");
        }

        errors.into_result()
    }

    /// Live preview shown while the form is being filled in: serial 1 once
    /// all three names are present.
    pub fn preview_login_id<C: Clock>(&self, clock: &C) -> Option<LoginId> {
        if self.company_name.is_empty() || self.first_name.is_empty() || self.last_name.is_empty()
        {
            return None;
        }

        Some(generate_login_id(
            &self.company_name,
            &self.first_name,
            &self.last_name,
            clock.current_year(),
            1,
        ))
    }

    /// Validates the form and issues a login ID for the new account.
    pub fn register<S: SerialSource, C: Clock>(
        &self,
        generator: &mut LoginIdGenerator<S, C>,
        config: &CredentialConfig,
    ) -> Result<LoginId, CredentialError> {
        self.validate_with(config).map_err(CredentialError::Form)?;

        let login_id = generator.generate(&self.company_name, &self.first_name, &self.last_name)?;
        info!(
            "Employee account created for {} with login ID {}",
            self.email, login_id
        );
        Ok(login_id)
    }
}
