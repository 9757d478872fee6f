//! Password strength validator
//!
//! Rules run in a fixed order (length, uppercase, lowercase, digit) and
//! the first failure is the one reported.

use crate::password::results::{PasswordRule, PasswordVerdict};

/// Minimum accepted password length, in characters
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Checks `password` against the default policy.
pub fn validate_password(password: &str) -> PasswordVerdict {
    validate_password_with(password, MIN_PASSWORD_LENGTH)
}

/// Checks `password` with a custom minimum length.
pub fn validate_password_with(password: &str, min_length: usize) -> PasswordVerdict {
    if password.chars().count() < min_length {
        return PasswordVerdict::failed(PasswordRule::MinLength(min_length));
    }

    let classes: [(PasswordRule, fn(&char) -> bool); 3] = [
        (PasswordRule::Uppercase, char::is_ascii_uppercase),
        (PasswordRule::Lowercase, char::is_ascii_lowercase),
        (PasswordRule::Digit, char::is_ascii_digit),
    ];

    for (rule, matches) in classes {
        if !password.chars().any(|c| matches(&c)) {
            return PasswordVerdict::failed(rule);
        }
    }

    PasswordVerdict::strong()
}
