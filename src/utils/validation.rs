//! Input validation utilities
//!
//! Email and phone checks for account forms. Both are intentionally
//! permissive: the email pattern is not RFC 5322 and phone formatting
//! characters are ignored.

use std::sync::LazyLock;

use regex::Regex;

/// Digits in a valid phone number
pub const PHONE_DIGITS: usize = 10;

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

/// `local@domain.tld` with no whitespace and a single `@`
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Exactly ten digits once everything else is stripped
pub fn is_valid_phone(phone: &str) -> bool {
    is_valid_phone_with(phone, PHONE_DIGITS)
}

pub fn is_valid_phone_with(phone: &str, digits: usize) -> bool {
    phone.chars().filter(char::is_ascii_digit).count() == digits
}
