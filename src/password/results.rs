//! Password validation result types
//!
//! Defines the verdict returned by strength checks.

use std::fmt;

/// A single strength rule, in the order rules are checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordRule {
    MinLength(usize),
    Uppercase,
    Lowercase,
    Digit,
}

impl PasswordRule {
    /// Message shown when the rule fails
    pub fn message(&self) -> String {
        match self {
            PasswordRule::MinLength(n) => format!("Password must be at least {n} characters"),
            PasswordRule::Uppercase => "Password must contain an uppercase letter".to_string(),
            PasswordRule::Lowercase => "Password must contain a lowercase letter".to_string(),
            PasswordRule::Digit => "Password must contain a number".to_string(),
        }
    }
}

/// Outcome of a strength check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordVerdict {
    pub is_valid: bool,
    pub message: String,
    pub failed_rule: Option<PasswordRule>,
}

impl PasswordVerdict {
    pub(crate) fn strong() -> Self {
        Self {
            is_valid: true,
            message: "Password is strong".to_string(),
            failed_rule: None,
        }
    }

    pub(crate) fn failed(rule: PasswordRule) -> Self {
        Self {
            is_valid: false,
            message: rule.message(),
            failed_rule: Some(rule),
        }
    }
}

impl fmt::Display for PasswordVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}
