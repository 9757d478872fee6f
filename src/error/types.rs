//! Error types
//!
//! Defines domain-specific error types for each module of the credential core.

use std::fmt;

use crate::forms::FieldErrors;

/// Identity module errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdentityError {
    SerialExhausted { prefix: String, max: u32 },
    MalformedLoginId(String),
}

impl fmt::Display for IdentityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdentityError::SerialExhausted { prefix, max } => {
                write!(f, "No serial left for {} (maximum {})", prefix, max)
            }
            IdentityError::MalformedLoginId(id) => write!(f, "Malformed login ID: {}", id),
        }
    }
}

impl std::error::Error for IdentityError {}

/// Session module errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    InvalidForm(FieldErrors),
    AlreadySignedIn(String),
    NotSignedIn,
    Forbidden(String),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::InvalidForm(errors) => write!(f, "Invalid sign-in form: {}", errors),
            SessionError::AlreadySignedIn(id) => write!(f, "Already signed in as {}", id),
            SessionError::NotSignedIn => write!(f, "No user signed in"),
            SessionError::Forbidden(id) => write!(f, "Not enough permissions for {}", id),
        }
    }
}

impl std::error::Error for SessionError {}

/// Top-level error that encompasses all error types
#[derive(Debug)]
pub enum CredentialError {
    Form(FieldErrors),
    Identity(IdentityError),
    Session(SessionError),
    Config(config::ConfigError),
}

impl fmt::Display for CredentialError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CredentialError::Form(e) => write!(f, "Invalid form: {}", e),
            CredentialError::Identity(e) => write!(f, "Identity error: {}", e),
            CredentialError::Session(e) => write!(f, "Session error: {}", e),
            CredentialError::Config(e) => write!(f, "Configuration error: {}", e),
        }
    }
}

impl std::error::Error for CredentialError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CredentialError::Form(_) => None,
            CredentialError::Identity(e) => Some(e),
            CredentialError::Session(e) => Some(e),
            CredentialError::Config(e) => Some(e),
        }
    }
}

impl From<IdentityError> for CredentialError {
    fn from(error: IdentityError) -> Self {
        CredentialError::Identity(error)
    }
}

impl From<SessionError> for CredentialError {
    fn from(error: SessionError) -> Self {
        CredentialError::Session(error)
    }
}

impl From<config::ConfigError> for CredentialError {
    fn from(error: config::ConfigError) -> Self {
        CredentialError::Config(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_error_display() {
        let err = IdentityError::SerialExhausted {
            prefix: "DAJODO2024".to_string(),
            max: 9999,
        };
        assert_eq!(err.to_string(), "No serial left for DAJODO2024 (maximum 9999)");
    }

    #[test]
    fn test_credential_error_wraps_source() {
        let err: CredentialError = SessionError::NotSignedIn.into();
        assert_eq!(err.to_string(), "Session error: No user signed in");
        assert!(std::error::Error::source(&err).is_some());
    }
}
