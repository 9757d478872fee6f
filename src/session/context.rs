//! Application context
//!
//! Owns the configuration and the current session, and manages the
//! session lifecycle.

use log::{info, warn};

use crate::config::CredentialConfig;
use crate::error::SessionError;
use crate::forms::SignInForm;
use crate::session::state::{Role, Session};

pub struct AppContext {
    config: CredentialConfig,
    session: Option<Session>,
}

impl AppContext {
    pub fn new(config: CredentialConfig) -> Self {
        Self {
            config,
            session: None,
        }
    }

    pub fn config(&self) -> &CredentialConfig {
        &self.config
    }

    /// Signs in with the role inferred from the login ID.
    pub fn sign_in(
        &mut self,
        form: &SignInForm,
        name: &str,
        email: &str,
    ) -> Result<&Session, SessionError> {
        let role = Role::from_login_id(form.login_id.trim());
        self.sign_in_as(form, name, email, role)
    }

    /// Validates the form and opens a session with an explicit role.
    ///
    /// Fails if someone is already signed in; sign out first.
    pub fn sign_in_as(
        &mut self,
        form: &SignInForm,
        name: &str,
        email: &str,
        role: Role,
    ) -> Result<&Session, SessionError> {
        form.validate().map_err(SessionError::InvalidForm)?;

        if let Some(active) = &self.session {
            warn!(
                "Sign-in as {} refused: {} is still signed in",
                form.login_id.trim(),
                active.login_id()
            );
            return Err(SessionError::AlreadySignedIn(active.login_id().to_string()));
        }

        let session = Session::new(form.login_id.trim(), name, email, role);
        info!("{} signed in as {}", session.login_id(), session.role());
        Ok(&*self.session.insert(session))
    }

    /// Ends the current session and returns it.
    pub fn sign_out(&mut self) -> Result<Session, SessionError> {
        let session = self.session.take().ok_or(SessionError::NotSignedIn)?;
        info!("{} signed out", session.login_id());
        Ok(session)
    }

    pub fn current_session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn is_signed_in(&self) -> bool {
        self.session.is_some()
    }

    pub fn require_session(&self) -> Result<&Session, SessionError> {
        self.session.as_ref().ok_or(SessionError::NotSignedIn)
    }

    /// The current session, if it belongs to HR or an administrator.
    pub fn require_privileged(&self) -> Result<&Session, SessionError> {
        let session = self.require_session()?;
        if session.role().is_privileged() {
            Ok(session)
        } else {
            Err(SessionError::Forbidden(session.login_id().to_string()))
        }
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new(CredentialConfig::default())
    }
}
