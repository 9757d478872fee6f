//! Signed-in user session
//!
//! The application context owns at most one session. Signing in opens it,
//! signing out tears it down; nothing else holds the current user.

pub mod context;
pub mod state;

pub use context::AppContext;
pub use state::{Role, Session};
