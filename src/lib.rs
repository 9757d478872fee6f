//! Dayflow credential core
//!
//! Login ID synthesis, password generation and strength checks, account
//! form validation and the signed-in session for the Dayflow HR system.

pub mod config;
pub mod error;
pub mod forms;
pub mod identity;
pub mod password;
pub mod session;
pub mod utils;

pub use config::CredentialConfig;
pub use error::{CredentialError, IdentityError, SessionError};
pub use forms::{Field, FieldErrors, SignInForm, SignUpForm};
pub use identity::{
    Clock, FixedClock, FixedSerial, LoginId, LoginIdGenerator, SerialRegistry, SerialSource,
    SystemClock, generate_login_id, generate_login_id_now,
};
pub use password::{PasswordRule, PasswordVerdict, generate_password, validate_password};
pub use session::{AppContext, Role, Session};
pub use utils::validation::{is_valid_email, is_valid_phone};
