//! Login identity
//!
//! Builds Dayflow login IDs: two letters each of company, first and last
//! name, the four-digit year, then a four-digit serial
//! (e.g. `DAJOHA20240001`). Serial uniqueness comes from an injected
//! [`SerialSource`], the year from an injected [`Clock`].

pub mod clock;
pub mod generator;
pub mod login_id;
pub mod serial;

pub use clock::{Clock, FixedClock, SystemClock};
pub use generator::LoginIdGenerator;
pub use login_id::{
    LOGIN_ID_LEN, LoginId, MAX_SERIAL, generate_login_id, generate_login_id_now, login_id_prefix,
};
pub use serial::{FixedSerial, SerialRegistry, SerialSource};
