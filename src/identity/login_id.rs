//! Login ID format
//!
//! A login ID is three two-letter name segments, a four-digit year and a
//! zero-padded serial. Segments keep only ASCII letters from their input,
//! so a name with fewer than two letters yields a shorter segment and a
//! shorter ID. No padding is applied.

use std::fmt;

use crate::error::IdentityError;
use crate::identity::clock::{Clock, SystemClock};

/// Letters kept from each name
pub const SEGMENT_LEN: usize = 2;

/// Width of the year component
pub const YEAR_WIDTH: usize = 4;

/// Width the serial is zero-padded to
pub const SERIAL_WIDTH: usize = 4;

/// Largest serial that still fits the padded width
pub const MAX_SERIAL: u32 = 9999;

/// Length of a login ID built from names with at least two letters each
pub const LOGIN_ID_LEN: usize = 3 * SEGMENT_LEN + YEAR_WIDTH + SERIAL_WIDTH;

/// A generated or parsed login ID such as `DAJOHA20240001`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LoginId(String);

impl LoginId {
    /// Parses an existing login ID.
    ///
    /// Accepts up to six letters followed by exactly eight digits (year and
    /// serial). Letters are uppercased; surrounding whitespace is ignored.
    pub fn parse(input: &str) -> Result<Self, IdentityError> {
        let candidate = input.trim().to_ascii_uppercase();
        let malformed = || IdentityError::MalformedLoginId(input.to_string());

        if !candidate.is_ascii() {
            return Err(malformed());
        }

        let letters = leading_letters(&candidate);
        let digits = &candidate[letters..];

        if letters > 3 * SEGMENT_LEN
            || digits.len() != YEAR_WIDTH + SERIAL_WIDTH
            || !digits.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(malformed());
        }

        Ok(Self(candidate))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The serial scope: name segments plus year.
    pub fn prefix(&self) -> &str {
        let end = leading_letters(&self.0) + YEAR_WIDTH;
        self.0.get(..end).unwrap_or(&self.0)
    }

    pub fn year(&self) -> Option<i32> {
        let start = leading_letters(&self.0);
        self.0.get(start..start + YEAR_WIDTH)?.parse().ok()
    }

    pub fn serial(&self) -> Option<u32> {
        self.0.get(self.prefix().len()..)?.parse().ok()
    }

    pub(crate) fn from_parts(prefix: &str, serial: u32) -> Self {
        Self(format!("{prefix}{serial:0width$}", width = SERIAL_WIDTH))
    }
}

impl fmt::Display for LoginId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for LoginId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<LoginId> for String {
    fn from(id: LoginId) -> Self {
        id.0
    }
}

fn leading_letters(s: &str) -> usize {
    s.bytes().take_while(u8::is_ascii_alphabetic).count()
}

/// First two ASCII letters of `name`, uppercased. Everything else is dropped
/// before truncation.
fn name_segment(name: &str) -> String {
    name.chars()
        .filter(char::is_ascii_alphabetic)
        .take(SEGMENT_LEN)
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// Builds the serial scope `company + first + last + year`.
pub fn login_id_prefix(company_name: &str, first_name: &str, last_name: &str, year: i32) -> String {
    format!(
        "{}{}{}{:0width$}",
        name_segment(company_name),
        name_segment(first_name),
        name_segment(last_name),
        year,
        width = YEAR_WIDTH
    )
}

/// Builds a login ID for the given year and serial.
///
/// The serial is taken as given; uniqueness is the caller's concern (see
/// [`LoginIdGenerator`](crate::identity::LoginIdGenerator) for a checked variant).
pub fn generate_login_id(
    company_name: &str,
    first_name: &str,
    last_name: &str,
    year: i32,
    serial: u32,
) -> LoginId {
    let prefix = login_id_prefix(company_name, first_name, last_name, year);
    LoginId::from_parts(&prefix, serial)
}

/// Builds a login ID stamped with the current local year.
pub fn generate_login_id_now(
    company_name: &str,
    first_name: &str,
    last_name: &str,
    serial: u32,
) -> LoginId {
    generate_login_id(
        company_name,
        first_name,
        last_name,
        SystemClock.current_year(),
        serial,
    )
}
