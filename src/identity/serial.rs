//! Serial number sources
//!
//! A serial is unique within its scope, the login ID prefix
//! (company, initials and year). The registry keeps the last serial issued
//! per scope and hands out the next one.

use std::collections::HashMap;

use log::{debug, warn};

use crate::error::IdentityError;
use crate::identity::login_id::{LoginId, MAX_SERIAL};

/// Hands out serial numbers for a login ID prefix.
pub trait SerialSource {
    fn next_serial(&mut self, prefix: &str) -> Result<u32, IdentityError>;
}

impl<S: SerialSource + ?Sized> SerialSource for &mut S {
    fn next_serial(&mut self, prefix: &str) -> Result<u32, IdentityError> {
        (**self).next_serial(prefix)
    }
}

/// A caller-supplied serial. Uniqueness is not checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedSerial(pub u32);

impl SerialSource for FixedSerial {
    fn next_serial(&mut self, _prefix: &str) -> Result<u32, IdentityError> {
        Ok(self.0)
    }
}

/// In-memory per-prefix sequence.
#[derive(Debug, Clone)]
pub struct SerialRegistry {
    last_issued: HashMap<String, u32>,
    max_serial: u32,
}

impl SerialRegistry {
    pub fn new() -> Self {
        Self::with_max_serial(MAX_SERIAL)
    }

    pub fn with_max_serial(max_serial: u32) -> Self {
        Self {
            last_issued: HashMap::new(),
            max_serial,
        }
    }

    /// Records an existing login ID so later serials in its scope follow it.
    pub fn observe(&mut self, id: &LoginId) {
        let Some(serial) = id.serial() else {
            warn!("Ignoring login ID without a serial: {}", id);
            return;
        };

        let last = self.last_issued.entry(id.prefix().to_string()).or_insert(0);
        if serial > *last {
            *last = serial;
        }
    }

    /// Last serial issued or observed for `prefix`.
    pub fn last_serial(&self, prefix: &str) -> Option<u32> {
        self.last_issued.get(prefix).copied()
    }

    pub fn max_serial(&self) -> u32 {
        self.max_serial
    }

    /// Number of tracked scopes
    pub fn len(&self) -> usize {
        self.last_issued.len()
    }

    pub fn is_empty(&self) -> bool {
        self.last_issued.is_empty()
    }
}

impl Default for SerialRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl SerialSource for SerialRegistry {
    fn next_serial(&mut self, prefix: &str) -> Result<u32, IdentityError> {
        let next = self
            .last_serial(prefix)
            .unwrap_or(0)
            .checked_add(1)
            .filter(|next| *next <= self.max_serial);
        let Some(next) = next else {
            warn!("Serial range exhausted for {}", prefix);
            return Err(IdentityError::SerialExhausted {
                prefix: prefix.to_string(),
                max: self.max_serial,
            });
        };

        self.last_issued.insert(prefix.to_string(), next);
        debug!("Serial {} issued for {}", next, prefix);
        Ok(next)
    }
}
