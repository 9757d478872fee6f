//! Year sources for login ID generation.

use chrono::{Datelike, Local};

/// Supplies the calendar year stamped into login IDs.
pub trait Clock {
    fn current_year(&self) -> i32;
}

/// Reads the year from the local wall clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn current_year(&self) -> i32 {
        Local::now().year()
    }
}

/// Always reports the same year. Used for tests and back-dated imports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub i32);

impl Clock for FixedClock {
    fn current_year(&self) -> i32 {
        self.0
    }
}
