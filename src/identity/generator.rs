//! Checked login ID generation
//!
//! Combines a year [`Clock`] with a [`SerialSource`] so every issued ID
//! carries a serial that is unique within its scope.

use log::debug;

use crate::error::IdentityError;
use crate::identity::clock::{Clock, SystemClock};
use crate::identity::login_id::{LoginId, login_id_prefix};
use crate::identity::serial::SerialSource;

pub struct LoginIdGenerator<S, C = SystemClock> {
    serials: S,
    clock: C,
}

impl<S: SerialSource> LoginIdGenerator<S, SystemClock> {
    pub fn with_system_clock(serials: S) -> Self {
        Self::new(serials, SystemClock)
    }
}

impl<S: SerialSource, C: Clock> LoginIdGenerator<S, C> {
    pub fn new(serials: S, clock: C) -> Self {
        Self { serials, clock }
    }

    /// Issues the next login ID for the given names.
    pub fn generate(
        &mut self,
        company_name: &str,
        first_name: &str,
        last_name: &str,
    ) -> Result<LoginId, IdentityError> {
        let year = self.clock.current_year();
        let prefix = login_id_prefix(company_name, first_name, last_name, year);
        let serial = self.serials.next_serial(&prefix)?;

        let id = LoginId::from_parts(&prefix, serial);
        debug!("Generated login ID {}", id);
        Ok(id)
    }

    pub fn serials(&self) -> &S {
        &self.serials
    }

    pub fn serials_mut(&mut self) -> &mut S {
        &mut self.serials
    }

    pub fn into_serials(self) -> S {
        self.serials
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::clock::FixedClock;
    use crate::identity::serial::{FixedSerial, SerialRegistry};

    #[test]
    fn test_sequential_ids_for_same_names() {
        let mut generator = LoginIdGenerator::new(SerialRegistry::new(), FixedClock(2024));
        let first = generator.generate("Dayflow", "John", "Harris").unwrap();
        let second = generator.generate("Dayflow", "Joanna", "Hart").unwrap();
        assert_eq!(first.as_str(), "DAJOHA20240001");
        assert_eq!(second.as_str(), "DAJOHA20240002");
    }

    #[test]
    fn test_year_change_restarts_sequence() {
        let mut registry = SerialRegistry::new();
        LoginIdGenerator::new(&mut registry, FixedClock(2024))
            .generate("Dayflow", "John", "Harris")
            .unwrap();

        let id = LoginIdGenerator::new(&mut registry, FixedClock(2025))
            .generate("Dayflow", "John", "Harris")
            .unwrap();
        assert_eq!(id.as_str(), "DAJOHA20250001");
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_exhausted_scope_is_reported() {
        let mut generator =
            LoginIdGenerator::new(SerialRegistry::with_max_serial(1), FixedClock(2024));
        generator.generate("Dayflow", "John", "Harris").unwrap();
        let err = generator.generate("Dayflow", "John", "Harris").unwrap_err();
        assert!(matches!(err, IdentityError::SerialExhausted { max: 1, .. }));
    }

    #[test]
    fn test_registry_can_be_seeded_and_recovered() {
        let mut generator = LoginIdGenerator::new(SerialRegistry::new(), FixedClock(2024));
        generator
            .serials_mut()
            .observe(&LoginId::parse("DAJOHA20240041").unwrap());

        let id = generator.generate("Dayflow", "John", "Harris").unwrap();
        assert_eq!(id.serial(), Some(42));

        let registry = generator.into_serials();
        assert_eq!(registry.last_serial("DAJOHA2024"), Some(42));
    }

    #[test]
    fn test_fixed_serial_generator() {
        let mut generator = LoginIdGenerator::new(FixedSerial(1), FixedClock(2024));
        let id = generator.generate("Dayflow", "John", "Harris").unwrap();
        assert_eq!(id.as_str(), "DAJOHA20240001");
    }
}
