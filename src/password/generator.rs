//! Random password generator
//!
//! Seeds one character from each required class, fills the rest from the
//! combined alphabet, then shuffles so the seeded characters land anywhere.

use rand::Rng;
use rand::seq::SliceRandom;

/// Length of every generated password
pub const PASSWORD_LENGTH: usize = 12;

pub const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
pub const DIGITS: &[u8] = b"0123456789";
pub const SPECIAL_CHARS: &[u8] = b"!@#$%&*";

const REQUIRED_CLASSES: [&[u8]; 4] = [UPPERCASE, LOWERCASE, DIGITS, SPECIAL_CHARS];

fn pick<R: Rng + ?Sized>(rng: &mut R, charset: &[u8]) -> char {
    charset[rng.gen_range(0..charset.len())] as char
}

/// Generates a password using the thread-local RNG.
pub fn generate_password() -> String {
    generate_password_with(&mut rand::thread_rng())
}

/// Generates a password from the given RNG.
pub fn generate_password_with<R: Rng + ?Sized>(rng: &mut R) -> String {
    let alphabet = REQUIRED_CLASSES.concat();

    let mut password: Vec<char> = REQUIRED_CLASSES
        .iter()
        .map(|charset| pick(rng, charset))
        .collect();

    while password.len() < PASSWORD_LENGTH {
        password.push(pick(rng, &alphabet));
    }

    password.shuffle(rng);
    password.into_iter().collect()
}
