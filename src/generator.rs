//! Strong password generator.
//!
//! Not audited as a cryptographic generator: it draws from whatever [`Rng`]
//! it is given (the thread RNG by default).

use rand::Rng;
use rand::seq::SliceRandom;
use secrecy::SecretString;
use thiserror::Error;

use crate::charset::{DIGITS, GENERATION_SYMBOLS, LOWERCASE, UPPERCASE};

/// Length of passwords produced by [`generate_password`].
pub const GENERATED_LENGTH: usize = 16;

const CLASSES: [&str; 4] = [LOWERCASE, UPPERCASE, DIGITS, GENERATION_SYMBOLS];

#[derive(Error, Debug, PartialEq, Eq)]
pub enum GeneratorError {
    #[error("Password length {requested} is too short, at least {minimum} characters are needed")]
    LengthTooShort { requested: usize, minimum: usize },
}

/// Generates a 16 character password with the thread RNG.
pub fn generate_password() -> SecretString {
    generate_password_with_rng(&mut rand::rng())
}

/// Generates a 16 character password from `rng`.
pub fn generate_password_with_rng<R: Rng>(rng: &mut R) -> SecretString {
    let chars = fill(rng, GENERATED_LENGTH);
    SecretString::new(chars.into_iter().collect::<String>().into())
}

/// Generates a password of `length` characters containing at least one
/// lowercase letter, uppercase letter, digit and symbol.
pub fn generate_password_with_length<R: Rng>(
    rng: &mut R,
    length: usize,
) -> Result<SecretString, GeneratorError> {
    if length < CLASSES.len() {
        return Err(GeneratorError::LengthTooShort {
            requested: length,
            minimum: CLASSES.len(),
        });
    }
    let chars = fill(rng, length);
    Ok(SecretString::new(chars.into_iter().collect::<String>().into()))
}

fn pick<R: Rng>(rng: &mut R, alphabet: &[char]) -> char {
    alphabet[rng.random_range(0..alphabet.len())]
}

// length >= CLASSES.len() is checked by the callers
fn fill<R: Rng>(rng: &mut R, length: usize) -> Vec<char> {
    let mut password: Vec<char> = Vec::with_capacity(length);

    // One of each class first
    for class in CLASSES {
        let alphabet: Vec<char> = class.chars().collect();
        password.push(pick(rng, &alphabet));
    }

    let combined: Vec<char> = CLASSES.iter().flat_map(|c| c.chars()).collect();
    while password.len() < length {
        password.push(pick(rng, &combined));
    }

    password.shuffle(rng);

    #[cfg(feature = "tracing")]
    tracing::debug!("Generated password of {} characters", password.len());

    password
}
