//! Evaluator configuration
//!
//! Handles the assumed attacker guess rate used by the exposure estimate.

use thiserror::Error;

use crate::sections::DEFAULT_GUESSES_PER_SECOND;

/// Environment variable overriding the guess rate.
pub const GUESS_RATE_ENV: &str = "PWD_GUESS_RATE";

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("Guess rate is not a number: {0:?}")]
    InvalidGuessRate(String),
    #[error("Guess rate must be a finite positive number, got {0}")]
    NonPositiveGuessRate(f64),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EvaluatorConfig {
    /// Guesses per second assumed for the exposure estimate.
    pub guess_rate: f64,
}

impl Default for EvaluatorConfig {
    fn default() -> Self {
        Self {
            guess_rate: DEFAULT_GUESSES_PER_SECOND,
        }
    }
}

impl EvaluatorConfig {
    /// Builds the configuration from the environment.
    ///
    /// Never fails: see [`get_guess_rate`].
    pub fn from_env() -> Self {
        Self {
            guess_rate: get_guess_rate(),
        }
    }
}

/// Parses a guess rate such as `"1e10"` or `"250000"`.
pub fn parse_guess_rate(raw: &str) -> Result<f64, ConfigError> {
    let rate: f64 = raw
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidGuessRate(raw.to_string()))?;
    if !rate.is_finite() || rate <= 0.0 {
        return Err(ConfigError::NonPositiveGuessRate(rate));
    }
    Ok(rate)
}

/// Returns the guess rate.
///
/// Priority:
/// 1. Environment variable `PWD_GUESS_RATE`, if it parses
/// 2. [`DEFAULT_GUESSES_PER_SECOND`]
pub fn get_guess_rate() -> f64 {
    match std::env::var(GUESS_RATE_ENV) {
        Ok(raw) => match parse_guess_rate(&raw) {
            Ok(rate) => rate,
            Err(_e) => {
                #[cfg(feature = "tracing")]
                tracing::warn!("Ignoring {}: {}", GUESS_RATE_ENV, _e);
                DEFAULT_GUESSES_PER_SECOND
            }
        },
        Err(_) => DEFAULT_GUESSES_PER_SECOND,
    }
}
