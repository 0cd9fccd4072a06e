//! Complexity section - weighted 0-8 pattern score.

use secrecy::{ExposeSecret, SecretString};

use crate::charset::{char_len, has_digit, has_lowercase, has_special, has_uppercase};
use crate::types::ComplexityResult;

/// Scores the password on seven weighted patterns.
///
/// Each character class and the 8 and 12 character thresholds are worth one
/// point; having every class at 8+ characters is worth two more.
pub fn calculate_complexity(password: &SecretString) -> ComplexityResult {
    let pwd = password.expose_secret();
    if pwd.is_empty() {
        return ComplexityResult::from_raw(0);
    }

    let len = char_len(pwd);
    let lower = has_lowercase(pwd);
    let upper = has_uppercase(pwd);
    let digit = has_digit(pwd);
    let special = has_special(pwd);

    let patterns: [(bool, u32); 7] = [
        (lower, 1),
        (upper, 1),
        (digit, 1),
        (special, 1),
        (len >= 8, 1),
        (len >= 12, 1),
        (lower && upper && digit && special && len >= 8, 2),
    ];

    let raw = patterns
        .iter()
        .filter(|(matched, _)| *matched)
        .map(|(_, score)| score)
        .sum::<u32>();

    ComplexityResult::from_raw(raw)
}
