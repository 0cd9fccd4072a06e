//! Exposure section - approximate brute-force crack time.

use secrecy::{ExposeSecret, SecretString};

use crate::charset::{char_len, has_digit, has_lowercase, has_special, has_uppercase};
use crate::types::Exposure;

/// Guess rate assumed when nothing else is configured.
pub const DEFAULT_GUESSES_PER_SECOND: f64 = 1_000_000_000.0;

const MINUTE: f64 = 60.0;
const HOUR: f64 = 3_600.0;
const DAY: f64 = 86_400.0;
const YEAR: f64 = 31_536_000.0;
const DECADE: f64 = 315_360_000.0;

/// Sum of the class sizes present in the password.
///
/// This approximates the attacker's alphabet; it is not the number of
/// distinct characters actually used.
pub fn charset_size(pwd: &str) -> u32 {
    let mut size = 0;
    if has_lowercase(pwd) {
        size += 26;
    }
    if has_uppercase(pwd) {
        size += 26;
    }
    if has_digit(pwd) {
        size += 10;
    }
    if has_special(pwd) {
        size += 32;
    }
    size
}

/// Size of the search space, `charset_size ^ length`. May be infinite.
pub fn possibilities(pwd: &str) -> f64 {
    let exponent = i32::try_from(char_len(pwd)).unwrap_or(i32::MAX);
    f64::from(charset_size(pwd)).powi(exponent)
}

/// Buckets a crack time in seconds.
pub fn exposure_from_seconds(seconds: f64) -> Exposure {
    if seconds < MINUTE {
        Exposure::Instantly
    } else if seconds < HOUR {
        Exposure::Minutes((seconds / MINUTE).round() as u64)
    } else if seconds < DAY {
        Exposure::Hours((seconds / HOUR).round() as u64)
    } else if seconds < YEAR {
        Exposure::Days((seconds / DAY).round() as u64)
    } else if seconds < DECADE {
        Exposure::Years((seconds / YEAR).round() as u64)
    } else {
        Exposure::Centuries
    }
}

/// Estimates how long an exhaustive search at `guesses_per_second` takes.
///
/// The empty password is reported as [`Exposure::Unknown`] instead of going
/// through `0^0`, which would read as one possibility.
pub fn estimate_exposure(password: &SecretString, guesses_per_second: f64) -> Exposure {
    let pwd = password.expose_secret();
    if pwd.is_empty() {
        return Exposure::Unknown;
    }
    exposure_from_seconds(possibilities(pwd) / guesses_per_second)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exposure(s: &str) -> Exposure {
        estimate_exposure(&SecretString::new(s.to_string().into()), DEFAULT_GUESSES_PER_SECOND)
    }

    #[test]
    fn test_empty_password_is_unknown() {
        assert_eq!(exposure(""), Exposure::Unknown);
        assert_eq!(exposure("").to_string(), "-");
    }

    #[test]
    fn test_charset_size() {
        assert_eq!(charset_size(""), 0);
        assert_eq!(charset_size("abcd"), 26);
        assert_eq!(charset_size("aB"), 52);
        assert_eq!(charset_size("aB1"), 62);
        assert_eq!(charset_size("aB1!"), 94);
        assert_eq!(charset_size("____"), 0);
    }

    #[test]
    fn test_lowercase_four_chars_is_instant() {
        assert_eq!(possibilities("abcd"), 456_976.0);
        assert_eq!(exposure("abcd"), Exposure::Instantly);
    }

    #[test]
    fn test_unscored_characters_are_instant() {
        assert_eq!(possibilities("________"), 0.0);
        assert_eq!(exposure("________"), Exposure::Instantly);
    }

    #[test]
    fn test_minutes() {
        // 26^8 = 208_827_064_576 -> ~208.8s -> 3 minutes
        assert_eq!(exposure("abcdefgh"), Exposure::Minutes(3));
    }

    #[test]
    fn test_just_under_an_hour() {
        // 62^7 = 3_521_614_606_208 -> ~3521.6s
        assert_eq!(exposure("aB1cdef"), Exposure::Minutes(59));
    }

    #[test]
    fn test_hours() {
        // 26^9 = 5_429_503_678_976 -> ~5429.5s -> 2 hours
        assert_eq!(exposure("abcdefghi"), Exposure::Hours(2));
    }

    #[test]
    fn test_days() {
        // 26^10 = 141_167_095_653_376 -> ~141167s -> 2 days (1.63)
        assert_eq!(exposure("abcdefghij"), Exposure::Days(2));
    }

    #[test]
    fn test_years() {
        // 26^12 -> ~95_428_957s -> 3 years
        assert_eq!(exposure("abcdefghijkl"), Exposure::Years(3));
    }

    #[test]
    fn test_centuries() {
        assert_eq!(exposure("Abcdef1!Abcdef1!"), Exposure::Centuries);
    }

    #[test]
    fn test_very_long_password_saturates() {
        let long = "Ab1!".repeat(500);
        assert!(possibilities(&long).is_infinite());
        assert_eq!(exposure(&long), Exposure::Centuries);
    }

    #[test]
    fn test_bucket_boundaries() {
        assert_eq!(exposure_from_seconds(59.9), Exposure::Instantly);
        assert_eq!(exposure_from_seconds(60.0), Exposure::Minutes(1));
        assert_eq!(exposure_from_seconds(3_600.0), Exposure::Hours(1));
        assert_eq!(exposure_from_seconds(86_400.0), Exposure::Days(1));
        assert_eq!(exposure_from_seconds(31_536_000.0), Exposure::Years(1));
        assert_eq!(exposure_from_seconds(315_360_000.0), Exposure::Centuries);
    }

    #[test]
    fn test_slower_attacker_takes_longer() {
        let pwd = SecretString::new("abcd".to_string().into());
        // 456_976 guesses at 1000/s -> ~457s -> 8 minutes
        assert_eq!(estimate_exposure(&pwd, 1_000.0), Exposure::Minutes(8));
    }
}
