//! Requirements section - the five pass/fail checklist rules.

use secrecy::{ExposeSecret, SecretString};

use crate::charset::{char_len, has_digit, has_lowercase, has_special, has_uppercase};
use crate::types::{Requirement, RequirementReport};

const MIN_LENGTH: usize = 8;

pub(crate) fn satisfies(requirement: Requirement, pwd: &str) -> bool {
    match requirement {
        Requirement::Length => char_len(pwd) >= MIN_LENGTH,
        Requirement::Uppercase => has_uppercase(pwd),
        Requirement::Lowercase => has_lowercase(pwd),
        Requirement::Number => has_digit(pwd),
        Requirement::Special => has_special(pwd),
    }
}

/// Checks a single requirement against the password.
pub fn check_requirement(requirement: Requirement, password: &SecretString) -> bool {
    satisfies(requirement, password.expose_secret())
}

/// Checks every requirement, in declaration order.
pub fn check_requirements(password: &SecretString) -> RequirementReport {
    let pwd = password.expose_secret();
    RequirementReport::new(Requirement::ALL.map(|r| (r, satisfies(r, pwd))))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    #[test]
    fn test_length_boundary() {
        assert!(!check_requirement(Requirement::Length, &secret("Short1!")));
        assert!(check_requirement(Requirement::Length, &secret("12345678")));
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // 7 characters, 14 bytes
        assert!(!check_requirement(Requirement::Length, &secret("ééééééé")));
    }

    #[test]
    fn test_lowercase_only_password() {
        let report = check_requirements(&secret("abcdefgh"));
        assert!(report.is_satisfied(Requirement::Length));
        assert!(report.is_satisfied(Requirement::Lowercase));
        assert!(!report.is_satisfied(Requirement::Uppercase));
        assert!(!report.is_satisfied(Requirement::Number));
        assert!(!report.is_satisfied(Requirement::Special));
        assert_eq!(report.satisfied_count(), 2);
    }

    #[test]
    fn test_all_requirements() {
        let report = check_requirements(&secret("Abcdef1!"));
        assert_eq!(report.satisfied_count(), 5);
    }

    #[test]
    fn test_special_uses_validation_set() {
        assert!(!check_requirement(Requirement::Special, &secret("under_score")));
        assert!(check_requirement(Requirement::Special, &secret("quote\"")));
    }

    #[test]
    fn test_report_keeps_declaration_order() {
        let ids: Vec<_> = check_requirements(&secret(""))
            .iter()
            .map(|(r, _)| r.id())
            .collect();
        assert_eq!(ids, ["length", "uppercase", "lowercase", "number", "special"]);
    }
}
