//! Character classes shared by the evaluators and the generator.

pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const DIGITS: &str = "0123456789";

/// Special characters accepted by the requirement checklist and the scorers.
pub const SPECIAL_CHARS: &str = "!@#$%^&*(),.?\":{}|<>";

/// Symbols the generator draws from. Broader than [`SPECIAL_CHARS`].
pub const GENERATION_SYMBOLS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

pub fn is_lowercase(c: char) -> bool {
    c.is_ascii_lowercase()
}

pub fn is_uppercase(c: char) -> bool {
    c.is_ascii_uppercase()
}

pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

pub fn is_special(c: char) -> bool {
    SPECIAL_CHARS.contains(c)
}

pub fn has_lowercase(s: &str) -> bool {
    s.chars().any(is_lowercase)
}

pub fn has_uppercase(s: &str) -> bool {
    s.chars().any(is_uppercase)
}

pub fn has_digit(s: &str) -> bool {
    s.chars().any(is_digit)
}

pub fn has_special(s: &str) -> bool {
    s.chars().any(is_special)
}

/// Length in characters, not bytes.
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}
