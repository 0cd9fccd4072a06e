//! Result types produced by the evaluators.

use std::fmt;

/// One of the five checklist rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Requirement {
    Length,
    Uppercase,
    Lowercase,
    Number,
    Special,
}

impl Requirement {
    /// All requirements in declaration order.
    pub const ALL: [Requirement; 5] = [
        Requirement::Length,
        Requirement::Uppercase,
        Requirement::Lowercase,
        Requirement::Number,
        Requirement::Special,
    ];

    /// Stable identifier of the checklist item.
    pub fn id(self) -> &'static str {
        match self {
            Requirement::Length => "length",
            Requirement::Uppercase => "uppercase",
            Requirement::Lowercase => "lowercase",
            Requirement::Number => "number",
            Requirement::Special => "special",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Requirement::Length => "At least 8 characters",
            Requirement::Uppercase => "One uppercase letter",
            Requirement::Lowercase => "One lowercase letter",
            Requirement::Number => "One number",
            Requirement::Special => "One special character",
        }
    }
}

/// Outcome of every requirement for one password.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequirementReport {
    results: [(Requirement, bool); 5],
}

impl RequirementReport {
    pub(crate) fn new(results: [(Requirement, bool); 5]) -> Self {
        Self { results }
    }

    pub fn is_satisfied(&self, requirement: Requirement) -> bool {
        self.results.iter().any(|&(r, ok)| r == requirement && ok)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Requirement, bool)> + '_ {
        self.results.iter().copied()
    }

    pub fn satisfied_count(&self) -> usize {
        self.results.iter().filter(|(_, ok)| *ok).count()
    }

    /// Strength meter derived from the fraction of satisfied requirements.
    pub fn strength(&self) -> StrengthLevel {
        StrengthLevel::from_satisfied(self.satisfied_count(), self.results.len())
    }
}

/// Labeled band of the strength meter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum StrengthBand {
    VeryWeak,
    Weak,
    Medium,
    Strong,
    VeryStrong,
}

impl StrengthBand {
    pub fn from_percent(percent: u8) -> Self {
        match percent {
            0..=20 => StrengthBand::VeryWeak,
            21..=40 => StrengthBand::Weak,
            41..=60 => StrengthBand::Medium,
            61..=80 => StrengthBand::Strong,
            _ => StrengthBand::VeryStrong,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StrengthBand::VeryWeak => "Very Weak",
            StrengthBand::Weak => "Weak",
            StrengthBand::Medium => "Medium",
            StrengthBand::Strong => "Strong",
            StrengthBand::VeryStrong => "Very Strong",
        }
    }

    /// Progress bar color as a CSS hex string.
    pub fn color(self) -> &'static str {
        match self {
            StrengthBand::VeryWeak => "#ff4444",
            StrengthBand::Weak => "#ffbb33",
            StrengthBand::Medium => "#ffeb3b",
            StrengthBand::Strong => "#00C851",
            StrengthBand::VeryStrong => "#007E33",
        }
    }
}

impl fmt::Display for StrengthBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Position of the strength meter, 0 to 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrengthLevel {
    pub percent: u8,
    pub band: StrengthBand,
}

impl StrengthLevel {
    pub fn from_satisfied(satisfied: usize, total: usize) -> Self {
        let percent = if total == 0 {
            0
        } else {
            (satisfied.min(total) * 100 / total) as u8
        };
        Self {
            percent,
            band: StrengthBand::from_percent(percent),
        }
    }
}

/// Labels indexed by complexity score.
pub const COMPLEXITY_LABELS: [&str; 9] = [
    "None",
    "Very Simple",
    "Simple",
    "Moderate",
    "Complex",
    "Very Complex",
    "Excellent",
    "Outstanding",
    "Maximum",
];

pub const MAX_COMPLEXITY: u8 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComplexityResult {
    pub score: u8,
    pub label: &'static str,
}

impl ComplexityResult {
    /// Builds a result from a raw pattern sum, clamping it to [`MAX_COMPLEXITY`].
    pub fn from_raw(raw: u32) -> Self {
        let score = raw.min(MAX_COMPLEXITY as u32) as u8;
        Self {
            score,
            label: COMPLEXITY_LABELS[score as usize],
        }
    }
}

/// Approximate brute-force time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exposure {
    /// Nothing to estimate (empty password).
    Unknown,
    Instantly,
    Minutes(u64),
    Hours(u64),
    Days(u64),
    Years(u64),
    Centuries,
}

impl fmt::Display for Exposure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Exposure::Unknown => f.write_str("-"),
            Exposure::Instantly => f.write_str("Instantly"),
            Exposure::Minutes(n) => write!(f, "{n} minutes"),
            Exposure::Hours(n) => write!(f, "{n} hours"),
            Exposure::Days(n) => write!(f, "{n} days"),
            Exposure::Years(n) => write!(f, "{n} years"),
            Exposure::Centuries => f.write_str("Centuries"),
        }
    }
}

/// Everything the meter shows for one password.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordReport {
    pub requirements: RequirementReport,
    pub strength: StrengthLevel,
    pub complexity: ComplexityResult,
    pub exposure: Exposure,
}
