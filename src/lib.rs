//! Password strength meter library
//!
//! Checks a password against a fixed requirement checklist, scores its
//! complexity, estimates brute-force exposure time and generates strong
//! random passwords. [`AppState`] and [`render`] wire all of it to a UI.
//!
//! # Features
//!
//! - `async` (default): Enables debounced async evaluation with cancellation support
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_GUESS_RATE`: Guesses per second assumed by the exposure estimate
//!   (default: `1e9`)
//!
//! # Example
//!
//! ```rust
//! use pwd_meter::{evaluate_password, generate_password};
//! use secrecy::SecretString;
//!
//! let password = SecretString::new("Abcdef1!".to_string().into());
//! let report = evaluate_password(&password);
//!
//! println!("Strength: {} ({}%)", report.strength.band, report.strength.percent);
//! println!("Complexity: {}", report.complexity.label);
//! println!("Exposure: {}", report.exposure);
//!
//! let generated = generate_password();
//! # let _ = generated;
//! ```

// Internal modules
mod charset;
mod config;
mod controller;
mod evaluator;
mod generator;
mod sections;
mod types;
mod view;

// Public API
pub use charset::{GENERATION_SYMBOLS, SPECIAL_CHARS};
pub use config::{get_guess_rate, parse_guess_rate, ConfigError, EvaluatorConfig, GUESS_RATE_ENV};
pub use controller::{AppState, Message, Theme, Visibility};
pub use evaluator::{evaluate_password, evaluate_password_with};
pub use generator::{
    generate_password, generate_password_with_length, generate_password_with_rng, GeneratorError,
    GENERATED_LENGTH,
};
pub use sections::{
    calculate_complexity, charset_size, check_requirement, check_requirements, estimate_exposure,
    exposure_from_seconds, possibilities, DEFAULT_GUESSES_PER_SECOND,
};
pub use types::{
    ComplexityResult, Exposure, PasswordReport, Requirement, RequirementReport, StrengthBand,
    StrengthLevel, COMPLEXITY_LABELS, MAX_COMPLEXITY,
};
pub use view::{render, RequirementItem, View};

#[cfg(feature = "async")]
pub use evaluator::{evaluate_password_cancellable, evaluate_password_tx, DEBOUNCE_MS};
