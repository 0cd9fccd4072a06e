//! Password evaluation sections
//!
//! Each section analyzes one aspect of a password and never fails:
//! an empty password is a degenerate input, not an error.

mod complexity;
mod exposure;
mod requirements;

pub use complexity::calculate_complexity;
pub use exposure::{
    charset_size, estimate_exposure, exposure_from_seconds, possibilities,
    DEFAULT_GUESSES_PER_SECOND,
};
pub use requirements::{check_requirement, check_requirements};
