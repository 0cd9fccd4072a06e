//! View model rendered from [`AppState`].
//!
//! Plain strings and flags a front end copies into its widgets. The password
//! itself is not part of the view; see [`AppState::revealed_password`].

use crate::controller::{AppState, Theme, Visibility};
use crate::types::Requirement;

const VALID_GLYPH: char = '✓';
const INVALID_GLYPH: char = '✗';

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequirementItem {
    /// Element id, e.g. `"length"`.
    pub id: &'static str,
    pub valid: bool,
    /// Label prefixed with a check or cross glyph.
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View {
    pub theme_class: &'static str,
    pub theme_glyph: &'static str,
    /// Input type of the password field: `"password"` or `"text"`.
    pub input_type: &'static str,
    pub visibility_icon: &'static str,
    pub visibility_label: &'static str,
    pub tips_hidden: bool,
    pub tips_icon: &'static str,
    pub tips_label: &'static str,
    /// CSS width of the progress bar, e.g. `"40%"`.
    pub progress_width: String,
    pub progress_color: &'static str,
    pub strength_text: &'static str,
    pub complexity_text: &'static str,
    pub exposure_text: String,
    pub requirements: Vec<RequirementItem>,
}

fn requirement_text(requirement: Requirement, valid: bool) -> String {
    let glyph = if valid { VALID_GLYPH } else { INVALID_GLYPH };
    format!("{} {}", glyph, requirement.label())
}

pub fn render(state: &AppState) -> View {
    let report = state.report();

    let (theme_class, theme_glyph) = match state.theme() {
        Theme::Light => ("light", "☀️"),
        Theme::Dark => ("dark", "🌙"),
    };

    let (input_type, visibility_icon, visibility_label) = match state.visibility() {
        Visibility::Masked => ("password", "fa-eye", "Show password"),
        Visibility::Revealed => ("text", "fa-eye-slash", "Hide password"),
    };

    let (tips_icon, tips_label) = if state.tips_visible() {
        ("fa-chevron-up", "Hide Password Tips")
    } else {
        ("fa-lightbulb", "Show Password Tips")
    };

    let requirements = report
        .requirements
        .iter()
        .map(|(requirement, valid)| RequirementItem {
            id: requirement.id(),
            valid,
            text: requirement_text(requirement, valid),
        })
        .collect();

    View {
        theme_class,
        theme_glyph,
        input_type,
        visibility_icon,
        visibility_label,
        tips_hidden: !state.tips_visible(),
        tips_icon,
        tips_label,
        progress_width: format!("{}%", report.strength.percent),
        progress_color: report.strength.band.color(),
        strength_text: report.strength.band.label(),
        complexity_text: report.complexity.label,
        exposure_text: report.exposure.to_string(),
        requirements,
    }
}
