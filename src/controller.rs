//! Meter state and the message dispatch that drives it.
//!
//! A front end owns one [`AppState`], forwards each user event as a
//! [`Message`] to [`AppState::update`], and redraws from
//! [`render`](crate::view::render).

use rand::Rng;
use secrecy::{ExposeSecret, SecretString};

use crate::config::EvaluatorConfig;
use crate::evaluator::evaluate_password_with;
use crate::generator::generate_password_with_rng;
use crate::types::PasswordReport;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Whether the password field shows its content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Masked,
    Revealed,
}

impl Visibility {
    pub fn toggled(self) -> Self {
        match self {
            Visibility::Masked => Visibility::Revealed,
            Visibility::Revealed => Visibility::Masked,
        }
    }
}

/// User events.
#[derive(Debug)]
pub enum Message {
    /// The field content changed.
    Input(SecretString),
    ToggleTheme,
    ToggleVisibility,
    ToggleTips,
    /// Replace the field with a generated password.
    Generate,
}

#[derive(Debug)]
pub struct AppState {
    password: SecretString,
    theme: Theme,
    visibility: Visibility,
    tips_visible: bool,
    report: PasswordReport,
    config: EvaluatorConfig,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Initial state with the configuration read from the environment.
    pub fn new() -> Self {
        Self::with_config(EvaluatorConfig::from_env())
    }

    /// Light theme, masked empty field, tips hidden.
    pub fn with_config(config: EvaluatorConfig) -> Self {
        let password = SecretString::new(String::new().into());
        let report = evaluate_password_with(&password, &config);
        Self {
            password,
            theme: Theme::Light,
            visibility: Visibility::Masked,
            tips_visible: false,
            report,
            config,
        }
    }

    pub fn password(&self) -> &SecretString {
        &self.password
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn tips_visible(&self) -> bool {
        self.tips_visible
    }

    pub fn report(&self) -> &PasswordReport {
        &self.report
    }

    /// Applies a message, generating passwords with the thread RNG.
    pub fn update(&mut self, message: Message) {
        self.update_with_rng(message, &mut rand::rng());
    }

    /// Applies a message, generating passwords with `rng`.
    pub fn update_with_rng<R: Rng>(&mut self, message: Message, rng: &mut R) {
        match message {
            Message::Input(password) => {
                self.report = evaluate_password_with(&password, &self.config);
                self.password = password;
            }
            Message::ToggleTheme => self.theme = self.theme.toggled(),
            Message::ToggleVisibility => self.visibility = self.visibility.toggled(),
            Message::ToggleTips => self.tips_visible = !self.tips_visible,
            Message::Generate => {
                let password = generate_password_with_rng(rng);
                self.visibility = Visibility::Revealed;
                // Same path as typing, so the report is refreshed at once
                self.update_with_rng(Message::Input(password), rng);
            }
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            length = self.password.expose_secret().len(),
            theme = ?self.theme,
            visibility = ?self.visibility,
            tips = self.tips_visible,
            "state updated"
        );
    }

    /// Revealed field content, `None` while masked.
    pub fn revealed_password(&self) -> Option<&str> {
        match self.visibility {
            Visibility::Revealed => Some(self.password.expose_secret()),
            Visibility::Masked => None,
        }
    }
}
