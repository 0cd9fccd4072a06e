//! Password evaluator - runs every section and assembles the report.

use secrecy::SecretString;

#[cfg(feature = "tracing")]
use secrecy::ExposeSecret;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::config::EvaluatorConfig;
use crate::sections::{calculate_complexity, check_requirements, estimate_exposure};
use crate::types::PasswordReport;

/// Pause before an async evaluation starts, so fast typing is coalesced.
#[cfg(feature = "async")]
pub const DEBOUNCE_MS: u64 = 300;

/// Evaluates a password using the configuration from the environment.
pub fn evaluate_password(password: &SecretString) -> PasswordReport {
    evaluate_password_with(password, &EvaluatorConfig::from_env())
}

/// Evaluates a password with an explicit configuration.
///
/// # Returns
/// A `PasswordReport` with the checklist, strength meter, complexity and
/// exposure estimate.
pub fn evaluate_password_with(password: &SecretString, config: &EvaluatorConfig) -> PasswordReport {
    let requirements = check_requirements(password);
    let complexity = calculate_complexity(password);
    let exposure = estimate_exposure(password, config.guess_rate);
    let report = PasswordReport {
        requirements,
        strength: requirements.strength(),
        complexity,
        exposure,
    };

    #[cfg(feature = "tracing")]
    tracing::debug!(
        length = password.expose_secret().chars().count(),
        strength = report.strength.percent,
        complexity = report.complexity.score,
        "password evaluated"
    );

    report
}

/// Evaluates a password, checking `token` before each section.
///
/// Returns `None` if the evaluation was cancelled.
#[cfg(feature = "async")]
pub fn evaluate_password_cancellable(
    password: &SecretString,
    config: &EvaluatorConfig,
    token: &CancellationToken,
) -> Option<PasswordReport> {
    if token.is_cancelled() {
        return None;
    }
    let requirements = check_requirements(password);

    if token.is_cancelled() {
        return None;
    }
    let complexity = calculate_complexity(password);

    if token.is_cancelled() {
        return None;
    }
    let exposure = estimate_exposure(password, config.guess_rate);

    Some(PasswordReport {
        requirements,
        strength: requirements.strength(),
        complexity,
        exposure,
    })
}

/// Async version that sends the report via channel.
///
/// Waits [`DEBOUNCE_MS`] first; nothing is sent if `token` is cancelled in
/// the meantime, so a newer keystroke can supersede this one.
#[cfg(feature = "async")]
pub async fn evaluate_password_tx(
    password: SecretString,
    config: EvaluatorConfig,
    token: CancellationToken,
    tx: mpsc::Sender<PasswordReport>,
) {
    use std::time::Duration;

    #[cfg(feature = "tracing")]
    tracing::info!("evaluation is about to start...");

    tokio::select! {
        _ = token.cancelled() => {
            #[cfg(feature = "tracing")]
            tracing::info!("evaluation cancelled during debounce");
            return;
        }
        _ = tokio::time::sleep(Duration::from_millis(DEBOUNCE_MS)) => {}
    }

    let Some(report) = evaluate_password_cancellable(&password, &config, &token) else {
        return;
    };

    if let Err(_e) = tx.send(report).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password report: {}", _e);
    }
}


#[cfg(all(test, feature = "async"))]
mod async_tests {
    use super::*;
    use std::time::Duration;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    #[tokio::test]
    async fn test_evaluate_with_cancellation() {
        let token = CancellationToken::new();
        token.cancel();

        let report =
            evaluate_password_cancellable(&secret("SomePassword123!"), &EvaluatorConfig::default(), &token);
        assert!(report.is_none());
    }

    #[tokio::test]
    async fn test_evaluate_without_cancellation() {
        let token = CancellationToken::new();
        let report =
            evaluate_password_cancellable(&secret("TestPass123!"), &EvaluatorConfig::default(), &token);
        let report = report.expect("Should produce a report");
        assert_eq!(report.strength.percent, 100);
    }

    #[tokio::test(start_paused = true)]
    async fn test_evaluate_password_tx() {
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();

        evaluate_password_tx(secret("TestPass123!"), EvaluatorConfig::default(), token, tx).await;

        let report = rx.recv().await.expect("Should receive report");
        assert_eq!(report.complexity.label, "Maximum");
    }

    #[tokio::test(start_paused = true)]
    async fn test_evaluate_password_tx_cancelled_during_debounce() {
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();

        let task = tokio::spawn(evaluate_password_tx(
            secret("abc"),
            EvaluatorConfig::default(),
            token.clone(),
            tx,
        ));
        tokio::time::sleep(Duration::from_millis(DEBOUNCE_MS / 2)).await;
        token.cancel();
        task.await.expect("task should not panic");

        assert!(rx.recv().await.is_none());
    }
}
