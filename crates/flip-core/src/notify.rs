// Rust guideline compliant 2026-08-05

//! Confirmation and notification collaborators.
//!
//! The core never talks to a terminal or a browser directly; destructive
//! confirmations and user-facing messages go through these traits so that a
//! CLI, a GUI, or a test harness can supply its own behavior.

/// Confirms destructive operations before they run.
pub trait Confirmer {
    /// Asks the user to confirm an operation.
    ///
    /// # Arguments
    ///
    /// * `message` - The confirmation prompt
    ///
    /// # Returns
    ///
    /// `true` to proceed, `false` to abort with no side effects.
    fn confirm(&self, message: &str) -> bool;
}

/// Reports non-fatal warnings and user-facing validation failures.
pub trait Notifier {
    /// Reports a non-fatal issue (e.g. corrupt persisted data, failed write).
    fn warn(&self, message: &str);

    /// Reports a user-facing validation failure.
    fn alert(&self, message: &str);
}

/// Confirmer that approves every operation.
///
/// Used when confirmation is disabled by configuration, and in tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct AutoConfirm;

impl Confirmer for AutoConfirm {
    fn confirm(&self, _message: &str) -> bool {
        true
    }
}

/// Notifier that prints to stderr without any terminal styling.
#[derive(Debug, Clone, Copy, Default)]
pub struct StderrNotifier;

impl Notifier for StderrNotifier {
    fn warn(&self, message: &str) {
        eprintln!("Warning: {}", message);
    }

    fn alert(&self, message: &str) {
        eprintln!("{}", message);
    }
}
