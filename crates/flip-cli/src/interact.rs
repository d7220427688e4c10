// Rust guideline compliant 2026-08-06

//! Terminal-backed confirmation and notification collaborators.

use crate::terminal;
use flip_core::{Confirmer, Notifier};

/// Confirmer that asks a yes/no question on the terminal.
///
/// Anything other than `y`/`yes` (case-insensitive) declines, including end
/// of input.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalConfirmer;

impl Confirmer for TerminalConfirmer {
    fn confirm(&self, message: &str) -> bool {
        let reply = match terminal::prompt(&format!("{} [y/N] ", message)) {
            Ok(Some(reply)) => reply,
            Ok(None) | Err(_) => return false,
        };

        matches!(reply.trim().to_lowercase().as_str(), "y" | "yes")
    }
}

/// Notifier that prints styled warnings and alerts to stderr.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn warn(&self, message: &str) {
        terminal::print_warning(message);
    }

    fn alert(&self, message: &str) {
        terminal::print_error(message);
    }
}
