// Rust guideline compliant 2026-08-06

//! Add command: non-interactive append.

use crate::interact::TerminalNotifier;
use crate::terminal;
use flip_core::{Error, FileVault, Store};
use std::path::Path;

/// Appends a new flashcard and reports its position.
///
/// # Arguments
///
/// * `dir` - The Flip data directory
/// * `question` - The question text
/// * `answer` - The answer text
///
/// # Returns
///
/// Ok if the card was added and persisted.
///
/// # Errors
///
/// Returns an error if the vault cannot be opened or locked, if a field is
/// blank, or if the write fails.
pub fn execute(dir: &Path, question: &str, answer: &str) -> anyhow::Result<()> {
    let vault = FileVault::new(dir.to_path_buf())?;
    let _lock = vault.lock_exclusive()?;

    let mut store = Store::open(vault, &TerminalNotifier);
    let index = store.add(question, answer)?;

    let card = store.get(index).ok_or(Error::IndexOutOfRange {
        index,
        len: store.len(),
    })?;
    terminal::print_success(&format!(
        "Added flashcard {} ({} / {})",
        card.id,
        index + 1,
        store.len()
    ));

    Ok(())
}
