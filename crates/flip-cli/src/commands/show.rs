// Rust guideline compliant 2026-08-06

//! Show command: prints a single card.

use crate::interact::TerminalNotifier;
use crate::output::OutputFormatter;
use flip_core::{Error, FileVault, Store};
use std::path::Path;

/// Prints one flashcard.
///
/// # Arguments
///
/// * `dir` - The Flip data directory
/// * `position` - 1-based card position; the first card when omitted
/// * `formatter` - Output formatter for the chosen format
///
/// # Returns
///
/// Ok if the card was printed.
///
/// # Errors
///
/// Returns an error if the vault cannot be opened or the position is out of
/// range.
pub fn execute(
    dir: &Path,
    position: Option<usize>,
    formatter: &dyn OutputFormatter,
) -> anyhow::Result<()> {
    let vault = FileVault::new(dir.to_path_buf())?;
    let store = Store::open(vault, &TerminalNotifier);

    let index = position.unwrap_or(1).saturating_sub(1);
    let card = store.get(index).ok_or(Error::IndexOutOfRange {
        index,
        len: store.len(),
    })?;

    println!("{}", formatter.format_card(card));

    Ok(())
}
