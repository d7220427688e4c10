// Rust guideline compliant 2026-08-06

//! List command: prints the whole collection.

use crate::interact::TerminalNotifier;
use crate::output::OutputFormatter;
use flip_core::{FileVault, Store};
use std::path::Path;

/// Prints every flashcard in display order.
///
/// # Arguments
///
/// * `dir` - The Flip data directory
/// * `formatter` - Output formatter for the chosen format
///
/// # Returns
///
/// Ok if the listing was printed.
///
/// # Errors
///
/// Returns an error if the vault cannot be opened.
pub fn execute(dir: &Path, formatter: &dyn OutputFormatter) -> anyhow::Result<()> {
    let vault = FileVault::new(dir.to_path_buf())?;
    let store = Store::open(vault, &TerminalNotifier);

    println!("{}", formatter.format_list(store.cards()));

    Ok(())
}
