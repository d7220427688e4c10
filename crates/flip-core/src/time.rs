// Rust guideline compliant 2026-08-05

//! Timestamp helpers for Flip.

use std::time::{SystemTime, UNIX_EPOCH};

/// Returns the current Unix timestamp in milliseconds.
///
/// Card timestamps use milliseconds so that collections written by earlier
/// versions of the tool keep their ordering and display values.
///
/// # Returns
///
/// The current Unix timestamp in milliseconds, or 0 if the system clock is
/// before the Unix epoch.
#[must_use]
pub fn now_millis() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_else(|_| std::time::Duration::from_secs(0))
        .as_millis() as i64
}
