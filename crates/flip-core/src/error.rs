// Rust guideline compliant 2026-08-05

//! Error types for the Flip core library.

use thiserror::Error;

/// Result type alias for Flip operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Flip operations.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid flashcard data.
    #[error("Invalid flashcard: {0}")]
    InvalidCard(String),

    /// Index outside the collection bounds.
    #[error("Index {index} out of range for {len} flashcards")]
    IndexOutOfRange {
        /// The requested index.
        index: usize,
        /// The collection length at the time of the request.
        len: usize,
    },

    /// Operation requested from an incompatible session state.
    #[error("Invalid transition: {0}")]
    InvalidTransition(String),

    /// Invalid configuration value.
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}
