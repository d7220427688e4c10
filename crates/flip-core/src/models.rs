// Rust guideline compliant 2026-08-05

//! Core data model for Flip.

use crate::identity;
use serde::{Deserialize, Serialize};

/// A Flashcard is a single question/answer pair with identity and timestamps.
///
/// Serialized field names are camelCase so that collections written by
/// earlier versions of the tool round-trip unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Flashcard {
    /// Unique, stable identifier (format: card-XXXXXXXX, or a legacy id).
    pub id: String,
    /// The question shown on the front of the card.
    pub question: String,
    /// The answer shown on the back of the card.
    pub answer: String,
    /// Unix timestamp of creation, in milliseconds.
    pub created_at: i64,
    /// Unix timestamp of last update, in milliseconds.
    pub updated_at: i64,
}

impl Flashcard {
    /// Creates a new Flashcard.
    ///
    /// # Arguments
    ///
    /// * `id` - Unique id for the card
    /// * `question` - The question text
    /// * `answer` - The answer text
    /// * `now` - Creation timestamp in milliseconds
    ///
    /// # Returns
    ///
    /// A new Flashcard with `created_at` and `updated_at` set to `now`.
    #[must_use]
    pub fn new(id: String, question: String, answer: String, now: i64) -> Self {
        Self {
            id,
            question,
            answer,
            created_at: now,
            updated_at: now,
        }
    }

    /// Validates the Flashcard data.
    ///
    /// # Returns
    ///
    /// Ok if the Flashcard is valid, Err otherwise.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The question is empty after trimming
    /// - The answer is empty after trimming
    /// - The id format is invalid
    pub fn validate(&self) -> crate::Result<()> {
        if self.question.trim().is_empty() {
            return Err(crate::Error::InvalidCard(
                "Question cannot be empty".to_string(),
            ));
        }

        if self.answer.trim().is_empty() {
            return Err(crate::Error::InvalidCard(
                "Answer cannot be empty".to_string(),
            ));
        }

        identity::validate_id_format(&self.id)?;

        Ok(())
    }
}
