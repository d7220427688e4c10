// Rust guideline compliant 2026-08-05

//! Hash ID generation and validation for flashcards.
//!
//! Ids are derived from the card content plus a timestamp and nonce, so two
//! cards created in the same millisecond still receive distinct ids. Legacy
//! collections use bare numeric timestamp ids; those remain valid.

use crate::models::Flashcard;
use crate::{Error, Result};
use sha2::{Digest, Sha256};

/// Prefix for generated flashcard ids.
pub const ID_PREFIX: &str = "card-";

/// Generates a flashcard id from content, timestamp and nonce.
///
/// # Arguments
///
/// * `question` - The card question
/// * `answer` - The card answer
/// * `timestamp` - Creation timestamp in milliseconds
/// * `nonce` - Disambiguation nonce
///
/// # Returns
///
/// An id of the form `card-XXXXXXXX`.
#[must_use]
pub fn generate_id(question: &str, answer: &str, timestamp: i64, nonce: u32) -> String {
    let mut hasher = Sha256::new();
    hasher.update(question.as_bytes());
    hasher.update(answer.as_bytes());
    hasher.update(timestamp.to_le_bytes());
    hasher.update(nonce.to_le_bytes());

    let hash = hasher.finalize();
    let hex = format!("{:x}", hash);
    format!("{}{}", ID_PREFIX, &hex[..8])
}

/// Generates an id that is unique within the given collection.
///
/// Retries with an incremented nonce until the id collides with no existing
/// card, so rapid successive adds of identical content stay distinct.
///
/// # Arguments
///
/// * `cards` - The collection to check uniqueness against
/// * `question` - The card question
/// * `answer` - The card answer
/// * `timestamp` - Creation timestamp in milliseconds
///
/// # Returns
///
/// A unique id for the new card.
#[must_use]
pub fn unique_id(cards: &[Flashcard], question: &str, answer: &str, timestamp: i64) -> String {
    let mut nonce = 0u32;
    loop {
        let id = generate_id(question, answer, timestamp, nonce);
        if !cards.iter().any(|card| card.id == id) {
            return id;
        }
        nonce = nonce.saturating_add(1);
    }
}

/// Validates a flashcard id.
///
/// Accepts generated `card-XXXXXXXX` ids as well as legacy ids written by
/// earlier versions of the tool (any non-empty token without whitespace).
///
/// # Arguments
///
/// * `id` - The id to validate
///
/// # Returns
///
/// Ok if the id is usable.
///
/// # Errors
///
/// Returns an error if the id is empty or contains whitespace.
pub fn validate_id_format(id: &str) -> Result<()> {
    if id.is_empty() {
        return Err(Error::InvalidCard("Id cannot be empty".to_string()));
    }

    if id.chars().any(char::is_whitespace) {
        return Err(Error::InvalidCard(format!(
            "Id cannot contain whitespace: {:?}",
            id
        )));
    }

    Ok(())
}
