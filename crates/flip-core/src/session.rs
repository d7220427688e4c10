// Rust guideline compliant 2026-08-05

//! Session controller for flashcard review.
//!
//! The controller is a synchronous state machine over the edit mode and the
//! current selection. Every transition runs to completion before the next
//! user gesture is processed; there is no overlapping mutation. The session
//! state itself is never persisted; a fresh session always starts at the
//! first card with the question face up.
//!
//! Transition rules:
//!
//! - next/previous/flip are no-ops on an empty collection or while editing
//! - start_edit and delete_current require a non-empty collection and no
//!   edit in progress
//! - commit validates the draft and either appends (Adding) or rewrites the
//!   targeted card (Editing)

use crate::display::{self, DisplayState};
use crate::notify::{Confirmer, Notifier};
use crate::storage::{Persistence, Store};
use crate::{Error, Result};

/// In-progress question/answer text for an add or edit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    /// Question text under edit.
    pub question: String,
    /// Answer text under edit.
    pub answer: String,
}

/// Edit state of the session.
///
/// The draft lives inside the mode, so an edit target can never exist
/// without the text being edited.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EditMode {
    /// No edit in progress.
    #[default]
    None,
    /// Composing a new card from a blank draft.
    Adding(Draft),
    /// Rewriting the card at `index`, draft prefilled from it.
    Editing {
        /// Index of the card being edited.
        index: usize,
        /// Draft prefilled from the card.
        draft: Draft,
    },
}

impl EditMode {
    /// Returns true if an add or edit is in progress.
    #[must_use]
    pub fn is_editing(&self) -> bool {
        !matches!(self, EditMode::None)
    }

    /// Returns the draft under edit, if any.
    #[must_use]
    pub fn draft(&self) -> Option<&Draft> {
        match self {
            EditMode::None => None,
            EditMode::Adding(draft) => Some(draft),
            EditMode::Editing { draft, .. } => Some(draft),
        }
    }
}

/// Current position in the collection.
///
/// An empty collection has no position at all, rather than an out-of-range
/// index that every consumer must remember to clamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// The collection is empty.
    Empty,
    /// The card at this index is current.
    Selected(usize),
}

impl Selection {
    /// Returns the selected index, if any.
    #[must_use]
    pub fn index(&self) -> Option<usize> {
        match self {
            Selection::Empty => None,
            Selection::Selected(index) => Some(*index),
        }
    }
}

/// Session controller over a store and its collaborators.
///
/// Owns the transient review state (selection, answer visibility, edit mode)
/// and exposes the state-transition operations. Display output is a pure
/// projection recomputed per call, never a stored field.
#[derive(Debug)]
pub struct Session<B: Persistence, C, N> {
    store: Store<B>,
    confirmer: C,
    notifier: N,
    selection: Selection,
    showing_answer: bool,
    mode: EditMode,
}

impl<B: Persistence, C, N> Session<B, C, N> {
    /// Returns the underlying store.
    #[must_use]
    pub fn store(&self) -> &Store<B> {
        &self.store
    }

    /// Returns the current selection.
    #[must_use]
    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// Returns true if the answer face is showing.
    #[must_use]
    pub fn showing_answer(&self) -> bool {
        self.showing_answer
    }

    /// Returns the current edit mode.
    #[must_use]
    pub fn mode(&self) -> &EditMode {
        &self.mode
    }

    /// Computes the derived display state for the current session.
    #[must_use]
    pub fn display(&self) -> DisplayState {
        display::project(self)
    }
}

impl<B: Persistence, C: Confirmer, N: Notifier> Session<B, C, N> {
    /// Creates a session positioned at the first card.
    ///
    /// # Arguments
    ///
    /// * `store` - The loaded (and possibly seeded) store
    /// * `confirmer` - Collaborator for destructive confirmations
    /// * `notifier` - Collaborator for warnings and validation alerts
    ///
    /// # Returns
    ///
    /// A new session with the question face up and no edit in progress.
    #[must_use]
    pub fn new(store: Store<B>, confirmer: C, notifier: N) -> Self {
        let selection = if store.is_empty() {
            Selection::Empty
        } else {
            Selection::Selected(0)
        };

        Self {
            store,
            confirmer,
            notifier,
            selection,
            showing_answer: false,
            mode: EditMode::None,
        }
    }

    /// Advances to the next card, wrapping at the end.
    ///
    /// Resets the card to its question face. No-op on an empty collection or
    /// while an edit is in progress.
    pub fn next(&mut self) {
        if self.mode.is_editing() {
            return;
        }
        if let Selection::Selected(index) = self.selection {
            self.selection = Selection::Selected((index + 1) % self.store.len());
            self.showing_answer = false;
        }
    }

    /// Moves to the previous card, wrapping at the start.
    ///
    /// Resets the card to its question face. No-op on an empty collection or
    /// while an edit is in progress.
    pub fn previous(&mut self) {
        if self.mode.is_editing() {
            return;
        }
        if let Selection::Selected(index) = self.selection {
            let len = self.store.len();
            self.selection = Selection::Selected((index + len - 1) % len);
            self.showing_answer = false;
        }
    }

    /// Toggles between the question and answer face.
    ///
    /// No-op on an empty collection or while an edit is in progress.
    pub fn flip(&mut self) {
        if self.mode.is_editing() || self.selection == Selection::Empty {
            return;
        }
        self.showing_answer = !self.showing_answer;
    }

    /// Begins composing a new card with a blank draft.
    ///
    /// Valid from any mode; entering Add while another edit is in progress
    /// discards that draft. The current selection is untouched.
    pub fn start_add(&mut self) {
        self.mode = EditMode::Adding(Draft::default());
    }

    /// Begins editing the current card with a prefilled draft.
    ///
    /// # Returns
    ///
    /// Ok if the session entered edit mode.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidTransition` if the collection is empty or an
    /// edit is already in progress.
    pub fn start_edit(&mut self) -> Result<()> {
        if self.mode.is_editing() {
            return Err(Error::InvalidTransition(
                "An edit is already in progress".to_string(),
            ));
        }

        let index = self.selection.index().ok_or_else(|| {
            Error::InvalidTransition("Cannot edit an empty collection".to_string())
        })?;

        let card = self.store.get(index).ok_or(Error::IndexOutOfRange {
            index,
            len: self.store.len(),
        })?;

        self.mode = EditMode::Editing {
            index,
            draft: Draft {
                question: card.question.clone(),
                answer: card.answer.clone(),
            },
        };

        Ok(())
    }

    /// Discards the draft and leaves edit mode.
    ///
    /// No-op when no edit is in progress. Never mutates the collection.
    pub fn cancel_edit(&mut self) {
        self.mode = EditMode::None;
    }

    /// Validates and persists the draft as an add or an edit.
    ///
    /// Both fields are trimmed. If either is blank the notifier raises an
    /// alert, the session stays in its current edit mode, and nothing is
    /// persisted; the caller re-prompts. On success the committed card
    /// becomes the selection, question face up, and edit mode clears.
    ///
    /// A persistence write failure is reported through the notifier as a
    /// warning; the in-memory result stands and the commit still succeeds.
    ///
    /// # Arguments
    ///
    /// * `question` - The question text to commit
    /// * `answer` - The answer text to commit
    ///
    /// # Returns
    ///
    /// Ok if the card was committed.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidTransition` when no edit is in progress, or
    /// `Error::InvalidCard` when a trimmed field is empty.
    pub fn commit(&mut self, question: &str, answer: &str) -> Result<()> {
        if !self.mode.is_editing() {
            return Err(Error::InvalidTransition(
                "Commit is only valid while adding or editing".to_string(),
            ));
        }

        let question = question.trim();
        let answer = answer.trim();
        if question.is_empty() || answer.is_empty() {
            self.notifier
                .alert("Please fill in both the question and answer.");
            return Err(Error::InvalidCard(
                "Question and answer are both required".to_string(),
            ));
        }

        let index = if let EditMode::Editing { index, .. } = &self.mode {
            let target = *index;
            match self.store.update(target, question, answer) {
                Ok(()) => target,
                Err(err @ (Error::Io(_) | Error::Json(_))) => {
                    self.notifier
                        .warn(&format!("Failed to save flashcards: {}", err));
                    target
                }
                Err(other) => return Err(other),
            }
        } else {
            match self.store.add(question, answer) {
                Ok(index) => index,
                Err(err @ (Error::Io(_) | Error::Json(_))) => {
                    self.notifier
                        .warn(&format!("Failed to save flashcards: {}", err));
                    self.store.len() - 1
                }
                Err(other) => return Err(other),
            }
        };

        self.selection = Selection::Selected(index);
        self.showing_answer = false;
        self.mode = EditMode::None;

        Ok(())
    }

    /// Deletes the current card after confirmation.
    ///
    /// The confirmation collaborator decides whether the removal proceeds; a
    /// declined confirmation leaves every piece of state untouched. After a
    /// removal the selection clamps to the last index (or empties) and the
    /// question face shows.
    ///
    /// A persistence write failure is reported through the notifier as a
    /// warning; the in-memory removal stands.
    ///
    /// # Returns
    ///
    /// `true` if the card was deleted, `false` if the confirmation declined.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidTransition` if the collection is empty or an
    /// edit is in progress.
    pub fn delete_current(&mut self) -> Result<bool> {
        if self.mode.is_editing() {
            return Err(Error::InvalidTransition(
                "Cannot delete while an edit is in progress".to_string(),
            ));
        }

        let index = self.selection.index().ok_or_else(|| {
            Error::InvalidTransition("Cannot delete from an empty collection".to_string())
        })?;

        if !self
            .confirmer
            .confirm("Delete this flashcard? This cannot be undone.")
        {
            return Ok(false);
        }

        match self.store.remove(index) {
            Ok(()) => {}
            Err(err @ (Error::Io(_) | Error::Json(_))) => {
                self.notifier
                    .warn(&format!("Failed to save flashcards: {}", err));
            }
            Err(other) => return Err(other),
        }

        self.selection = if self.store.is_empty() {
            Selection::Empty
        } else {
            Selection::Selected(index.min(self.store.len() - 1))
        };
        self.showing_answer = false;

        Ok(true)
    }
}
