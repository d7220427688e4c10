// Rust guideline compliant 2026-08-05

//! Derived display state.
//!
//! Everything a presentation layer needs to draw one frame of the review
//! screen, computed as a pure projection of the session. Any frontend (a
//! terminal loop, a GUI, a test harness) can render from this and issue
//! transitions back to the session; nothing here is stored or persisted.

use crate::session::{EditMode, Selection, Session};
use crate::storage::Persistence;

/// Message shown on the card front when the collection is empty.
pub const EMPTY_MESSAGE: &str = "No flashcards yet. Add one to get started.";

/// Fallback for a card with no question text.
const NO_QUESTION: &str = "(No question)";

/// Fallback for a card with no answer text.
const NO_ANSWER: &str = "(No answer)";

/// Which controls are currently usable.
///
/// Navigation, flip, edit and delete all disable while an edit is in
/// progress; everything but add disables when the collection is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Controls {
    /// Next/previous are usable.
    pub navigate: bool,
    /// Flip is usable.
    pub flip: bool,
    /// Add is usable.
    pub add: bool,
    /// Edit is usable.
    pub edit: bool,
    /// Delete is usable.
    pub delete: bool,
}

/// Editor fields when an add or edit is in progress.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorView {
    /// Editor heading ("Add Flashcard" or "Edit Flashcard").
    pub title: &'static str,
    /// Draft question text.
    pub question: String,
    /// Draft answer text.
    pub answer: String,
}

/// One frame of display state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayState {
    /// Position counter, "i+1 / n" or "0 / 0" when empty.
    pub counter: String,
    /// Front (question) face text, or the empty-collection message.
    pub front: String,
    /// Back (answer) face text.
    pub back: String,
    /// True if the answer face is showing.
    pub showing_answer: bool,
    /// Label for the flip control.
    pub toggle_label: &'static str,
    /// Enabled/disabled control set.
    pub controls: Controls,
    /// Editor fields, present while an edit is in progress.
    pub editor: Option<EditorView>,
}

/// Formats the position counter.
fn format_counter(selection: Selection, len: usize) -> String {
    match selection.index() {
        Some(index) => format!("{} / {}", index + 1, len),
        None => "0 / 0".to_string(),
    }
}

/// Projects the session into one frame of display state.
///
/// # Arguments
///
/// * `session` - The session to project
///
/// # Returns
///
/// The derived display state.
#[must_use]
pub fn project<B: Persistence, C, N>(session: &Session<B, C, N>) -> DisplayState {
    let store = session.store();
    let selection = session.selection();
    let editing = session.mode().is_editing();

    let editor = match session.mode() {
        EditMode::None => None,
        EditMode::Adding(draft) => Some(EditorView {
            title: "Add Flashcard",
            question: draft.question.clone(),
            answer: draft.answer.clone(),
        }),
        EditMode::Editing { draft, .. } => Some(EditorView {
            title: "Edit Flashcard",
            question: draft.question.clone(),
            answer: draft.answer.clone(),
        }),
    };

    let counter = format_counter(selection, store.len());

    let Some(index) = selection.index() else {
        return DisplayState {
            counter,
            front: EMPTY_MESSAGE.to_string(),
            back: String::new(),
            showing_answer: false,
            toggle_label: "Show Answer",
            controls: Controls {
                navigate: false,
                flip: false,
                add: true,
                edit: false,
                delete: false,
            },
            editor,
        };
    };

    let (front, back) = match store.get(index) {
        Some(card) => (
            if card.question.is_empty() {
                NO_QUESTION.to_string()
            } else {
                card.question.clone()
            },
            if card.answer.is_empty() {
                NO_ANSWER.to_string()
            } else {
                card.answer.clone()
            },
        ),
        None => (NO_QUESTION.to_string(), NO_ANSWER.to_string()),
    };

    DisplayState {
        counter,
        front,
        back,
        showing_answer: session.showing_answer(),
        toggle_label: if session.showing_answer() {
            "Show Question"
        } else {
            "Show Answer"
        },
        controls: Controls {
            navigate: !editing,
            flip: !editing,
            add: true,
            edit: !editing,
            delete: !editing,
        },
        editor,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_counter_empty() {
        assert_eq!(format_counter(Selection::Empty, 0), "0 / 0");
    }

    #[test]
    fn test_format_counter_is_one_based() {
        assert_eq!(format_counter(Selection::Selected(0), 3), "1 / 3");
        assert_eq!(format_counter(Selection::Selected(2), 3), "3 / 3");
    }
}
