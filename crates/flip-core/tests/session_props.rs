// Rust guideline compliant 2026-08-05

//! Property-based tests for the session controller.
//!
//! These tests validate universal properties of navigation, flipping and
//! deletion across arbitrary collection sizes and starting positions.

use flip_core::{AutoConfirm, MemoryVault, Notifier, Selection, Session, Store};
use proptest::prelude::*;

/// Notifier that swallows every message.
#[derive(Clone, Copy, Default)]
struct Silent;

impl Notifier for Silent {
    fn warn(&self, _message: &str) {}
    fn alert(&self, _message: &str) {}
}

fn session_with(n: usize) -> Session<MemoryVault, AutoConfirm, Silent> {
    let mut store = Store::open(MemoryVault::new(), &Silent);
    for i in 0..n {
        store
            .add(&format!("Q{}", i), &format!("A{}", i))
            .expect("Failed to add");
    }
    Session::new(store, AutoConfirm, Silent)
}

proptest! {
    /// Calling next() n times on n cards returns to the starting position.
    #[test]
    fn prop_next_n_times_returns_to_start(n in 1usize..8, start in 0usize..8) {
        let start = start % n;
        let mut session = session_with(n);
        for _ in 0..start {
            session.next();
        }
        let before = session.selection();

        for _ in 0..n {
            session.next();
        }

        prop_assert_eq!(session.selection(), before);
    }

    /// Calling previous() n times on n cards returns to the starting position.
    #[test]
    fn prop_previous_n_times_returns_to_start(n in 1usize..8, start in 0usize..8) {
        let start = start % n;
        let mut session = session_with(n);
        for _ in 0..start {
            session.next();
        }
        let before = session.selection();

        for _ in 0..n {
            session.previous();
        }

        prop_assert_eq!(session.selection(), before);
    }

    /// next() then previous() is the identity on the selection.
    #[test]
    fn prop_next_previous_identity(n in 1usize..8, steps in 0usize..16) {
        let mut session = session_with(n);
        for _ in 0..steps {
            session.next();
        }
        let before = session.selection();

        session.next();
        session.previous();

        prop_assert_eq!(session.selection(), before);
    }

    /// Flipping twice restores the face; the selection never moves.
    #[test]
    fn prop_flip_is_an_involution(n in 0usize..8, pre_flips in 0usize..4) {
        let mut session = session_with(n);
        for _ in 0..pre_flips {
            session.flip();
        }
        let face = session.showing_answer();
        let position = session.selection();

        session.flip();
        session.flip();

        prop_assert_eq!(session.showing_answer(), face);
        prop_assert_eq!(session.selection(), position);
    }

    /// After any confirmed delete the selection is in range, clamped to the
    /// last index when the tail card was removed.
    #[test]
    fn prop_delete_keeps_selection_in_range(n in 1usize..8, start in 0usize..8) {
        let start = start % n;
        let mut session = session_with(n);
        for _ in 0..start {
            session.next();
        }

        session.delete_current().expect("Failed to delete");

        let len = session.store().len();
        prop_assert_eq!(len, n - 1);
        match session.selection() {
            Selection::Empty => prop_assert_eq!(len, 0),
            Selection::Selected(index) => {
                prop_assert!(index < len);
                prop_assert_eq!(index, start.min(len - 1));
            }
        }
    }

    /// A committed add always selects the appended card.
    #[test]
    fn prop_add_commit_selects_last(
        n in 0usize..6,
        question in "[a-zA-Z0-9 ]{1,24}",
        answer in "[a-zA-Z0-9 ]{1,24}",
    ) {
        prop_assume!(!question.trim().is_empty());
        prop_assume!(!answer.trim().is_empty());

        let mut session = session_with(n);
        session.start_add();
        session.commit(&question, &answer).expect("Failed to commit");

        prop_assert_eq!(session.store().len(), n + 1);
        prop_assert_eq!(session.selection(), Selection::Selected(n));
        prop_assert!(!session.showing_answer());
    }

    /// An edit commit never changes the collection length or the card id.
    #[test]
    fn prop_edit_commit_preserves_length_and_id(
        n in 1usize..6,
        start in 0usize..8,
        question in "[a-zA-Z0-9 ]{1,24}",
    ) {
        prop_assume!(!question.trim().is_empty());

        let start = start % n;
        let mut session = session_with(n);
        for _ in 0..start {
            session.next();
        }
        let id_before = session.store().get(start).expect("card").id.clone();

        session.start_edit().expect("Failed to start edit");
        session.commit(&question, "answer").expect("Failed to commit");

        prop_assert_eq!(session.store().len(), n);
        prop_assert_eq!(&session.store().get(start).expect("card").id, &id_before);
    }
}
