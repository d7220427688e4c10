// Rust guideline compliant 2026-08-05

//! Flip Core Library
//!
//! This crate provides the foundational components for the Flip flashcard
//! review tool:
//! - Data model (Flashcard, validation)
//! - Storage engine (key-value persistence, atomic writes, seeding)
//! - Session controller (navigation, flip, add/edit/delete state machine)
//! - Derived display projection (counter, card faces, control states)
//! - Hash ID generation
//! - Configuration, error types and result handling

pub mod config;
pub mod display;
pub mod error;
pub mod identity;
pub mod models;
pub mod notify;
pub mod session;
pub mod storage;
pub mod time;

pub use config::{Config, OutputFormat};
pub use display::{Controls, DisplayState, EditorView};
pub use error::{Error, Result};
pub use models::Flashcard;
pub use notify::{AutoConfirm, Confirmer, Notifier, StderrNotifier};
pub use session::{Draft, EditMode, Selection, Session};
pub use storage::{FileVault, MemoryVault, Persistence, Store, VaultLock, STORAGE_KEY};
