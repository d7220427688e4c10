// Rust guideline compliant 2026-08-06

//! Command implementations for the Flip CLI.

pub mod add;
pub mod list;
pub mod review;
pub mod show;
