// Rust guideline compliant 2026-08-06

//! Output formatting module for the Flip CLI.
//!
//! This module provides functionality for formatting flashcards in various
//! output formats (JSON, table, plain text).

use chrono::{Local, LocalResult, TimeZone};
use flip_core::Flashcard;
use serde_json::json;
use std::io::Write;
use tabled::{builder::Builder, settings::Style};
use termcolor::{Buffer, Color, ColorSpec, WriteColor};

/// Output formatter trait.
///
/// Defines the interface for formatting flashcards in different output
/// formats.
pub trait OutputFormatter {
    /// Formats a single flashcard for display.
    ///
    /// # Arguments
    /// * `card` - The flashcard to format
    ///
    /// # Returns
    /// A formatted string representation of the flashcard
    fn format_card(&self, card: &Flashcard) -> String;

    /// Formats a list of flashcards for display.
    ///
    /// # Arguments
    /// * `cards` - The flashcards to format
    ///
    /// # Returns
    /// A formatted string representation of the flashcard list
    fn format_list(&self, cards: &[Flashcard]) -> String;

    /// Formats an error message for display.
    ///
    /// # Arguments
    /// * `error` - The error message to format
    ///
    /// # Returns
    /// A formatted error string
    fn format_error(&self, error: &str) -> String;
}

/// Renders a millisecond timestamp as local time.
fn format_timestamp(millis: i64) -> String {
    match Local.timestamp_millis_opt(millis) {
        LocalResult::Single(dt) => dt.format("%Y-%m-%d %H:%M").to_string(),
        _ => millis.to_string(),
    }
}

/// JSON output formatter.
///
/// Formats flashcards as valid JSON for machine consumption.
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format_card(&self, card: &Flashcard) -> String {
        serde_json::to_string_pretty(card)
            .unwrap_or_else(|_| json!({ "error": "Failed to serialize flashcard" }).to_string())
    }

    fn format_list(&self, cards: &[Flashcard]) -> String {
        let output = json!({
            "flashcards": cards,
            "total": cards.len(),
        });
        serde_json::to_string_pretty(&output).unwrap_or_else(|_| {
            json!({ "error": "Failed to serialize flashcard list" }).to_string()
        })
    }

    fn format_error(&self, error: &str) -> String {
        json!({ "error": error }).to_string()
    }
}

/// Table output formatter.
///
/// Formats flashcards as human-readable tables with optional color.
pub struct TableFormatter {
    use_color: bool,
}

impl TableFormatter {
    /// Creates a new table formatter.
    ///
    /// # Arguments
    /// * `use_color` - Whether to use colored output
    ///
    /// # Returns
    /// A new TableFormatter instance
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }
}

impl OutputFormatter for TableFormatter {
    fn format_card(&self, card: &Flashcard) -> String {
        let mut output = String::new();

        output.push_str(&format!("ID:       {}\n", card.id));
        output.push_str(&format!("Question: {}\n", card.question));
        output.push_str(&format!("Answer:   {}\n", card.answer));
        output.push_str(&format!("Created:  {}\n", format_timestamp(card.created_at)));
        output.push_str(&format!("Updated:  {}\n", format_timestamp(card.updated_at)));

        output
    }

    fn format_list(&self, cards: &[Flashcard]) -> String {
        if cards.is_empty() {
            return "No flashcards found.".to_string();
        }

        let mut builder = Builder::default();
        builder.push_record(vec!["#", "Question", "Answer", "Updated"]);

        for (index, card) in cards.iter().enumerate() {
            builder.push_record(vec![
                &(index + 1).to_string(),
                &card.question,
                &card.answer,
                &format_timestamp(card.updated_at),
            ]);
        }

        let mut table = builder.build();
        table.with(Style::modern());

        table.to_string()
    }

    fn format_error(&self, error: &str) -> String {
        if self.use_color {
            let mut buffer = Buffer::ansi();
            let _ = buffer.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true));
            let _ = write!(buffer, "Error: ");
            let _ = buffer.reset();
            let _ = write!(buffer, "{}", error);
            String::from_utf8_lossy(buffer.as_slice()).to_string()
        } else {
            format!("Error: {}", error)
        }
    }
}

/// Plain text output formatter.
///
/// Formats flashcards as simple plain text without tables.
pub struct PlainFormatter;

impl OutputFormatter for PlainFormatter {
    fn format_card(&self, card: &Flashcard) -> String {
        format!("{}\n{}\n{}\n", card.id, card.question, card.answer)
    }

    fn format_list(&self, cards: &[Flashcard]) -> String {
        if cards.is_empty() {
            return "No flashcards found.".to_string();
        }

        let mut output = String::new();
        for (index, card) in cards.iter().enumerate() {
            output.push_str(&format!(
                "{} {} -> {}\n",
                index + 1,
                card.question,
                card.answer
            ));
        }
        output
    }

    fn format_error(&self, error: &str) -> String {
        format!("Error: {}", error)
    }
}

/// Factory function to create an appropriate formatter.
///
/// # Arguments
/// * `format` - The desired output format ("json", "table", or "plain")
/// * `use_color` - Whether to use colored output (ignored for JSON)
///
/// # Returns
/// A boxed OutputFormatter instance
pub fn create_formatter(format: &str, use_color: bool) -> Box<dyn OutputFormatter> {
    match format {
        "json" => Box::new(JsonFormatter),
        "plain" => Box::new(PlainFormatter),
        _ => Box::new(TableFormatter::new(use_color)),
    }
}
