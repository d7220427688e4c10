// Rust guideline compliant 2026-08-06

//! Terminal UI utilities for the Flip CLI.
//!
//! This module provides color support, terminal width detection, line
//! prompts, and status message printing.

use std::env;
use std::io::{BufRead, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Determines if colored output should be used.
///
/// Respects the NO_COLOR environment variable and terminal capabilities.
///
/// # Returns
/// `true` if colored output should be used, `false` otherwise
pub fn should_use_color() -> bool {
    if env::var("NO_COLOR").is_ok() {
        return false;
    }

    atty::is(atty::Stream::Stdout)
}

/// Gets the terminal width in columns.
///
/// # Returns
/// The terminal width, or 80 if it cannot be determined
pub fn get_terminal_width() -> usize {
    term_size::dimensions().map(|(w, _)| w).unwrap_or(80)
}

/// Wraps text to fit within the terminal width.
///
/// # Arguments
/// * `text` - The text to wrap
/// * `indent` - The indentation level (in spaces)
///
/// # Returns
/// The wrapped text
pub fn wrap_text(text: &str, indent: usize) -> String {
    let width = get_terminal_width();
    let available_width = width.saturating_sub(indent);

    if available_width < 10 {
        return text.to_string();
    }

    let mut result = String::new();
    let indent_str = " ".repeat(indent);

    for (i, line) in text.lines().enumerate() {
        if i > 0 {
            result.push('\n');
            result.push_str(&indent_str);
        }

        if line.len() <= available_width {
            result.push_str(line);
        } else {
            let mut current_line = String::new();
            for word in line.split_whitespace() {
                if current_line.is_empty() {
                    current_line.push_str(word);
                } else if current_line.len() + 1 + word.len() <= available_width {
                    current_line.push(' ');
                    current_line.push_str(word);
                } else {
                    result.push_str(&current_line);
                    result.push('\n');
                    result.push_str(&indent_str);
                    current_line = word.to_string();
                }
            }
            result.push_str(&current_line);
        }
    }

    result
}

/// Prints a prompt and reads one line from stdin.
///
/// # Arguments
/// * `message` - The prompt text, printed without a trailing newline
///
/// # Returns
/// The line without its trailing newline, or `None` on end of input
pub fn prompt(message: &str) -> std::io::Result<Option<String>> {
    print!("{}", message);
    std::io::stdout().flush()?;

    let mut line = String::new();
    let read = std::io::stdin().lock().read_line(&mut line)?;
    if read == 0 {
        return Ok(None);
    }

    while line.ends_with('\n') || line.ends_with('\r') {
        line.pop();
    }

    Ok(Some(line))
}

/// Prints a prompt showing a default value and reads one line from stdin.
///
/// An empty reply keeps the default.
///
/// # Arguments
/// * `label` - The field label
/// * `default` - The value kept on an empty reply
///
/// # Returns
/// The entered (or defaulted) value, or `None` on end of input
pub fn prompt_with_default(label: &str, default: &str) -> std::io::Result<Option<String>> {
    let message = if default.is_empty() {
        format!("{}: ", label)
    } else {
        format!("{} [{}]: ", label, default)
    };

    let Some(line) = prompt(&message)? else {
        return Ok(None);
    };

    if line.trim().is_empty() && !default.is_empty() {
        return Ok(Some(default.to_string()));
    }

    Ok(Some(line))
}

/// Prints a status message with a colored prefix.
///
/// # Arguments
/// * `prefix` - The prefix text
/// * `prefix_color` - The color for the prefix
/// * `message` - The message text
pub fn print_status(prefix: &str, prefix_color: Color, message: &str) {
    let mut stderr = StandardStream::stderr(ColorChoice::Auto);
    let _ = stderr.set_color(ColorSpec::new().set_fg(Some(prefix_color)).set_bold(true));
    let _ = write!(stderr, "{}: ", prefix);
    let _ = stderr.reset();
    let _ = writeln!(stderr, "{}", message);
}

/// Prints a success message.
///
/// # Arguments
/// * `message` - The message to print
pub fn print_success(message: &str) {
    print_status("✓", Color::Green, message);
}

/// Prints an error message.
///
/// # Arguments
/// * `message` - The message to print
pub fn print_error(message: &str) {
    print_status("✗", Color::Red, message);
}

/// Prints a warning message.
///
/// # Arguments
/// * `message` - The message to print
pub fn print_warning(message: &str) {
    print_status("⚠", Color::Yellow, message);
}

/// Prints an info message.
///
/// # Arguments
/// * `message` - The message to print
pub fn print_info(message: &str) {
    print_status("ℹ", Color::Cyan, message);
}
