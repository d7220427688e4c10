// Rust guideline compliant 2026-08-06

//! Interactive review loop.
//!
//! This is the presentation layer over the session controller: it renders
//! the derived display state after every transition and maps line-based
//! gestures onto transition calls. The controller itself never touches the
//! terminal.

use crate::interact::{TerminalConfirmer, TerminalNotifier};
use crate::terminal;
use flip_core::{
    AutoConfirm, Config, Confirmer, DisplayState, EditMode, Error, FileVault, Notifier, Session,
    Store,
};
use std::path::Path;

/// Runs the interactive review session.
///
/// # Arguments
///
/// * `dir` - The Flip data directory
/// * `config` - Loaded configuration
///
/// # Returns
///
/// Ok when the user quits.
///
/// # Errors
///
/// Returns an error if the vault cannot be opened or locked, or if a
/// controller contract is violated.
pub fn execute(dir: &Path, config: &Config) -> anyhow::Result<()> {
    let vault = FileVault::new(dir.to_path_buf())?;
    let _lock = vault.lock_exclusive()?;

    let notifier = TerminalNotifier;
    let mut store = Store::open(vault, &notifier);

    if config.seed_on_empty {
        if let Err(err) = store.seed_if_empty() {
            notifier.warn(&format!("Failed to save flashcards: {}", err));
        }
    }

    if config.confirm_delete {
        run(Session::new(store, TerminalConfirmer, notifier))
    } else {
        run(Session::new(store, AutoConfirm, notifier))
    }
}

fn run<C: Confirmer>(mut session: Session<FileVault, C, TerminalNotifier>) -> anyhow::Result<()> {
    print_help();

    loop {
        render(&session.display());

        let Some(line) = terminal::prompt("> ")? else {
            break;
        };

        match line.trim() {
            "" => {}
            "n" | "next" | "right" => session.next(),
            "p" | "prev" | "previous" | "left" => session.previous(),
            "f" | "flip" => session.flip(),
            "a" | "add" => {
                session.start_add();
                edit_loop(&mut session)?;
            }
            "e" | "edit" => match session.start_edit() {
                Ok(()) => edit_loop(&mut session)?,
                Err(err) => terminal::print_error(&err.to_string()),
            },
            "d" | "delete" => match session.delete_current() {
                Ok(true) => terminal::print_success("Deleted."),
                Ok(false) => {}
                Err(err) => terminal::print_error(&err.to_string()),
            },
            "h" | "?" | "help" => print_help(),
            "q" | "quit" | "exit" => break,
            other => terminal::print_error(&format!("Unknown command: {}", other)),
        }
    }

    Ok(())
}

/// Prompts for the draft fields until the commit succeeds or is cancelled.
fn edit_loop<C: Confirmer>(
    session: &mut Session<FileVault, C, TerminalNotifier>,
) -> anyhow::Result<()> {
    while session.mode().is_editing() {
        let Some(editor) = session.display().editor else {
            break;
        };

        println!();
        println!("{}", editor.title);

        let Some(question) = terminal::prompt_with_default("Question", &editor.question)? else {
            session.cancel_edit();
            break;
        };
        let Some(answer) = terminal::prompt_with_default("Answer", &editor.answer)? else {
            session.cancel_edit();
            break;
        };

        // Entering nothing at all backs out of a new card.
        if question.trim().is_empty()
            && answer.trim().is_empty()
            && matches!(session.mode(), EditMode::Adding(_))
        {
            session.cancel_edit();
            terminal::print_info("Cancelled.");
            break;
        }

        match session.commit(&question, &answer) {
            Ok(()) => terminal::print_success("Saved."),
            // Alert already raised; ask again.
            Err(Error::InvalidCard(_)) => continue,
            Err(err) => return Err(err.into()),
        }
    }

    Ok(())
}

fn render(display: &DisplayState) {
    println!();
    println!(
        "── {} ── {}",
        display.counter,
        if display.showing_answer { "A" } else { "Q" }
    );

    let face = if display.showing_answer {
        &display.back
    } else {
        &display.front
    };
    println!("  {}", terminal::wrap_text(face, 2));

    let mut hints: Vec<&str> = Vec::new();
    if display.controls.navigate {
        hints.push("[n]ext");
        hints.push("[p]rev");
    }
    if display.controls.flip {
        hints.push("[f]lip");
    }
    if display.controls.add {
        hints.push("[a]dd");
    }
    if display.controls.edit {
        hints.push("[e]dit");
    }
    if display.controls.delete {
        hints.push("[d]elete");
    }
    hints.push("[q]uit");
    println!("{}", hints.join(" "));
}

fn print_help() {
    println!("Flip: flashcard review");
    println!("  n, next      show the next card");
    println!("  p, prev      show the previous card");
    println!("  f, flip      flip between question and answer");
    println!("  a, add       add a new card");
    println!("  e, edit      edit the current card");
    println!("  d, delete    delete the current card");
    println!("  h, ?         show this help");
    println!("  q, quit      leave the session");
}
