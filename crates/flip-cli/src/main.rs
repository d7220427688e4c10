// Rust guideline compliant 2026-08-06

//! Flip CLI Application
//!
//! Command-line interface for the Flip flashcard review tool.

use clap::Parser;
use flip_core::Config;
use std::path::PathBuf;

pub mod commands;
pub mod interact;
pub mod output;
pub mod terminal;

pub use output::{create_formatter, OutputFormatter};
pub use terminal::should_use_color;

#[derive(Parser, Debug)]
#[command(
    name = "flip",
    version,
    about = "Flip: local-first flashcard review",
    long_about = "Flip stores a small ordered collection of question/answer cards on disk and lets you page through them, flip between question and answer, and create, edit or delete cards.",
    after_help = "Examples:\n  flip\n  flip add \"What is ownership?\" \"A set of rules governing how memory is managed\"\n  flip list --format json\n  flip show 2\n"
)]
struct Cli {
    /// Data directory (defaults to FLIP_DIR or the platform data dir)
    #[arg(long, global = true)]
    dir: Option<PathBuf>,

    /// Enable JSON output
    #[arg(long, global = true)]
    json: bool,

    /// Output format
    #[arg(long, value_enum, global = true)]
    format: Option<OutputFormatArg>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Clone, clap::ValueEnum)]
enum OutputFormatArg {
    Json,
    Table,
    Plain,
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Review cards interactively (the default)
    Review,

    /// List all cards
    List,

    /// Add a card without entering the review loop
    Add {
        /// Question text
        question: String,

        /// Answer text
        answer: String,
    },

    /// Show a single card
    Show {
        /// 1-based card position (defaults to the first card)
        position: Option<usize>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let dir = flip_core::config::data_dir(cli.dir.as_deref());
    let config = Config::load(&dir)?;

    let use_color = !cli.no_color && should_use_color();
    let format = match cli.format {
        Some(OutputFormatArg::Json) => "json",
        Some(OutputFormatArg::Table) => "table",
        Some(OutputFormatArg::Plain) => "plain",
        None => {
            if cli.json {
                "json"
            } else {
                match config.output_format {
                    flip_core::OutputFormat::Json => "json",
                    flip_core::OutputFormat::Table => "table",
                    flip_core::OutputFormat::Plain => "plain",
                }
            }
        }
    };
    let formatter = create_formatter(format, use_color);

    match cli.command {
        Some(Commands::List) => {
            commands::list::execute(&dir, formatter.as_ref())?;
        }
        Some(Commands::Add { question, answer }) => {
            commands::add::execute(&dir, &question, &answer)?;
        }
        Some(Commands::Show { position }) => {
            commands::show::execute(&dir, position, formatter.as_ref())?;
        }
        Some(Commands::Review) | None => {
            commands::review::execute(&dir, &config)?;
        }
    }

    Ok(())
}
