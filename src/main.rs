//! termdialog CLI
//!
//! Run one dialog widget from the command line and print its result.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use ratatui::backend::Backend;

use termdialog::autocomplete::WordList;
use termdialog::demo;
use termdialog::error::Result;
use termdialog::logging::{LogConfig, init_logging};
use termdialog::report::format_outcome;
use termdialog::tui::geometry::default_search_limit;
use termdialog::tui::{
    Canvas, MenuEntry, run_alert, run_form, run_menu, run_search, run_table, session,
};
use termdialog::types::{FormField, Outcome, OutputFormat, TableRow};

#[derive(Parser)]
#[command(name = "termdialog")]
#[command(about = "Interactive terminal dialogs: menus, search, forms, tables and alerts")]
#[command(version)]
struct Cli {
    /// Output format for results
    #[arg(long, value_enum, default_value = "human", global = true)]
    format: OutputFormatArg,

    /// Append logs to this file
    #[arg(long, env = "TERMDIALOG_LOG", global = true)]
    log_file: Option<PathBuf>,

    /// Debug logging (to the cache directory unless --log-file is given)
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Pick one entry from a menu and print its label
    Menu {
        /// Menu title
        title: String,

        /// Entries as "k:Label", where k is the shortcut key
        #[arg(required = true, value_parser = parse_entry)]
        entries: Vec<EntryArg>,
    },

    /// Search with live suggestions and print the result
    Search {
        /// Prompt shown before the input
        prompt: String,

        /// Words to suggest from (default: a lorem ipsum list)
        words: Vec<String>,

        /// Maximum suggestions shown (default: fits the screen)
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Fill in labeled fields and print one value per line
    Form {
        /// Form title
        title: String,

        /// Field labels, in order
        #[arg(required = true)]
        fields: Vec<String>,
    },

    /// Show a bordered table until a key is pressed
    Table {
        /// Table title
        title: String,

        /// Header line shown above the rows (repeatable)
        #[arg(long)]
        header: Vec<String>,

        /// Cell separator within a row
        #[arg(long, default_value_t = ',')]
        separator: char,

        /// Rows, cells split on the separator
        rows: Vec<String>,
    },

    /// Show a message until a key is pressed
    Alert {
        /// Alert title
        title: String,

        /// Message; line breaks start new lines
        message: String,
    },

    /// Run the demo harness
    Test,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormatArg {
    Human,
    Json,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Human => OutputFormat::Human,
            OutputFormatArg::Json => OutputFormat::Json,
        }
    }
}

/// A menu entry given on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
struct EntryArg {
    shortcut: char,
    label: String,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let log = LogConfig {
        file: cli.log_file,
        debug: cli.debug,
    };
    if let Err(e) = init_logging(&log) {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }

    let format = OutputFormat::from(cli.format);
    let command = cli.command;
    let result = session(|canvas| dispatch(canvas, command))
        .and_then(|outcome| format_outcome(&outcome, format));

    match result {
        Ok(output) => {
            if !output.is_empty() {
                println!("{}", output);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

// ============================================================================
// ARGUMENT PARSING
// ============================================================================

/// Parse `k:Label` into a shortcut and a label.
fn parse_entry(arg: &str) -> std::result::Result<EntryArg, String> {
    let (key, label) = arg
        .split_once(':')
        .ok_or_else(|| format!("expected \"k:Label\", got {:?}", arg))?;

    let mut chars = key.chars();
    match (chars.next(), chars.next()) {
        (Some(shortcut), None) => Ok(EntryArg {
            shortcut,
            label: label.to_string(),
        }),
        _ => Err(format!("shortcut must be a single character, got {:?}", key)),
    }
}

/// Split a table row argument into cells.
fn split_row(line: &str, separator: char) -> TableRow {
    line.split(separator).map(str::to_string).collect()
}

// ============================================================================
// COMMAND HANDLERS
// ============================================================================

fn dispatch<B: Backend>(canvas: &mut Canvas<B>, command: Commands) -> Result<Outcome> {
    match command {
        Commands::Menu { title, entries } => cmd_menu(canvas, &title, entries),
        Commands::Search {
            prompt,
            words,
            limit,
        } => cmd_search(canvas, &prompt, words, limit),
        Commands::Form { title, fields } => cmd_form(canvas, &title, &fields),
        Commands::Table {
            title,
            header,
            separator,
            rows,
        } => cmd_table(canvas, &title, &header, separator, &rows),
        Commands::Alert { title, message } => {
            run_alert(canvas, &title, &message)?;
            Ok(Outcome::Nothing)
        }
        Commands::Test => demo::run(canvas),
    }
}

fn cmd_menu<B: Backend>(
    canvas: &mut Canvas<B>,
    title: &str,
    entries: Vec<EntryArg>,
) -> Result<Outcome> {
    let mut entries: Vec<MenuEntry<'_, B>> = entries
        .into_iter()
        .map(|EntryArg { shortcut, label }| {
            let chosen = label.clone();
            MenuEntry::new(shortcut, label, move |_| Ok(Outcome::Text(chosen.clone())))
        })
        .collect();
    run_menu(canvas, title, &mut entries, false)
}

fn cmd_search<B: Backend>(
    canvas: &mut Canvas<B>,
    prompt: &str,
    words: Vec<String>,
    limit: Option<usize>,
) -> Result<Outcome> {
    let mut words = if words.is_empty() {
        WordList::lorem()
    } else {
        WordList::new(words)
    };
    let limit = match limit {
        Some(limit) => limit,
        None => default_search_limit(canvas.screen()?),
    };
    run_search(canvas, prompt, &mut words, limit).map(Outcome::Text)
}

fn cmd_form<B: Backend>(canvas: &mut Canvas<B>, title: &str, labels: &[String]) -> Result<Outcome> {
    let fields: Vec<FormField> = labels.iter().map(FormField::new).collect();
    run_form(canvas, title, &fields).map(Outcome::Fields)
}

fn cmd_table<B: Backend>(
    canvas: &mut Canvas<B>,
    title: &str,
    header: &[String],
    separator: char,
    rows: &[String],
) -> Result<Outcome> {
    let rows: Vec<TableRow> = rows.iter().map(|line| split_row(line, separator)).collect();
    run_table(canvas, title, header, &rows)?;
    Ok(Outcome::Nothing)
}

// ============================================================================
// TESTS
// ============================================================================
