//! folder-quiz CLI
//!
//! Flashcard quizzes from a folder of text files.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use folder_quiz::deck::load_deck;
use folder_quiz::logging::{default_log_path, init_file_logger, init_stderr_logger, parse_level};
use folder_quiz::picker::default_start_dir;
use folder_quiz::report::format_deck;
use folder_quiz::tui;
use folder_quiz::types::{DEFAULT_MAX_FILE_SIZE, DeckConfig, OutputFormat};

#[derive(Parser)]
#[command(name = "folder-quiz")]
#[command(about = "Flashcard quizzes from a folder of text files")]
#[command(version)]
struct Cli {
    /// Log level: off, error, warn, info, debug, trace
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    /// Log file for interactive runs (default: in the user data directory)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive quiz (default)
    Play {
        /// Folder the picker starts in (default: desktop, else home)
        folder: Option<PathBuf>,

        /// Skip card files larger than this many bytes
        #[arg(long, default_value_t = DEFAULT_MAX_FILE_SIZE)]
        max_file_size: u64,
    },

    /// Load a folder as a quiz would and list its cards (no quiz)
    Check {
        /// Folder holding the .txt cards
        folder: PathBuf,

        /// Output format
        #[arg(long, value_enum, default_value = "human")]
        format: OutputFormatArg,

        /// Skip card files larger than this many bytes
        #[arg(long, default_value_t = DEFAULT_MAX_FILE_SIZE)]
        max_file_size: u64,
    },
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

fn main() -> ExitCode {
    let cli = Cli::parse();
    let level = parse_level(&cli.log_level);

    let command = cli.command.unwrap_or(Commands::Play {
        folder: None,
        max_file_size: DEFAULT_MAX_FILE_SIZE,
    });

    let result = match command {
        Commands::Play { folder, max_file_size } => {
            let log_file = cli.log_file.unwrap_or_else(default_log_path);
            if let Err(e) = init_file_logger(level, &log_file) {
                eprintln!("Warning: logging disabled ({}: {})", log_file.display(), e);
            }
            cmd_play(folder, DeckConfig { max_file_size })
        }
        Commands::Check { folder, format, max_file_size } => {
            init_stderr_logger(level);
            cmd_check(folder, format.into(), DeckConfig { max_file_size })
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

// ============================================================================
// COMMAND HANDLERS
// ============================================================================

fn cmd_play(folder: Option<PathBuf>, config: DeckConfig) -> Result<(), String> {
    let start_dir = match folder {
        Some(dir) if dir.is_dir() => dir,
        Some(dir) => return Err(format!("Not a folder: {}", dir.display())),
        None => default_start_dir(),
    };

    log::info!(
        "Starting folder-quiz (picker starts in {}, max card size {} bytes)",
        start_dir.display(),
        config.max_file_size
    );

    tui::run::run(start_dir, config).map_err(|e| e.to_string())
}

fn cmd_check(folder: PathBuf, format: OutputFormat, config: DeckConfig) -> Result<(), String> {
    if format == OutputFormat::Human {
        eprintln!("Loading: {}", folder.display());
        eprintln!();
    }

    let deck = load_deck(&folder, &config).map_err(|e| e.to_string())?;

    print!("{}", format_deck(&deck, format));

    Ok(())
}
