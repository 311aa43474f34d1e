//! Folder selection.
//!
//! The quiz only needs "a directory, or the user changed their mind".
//! [`FolderPicker`] is that seam; [`PromptPicker`] is the line-based
//! implementation the terminal UI uses, generic over its reader/writer so
//! it can be driven from tests.
//!
//! Structure:
//! - Types: pick outcome (sum type), picker trait
//! - Pure functions: starting directory, path resolution
//! - Effect functions: the interactive prompt

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

// ============================================================================
// TYPES
// ============================================================================

/// What the user did in the picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickOutcome {
    /// A directory was chosen.
    Selected(PathBuf),
    /// The user backed out.
    Cancelled,
}

/// Directory-only folder selection.
pub trait FolderPicker {
    /// Ask the user for a folder, starting from `start`.
    fn pick_folder(&mut self, start: &Path) -> PickOutcome;
}

// ============================================================================
// PURE FUNCTIONS
// ============================================================================

/// Where the picker starts when the user gave no hint.
///
/// Desktop first (that is where people tend to keep a quiz folder),
/// then home, then the working directory.
pub fn default_start_dir() -> PathBuf {
    dirs::desktop_dir()
        .filter(|d| d.is_dir())
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Turn typed text into a path.
///
/// `~` and `~/...` expand to the home directory; relative paths are taken
/// relative to `base`. Pure apart from the home directory lookup.
pub fn resolve_input(input: &str, base: &Path) -> PathBuf {
    let input = input.trim();

    if input == "~" {
        if let Some(home) = dirs::home_dir() {
            return home;
        }
    } else if let Some(rest) = input.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }

    // join() keeps absolute inputs as they are
    base.join(input)
}

// ============================================================================
// PROMPT PICKER
// ============================================================================

/// Asks for a folder path on a line-oriented reader/writer pair.
///
/// Blank input or end of input cancels. Anything that is not a directory
/// is reported and asked again.
pub struct PromptPicker<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> PromptPicker<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn prompt(&mut self, start: &Path) -> io::Result<PickOutcome> {
        writeln!(self.output)?;
        writeln!(self.output, "Choose the folder with your .txt cards.")?;
        writeln!(self.output, "Relative paths start at: {}", start.display())?;
        writeln!(self.output, "Leave empty to cancel.")?;

        loop {
            write!(self.output, "Folder: ")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(PickOutcome::Cancelled);
            }

            if line.trim().is_empty() {
                return Ok(PickOutcome::Cancelled);
            }

            let path = resolve_input(&line, start);
            if path.is_dir() {
                return Ok(PickOutcome::Selected(path));
            }

            writeln!(self.output, "Not a folder: {}", path.display())?;
        }
    }
}

impl<R: BufRead, W: Write> FolderPicker for PromptPicker<R, W> {
    fn pick_folder(&mut self, start: &Path) -> PickOutcome {
        match self.prompt(start) {
            Ok(outcome) => outcome,
            Err(e) => {
                log::warn!("Folder prompt failed, treating as cancel: {}", e);
                PickOutcome::Cancelled
            }
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
