//! Domain types for folder-quiz.

use serde::Serialize;
use std::path::PathBuf;

// ============================================================================
// CARDS
// ============================================================================

/// One quiz item, loaded from a single `.txt` file.
///
/// Immutable once loaded: the content is shown as-is and the user must type
/// `expected_answer`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Flashcard {
    /// Where the card was loaded from.
    pub path: PathBuf,
    /// Raw file text (lossy UTF-8).
    pub content: String,
    /// File name without directory and last extension, lower-cased.
    pub expected_answer: String,
    /// File size in bytes at load time.
    pub size_bytes: u64,
}

/// The ordered cards of one folder, plus the files that could not be loaded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FlashcardSet {
    /// Folder the set was built from.
    pub folder: PathBuf,
    /// Cards in quiz order (sorted by file name).
    pub cards: Vec<Flashcard>,
    /// Card files skipped due to read errors (path, error message).
    pub skipped: Vec<(PathBuf, String)>,
}

impl FlashcardSet {
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Display name of the folder (last path component).
    pub fn folder_name(&self) -> String {
        self.folder
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| self.folder.display().to_string())
    }
}

/// Result of checking one typed answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerOutcome {
    /// Matched: the cursor moved to the next card.
    Correct,
    /// No match: the cursor stays, the user may try again.
    Incorrect,
}

// ============================================================================
// CONFIGURATION
// ============================================================================

/// Default per-file size limit: 1 MiB of flashcard text is plenty.
pub const DEFAULT_MAX_FILE_SIZE: u64 = 1024 * 1024;

/// Output format for deck reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable pretty output.
    #[default]
    Human,
    /// Machine-readable JSON.
    Json,
}

/// Settings for building a deck from a folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeckConfig {
    /// Files larger than this are skipped instead of read.
    pub max_file_size: u64,
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            max_file_size: DEFAULT_MAX_FILE_SIZE,
        }
    }
}
