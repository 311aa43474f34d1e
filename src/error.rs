//! Error types for loading decks and running quiz sessions.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Everything that can go wrong between picking a folder and answering a card.
///
/// `SessionExhausted` is not a failure in the usual sense: it is how a
/// session reports that there is no card left to show.
#[derive(Debug, Error)]
pub enum QuizError {
    /// The chosen path is missing, not a directory, or cannot be listed.
    #[error("Not a readable folder: {} ({reason})", path.display())]
    InvalidFolder { path: PathBuf, reason: String },

    /// A card file could not be read.
    #[error("Could not read {}: {source}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A card file is larger than the configured limit.
    #[error("{} is {size} bytes, over the {limit} byte limit", path.display())]
    FileTooLarge { path: PathBuf, size: u64, limit: u64 },

    /// No card left: the session reached its end or was finished early.
    #[error("No cards left in this session")]
    SessionExhausted,
}

impl QuizError {
    pub fn invalid_folder(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::InvalidFolder {
            path: path.into(),
            reason: reason.into(),
        }
    }
}
