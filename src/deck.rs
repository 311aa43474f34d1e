//! Building a flashcard deck from a folder.
//!
//! Lists the folder (one level, sorted by file name), keeps `.txt` files,
//! and reads each card's text. Unreadable or oversized cards are skipped and
//! recorded, never fatal.

use std::fs::{self, File};
use std::io::{self, Read};
use std::path::Path;

use walkdir::WalkDir;

use crate::answer::{expected_answer, is_card_filename};
use crate::error::QuizError;
use crate::types::{DeckConfig, Flashcard, FlashcardSet};

/// Load every card in `folder`.
///
/// # Errors
/// Returns `QuizError::InvalidFolder` if `folder` is missing, is not a
/// directory, or cannot be listed. Problems with individual files end up
/// in `FlashcardSet::skipped` instead.
pub fn load_deck(folder: &Path, config: &DeckConfig) -> Result<FlashcardSet, QuizError> {
    let meta = fs::metadata(folder)
        .map_err(|e| QuizError::invalid_folder(folder, e.to_string()))?;
    if !meta.is_dir() {
        return Err(QuizError::invalid_folder(folder, "not a directory"));
    }

    let mut deck = FlashcardSet {
        folder: folder.to_path_buf(),
        ..Default::default()
    };

    let walker = WalkDir::new(folder)
        .min_depth(1)
        .max_depth(1)
        .follow_links(false)
        .sort_by_file_name();

    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                // The folder itself could not be listed
                if e.depth() == 0 {
                    return Err(QuizError::invalid_folder(folder, e.to_string()));
                }
                let path = e.path().map(Path::to_path_buf).unwrap_or_default();
                log::warn!("Skipping unreadable entry {}: {}", path.display(), e);
                deck.skipped.push((path, e.to_string()));
                continue;
            }
        };

        let path = entry.path();

        // Lossy so non-UTF-8 names still count as cards
        let filename = entry.file_name().to_string_lossy();

        if !is_card_filename(&filename) {
            continue;
        }

        // Skip directories named like cards ("old.txt/"); anything else,
        // dangling links included, goes through load_card and may be skipped
        if path.is_dir() {
            continue;
        }

        match load_card(path, config) {
            Ok(card) => deck.cards.push(card),
            Err(e) => {
                log::warn!("Skipping card: {}", e);
                deck.skipped.push((path.to_path_buf(), e.to_string()));
            }
        }
    }

    log::info!(
        "Loaded {} card(s) from {} ({} skipped)",
        deck.cards.len(),
        folder.display(),
        deck.skipped.len()
    );

    Ok(deck)
}

/// Read a single card file.
///
/// # Errors
/// `FileTooLarge` if the file exceeds `config.max_file_size`,
/// `FileRead` on any I/O failure.
pub fn load_card(path: &Path, config: &DeckConfig) -> Result<Flashcard, QuizError> {
    let read_error = |source| QuizError::FileRead {
        path: path.to_path_buf(),
        source,
    };
    let too_large = |size| QuizError::FileTooLarge {
        path: path.to_path_buf(),
        size,
        limit: config.max_file_size,
    };

    let file = File::open(path).map_err(read_error)?;

    let reported = file.metadata().map_err(read_error)?.len();
    if reported > config.max_file_size {
        return Err(too_large(reported));
    }

    // Metadata can lie (pseudo-files, files still growing); the limit holds
    // on what is actually read
    let mut bytes = Vec::new();
    file.take(config.max_file_size.saturating_add(1))
        .read_to_end(&mut bytes)
        .map_err(read_error)?;

    let size = bytes.len() as u64;
    if size > config.max_file_size {
        return Err(too_large(size));
    }

    let filename = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .ok_or_else(|| QuizError::FileRead {
            path: path.to_path_buf(),
            source: io::Error::new(io::ErrorKind::InvalidInput, "path has no file name"),
        })?;

    Ok(Flashcard {
        path: path.to_path_buf(),
        content: decode_text(&bytes),
        expected_answer: expected_answer(&filename),
        size_bytes: size,
    })
}

/// Decode card bytes as UTF-8, replacing invalid sequences with U+FFFD.
fn decode_text(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

// ============================================================================
// TESTS
// ============================================================================
