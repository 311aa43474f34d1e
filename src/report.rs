//! Report formatting for loaded decks.
//!
//! Pure functions: (FlashcardSet, OutputFormat) → String.
//! No I/O, no side effects.

use humansize::{format_size, BINARY};

use crate::types::{FlashcardSet, OutputFormat};

/// Format a deck for output.
///
/// Pure function: takes data, returns formatted string.
pub fn format_deck(deck: &FlashcardSet, format: OutputFormat) -> String {
    match format {
        OutputFormat::Human => format_human(deck),
        OutputFormat::Json => format_json(deck),
    }
}

// ============================================================================
// HUMAN FORMAT
// ============================================================================

fn format_human(deck: &FlashcardSet) -> String {
    let mut out = String::new();

    if !deck.cards.is_empty() {
        out.push_str("=== Cards (quiz order) ===\n");
        for (i, card) in deck.cards.iter().enumerate() {
            let file = card
                .path
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_else(|| card.path.display().to_string());
            out.push_str(&format!(
                "{:>4}. {}  ({}, {})\n",
                i + 1,
                card.expected_answer,
                file,
                format_size(card.size_bytes, BINARY)
            ));
        }
        out.push('\n');
    }

    if !deck.skipped.is_empty() {
        out.push_str("=== Skipped (read errors) ===\n");
        for (path, error) in &deck.skipped {
            out.push_str(&format!("  {} - {}\n", path.display(), error));
        }
        out.push('\n');
    }

    out.push_str(&format_summary(deck));

    out
}

fn format_summary(deck: &FlashcardSet) -> String {
    let total_bytes: u64 = deck.cards.iter().map(|c| c.size_bytes).sum();

    let mut out = String::new();
    out.push_str("=== Summary ===\n");
    out.push_str(&format!("Folder: {}\n", deck.folder.display()));
    out.push_str(&format!("Cards: {}\n", deck.cards.len()));
    out.push_str(&format!("Skipped: {}\n", deck.skipped.len()));
    out.push_str(&format!("Total size: {}\n", format_size(total_bytes, BINARY)));

    if deck.cards.is_empty() {
        out.push_str("\nNo .txt cards found; a quiz on this folder ends immediately.\n");
    }

    out
}

// ============================================================================
// JSON FORMAT
// ============================================================================

fn format_json(deck: &FlashcardSet) -> String {
    // Serialization of plain data cannot fail
    serde_json::to_string_pretty(deck).unwrap_or_else(|e| format!("{{\"error\": \"{}\"}}", e))
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Flashcard;
    use std::path::PathBuf;

    fn sample_deck() -> FlashcardSet {
        FlashcardSet {
            folder: PathBuf::from("/quiz/capitals"),
            cards: vec![
                Flashcard {
                    path: PathBuf::from("/quiz/capitals/Berlin.txt"),
                    content: "capital of Germany".into(),
                    expected_answer: "berlin".into(),
                    size_bytes: 18,
                },
                Flashcard {
                    path: PathBuf::from("/quiz/capitals/Rome.txt"),
                    content: "capital of Italy".into(),
                    expected_answer: "rome".into(),
                    size_bytes: 16,
                },
            ],
            skipped: vec![(PathBuf::from("/quiz/capitals/huge.txt"), "too big".into())],
        }
    }

    #[test]
    fn test_human_lists_cards_in_order() {
        let out = format_deck(&sample_deck(), OutputFormat::Human);
        let berlin = out.find("berlin").unwrap();
        let rome = out.find("rome").unwrap();
        assert!(berlin < rome);
        assert!(out.contains("Berlin.txt"));
        assert!(out.contains("Cards: 2"));
    }

    #[test]
    fn test_human_lists_skipped_files() {
        let out = format_deck(&sample_deck(), OutputFormat::Human);
        assert!(out.contains("Skipped (read errors)"));
        assert!(out.contains("huge.txt - too big"));
        assert!(out.contains("Skipped: 1"));
    }

    #[test]
    fn test_human_empty_deck_explains_outcome() {
        let deck = FlashcardSet {
            folder: PathBuf::from("/empty"),
            ..Default::default()
        };
        let out = format_deck(&deck, OutputFormat::Human);
        assert!(!out.contains("=== Cards"));
        assert!(out.contains("No .txt cards found"));
    }

    #[test]
    fn test_json_is_valid_and_complete() {
        let out = format_deck(&sample_deck(), OutputFormat::Json);
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["cards"].as_array().unwrap().len(), 2);
        assert_eq!(value["cards"][0]["expected_answer"], "berlin");
        assert_eq!(value["cards"][1]["content"], "capital of Italy");
        assert_eq!(value["skipped"].as_array().unwrap().len(), 1);
    }
}
