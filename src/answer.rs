//! Card file naming rules and answer matching.
//!
//! Pure functions: no I/O, easily testable.

/// Extension every card file carries, compared case-insensitively.
pub const CARD_EXTENSION: &str = ".txt";

/// Check if a file name is a card file (`.txt`, any casing).
///
/// "Paris.txt", "notes.TXT" and "a.b.Txt" qualify; "paris.md" does not.
pub fn is_card_filename(filename: &str) -> bool {
    filename.to_lowercase().ends_with(CARD_EXTENSION)
}

/// Derive the answer the user must type for a card file.
///
/// Strips everything from the *last* `.` and lower-cases the rest:
/// "Paris.txt" → "paris", "a.b.txt" → "a.b".
/// A name without any `.` is returned whole, lower-cased.
pub fn expected_answer(filename: &str) -> String {
    let lower = filename.to_lowercase();
    match lower.rfind('.') {
        Some(pos) => lower[..pos].to_string(),
        None => lower,
    }
}

/// Normalize typed text for comparison: trim surrounding whitespace, lower-case.
pub fn normalize_answer(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Compare typed text against an already-normalized expected answer.
pub fn answer_matches(typed: &str, expected: &str) -> bool {
    normalize_answer(typed) == expected
}

// ============================================================================
// TESTS
// ============================================================================
