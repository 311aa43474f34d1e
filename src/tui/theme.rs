//! TUI color semantics and style constants.
//!
//! Pure data, consumed by the rendering layer for visual consistency.
//!
//! Color semantics:
//! - Green: correct answer, finished deck
//! - Red: wrong answer
//! - Yellow: notices (unreadable folder, skipped files)
//! - Cyan: interactive elements (keybinding hints, answer box)
//! - Dim: de-emphasized (paths, counters)
//! - Bold: important (card text, headings)

use ratatui::style::{Color, Modifier, Style};

// ============================================================================
// SEMANTIC STYLES
// ============================================================================

/// Correct answer / success: green.
pub const STYLE_CORRECT: Style = Style::new().fg(Color::Green);

/// Wrong answer: red.
pub const STYLE_INCORRECT: Style = Style::new().fg(Color::Red);

/// Notice / attention needed: yellow.
pub const STYLE_NOTICE: Style = Style::new().fg(Color::Yellow);

/// Interactive element / keybinding hint: cyan.
pub const STYLE_INTERACTIVE: Style = Style::new().fg(Color::Cyan);

/// De-emphasized metadata: dark gray.
pub const STYLE_DIM: Style = Style::new().fg(Color::DarkGray);

/// Important text: bold.
pub const STYLE_IMPORTANT: Style = Style::new().add_modifier(Modifier::BOLD);

// ============================================================================
// UI ELEMENT STYLES
// ============================================================================

/// Title bar / header.
pub const STYLE_TITLE: Style = Style::new().fg(Color::White).add_modifier(Modifier::BOLD);

/// Card content.
pub const STYLE_CARD: Style = Style::new().fg(Color::White);

/// Answer box border.
pub const STYLE_ANSWER_BOX: Style = Style::new().fg(Color::Cyan);

/// Footer / help line.
pub const STYLE_HELP: Style = Style::new().fg(Color::DarkGray);

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn semantic_styles_have_expected_colors() {
        assert_eq!(STYLE_CORRECT.fg, Some(Color::Green));
        assert_eq!(STYLE_INCORRECT.fg, Some(Color::Red));
        assert_eq!(STYLE_NOTICE.fg, Some(Color::Yellow));
        assert_eq!(STYLE_INTERACTIVE.fg, Some(Color::Cyan));
        assert_eq!(STYLE_DIM.fg, Some(Color::DarkGray));
    }

    #[test]
    fn important_and_title_are_bold() {
        assert!(STYLE_IMPORTANT.add_modifier.contains(Modifier::BOLD));
        assert!(STYLE_TITLE.add_modifier.contains(Modifier::BOLD));
    }
}
