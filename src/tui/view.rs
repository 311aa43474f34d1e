//! Pure rendering: map App state to ratatui widget trees.
//!
//! Each screen has a dedicated render function. The main `render()`
//! dispatches based on the current Screen variant. Widget-building
//! functions are pure (state in, widgets out); the only effect is
//! Frame::render_widget() which writes to the terminal buffer.

use std::path::Path;

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Wrap};

use crate::answer::CARD_EXTENSION;
use crate::session::QuizSession;

use super::state::{App, Feedback, Screen};
use super::theme;

// ============================================================================
// DISPATCH
// ============================================================================

/// Render the current screen to the terminal frame.
pub fn render(app: &App, frame: &mut Frame) {
    let area = frame.area();

    // Common layout: title bar at top, content in middle, help at bottom
    let chunks = Layout::vertical([
        Constraint::Length(1), // title
        Constraint::Min(0),    // content
        Constraint::Length(1), // help
    ])
    .split(area);

    frame.render_widget(render_title(&app.screen), chunks[0]);
    frame.render_widget(render_help(&app.screen), chunks[2]);

    let content_area = chunks[1];

    match &app.screen {
        Screen::MainMenu => render_main_menu(app.notice.as_deref(), frame, content_area),
        Screen::Explanation => render_explanation(frame, content_area),
        Screen::ReadyConfirm { folder } => render_ready(folder, frame, content_area),
        Screen::Quiz { input, feedback } => match &app.session {
            Some(session) => render_quiz(session, input, *feedback, frame, content_area),
            None => render_missing_session(frame, content_area),
        },
        Screen::Finale => render_finale(app.session.as_ref(), frame, content_area),
    }
}

// ============================================================================
// SHARED LAYOUT
// ============================================================================

/// Title bar showing the app name and screen-specific context.
fn render_title(screen: &Screen) -> Paragraph<'static> {
    let title_text = match screen {
        Screen::MainMenu => "Folder Quiz",
        Screen::Explanation => "How it works",
        Screen::ReadyConfirm { .. } => "Ready?",
        Screen::Quiz { .. } => "Quiz",
        Screen::Finale => "Finished",
    };

    Paragraph::new(Line::from(Span::styled(title_text, theme::STYLE_TITLE)))
}

/// Help line showing available keybindings for the current screen.
fn render_help(screen: &Screen) -> Paragraph<'static> {
    let help_text = match screen {
        Screen::MainMenu => "[h] how it works  [s] start  [q] quit",
        Screen::Explanation => "[b] back  [Esc] quit",
        Screen::ReadyConfirm { .. } => "[y] yes, start  [n] no, back to menu  [Esc] quit",
        Screen::Quiz { .. } => "[Enter] check  [^D] finish  [^B] menu  [Esc] quit",
        Screen::Finale => "[r] another folder  [h] menu  [q] quit",
    };

    Paragraph::new(Span::styled(help_text, theme::STYLE_HELP))
}

fn folder_display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

// ============================================================================
// SCREEN: MAIN MENU
// ============================================================================

fn render_main_menu(notice: Option<&str>, frame: &mut Frame, area: Rect) {
    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled("  Folder Quiz", theme::STYLE_TITLE)),
        Line::from(Span::styled("  ═══════════", theme::STYLE_DIM)),
        Line::from(""),
        Line::from("  Flashcards from a folder of text files."),
        Line::from(""),
        Line::from(vec![
            Span::styled("  [h] ", theme::STYLE_INTERACTIVE),
            Span::raw("How it works"),
        ]),
        Line::from(vec![
            Span::styled("  [s] ", theme::STYLE_INTERACTIVE),
            Span::raw("Start: pick a folder"),
        ]),
        Line::from(vec![
            Span::styled("  [q] ", theme::STYLE_INTERACTIVE),
            Span::raw("Quit"),
        ]),
    ];

    if let Some(notice) = notice {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("  ⚠  {}", notice),
            theme::STYLE_NOTICE,
        )));
    }

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

// ============================================================================
// SCREEN: EXPLANATION
// ============================================================================

fn render_explanation(frame: &mut Frame, area: Rect) {
    let steps = [
        "Make a folder for one topic.".to_string(),
        format!("Add one {} file per card.", CARD_EXTENSION),
        "Name the file after the answer, e.g. Berlin.txt.".to_string(),
        "Write the question inside the file.".to_string(),
        "Press [s] on the menu and pick the folder.".to_string(),
        "Type each answer and press Enter.".to_string(),
    ];

    let mut lines = vec![Line::from("")];
    for (i, step) in steps.iter().enumerate() {
        lines.push(Line::from(vec![
            Span::styled(format!("  {}. ", i + 1), theme::STYLE_INTERACTIVE),
            Span::raw(step.clone()),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  Answers ignore case and surrounding spaces.",
        theme::STYLE_DIM,
    )));
    lines.push(Line::from(Span::styled(
        "  A wrong answer keeps the card until you get it.",
        theme::STYLE_DIM,
    )));

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

// ============================================================================
// SCREEN: READY CONFIRM
// ============================================================================

fn render_ready(folder: &Path, frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::raw("  Folder: "),
            Span::styled(folder_display_name(folder), theme::STYLE_IMPORTANT),
        ]),
        Line::from(Span::styled(
            format!("  {}", folder.display()),
            theme::STYLE_DIM,
        )),
        Line::from(""),
        Line::from(Span::styled("  Are you ready?", theme::STYLE_TITLE)),
        Line::from(""),
        Line::from(vec![
            Span::styled("  [y] ", theme::STYLE_INTERACTIVE),
            Span::raw("Yes, start the quiz"),
        ]),
        Line::from(vec![
            Span::styled("  [n] ", theme::STYLE_INTERACTIVE),
            Span::raw("No, back to the menu"),
        ]),
    ];

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

// ============================================================================
// SCREEN: QUIZ
// ============================================================================

fn render_quiz(
    session: &QuizSession,
    input: &str,
    feedback: Option<Feedback>,
    frame: &mut Frame,
    area: Rect,
) {
    let Ok(card) = session.current_card() else {
        render_missing_session(frame, area);
        return;
    };

    let chunks = Layout::vertical([
        Constraint::Length(2), // progress header
        Constraint::Min(1),    // card text
        Constraint::Length(3), // answer box
        Constraint::Length(1), // feedback
    ])
    .split(area);

    let header = Line::from(vec![
        Span::styled(
            format!("  Card {} / {}", session.cursor() + 1, session.len()),
            theme::STYLE_IMPORTANT,
        ),
        Span::styled(
            format!("  ({})", session.deck().folder_name()),
            theme::STYLE_DIM,
        ),
    ]);
    frame.render_widget(Paragraph::new(header), chunks[0]);

    let content = Paragraph::new(card.content.as_str())
        .style(theme::STYLE_CARD)
        .block(Block::new().title(Span::styled(" Card ", theme::STYLE_DIM)))
        .wrap(Wrap { trim: false });
    frame.render_widget(content, chunks[1]);

    let answer = Paragraph::new(Line::from(vec![
        Span::raw(input.to_string()),
        Span::styled("█", theme::STYLE_INTERACTIVE),
    ]))
    .block(
        Block::bordered()
            .title(" Answer ")
            .border_style(theme::STYLE_ANSWER_BOX),
    );
    frame.render_widget(answer, chunks[2]);

    let feedback_line = match feedback {
        Some(Feedback::Correct) => Line::from(Span::styled("  ✓ Correct!", theme::STYLE_CORRECT)),
        Some(Feedback::Incorrect) => Line::from(Span::styled(
            "  ✗ Not quite, try again",
            theme::STYLE_INCORRECT,
        )),
        None => Line::from(""),
    };
    frame.render_widget(Paragraph::new(feedback_line), chunks[3]);
}

fn render_missing_session(frame: &mut Frame, area: Rect) {
    let paragraph = Paragraph::new(Line::from(Span::styled(
        "  No card to show.",
        theme::STYLE_DIM,
    )));
    frame.render_widget(paragraph, area);
}

// ============================================================================
// SCREEN: FINALE
// ============================================================================

fn render_finale(session: Option<&QuizSession>, frame: &mut Frame, area: Rect) {
    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled("  Practice makes perfect!", theme::STYLE_TITLE)),
        Line::from(""),
    ];

    if let Some(session) = session {
        let style = if session.completed() == session.len() {
            theme::STYLE_CORRECT
        } else {
            theme::STYLE_IMPORTANT
        };
        lines.push(Line::from(Span::styled(
            format!(
                "  Completed {} of {} card{}",
                session.completed(),
                session.len(),
                if session.len() == 1 { "" } else { "s" }
            ),
            style,
        )));
        lines.push(Line::from(Span::styled(
            format!("  Folder: {}", session.deck().folder.display()),
            theme::STYLE_DIM,
        )));

        let skipped = &session.deck().skipped;
        if !skipped.is_empty() {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                format!(
                    "  ⚠  {} file{} skipped:",
                    skipped.len(),
                    if skipped.len() == 1 { "" } else { "s" }
                ),
                theme::STYLE_NOTICE,
            )));
            for (path, err) in skipped {
                lines.push(Line::from(Span::styled(
                    format!("    {}: {}", folder_display_name(path), err),
                    theme::STYLE_DIM,
                )));
            }
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("  [r] ", theme::STYLE_INTERACTIVE),
        Span::raw("Another folder"),
    ]));
    lines.push(Line::from(vec![
        Span::styled("  [h] ", theme::STYLE_INTERACTIVE),
        Span::raw("Main menu"),
    ]));
    lines.push(Line::from(vec![
        Span::styled("  [q] ", theme::STYLE_INTERACTIVE),
        Span::raw("Quit"),
    ]));

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

// ============================================================================
// TESTS
// ============================================================================
