//! TUI effects boundary: event loop, terminal lifecycle, key mapping.
//!
//! It wires the pure layers (state, update, view) to the real terminal via
//! crossterm and ratatui. Kept minimal: all intelligence lives in the pure
//! layers and in `effects`.
//!
//! Architecture: one thread, blocking on crossterm events. The folder
//! picker reads stdin itself, so there is no background key reader that
//! could steal its input. While the picker runs, the terminal is handed
//! back to the shell and the alternate screen is re-entered afterwards.

use std::io;
use std::path::{Path, PathBuf};

use crossterm::ExecutableCommand;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::picker::{FolderPicker, PickOutcome, PromptPicker};
use crate::types::DeckConfig;

use super::effects::dispatch;
use super::state::{Action, App, Screen};
use super::view::render;

type Term = Terminal<CrosstermBackend<io::Stdout>>;

// ============================================================================
// KEY MAPPING
// ============================================================================

/// Map a crossterm key event to a semantic Action.
///
/// Screen-aware: on the quiz screen printable characters are answer text,
/// elsewhere they are menu shortcuts. Returns None for keys that don't map
/// to any action.
pub fn map_key(key: KeyEvent, screen: &Screen) -> Option<Action> {
    // AltGr arrives as CONTROL | ALT on Windows and types a character
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::ALT);

    // Ctrl+C and Esc always quit
    if (ctrl && key.code == KeyCode::Char('c')) || key.code == KeyCode::Esc {
        return Some(Action::Quit);
    }

    match screen {
        Screen::MainMenu => match key.code {
            KeyCode::Char('h') | KeyCode::Char('H') => Some(Action::HowTo),
            KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Enter => Some(Action::Start),
            KeyCode::Char('q') | KeyCode::Char('Q') => Some(Action::Quit),
            _ => None,
        },
        Screen::Explanation => match key.code {
            KeyCode::Char('b') | KeyCode::Char('B') | KeyCode::Backspace | KeyCode::Enter => {
                Some(Action::Back)
            }
            _ => None,
        },
        Screen::ReadyConfirm { .. } => match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => Some(Action::ConfirmYes),
            KeyCode::Char('n') | KeyCode::Char('N') => Some(Action::ConfirmNo),
            _ => None,
        },
        Screen::Quiz { .. } => map_quiz_key(key, ctrl),
        Screen::Finale => match key.code {
            KeyCode::Char('r') | KeyCode::Char('R') => Some(Action::Retry),
            KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Enter => Some(Action::Home),
            KeyCode::Char('q') | KeyCode::Char('Q') => Some(Action::Quit),
            _ => None,
        },
    }
}

fn map_quiz_key(key: KeyEvent, ctrl: bool) -> Option<Action> {
    if ctrl {
        return match key.code {
            KeyCode::Char('d') => Some(Action::Finish),
            KeyCode::Char('b') => Some(Action::Back),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Enter => Some(Action::Submit),
        KeyCode::Backspace => Some(Action::Backspace),
        KeyCode::Char(c) => Some(Action::Input(c)),
        _ => None,
    }
}

// ============================================================================
// TERMINAL LIFECYCLE
// ============================================================================

/// Set up the terminal for TUI mode.
fn setup_terminal() -> io::Result<Term> {
    enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore the terminal to normal mode.
fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

/// Re-enter TUI mode after handing the terminal to the shell.
fn resume_terminal(terminal: &mut Term) -> io::Result<()> {
    enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;
    terminal.clear()
}

/// Install a panic hook that restores the terminal before printing the panic.
fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        // Best-effort terminal restoration
        let _ = restore_terminal();
        original_hook(panic_info);
    }));
}

// ============================================================================
// FOLDER PICKER
// ============================================================================

/// Leaves the alternate screen, prompts on stdin/stdout, then comes back.
struct SuspendingPicker<'a> {
    terminal: &'a mut Term,
}

impl FolderPicker for SuspendingPicker<'_> {
    fn pick_folder(&mut self, start: &Path) -> PickOutcome {
        if let Err(e) = restore_terminal() {
            log::warn!("Could not leave TUI mode for the picker: {}", e);
        }

        let outcome = PromptPicker::new(io::stdin().lock(), io::stdout()).pick_folder(start);

        if let Err(e) = resume_terminal(self.terminal) {
            log::error!("Could not resume TUI mode after the picker: {}", e);
        }

        outcome
    }
}

// ============================================================================
// EVENT LOOP
// ============================================================================

/// Run the quiz TUI until the user quits.
///
/// This is the main entry point for the TUI. `start_dir` is where the
/// folder picker starts.
pub fn run(start_dir: PathBuf, deck_config: DeckConfig) -> io::Result<()> {
    install_panic_hook();
    let mut terminal = setup_terminal()?;
    let mut app = App::new(start_dir, deck_config);

    log::info!("TUI started");
    let result = event_loop(&mut terminal, &mut app);

    restore_terminal()?;
    log::info!("TUI stopped");
    result
}

fn event_loop(terminal: &mut Term, app: &mut App) -> io::Result<()> {
    loop {
        // Render
        terminal.draw(|frame| render(app, frame))?;

        // Check quit flag
        if app.should_quit {
            return Ok(());
        }

        // Block on the next key press; resizes just redraw
        let key = match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => key,
            _ => continue,
        };

        if let Some(action) = map_key(key, &app.screen) {
            let mut picker = SuspendingPicker {
                terminal: &mut *terminal,
            };
            dispatch(app, &action, &mut picker);
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn all_screens() -> Vec<Screen> {
        vec![
            Screen::MainMenu,
            Screen::Explanation,
            Screen::ready(PathBuf::from("/cards")),
            Screen::quiz(),
            Screen::Finale,
        ]
    }

    #[test]
    fn ctrl_c_and_esc_quit_everywhere() {
        for screen in all_screens() {
            assert_eq!(map_key(ctrl('c'), &screen), Some(Action::Quit));
            assert_eq!(map_key(key(KeyCode::Esc), &screen), Some(Action::Quit));
        }
    }

    #[test]
    fn main_menu_shortcuts() {
        let s = Screen::MainMenu;
        assert_eq!(map_key(key(KeyCode::Char('h')), &s), Some(Action::HowTo));
        assert_eq!(map_key(key(KeyCode::Char('s')), &s), Some(Action::Start));
        assert_eq!(map_key(key(KeyCode::Enter), &s), Some(Action::Start));
        assert_eq!(map_key(key(KeyCode::Char('q')), &s), Some(Action::Quit));
        assert_eq!(map_key(key(KeyCode::Char('z')), &s), None);
    }

    #[test]
    fn explanation_back_keys() {
        for code in [KeyCode::Char('b'), KeyCode::Backspace, KeyCode::Enter] {
            assert_eq!(map_key(key(code), &Screen::Explanation), Some(Action::Back));
        }
    }

    #[test]
    fn ready_yes_and_no() {
        let s = Screen::ready(PathBuf::from("/cards"));
        assert_eq!(map_key(key(KeyCode::Char('y')), &s), Some(Action::ConfirmYes));
        assert_eq!(map_key(key(KeyCode::Char('Y')), &s), Some(Action::ConfirmYes));
        assert_eq!(map_key(key(KeyCode::Char('n')), &s), Some(Action::ConfirmNo));
    }

    #[test]
    fn quiz_letters_are_answer_text() {
        let s = Screen::quiz();
        // Menu shortcut letters must not escape the answer box
        for c in ['q', 'h', 's', 'r', 'B', ' '] {
            assert_eq!(map_key(key(KeyCode::Char(c)), &s), Some(Action::Input(c)));
        }
    }

    #[test]
    fn quiz_editing_and_control_keys() {
        let s = Screen::quiz();
        assert_eq!(map_key(key(KeyCode::Enter), &s), Some(Action::Submit));
        assert_eq!(map_key(key(KeyCode::Backspace), &s), Some(Action::Backspace));
        assert_eq!(map_key(ctrl('d'), &s), Some(Action::Finish));
        assert_eq!(map_key(ctrl('b'), &s), Some(Action::Back));
        assert_eq!(map_key(ctrl('x'), &s), None);
        assert_eq!(map_key(key(KeyCode::Up), &s), None);
    }

    #[test]
    fn quiz_altgr_characters_are_answer_text() {
        let s = Screen::quiz();
        let altgr = KeyModifiers::CONTROL | KeyModifiers::ALT;
        for c in ['@', '\\', '{', 'd', 'b'] {
            let key = KeyEvent::new(KeyCode::Char(c), altgr);
            assert_eq!(map_key(key, &s), Some(Action::Input(c)));
        }
    }

    #[test]
    fn finale_shortcuts() {
        let s = Screen::Finale;
        assert_eq!(map_key(key(KeyCode::Char('r')), &s), Some(Action::Retry));
        assert_eq!(map_key(key(KeyCode::Char('h')), &s), Some(Action::Home));
        assert_eq!(map_key(key(KeyCode::Enter), &s), Some(Action::Home));
        assert_eq!(map_key(key(KeyCode::Char('q')), &s), Some(Action::Quit));
    }
}
