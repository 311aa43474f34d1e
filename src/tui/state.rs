//! TUI state algebra: pure types, zero effects.
//!
//! These types define the entire TUI state space: illegal states should be
//! unrepresentable. Exactly one screen is current at any time, held in a
//! single field of [`App`].
//!
//! Design principle: Screen variants carry only per-screen transient state
//! (the folder awaiting confirmation, the answer being typed). The quiz
//! session itself lives in App.

use std::path::PathBuf;

use crate::session::QuizSession;
use crate::types::DeckConfig;

// ============================================================================
// APPLICATION STATE
// ============================================================================

/// Top-level TUI model, owned by the event loop.
#[derive(Debug)]
pub struct App {
    /// Current screen, with its per-screen transient state.
    pub screen: Screen,

    /// The running (or just finished) quiz. None outside a playthrough.
    pub session: Option<QuizSession>,

    /// One-line message for the user (e.g. an unreadable folder).
    /// Cleared on the next user action.
    pub notice: Option<String>,

    /// Where the folder picker starts.
    pub start_dir: PathBuf,

    /// How decks are loaded.
    pub deck_config: DeckConfig,

    /// Set to true when the app should exit on the next tick.
    pub should_quit: bool,
}

// ============================================================================
// SCREENS
// ============================================================================

/// The current TUI screen.
///
/// Each variant is a state in the navigation state machine.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Screen {
    /// Start screen: how-to, start, quit.
    #[default]
    MainMenu,

    /// Set-up instructions.
    Explanation,

    /// "Are you ready?" gate after a folder was picked.
    ReadyConfirm {
        /// The picked folder; moves into the session on confirm.
        folder: PathBuf,
    },

    /// Quiz in progress. The card itself comes from App.session.
    Quiz {
        /// Answer typed so far.
        input: String,
        /// Result of the last submission, if any.
        feedback: Option<Feedback>,
    },

    /// Session over: retry, home, quit.
    Finale,
}

/// Feedback line shown under the answer box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feedback {
    /// Previous card answered correctly; now showing the next one.
    Correct,
    /// Wrong answer; same card, try again.
    Incorrect,
}

/// Which screen opened the folder picker (and gets control back on cancel).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    MainMenu,
    Finale,
}

impl Origin {
    pub fn screen(self) -> Screen {
        match self {
            Origin::MainMenu => Screen::MainMenu,
            Origin::Finale => Screen::Finale,
        }
    }
}

// ============================================================================
// ACTIONS
// ============================================================================

/// Semantic user command, decoupled from raw key events.
///
/// The effects layer maps key presses to Actions.
/// The transition function decides what each Action means per Screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Show the explanation (main menu).
    HowTo,
    /// Pick a folder and get ready (main menu).
    Start,
    /// Leave the current screen for the main menu.
    Back,
    /// Confirm readiness.
    ConfirmYes,
    /// Decline readiness.
    ConfirmNo,
    /// Type one character of the answer.
    Input(char),
    /// Delete the last typed character.
    Backspace,
    /// Check the typed answer.
    Submit,
    /// End the quiz now.
    Finish,
    /// Pick a new folder (finale).
    Retry,
    /// Return to the main menu (finale).
    Home,
    /// Quit the application.
    Quit,
}

// ============================================================================
// TRANSITIONS
// ============================================================================

/// Result of a pure state transition.
///
/// The update function returns this. The effects boundary inspects it
/// to decide what to render and which side effects to execute.
/// Follows the Elm/TEA pattern: pure code describes WHAT should happen,
/// effectful code decides HOW.
#[derive(Debug, PartialEq, Eq)]
pub enum Transition {
    /// Render this screen (may be the same or a different screen).
    Screen(Screen),
    /// Quit the application.
    Quit,
    /// Execute a side effect. The effects layer handles it
    /// and decides the resulting screen.
    Effect(Effect),
}

/// Side effect requested by a pure transition.
///
/// Pure code never executes these, it only describes them.
#[derive(Debug, PartialEq, Eq)]
pub enum Effect {
    /// Run the folder picker; on cancel, go back to `origin`.
    PickFolder { origin: Origin },
    /// Load the folder and start a session.
    StartSession { folder: PathBuf },
    /// Check `answer` against the current card.
    CheckAnswer { answer: String },
    /// End the running session, keeping it for the finale.
    FinishSession,
    /// Drop the running session and go to the main menu.
    AbandonSession,
}

// ============================================================================
// CONSTRUCTORS
// ============================================================================

impl App {
    /// Create an App on the main menu with no session.
    pub fn new(start_dir: PathBuf, deck_config: DeckConfig) -> Self {
        App {
            screen: Screen::MainMenu,
            session: None,
            notice: None,
            start_dir,
            deck_config,
            should_quit: false,
        }
    }
}

impl Screen {
    /// Quiz screen with an empty answer box and no feedback.
    pub fn quiz() -> Self {
        Screen::Quiz {
            input: String::new(),
            feedback: None,
        }
    }

    /// Ready gate for a freshly picked folder.
    pub fn ready(folder: PathBuf) -> Self {
        Screen::ReadyConfirm { folder }
    }
}

// ============================================================================
// TESTS
// ============================================================================
