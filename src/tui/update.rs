//! Pure state transitions: (Screen, Action) → Transition.
//!
//! This is the navigation controller. Fully testable without a terminal.
//! Each screen defines which actions it accepts. Unhandled actions
//! return the current screen unchanged (no-op).

use std::path::PathBuf;

use super::state::{Action, Effect, Feedback, Origin, Screen, Transition};

/// Pure state transition function.
///
/// Anything that needs the filesystem, the picker, or the session comes
/// back as a [`Transition::Effect`] for the effects layer to interpret.
pub fn update(screen: Screen, action: &Action) -> Transition {
    match screen {
        Screen::MainMenu => update_main_menu(action),
        Screen::Explanation => update_explanation(action),
        Screen::ReadyConfirm { folder } => update_ready(folder, action),
        Screen::Quiz { input, feedback } => update_quiz(input, feedback, action),
        Screen::Finale => update_finale(action),
    }
}

// ============================================================================
// PER-SCREEN HANDLERS
// ============================================================================

/// MainMenu: how-to, start (via picker), quit.
fn update_main_menu(action: &Action) -> Transition {
    match action {
        Action::HowTo => Transition::Screen(Screen::Explanation),
        Action::Start => Transition::Effect(Effect::PickFolder {
            origin: Origin::MainMenu,
        }),
        Action::Quit => Transition::Quit,
        _ => Transition::Screen(Screen::MainMenu),
    }
}

/// Explanation: back is the only way out.
fn update_explanation(action: &Action) -> Transition {
    match action {
        Action::Back => Transition::Screen(Screen::MainMenu),
        Action::Quit => Transition::Quit,
        _ => Transition::Screen(Screen::Explanation),
    }
}

/// ReadyConfirm: yes starts the session, no discards the folder.
fn update_ready(folder: PathBuf, action: &Action) -> Transition {
    match action {
        Action::ConfirmYes => Transition::Effect(Effect::StartSession { folder }),
        Action::ConfirmNo => Transition::Screen(Screen::MainMenu),
        Action::Quit => Transition::Quit,
        _ => Transition::Screen(Screen::ReadyConfirm { folder }),
    }
}

/// Quiz: typing edits the answer, submit checks it, back/finish leave.
fn update_quiz(mut input: String, feedback: Option<Feedback>, action: &Action) -> Transition {
    match action {
        Action::Input(c) => {
            input.push(*c);
            Transition::Screen(Screen::Quiz { input, feedback })
        }
        Action::Backspace => {
            input.pop();
            Transition::Screen(Screen::Quiz { input, feedback })
        }
        Action::Submit => Transition::Effect(Effect::CheckAnswer { answer: input }),
        Action::Back => Transition::Effect(Effect::AbandonSession),
        Action::Finish => Transition::Effect(Effect::FinishSession),
        Action::Quit => Transition::Quit,
        _ => Transition::Screen(Screen::Quiz { input, feedback }),
    }
}

/// Finale: retry (via picker), home, quit.
fn update_finale(action: &Action) -> Transition {
    match action {
        Action::Retry => Transition::Effect(Effect::PickFolder {
            origin: Origin::Finale,
        }),
        Action::Home => Transition::Screen(Screen::MainMenu),
        Action::Quit => Transition::Quit,
        _ => Transition::Screen(Screen::Finale),
    }
}

// ============================================================================
// TESTS
// ============================================================================
