//! Effect interpretation: apply a user action to the whole App.
//!
//! `update` decides what should happen; this module makes it happen:
//! running the folder picker, loading decks, checking answers. The picker
//! is injected, so complete navigation flows run in tests without a
//! terminal.

use crate::picker::{FolderPicker, PickOutcome};
use crate::session::QuizSession;
use crate::types::AnswerOutcome;

use super::state::{Action, App, Effect, Feedback, Screen, Transition};
use super::update::update;

/// Apply one user action: pure transition first, then any effect.
pub fn dispatch(app: &mut App, action: &Action, picker: &mut dyn FolderPicker) {
    app.notice = None;

    let screen = std::mem::take(&mut app.screen);

    match update(screen, action) {
        Transition::Screen(new_screen) => {
            // Nothing survives a trip home
            if new_screen == Screen::MainMenu {
                app.session = None;
            }
            app.screen = new_screen;
        }
        Transition::Quit => {
            log::info!("Quit requested");
            app.should_quit = true;
        }
        Transition::Effect(effect) => handle_effect(effect, app, picker),
    }
}

/// Handle a side effect requested by a pure transition.
fn handle_effect(effect: Effect, app: &mut App, picker: &mut dyn FolderPicker) {
    match effect {
        Effect::PickFolder { origin } => match picker.pick_folder(&app.start_dir) {
            PickOutcome::Selected(folder) => {
                log::info!("Folder selected: {}", folder.display());
                if let Some(parent) = folder.parent() {
                    app.start_dir = parent.to_path_buf();
                }
                app.session = None;
                app.screen = Screen::ready(folder);
            }
            PickOutcome::Cancelled => {
                log::debug!("Folder picker cancelled");
                app.screen = origin.screen();
            }
        },

        Effect::StartSession { folder } => {
            match QuizSession::initialize(&folder, &app.deck_config) {
                Ok(session) => {
                    log::info!(
                        "Session started: {} card(s) in {}",
                        session.len(),
                        folder.display()
                    );
                    app.screen = if session.is_exhausted() {
                        Screen::Finale
                    } else {
                        Screen::quiz()
                    };
                    app.session = Some(session);
                }
                Err(e) => {
                    log::warn!("Could not start session: {}", e);
                    app.notice = Some(e.to_string());
                    app.session = None;
                    app.screen = Screen::MainMenu;
                }
            }
        }

        Effect::CheckAnswer { answer } => {
            let Some(session) = app.session.as_mut() else {
                app.screen = Screen::MainMenu;
                return;
            };

            app.screen = match session.submit_answer(&answer) {
                Ok(AnswerOutcome::Correct) if session.is_exhausted() => {
                    log::info!("All {} card(s) answered", session.len());
                    Screen::Finale
                }
                Ok(AnswerOutcome::Correct) => Screen::Quiz {
                    input: String::new(),
                    feedback: Some(Feedback::Correct),
                },
                Ok(AnswerOutcome::Incorrect) => Screen::Quiz {
                    input: answer,
                    feedback: Some(Feedback::Incorrect),
                },
                Err(_) => Screen::Finale,
            };
        }

        Effect::FinishSession => {
            if let Some(session) = app.session.as_mut() {
                session.finish_early();
            }
            app.screen = Screen::Finale;
        }

        Effect::AbandonSession => {
            if let Some(session) = &app.session {
                log::info!(
                    "Session abandoned at card {} of {}",
                    session.cursor() + 1,
                    session.len()
                );
            }
            app.session = None;
            app.screen = Screen::MainMenu;
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DeckConfig;
    use std::collections::VecDeque;
    use std::fs;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    /// Picker that replays canned outcomes and records where it started.
    struct ScriptedPicker {
        outcomes: VecDeque<PickOutcome>,
        starts: Vec<PathBuf>,
    }

    impl ScriptedPicker {
        fn new(outcomes: Vec<PickOutcome>) -> Self {
            Self {
                outcomes: outcomes.into(),
                starts: Vec::new(),
            }
        }

        fn selecting(folder: &Path) -> Self {
            Self::new(vec![PickOutcome::Selected(folder.to_path_buf())])
        }

        fn cancelling() -> Self {
            Self::new(vec![PickOutcome::Cancelled])
        }
    }

    impl FolderPicker for ScriptedPicker {
        fn pick_folder(&mut self, start: &Path) -> PickOutcome {
            self.starts.push(start.to_path_buf());
            self.outcomes.pop_front().unwrap_or(PickOutcome::Cancelled)
        }
    }

    fn new_app() -> App {
        App::new(PathBuf::from("/start"), DeckConfig::default())
    }

    fn capitals_dir() -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("Berlin.txt"), "capital of Germany").unwrap();
        fs::write(dir.path().join("Rome.txt"), "capital of Italy").unwrap();
        fs::write(dir.path().join("notes.md"), "ignored").unwrap();
        dir
    }

    fn type_answer(app: &mut App, text: &str, picker: &mut ScriptedPicker) {
        for c in text.chars() {
            dispatch(app, &Action::Input(c), picker);
        }
        dispatch(app, &Action::Submit, picker);
    }

    /// Drive the app from the main menu into a quiz on `folder`.
    fn start_quiz(app: &mut App, folder: &Path) {
        let mut picker = ScriptedPicker::selecting(folder);
        dispatch(app, &Action::Start, &mut picker);
        dispatch(app, &Action::ConfirmYes, &mut picker);
    }

    #[test]
    fn picker_cancel_on_main_menu_stays_put() {
        let mut app = new_app();
        let mut picker = ScriptedPicker::cancelling();
        dispatch(&mut app, &Action::Start, &mut picker);
        assert_eq!(app.screen, Screen::MainMenu);
        assert_eq!(picker.starts, vec![PathBuf::from("/start")]);
    }

    #[test]
    fn picked_folder_goes_to_ready_confirm() {
        let dir = capitals_dir();
        let mut app = new_app();
        let mut picker = ScriptedPicker::selecting(dir.path());
        dispatch(&mut app, &Action::Start, &mut picker);
        assert_eq!(app.screen, Screen::ready(dir.path().to_path_buf()));
        assert!(app.session.is_none());
    }

    #[test]
    fn ready_no_discards_folder_and_returns_home() {
        let dir = capitals_dir();
        let mut app = new_app();
        let mut picker = ScriptedPicker::selecting(dir.path());
        dispatch(&mut app, &Action::Start, &mut picker);
        dispatch(&mut app, &Action::ConfirmNo, &mut picker);
        assert_eq!(app.screen, Screen::MainMenu);
        assert!(app.session.is_none());
    }

    #[test]
    fn confirming_starts_quiz_on_first_card() {
        let dir = capitals_dir();
        let mut app = new_app();
        start_quiz(&mut app, dir.path());

        assert_eq!(app.screen, Screen::quiz());
        let session = app.session.as_ref().unwrap();
        assert_eq!(session.len(), 2);
        assert_eq!(session.current_card().unwrap().content, "capital of Germany");
    }

    #[test]
    fn capitals_scenario_ends_on_finale() {
        let dir = capitals_dir();
        let mut app = new_app();
        let mut picker = ScriptedPicker::cancelling();
        start_quiz(&mut app, dir.path());

        type_answer(&mut app, "berlin", &mut picker);
        assert_eq!(
            app.screen,
            Screen::Quiz {
                input: String::new(),
                feedback: Some(Feedback::Correct),
            }
        );

        type_answer(&mut app, "italy", &mut picker);
        assert_eq!(
            app.screen,
            Screen::Quiz {
                input: "italy".into(),
                feedback: Some(Feedback::Incorrect),
            }
        );
        assert_eq!(app.session.as_ref().unwrap().cursor(), 1);

        // Clear the wrong answer, then type the right one
        for _ in 0..5 {
            dispatch(&mut app, &Action::Backspace, &mut picker);
        }
        type_answer(&mut app, "rome", &mut picker);

        assert_eq!(app.screen, Screen::Finale);
        assert!(app.session.as_ref().unwrap().is_exhausted());
        assert_eq!(app.session.as_ref().unwrap().completed(), 2);
    }

    #[test]
    fn empty_folder_goes_straight_to_finale() {
        let dir = TempDir::new().unwrap();
        let mut app = new_app();
        start_quiz(&mut app, dir.path());
        assert_eq!(app.screen, Screen::Finale);
        assert!(app.session.as_ref().unwrap().is_exhausted());
    }

    #[test]
    fn unreadable_folder_shows_notice_on_main_menu() {
        let dir = TempDir::new().unwrap();
        let gone = dir.path().join("gone");
        fs::create_dir(&gone).unwrap();

        let mut app = new_app();
        let mut picker = ScriptedPicker::selecting(&gone);
        dispatch(&mut app, &Action::Start, &mut picker);
        fs::remove_dir(&gone).unwrap();
        dispatch(&mut app, &Action::ConfirmYes, &mut picker);

        assert_eq!(app.screen, Screen::MainMenu);
        assert!(app.session.is_none());
        assert!(app.notice.as_ref().unwrap().contains("Not a readable folder"));

        // Notice clears on the next action
        dispatch(&mut app, &Action::HowTo, &mut picker);
        assert!(app.notice.is_none());
    }

    #[test]
    fn finish_early_goes_to_finale() {
        let dir = capitals_dir();
        let mut app = new_app();
        let mut picker = ScriptedPicker::cancelling();
        start_quiz(&mut app, dir.path());

        dispatch(&mut app, &Action::Finish, &mut picker);

        assert_eq!(app.screen, Screen::Finale);
        let session = app.session.as_ref().unwrap();
        assert!(session.is_exhausted());
        assert_eq!(session.completed(), 0);
    }

    #[test]
    fn back_from_quiz_abandons_session() {
        let dir = capitals_dir();
        let mut app = new_app();
        let mut picker = ScriptedPicker::cancelling();
        start_quiz(&mut app, dir.path());

        dispatch(&mut app, &Action::Back, &mut picker);

        assert_eq!(app.screen, Screen::MainMenu);
        assert!(app.session.is_none());
    }

    #[test]
    fn retry_cancel_stays_on_finale() {
        let dir = TempDir::new().unwrap();
        let mut app = new_app();
        start_quiz(&mut app, dir.path());
        assert_eq!(app.screen, Screen::Finale);

        let mut picker = ScriptedPicker::cancelling();
        dispatch(&mut app, &Action::Retry, &mut picker);

        assert_eq!(app.screen, Screen::Finale);
        assert!(app.session.is_some());
    }

    #[test]
    fn retry_builds_a_fresh_session() {
        let dir = capitals_dir();
        let mut app = new_app();
        let mut picker = ScriptedPicker::cancelling();
        start_quiz(&mut app, dir.path());
        dispatch(&mut app, &Action::Finish, &mut picker);

        let mut picker = ScriptedPicker::selecting(dir.path());
        dispatch(&mut app, &Action::Retry, &mut picker);
        assert_eq!(app.screen, Screen::ready(dir.path().to_path_buf()));
        assert!(app.session.is_none());

        dispatch(&mut app, &Action::ConfirmYes, &mut picker);
        assert_eq!(app.screen, Screen::quiz());
        assert_eq!(app.session.as_ref().unwrap().cursor(), 0);
    }

    #[test]
    fn picker_starts_next_to_last_folder() {
        let dir = capitals_dir();
        let mut app = new_app();
        start_quiz(&mut app, dir.path());
        dispatch(&mut app, &Action::Finish, &mut ScriptedPicker::cancelling());

        let mut picker = ScriptedPicker::cancelling();
        dispatch(&mut app, &Action::Retry, &mut picker);

        assert_eq!(picker.starts, vec![dir.path().parent().unwrap().to_path_buf()]);
    }

    #[test]
    fn home_from_finale_drops_session() {
        let dir = TempDir::new().unwrap();
        let mut app = new_app();
        start_quiz(&mut app, dir.path());

        dispatch(&mut app, &Action::Home, &mut ScriptedPicker::cancelling());

        assert_eq!(app.screen, Screen::MainMenu);
        assert!(app.session.is_none());
    }

    #[test]
    fn explanation_round_trip() {
        let mut app = new_app();
        let mut picker = ScriptedPicker::cancelling();
        dispatch(&mut app, &Action::HowTo, &mut picker);
        assert_eq!(app.screen, Screen::Explanation);
        dispatch(&mut app, &Action::Back, &mut picker);
        assert_eq!(app.screen, Screen::MainMenu);
        assert!(picker.starts.is_empty());
    }

    #[test]
    fn quit_sets_flag_from_any_screen() {
        let mut app = new_app();
        dispatch(&mut app, &Action::Quit, &mut ScriptedPicker::cancelling());
        assert!(app.should_quit);
    }
}
