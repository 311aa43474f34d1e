//! TUI module for the interactive quiz.
//!
//! Organized along FP/Unix boundaries:
//! - `state`: Pure data types (Screen, Action, Transition)
//! - `update`: Pure transitions
//! - `effects`: Applies transitions to the App (picker, deck loading, answers)
//! - `view`: Pure rendering
//! - `run`: Terminal lifecycle and event loop
//! - `theme`: Style constants

pub mod effects;
pub mod run;
pub mod state;
pub mod theme;
pub mod update;
pub mod view;
