//! folder-quiz: Flashcard quizzes from a folder of text files.
//!
//! Each `.txt` file is one card: its content is the question and its file
//! name (minus the extension) is the answer.

pub mod answer;
pub mod deck;
pub mod error;
pub mod logging;
pub mod picker;
pub mod report;
pub mod session;
pub mod tui;
pub mod types;
