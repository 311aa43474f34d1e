//! Quiz session: one playthrough over one deck.
//!
//! Owns the deck and a cursor. The cursor only moves forward, by exactly
//! one per correct answer; the session is over once the cursor reaches the
//! end of the deck or the user finishes early.

use std::path::Path;

use crate::answer::answer_matches;
use crate::deck::load_deck;
use crate::error::QuizError;
use crate::types::{AnswerOutcome, DeckConfig, Flashcard, FlashcardSet};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSession {
    deck: FlashcardSet,
    cursor: usize,
    finished_early: bool,
}

impl QuizSession {
    /// Build a fresh session from the cards in `folder`, cursor at 0.
    ///
    /// An empty folder is fine: the session starts out exhausted.
    ///
    /// # Errors
    /// `QuizError::InvalidFolder` if `folder` is not a readable directory.
    pub fn initialize(folder: &Path, config: &DeckConfig) -> Result<Self, QuizError> {
        let deck = load_deck(folder, config)?;
        Ok(Self::from_deck(deck))
    }

    /// Start a session over an already-loaded deck.
    pub fn from_deck(deck: FlashcardSet) -> Self {
        Self {
            deck,
            cursor: 0,
            finished_early: false,
        }
    }

    /// The card to show now.
    ///
    /// # Errors
    /// `QuizError::SessionExhausted` once every card is answered or the
    /// session was finished early.
    pub fn current_card(&self) -> Result<&Flashcard, QuizError> {
        if self.finished_early {
            return Err(QuizError::SessionExhausted);
        }
        self.deck.cards.get(self.cursor).ok_or(QuizError::SessionExhausted)
    }

    /// Check a typed answer against the current card.
    ///
    /// Correct answers advance the cursor; wrong ones leave everything as
    /// it was, so the user can retry as often as they like.
    ///
    /// # Errors
    /// `QuizError::SessionExhausted` if there is no current card.
    pub fn submit_answer(&mut self, text: &str) -> Result<AnswerOutcome, QuizError> {
        let card = self.current_card()?;

        if answer_matches(text, &card.expected_answer) {
            log::debug!("Correct answer for {}", card.path.display());
            self.cursor += 1;
            Ok(AnswerOutcome::Correct)
        } else {
            log::debug!("Wrong answer for {}", card.path.display());
            Ok(AnswerOutcome::Incorrect)
        }
    }

    /// End the session now, abandoning the remaining cards.
    pub fn finish_early(&mut self) {
        if !self.is_exhausted() {
            log::info!(
                "Session finished early at card {} of {}",
                self.cursor + 1,
                self.deck.len()
            );
        }
        self.finished_early = true;
    }

    /// True when there is no card left to show.
    pub fn is_exhausted(&self) -> bool {
        self.finished_early || self.cursor >= self.deck.len()
    }

    /// Zero-based index of the next unanswered card.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of cards answered correctly so far.
    pub fn completed(&self) -> usize {
        self.cursor.min(self.deck.len())
    }

    pub fn deck(&self) -> &FlashcardSet {
        &self.deck
    }

    pub fn len(&self) -> usize {
        self.deck.len()
    }

    pub fn is_empty(&self) -> bool {
        self.deck.is_empty()
    }
}

// ============================================================================
// TESTS
// ============================================================================
