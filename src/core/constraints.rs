//! Accumulated knowledge about the hidden word
//!
//! A `ConstraintModel` folds every (guess, feedback) pair seen so far into
//! per-position records plus a set of letters the word must contain.

use super::word::WORD_LEN;
use super::{Feedback, FeedbackSymbol, LetterSet, Word};

/// What is known about a single position
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PositionConstraint {
    /// Letter proven to be at this position
    pub confirmed: Option<u8>,
    /// Letters proven not to be at this position
    ///
    /// Ignored by [`PositionConstraint::allows`] once `confirmed` is set.
    pub excluded: LetterSet,
}

impl PositionConstraint {
    /// Check whether `letter` may sit at this position
    #[inline]
    #[must_use]
    pub const fn allows(&self, letter: u8) -> bool {
        match self.confirmed {
            Some(confirmed) => confirmed == letter,
            None => !self.excluded.contains(letter),
        }
    }
}

/// Constraint set built up from feedback
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConstraintModel {
    positions: [PositionConstraint; WORD_LEN],
    required: LetterSet,
}

impl ConstraintModel {
    /// Create a model with no knowledge
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a model that forbids `letters` everywhere
    ///
    /// Used to look for words made entirely of letters not yet tried.
    #[must_use]
    pub fn excluding(letters: LetterSet) -> Self {
        let mut model = Self::new();
        for position in &mut model.positions {
            position.excluded = letters;
        }
        model
    }

    #[must_use]
    pub const fn positions(&self) -> &[PositionConstraint; WORD_LEN] {
        &self.positions
    }

    /// Letters known to be somewhere in the word
    #[must_use]
    pub const fn required(&self) -> LetterSet {
        self.required
    }

    /// True if no feedback has been folded in yet
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Fold the feedback for `guess` into the model
    ///
    /// - Hit: the position is confirmed and its exclusions dropped.
    /// - Present: the letter becomes required and is excluded at this position.
    /// - Miss: if the same letter is a hit or present elsewhere in this row
    ///   it is only excluded here, otherwise it is excluded at every
    ///   unconfirmed position.
    ///
    /// # Examples
    /// ```
    /// use wordle_frequency::core::{ConstraintModel, Feedback, Word};
    ///
    /// let guess = Word::new("earls").unwrap();
    /// let answer = Word::new("stare").unwrap();
    ///
    /// let mut model = ConstraintModel::new();
    /// model.update(&guess, &Feedback::evaluate(&guess, &answer));
    ///
    /// assert!(model.allows(&answer));
    /// assert!(!model.allows(&guess));
    /// ```
    pub fn update(&mut self, guess: &Word, feedback: &Feedback) -> &mut Self {
        let row = guess.chars().iter().zip(feedback.symbols());

        let present_in_row: LetterSet = row
            .clone()
            .filter(|&(_, &symbol)| symbol != FeedbackSymbol::Miss)
            .map(|(&letter, _)| letter)
            .collect();

        for (i, (&letter, &symbol)) in row.enumerate() {
            match symbol {
                FeedbackSymbol::Hit => {
                    let position = &mut self.positions[i];
                    position.confirmed = Some(letter);
                    position.excluded.clear();
                }
                FeedbackSymbol::Present => {
                    self.required.insert(letter);
                    self.positions[i].excluded.insert(letter);
                }
                FeedbackSymbol::Miss if present_in_row.contains(letter) => {
                    self.positions[i].excluded.insert(letter);
                }
                FeedbackSymbol::Miss => {
                    for position in &mut self.positions {
                        if position.confirmed.is_none() {
                            position.excluded.insert(letter);
                        }
                    }
                }
            }
        }

        self
    }

    /// Check whether `word` is consistent with everything known
    #[must_use]
    pub fn allows(&self, word: &Word) -> bool {
        self.positions
            .iter()
            .zip(word.chars())
            .all(|(position, &letter)| position.allows(letter))
            && word.letters().is_superset(self.required)
    }
}
