//! Feedback sources
//!
//! The solver does not care where feedback comes from: a known answer
//! (simulation, benchmarking) or an outside judge answering prompts.

use crate::core::{Feedback, Word};
use anyhow::Result;

/// Supplies feedback for each guess the solver makes
pub trait FeedbackSource {
    /// Feedback for `guess`, which was scored from `candidates`
    ///
    /// `Ok(None)` means the source has given up and the solve is abandoned.
    ///
    /// # Errors
    /// Implementations fail when feedback cannot be obtained at all
    /// (for example, the input stream broke).
    fn feedback(&mut self, guess: &Word, candidates: &[&Word]) -> Result<Option<Feedback>>;
}

/// Simulated feedback against a known answer
#[derive(Debug, Clone, Copy)]
pub struct KnownAnswer<'w> {
    answer: &'w Word,
}

impl<'w> KnownAnswer<'w> {
    #[must_use]
    pub const fn new(answer: &'w Word) -> Self {
        Self { answer }
    }
}

impl FeedbackSource for KnownAnswer<'_> {
    fn feedback(&mut self, guess: &Word, _candidates: &[&Word]) -> Result<Option<Feedback>> {
        Ok(Some(Feedback::evaluate(guess, self.answer)))
    }
}
