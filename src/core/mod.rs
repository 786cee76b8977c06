//! Core domain types for Wordle
//!
//! Words, feedback, and the constraint model built from feedback.
//! Everything here is pure and has no external dependencies.

mod constraints;
mod feedback;
mod letters;
mod word;

pub use constraints::{ConstraintModel, PositionConstraint};
pub use feedback::{Feedback, FeedbackError, FeedbackSymbol};
pub use letters::{ALPHABET_LEN, LetterSet};
pub use word::{WORD_LEN, Word, WordError};
