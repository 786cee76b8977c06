//! Wordle solving algorithms
//!
//! Candidate filtering, letter-frequency scoring, and the solver loop that
//! ties them together.

mod engine;
mod filter;
mod frequency;
mod source;
pub mod strategy;

pub use engine::{Round, SolveOutcome, SolveState, Solver};
pub use filter::filter_candidates;
pub use frequency::{FrequencyTable, ScoreError, Tiebreak, best, best_words, pick_best, rank};
pub use source::{FeedbackSource, KnownAnswer};
pub use strategy::{StandardStrategy, Strategy, StrategyType, TwoGuessStrategy, choose_opener};
