//! Guess selection strategies
//!
//! Every strategy opens with a precomputed word and otherwise picks the
//! highest letter-frequency candidate. Strategies differ in whether some
//! rounds score a different pool than the remaining candidates.

use super::engine::Round;
use super::filter::filter_candidates;
use super::frequency::{FrequencyTable, ScoreError, pick_best};
use crate::core::{ConstraintModel, Word};
use crate::wordlists::OPENERS;
use rand::Rng;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashSet;

/// A guess-selection policy layered over the standard frequency pick
pub trait Strategy {
    /// Pool to score this round instead of the filtered candidates
    ///
    /// Returning `None` means the round follows the standard path: filter
    /// the candidates by everything known, then pick the best of them.
    fn probe_pool<'a>(&self, history: &[Round], pool: &[&'a Word]) -> Option<Vec<&'a Word>>;
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyType {
    /// Always guess the best remaining candidate
    Standard(StandardStrategy),
    /// Spend the second guess on fresh letters after a weak opener
    TwoGuess(TwoGuessStrategy),
}

impl Strategy for StrategyType {
    fn probe_pool<'a>(&self, history: &[Round], pool: &[&'a Word]) -> Option<Vec<&'a Word>> {
        match self {
            Self::Standard(s) => s.probe_pool(history, pool),
            Self::TwoGuess(s) => s.probe_pool(history, pool),
        }
    }
}

impl StrategyType {
    /// Names accepted by [`StrategyType::from_name`]
    pub const NAMES: &'static [&'static str] = &["standard", "two-guess"];

    /// Create strategy from name string
    ///
    /// Supported names: "standard", "two-guess" (alias "two_guess").
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "standard" => Some(Self::Standard(StandardStrategy)),
            "two-guess" | "two_guess" => Some(Self::TwoGuess(TwoGuessStrategy::default())),
            _ => None,
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Standard(_) => "standard",
            Self::TwoGuess(_) => "two-guess",
        }
    }
}

impl Default for StrategyType {
    fn default() -> Self {
        Self::Standard(StandardStrategy)
    }
}

/// Standard strategy
///
/// Every round after the opener guesses the top-scoring remaining candidate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StandardStrategy;

impl Strategy for StandardStrategy {
    fn probe_pool<'a>(&self, _history: &[Round], _pool: &[&'a Word]) -> Option<Vec<&'a Word>> {
        None
    }
}

/// Two-guess strategy
///
/// If the opener produced fewer than `min_hits` hits, the second guess is
/// chosen from words sharing no letter with the opener, scored by their own
/// letter frequencies. Otherwise, and from round three on, it behaves like
/// [`StandardStrategy`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TwoGuessStrategy {
    /// Openers with at least this many hits skip the probe round (default: 3)
    pub min_hits: usize,
}

impl TwoGuessStrategy {
    #[must_use]
    pub const fn new(min_hits: usize) -> Self {
        Self { min_hits }
    }
}

impl Default for TwoGuessStrategy {
    fn default() -> Self {
        Self::new(3)
    }
}

impl Strategy for TwoGuessStrategy {
    fn probe_pool<'a>(&self, history: &[Round], pool: &[&'a Word]) -> Option<Vec<&'a Word>> {
        let [opener] = history else {
            return None;
        };
        if opener.feedback.count_hits() >= self.min_hits {
            return None;
        }

        let fresh = filter_candidates(&ConstraintModel::excluding(opener.guess.letters()), pool);
        if fresh.is_empty() {
            log::debug!("no words avoid the letters of {}, guessing normally", opener.guess);
            return None;
        }

        Some(fresh)
    }
}

/// Choose the first guess of a solve
///
/// Picks uniformly among the precomputed openers present in `dictionary`.
/// When none of them are, falls back to the best-scoring word of the whole
/// dictionary.
///
/// # Errors
/// Returns `ScoreError::EmptyPool` if `dictionary` is empty.
pub fn choose_opener<'a, R: Rng + ?Sized>(
    dictionary: &[&'a Word],
    rng: &mut R,
) -> Result<&'a Word, ScoreError> {
    let openers: FxHashSet<&str> = OPENERS.iter().copied().collect();
    let available: Vec<&Word> = dictionary
        .iter()
        .copied()
        .filter(|word| openers.contains(word.text()))
        .collect();

    if let Some(&opener) = available.choose(rng) {
        return Ok(opener);
    }

    log::debug!("no precomputed opener in dictionary, scoring all {} words", dictionary.len());
    pick_best(dictionary, &FrequencyTable::from_pool(dictionary), rng)
}
