//! Word solving command
//!
//! Solves a known target word and returns the solution path.

use crate::core::Word;
use crate::solver::{KnownAnswer, Round, SolveOutcome, Solver, StrategyType};
use anyhow::{Context, Result};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Configuration for solving a word
pub struct SolveConfig {
    pub target: String,
    pub strategy: StrategyType,
    pub seed: u64,
}

impl SolveConfig {
    #[must_use]
    pub fn new(target: String, seed: u64) -> Self {
        Self {
            target,
            strategy: StrategyType::default(),
            seed,
        }
    }
}

/// Result of solving a word
pub struct SolveResult {
    pub target: Word,
    pub strategy: StrategyType,
    /// Seed the solve ran with, for reproducing it
    pub seed: u64,
    pub outcome: SolveOutcome,
}

/// Solve a specific word against `dictionary`
///
/// `on_round` sees each round as it is played. A target missing from the
/// dictionary is allowed; the solve then ends exhausted.
///
/// # Errors
///
/// Returns an error if the target word is invalid (not 5 ASCII letters).
pub fn solve_word(
    config: &SolveConfig,
    dictionary: &[Word],
    on_round: impl FnMut(&Round),
) -> Result<SolveResult> {
    let target = Word::new(config.target.as_str())
        .with_context(|| format!("Invalid target word '{}'", config.target))?;

    if !dictionary.contains(&target) {
        log::warn!("target '{target}' is not in the dictionary and cannot be found");
    }

    let mut solver = Solver::new(config.strategy, dictionary, StdRng::seed_from_u64(config.seed));
    let outcome = solver.run(&mut KnownAnswer::new(&target), on_round)?;

    Ok(SolveResult {
        target,
        strategy: config.strategy,
        seed: config.seed,
        outcome,
    })
}
