//! Benchmark command
//!
//! Solves every dictionary word as the hidden answer and collects the guess
//! counts per strategy.

use crate::core::Word;
use crate::solver::{KnownAnswer, SolveState, Solver, StrategyType};
use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Result of benchmarking one strategy
pub struct BenchmarkResult {
    pub strategy: StrategyType,
    /// Guesses taken for each answer, in dictionary order
    pub guess_counts: Vec<usize>,
    /// Answers the solver ran out of candidates on
    pub exhausted: usize,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    pub distribution: BTreeMap<usize, usize>,
    pub duration: Duration,
    pub words_per_second: f64,
}

impl BenchmarkResult {
    fn from_counts(
        strategy: StrategyType,
        guess_counts: Vec<usize>,
        exhausted: usize,
        duration: Duration,
    ) -> Self {
        let total_words = guess_counts.len();
        let total_guesses: usize = guess_counts.iter().sum();

        let mut distribution = BTreeMap::new();
        for &count in &guess_counts {
            *distribution.entry(count).or_insert(0) += 1;
        }

        let (average_guesses, words_per_second) = if total_words == 0 {
            (0.0, 0.0)
        } else {
            (
                total_guesses as f64 / total_words as f64,
                total_words as f64 / duration.as_secs_f64().max(f64::EPSILON),
            )
        };

        Self {
            strategy,
            min_guesses: guess_counts.iter().copied().min().unwrap_or(0),
            max_guesses: guess_counts.iter().copied().max().unwrap_or(0),
            guess_counts,
            exhausted,
            average_guesses,
            distribution,
            duration,
            words_per_second,
        }
    }

    #[must_use]
    pub fn total_words(&self) -> usize {
        self.guess_counts.len()
    }
}

/// Benchmark `strategy` with every word of `answers` as the hidden word
///
/// Solves run in parallel. Each one gets its own RNG seeded from `seed`
/// and the answer's index, so results do not depend on scheduling.
///
/// # Errors
///
/// Returns an error if a solve fails to obtain feedback.
pub fn run_benchmark(
    dictionary: &[Word],
    answers: &[Word],
    strategy: StrategyType,
    seed: u64,
    progress: &ProgressBar,
) -> Result<BenchmarkResult> {
    let start = Instant::now();

    let outcomes = answers
        .par_iter()
        .enumerate()
        .map(|(index, answer)| {
            let rng = StdRng::seed_from_u64(seed.wrapping_add(index as u64));
            let mut solver = Solver::new(strategy, dictionary, rng);
            let outcome = solver.solve(&mut KnownAnswer::new(answer));
            progress.inc(1);
            outcome
        })
        .collect::<Result<Vec<_>>>()?;

    let exhausted = outcomes
        .iter()
        .filter(|outcome| outcome.state == SolveState::Exhausted)
        .count();
    let guess_counts = outcomes.iter().map(|outcome| outcome.guess_count()).collect();

    let result = BenchmarkResult::from_counts(strategy, guess_counts, exhausted, start.elapsed());
    log::info!(
        "{}: {} words, {:.3} average guesses, {} exhausted",
        strategy.name(),
        result.total_words(),
        result.average_guesses,
        exhausted
    );
    Ok(result)
}

/// Benchmark each strategy in turn over the first `limit` dictionary words
///
/// # Errors
///
/// Returns an error if any solve fails to obtain feedback.
pub fn run_benchmarks(
    dictionary: &[Word],
    strategies: &[StrategyType],
    limit: Option<usize>,
    seed: u64,
    show_progress: bool,
) -> Result<Vec<BenchmarkResult>> {
    let answers = &dictionary[..limit.unwrap_or(dictionary.len()).min(dictionary.len())];

    strategies
        .iter()
        .map(|&strategy| {
            let progress = if show_progress {
                progress_bar(answers.len(), strategy.name())
            } else {
                ProgressBar::hidden()
            };

            let result = run_benchmark(dictionary, answers, strategy, seed, &progress);
            progress.finish_and_clear();
            result
        })
        .collect()
}

fn progress_bar(len: usize, label: &'static str) -> ProgressBar {
    let style = ProgressStyle::with_template(
        "{spinner:.green} {msg:>10} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)",
    )
    .map_or_else(|_| ProgressStyle::default_bar(), |style| style.progress_chars("█▓▒░"));

    let pb = ProgressBar::new(len as u64);
    pb.set_style(style);
    pb.set_message(label);
    pb
}
