//! Main Wordle solver interface

use super::filter::filter_candidates;
use super::frequency::{FrequencyTable, ScoreError, pick_best};
use super::source::FeedbackSource;
use super::strategy::{Strategy, choose_opener};
use crate::core::{ConstraintModel, Feedback, Word};
use anyhow::Result;
use rand::Rng;

/// Where a solve currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveState {
    /// Nothing guessed yet
    Start,
    /// At least one guess made, not solved
    Guessing,
    /// Feedback was all hits
    Solved,
    /// No candidate left to guess
    Exhausted,
    /// The feedback source gave up
    Abandoned,
}

impl SolveState {
    /// True for states the solver never leaves
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Solved | Self::Exhausted | Self::Abandoned)
    }
}

/// One guess and its feedback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    pub guess: Word,
    pub feedback: Feedback,
    /// Size of the candidate pool the guess was made from
    pub candidates: usize,
}

/// Final state of a solve plus every round played
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveOutcome {
    pub state: SolveState,
    pub rounds: Vec<Round>,
}

impl SolveOutcome {
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.state == SolveState::Solved
    }

    /// Number of guesses made, including the solving one
    #[must_use]
    pub fn guess_count(&self) -> usize {
        self.rounds.len()
    }
}

/// Main Wordle solver
///
/// Owns the state of a single solve: the constraint model, the running
/// candidate pool, and the random source used for openers and tie-breaks.
pub struct Solver<'a, S: Strategy, R: Rng> {
    strategy: S,
    dictionary: &'a [Word],
    pool: Vec<&'a Word>,
    /// Pool the current guess was scored from, when it differs from `pool`
    probe: Option<Vec<&'a Word>>,
    model: ConstraintModel,
    history: Vec<Round>,
    state: SolveState,
    rng: R,
}

impl<'a, S: Strategy, R: Rng> Solver<'a, S, R> {
    /// Create a new solver over `dictionary`
    ///
    /// # Parameters
    /// - `strategy`: The guess selection strategy to use
    /// - `dictionary`: Every word the answer can be
    /// - `rng`: Random source for openers and tie-breaks
    pub fn new(strategy: S, dictionary: &'a [Word], rng: R) -> Self {
        Self {
            strategy,
            dictionary,
            pool: dictionary.iter().collect(),
            probe: None,
            model: ConstraintModel::new(),
            history: Vec::new(),
            state: SolveState::Start,
            rng,
        }
    }

    #[must_use]
    pub const fn state(&self) -> SolveState {
        self.state
    }

    #[must_use]
    pub fn history(&self) -> &[Round] {
        &self.history
    }

    #[must_use]
    pub const fn model(&self) -> &ConstraintModel {
        &self.model
    }

    /// The running candidate pool
    ///
    /// Filtering happens lazily when the next guess is formed, so the pool
    /// may still contain words ruled out by the latest feedback.
    #[must_use]
    pub fn candidates(&self) -> &[&'a Word] {
        &self.pool
    }

    /// Words the latest guess was scored from
    ///
    /// The candidate pool, except on a probe round where the strategy
    /// supplied its own pool.
    #[must_use]
    pub fn scored_pool(&self) -> &[&'a Word] {
        self.probe.as_deref().unwrap_or(&self.pool)
    }

    /// Start over with an empty model and the full dictionary
    pub fn reset(&mut self) {
        self.pool = self.dictionary.iter().collect();
        self.probe = None;
        self.model = ConstraintModel::new();
        self.history.clear();
        self.state = SolveState::Start;
    }

    /// Choose the next guess
    ///
    /// Returns `None` once the solve is over. Running out of candidates moves
    /// the solver to [`SolveState::Exhausted`].
    pub fn next_guess(&mut self) -> Option<&'a Word> {
        if self.state.is_terminal() {
            return None;
        }

        match self.select_guess() {
            Ok(guess) => Some(guess),
            Err(ScoreError::EmptyPool) => {
                log::warn!(
                    "no matching word found after {} guesses",
                    self.history.len()
                );
                self.state = SolveState::Exhausted;
                None
            }
        }
    }

    fn select_guess(&mut self) -> Result<&'a Word, ScoreError> {
        self.probe = None;
        if self.history.is_empty() {
            return choose_opener(&self.pool, &mut self.rng);
        }

        self.probe = self.strategy.probe_pool(&self.history, &self.pool);
        if let Some(probe) = &self.probe {
            log::debug!("probing with {} fresh-letter words", probe.len());
            return pick_best(probe, &FrequencyTable::from_pool(probe), &mut self.rng);
        }

        self.pool = filter_candidates(&self.model, &self.pool);
        log::debug!("{} candidates remain", self.pool.len());

        let table = FrequencyTable::from_pool(&self.pool);
        pick_best(&self.pool, &table, &mut self.rng)
    }

    /// Record the feedback received for `guess`
    ///
    /// Returns the state after the update.
    pub fn apply_feedback(&mut self, guess: &Word, feedback: Feedback) -> SolveState {
        log::debug!("{guess} {feedback}");

        self.model.update(guess, &feedback);
        self.history.push(Round {
            guess: guess.clone(),
            feedback,
            candidates: self.scored_pool().len(),
        });

        self.state = if feedback.is_solved() {
            SolveState::Solved
        } else {
            SolveState::Guessing
        };
        self.state
    }

    /// Mark the solve as given up
    pub fn abandon(&mut self) {
        self.state = SolveState::Abandoned;
    }

    /// Play until solved, exhausted, or abandoned
    ///
    /// `on_round` is called after every round with the round just played.
    ///
    /// # Errors
    /// Returns any error raised by the feedback source.
    pub fn run<F, O>(&mut self, source: &mut F, mut on_round: O) -> Result<SolveOutcome>
    where
        F: FeedbackSource + ?Sized,
        O: FnMut(&Round),
    {
        while let Some(guess) = self.next_guess() {
            let Some(feedback) = source.feedback(guess, self.scored_pool())? else {
                self.abandon();
                break;
            };

            self.apply_feedback(guess, feedback);
            if let Some(round) = self.history.last() {
                on_round(round);
            }
        }

        Ok(SolveOutcome {
            state: self.state,
            rounds: self.history.clone(),
        })
    }

    /// Play to the end without observing rounds
    ///
    /// # Errors
    /// Returns any error raised by the feedback source.
    pub fn solve<F: FeedbackSource + ?Sized>(&mut self, source: &mut F) -> Result<SolveOutcome> {
        self.run(source, |_| {})
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::source::KnownAnswer;
    use crate::solver::strategy::{StandardStrategy, StrategyType, TwoGuessStrategy};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const WORDS: &[&str] = &[
        "earls", "reals", "tears", "rates", "stare", "aster", "tares", "raise", "arise", "arose",
        "crane", "slate", "irate", "crate", "grate", "pudgy", "mound", "light", "eerie", "three",
        "speed", "abide", "robot", "floor", "llama", "hello", "level", "whack", "fjord", "nymph",
    ];

    fn dictionary(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    fn solve(dictionary: &[Word], strategy: StrategyType, answer: &Word, seed: u64) -> SolveOutcome {
        let mut solver = Solver::new(strategy, dictionary, StdRng::seed_from_u64(seed));
        solver.solve(&mut KnownAnswer::new(answer)).unwrap()
    }

    #[test]
    fn three_word_example_solves_stare() {
        let words = dictionary(&["earls", "tears", "stare"]);
        let answer = Word::new("stare").unwrap();

        for seed in 0..10 {
            let outcome = solve(&words, StrategyType::default(), &answer, seed);
            assert!(outcome.is_solved());
            assert!(outcome.guess_count() <= 3);
            assert_eq!(outcome.rounds.last().unwrap().guess, answer);
        }
    }

    #[test]
    fn earls_opener_leaves_only_stare() {
        let words = dictionary(&["earls", "tears", "stare"]);
        let mut solver = Solver::new(StandardStrategy, &words, StdRng::seed_from_u64(0));

        let earls = &words[0];
        let feedback = Feedback::evaluate(earls, &words[2]);
        assert_eq!(feedback.to_string(), "OOO_O");

        assert_eq!(solver.apply_feedback(earls, feedback), SolveState::Guessing);
        assert_eq!(solver.next_guess().map(Word::text), Some("stare"));
        assert_eq!(solver.candidates().len(), 1);
    }

    #[test]
    fn every_answer_terminates_for_both_strategies() {
        let words = dictionary(WORDS);
        let strategies = [
            StrategyType::Standard(StandardStrategy),
            StrategyType::TwoGuess(TwoGuessStrategy::default()),
        ];

        for strategy in strategies {
            for (i, answer) in words.iter().enumerate() {
                let outcome = solve(&words, strategy, answer, i as u64);
                assert!(outcome.is_solved(), "{} failed on {answer}", strategy.name());
                assert!(outcome.guess_count() <= 10);
            }
        }
    }

    #[test]
    fn answer_missing_from_dictionary_exhausts() {
        let words = dictionary(&["earls", "tears", "stare"]);
        let answer = Word::new("pudgy").unwrap();

        let outcome = solve(&words, StrategyType::default(), &answer, 3);
        assert_eq!(outcome.state, SolveState::Exhausted);
        assert!(!outcome.is_solved());
        assert!(outcome.guess_count() >= 1);
    }

    #[test]
    fn empty_dictionary_exhausts_immediately() {
        let words: Vec<Word> = Vec::new();
        let answer = Word::new("stare").unwrap();

        let outcome = solve(&words, StrategyType::default(), &answer, 0);
        assert_eq!(outcome.state, SolveState::Exhausted);
        assert_eq!(outcome.guess_count(), 0);
    }

    #[test]
    fn state_machine_transitions() {
        let words = dictionary(&["earls", "tears", "stare"]);
        let mut solver = Solver::new(StandardStrategy, &words, StdRng::seed_from_u64(5));
        assert_eq!(solver.state(), SolveState::Start);
        assert!(solver.model().is_empty());

        let guess = solver.next_guess().unwrap();
        assert_eq!(solver.apply_feedback(guess, Feedback::SOLVED), SolveState::Solved);
        assert!(solver.state().is_terminal());
        assert!(solver.next_guess().is_none());

        solver.reset();
        assert_eq!(solver.state(), SolveState::Start);
        assert!(solver.history().is_empty());
        assert_eq!(solver.candidates().len(), 3);
    }

    #[test]
    fn observer_sees_every_round() {
        let words = dictionary(WORDS);
        let answer = Word::new("fjord").unwrap();
        let mut solver = Solver::new(StandardStrategy, &words, StdRng::seed_from_u64(9));

        let mut lines = Vec::new();
        let outcome = solver
            .run(&mut KnownAnswer::new(&answer), |round| {
                lines.push(format!("{} {}", round.guess, round.feedback));
            })
            .unwrap();

        assert_eq!(lines.len(), outcome.guess_count());
        assert_eq!(lines.last().unwrap(), "fjord XXXXX");
    }

    #[test]
    fn probe_round_records_the_pool_it_scored() {
        // earls is the only opener present; pudgy and mound avoid its letters
        let words = dictionary(&["earls", "pudgy", "mound", "fjord", "crane"]);
        let answer = Word::new("pudgy").unwrap();
        let strategy = StrategyType::TwoGuess(TwoGuessStrategy::default());
        let mut solver = Solver::new(strategy, &words, StdRng::seed_from_u64(1));

        let opener = solver.next_guess().unwrap();
        assert_eq!(opener.text(), "earls");
        assert_eq!(solver.scored_pool().len(), 5);
        solver.apply_feedback(opener, Feedback::evaluate(opener, &answer));

        let second = solver.next_guess().unwrap();
        assert!(matches!(second.text(), "pudgy" | "mound"));
        assert_eq!(solver.scored_pool().len(), 2);
        solver.apply_feedback(second, Feedback::evaluate(second, &answer));

        assert_eq!(solver.history()[0].candidates, 5);
        assert_eq!(solver.history()[1].candidates, 2);
    }

    #[test]
    fn same_seed_same_game() {
        let words = dictionary(WORDS);
        let answer = Word::new("level").unwrap();

        let first = solve(&words, StrategyType::default(), &answer, 11);
        let second = solve(&words, StrategyType::default(), &answer, 11);
        assert_eq!(first, second);
    }

    #[test]
    fn candidate_counts_never_grow() {
        let words = dictionary(WORDS);
        for answer in &words {
            let outcome = solve(&words, StrategyType::default(), answer, 2);
            assert!(
                outcome
                    .rounds
                    .windows(2)
                    .all(|pair| pair[1].candidates <= pair[0].candidates)
            );
        }
    }
}
