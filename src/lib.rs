//! Wordle Solver
//!
//! A Wordle solver that accumulates feedback into positional constraints and
//! picks each guess by letter frequency across the remaining candidates.
//!
//! # Quick Start
//!
//! ```rust
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use wordle_frequency::core::Word;
//! use wordle_frequency::solver::{KnownAnswer, Solver, StrategyType};
//! use wordle_frequency::wordlists::loader::words_from_slice;
//!
//! let dictionary = words_from_slice(&["earls", "tears", "stare"]);
//! let answer = Word::new("stare").unwrap();
//!
//! let mut solver = Solver::new(StrategyType::default(), &dictionary, StdRng::seed_from_u64(0));
//! let outcome = solver.solve(&mut KnownAnswer::new(&answer)).unwrap();
//!
//! assert!(outcome.is_solved());
//! println!("Solved in {} guesses", outcome.guess_count());
//! ```

// Core domain types
pub mod core;

// Solving algorithms
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
