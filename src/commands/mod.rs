//! Command implementations

pub mod benchmark;
pub mod openers;
pub mod play;
pub mod solve;

pub use benchmark::{BenchmarkResult, run_benchmark, run_benchmarks};
pub use openers::{OpenerAnalysis, analyze_openers};
pub use play::{Console, run_play};
pub use solve::{SolveConfig, SolveResult, solve_word};
