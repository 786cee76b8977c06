//! Interactive mode
//!
//! Suggests guesses and reads feedback typed by whoever is playing the
//! real game.

use crate::core::{Feedback, Word};
use crate::solver::{
    FeedbackSource, FrequencyTable, SolveOutcome, SolveState, Solver, StrategyType, rank,
};
use anyhow::{Context, Result};
use colored::Colorize;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::{BufRead, Write};

/// How many runner-up words to list under each suggestion
const ALTERNATIVES: usize = 5;

/// Feedback typed at a prompt
///
/// Accepts five `X`/`O`/`_` symbols, `win` as shorthand for `XXXXX`, and
/// `quit` to give up. Anything else is rejected and asked for again.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Read one trimmed line, or `None` at end of input
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read feedback")?;

        Ok((read > 0).then(|| line.trim().to_string()))
    }

    /// Ask a yes/no question; end of input counts as no
    ///
    /// # Errors
    ///
    /// Returns an error if reading or writing the terminal fails.
    pub fn confirm(&mut self, question: &str) -> Result<bool> {
        write!(self.output, "{question} (yes/no): ")?;
        self.output.flush()?;

        Ok(self
            .read_line()?
            .is_some_and(|answer| matches!(answer.to_lowercase().as_str(), "y" | "yes")))
    }
}

impl<R: BufRead, W: Write> FeedbackSource for Console<R, W> {
    fn feedback(&mut self, guess: &Word, candidates: &[&Word]) -> Result<Option<Feedback>> {
        writeln!(
            self.output,
            "\n{} {}",
            "Guess:".bright_cyan().bold(),
            guess.text().bright_white().bold()
        )?;
        writeln!(
            self.output,
            "{}",
            format!("({} candidates)", candidates.len()).bright_black()
        )?;

        let alternatives = top_alternatives(guess, candidates);
        if !alternatives.is_empty() {
            writeln!(self.output, "Top alternatives:")?;
            for (word, score) in alternatives {
                writeln!(
                    self.output,
                    "  • {} {}",
                    word.text(),
                    format!("{score:.3}").bright_black()
                )?;
            }
        }

        loop {
            write!(self.output, "Feedback (X/O/_, 'win', 'quit'): ")?;
            self.output.flush()?;

            let Some(input) = self.read_line()? else {
                log::warn!("input closed before the word was solved");
                return Ok(None);
            };

            match input.to_lowercase().as_str() {
                "quit" | "q" | "exit" => return Ok(None),
                "win" | "correct" | "solved" => return Ok(Some(Feedback::SOLVED)),
                _ => {}
            }

            match Feedback::parse(&input) {
                Ok(feedback) => return Ok(Some(feedback)),
                Err(e) => writeln!(self.output, "{} {e}", "✗".red())?,
            }
        }
    }
}

/// Best-scoring candidates other than `guess`
fn top_alternatives<'a>(guess: &Word, candidates: &[&'a Word]) -> Vec<(&'a Word, f64)> {
    let table = FrequencyTable::from_pool(candidates);
    rank(candidates, &table)
        .into_iter()
        .filter(|(word, _)| *word != guess)
        .take(ALTERNATIVES)
        .collect()
}

/// Run interactive games until the player stops
///
/// # Errors
///
/// Returns an error if there's an I/O error talking to the terminal.
pub fn run_play<R: BufRead, W: Write>(
    dictionary: &[Word],
    strategy: StrategyType,
    seed: u64,
    console: &mut Console<R, W>,
) -> Result<Vec<SolveOutcome>> {
    writeln!(
        console.output,
        "{} {}",
        "Wordle Solver - Interactive Mode".bright_cyan().bold(),
        format!("(seed {seed})").bright_black()
    )?;
    writeln!(
        console.output,
        "After each guess enter X (right spot), O (wrong spot) or _ (absent) per letter."
    )?;

    let mut solver = Solver::new(strategy, dictionary, StdRng::seed_from_u64(seed));
    let mut outcomes = Vec::new();

    loop {
        let outcome = solver.solve(console)?;
        print_outcome(&mut console.output, &outcome)?;

        let abandoned = outcome.state == SolveState::Abandoned;
        outcomes.push(outcome);

        if abandoned || !console.confirm("Play again?")? {
            break;
        }
        solver.reset();
    }

    Ok(outcomes)
}

fn print_outcome<W: Write>(output: &mut W, outcome: &SolveOutcome) -> Result<()> {
    match outcome.state {
        SolveState::Solved => {
            let n = outcome.guess_count();
            writeln!(
                output,
                "\n{} Solved in {} {}",
                "✓".green().bold(),
                n.to_string().bright_cyan().bold(),
                if n == 1 { "guess" } else { "guesses" }
            )?;
        }
        SolveState::Exhausted => {
            writeln!(
                output,
                "\n{} No matching word found! Your feedback may be incorrect.",
                "✗".red().bold()
            )?;
        }
        SolveState::Abandoned | SolveState::Start | SolveState::Guessing => {
            writeln!(output, "\nGame abandoned.")?;
        }
    }
    Ok(())
}
