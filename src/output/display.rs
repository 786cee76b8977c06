//! Display functions for command results

use super::formatters::{create_progress_bar, feedback_to_emoji, format_round};
use crate::commands::{BenchmarkResult, OpenerAnalysis, SolveResult};
use crate::solver::{Round, SolveState};
use colored::Colorize;

/// Print one round as `<guess> <feedback>`
pub fn print_round(round: &Round) {
    println!("{}", format_round(round));
}

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {} ({} strategy, seed {})",
        result.target.text().to_uppercase().bright_yellow().bold(),
        result.strategy.name(),
        result.seed
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, round) in result.outcome.rounds.iter().enumerate() {
        print!(
            "Turn {}: {} {}",
            i + 1,
            round.guess.text().to_uppercase(),
            feedback_to_emoji(round.feedback)
        );
        if verbose {
            print!("  {}", format!("{} candidates", round.candidates).bright_black());
        }
        println!();
    }

    println!();
    let guesses = result.outcome.guess_count();
    match result.outcome.state {
        SolveState::Solved => println!(
            "{}",
            format!("✅ Solved in {guesses} guesses!").green().bold()
        ),
        _ => println!(
            "{}",
            format!("❌ No matching word found after {guesses} guesses")
                .red()
                .bold()
        ),
    }
}

/// Print benchmark results, one block per strategy
pub fn print_benchmark_results(results: &[BenchmarkResult]) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    for result in results {
        println!(
            "\n📊 {}",
            format!("Strategy: {}", result.strategy.name())
                .bright_cyan()
                .bold()
        );
        println!("   Words tested:     {}", result.total_words());
        println!(
            "   Average guesses:  {}",
            format!("{:.3}", result.average_guesses)
                .bright_yellow()
                .bold()
        );
        println!(
            "   Best case:        {}",
            format!("{}", result.min_guesses).green()
        );
        println!(
            "   Worst case:       {}",
            format!("{}", result.max_guesses).yellow()
        );
        if result.exhausted > 0 {
            println!(
                "   Unsolved:         {}",
                format!("{}", result.exhausted).red()
            );
        }
        println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
        println!("   Words/second:     {:.1}", result.words_per_second);

        println!("\n📈 {}", "Distribution:".bright_cyan().bold());
        let total = result.total_words() as f64;
        for (&guess_count, &count) in &result.distribution {
            let pct = count as f64 / total * 100.0;
            let bar = create_progress_bar(pct, 100.0, 40);
            println!("   {guess_count:>2}: {} {count:5} ({pct:5.1}%)", bar.green());
        }
    }
}

/// Print the top-scoring openers and letter frequencies
pub fn print_openers(analysis: &OpenerAnalysis) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} ({} words)",
        "OPENING WORDS".bright_cyan().bold(),
        analysis.total_words
    );
    println!("{}", "═".repeat(60).cyan());

    for (rank, (word, score)) in analysis.openers.iter().enumerate() {
        println!(
            "   {:>2}. {}  {}",
            rank + 1,
            word.bright_yellow().bold(),
            format!("{score:.4}").bright_black()
        );
    }

    println!("\n🔤 {}", "Letter frequencies:".bright_cyan().bold());
    let max = analysis.letters.first().map_or(0.0, |&(_, freq)| freq);
    for &(letter, freq) in &analysis.letters {
        println!(
            "   {letter}: {} {:.4}",
            create_progress_bar(freq, max, 30).green(),
            freq
        );
    }
}
