//! Formatting utilities for terminal output

use crate::core::{Feedback, FeedbackSymbol};
use crate::solver::Round;

/// Format a round as `<guess> <feedback>`, e.g. `earls OOO_O`
#[must_use]
pub fn format_round(round: &Round) -> String {
    format!("{} {}", round.guess, round.feedback)
}

/// Format feedback as an emoji string
#[must_use]
pub fn feedback_to_emoji(feedback: Feedback) -> String {
    feedback
        .symbols()
        .iter()
        .map(|symbol| match symbol {
            FeedbackSymbol::Hit => '🟩',
            FeedbackSymbol::Present => '🟨',
            FeedbackSymbol::Miss => '⬜',
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    let filled = if max > 0.0 {
        // Cast is safe: value is clamped to [0, width]
        (((value / max) * width as f64) as usize).min(width)
    } else {
        0
    };

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
