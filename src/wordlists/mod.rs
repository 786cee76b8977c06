//! Word lists for Wordle solving
//!
//! Dictionary loading plus the precomputed opening guesses.

pub mod loader;

/// Strong opening guesses
///
/// The ten top-scoring words when the whole SGB five-letter dictionary is
/// scored against its own letter frequencies (`openers` subcommand).
/// Baked in so solves never score the full dictionary at runtime.
pub const OPENERS: &[&str] = &[
    "earls", "reals", "tears", "rates", "stare", "aster", "tares", "raise", "arise", "arose",
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    #[test]
    fn openers_are_valid_words() {
        for &word in OPENERS {
            assert!(Word::new(word).is_ok(), "Opener '{word}' is not a valid word");
        }
    }

    #[test]
    fn openers_are_unique() {
        let unique: std::collections::HashSet<_> = OPENERS.iter().collect();
        assert_eq!(unique.len(), OPENERS.len());
    }
}
