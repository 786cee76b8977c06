//! Word list loading utilities
//!
//! Reads newline-delimited dictionaries into validated, de-duplicated words.

use crate::core::Word;
use rustc_hash::FxHashSet;
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file
///
/// See [`words_from_lines`] for how lines are handled.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_frequency::wordlists::loader::load_from_file;
///
/// let words = load_from_file("sgb-words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path.as_ref())?;
    let words = words_from_lines(&content);

    log::info!(
        "loaded {} words from {}",
        words.len(),
        path.as_ref().display()
    );
    Ok(words)
}

/// Parse one word per line
///
/// Lines are trimmed; blank lines are ignored, invalid words are skipped
/// with a warning, and repeats keep only their first occurrence.
#[must_use]
pub fn words_from_lines(content: &str) -> Vec<Word> {
    let mut seen = FxHashSet::default();

    content
        .lines()
        .enumerate()
        .filter_map(|(number, line)| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                return None;
            }
            match Word::new(trimmed) {
                Ok(word) => Some(word),
                Err(e) => {
                    log::warn!("skipping line {}: '{trimmed}': {e}", number + 1);
                    None
                }
            }
        })
        .filter(|word| {
            let fresh = seen.insert(word.text().to_string());
            if !fresh {
                log::warn!("skipping duplicate word '{word}'");
            }
            fresh
        })
        .collect()
}

/// Convert a string slice to a Word vector, skipping invalid entries
///
/// # Examples
/// ```
/// use wordle_frequency::wordlists::loader::words_from_slice;
/// use wordle_frequency::wordlists::OPENERS;
///
/// let words = words_from_slice(OPENERS);
/// assert_eq!(words.len(), OPENERS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}
