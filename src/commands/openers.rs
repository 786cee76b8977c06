//! Opener analysis command
//!
//! Recomputes the opening-word table by scoring the whole dictionary with
//! its own letter frequencies.

use crate::core::Word;
use crate::solver::{FrequencyTable, rank};

/// Top-scoring opening words for a dictionary
pub struct OpenerAnalysis {
    /// Best words with their scores, best first
    pub openers: Vec<(String, f64)>,
    /// Most common letters with their frequencies, most common first
    pub letters: Vec<(char, f64)>,
    pub total_words: usize,
}

/// Score every dictionary word and keep the best `count`
#[must_use]
pub fn analyze_openers(dictionary: &[Word], count: usize) -> OpenerAnalysis {
    let pool: Vec<&Word> = dictionary.iter().collect();
    let table = FrequencyTable::from_pool(&pool);

    let openers = rank(&pool, &table)
        .into_iter()
        .take(count)
        .map(|(word, score)| (word.text().to_string(), score))
        .collect();

    let mut letters: Vec<(char, f64)> = table
        .iter()
        .filter(|&(_, freq)| freq > 0.0)
        .map(|(letter, freq)| (letter as char, freq))
        .collect();
    letters.sort_by(|(_, a), (_, b)| b.total_cmp(a));

    OpenerAnalysis {
        openers,
        letters,
        total_words: dictionary.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    #[test]
    fn best_openers_come_first() {
        let dictionary = words_from_slice(&[
            "pudgy", "earls", "reals", "stare", "llama", "crane", "mound",
        ]);
        let analysis = analyze_openers(&dictionary, 3);

        assert_eq!(analysis.total_words, 7);
        assert_eq!(analysis.openers.len(), 3);
        // Anagrams tie and keep dictionary order
        assert_eq!(analysis.openers[0].0, "earls");
        assert_eq!(analysis.openers[1].0, "reals");
        assert!(analysis.openers.windows(2).all(|pair| pair[0].1 >= pair[1].1));
    }

    #[test]
    fn letters_sorted_by_frequency() {
        let dictionary = words_from_slice(&["earls", "stare", "llama"]);
        let analysis = analyze_openers(&dictionary, 10);

        assert_eq!(analysis.letters[0].0, 'a');
        assert!(analysis.letters.iter().all(|&(_, freq)| freq > 0.0));
        let total: f64 = analysis.letters.iter().map(|(_, freq)| freq).sum();
        assert!((total - 1.0).abs() < 1e-9);
        assert_eq!(analysis.openers.len(), 3);
    }

    #[test]
    fn empty_dictionary_has_no_openers() {
        let analysis = analyze_openers(&[], 10);
        assert!(analysis.openers.is_empty());
        assert!(analysis.letters.is_empty());
    }
}
