//! Letter-frequency scoring
//!
//! Scores words by how common their letters are across a candidate pool.
//! Each word contributes each of its distinct letters once, so a word with
//! repeated letters is not rewarded for the repeats.

use crate::core::{ALPHABET_LEN, Word};
use rand::Rng;
use rand::seq::IndexedRandom;
use std::fmt;

/// Relative frequency of every letter across a pool
///
/// Frequencies are counts of words containing the letter divided by the
/// total number of (word, distinct letter) pairs in the pool, so they sum to
/// 1.0 for a non-empty pool and are all zero for an empty one.
#[derive(Debug, Clone, PartialEq)]
pub struct FrequencyTable([f64; ALPHABET_LEN]);

impl FrequencyTable {
    /// Build the table for `pool`
    ///
    /// # Examples
    /// ```
    /// use wordle_frequency::core::Word;
    /// use wordle_frequency::solver::FrequencyTable;
    ///
    /// let words = [Word::new("earls").unwrap(), Word::new("pudgy").unwrap()];
    /// let table = FrequencyTable::from_pool(&words.iter().collect::<Vec<_>>());
    ///
    /// assert!((table.get(b'e') - 0.1).abs() < 1e-12);
    /// assert_eq!(table.get(b'z'), 0.0);
    /// ```
    #[must_use]
    pub fn from_pool(pool: &[&Word]) -> Self {
        let mut counts = [0usize; ALPHABET_LEN];
        let mut total = 0usize;

        for word in pool {
            for letter in word.letters().iter() {
                counts[usize::from(letter - b'a')] += 1;
                total += 1;
            }
        }

        let mut table = [0.0; ALPHABET_LEN];
        if total > 0 {
            for (freq, &count) in table.iter_mut().zip(&counts) {
                *freq = count as f64 / total as f64;
            }
        }

        Self(table)
    }

    /// Relative frequency of `letter`
    #[inline]
    #[must_use]
    pub fn get(&self, letter: u8) -> f64 {
        self.0[usize::from(letter - b'a')]
    }

    /// Iterate `(letter, frequency)` in alphabetical order
    pub fn iter(&self) -> impl Iterator<Item = (u8, f64)> + '_ {
        self.0
            .iter()
            .enumerate()
            .map(|(offset, &freq)| (b'a' + offset as u8, freq))
    }

    /// Score a word: the sum of its distinct letters' frequencies
    ///
    /// Letters are summed in alphabetical order, so anagrams score
    /// bit-for-bit identically and tie exactly.
    #[must_use]
    pub fn score(&self, word: &Word) -> f64 {
        word.letters().iter().map(|letter| self.get(letter)).sum()
    }
}

/// How to resolve several words sharing the best score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tiebreak {
    /// Pick one of the best words uniformly at random
    Random,
    /// Return every best word
    All,
}

/// Error type for scoring
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScoreError {
    /// There was nothing to score; constraints are contradictory or the
    /// answer is missing from the dictionary.
    EmptyPool,
}

impl fmt::Display for ScoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyPool => write!(f, "No candidate words to score"),
        }
    }
}

impl std::error::Error for ScoreError {}

/// All words in `pool` attaining the maximum score, in pool order
///
/// # Errors
/// Returns `ScoreError::EmptyPool` if `pool` is empty.
pub fn best_words<'a>(pool: &[&'a Word], table: &FrequencyTable) -> Result<Vec<&'a Word>, ScoreError> {
    let scores: Vec<f64> = pool.iter().map(|word| table.score(word)).collect();
    let max = scores
        .iter()
        .copied()
        .max_by(f64::total_cmp)
        .ok_or(ScoreError::EmptyPool)?;

    #[allow(clippy::float_cmp)] // ties are exact by construction
    let best = pool
        .iter()
        .zip(&scores)
        .filter(|&(_, &score)| score == max)
        .map(|(&word, _)| word)
        .collect();

    Ok(best)
}

/// Pick the best word from `pool`
///
/// With `Tiebreak::Random` the result holds a single word chosen uniformly
/// among the top scorers using `rng`; with `Tiebreak::All` it holds every
/// top scorer.
///
/// # Errors
/// Returns `ScoreError::EmptyPool` if `pool` is empty.
pub fn best<'a, R: Rng + ?Sized>(
    pool: &[&'a Word],
    table: &FrequencyTable,
    tiebreak: Tiebreak,
    rng: &mut R,
) -> Result<Vec<&'a Word>, ScoreError> {
    let top = best_words(pool, table)?;
    match tiebreak {
        Tiebreak::All => Ok(top),
        Tiebreak::Random => Ok(top.choose(rng).copied().into_iter().collect()),
    }
}

/// Pick a single best word, breaking ties at random
///
/// # Errors
/// Returns `ScoreError::EmptyPool` if `pool` is empty.
pub fn pick_best<'a, R: Rng + ?Sized>(
    pool: &[&'a Word],
    table: &FrequencyTable,
    rng: &mut R,
) -> Result<&'a Word, ScoreError> {
    best_words(pool, table)?
        .choose(rng)
        .copied()
        .ok_or(ScoreError::EmptyPool)
}

/// Every word in `pool` with its score, best first
///
/// Equal scores keep pool order.
#[must_use]
pub fn rank<'a>(pool: &[&'a Word], table: &FrequencyTable) -> Vec<(&'a Word, f64)> {
    let mut ranked: Vec<(&Word, f64)> = pool.iter().map(|&word| (word, table.score(word))).collect();
    ranked.sort_by(|(_, a), (_, b)| b.total_cmp(a));
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    #[test]
    fn frequencies_sum_to_one() {
        let dictionary = words(&["earls", "speed", "pudgy", "llama", "three"]);
        let pool: Vec<&Word> = dictionary.iter().collect();
        let table = FrequencyTable::from_pool(&pool);

        let sum: f64 = table.iter().map(|(_, freq)| freq).sum();
        assert!((sum - 1.0).abs() < 1e-9);
        assert!(table.iter().all(|(_, freq)| (0.0..=1.0).contains(&freq)));
    }

    #[test]
    fn empty_pool_has_zero_frequencies() {
        let table = FrequencyTable::from_pool(&[]);
        assert_eq!(table.iter().count(), 26);
        assert!(table.iter().all(|(_, freq)| freq == 0.0));
    }

    #[test]
    fn repeated_letters_count_once_per_word() {
        // llama: {l, a, m}, 3 distinct letters
        let dictionary = words(&["llama"]);
        let table = FrequencyTable::from_pool(&dictionary.iter().collect::<Vec<_>>());

        assert!((table.get(b'l') - 1.0 / 3.0).abs() < 1e-12);
        assert!((table.get(b'a') - 1.0 / 3.0).abs() < 1e-12);
        assert!((table.score(&dictionary[0]) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn score_ignores_duplicates() {
        let dictionary = words(&["abcde", "aaaaa"]);
        let table = FrequencyTable::from_pool(&dictionary.iter().collect::<Vec<_>>());

        // a appears in both words: 2 / 6; others 1 / 6
        assert!((table.score(&dictionary[1]) - 2.0 / 6.0).abs() < 1e-12);
        assert!((table.score(&dictionary[0]) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn best_words_returns_all_ties() {
        // Anagrams tie exactly
        let dictionary = words(&["earls", "reals", "pudgy", "rates"]);
        let pool: Vec<&Word> = dictionary.iter().collect();
        let table = FrequencyTable::from_pool(&pool);

        let top = best_words(&pool, &table).unwrap();
        let texts: Vec<&str> = top.iter().map(|w| w.text()).collect();
        assert_eq!(texts, vec!["earls", "reals"]);

        let all = best(&pool, &table, Tiebreak::All, &mut StdRng::seed_from_u64(0)).unwrap();
        assert_eq!(all, top);
    }

    #[test]
    fn random_tiebreak_picks_one_of_the_best() {
        let dictionary = words(&["earls", "reals", "pudgy", "rates"]);
        let pool: Vec<&Word> = dictionary.iter().collect();
        let table = FrequencyTable::from_pool(&pool);
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..20 {
            let one = best(&pool, &table, Tiebreak::Random, &mut rng).unwrap();
            assert_eq!(one.len(), 1);
            assert!(one[0].text() == "earls" || one[0].text() == "reals");

            let picked = pick_best(&pool, &table, &mut rng).unwrap();
            assert!(picked.text() == "earls" || picked.text() == "reals");
        }
    }

    #[test]
    fn seeded_tiebreak_is_reproducible() {
        let dictionary = words(&["earls", "reals", "lears", "laser", "rales"]);
        let pool: Vec<&Word> = dictionary.iter().collect();
        let table = FrequencyTable::from_pool(&pool);

        let run = |seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            (0..10)
                .map(|_| pick_best(&pool, &table, &mut rng).unwrap().text().to_string())
                .collect::<Vec<_>>()
        };

        assert_eq!(run(42), run(42));
    }

    #[test]
    fn empty_pool_is_an_error() {
        let table = FrequencyTable::from_pool(&[]);
        let mut rng = StdRng::seed_from_u64(0);

        assert_eq!(best_words(&[], &table), Err(ScoreError::EmptyPool));
        assert_eq!(pick_best(&[], &table, &mut rng), Err(ScoreError::EmptyPool));
        assert_eq!(
            best(&[], &table, Tiebreak::All, &mut rng),
            Err(ScoreError::EmptyPool)
        );
    }

    #[test]
    fn rank_orders_by_score() {
        let dictionary = words(&["pudgy", "earls", "stare", "llama"]);
        let pool: Vec<&Word> = dictionary.iter().collect();
        let table = FrequencyTable::from_pool(&pool);

        let ranked = rank(&pool, &table);
        assert_eq!(ranked.len(), 4);
        assert!(ranked.windows(2).all(|pair| pair[0].1 >= pair[1].1));
        assert_eq!(ranked[0].0.text(), "earls");
    }
}
