//! Candidate filtering
//!
//! Narrows a candidate pool down to the words consistent with a constraint model.

use crate::core::{ConstraintModel, Word};

/// Filter `pool` to the words allowed by `model`
///
/// Order is preserved and the inputs are left untouched.
///
/// # Examples
/// ```
/// use wordle_frequency::core::{ConstraintModel, Feedback, Word};
/// use wordle_frequency::solver::filter_candidates;
///
/// let words: Vec<Word> = ["earls", "tears", "stare"]
///     .iter()
///     .map(|w| Word::new(*w).unwrap())
///     .collect();
/// let pool: Vec<&Word> = words.iter().collect();
///
/// let mut model = ConstraintModel::new();
/// model.update(&words[0], &Feedback::evaluate(&words[0], &words[2]));
///
/// let remaining = filter_candidates(&model, &pool);
/// assert_eq!(remaining.len(), 1);
/// assert_eq!(remaining[0].text(), "stare");
/// ```
#[must_use]
pub fn filter_candidates<'a>(model: &ConstraintModel, pool: &[&'a Word]) -> Vec<&'a Word> {
    pool.iter()
        .copied()
        .filter(|word| model.allows(word))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Feedback;

    const WORDS: &[&str] = &[
        "earls", "reals", "tears", "rates", "stare", "aster", "tares", "raise", "arise", "arose",
        "crane", "slate", "irate", "crate", "grate", "pudgy", "mound", "light", "eerie", "three",
    ];

    fn dictionary() -> Vec<Word> {
        WORDS.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    fn model_for(guesses: &[&Word], answer: &Word) -> ConstraintModel {
        let mut model = ConstraintModel::new();
        for guess in guesses {
            model.update(guess, &Feedback::evaluate(guess, answer));
        }
        model
    }

    #[test]
    fn empty_model_keeps_pool() {
        let words = dictionary();
        let pool: Vec<&Word> = words.iter().collect();
        let filtered = filter_candidates(&ConstraintModel::new(), &pool);
        assert_eq!(filtered, pool);
    }

    #[test]
    fn preserves_order() {
        let words = dictionary();
        let pool: Vec<&Word> = words.iter().collect();
        let answer = Word::new("grate").unwrap();
        let model = model_for(&[&words[10]], &answer); // crane

        let filtered = filter_candidates(&model, &pool);
        let positions: Vec<usize> = filtered
            .iter()
            .map(|w| pool.iter().position(|p| p == w).unwrap())
            .collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
        assert!(filtered.iter().any(|w| w.text() == "grate"));
    }

    #[test]
    fn filtering_is_idempotent() {
        let words = dictionary();
        let pool: Vec<&Word> = words.iter().collect();
        let answer = Word::new("irate").unwrap();
        let model = model_for(&[&words[0]], &answer);

        let once = filter_candidates(&model, &pool);
        let twice = filter_candidates(&model, &once);
        assert_eq!(once, twice);
    }

    #[test]
    fn more_feedback_never_grows_the_pool() {
        let words = dictionary();
        let pool: Vec<&Word> = words.iter().collect();

        for answer in &words {
            let mut model = ConstraintModel::new();
            let mut previous = filter_candidates(&model, &pool).len();

            for guess in &words[..6] {
                model.update(guess, &Feedback::evaluate(guess, answer));
                let size = filter_candidates(&model, &pool).len();
                assert!(size <= previous, "pool grew after {guess} for {answer}");
                previous = size;
            }
        }
    }

    #[test]
    fn contradictory_feedback_empties_pool() {
        let words = dictionary();
        let pool: Vec<&Word> = words.iter().collect();

        let mut model = ConstraintModel::new();
        let guess = Word::new("zzzzz").unwrap();
        model.update(&guess, &Feedback::SOLVED);

        assert!(filter_candidates(&model, &pool).is_empty());
    }
}
