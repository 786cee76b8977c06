//! Wordle feedback evaluation and representation
//!
//! Feedback is one symbol per guess position:
//! - `X` = Hit (right letter, right position)
//! - `O` = Present (letter in word, wrong position)
//! - `_` = Miss (letter not in word, beyond what hits/presents account for)

use super::Word;
use super::word::WORD_LEN;
use std::fmt;

/// Feedback for a single guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeedbackSymbol {
    Hit,
    Present,
    Miss,
}

impl FeedbackSymbol {
    /// The character used for this symbol in feedback strings
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::Hit => 'X',
            Self::Present => 'O',
            Self::Miss => '_',
        }
    }

    /// Parse a feedback character (`X`, `O` or `_`, case-insensitive)
    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            'X' | 'x' => Some(Self::Hit),
            'O' | 'o' => Some(Self::Present),
            '_' => Some(Self::Miss),
            _ => None,
        }
    }
}

/// Feedback for a whole guess, in guess order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([FeedbackSymbol; WORD_LEN]);

/// Error type for unparseable feedback strings
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedbackError {
    InvalidLength(usize),
    InvalidSymbol(char),
}

impl fmt::Display for FeedbackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Feedback must be exactly {WORD_LEN} symbols, got {len}")
            }
            Self::InvalidSymbol(ch) => {
                write!(f, "Invalid feedback symbol '{ch}' (use X, O or _)")
            }
        }
    }
}

impl std::error::Error for FeedbackError {}

impl Feedback {
    /// All hits (solved)
    pub const SOLVED: Self = Self([FeedbackSymbol::Hit; WORD_LEN]);

    #[inline]
    #[must_use]
    pub const fn new(symbols: [FeedbackSymbol; WORD_LEN]) -> Self {
        Self(symbols)
    }

    #[inline]
    #[must_use]
    pub const fn symbols(&self) -> &[FeedbackSymbol; WORD_LEN] {
        &self.0
    }

    /// Check if every position is a hit
    #[inline]
    #[must_use]
    pub fn is_solved(&self) -> bool {
        *self == Self::SOLVED
    }

    /// Evaluate `guess` against a known `answer`
    ///
    /// Duplicate letters are resolved the way the game does it: hits claim
    /// their letters from the answer first, then presents are handed out left
    /// to right from whatever remains. A letter therefore never receives more
    /// hit + present marks than it has occurrences in the answer.
    ///
    /// # Examples
    /// ```
    /// use wordle_frequency::core::{Feedback, Word};
    ///
    /// let guess = Word::new("earls").unwrap();
    /// let answer = Word::new("stare").unwrap();
    ///
    /// assert_eq!(Feedback::evaluate(&guess, &answer).to_string(), "OOO_O");
    /// ```
    #[must_use]
    pub fn evaluate(guess: &Word, answer: &Word) -> Self {
        let mut result = [FeedbackSymbol::Miss; WORD_LEN];
        let mut available = answer.letter_counts();

        // First pass: hits
        for (i, (&g, &a)) in guess.chars().iter().zip(answer.chars()).enumerate() {
            if g == a {
                result[i] = FeedbackSymbol::Hit;
                available[usize::from(g - b'a')] -= 1;
            }
        }

        // Second pass: presents from the remaining pool
        for (i, &g) in guess.chars().iter().enumerate() {
            if result[i] == FeedbackSymbol::Hit {
                continue;
            }
            let remaining = &mut available[usize::from(g - b'a')];
            if *remaining > 0 {
                result[i] = FeedbackSymbol::Present;
                *remaining -= 1;
            }
        }

        Self(result)
    }

    /// Count the number of hits
    #[must_use]
    pub fn count_hits(&self) -> usize {
        self.0.iter().filter(|&&s| s == FeedbackSymbol::Hit).count()
    }

    /// Parse a feedback string like `"XO__O"`
    ///
    /// Surrounding whitespace is ignored.
    ///
    /// # Errors
    /// Returns `FeedbackError` if the string is not exactly five valid symbols.
    pub fn parse(s: &str) -> Result<Self, FeedbackError> {
        let chars: Vec<char> = s.trim().chars().collect();

        if chars.len() != WORD_LEN {
            return Err(FeedbackError::InvalidLength(chars.len()));
        }

        let mut symbols = [FeedbackSymbol::Miss; WORD_LEN];
        for (slot, ch) in symbols.iter_mut().zip(chars) {
            *slot = FeedbackSymbol::from_char(ch).ok_or(FeedbackError::InvalidSymbol(ch))?;
        }

        Ok(Self(symbols))
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in &self.0 {
            write!(f, "{}", symbol.as_char())?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Feedback {
    type Err = FeedbackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
