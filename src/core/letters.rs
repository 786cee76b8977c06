//! Compact letter sets
//!
//! A set of lowercase ASCII letters stored as a 26-bit mask. Used for the
//! per-position exclusions and the required-letter set of a constraint model,
//! and for the distinct letters of a word.

use std::fmt;

/// Number of letters in the alphabet
pub const ALPHABET_LEN: usize = 26;

/// A set of lowercase letters (`b'a'..=b'z'`)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LetterSet(u32);

impl LetterSet {
    /// The empty set
    pub const EMPTY: Self = Self(0);

    /// Create an empty set
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    #[inline]
    const fn bit(letter: u8) -> u32 {
        debug_assert!(letter.is_ascii_lowercase(), "letter must be a-z");
        1 << (letter - b'a')
    }

    /// Add a letter to the set
    #[inline]
    pub fn insert(&mut self, letter: u8) {
        self.0 |= Self::bit(letter);
    }

    /// Remove every letter from the set
    #[inline]
    pub fn clear(&mut self) {
        self.0 = 0;
    }

    #[inline]
    #[must_use]
    pub const fn contains(self, letter: u8) -> bool {
        self.0 & Self::bit(letter) != 0
    }

    /// True if every letter of `other` is also in `self`
    #[inline]
    #[must_use]
    pub const fn is_superset(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Iterate letters in alphabetical order
    pub fn iter(self) -> impl Iterator<Item = u8> {
        (0..ALPHABET_LEN as u8)
            .filter(move |offset| self.0 & (1 << offset) != 0)
            .map(|offset| b'a' + offset)
    }
}

impl FromIterator<u8> for LetterSet {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut set = Self::new();
        for letter in iter {
            set.insert(letter);
        }
        set
    }
}

impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in self.iter() {
            write!(f, "{}", letter as char)?;
        }
        Ok(())
    }
}
