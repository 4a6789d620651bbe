//! Normalized candidate words.
//!
//! Raw input strings are filtered through [`Word::normalize`] before they ever
//! reach the placement engine: surrounding whitespace is trimmed, ASCII letters
//! are folded to uppercase, and anything containing a non-letter or shorter
//! than [`MIN_WORD_LEN`] is discarded. Malformed entries are never an error;
//! they are simply not placeable.

use std::{
    borrow::Borrow,
    collections::HashSet,
    fmt::{self, Display},
};

use crate::{Letter, Orientation, Position};

/// Minimum number of letters a candidate word must have.
pub const MIN_WORD_LEN: usize = 3;

/// A normalized crossword word: uppercase ASCII letters, at least
/// [`MIN_WORD_LEN`] long.
///
/// `Word` borrows as `[Letter]`, so a [`WordSet`] can be queried with a run of
/// letters read straight off a grid.
///
/// # Examples
///
/// ```
/// use wordlace_core::Word;
///
/// let word = Word::normalize("  Python ").unwrap();
/// assert_eq!(word.to_string(), "PYTHON");
/// assert_eq!(word.len(), 6);
///
/// assert!(Word::normalize("ab").is_none());
/// assert!(Word::normalize("ice cream").is_none());
/// assert!(Word::normalize("r2d2").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Word {
    letters: Vec<Letter>,
}

impl Word {
    /// Normalizes a raw string into a word.
    ///
    /// Returns `None` if the trimmed string contains anything other than ASCII
    /// letters or is shorter than [`MIN_WORD_LEN`].
    #[must_use]
    pub fn normalize(raw: &str) -> Option<Self> {
        let letters = raw
            .trim()
            .chars()
            .map(Letter::from_char)
            .collect::<Option<Vec<_>>>()?;
        (letters.len() >= MIN_WORD_LEN).then_some(Self { letters })
    }

    /// Returns the letters of this word in reading order.
    #[must_use]
    pub fn letters(&self) -> &[Letter] {
        &self.letters
    }

    /// Returns the number of letters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Returns `true` if the word has no letters.
    ///
    /// Always `false` for a normalized word; provided for API symmetry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Returns each cell this word covers when written from `start` along
    /// `orientation`, paired with the letter written there.
    ///
    /// The iterator does not check grid bounds.
    pub fn cells(
        &self,
        start: Position,
        orientation: Orientation,
    ) -> impl ExactSizeIterator<Item = (Position, Letter)> + '_ {
        self.letters
            .iter()
            .enumerate()
            .map(move |(i, &letter)| (start.advance(orientation, i), letter))
    }
}

impl Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in &self.letters {
            Display::fmt(letter, f)?;
        }
        Ok(())
    }
}

impl Borrow<[Letter]> for Word {
    fn borrow(&self) -> &[Letter] {
        &self.letters
    }
}

/// Normalizes a raw string to its canonical text form.
///
/// This is [`Word::normalize`] rendered back to a `String`; applying it to its
/// own output yields the same result.
///
/// # Examples
///
/// ```
/// use wordlace_core::normalize;
///
/// assert_eq!(normalize("grid").as_deref(), Some("GRID"));
/// assert_eq!(normalize("123"), None);
///
/// let once = normalize(" Cross ");
/// let twice = once.as_deref().and_then(normalize);
/// assert_eq!(once, twice);
/// ```
#[must_use]
pub fn normalize(raw: &str) -> Option<String> {
    Word::normalize(raw).map(|word| word.to_string())
}

/// The deduplicated candidate words for one engine run.
///
/// Keeps the first occurrence of each word in input order, and answers
/// membership queries for the perpendicular-run check.
///
/// # Examples
///
/// ```
/// use wordlace_core::{Word, WordSet};
///
/// let words = WordSet::from_raw(["code", "CODE", "it", "test", "t3st"]);
/// assert_eq!(words.len(), 2);
///
/// let texts: Vec<_> = words.iter().map(ToString::to_string).collect();
/// assert_eq!(texts, ["CODE", "TEST"]);
///
/// let code = Word::normalize("Code").unwrap();
/// assert!(words.contains(code.letters()));
/// ```
#[derive(Debug, Clone, Default)]
pub struct WordSet {
    ordered: Vec<Word>,
    members: HashSet<Word>,
}

impl WordSet {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalizes and deduplicates raw strings, discarding malformed entries.
    #[must_use]
    pub fn from_raw<I>(raw: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        raw.into_iter()
            .filter_map(|raw| Word::normalize(raw.as_ref()))
            .collect()
    }

    /// Adds a word, returning `false` if it was already present.
    pub fn insert(&mut self, word: Word) -> bool {
        if self.members.contains(&word) {
            return false;
        }
        self.members.insert(word.clone());
        self.ordered.push(word);
        true
    }

    /// Returns `true` if the letters spell a word in this set.
    #[must_use]
    pub fn contains(&self, letters: &[Letter]) -> bool {
        self.members.contains(letters)
    }

    /// Returns the number of distinct words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    /// Returns `true` if the set holds no words.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }

    /// Iterates over the words in first-occurrence order.
    pub fn iter(&self) -> std::slice::Iter<'_, Word> {
        self.ordered.iter()
    }
}

impl FromIterator<Word> for WordSet {
    fn from_iter<T: IntoIterator<Item = Word>>(iter: T) -> Self {
        let mut set = Self::new();
        for word in iter {
            set.insert(word);
        }
        set
    }
}

impl<'a> IntoIterator for &'a WordSet {
    type Item = &'a Word;
    type IntoIter = std::slice::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
