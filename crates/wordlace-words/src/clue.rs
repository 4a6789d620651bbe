use std::collections::HashMap;

use wordlace_core::Word;

/// A candidate word paired with its clue, as supplied for a topic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordClue {
    /// The answer, uppercase.
    pub word: String,
    /// The clue text shown to the solver.
    pub clue: String,
}

impl WordClue {
    /// Creates a word/clue pair.
    #[must_use]
    pub fn new(word: impl Into<String>, clue: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            clue: clue.into(),
        }
    }
}

/// Clues keyed by normalized word.
///
/// Keys go through [`Word::normalize`], the same normalization the placement
/// engine applies, so a clue supplied for `"python"` is found for the placed
/// word `PYTHON`. Entries whose word does not normalize are skipped, and a
/// later clue for the same word replaces an earlier one.
///
/// # Examples
///
/// ```
/// use wordlace_core::Word;
/// use wordlace_words::{ClueMap, WordClue};
///
/// let clues = ClueMap::from_word_clues(&[
///     WordClue::new("Python", "Programming language"),
///     WordClue::new("PYTHON", "Large snake"),
///     WordClue::new("x", "Too short"),
/// ]);
///
/// assert_eq!(clues.len(), 1);
/// let python = Word::normalize("python").unwrap();
/// assert_eq!(clues.get(&python), Some("Large snake"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClueMap {
    clues: HashMap<Word, String>,
}

impl ClueMap {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a map from supplier output.
    #[must_use]
    pub fn from_word_clues(word_clues: &[WordClue]) -> Self {
        let mut map = Self::new();
        for WordClue { word, clue } in word_clues {
            map.insert(word, clue.clone());
        }
        map
    }

    /// Sets the clue for `word`, replacing any earlier one.
    ///
    /// Returns `false` if the word is malformed and nothing was stored.
    pub fn insert(&mut self, word: &str, clue: String) -> bool {
        let Some(word) = Word::normalize(word) else {
            log::debug!("ignoring clue for malformed word {word:?}");
            return false;
        };
        if let Some(previous) = self.clues.insert(word, clue) {
            log::trace!("replaced clue {previous:?}");
        }
        true
    }

    /// Returns the clue for `word`.
    #[must_use]
    pub fn get(&self, word: &Word) -> Option<&str> {
        self.clues.get(word).map(String::as_str)
    }

    /// Returns the number of clued words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.clues.len()
    }

    /// Returns `true` if no clues are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.clues.is_empty()
    }

    /// Iterates over the clued words and their clues in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&Word, &str)> + '_ {
        self.clues.iter().map(|(word, clue)| (word, clue.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_normalizes_and_keeps_last() {
        let mut clues = ClueMap::new();
        assert!(clues.insert(" grid ", "Network of lines".to_owned()));
        assert!(clues.insert("GRID", "Pattern of squares".to_owned()));
        assert!(!clues.insert("no", "Too short".to_owned()));
        assert!(!clues.insert("ice cream", "Not a single word".to_owned()));

        assert_eq!(clues.len(), 1);
        let grid = Word::normalize("Grid").unwrap();
        assert_eq!(clues.get(&grid), Some("Pattern of squares"));
        assert_eq!(clues.iter().count(), 1);
    }

    #[test]
    fn test_repeated_word_takes_last_clue() {
        let clues = ClueMap::from_word_clues(&[
            WordClue::new("PYTHON", "Programming language"),
            WordClue::new("PYTHON", "Large snake"),
        ]);
        let python = Word::normalize("PYTHON").unwrap();
        assert_eq!(clues.len(), 1);
        assert_eq!(clues.get(&python), Some("Large snake"));
    }

    #[test]
    fn test_empty_map() {
        let clues = ClueMap::from_word_clues(&[]);
        assert!(clues.is_empty());
        assert_eq!(clues.get(&Word::normalize("any").unwrap()), None);
    }
}
