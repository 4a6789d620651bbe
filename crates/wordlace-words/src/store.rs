use std::{
    collections::{HashMap, hash_map::Entry},
    fmt::{self, Display},
    str::FromStr,
};

use uuid::Uuid;

use crate::{ClueMap, WordClue};

/// Identifier for a stored clue set, a version 4 UUID.
///
/// # Examples
///
/// ```
/// use wordlace_words::CrosswordId;
///
/// let id = CrosswordId::random();
/// let text = id.to_string();
/// assert_eq!(text.len(), 36);
/// assert_eq!(text.parse::<CrosswordId>(), Ok(id));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CrosswordId(Uuid);

impl CrosswordId {
    /// Draws a fresh random identifier.
    #[must_use]
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates an identifier from random bytes, setting the version 4 and
    /// variant bits.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(uuid::Builder::from_random_bytes(bytes).into_uuid())
    }

    /// Returns the raw bytes.
    #[must_use]
    pub const fn to_bytes(self) -> [u8; 16] {
        *self.0.as_bytes()
    }

    /// Returns the underlying UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Display for CrosswordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0.hyphenated(), f)
    }
}

impl FromStr for CrosswordId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s.trim()).map(Self)
    }
}

/// Errors returned by [`ClueStore`] lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum StoreError {
    /// No clue set is stored under the identifier.
    #[display("crossword {_0} not found")]
    NotFound(#[error(not(source))] CrosswordId),
}

/// In-memory clue sets keyed by [`CrosswordId`].
///
/// Each call to [`insert`](Self::insert) stores the clues supplied for one
/// crossword so they can be attached once the grid is generated. Nothing is
/// persisted beyond the lifetime of the store.
#[derive(Debug, Default)]
pub struct ClueStore {
    entries: HashMap<CrosswordId, ClueMap>,
}

impl ClueStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores the clues in `word_clues` under a fresh identifier.
    pub fn insert(&mut self, word_clues: &[WordClue]) -> CrosswordId {
        let clues = ClueMap::from_word_clues(word_clues);
        loop {
            let id = CrosswordId::random();
            if let Entry::Vacant(entry) = self.entries.entry(id) {
                log::debug!("stored {} clues as {id}", clues.len());
                entry.insert(clues);
                return id;
            }
        }
    }

    /// Returns the clues stored under `id`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if nothing is stored under `id`.
    pub fn clues(&self, id: CrosswordId) -> Result<&ClueMap, StoreError> {
        self.entries.get(&id).ok_or(StoreError::NotFound(id))
    }

    /// Removes and returns the clues stored under `id`.
    pub fn remove(&mut self, id: CrosswordId) -> Option<ClueMap> {
        self.entries.remove(&id)
    }

    /// Returns the number of stored clue sets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
