//! Records of placed words.

use crate::{Letter, Orientation, Position, Word};

/// An immutable record of one word placed on a grid.
///
/// Holds the word, its anchor (first letter) cell, its orientation, and the
/// 1-based display number assigned in placement order. The clue is empty when
/// the engine produces the record; callers attach one with
/// [`with_clue`](Self::with_clue), which builds a new record rather than
/// mutating this one.
///
/// # Examples
///
/// ```
/// use wordlace_core::{Orientation, Placement, Position, Word};
///
/// let word = Word::normalize("grid").unwrap();
/// let placement = Placement::new(word, Position::new(3, 1), Orientation::Vertical, 2);
///
/// assert_eq!(placement.end(), Position::new(6, 1));
/// assert_eq!(placement.number(), 2);
/// assert_eq!(placement.clue(), None);
///
/// let placement = placement.with_clue("Pattern of squares");
/// assert_eq!(placement.clue(), Some("Pattern of squares"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    word: Word,
    start: Position,
    orientation: Orientation,
    number: usize,
    clue: Option<String>,
}

impl Placement {
    /// Creates a placement record without a clue.
    #[must_use]
    pub fn new(word: Word, start: Position, orientation: Orientation, number: usize) -> Self {
        Self {
            word,
            start,
            orientation,
            number,
            clue: None,
        }
    }

    /// Returns a copy of this record carrying `clue`.
    #[must_use]
    pub fn with_clue(self, clue: impl Into<String>) -> Self {
        Self {
            clue: Some(clue.into()),
            ..self
        }
    }

    /// Returns the placed word.
    #[must_use]
    pub fn word(&self) -> &Word {
        &self.word
    }

    /// Returns the cell holding the first letter.
    #[must_use]
    pub fn start(&self) -> Position {
        self.start
    }

    /// Returns the cell holding the last letter.
    #[must_use]
    pub fn end(&self) -> Position {
        self.start
            .advance(self.orientation, self.word.len().saturating_sub(1))
    }

    /// Returns the writing direction.
    #[must_use]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Returns the 1-based display number.
    #[must_use]
    pub fn number(&self) -> usize {
        self.number
    }

    /// Returns the attached clue, if any.
    #[must_use]
    pub fn clue(&self) -> Option<&str> {
        self.clue.as_deref()
    }

    /// Iterates over the covered cells and the letter in each.
    pub fn cells(&self) -> impl ExactSizeIterator<Item = (Position, Letter)> + '_ {
        self.word.cells(self.start, self.orientation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cells_follow_orientation() {
        let word = Word::normalize("PYTHON").unwrap();
        let placement = Placement::new(word, Position::new(7, 4), Orientation::Horizontal, 1);

        let positions: Vec<_> = placement.cells().map(|(pos, _)| pos).collect();
        assert_eq!(positions.len(), 6);
        assert_eq!(positions[0], Position::new(7, 4));
        assert_eq!(positions[5], Position::new(7, 9));
        assert_eq!(placement.end(), Position::new(7, 9));
    }

    #[test]
    fn test_with_clue_preserves_placement() {
        let word = Word::normalize("code").unwrap();
        let bare = Placement::new(word, Position::new(6, 9), Orientation::Vertical, 2);
        let clued = bare.clone().with_clue("Programming instructions");

        assert_eq!(clued.word(), bare.word());
        assert_eq!(clued.start(), bare.start());
        assert_eq!(clued.orientation(), bare.orientation());
        assert_eq!(clued.number(), bare.number());
        assert_eq!(clued.clue(), Some("Programming instructions"));
        assert_eq!(bare.clue(), None);
    }
}
