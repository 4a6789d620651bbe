//! Grid coordinates and placement orientations.

use std::fmt::{self, Display};

/// A cell coordinate on a crossword grid.
///
/// Rows grow downward and columns grow rightward, both starting at zero.
/// A `Position` carries no grid size; whether it lies on a particular grid is
/// answered by [`LetterGrid::contains`](crate::LetterGrid::contains).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    row: usize,
    col: usize,
}

impl Position {
    /// Creates a new position.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns the row index.
    #[must_use]
    pub const fn row(self) -> usize {
        self.row
    }

    /// Returns the column index.
    #[must_use]
    pub const fn col(self) -> usize {
        self.col
    }

    /// Returns the position `distance` cells further along `orientation`.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordlace_core::{Orientation, Position};
    ///
    /// let pos = Position::new(2, 3);
    /// assert_eq!(pos.advance(Orientation::Horizontal, 4), Position::new(2, 7));
    /// assert_eq!(pos.advance(Orientation::Vertical, 4), Position::new(6, 3));
    /// ```
    #[must_use]
    pub const fn advance(self, orientation: Orientation, distance: usize) -> Self {
        match orientation {
            Orientation::Horizontal => Self::new(self.row, self.col + distance),
            Orientation::Vertical => Self::new(self.row + distance, self.col),
        }
    }

    /// Returns the position one cell back along `orientation`, if any.
    ///
    /// Returns `None` when stepping back would leave the top or left edge.
    #[must_use]
    pub const fn retreat(self, orientation: Orientation) -> Option<Self> {
        match orientation {
            Orientation::Horizontal if self.col > 0 => Some(Self::new(self.row, self.col - 1)),
            Orientation::Vertical if self.row > 0 => Some(Self::new(self.row - 1, self.col)),
            _ => None,
        }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// The axis along which a word is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::IsVariant)]
pub enum Orientation {
    /// Letters advance along the column index; the row is fixed.
    Horizontal,
    /// Letters advance along the row index; the column is fixed.
    Vertical,
}

impl Orientation {
    /// Both orientations, horizontal first.
    ///
    /// This is the order in which the placement search tries them.
    pub const ALL: [Self; 2] = [Self::Horizontal, Self::Vertical];

    /// Returns the crossing axis.
    #[must_use]
    pub const fn perpendicular(self) -> Self {
        match self {
            Self::Horizontal => Self::Vertical,
            Self::Vertical => Self::Horizontal,
        }
    }

    /// Returns the lowercase tag used in serialized output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Horizontal => "horizontal",
            Self::Vertical => "vertical",
        }
    }

    /// Returns the conventional clue-list heading for this orientation.
    #[must_use]
    pub const fn heading(self) -> &'static str {
        match self {
            Self::Horizontal => "Across",
            Self::Vertical => "Down",
        }
    }
}

impl Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
