//! The finished crossword.

use crate::{LetterGrid, Placement};

/// The output of one generation run: the grid and its placement records.
///
/// The grid is square, so [`width`](Self::width) and [`height`](Self::height)
/// are always equal. Placements are in placement order, which is also display
/// number order.
///
/// # Examples
///
/// ```
/// use wordlace_core::{Crossword, LetterGrid};
///
/// let crossword = Crossword::new(LetterGrid::new(15), vec![]);
/// assert_eq!((crossword.width(), crossword.height()), (15, 15));
/// assert!(crossword.placements().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Crossword {
    grid: LetterGrid,
    placements: Vec<Placement>,
}

impl Crossword {
    /// Packages a grid and its placements.
    #[must_use]
    pub fn new(grid: LetterGrid, placements: Vec<Placement>) -> Self {
        Self { grid, placements }
    }

    /// Returns the letter grid.
    #[must_use]
    pub fn grid(&self) -> &LetterGrid {
        &self.grid
    }

    /// Returns the placements in display number order.
    #[must_use]
    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn width(&self) -> usize {
        self.grid.size()
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn height(&self) -> usize {
        self.grid.size()
    }

    /// Returns a crossword whose placements are rebuilt by `f`.
    ///
    /// Intended for attaching clues after generation; `f` sees each record in
    /// order and returns its replacement. The grid is carried over unchanged.
    #[must_use]
    pub fn map_placements<F>(self, f: F) -> Self
    where
        F: FnMut(Placement) -> Placement,
    {
        Self {
            grid: self.grid,
            placements: self.placements.into_iter().map(f).collect(),
        }
    }

    /// Splits the crossword into its grid and placements.
    #[must_use]
    pub fn into_parts(self) -> (LetterGrid, Vec<Placement>) {
        (self.grid, self.placements)
    }
}
