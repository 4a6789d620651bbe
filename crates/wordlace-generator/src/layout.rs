use wordlace_core::{Crossword, LetterGrid, Orientation, Placement, Position, Word, WordSet};

use crate::legality::{self, PlacementRejection};

/// A crossword under construction: an owned grid plus the placements written
/// into it so far.
///
/// Changes go through a two-step protocol. [`check`](Self::check) asks whether
/// a placement is legal without touching anything; [`commit`](Self::commit)
/// re-runs the same check and only then writes the letters and records the
/// placement. A rejected commit leaves the layout unchanged.
///
/// # Examples
///
/// ```
/// use wordlace_core::{Orientation, Position, Word, WordSet};
/// use wordlace_generator::Layout;
///
/// let known = WordSet::from_raw(["python", "code"]);
/// let python = Word::normalize("python").unwrap();
/// let code = Word::normalize("code").unwrap();
///
/// let mut layout = Layout::new(15, &known);
/// layout.commit(&python, Position::new(7, 5), Orientation::Horizontal)?;
///
/// let start = Position::new(6, 9);
/// layout.check(&code, start, Orientation::Vertical)?;
/// assert!(layout.crosses_existing(&code, start, Orientation::Vertical));
///
/// let placement = layout.commit(&code, start, Orientation::Vertical)?;
/// assert_eq!(placement.number(), 2);
/// # Ok::<(), wordlace_generator::legality::PlacementRejection>(())
/// ```
#[derive(Debug, Clone)]
pub struct Layout<'a> {
    known: &'a WordSet,
    grid: LetterGrid,
    placements: Vec<Placement>,
}

impl<'a> Layout<'a> {
    /// Creates an empty `grid_size × grid_size` layout.
    ///
    /// `known` is consulted whenever a placement creates a perpendicular run.
    #[must_use]
    pub fn new(grid_size: usize, known: &'a WordSet) -> Self {
        Self {
            known,
            grid: LetterGrid::new(grid_size),
            placements: vec![],
        }
    }

    /// Returns the current grid.
    #[must_use]
    pub fn grid(&self) -> &LetterGrid {
        &self.grid
    }

    /// Returns the placements committed so far.
    #[must_use]
    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    /// Checks whether `word` may be written from `start` along `orientation`.
    ///
    /// # Errors
    ///
    /// Returns the [`PlacementRejection`] describing the first rule violated.
    pub fn check(
        &self,
        word: &Word,
        start: Position,
        orientation: Orientation,
    ) -> Result<(), PlacementRejection> {
        legality::check_start(&self.grid, self.known, word, start, orientation)
    }

    /// Returns `true` if the placement would reuse at least one letter
    /// already on the grid.
    #[must_use]
    pub fn crosses_existing(&self, word: &Word, start: Position, orientation: Orientation) -> bool {
        legality::crosses_existing(&self.grid, word, start, orientation)
    }

    /// Writes `word` into the grid and records it with the next display
    /// number.
    ///
    /// # Errors
    ///
    /// Returns the [`PlacementRejection`] if the placement is not legal on the
    /// current grid; nothing is written in that case.
    pub fn commit(
        &mut self,
        word: &Word,
        start: Position,
        orientation: Orientation,
    ) -> Result<&Placement, PlacementRejection> {
        self.check(word, start, orientation)?;

        for (pos, letter) in word.cells(start, orientation) {
            self.grid.set(pos, letter);
        }
        let number = self.placements.len() + 1;
        self.placements
            .push(Placement::new(word.clone(), start, orientation, number));
        Ok(&self.placements[number - 1])
    }

    /// Finishes construction and packages the result.
    #[must_use]
    pub fn into_crossword(self) -> Crossword {
        Crossword::new(self.grid, self.placements)
    }
}
