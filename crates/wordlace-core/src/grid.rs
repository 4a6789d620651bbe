//! The square letter grid.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use crate::{Letter, Orientation, Position};

/// A fixed-size `N × N` grid whose cells are either empty or hold a
/// [`Letter`].
///
/// The grid performs no legality checking of its own. [`set`](Self::set)
/// overwrites unconditionally; callers are expected to have validated the
/// placement first. Indexing outside the grid is a programming error and
/// panics.
///
/// # Text format
///
/// [`Display`] writes one row per line with `.` for an empty cell, and
/// [`FromStr`] reads the same format back. Blank lines and surrounding
/// whitespace are ignored when parsing, so grids can be written inline in
/// tests.
///
/// # Examples
///
/// ```
/// use wordlace_core::{LetterGrid, Position};
///
/// let grid: LetterGrid = "
///     ...
///     CAT
///     ...
/// "
/// .parse()
/// .unwrap();
///
/// assert_eq!(grid.size(), 3);
/// assert_eq!(grid.get(Position::new(1, 1)).map(|l| l.as_char()), Some('A'));
/// assert_eq!(grid.get(Position::new(0, 0)), None);
/// assert_eq!(grid.to_string(), "...\nCAT\n...");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterGrid {
    size: usize,
    cells: Vec<Option<Letter>>,
}

impl LetterGrid {
    /// Creates an empty grid with `size` rows and `size` columns.
    ///
    /// # Panics
    ///
    /// Panics if `size * size` overflows `usize`.
    #[must_use]
    pub fn new(size: usize) -> Self {
        let Some(len) = size.checked_mul(size) else {
            panic!("grid size {size} is too large");
        };
        Self {
            size,
            cells: vec![None; len],
        }
    }

    /// Returns the number of rows (equal to the number of columns).
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if `pos` lies on this grid.
    #[must_use]
    pub fn contains(&self, pos: Position) -> bool {
        pos.row() < self.size && pos.col() < self.size
    }

    /// Returns the letter at `pos`, or `None` if the cell is empty.
    ///
    /// # Panics
    ///
    /// Panics if `pos` lies outside the grid.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<Letter> {
        self.cells[self.index(pos)]
    }

    /// Returns the letter at `pos`, or `None` if the cell is empty or off-grid.
    #[must_use]
    pub fn letter_at(&self, pos: Position) -> Option<Letter> {
        if self.contains(pos) {
            self.get(pos)
        } else {
            None
        }
    }

    /// Writes `letter` at `pos`, replacing whatever was there.
    ///
    /// # Panics
    ///
    /// Panics if `pos` lies outside the grid.
    pub fn set(&mut self, pos: Position, letter: Letter) {
        let index = self.index(pos);
        self.cells[index] = Some(letter);
    }

    /// Returns `true` if no cell is occupied.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }

    /// Returns the number of occupied cells.
    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Iterates over the rows from top to bottom.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[Option<Letter>]> + '_ {
        // chunk size must be non-zero; an empty grid yields no rows regardless
        self.cells.chunks_exact(self.size.max(1))
    }

    /// Returns every maximal run of two or more occupied cells along
    /// `orientation`, as its start cell and letters.
    ///
    /// On a well-formed crossword each run is an entry the solver fills in.
    #[must_use]
    pub fn runs(&self, orientation: Orientation) -> Vec<(Position, Vec<Letter>)> {
        let mut runs = vec![];
        for line in 0..self.size {
            let line_start = match orientation {
                Orientation::Horizontal => Position::new(line, 0),
                Orientation::Vertical => Position::new(0, line),
            };
            let mut current: Option<(Position, Vec<Letter>)> = None;
            for i in 0..=self.size {
                let pos = line_start.advance(orientation, i);
                if let Some(letter) = self.letter_at(pos) {
                    current.get_or_insert_with(|| (pos, vec![])).1.push(letter);
                } else if let Some(run) = current.take().filter(|(_, letters)| letters.len() > 1) {
                    runs.push(run);
                }
            }
        }
        runs
    }

    fn index(&self, pos: Position) -> usize {
        assert!(
            self.contains(pos),
            "position {pos} is outside a {size}x{size} grid",
            size = self.size
        );
        pos.row() * self.size + pos.col()
    }
}

impl Display for LetterGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            for cell in row {
                match cell {
                    Some(letter) => Display::fmt(letter, f)?,
                    None => f.write_str(".")?,
                }
            }
        }
        Ok(())
    }
}

/// Errors returned when parsing a [`LetterGrid`] from text.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GridParseError {
    /// A row does not have as many cells as there are rows.
    #[display("row {row} has {len} cells, expected {expected}")]
    NotSquare {
        /// Zero-based row index.
        row: usize,
        /// Number of cells found in the row.
        len: usize,
        /// Number of cells required for a square grid.
        expected: usize,
    },
    /// A cell holds something other than a letter or `.`.
    #[display("invalid cell {ch:?} at row {row}, column {col}")]
    InvalidCell {
        /// Zero-based row index.
        row: usize,
        /// Zero-based column index.
        col: usize,
        /// The offending character.
        ch: char,
    },
}

impl FromStr for LetterGrid {
    type Err = GridParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lines: Vec<&str> = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        let size = lines.len();
        let mut grid = Self::new(size);

        for (row, line) in lines.into_iter().enumerate() {
            let len = line.chars().count();
            if len != size {
                return Err(GridParseError::NotSquare {
                    row,
                    len,
                    expected: size,
                });
            }
            for (col, ch) in line.chars().enumerate() {
                if ch == '.' {
                    continue;
                }
                let letter =
                    Letter::from_char(ch).ok_or(GridParseError::InvalidCell { row, col, ch })?;
                grid.set(Position::new(row, col), letter);
            }
        }

        Ok(grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letter(ch: char) -> Letter {
        Letter::from_char(ch).unwrap()
    }

    #[test]
    fn test_new_grid_is_empty() {
        let grid = LetterGrid::new(15);
        assert_eq!(grid.size(), 15);
        assert!(grid.is_empty());
        assert_eq!(grid.filled_count(), 0);
        assert_eq!(grid.rows().len(), 15);
        assert!(grid.rows().all(|row| row.len() == 15 && row.iter().all(Option::is_none)));
    }

    #[test]
    #[should_panic(expected = "is too large")]
    fn test_new_rejects_overflowing_size() {
        let _ = LetterGrid::new(usize::MAX / 2);
    }

    #[test]
    fn test_set_and_get() {
        let mut grid = LetterGrid::new(5);
        let pos = Position::new(2, 4);
        grid.set(pos, letter('x'));
        assert_eq!(grid.get(pos), Some(letter('X')));
        assert_eq!(grid.get(Position::new(4, 2)), None);
        assert!(!grid.is_empty());

        // Overwrite is unconditional.
        grid.set(pos, letter('Y'));
        assert_eq!(grid.get(pos), Some(letter('Y')));
        assert_eq!(grid.filled_count(), 1);
    }

    #[test]
    fn test_letter_at_tolerates_off_grid() {
        let grid: LetterGrid = "AB\nC.".parse().unwrap();
        assert_eq!(grid.letter_at(Position::new(1, 0)), Some(letter('C')));
        assert_eq!(grid.letter_at(Position::new(1, 1)), None);
        assert_eq!(grid.letter_at(Position::new(2, 0)), None);
        assert_eq!(grid.letter_at(Position::new(0, 9)), None);
    }

    #[test]
    #[should_panic(expected = "outside a 3x3 grid")]
    fn test_get_out_of_bounds_panics() {
        let grid = LetterGrid::new(3);
        let _ = grid.get(Position::new(0, 3));
    }

    #[test]
    fn test_display_parse_round_trip() {
        let text = "....\n.AB.\n..C.\n....";
        let grid: LetterGrid = text.parse().unwrap();
        assert_eq!(grid.filled_count(), 3);
        assert_eq!(grid.to_string(), text);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "AB\nC".parse::<LetterGrid>(),
            Err(GridParseError::NotSquare {
                row: 1,
                len: 1,
                expected: 2
            })
        );
        assert_eq!(
            "A.\n.7".parse::<LetterGrid>(),
            Err(GridParseError::InvalidCell {
                row: 1,
                col: 1,
                ch: '7'
            })
        );
    }

    #[test]
    fn test_runs_skip_single_letters() {
        let grid: LetterGrid = "
            CAT..
            O....
            D..X.
            E.AB.
            .....
        "
        .parse()
        .unwrap();

        let across: Vec<_> = grid
            .runs(Orientation::Horizontal)
            .into_iter()
            .map(|(pos, letters)| (pos, letters.into_iter().map(char::from).collect::<String>()))
            .collect();
        assert_eq!(
            across,
            [
                (Position::new(0, 0), "CAT".to_owned()),
                (Position::new(3, 2), "AB".to_owned()),
            ]
        );

        let down: Vec<_> = grid
            .runs(Orientation::Vertical)
            .into_iter()
            .map(|(pos, letters)| (pos, letters.into_iter().map(char::from).collect::<String>()))
            .collect();
        assert_eq!(
            down,
            [
                (Position::new(0, 0), "CODE".to_owned()),
                (Position::new(2, 3), "XB".to_owned()),
            ]
        );
    }

    #[test]
    fn test_zero_sized_grid() {
        let grid = LetterGrid::new(0);
        assert!(grid.is_empty());
        assert_eq!(grid.rows().len(), 0);
        assert!(!grid.contains(Position::new(0, 0)));
        assert_eq!(grid.to_string(), "");
    }
}
