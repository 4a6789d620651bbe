//! Placement legality rules.
//!
//! [`check_placement`] is the single authority on whether a word may be
//! written at a given start cell and orientation. It is a pure function of the
//! grid snapshot and the candidate word set. The rules run in a fixed order
//! and the first failure is reported:
//!
//! 1. **Bounds**: the whole word must lie on the grid.
//! 2. **Conflict**: an occupied cell on the path must already hold the same
//!    letter.
//! 3. **Crossing**: writing a letter into an empty cell must not create a
//!    perpendicular run of two or more letters that is not a candidate word.
//! 4. **Merge**: the cells just before the first letter and just after the
//!    last letter must be empty, or the word would run into a neighbour.

use wordlace_core::{Letter, LetterGrid, Orientation, Position, Word, WordSet};

use crate::sampler::start_limits;

/// The reason a placement was refused.
#[derive(
    Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::IsVariant,
)]
pub enum PlacementRejection {
    /// Part of the word would fall outside the grid.
    #[display("word does not fit on the grid")]
    OutOfBounds,
    /// An occupied cell on the path holds a different letter.
    #[display("cell {pos} holds {existing}, word needs {needed}")]
    Conflict {
        /// The conflicting cell.
        pos: Position,
        /// The letter already on the grid.
        existing: Letter,
        /// The letter the word would write.
        needed: Letter,
    },
    /// A new letter would complete a perpendicular run that is not a known word.
    #[display("crossing at {pos} would spell {run}")]
    InvalidCrossing {
        /// The newly occupied cell.
        pos: Position,
        /// The run of letters that would appear across the path.
        run: String,
    },
    /// A letter sits directly before or after the word along its axis.
    #[display("word would merge with the letter at {pos}")]
    Merge {
        /// The occupied neighbouring cell.
        pos: Position,
    },
}

/// Checks whether `word` may be written from (`row`, `col`) along
/// `orientation`.
///
/// The start coordinates are signed so that callers can probe positions left
/// of or above the grid; those are simply out of bounds. On success the
/// validated start cell is returned.
///
/// # Errors
///
/// Returns the first [`PlacementRejection`] that applies.
///
/// # Examples
///
/// ```
/// use wordlace_core::{LetterGrid, Orientation, Position, Word, WordSet};
/// use wordlace_generator::legality::{PlacementRejection, check_placement};
///
/// let known = WordSet::from_raw(["two", "code"]);
/// let grid: LetterGrid = "
///     .....
///     .....
///     ..TWO
///     .....
///     .....
/// "
/// .parse()
/// .unwrap();
/// let code = Word::normalize("code").unwrap();
///
/// // Shares the O of TWO.
/// assert_eq!(
///     check_placement(&grid, &known, &code, 1, 4, Orientation::Vertical),
///     Ok(Position::new(1, 4)),
/// );
/// assert_eq!(
///     check_placement(&grid, &known, &code, -1, 0, Orientation::Vertical),
///     Err(PlacementRejection::OutOfBounds),
/// );
/// ```
pub fn check_placement(
    grid: &LetterGrid,
    known: &WordSet,
    word: &Word,
    row: isize,
    col: isize,
    orientation: Orientation,
) -> Result<Position, PlacementRejection> {
    let (Ok(row), Ok(col)) = (usize::try_from(row), usize::try_from(col)) else {
        return Err(PlacementRejection::OutOfBounds);
    };
    let start = Position::new(row, col);
    check_start(grid, known, word, start, orientation)?;
    Ok(start)
}

/// Checks whether `word` may be written from `start` along `orientation`.
///
/// Same rules as [`check_placement`], for callers that already hold an
/// unsigned start cell.
///
/// # Errors
///
/// Returns the first [`PlacementRejection`] that applies.
pub fn check_start(
    grid: &LetterGrid,
    known: &WordSet,
    word: &Word,
    start: Position,
    orientation: Orientation,
) -> Result<(), PlacementRejection> {
    if !fits_on_grid(grid.size(), word.len(), start, orientation) {
        return Err(PlacementRejection::OutOfBounds);
    }

    for (pos, needed) in word.cells(start, orientation) {
        if let Some(existing) = grid.get(pos)
            && existing != needed
        {
            return Err(PlacementRejection::Conflict {
                pos,
                existing,
                needed,
            });
        }
    }

    let across = orientation.perpendicular();
    for (pos, letter) in word.cells(start, orientation) {
        if grid.get(pos).is_some() {
            continue;
        }
        let run = crossing_run(grid, pos, letter, across);
        if run.len() > 1 && !known.contains(&run) {
            return Err(PlacementRejection::InvalidCrossing {
                pos,
                run: run.into_iter().map(char::from).collect(),
            });
        }
    }

    if let Some(pos) = start.retreat(orientation)
        && grid.get(pos).is_some()
    {
        return Err(PlacementRejection::Merge { pos });
    }
    let after = start.advance(orientation, word.len());
    if grid.letter_at(after).is_some() {
        return Err(PlacementRejection::Merge { pos: after });
    }

    Ok(())
}

/// Returns `true` if [`check_placement`] accepts the placement.
#[must_use]
pub fn can_place(
    grid: &LetterGrid,
    known: &WordSet,
    word: &Word,
    row: isize,
    col: isize,
    orientation: Orientation,
) -> bool {
    check_placement(grid, known, word, row, col, orientation).is_ok()
}

/// Returns `true` if at least one cell on the path already holds the letter
/// the word would write there.
///
/// Only meaningful for a start cell that [`check_placement`] accepted.
#[must_use]
pub fn crosses_existing(
    grid: &LetterGrid,
    word: &Word,
    start: Position,
    orientation: Orientation,
) -> bool {
    word.cells(start, orientation)
        .any(|(pos, letter)| grid.get(pos) == Some(letter))
}

fn fits_on_grid(
    grid_size: usize,
    word_len: usize,
    start: Position,
    orientation: Orientation,
) -> bool {
    start_limits(grid_size, word_len, orientation)
        .is_some_and(|(max_row, max_col)| start.row() <= max_row && start.col() <= max_col)
}

/// Reads the run of letters along `axis` through `pos`, with `letter`
/// standing in for the (currently empty) cell at `pos`.
fn crossing_run(
    grid: &LetterGrid,
    pos: Position,
    letter: Letter,
    axis: Orientation,
) -> Vec<Letter> {
    let mut first = pos;
    while let Some(prev) = first.retreat(axis) {
        if grid.get(prev).is_none() {
            break;
        }
        first = prev;
    }

    let mut run = vec![];
    let mut cursor = first;
    loop {
        let cell = if cursor == pos {
            Some(letter)
        } else {
            grid.letter_at(cursor)
        };
        let Some(cell) = cell else {
            break;
        };
        run.push(cell);
        cursor = cursor.advance(axis, 1);
    }
    run
}
