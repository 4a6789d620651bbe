//! Core data structures for crossword construction.
//!
//! This crate provides the value types shared by the placement engine, the
//! word/clue supplier, and the command-line front end. It contains no search
//! logic; it only describes grids, words, and the records produced when a word
//! is placed.
//!
//! # Overview
//!
//! 1. **Cell-level types**
//!    - [`letter`]: A single uppercase ASCII letter occupying a grid cell
//!    - [`position`]: Grid coordinates and the two placement [`Orientation`]s
//!
//! 2. **Words**
//!    - [`word`]: Normalized candidate words and the deduplicated [`WordSet`]
//!
//! 3. **Grids and results**
//!    - [`grid`]: The square [`LetterGrid`] of optional letters
//!    - [`placement`]: Immutable [`Placement`] records
//!    - [`crossword`]: The finished [`Crossword`] (grid plus placements)
//!
//! # Examples
//!
//! ```
//! use wordlace_core::{LetterGrid, Orientation, Position, Word};
//!
//! let mut grid = LetterGrid::new(15);
//! let word = Word::normalize("python").unwrap();
//!
//! let start = Position::new(7, 4);
//! for (pos, letter) in word.cells(start, Orientation::Horizontal) {
//!     grid.set(pos, letter);
//! }
//!
//! assert_eq!(grid.get(Position::new(7, 8)).map(|l| l.as_char()), Some('O'));
//! assert_eq!(grid.filled_count(), 6);
//! ```

pub mod crossword;
pub mod grid;
pub mod letter;
pub mod placement;
pub mod position;
pub mod word;

pub use self::{
    crossword::Crossword,
    grid::{GridParseError, LetterGrid},
    letter::Letter,
    placement::Placement,
    position::{Orientation, Position},
    word::{MIN_WORD_LEN, Word, WordSet, normalize},
};
