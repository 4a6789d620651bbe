//! Start-position sampling strategies for the placement search.
//!
//! The search never enumerates positions itself; it asks a
//! [`PositionSampler`] for the next start cell to try. Swapping the sampler
//! changes how the search explores the grid without touching the acceptance
//! rules, and lets tests drive the search with a fixed sequence.

use std::collections::HashMap;

use rand::{Rng, SeedableRng as _, seq::SliceRandom as _};
use rand_pcg::Pcg64;
use wordlace_core::{Orientation, Position};

use crate::CrosswordSeed;

/// A source of candidate start positions.
///
/// Implementations must only return positions from which a word of
/// `word_len` letters written along `orientation` stays on a
/// `grid_size × grid_size` grid. `None` means no such position exists.
///
/// Closures with the same signature are samplers too, which is convenient for
/// scripted tests:
///
/// ```
/// use wordlace_core::{Orientation, Position};
/// use wordlace_generator::PositionSampler;
///
/// let mut script = vec![Position::new(0, 0), Position::new(3, 2)];
/// let mut sampler = move |_: usize, _: usize, _: Orientation| script.pop();
///
/// assert_eq!(sampler.sample(5, 3, Orientation::Vertical), Some(Position::new(3, 2)));
/// ```
pub trait PositionSampler {
    /// Returns the next start position to try.
    fn sample(
        &mut self,
        grid_size: usize,
        word_len: usize,
        orientation: Orientation,
    ) -> Option<Position>;
}

impl<F> PositionSampler for F
where
    F: FnMut(usize, usize, Orientation) -> Option<Position>,
{
    fn sample(
        &mut self,
        grid_size: usize,
        word_len: usize,
        orientation: Orientation,
    ) -> Option<Position> {
        self(grid_size, word_len, orientation)
    }
}

/// Returns the largest legal start row and column for the given word shape.
///
/// Horizontal words may start on any row and on columns `0..=size-len`;
/// vertical words are the transpose.
#[must_use]
pub fn start_limits(
    grid_size: usize,
    word_len: usize,
    orientation: Orientation,
) -> Option<(usize, usize)> {
    if grid_size == 0 || word_len > grid_size {
        return None;
    }
    let last = grid_size - 1;
    let slack = grid_size - word_len;
    Some(match orientation {
        Orientation::Horizontal => (last, slack),
        Orientation::Vertical => (slack, last),
    })
}

/// Draws each start position uniformly and independently.
#[derive(Debug, Clone)]
pub struct RandomSampler<R = Pcg64> {
    rng: R,
}

impl<R> RandomSampler<R> {
    /// Wraps an existing random number generator.
    #[must_use]
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomSampler {
    /// Creates a sampler whose draws are fully determined by `seed`.
    #[must_use]
    pub fn from_seed(seed: CrosswordSeed) -> Self {
        Self::new(Pcg64::from_seed(seed.to_bytes()))
    }
}

impl<R: Rng> PositionSampler for RandomSampler<R> {
    fn sample(
        &mut self,
        grid_size: usize,
        word_len: usize,
        orientation: Orientation,
    ) -> Option<Position> {
        let (max_row, max_col) = start_limits(grid_size, word_len, orientation)?;
        let row = self.rng.random_range(0..=max_row);
        let col = self.rng.random_range(0..=max_col);
        Some(Position::new(row, col))
    }
}

type ScanKey = (usize, usize, Orientation);

/// Visits every legal start position once, in shuffled order, before
/// repeating any of them.
///
/// A separate queue is kept per grid size, word length, and orientation. When
/// a queue runs dry it is refilled and reshuffled, so the sampler never stops
/// producing positions as long as one exists.
#[derive(Debug, Clone)]
pub struct ShuffledScanSampler<R = Pcg64> {
    rng: R,
    queues: HashMap<ScanKey, Vec<Position>>,
}

impl<R> ShuffledScanSampler<R> {
    /// Wraps an existing random number generator.
    #[must_use]
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            queues: HashMap::new(),
        }
    }
}

impl ShuffledScanSampler {
    /// Creates a sampler whose order is fully determined by `seed`.
    #[must_use]
    pub fn from_seed(seed: CrosswordSeed) -> Self {
        Self::new(Pcg64::from_seed(seed.to_bytes()))
    }
}

impl<R: Rng> PositionSampler for ShuffledScanSampler<R> {
    fn sample(
        &mut self,
        grid_size: usize,
        word_len: usize,
        orientation: Orientation,
    ) -> Option<Position> {
        let (max_row, max_col) = start_limits(grid_size, word_len, orientation)?;
        let queue = self
            .queues
            .entry((grid_size, word_len, orientation))
            .or_default();
        if queue.is_empty() {
            queue.extend(
                (0..=max_row).flat_map(|row| (0..=max_col).map(move |col| Position::new(row, col))),
            );
            queue.shuffle(&mut self.rng);
        }
        queue.pop()
    }
}
