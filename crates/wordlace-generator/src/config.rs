/// Default number of rows and columns.
pub const DEFAULT_GRID_SIZE: usize = 15;

/// Default number of search rounds spent on each word after the first.
pub const DEFAULT_MAX_ROUNDS: usize = 100;

/// Default number of start positions sampled per orientation in each round.
pub const DEFAULT_SAMPLES_PER_ORIENTATION: usize = 50;

/// Default cap on the number of placed words.
pub const DEFAULT_MAX_PLACEMENTS: usize = 12;

/// How candidate start positions are drawn during the search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, derive_more::IsVariant)]
pub enum SamplingStrategy {
    /// Independent uniform draws from the legal start range.
    #[default]
    Random,
    /// Every legal start position in a shuffled order, reshuffled once
    /// exhausted.
    ShuffledScan,
}

/// Tunable parameters of the placement search.
///
/// # Examples
///
/// ```
/// use wordlace_generator::{GeneratorConfig, SamplingStrategy};
///
/// let config = GeneratorConfig::default()
///     .with_grid_size(11)
///     .with_max_placements(8)
///     .with_strategy(SamplingStrategy::ShuffledScan);
///
/// assert_eq!(config.grid_size, 11);
/// assert_eq!(config.max_rounds, 100);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Number of rows and columns of the grid.
    pub grid_size: usize,
    /// Rounds spent on each word before it is dropped.
    pub max_rounds: usize,
    /// Start positions sampled per orientation in each round.
    pub samples_per_orientation: usize,
    /// Placement stops once this many words are on the grid.
    pub max_placements: usize,
    /// How start positions are drawn.
    pub strategy: SamplingStrategy,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            max_rounds: DEFAULT_MAX_ROUNDS,
            samples_per_orientation: DEFAULT_SAMPLES_PER_ORIENTATION,
            max_placements: DEFAULT_MAX_PLACEMENTS,
            strategy: SamplingStrategy::default(),
        }
    }
}

impl GeneratorConfig {
    /// Sets the grid size.
    #[must_use]
    pub fn with_grid_size(self, grid_size: usize) -> Self {
        Self { grid_size, ..self }
    }

    /// Sets the number of rounds per word.
    #[must_use]
    pub fn with_max_rounds(self, max_rounds: usize) -> Self {
        Self { max_rounds, ..self }
    }

    /// Sets the number of samples per orientation per round.
    #[must_use]
    pub fn with_samples_per_orientation(self, samples_per_orientation: usize) -> Self {
        Self {
            samples_per_orientation,
            ..self
        }
    }

    /// Sets the placement cap.
    #[must_use]
    pub fn with_max_placements(self, max_placements: usize) -> Self {
        Self {
            max_placements,
            ..self
        }
    }

    /// Sets the sampling strategy.
    #[must_use]
    pub fn with_strategy(self, strategy: SamplingStrategy) -> Self {
        Self { strategy, ..self }
    }
}
