use std::cmp::Reverse;

use wordlace_core::{Crossword, Orientation, Position, Word, WordSet};

use crate::{
    CrosswordSeed, GeneratorConfig, Layout, PositionSampler, RandomSampler, SamplingStrategy,
    ShuffledScanSampler,
};

/// A generated crossword together with the seed that produced it.
///
/// Regenerating with the same words, configuration, and seed yields the same
/// crossword.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedCrossword {
    /// The finished grid and placements.
    pub crossword: Crossword,
    /// The seed used for position sampling.
    pub seed: CrosswordSeed,
}

/// Builds crosswords from candidate word lists.
///
/// Generation is best-effort and never fails: malformed words are filtered
/// out, words that cannot be interlocked within the search budget are
/// dropped, and an empty word list produces an empty grid.
///
/// # Algorithm
///
/// 1. Normalize and deduplicate the input, then drop words longer than the
///    grid.
/// 2. Sort by length, longest first, keeping input order among equals.
/// 3. Write the longest word horizontally in the middle of the grid.
/// 4. For every other word, spend up to `max_rounds` rounds; each round tries
///    both orientations and `samples_per_orientation` sampled start cells per
///    orientation. The first start cell that is legal *and* reuses a letter
///    already on the grid is committed.
/// 5. Stop once `max_placements` words are on the grid.
///
/// # Examples
///
/// ```
/// use wordlace_core::Orientation;
/// use wordlace_generator::{CrosswordGenerator, GeneratorConfig};
///
/// let generator = CrosswordGenerator::new(GeneratorConfig::default());
/// let generated = generator.generate(["python", "code", "test", "grid"]);
///
/// let crossword = &generated.crossword;
/// assert_eq!(crossword.width(), 15);
///
/// let first = &crossword.placements()[0];
/// assert_eq!(first.word().to_string(), "PYTHON");
/// assert_eq!(first.orientation(), Orientation::Horizontal);
/// assert_eq!((first.start().row(), first.start().col()), (7, 4));
/// ```
#[derive(Debug, Clone, Default)]
pub struct CrosswordGenerator {
    config: GeneratorConfig,
}

impl CrosswordGenerator {
    /// Creates a generator with the given configuration.
    #[must_use]
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generates a crossword using a freshly drawn random seed.
    #[must_use]
    pub fn generate<I>(&self, words: I) -> GeneratedCrossword
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.generate_with_seed(words, CrosswordSeed::random())
    }

    /// Generates a crossword whose sampling is determined by `seed`.
    ///
    /// The configured [`SamplingStrategy`] selects the sampler.
    #[must_use]
    pub fn generate_with_seed<I>(&self, words: I, seed: CrosswordSeed) -> GeneratedCrossword
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let crossword = match self.config.strategy {
            SamplingStrategy::Random => {
                self.generate_with_sampler(words, &mut RandomSampler::from_seed(seed))
            }
            SamplingStrategy::ShuffledScan => {
                self.generate_with_sampler(words, &mut ShuffledScanSampler::from_seed(seed))
            }
        };
        GeneratedCrossword { crossword, seed }
    }

    /// Generates a crossword, drawing start positions from `sampler`.
    #[must_use]
    pub fn generate_with_sampler<I, S>(&self, words: I, sampler: &mut S) -> Crossword
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
        S: PositionSampler + ?Sized,
    {
        let size = self.config.grid_size;
        let known = WordSet::from_raw(words);
        let mut layout = Layout::new(size, &known);

        let mut order: Vec<&Word> = known
            .iter()
            .filter(|word| {
                let fits = word.len() <= size;
                if !fits {
                    log::debug!("dropping {word}: longer than the {size}x{size} grid");
                }
                fits
            })
            .collect();
        order.sort_by_key(|word| Reverse(word.len()));

        let Some((&first, rest)) = order.split_first() else {
            log::debug!("no placeable words");
            return layout.into_crossword();
        };
        if self.config.max_placements == 0 {
            return layout.into_crossword();
        }

        let center = Position::new(size / 2, (size - first.len()) / 2);
        if let Err(rejection) = layout.commit(first, center, Orientation::Horizontal) {
            log::warn!("could not place anchor word {first} at {center}: {rejection}");
            return layout.into_crossword();
        }

        for &word in rest {
            if layout.placements().len() >= self.config.max_placements {
                log::debug!(
                    "placement cap of {} reached",
                    self.config.max_placements
                );
                break;
            }
            if !self.place_interlocking(&mut layout, word, sampler) {
                log::debug!(
                    "dropping {word}: no interlocking position after {} rounds",
                    self.config.max_rounds
                );
            }
        }

        log::debug!(
            "placed {} of {} candidate words",
            layout.placements().len(),
            known.len()
        );
        layout.into_crossword()
    }

    fn place_interlocking<S>(&self, layout: &mut Layout<'_>, word: &Word, sampler: &mut S) -> bool
    where
        S: PositionSampler + ?Sized,
    {
        let size = self.config.grid_size;
        for _ in 0..self.config.max_rounds {
            for orientation in Orientation::ALL {
                for _ in 0..self.config.samples_per_orientation {
                    let Some(start) = sampler.sample(size, word.len(), orientation) else {
                        break;
                    };
                    if let Err(rejection) = layout.check(word, start, orientation) {
                        log::trace!("{word} {orientation} at {start}: {rejection}");
                        continue;
                    }
                    if !layout.crosses_existing(word, start, orientation) {
                        log::trace!("{word} {orientation} at {start}: no shared letter");
                        continue;
                    }
                    if layout.commit(word, start, orientation).is_ok() {
                        return true;
                    }
                }
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use proptest::prelude::*;
    use wordlace_core::{LetterGrid, Placement};

    use super::*;

    const TEST_WORDS: [&str; 7] = ["PYTHON", "CODE", "TEST", "GRID", "WORD", "PLACE", "CROSS"];

    fn covered(placement: &Placement) -> HashSet<Position> {
        placement.cells().map(|(pos, _)| pos).collect()
    }

    fn assert_consistent(crossword: &Crossword) {
        for placement in crossword.placements() {
            for (pos, letter) in placement.cells() {
                assert_eq!(
                    crossword.grid().get(pos),
                    Some(letter),
                    "{} disagrees with the grid at {pos}",
                    placement.word()
                );
            }
        }
    }

    fn assert_connected(crossword: &Crossword) {
        let mut seen = HashSet::new();
        for (i, placement) in crossword.placements().iter().enumerate() {
            let cells = covered(placement);
            if i > 0 {
                assert!(
                    !cells.is_disjoint(&seen),
                    "{} does not touch earlier words",
                    placement.word()
                );
            }
            seen.extend(cells);
        }
    }

    fn assert_no_merges(crossword: &Crossword) {
        let grid = crossword.grid();
        for placement in crossword.placements() {
            let orientation = placement.orientation();
            if let Some(before) = placement.start().retreat(orientation) {
                assert_eq!(grid.get(before), None, "{} merges at its start", placement.word());
            }
            let after = placement.end().advance(orientation, 1);
            assert_eq!(grid.letter_at(after), None, "{} merges at its end", placement.word());
        }
    }

    fn assert_no_junk_words(grid: &LetterGrid, known: &WordSet) {
        for orientation in Orientation::ALL {
            for (pos, run) in grid.runs(orientation) {
                let text: String = run.iter().copied().map(char::from).collect();
                assert!(known.contains(&run), "stray {orientation} run {text} at {pos}");
            }
        }
    }

    #[test]
    fn test_empty_word_list() {
        let generator = CrosswordGenerator::default();
        let crossword = generator.generate(Vec::<String>::new()).crossword;

        assert_eq!(crossword.width(), 15);
        assert_eq!(crossword.height(), 15);
        assert!(crossword.grid().is_empty());
        assert!(crossword.placements().is_empty());
    }

    #[test]
    fn test_only_malformed_words() {
        let generator = CrosswordGenerator::default();
        let crossword = generator.generate(["A", "BB", "123", "no way"]).crossword;
        assert!(crossword.placements().is_empty());
        assert!(crossword.grid().is_empty());
    }

    #[test]
    fn test_single_word_is_centered() {
        let generator = CrosswordGenerator::default();
        let crossword = generator.generate(["PYTHON"]).crossword;

        assert_eq!(crossword.placements().len(), 1);
        let placement = &crossword.placements()[0];
        assert_eq!(placement.word().to_string(), "PYTHON");
        assert_eq!(placement.orientation(), Orientation::Horizontal);
        assert_eq!(placement.start(), Position::new(7, 4));
        assert_eq!(placement.number(), 1);
        assert_eq!(placement.clue(), None);
        assert_consistent(&crossword);
    }

    #[test]
    fn test_longest_word_anchors_and_ties_keep_input_order() {
        let generator = CrosswordGenerator::default();
        let crossword = generator.generate(["cat", "place", "cross"]).crossword;
        let first = &crossword.placements()[0];
        assert_eq!(first.word().to_string(), "PLACE");
        assert_eq!(first.start(), Position::new(7, 5));
    }

    #[test]
    fn test_words_longer_than_grid_are_dropped() {
        let generator = CrosswordGenerator::new(GeneratorConfig::default().with_grid_size(5));
        let crossword = generator.generate(["crossword", "grid", "rid"]).crossword;

        let words: Vec<_> = crossword
            .placements()
            .iter()
            .map(|p| p.word().to_string())
            .collect();
        assert_eq!(words[0], "GRID");
        assert!(!words.contains(&"CROSSWORD".to_owned()));
    }

    #[test]
    fn test_zero_sized_grid() {
        let generator = CrosswordGenerator::new(GeneratorConfig::default().with_grid_size(0));
        let crossword = generator.generate(TEST_WORDS).crossword;
        assert_eq!(crossword.width(), 0);
        assert!(crossword.placements().is_empty());
    }

    #[test]
    fn test_placement_cap() {
        let config = GeneratorConfig::default().with_max_placements(2);
        let generator = CrosswordGenerator::new(config);
        for i in 0..10 {
            let seed = CrosswordSeed::from_bytes([i; 32]);
            let crossword = generator.generate_with_seed(TEST_WORDS, seed).crossword;
            assert!(crossword.placements().len() <= 2);
        }

        let generator = CrosswordGenerator::new(GeneratorConfig::default().with_max_placements(0));
        assert!(generator.generate(TEST_WORDS).crossword.placements().is_empty());
    }

    #[test]
    fn test_scripted_sampler_places_at_shared_letter() {
        // PYTHON is anchored at row 7, columns 4..=9; its O sits at (7, 8).
        // The script first offers a start that shares no letter, then CODE down
        // through the O.
        let mut script = vec![Position::new(6, 8), Position::new(0, 0)];
        let mut sampler = move |_: usize, _: usize, orientation: Orientation| {
            if orientation.is_vertical() {
                script.pop()
            } else {
                None
            }
        };

        let generator = CrosswordGenerator::default();
        let crossword = generator.generate_with_sampler(["python", "code"], &mut sampler);

        let placements = crossword.placements();
        assert_eq!(placements.len(), 2);
        assert_eq!(placements[1].word().to_string(), "CODE");
        assert_eq!(placements[1].start(), Position::new(6, 8));
        assert_eq!(placements[1].orientation(), Orientation::Vertical);
        assert_eq!(placements[1].number(), 2);
        assert_eq!(
            crossword.grid().get(Position::new(7, 8)).map(char::from),
            Some('O')
        );
    }

    #[test]
    fn test_word_without_shared_letters_is_dropped() {
        let generator = CrosswordGenerator::new(GeneratorConfig::default().with_max_rounds(3));
        let crossword = generator.generate(["PYTHON", "GRID"]).crossword;
        assert_eq!(crossword.placements().len(), 1);
    }

    #[test]
    fn test_same_seed_same_crossword() {
        let generator = CrosswordGenerator::default();
        let seed = CrosswordSeed::from_bytes([42; 32]);
        let a = generator.generate_with_seed(TEST_WORDS, seed);
        let b = generator.generate_with_seed(TEST_WORDS, seed);
        assert_eq!(a, b);

        let scan = CrosswordGenerator::new(
            GeneratorConfig::default().with_strategy(SamplingStrategy::ShuffledScan),
        );
        assert_eq!(
            scan.generate_with_seed(TEST_WORDS, seed),
            scan.generate_with_seed(TEST_WORDS, seed)
        );
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn test_generated_crosswords_hold_invariants(
            bytes in any::<[u8; 32]>(),
            scan in any::<bool>(),
        ) {
            let strategy = if scan {
                SamplingStrategy::ShuffledScan
            } else {
                SamplingStrategy::Random
            };
            let generator =
                CrosswordGenerator::new(GeneratorConfig::default().with_strategy(strategy));
            let known = WordSet::from_raw(TEST_WORDS);
            let crossword = generator
                .generate_with_seed(TEST_WORDS, CrosswordSeed::from_bytes(bytes))
                .crossword;

            let placements = crossword.placements();
            prop_assert!((1..=TEST_WORDS.len()).contains(&placements.len()));
            for (i, placement) in placements.iter().enumerate() {
                prop_assert!(known.contains(placement.word().letters()));
                prop_assert_eq!(placement.number(), i + 1);
            }
            let distinct: HashSet<_> = placements.iter().map(Placement::word).collect();
            prop_assert_eq!(distinct.len(), placements.len());

            assert_consistent(&crossword);
            assert_connected(&crossword);
            assert_no_merges(&crossword);
            assert_no_junk_words(crossword.grid(), &known);
        }
    }
}
