//! Command-line arguments.

use std::path::PathBuf;

use clap::{ArgGroup, Parser, ValueEnum, builder::RangedU64ValueParser};
use wordlace_generator::{
    CrosswordSeed, DEFAULT_GRID_SIZE, DEFAULT_MAX_PLACEMENTS, GeneratorConfig, SamplingStrategy,
};

/// Largest grid size accepted on the command line.
pub const MAX_GRID_SIZE: usize = 64;

/// Sampling strategy names accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum StrategyArg {
    /// Uniform random start cells.
    #[default]
    Random,
    /// Every start cell once, in shuffled order.
    ShuffledScan,
}

impl From<StrategyArg> for SamplingStrategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Random => Self::Random,
            StrategyArg::ShuffledScan => Self::ShuffledScan,
        }
    }
}

/// Build a crossword from a topic or an explicit word list.
#[derive(Debug, Clone, Parser)]
#[command(name = "wordlace", author, about)]
#[command(group(ArgGroup::new("input").required(true).args(["topic", "words"])))]
pub struct Args {
    /// Topic to draw words and clues for.
    #[arg(long, value_name = "TOPIC")]
    pub topic: Option<String>,

    /// Candidate word; may be repeated.
    #[arg(long = "word", value_name = "WORD")]
    pub words: Vec<String>,

    /// Saved `WORD,CLUE` provider response to read the topic's words from.
    #[arg(long, value_name = "PATH", conflicts_with = "words")]
    pub clues_file: Option<PathBuf>,

    /// Grid size (rows and columns).
    #[arg(
        long,
        value_name = "N",
        default_value_t = DEFAULT_GRID_SIZE,
        value_parser = RangedU64ValueParser::<usize>::new().range(1..=MAX_GRID_SIZE as u64)
    )]
    pub size: usize,

    /// Seed (64 hex digits) for a reproducible layout.
    #[arg(long, value_name = "HEX", conflicts_with = "tries")]
    pub seed: Option<CrosswordSeed>,

    /// Sampling strategy for start positions.
    #[arg(long, value_name = "KIND", default_value = "random")]
    pub strategy: StrategyArg,

    /// Maximum number of words to place.
    #[arg(long, value_name = "N", default_value_t = DEFAULT_MAX_PLACEMENTS)]
    pub max_words: usize,

    /// Layouts to generate; the one with the most placed words is kept.
    #[arg(
        long,
        value_name = "COUNT",
        default_value_t = 1,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub tries: u32,

    /// Print the crossword as JSON.
    #[arg(long)]
    pub json: bool,

    /// Increase log verbosity (`-v` debug, `-vv` trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Returns the generator configuration selected by the arguments.
    #[must_use]
    pub fn generator_config(&self) -> GeneratorConfig {
        GeneratorConfig::default()
            .with_grid_size(self.size)
            .with_max_placements(self.max_words)
            .with_strategy(self.strategy.into())
    }

    /// Returns the default log level for the verbosity count.
    #[must_use]
    pub fn log_level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }
}
