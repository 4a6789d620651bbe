//! Crossword generation by randomized interlocking placement.
//!
//! This crate turns a list of candidate words into a [`Crossword`]: a square
//! grid in which every word after the first shares at least one letter with
//! the words placed before it, and no placement creates stray words along
//! either axis.
//!
//! # Overview
//!
//! - [`legality`]: the placement rules (bounds, letter conflicts,
//!   perpendicular runs, merges)
//! - [`Layout`]: an owned grid under construction with an explicit
//!   check-then-commit protocol
//! - [`PositionSampler`]: where the search looks next; [`RandomSampler`] and
//!   [`ShuffledScanSampler`] are provided
//! - [`CrosswordGenerator`]: the search itself, configured by
//!   [`GeneratorConfig`]
//! - [`CrosswordSeed`]: reproducible runs
//!
//! # Examples
//!
//! ```
//! use wordlace_generator::{CrosswordGenerator, CrosswordSeed, GeneratorConfig};
//!
//! let words = ["PYTHON", "CODE", "TEST", "GRID", "WORD", "PLACE", "CROSS"];
//! let generator = CrosswordGenerator::new(GeneratorConfig::default());
//!
//! let generated = generator.generate(words);
//! let crossword = &generated.crossword;
//! assert!(!crossword.placements().is_empty());
//! assert!(crossword.placements().len() <= words.len());
//!
//! // The seed reproduces the same crossword.
//! let again = generator.generate_with_seed(words, generated.seed);
//! assert_eq!(&again.crossword, crossword);
//! ```
//!
//! [`Crossword`]: wordlace_core::Crossword

pub use self::{
    config::*, generator::*, layout::*, legality::PlacementRejection, sampler::*, seed::*,
};

mod config;
mod generator;
mod layout;
pub mod legality;
mod sampler;
mod seed;
