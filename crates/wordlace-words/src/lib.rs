//! Word and clue supply for crossword generation.
//!
//! The placement engine only needs bare words; this crate provides the words
//! together with their clues and carries the clues through generation.
//!
//! # Overview
//!
//! - [`WordSource`]: where words for a topic come from. [`FallbackSource`]
//!   serves the built-in lists, [`ResponseFileSource`] reads a saved
//!   `WORD,CLUE` provider response.
//! - [`parse_word_clues`] / [`parse_provider_response`]: the `WORD,CLUE` line
//!   format
//! - [`ClueStore`]: clue sets kept under a [`CrosswordId`] until the grid is
//!   ready
//! - [`attach_clues`]: copy clues onto the placements of a finished
//!   crossword
//!
//! # Examples
//!
//! ```
//! use wordlace_generator::{CrosswordGenerator, GeneratorConfig};
//! use wordlace_words::{ClueStore, FallbackSource, attach_clues, supply_word_clues};
//!
//! let word_clues = supply_word_clues(&FallbackSource, "basketball");
//! let mut store = ClueStore::new();
//! let id = store.insert(&word_clues);
//!
//! let generator = CrosswordGenerator::new(GeneratorConfig::default());
//! let generated = generator.generate(word_clues.iter().map(|entry| &entry.word));
//!
//! let crossword = attach_clues(generated.crossword, store.clues(id).unwrap());
//! assert!(crossword.placements().iter().all(|p| p.clue().is_some()));
//! ```

pub use self::{attach::*, clue::*, fallback::*, response::*, source::*, store::*};

mod attach;
mod clue;
mod fallback;
mod response;
mod source;
mod store;
