//! Command-line front end for building crosswords.
//!
//! The `wordlace` binary takes either a topic, whose words and clues come
//! from a [`wordlace_words::WordSource`], or an explicit `--word` list, and
//! prints the generated crossword as text or JSON.

pub use self::{
    args::{Args, MAX_GRID_SIZE, StrategyArg},
    crossword_dto::{CrosswordDto, PlacementDto},
    error::{CliError, FAILURE_EXIT_CODE, USAGE_EXIT_CODE},
    render::render_text,
    run::run,
};

mod args;
mod crossword_dto;
mod error;
mod render;
mod run;
pub mod version;
