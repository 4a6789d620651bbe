use std::{io, path::PathBuf};

use wordlace_words::StoreError;

/// Exit code for invalid input, matching clap's usage errors.
pub const USAGE_EXIT_CODE: i32 = 2;
/// Exit code for any other failure.
pub const FAILURE_EXIT_CODE: i32 = 1;

/// Errors that end a `wordlace` run.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From, derive_more::IsVariant)]
pub enum CliError {
    /// None of the supplied words is usable.
    #[display("no usable words (need at least 3 ASCII letters each)")]
    NoWords,
    /// The clues file could not be read.
    #[display("failed to read {}: {source}", path.display())]
    ReadCluesFile {
        /// Path given on the command line.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
    /// The clue set disappeared from the store.
    #[display("clue lookup failed: {_0}")]
    Store(#[from] StoreError),
    /// JSON output could not be produced.
    #[display("failed to serialize crossword: {_0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Returns the process exit code for this error.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::NoWords | Self::ReadCluesFile { .. } => USAGE_EXIT_CODE,
            Self::Store(_) | Self::Json(_) => FAILURE_EXIT_CODE,
        }
    }
}
