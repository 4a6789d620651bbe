use std::{
    fs, io,
    path::{Path, PathBuf},
};

use crate::{WordClue, fallback_word_clues, pad_word_clues, parse_word_clues};

/// Errors that can occur while supplying words for a topic.
#[derive(
    Debug, derive_more::Display, derive_more::Error, derive_more::From, derive_more::IsVariant,
)]
pub enum SourceError {
    /// The saved response could not be read.
    #[display("failed to read provider response: {_0}")]
    Io(#[from] io::Error),
    /// The source produced no entries.
    #[display("no words supplied for topic {topic:?}")]
    NoWords {
        /// The requested topic.
        topic: String,
    },
}

/// Supplies word/clue pairs for a topic.
pub trait WordSource {
    /// Returns candidate words and clues for `topic`.
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot produce a word list.
    fn word_clues(&self, topic: &str) -> Result<Vec<WordClue>, SourceError>;
}

/// Serves the built-in word lists.
#[derive(Debug, Clone, Copy, Default)]
pub struct FallbackSource;

impl WordSource for FallbackSource {
    fn word_clues(&self, topic: &str) -> Result<Vec<WordClue>, SourceError> {
        Ok(fallback_word_clues(topic))
    }
}

/// Reads a saved `WORD,CLUE` provider response from disk.
///
/// The topic is not consulted; the file is assumed to answer it. A file
/// without a single usable entry is an error, so that
/// [`supply_word_clues`] falls back to the topic's built-in list.
#[derive(Debug, Clone)]
pub struct ResponseFileSource {
    path: PathBuf,
}

impl ResponseFileSource {
    /// Creates a source reading from `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the response file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl WordSource for ResponseFileSource {
    fn word_clues(&self, topic: &str) -> Result<Vec<WordClue>, SourceError> {
        let text = fs::read_to_string(&self.path)?;
        let word_clues = parse_word_clues(&text);
        if word_clues.is_empty() {
            return Err(SourceError::NoWords {
                topic: topic.to_owned(),
            });
        }
        log::debug!(
            "read {} entries for {topic:?} from {}",
            word_clues.len(),
            self.path.display()
        );
        Ok(pad_word_clues(word_clues))
    }
}

/// Asks `source` for words, falling back to the built-in lists on failure.
///
/// # Examples
///
/// ```
/// use wordlace_words::{ResponseFileSource, supply_word_clues};
///
/// let source = ResponseFileSource::new("/nonexistent/response.csv");
/// let words = supply_word_clues(&source, "basketball");
/// assert_eq!(words[0].word, "BASKETBALL");
/// ```
pub fn supply_word_clues<S>(source: &S, topic: &str) -> Vec<WordClue>
where
    S: WordSource + ?Sized,
{
    match source.word_clues(topic) {
        Ok(word_clues) => word_clues,
        Err(err) => {
            log::warn!("word source failed for {topic:?}, using built-in list: {err}");
            fallback_word_clues(topic)
        }
    }
}
