//! Built-in word lists used when no provider response is available.

use crate::WordClue;

/// Number of entries a word list is trimmed to.
pub const WORD_LIST_LEN: usize = 30;

const BASKETBALL: &[(&str, &str)] = &[
    ("BASKETBALL", "Sport with hoops and dribbling"),
    ("COURT", "Playing surface"),
    ("HOOP", "Target for shooting"),
    ("DUNK", "Powerful downward shot"),
    ("PLAYER", "Team member"),
    ("COACH", "Team leader and strategist"),
    ("REFEREE", "Game official"),
    ("FOUL", "Rule violation"),
    ("POINT", "Score unit"),
    ("SHOT", "Attempt to score"),
];

const MOVIES: &[(&str, &str)] = &[
    ("MOVIE", "Film or cinema production"),
    ("ACTOR", "Performer in films"),
    ("DIRECTOR", "Film creator and guide"),
    ("SCRIPT", "Written dialogue and actions"),
    ("SCENE", "Single sequence in a film"),
    ("CAMERA", "Recording device"),
    ("ACTION", "Director's command to start"),
    ("DRAMA", "Serious film genre"),
    ("COMEDY", "Humorous film genre"),
    ("TICKET", "Cinema admission pass"),
];

const TECHNOLOGY: &[(&str, &str)] = &[
    ("COMPUTER", "Electronic processing device"),
    ("SOFTWARE", "Computer programs"),
    ("INTERNET", "Global network"),
    ("WEBSITE", "Online destination"),
    ("DATABASE", "Information storage system"),
    ("ALGORITHM", "Problem-solving procedure"),
    ("PYTHON", "Programming language"),
    ("CODE", "Programming instructions"),
    ("DEBUG", "Fix programming errors"),
    ("SERVER", "Network host computer"),
];

const GENERAL: &[(&str, &str)] = &[
    ("WORD", "Unit of language"),
    ("PUZZLE", "Brain teaser game"),
    ("CROSS", "Intersection point"),
    ("GRID", "Pattern of squares"),
    ("CLUE", "Helpful hint"),
    ("ANSWER", "Correct response"),
    ("LETTER", "Alphabet character"),
    ("BLACK", "Darkest color"),
    ("WHITE", "Lightest color"),
    ("SQUARE", "Four-sided shape"),
    ("NUMBER", "Counting digit"),
    ("ACROSS", "Horizontal direction"),
    ("DOWN", "Vertical direction"),
    ("GAME", "Recreational activity"),
    ("FUN", "Enjoyable experience"),
    ("SMART", "Intelligent"),
    ("THINK", "Use your mind"),
    ("BRAIN", "Thinking organ"),
    ("SOLVE", "Find the answer"),
    ("CHALLENGE", "Difficult task"),
    ("LOGIC", "Reasoning process"),
    ("PATTERN", "Repeated design"),
    ("FILL", "Complete spaces"),
    ("EMPTY", "Nothing inside"),
    ("START", "Begin something"),
    ("FINISH", "Complete something"),
    ("TIME", "Duration measure"),
    ("SPACE", "Empty area"),
    ("PLACE", "Put in position"),
    ("FIND", "Discover something"),
];

/// Returns the topics that have a dedicated word list.
#[must_use]
pub fn known_topics() -> &'static [&'static str] {
    &["basketball", "movies", "technology"]
}

/// Returns the general-purpose word list.
#[must_use]
pub fn general_word_clues() -> Vec<WordClue> {
    to_word_clues(GENERAL)
}

/// Returns up to [`WORD_LIST_LEN`] entries for `topic`.
///
/// Topics are matched case-insensitively. A known topic contributes its own
/// entries first, followed by the general list; any other topic gets the
/// general list alone.
///
/// # Examples
///
/// ```
/// use wordlace_words::fallback_word_clues;
///
/// let words = fallback_word_clues("Movies");
/// assert_eq!(words.len(), 30);
/// assert_eq!(words[0].word, "MOVIE");
///
/// let words = fallback_word_clues("gardening");
/// assert_eq!(words[0].word, "WORD");
/// ```
#[must_use]
pub fn fallback_word_clues(topic: &str) -> Vec<WordClue> {
    let topic_entries: &[(&str, &str)] = match topic.trim().to_lowercase().as_str() {
        "basketball" => BASKETBALL,
        "movies" => MOVIES,
        "technology" => TECHNOLOGY,
        _ => &[],
    };
    topic_entries
        .iter()
        .chain(GENERAL)
        .take(WORD_LIST_LEN)
        .map(|&(word, clue)| WordClue::new(word, clue))
        .collect()
}

fn to_word_clues(entries: &[(&str, &str)]) -> Vec<WordClue> {
    entries
        .iter()
        .map(|&(word, clue)| WordClue::new(word, clue))
        .collect()
}
