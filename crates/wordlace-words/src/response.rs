//! Parsing of `WORD,CLUE` provider responses.

use crate::{WordClue, fallback::WORD_LIST_LEN, general_word_clues};

/// Minimum length of a supplied answer.
pub const MIN_SUPPLIED_LEN: usize = 3;
/// Maximum length of a supplied answer.
pub const MAX_SUPPLIED_LEN: usize = 15;
/// A response with fewer entries than this is padded from the general list.
pub const MIN_RESPONSE_ENTRIES: usize = 20;

/// Parses `WORD,CLUE` lines.
///
/// Lines without a comma, and lines starting with `#`, are skipped. Each line
/// is split on its first comma; the word is trimmed and uppercased, the clue
/// trimmed. Only words of 3 to 15 alphabetic characters are kept.
///
/// # Examples
///
/// ```
/// use wordlace_words::parse_word_clues;
///
/// let parsed = parse_word_clues(
///     "# header\n\
///      python, Programming language\n\
///      no comma here\n\
///      C++,Not alphabetic\n\
///      REGEX,Pattern, with commas\n",
/// );
/// assert_eq!(parsed.len(), 2);
/// assert_eq!(parsed[0].word, "PYTHON");
/// assert_eq!(parsed[1].clue, "Pattern, with commas");
/// ```
#[must_use]
pub fn parse_word_clues(text: &str) -> Vec<WordClue> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.starts_with('#'))
        .filter_map(|line| line.split_once(','))
        .filter_map(|(word, clue)| {
            let word = word.trim().to_uppercase();
            let acceptable = (MIN_SUPPLIED_LEN..=MAX_SUPPLIED_LEN).contains(&word.chars().count())
                && word.chars().all(char::is_alphabetic);
            if !acceptable {
                log::trace!("skipping supplied word {word:?}");
                return None;
            }
            Some(WordClue::new(word, clue.trim()))
        })
        .collect()
}

/// Parses a provider response into a usable word list.
///
/// Responses that yield fewer than [`MIN_RESPONSE_ENTRIES`] entries are
/// padded from the general fallback list, and the result is truncated to
/// [`WORD_LIST_LEN`].
#[must_use]
pub fn parse_provider_response(text: &str) -> Vec<WordClue> {
    pad_word_clues(parse_word_clues(text))
}

/// Pads `word_clues` from the general list if it is short, then truncates it
/// to [`WORD_LIST_LEN`].
#[must_use]
pub fn pad_word_clues(mut word_clues: Vec<WordClue>) -> Vec<WordClue> {
    if word_clues.len() < MIN_RESPONSE_ENTRIES {
        log::debug!(
            "response supplied {} entries, padding from the general list",
            word_clues.len()
        );
        word_clues.extend(general_word_clues());
    }
    word_clues.truncate(WORD_LIST_LEN);
    word_clues
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_parse_skips_comments_and_malformed_lines() {
        let text = "\
            #WORD,CLUE\n\
            \n\
            ok,Two letters\n\
            ab,Too short\n\
            ABCDEFGHIJKLMNOP,Too long\n\
            two words,Space\n\
            ,Empty word\n\
            dunk ,  Powerful downward shot  \n";
        let parsed = parse_word_clues(text);
        assert_eq!(parsed, [WordClue::new("DUNK", "Powerful downward shot")]);
    }

    #[test]
    fn test_parse_keeps_boundary_lengths() {
        let parsed = parse_word_clues("abc,Three\nabcdefghijklmno,Fifteen\n");
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[1].word, "ABCDEFGHIJKLMNO");
    }

    #[test]
    fn test_short_response_is_padded() {
        let response = parse_provider_response("HOOP,Target for shooting\nCOURT,Playing surface");
        assert_eq!(response.len(), WORD_LIST_LEN);
        assert_eq!(response[0].word, "HOOP");
        assert_eq!(response[1].word, "COURT");
        assert_eq!(response[2].word, "WORD");
    }

    #[test]
    fn test_long_response_is_truncated() {
        let text = (0_u8..40)
            .map(|i| {
                let word: String = [b'A' + i / 26, b'A' + i % 26, b'X']
                    .iter()
                    .map(|&b| char::from(b))
                    .collect();
                format!("{word},Clue {i}")
            })
            .collect::<Vec<_>>()
            .join("\n");
        let response = parse_provider_response(&text);
        assert_eq!(response.len(), WORD_LIST_LEN);
        assert_eq!(response[0].word, "AAX");
        assert!(response.iter().all(|entry| entry.word.ends_with('X')));
    }

    #[test]
    fn test_empty_response_is_the_general_list() {
        assert_eq!(parse_provider_response(""), general_word_clues());
    }

    proptest! {
        #[test]
        fn test_parsed_words_are_uppercase_alphabetic(text in "[a-zA-Z#, \n]{0,200}") {
            for entry in parse_word_clues(&text) {
                prop_assert!(entry.word.chars().all(char::is_alphabetic));
                prop_assert!(!entry.word.chars().any(char::is_lowercase));
                let len = entry.word.chars().count();
                prop_assert!((MIN_SUPPLIED_LEN..=MAX_SUPPLIED_LEN).contains(&len));
                prop_assert_eq!(entry.clue.trim(), entry.clue.as_str());
            }
        }
    }
}
