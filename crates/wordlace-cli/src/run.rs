//! The `wordlace` command flow.

use std::path::Path;

use rayon::prelude::*;
use wordlace_generator::{CrosswordGenerator, GeneratedCrossword};
use wordlace_words::{
    ClueStore, FallbackSource, ResponseFileSource, SourceError, WordClue, WordSource,
    attach_clues, fallback_word_clues, supply_word_clues,
};

use crate::{Args, CliError, CrosswordDto, render_text};

/// Runs the command and returns what should be printed.
///
/// # Errors
///
/// Returns an error if no usable words are supplied, the clues file cannot be
/// read, or JSON output fails.
pub fn run(args: &Args) -> Result<String, CliError> {
    let mut store = ClueStore::new();
    let (words, crossword_id) = match &args.topic {
        Some(topic) => {
            let word_clues = topic_word_clues(topic, args.clues_file.as_deref())?;
            let id = store.insert(&word_clues);
            let words = word_clues.into_iter().map(|entry| entry.word).collect();
            (words, Some(id))
        }
        None => (args.words.clone(), None),
    };
    if !words.iter().any(|word| wordlace_core::normalize(word).is_some()) {
        return Err(CliError::NoWords);
    }

    let generator = CrosswordGenerator::new(args.generator_config());
    let generated = match args.seed {
        Some(seed) => generator.generate_with_seed(&words, seed),
        None => best_of(&generator, &words, args.tries),
    };
    log::info!(
        "placed {} of {} words with seed {}",
        generated.crossword.placements().len(),
        words.len(),
        generated.seed
    );

    let generated = match crossword_id {
        Some(id) => GeneratedCrossword {
            crossword: attach_clues(generated.crossword, store.clues(id)?),
            seed: generated.seed,
        },
        None => generated,
    };

    if args.json {
        let dto = CrosswordDto::new(&generated, crossword_id);
        return Ok(serde_json::to_string_pretty(&dto)? + "\n");
    }
    Ok(render_text(&generated, crossword_id))
}

fn topic_word_clues(topic: &str, clues_file: Option<&Path>) -> Result<Vec<WordClue>, CliError> {
    let Some(path) = clues_file else {
        return Ok(supply_word_clues(&FallbackSource, topic));
    };
    match ResponseFileSource::new(path).word_clues(topic) {
        Ok(word_clues) => Ok(word_clues),
        Err(SourceError::Io(source)) => Err(CliError::ReadCluesFile {
            path: path.to_owned(),
            source,
        }),
        Err(err) => {
            log::warn!("{err}; using built-in list for {topic:?}");
            Ok(fallback_word_clues(topic))
        }
    }
}

/// Generates `tries` layouts in parallel and keeps one with the most
/// placements.
fn best_of(generator: &CrosswordGenerator, words: &[String], tries: u32) -> GeneratedCrossword {
    (0..tries)
        .into_par_iter()
        .map(|_| generator.generate(words))
        .max_by_key(|generated| generated.crossword.placements().len())
        .unwrap_or_else(|| generator.generate(words))
}

#[cfg(test)]
mod tests {
    use std::{env, fs, process};

    use clap::Parser as _;

    use super::*;

    fn args(extra: &[&str]) -> Args {
        Args::try_parse_from(["wordlace"].iter().chain(extra)).unwrap()
    }

    const SEED: &str = "c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1";

    #[test]
    fn test_word_list_run_is_reproducible() {
        let args = args(&[
            "--word", "python", "--word", "code", "--word", "test", "--seed", SEED,
        ]);
        let first = run(&args).unwrap();
        assert_eq!(run(&args).unwrap(), first);
        assert!(first.starts_with(&format!("Seed: {SEED}\n")));
        assert!(first.contains("PYTHON"));
        assert!(!first.contains("Id:"));
    }

    #[test]
    fn test_topic_run_attaches_clues() {
        let output = run(&args(&["--topic", "technology", "--json", "--tries", "3"])).unwrap();
        let dto: CrosswordDto = serde_json::from_str(&output).unwrap();

        assert!(dto.crossword_id.is_some());
        assert!(!dto.word_placements.is_empty());
        assert!(dto.word_placements.len() <= 12);
        let topic = fallback_word_clues("technology");
        for placement in &dto.word_placements {
            let entry = topic.iter().find(|entry| entry.word == placement.word).unwrap();
            assert_eq!(placement.clue, entry.clue);
        }
    }

    #[test]
    fn test_text_output_carries_id() {
        let output = run(&args(&["--topic", "movies"])).unwrap();
        let id_line = output.lines().nth(1).unwrap();
        let id = id_line.strip_prefix("Id:").unwrap().trim();
        assert!(id.parse::<wordlace_words::CrosswordId>().is_ok());
        assert!(output.contains("Across:"));
    }

    #[test]
    fn test_best_of_always_yields_a_layout() {
        let generator = CrosswordGenerator::default();
        let words = ["python", "code", "test", "grid"].map(String::from);
        for tries in [0, 1, 16] {
            let best = best_of(&generator, &words, tries);
            assert_eq!(best.crossword.placements()[0].word().to_string(), "PYTHON");
        }
    }

    #[test]
    fn test_malformed_words_are_rejected() {
        let err = run(&args(&["--word", "no", "--word", "c++"])).unwrap_err();
        assert!(err.is_no_words());
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_clues_file() {
        let path = env::temp_dir().join(format!("wordlace-cli-{}.csv", process::id()));
        fs::write(&path, "INTERPRETER,Runs code line by line\nREGEX,Pattern language\n").unwrap();
        let path_arg = path.to_string_lossy().into_owned();
        let output = run(&args(&[
            "--topic", "programming", "--clues-file", path_arg.as_str(), "--seed", SEED, "--json",
        ]));
        fs::remove_file(&path).unwrap();

        let dto: CrosswordDto = serde_json::from_str(&output.unwrap()).unwrap();
        // Short responses are padded from the general list.
        assert_eq!(dto.word_placements[0].word, "INTERPRETER");
        assert_eq!(dto.word_placements[0].clue, "Runs code line by line");
        for placement in &dto.word_placements {
            assert!(!placement.clue.is_empty());
        }
    }

    #[test]
    fn test_missing_clues_file_is_a_usage_error() {
        let missing = env::temp_dir().join("wordlace-cli-missing.csv");
        let missing = missing.to_string_lossy().into_owned();
        let err = run(&args(&["--topic", "movies", "--clues-file", missing.as_str()])).unwrap_err();
        assert!(err.is_read_clues_file());
        assert_eq!(err.exit_code(), 2);
    }
}
