//! Plain-text rendering of a generated crossword.

use std::fmt::{self, Display};

use wordlace_core::Orientation;
use wordlace_generator::GeneratedCrossword;
use wordlace_words::CrosswordId;

/// Renders the seed, optional clue set id, grid, and clue lists.
///
/// Clues are listed under `Across` and `Down` by placement number. A
/// placement without a clue shows its answer length instead.
#[must_use]
pub fn render_text(generated: &GeneratedCrossword, crossword_id: Option<CrosswordId>) -> String {
    TextCrossword {
        generated,
        crossword_id,
    }
    .to_string()
}

struct TextCrossword<'a> {
    generated: &'a GeneratedCrossword,
    crossword_id: Option<CrosswordId>,
}

impl Display for TextCrossword<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let crossword = &self.generated.crossword;

        writeln!(f, "Seed: {}", self.generated.seed)?;
        if let Some(id) = self.crossword_id {
            writeln!(f, "Id:   {id}")?;
        }
        writeln!(f)?;

        for line in crossword.grid().to_string().lines() {
            writeln!(f, "  {line}")?;
        }

        for orientation in Orientation::ALL {
            let mut placements = crossword
                .placements()
                .iter()
                .filter(|placement| placement.orientation() == orientation)
                .peekable();
            if placements.peek().is_none() {
                continue;
            }
            write!(f, "\n{}:\n", orientation.heading())?;
            for placement in placements {
                let number = placement.number();
                let word = placement.word();
                match placement.clue() {
                    Some(clue) => writeln!(f, "  {number:>2}. {clue} ({word})")?,
                    None => writeln!(f, "  {number:>2}. {word} ({} letters)", word.len())?,
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use wordlace_core::{Crossword, LetterGrid, Placement, Position, Word};
    use wordlace_generator::CrosswordSeed;

    use super::*;

    fn sample() -> GeneratedCrossword {
        let grid: LetterGrid = "
            .....
            CODE.
            .....
            .....
            .....
        "
        .parse()
        .unwrap();
        let code = Placement::new(
            Word::normalize("code").unwrap(),
            Position::new(1, 0),
            Orientation::Horizontal,
            1,
        )
        .with_clue("Programming instructions");
        GeneratedCrossword {
            crossword: Crossword::new(grid, vec![code]),
            seed: CrosswordSeed::from_bytes([0; 32]),
        }
    }

    #[test]
    fn test_render_lists_across_clues() {
        let text = render_text(&sample(), None);
        let expected = format!(
            "Seed: {}\n\n  .....\n  CODE.\n  .....\n  .....\n  .....\n\nAcross:\n   1. Programming instructions (CODE)\n",
            "0".repeat(64)
        );
        assert_eq!(text, expected);
    }

    #[test]
    fn test_render_shows_id_and_unclued_lengths() {
        let mut generated = sample();
        generated.crossword = generated.crossword.map_placements(|placement| {
            Placement::new(
                placement.word().clone(),
                placement.start(),
                placement.orientation(),
                placement.number(),
            )
        });
        let id = CrosswordId::from_bytes([0; 16]);
        let text = render_text(&generated, Some(id));
        assert!(text.contains(&format!("Id:   {id}\n")));
        assert!(text.contains("   1. CODE (4 letters)\n"));
        assert!(!text.contains("Down:"));
    }
}
