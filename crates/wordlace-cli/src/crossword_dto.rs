use serde::{Deserialize, Serialize};
use wordlace_core::{Crossword, Placement};
use wordlace_generator::GeneratedCrossword;
use wordlace_words::CrosswordId;

/// JSON form of a generated crossword.
///
/// `grid` holds one single-letter string per filled cell and `null` for
/// empty cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrosswordDto {
    /// Clue set identifier, present when clues came from a topic.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crossword_id: Option<String>,
    /// Seed that reproduces the layout.
    pub seed: String,
    /// Rows of cells.
    pub grid: Vec<Vec<Option<String>>>,
    /// Placed words in number order.
    pub word_placements: Vec<PlacementDto>,
    /// Number of columns.
    pub width: usize,
    /// Number of rows.
    pub height: usize,
}

/// JSON form of one placement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacementDto {
    /// The placed word.
    pub word: String,
    /// Row of the first letter.
    pub start_row: usize,
    /// Column of the first letter.
    pub start_col: usize,
    /// `"horizontal"` or `"vertical"`.
    pub direction: String,
    /// Clue text, empty when none is known.
    pub clue: String,
    /// Display number.
    pub number: usize,
}

impl CrosswordDto {
    /// Converts a generated crossword and its optional clue set identifier.
    #[must_use]
    pub fn new(generated: &GeneratedCrossword, crossword_id: Option<CrosswordId>) -> Self {
        let crossword = &generated.crossword;
        Self {
            crossword_id: crossword_id.map(|id| id.to_string()),
            seed: generated.seed.to_string(),
            grid: grid_rows(crossword),
            word_placements: crossword
                .placements()
                .iter()
                .map(PlacementDto::from)
                .collect(),
            width: crossword.width(),
            height: crossword.height(),
        }
    }
}

impl From<&Placement> for PlacementDto {
    fn from(placement: &Placement) -> Self {
        let start = placement.start();
        Self {
            word: placement.word().to_string(),
            start_row: start.row(),
            start_col: start.col(),
            direction: placement.orientation().as_str().to_owned(),
            clue: placement.clue().unwrap_or_default().to_owned(),
            number: placement.number(),
        }
    }
}

fn grid_rows(crossword: &Crossword) -> Vec<Vec<Option<String>>> {
    crossword
        .grid()
        .rows()
        .map(|row| {
            row.iter()
                .map(|cell| cell.map(|letter| letter.to_string()))
                .collect()
        })
        .collect()
}
