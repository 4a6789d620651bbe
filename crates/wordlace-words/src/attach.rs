use wordlace_core::Crossword;

use crate::ClueMap;

/// Returns `crossword` with each placement carrying the clue for its word.
///
/// Placements whose word has no entry in `clues` are left unclued. The grid
/// and numbering are unchanged.
#[must_use]
pub fn attach_clues(crossword: Crossword, clues: &ClueMap) -> Crossword {
    crossword.map_placements(|placement| match clues.get(placement.word()) {
        Some(clue) => placement.with_clue(clue),
        None => {
            log::debug!("no clue for {}", placement.word());
            placement
        }
    })
}
