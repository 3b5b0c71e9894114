//! Built-in puzzles.
//!
//! The sample puzzle is what the driver binary plays when no puzzle file is
//! given. It only fits the classic four-by-four shape.

use crate::core::{GameConfig, Group, Puzzle, PuzzleError};

/// Answer key of the sample puzzle.
pub const SAMPLE_GROUPS: [[&str; 4]; 4] = [
    ["Bass", "Pike", "Sole", "Perch"],
    ["Mercury", "Venus", "Earth", "Mars"],
    ["Rook", "Bishop", "Knight", "Pawn"],
    ["Piano", "Organ", "Harp", "Cello"],
];

/// Build the sample puzzle for `config`.
///
/// It carries no date, so games of it are labelled with today's.
pub fn sample(config: &GameConfig) -> Result<Puzzle, PuzzleError> {
    let groups = SAMPLE_GROUPS.iter().map(|words| Group::new(*words)).collect();
    Puzzle::new(config, groups)
}
