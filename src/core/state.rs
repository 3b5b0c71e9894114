//! Game state: the aggregate root of one puzzle session.
//!
//! ## GameState
//!
//! - Tiles in display order (shuffles reorder this list)
//! - Mistakes left, floored at zero
//! - Remaining answer-key groups and solved groups in solve order
//! - Status, message, date label
//! - Action history
//! - RNG
//!
//! Only the engine mutates a `GameState`; everything else reads it through
//! the accessors here or through a `ViewModel`.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::action::ActionRecord;
use super::group::{Group, SolvedGroup};
use super::rng::GameRng;
use super::tile::{Tile, TileId};

/// Where the game stands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GameStatus {
    /// Guesses still being taken.
    #[default]
    Playing,
    /// Every group found.
    Won,
    /// Mistakes exhausted with groups remaining.
    Lost,
}

impl GameStatus {
    /// Check if the game has ended.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::Playing)
    }
}

/// The last user-facing status line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Message {
    #[default]
    Instructions,
    SelectExactly(usize),
    Correct,
    Won,
    Incorrect,
    GameOver,
}

impl std::fmt::Display for Message {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Message::Instructions => f.write_str("Create four groups of four!"),
            Message::SelectExactly(n) => write!(f, "Please select exactly {n} tiles."),
            Message::Correct => f.write_str("Correct group!"),
            Message::Won => f.write_str("You win! All groups found!"),
            Message::Incorrect => f.write_str("Incorrect group. Try again."),
            Message::GameOver => f.write_str("Game over! No more mistakes allowed."),
        }
    }
}

/// Complete state of one game.
///
/// Fields are crate-visible so the engine can mutate them; outside the
/// crate the state is read-only.
#[derive(Clone, Debug)]
pub struct GameState {
    pub(crate) tiles: Vec<Tile>,
    pub(crate) mistakes_left: u32,
    pub(crate) remaining_groups: Vec<Group>,
    pub(crate) solved_groups: Vector<SolvedGroup>,
    pub(crate) next_group_label: u32,
    pub(crate) message: Message,
    pub(crate) date: String,
    pub(crate) status: GameStatus,
    pub(crate) history: Vector<ActionRecord>,
    pub(crate) rng: GameRng,
}

impl GameState {
    /// Tiles in display order.
    #[must_use]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Look up a tile by ID.
    #[must_use]
    pub fn tile(&self, id: TileId) -> Option<&Tile> {
        self.tiles.iter().find(|t| t.id == id)
    }

    pub(crate) fn tile_mut(&mut self, id: TileId) -> Option<&mut Tile> {
        self.tiles.iter_mut().find(|t| t.id == id)
    }

    /// Tiles in the pending guess, in display order.
    pub fn selected_tiles(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter().filter(|t| t.selected)
    }

    /// Number of tiles in the pending guess.
    #[must_use]
    pub fn selected_count(&self) -> usize {
        self.selected_tiles().count()
    }

    /// Incorrect submissions still allowed.
    #[must_use]
    pub fn mistakes_left(&self) -> u32 {
        self.mistakes_left
    }

    /// Answer-key groups not yet found.
    #[must_use]
    pub fn remaining_groups(&self) -> &[Group] {
        &self.remaining_groups
    }

    /// Groups found so far, in solve order.
    #[must_use]
    pub fn solved_groups(&self) -> &Vector<SolvedGroup> {
        &self.solved_groups
    }

    /// Label of the most recently solved group, 0 before the first.
    #[must_use]
    pub fn next_group_label(&self) -> u32 {
        self.next_group_label
    }

    /// Last status message.
    #[must_use]
    pub fn message(&self) -> Message {
        self.message
    }

    /// Puzzle date label.
    #[must_use]
    pub fn date(&self) -> &str {
        &self.date
    }

    /// Where the game stands.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Every action that changed the game, in order.
    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    /// Seed of the session RNG.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Record an action in history.
    pub(crate) fn record(&mut self, record: ActionRecord) {
        self.history.push_back(record);
    }

    /// Sequence number for the next history entry.
    pub(crate) fn next_sequence(&self) -> u32 {
        self.history.len() as u32
    }
}
