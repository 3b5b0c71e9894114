//! Player actions and what became of them.
//!
//! Every request the game accepts is one of five verbs:
//! - `SelectTile(id)` toggles one tile in or out of the pending guess
//! - `Submit` checks the pending guess against the answer key
//! - `Shuffle` reorders the unsolved tiles
//! - `DeselectAll` clears the pending guess
//! - `View` changes nothing and just asks for the current state
//!
//! The engine answers each with an `ActionOutcome`.

use serde::{Deserialize, Serialize};

use super::state::GameStatus;
use super::tile::{GroupLabel, TileId};

/// A complete game action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "action", content = "id", rename_all = "kebab-case")]
pub enum Action {
    SelectTile(TileId),
    Submit,
    Shuffle,
    DeselectAll,
    View,
}

impl Action {
    /// Wire name of the action.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Action::SelectTile(_) => "select-tile",
            Action::Submit => "submit",
            Action::Shuffle => "shuffle",
            Action::DeselectAll => "deselect-all",
            Action::View => "view",
        }
    }
}

/// Why an action was accepted but had no effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IgnoreReason {
    /// No tile has this ID.
    UnknownTile,
    /// The tile's group is already solved.
    SolvedTile,
    /// The request did not decode to an action.
    MalformedRequest,
}

/// What an action did to the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "kebab-case")]
pub enum ActionOutcome {
    /// A tile's selection flag was flipped.
    Toggled { tile: TileId, selected: bool },
    /// Nothing changed.
    Ignored { reason: IgnoreReason },
    /// All selections were cleared.
    Deselected,
    /// Unsolved tiles were reordered.
    Shuffled,
    /// Submit with the wrong number of tiles selected; no mistake consumed.
    WrongSelectionSize { selected: usize },
    /// The guess matched a group.
    Correct { label: GroupLabel, won: bool },
    /// The guess matched nothing; a mistake was consumed.
    Incorrect { mistakes_left: u32, lost: bool },
    /// The game is over and only `View` is accepted.
    Finished { status: GameStatus },
    /// State returned unchanged.
    Viewed,
}

impl ActionOutcome {
    /// Check if the outcome changed the game state.
    #[must_use]
    pub fn changed_state(&self) -> bool {
        matches!(
            self,
            ActionOutcome::Toggled { .. }
                | ActionOutcome::Deselected
                | ActionOutcome::Shuffled
                | ActionOutcome::WrongSelectionSize { .. }
                | ActionOutcome::Correct { .. }
                | ActionOutcome::Incorrect { .. }
        )
    }
}

/// A recorded action with its result, for history tracking.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// Position in the session's history (starts at 0).
    pub sequence: u32,

    /// The action taken.
    pub action: Action,

    /// What it did.
    pub outcome: ActionOutcome,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(sequence: u32, action: Action, outcome: ActionOutcome) -> Self {
        Self {
            sequence,
            action,
            outcome,
        }
    }
}
