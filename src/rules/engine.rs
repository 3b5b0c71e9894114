//! The game engine: every rule of the puzzle lives here.
//!
//! The engine is stateless apart from its configuration. Each operation
//! takes the `GameState` it acts on, mutates it in place and reports an
//! `ActionOutcome`.
//!
//! ## Terminal states
//!
//! Once a game is `Won` or `Lost`, every mutating operation returns
//! `ActionOutcome::Finished` and leaves the state untouched. The message
//! keeps showing the win or game-over text.

use tracing::{debug, info};

use crate::core::action::{Action, ActionOutcome, ActionRecord, IgnoreReason};
use crate::core::config::GameConfig;
use crate::core::group::SolvedGroup;
use crate::core::puzzle::Puzzle;
use crate::core::rng::GameRng;
use crate::core::state::{GameState, GameStatus, Message};
use crate::core::tile::{GroupLabel, Tile, TileId};

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameResult {
    /// Every group found.
    Won {
        /// Mistakes that were still available at the end.
        mistakes_left: u32,
    },
    /// Mistakes exhausted.
    Lost {
        /// Groups found before the last mistake.
        groups_solved: usize,
    },
}

/// Rules engine for one puzzle configuration.
#[derive(Clone, Debug, Default)]
pub struct GameEngine {
    config: GameConfig,
}

impl GameEngine {
    /// Create an engine for the given configuration.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self { config }
    }

    /// Get the game configuration.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Create a fresh game.
    ///
    /// Tiles get IDs `1..=N` in the order the puzzle lists its words, then
    /// the whole grid is shuffled.
    pub fn initialize(
        &self,
        puzzle: &Puzzle,
        date: impl Into<String>,
        mut rng: GameRng,
    ) -> GameState {
        let mut tiles: Vec<Tile> = puzzle
            .groups()
            .iter()
            .flat_map(|group| group.words())
            .enumerate()
            .map(|(i, word)| Tile::new(TileId(i as u32 + 1), word.clone()))
            .collect();
        rng.shuffle(&mut tiles);

        let state = GameState {
            tiles,
            mistakes_left: self.config.mistake_budget,
            remaining_groups: puzzle.groups().to_vec(),
            solved_groups: im::Vector::new(),
            next_group_label: 0,
            message: Message::Instructions,
            date: date.into(),
            status: GameStatus::Playing,
            history: im::Vector::new(),
            rng,
        };

        info!(
            seed = state.seed(),
            tiles = state.tiles.len(),
            mistakes = state.mistakes_left,
            "game initialized"
        );
        state
    }

    /// Apply an action, recording it in the state's history if it changed
    /// the game.
    ///
    /// Views, ignored actions and actions on a finished game leave the
    /// history alone, so polling a session never grows it.
    pub fn apply(&self, state: &mut GameState, action: Action) -> ActionOutcome {
        let outcome = match action {
            Action::View => ActionOutcome::Viewed,
            Action::SelectTile(id) => self.toggle_tile(state, id),
            Action::Submit => self.submit(state),
            Action::Shuffle => self.shuffle(state),
            Action::DeselectAll => self.deselect_all(state),
        };

        if !outcome.changed_state() {
            debug!(action = action.name(), ?outcome, "action left state unchanged");
            return outcome;
        }

        let sequence = state.next_sequence();
        state.record(ActionRecord::new(sequence, action, outcome));
        debug!(sequence, action = action.name(), ?outcome, "action applied");
        outcome
    }

    /// Flip one tile in or out of the pending guess.
    ///
    /// Unknown IDs and tiles of solved groups are ignored.
    pub fn toggle_tile(&self, state: &mut GameState, id: TileId) -> ActionOutcome {
        if let Some(finished) = Self::finished(state) {
            return finished;
        }

        let Some(tile) = state.tile_mut(id) else {
            return ActionOutcome::Ignored {
                reason: IgnoreReason::UnknownTile,
            };
        };
        if tile.is_solved() {
            return ActionOutcome::Ignored {
                reason: IgnoreReason::SolvedTile,
            };
        }

        tile.selected = !tile.selected;
        ActionOutcome::Toggled {
            tile: id,
            selected: tile.selected,
        }
    }

    /// Clear the pending guess.
    pub fn deselect_all(&self, state: &mut GameState) -> ActionOutcome {
        if let Some(finished) = Self::finished(state) {
            return finished;
        }

        clear_selection(state);
        ActionOutcome::Deselected
    }

    /// Randomly reorder the unsolved tiles.
    ///
    /// Solved tiles keep their relative order and end up after the unsolved
    /// ones. Selection flags travel with their tiles.
    pub fn shuffle(&self, state: &mut GameState) -> ActionOutcome {
        if let Some(finished) = Self::finished(state) {
            return finished;
        }

        let (mut unsolved, solved): (Vec<Tile>, Vec<Tile>) =
            state.tiles.drain(..).partition(|t| !t.is_solved());
        state.rng.shuffle(&mut unsolved);
        unsolved.extend(solved);
        state.tiles = unsolved;

        ActionOutcome::Shuffled
    }

    /// Check the pending guess against the remaining groups.
    pub fn submit(&self, state: &mut GameState) -> ActionOutcome {
        if let Some(finished) = Self::finished(state) {
            return finished;
        }

        let selected: Vec<TileId> = state.selected_tiles().map(|t| t.id).collect();
        if selected.len() != self.config.group_size {
            state.message = Message::SelectExactly(self.config.group_size);
            return ActionOutcome::WrongSelectionSize {
                selected: selected.len(),
            };
        }

        // First match in answer-key order wins
        let matched = state
            .remaining_groups
            .iter()
            .position(|group| group.matches(state.selected_tiles().map(Tile::word)));

        match matched {
            Some(index) => self.accept_guess(state, index, &selected),
            None => self.reject_guess(state),
        }
    }

    /// Outcome of the game, once it has ended.
    #[must_use]
    pub fn result(&self, state: &GameState) -> Option<GameResult> {
        match state.status {
            GameStatus::Playing => None,
            GameStatus::Won => Some(GameResult::Won {
                mistakes_left: state.mistakes_left,
            }),
            GameStatus::Lost => Some(GameResult::Lost {
                groups_solved: state.solved_groups.len(),
            }),
        }
    }

    fn finished(state: &GameState) -> Option<ActionOutcome> {
        state.status.is_terminal().then_some(ActionOutcome::Finished {
            status: state.status,
        })
    }

    fn accept_guess(
        &self,
        state: &mut GameState,
        index: usize,
        selected: &[TileId],
    ) -> ActionOutcome {
        state.next_group_label += 1;
        let label = GroupLabel::new(state.next_group_label);

        // Remove by the index found during the scan
        let group = state.remaining_groups.remove(index);
        state.solved_groups.push_back(SolvedGroup {
            label,
            words: group.words().iter().cloned().collect(),
        });

        for tile in state.tiles.iter_mut().filter(|t| selected.contains(&t.id)) {
            tile.solve(label);
        }

        let won = state.remaining_groups.is_empty();
        if won {
            state.status = GameStatus::Won;
            state.message = Message::Won;
            info!(mistakes_left = state.mistakes_left, "puzzle solved");
        } else {
            state.message = Message::Correct;
            info!(label = label.raw(), remaining = state.remaining_groups.len(), "group found");
        }

        ActionOutcome::Correct { label, won }
    }

    fn reject_guess(&self, state: &mut GameState) -> ActionOutcome {
        state.mistakes_left = state.mistakes_left.saturating_sub(1);
        clear_selection(state);

        let lost = state.mistakes_left == 0;
        if lost {
            state.status = GameStatus::Lost;
            state.message = Message::GameOver;
            info!(groups_solved = state.solved_groups.len(), "out of mistakes");
        } else {
            state.message = Message::Incorrect;
            debug!(mistakes_left = state.mistakes_left, "incorrect guess");
        }

        ActionOutcome::Incorrect {
            mistakes_left: state.mistakes_left,
            lost,
        }
    }
}

fn clear_selection(state: &mut GameState) {
    for tile in &mut state.tiles {
        tile.selected = false;
    }
}
