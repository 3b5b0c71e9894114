//! Core game types: tiles, groups, puzzles, state, actions, RNG, configuration.
//!
//! Nothing in here enforces rules; that is the job of `rules::GameEngine`.

pub mod tile;
pub mod group;
pub mod rng;
pub mod config;
pub mod puzzle;
pub mod action;
pub mod state;

pub use tile::{GroupLabel, Tile, TileId};
pub use group::{fold_word, Group, SolvedGroup, Words};
pub use rng::GameRng;
pub use config::GameConfig;
pub use puzzle::{date_label, today_label, Puzzle, PuzzleError, DATE_FORMAT};
pub use action::{Action, ActionOutcome, ActionRecord, IgnoreReason};
pub use state::{GameState, GameStatus, Message};
