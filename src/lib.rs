//! # funnections
//!
//! A word-grouping puzzle engine: sixteen tiles, four hidden groups of four,
//! and a limited number of mistakes.
//!
//! ## Design Principles
//!
//! 1. **Explicit State**: Every engine call takes the `GameState` it acts
//!    on. There is no global game.
//!
//! 2. **Rules in One Place**: Only `rules::GameEngine` mutates state.
//!    Views and request decoding never contain game rules.
//!
//! 3. **Terminal States Are Final**: Once a game is won or lost, only
//!    `View` is accepted.
//!
//! ## Architecture
//!
//! - **Serialized Sessions**: A `Session` guards one `GameState` with a
//!   mutex, so concurrent requests never interleave partial updates.
//!
//! - **Pure Views**: `ViewModel::from_state` turns state into a
//!   serializable struct; rendering technology is the caller's business.
//!
//! - **Seeded Shuffles**: Each game owns a ChaCha8 RNG, so a seed
//!   reproduces the deal and every later shuffle.
//!
//! ## Modules
//!
//! - `core`: Tiles, groups, puzzles, state, actions, RNG, configuration
//! - `rules`: The game engine
//! - `view`: View model and request decoding
//! - `session`: Locked sessions and the session registry
//! - `puzzles`: Built-in sample puzzle

pub mod core;
pub mod rules;
pub mod view;
pub mod session;
pub mod puzzles;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionOutcome, ActionRecord, IgnoreReason,
    GameConfig, GameRng,
    Group, GroupLabel, SolvedGroup, Tile, TileId,
    Puzzle, PuzzleError,
    GameState, GameStatus, Message,
};

pub use crate::rules::{GameEngine, GameResult};

pub use crate::view::{ActionRequest, RequestError, TileView, ViewModel};

pub use crate::session::{Response, Session, SessionId, SessionRegistry};
