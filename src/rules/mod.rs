//! Rules engine for the word-grouping puzzle.
//!
//! `GameEngine` defines:
//! - How a game is dealt
//! - How each action modifies state
//! - Win/loss conditions
//!
//! Nothing else in the crate mutates a `GameState`.

pub mod engine;

pub use engine::{GameEngine, GameResult};
