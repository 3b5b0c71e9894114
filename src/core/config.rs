//! Game configuration.
//!
//! The engine never hardcodes the grid shape or the mistake budget; the
//! classic game is four groups of four with four mistakes, which is what
//! `GameConfig::default()` gives you.

use serde::{Deserialize, Serialize};

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Incorrect submissions allowed before the game is lost.
    pub mistake_budget: u32,

    /// Number of groups in a puzzle.
    pub group_count: usize,

    /// Words per group, which is also the required selection size.
    pub group_size: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            mistake_budget: Self::DEFAULT_MISTAKES,
            group_count: 4,
            group_size: 4,
        }
    }
}

impl GameConfig {
    /// Mistakes allowed in the classic game.
    pub const DEFAULT_MISTAKES: u32 = 4;

    /// Create the classic four-by-four configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the mistake budget.
    #[must_use]
    pub fn with_mistake_budget(mut self, budget: u32) -> Self {
        assert!(budget > 0, "Mistake budget must be at least 1");
        self.mistake_budget = budget;
        self
    }

    /// Set the grid shape.
    #[must_use]
    pub fn with_shape(mut self, group_count: usize, group_size: usize) -> Self {
        assert!(group_count > 0, "Must have at least 1 group");
        assert!(group_size > 0, "Groups must have at least 1 word");
        self.group_count = group_count;
        self.group_size = group_size;
        self
    }

    /// Total number of tiles on the grid.
    #[must_use]
    pub fn tile_count(&self) -> usize {
        self.group_count * self.group_size
    }
}
