//! Tiles: the word cells of the puzzle grid.
//!
//! ## ID Layout
//!
//! Tile IDs are allocated once, at game creation:
//! - `1..=N` in the concatenation order of the puzzle's groups
//! - `0` is never a valid tile (it is the "unsolved" value on the wire)
//!
//! IDs stay with their tile for the whole session, no matter how often the
//! grid is shuffled.
//!
//! ## Usage
//!
//! ```
//! use funnections::core::{Tile, TileId, GroupLabel};
//!
//! let mut tile = Tile::new(TileId(3), "Bass");
//! assert!(!tile.is_solved());
//!
//! tile.solve(GroupLabel::new(1));
//! assert!(tile.is_solved());
//! assert_eq!(tile.group_id(), 1);
//! ```

use serde::{Deserialize, Serialize};

/// Unique identifier for a tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TileId(pub u32);

impl TileId {
    /// Create a tile ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for TileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Tile({})", self.0)
    }
}

/// Display label of a solved group.
///
/// Labels are handed out 1, 2, 3, ... in the order groups are solved,
/// independent of where the group sits in the answer key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct GroupLabel(pub u32);

impl GroupLabel {
    /// Create a group label. Labels start at 1.
    #[must_use]
    pub const fn new(label: u32) -> Self {
        Self(label)
    }

    /// Get the raw label value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

/// A single puzzle cell.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    /// Stable identifier.
    pub id: TileId,

    /// Display text.
    word: String,

    /// Part of the pending (unsubmitted) guess.
    pub selected: bool,

    /// Solve-order label, set once when the tile's group is found.
    group: Option<GroupLabel>,
}

impl Tile {
    /// Create an unsolved, unselected tile.
    pub fn new(id: TileId, word: impl Into<String>) -> Self {
        Self {
            id,
            word: word.into(),
            selected: false,
            group: None,
        }
    }

    /// The tile's word.
    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }

    /// The group this tile was solved into, if any.
    #[must_use]
    pub fn group(&self) -> Option<GroupLabel> {
        self.group
    }

    /// Group label as rendered: 0 while unsolved.
    #[must_use]
    pub fn group_id(&self) -> u32 {
        self.group.map_or(0, GroupLabel::raw)
    }

    /// Check if this tile's group has been found.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.group.is_some()
    }

    /// Assign the tile to a solved group and drop it from the selection.
    ///
    /// A tile is solved at most once; later calls keep the first label.
    pub fn solve(&mut self, label: GroupLabel) {
        self.selected = false;
        if self.group.is_none() {
            self.group = Some(label);
        }
    }
}
