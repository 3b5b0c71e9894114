//! Render-ready view of a game.
//!
//! `ViewModel::from_state` is a pure function of the `GameState`; renderers
//! only ever see this struct, never the state itself.

use serde::Serialize;

use crate::core::state::{GameState, GameStatus};
use crate::core::tile::{Tile, TileId};

/// One tile as a renderer needs it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TileView {
    pub id: TileId,
    pub word: String,
    pub selected: bool,
    /// Solve-order label, 0 while unsolved.
    pub group_id: u32,
    /// CSS classes: `tile`, plus `selected` or `group-N`.
    pub class: String,
    /// Solved tiles take no clicks.
    pub interactive: bool,
}

impl TileView {
    fn from_tile(tile: &Tile) -> Self {
        let mut class = String::from("tile");
        if tile.selected {
            class.push_str(" selected");
        }
        if let Some(label) = tile.group() {
            class.push_str(&format!(" group-{}", label.raw()));
        }

        Self {
            id: tile.id,
            word: tile.word().to_owned(),
            selected: tile.selected,
            group_id: tile.group_id(),
            class,
            interactive: !tile.is_solved(),
        }
    }
}

/// A found group, for the solved banner.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SolvedGroupView {
    pub label: u32,
    pub words: Vec<String>,
}

/// Everything a renderer needs to draw the game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ViewModel {
    pub date: String,
    pub message: String,
    pub tiles: Vec<TileView>,
    pub mistakes_left: u32,
    /// Number of "mistakes remaining" dots to draw.
    pub mistake_indicators: usize,
    pub selected_count: usize,
    pub solved_groups: Vec<SolvedGroupView>,
    pub status: GameStatus,
}

impl ViewModel {
    /// Build the view of a game.
    #[must_use]
    pub fn from_state(state: &GameState) -> Self {
        Self {
            date: state.date().to_owned(),
            message: state.message().to_string(),
            tiles: state.tiles().iter().map(TileView::from_tile).collect(),
            mistakes_left: state.mistakes_left(),
            mistake_indicators: state.mistakes_left() as usize,
            selected_count: state.selected_count(),
            solved_groups: state
                .solved_groups()
                .iter()
                .map(|g| SolvedGroupView {
                    label: g.label.raw(),
                    words: g.words.to_vec(),
                })
                .collect(),
            status: state.status(),
        }
    }

    /// Check if the game has ended.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.status.is_terminal()
    }
}

impl std::fmt::Display for ViewModel {
    /// Plain-text rendering: header, message, grid rows, mistakes.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Fun-nections {}", self.date)?;
        writeln!(f, "{}", self.message)?;
        for group in &self.solved_groups {
            writeln!(f, "  [group {}] {}", group.label, group.words.join(", "))?;
        }

        let width = self.tiles.iter().map(|t| t.word.len()).max().unwrap_or(0);
        for row in self.tiles.chunks(4) {
            let cells: Vec<String> = row
                .iter()
                .map(|t| {
                    let mark = match (t.selected, t.group_id) {
                        (true, _) => "*".to_owned(),
                        (false, 0) => " ".to_owned(),
                        (false, label) => label.to_string(),
                    };
                    format!("{:>2}{} {:<width$}", t.id.raw(), mark, t.word, width = width)
                })
                .collect();
            writeln!(f, "  {}", cells.join(" | "))?;
        }

        write!(f, "Mistakes remaining: {}", "o ".repeat(self.mistake_indicators).trim_end())
    }
}
