//! Puzzle definitions: the answer key a game is played against.
//!
//! A `Puzzle` is validated against a `GameConfig` when it is built, so the
//! engine can assume a well-formed partition of words into groups.
//!
//! ## JSON format
//!
//! ```json
//! {
//!   "date": "March 3, 2025",
//!   "groups": [["Bass", "Pike", "Sole", "Perch"], ...]
//! }
//! ```
//!
//! A puzzle without a date is labelled with today's local date, formatted
//! like `June 1, 2024`.

use chrono::{Local, NaiveDate};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::config::GameConfig;
use super::group::{fold_word, Group};

/// `strftime` pattern of date labels.
pub const DATE_FORMAT: &str = "%B %-d, %Y";

/// Format a calendar date as a header label.
#[must_use]
pub fn date_label(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Today's label in local time.
#[must_use]
pub fn today_label() -> String {
    date_label(Local::now().date_naive())
}

/// Reasons a puzzle definition is rejected.
#[derive(Debug, Error)]
pub enum PuzzleError {
    #[error("expected {expected} groups, found {found}")]
    GroupCount { expected: usize, found: usize },

    #[error("group {group} has {found} words, expected {expected}")]
    GroupSize {
        group: usize,
        expected: usize,
        found: usize,
    },

    #[error("group {group} contains an empty word")]
    EmptyWord { group: usize },

    #[error("word {word:?} appears more than once")]
    DuplicateWord { word: String },

    #[error("invalid puzzle JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to read puzzle: {0}")]
    Io(#[from] std::io::Error),
}

/// On-disk shape of a puzzle, before validation.
#[derive(Debug, Deserialize)]
struct PuzzleFile {
    #[serde(default)]
    date: Option<String>,
    groups: Vec<Vec<String>>,
}

/// A validated puzzle.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Puzzle {
    groups: Vec<Group>,
    date: Option<String>,
}

impl Puzzle {
    /// Build and validate a puzzle.
    ///
    /// Words are compared case-insensitively; the same word in two places
    /// would make the answer ambiguous, so it is rejected.
    pub fn new(config: &GameConfig, groups: Vec<Group>) -> Result<Self, PuzzleError> {
        if groups.len() != config.group_count {
            return Err(PuzzleError::GroupCount {
                expected: config.group_count,
                found: groups.len(),
            });
        }

        let mut seen = FxHashSet::default();
        for (index, group) in groups.iter().enumerate() {
            if group.len() != config.group_size {
                return Err(PuzzleError::GroupSize {
                    group: index,
                    expected: config.group_size,
                    found: group.len(),
                });
            }
            for word in group.words() {
                if word.trim().is_empty() {
                    return Err(PuzzleError::EmptyWord { group: index });
                }
                if !seen.insert(fold_word(word)) {
                    return Err(PuzzleError::DuplicateWord { word: word.clone() });
                }
            }
        }

        Ok(Self { groups, date: None })
    }

    /// Parse and validate a puzzle from JSON.
    pub fn from_json(config: &GameConfig, json: &str) -> Result<Self, PuzzleError> {
        let file: PuzzleFile = serde_json::from_str(json)?;
        let groups = file.groups.into_iter().map(Group::new).collect();
        let puzzle = Self::new(config, groups)?;
        Ok(match file.date {
            Some(date) => puzzle.with_date(date),
            None => puzzle,
        })
    }

    /// Read, parse and validate a puzzle file.
    pub fn load(
        config: &GameConfig,
        path: impl AsRef<std::path::Path>,
    ) -> Result<Self, PuzzleError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(config, &json)
    }

    /// Attach a date label.
    #[must_use]
    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    /// The answer key.
    #[must_use]
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    /// Date label carried by the puzzle, if any.
    #[must_use]
    pub fn date(&self) -> Option<&str> {
        self.date.as_deref()
    }

    /// The puzzle's own date label, or today's when it has none.
    #[must_use]
    pub fn date_or_today(&self) -> String {
        self.date.clone().unwrap_or_else(today_label)
    }
}
