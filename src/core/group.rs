//! Answer-key groups and their matching rules.
//!
//! A `Group` is an unordered multiset of words. Matching folds case on both
//! sides and compares sorted word lists, so `{a, B, c, D}` matches
//! `{A, B, C, D}` and repeated words must appear as many times on each side.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::tile::GroupLabel;

/// Word list sized for the common four-word group without heap allocation.
pub type Words = SmallVec<[String; 4]>;

/// Case-folded form of a word, used for all identity comparisons.
///
/// Only case is folded; surrounding whitespace is significant.
#[must_use]
pub fn fold_word(word: &str) -> String {
    word.to_lowercase()
}

/// One correct category in the answer key.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    words: Words,
}

impl Group {
    /// Create a group from its words.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    /// Words in answer-key order.
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Number of words in the group.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if the group has no words.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Sorted, case-folded words.
    fn key(&self) -> SmallVec<[String; 4]> {
        folded_key(self.words.iter().map(String::as_str))
    }

    /// Check whether a guess names exactly this group.
    ///
    /// Order is irrelevant; multiplicity is not.
    #[must_use]
    pub fn matches<'a>(&self, guess: impl IntoIterator<Item = &'a str>) -> bool {
        folded_key(guess) == self.key()
    }
}

fn folded_key<'a>(words: impl IntoIterator<Item = &'a str>) -> SmallVec<[String; 4]> {
    let mut key: SmallVec<[String; 4]> = words.into_iter().map(fold_word).collect();
    key.sort_unstable();
    key
}

/// A group the player has found.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolvedGroup {
    /// Solve-order label.
    pub label: GroupLabel,
    /// The matched words, in answer-key order.
    pub words: Words,
}
