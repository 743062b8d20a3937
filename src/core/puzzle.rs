//! Puzzle definitions

use crate::core::Category;
use serde::{Deserialize, Serialize};

/// An immutable puzzle: the category shown to players and the hidden answer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Puzzle {
    pub category: Category,
    pub answer: String,
}

impl Puzzle {
    pub fn new(category: impl Into<String>, answer: impl Into<String>) -> Self {
        Puzzle {
            category: Category::new(category),
            answer: answer.into(),
        }
    }

    /// Whether an answer is long enough to be dealt in a round
    ///
    /// Short or one- and two-word answers make for trivial rounds, so the
    /// loader keeps only answers longer than 12 characters with at least
    /// three words.
    pub fn is_playable(answer: &str) -> bool {
        answer.chars().count() > 12 && answer.split_whitespace().count() > 2
    }
}
