//! Game rule constants

use crate::core::Cash;
use serde::{Deserialize, Serialize};

/// Rules and tuning knobs shared by the session, the round engine and
/// the computer contestants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Fee charged for a vowel; a player needs at least this much round
    /// cash for "buy a vowel" to be offered
    pub vowel_cost: Cash,

    /// Computers try to solve once more than this share of letters is shown
    pub solve_threshold: f64,

    /// Probability that a computer buys a vowel when one is offered
    pub vowel_chance: f64,

    /// Seconds a paced line stays up per nine characters of text
    pub dialogue_speed: f64,

    /// Stop a round with no winner after this many turn changes
    pub max_turns: Option<u32>,
}

impl GameConfig {
    pub fn with_max_turns(mut self, max_turns: u32) -> Self {
        self.max_turns = Some(max_turns);
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            vowel_cost: 250,
            solve_threshold: 0.75,
            vowel_chance: 0.4,
            dialogue_speed: 0.2,
            max_turns: None,
        }
    }
}
