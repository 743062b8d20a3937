//! Fixed script controller for deterministic testing
//!
//! This controller plays a predetermined sequence of moves, making it ideal
//! for testing specific round scenarios. Once the script is exhausted, it
//! solves with an empty answer, which always fails and passes the turn.

use crate::core::Letter;
use crate::game::controller::{GameStateView, PlayerController, TurnChoice};
use crate::{Result, WheelError};
use serde::{Deserialize, Serialize};

/// One scripted decision
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScriptedMove {
    Action(TurnChoice),
    Letter(Letter),
    Solution(String),
}

/// A controller that follows a fixed script of moves
///
/// The script is serializable so a scenario can be stored next to a test.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixedScriptController {
    script: Vec<ScriptedMove>,
    /// Current position in the script
    pub current_index: usize,
}

impl FixedScriptController {
    pub fn new(script: Vec<ScriptedMove>) -> Self {
        FixedScriptController {
            script,
            current_index: 0,
        }
    }

    /// Build a script from words
    ///
    /// `spin`, `solve` and `vowel` are actions, single letters are letter
    /// guesses, and the word after `solve` is always the solution.
    ///
    /// ```
    /// use wheel_spin::game::FixedScriptController;
    ///
    /// let controller = FixedScriptController::from_words(&[
    ///     "spin", "R", "vowel", "O", "solve", "PYTHON PROGRAMMING",
    /// ]).unwrap();
    /// assert_eq!(controller.remaining(), 6);
    /// ```
    pub fn from_words(words: &[&str]) -> Result<Self> {
        let mut script = Vec::with_capacity(words.len());
        for word in words {
            let step = if script.last() == Some(&ScriptedMove::Action(TurnChoice::Solve)) {
                ScriptedMove::Solution(word.to_string())
            } else {
                match word.to_lowercase().as_str() {
                    "spin" => ScriptedMove::Action(TurnChoice::Spin),
                    "solve" => ScriptedMove::Action(TurnChoice::Solve),
                    "vowel" => ScriptedMove::Action(TurnChoice::Vowel),
                    _ => ScriptedMove::Letter(Letter::from_str_single(word).ok_or_else(|| {
                        WheelError::InvalidSetup(format!("script word {word:?} is not a move"))
                    })?),
                }
            };
            script.push(step);
        }
        Ok(Self::new(script))
    }

    /// Moves not yet played
    pub fn remaining(&self) -> usize {
        self.script.len().saturating_sub(self.current_index)
    }

    fn next_move(&mut self) -> Option<ScriptedMove> {
        let step = self.script.get(self.current_index).cloned();
        if step.is_some() {
            self.current_index += 1;
        }
        step
    }

    fn mismatch(&self, wanted: &str, got: &ScriptedMove) -> WheelError {
        WheelError::InvalidAction(format!(
            "script step {} is {got:?}, expected {wanted}",
            self.current_index
        ))
    }

    fn next_letter(&mut self) -> Result<Letter> {
        match self.next_move() {
            Some(ScriptedMove::Letter(letter)) => Ok(letter),
            Some(other) => Err(self.mismatch("a letter", &other)),
            None => Err(WheelError::InvalidAction("script exhausted".to_string())),
        }
    }
}

impl PlayerController for FixedScriptController {
    fn choose_action(&mut self, view: &GameStateView, menu: &[TurnChoice]) -> Result<TurnChoice> {
        let choice = match self.next_move() {
            Some(ScriptedMove::Action(choice)) => choice,
            Some(other) => return Err(self.mismatch("an action", &other)),
            None => TurnChoice::Solve,
        };
        view.logger().controller_choice(
            "SCRIPT",
            &format!(
                "{} chose {choice} (step {} of {})",
                view.active_player().name,
                self.current_index,
                self.script.len()
            ),
        );
        debug_assert!(!menu.is_empty());
        Ok(choice)
    }

    fn choose_vowel(&mut self, _view: &GameStateView) -> Result<Letter> {
        self.next_letter()
    }

    fn choose_consonant(&mut self, _view: &GameStateView) -> Result<Letter> {
        self.next_letter()
    }

    fn choose_solution(&mut self, _view: &GameStateView) -> Result<String> {
        match self.next_move() {
            Some(ScriptedMove::Solution(solution)) => Ok(solution),
            Some(other) => Err(self.mismatch("a solution", &other)),
            None => Ok(String::new()),
        }
    }
}
