//! Interactive controller for the human contestant
//!
//! The engine puts the question on screen through the presenter; this
//! controller only collects and validates the answer.

use crate::core::Letter;
use crate::game::controller::{GameStateView, PlayerController, TurnChoice};
use crate::game::input::{presets, LineInput};
use crate::{Result, WheelError};
use std::io::{BufRead, Write};

/// A controller that asks a human for decisions through a [`LineInput`]
pub struct InteractiveController<R, W> {
    input: LineInput<R, W>,
}

impl InteractiveController<std::io::StdinLock<'static>, std::io::Stdout> {
    pub fn stdio() -> Self {
        InteractiveController::new(LineInput::stdio())
    }
}

impl<R: BufRead, W: Write> InteractiveController<R, W> {
    pub fn new(input: LineInput<R, W>) -> Self {
        InteractiveController { input }
    }

    fn read_letter(&mut self, vowel: bool) -> Result<Letter> {
        let validators = if vowel {
            presets::vowel()
        } else {
            presets::consonant()
        };
        let line = self.input.read(&validators)?;
        Letter::from_str_single(&line)
            .ok_or_else(|| WheelError::InvalidAction(format!("{line:?} is not a letter")))
    }
}

impl<R: BufRead, W: Write> PlayerController for InteractiveController<R, W> {
    fn choose_action(&mut self, view: &GameStateView, menu: &[TurnChoice]) -> Result<TurnChoice> {
        if let [only] = menu {
            return Ok(*only);
        }

        let line = self.input.read(&presets::choice(menu.iter().map(|c| c.word())))?;
        let lower = line.to_lowercase();
        let choice = menu
            .iter()
            .copied()
            .find(|c| lower.contains(c.word()))
            .ok_or_else(|| WheelError::InvalidAction(format!("{line:?} matches no choice")))?;

        view.logger()
            .controller_choice("HUMAN", &format!("{} chose {choice}", view.active_player().name));
        Ok(choice)
    }

    fn choose_vowel(&mut self, _view: &GameStateView) -> Result<Letter> {
        self.read_letter(true)
    }

    fn choose_consonant(&mut self, _view: &GameStateView) -> Result<Letter> {
        self.read_letter(false)
    }

    fn choose_solution(&mut self, _view: &GameStateView) -> Result<String> {
        self.input.read(&presets::solution())
    }
}
