//! Player controller trait and game state view
//!
//! This module defines the interface between the round engine and player
//! controllers (computer or human). The engine calls the controller when a
//! decision needs to be made, and the controller inspects a read-only view
//! of the session to make its choice.

use crate::core::{Board, Letter, Player};
use crate::game::config::GameConfig;
use crate::game::logger::GameLogger;
use crate::game::round::RoundPhase;
use crate::game::session::GameSession;
use crate::Result;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;

/// What a player can do at the start of an action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnChoice {
    Spin,
    Solve,
    Vowel,
}

impl TurnChoice {
    /// The word a player types to pick this choice
    pub fn word(self) -> &'static str {
        match self {
            TurnChoice::Spin => "spin",
            TurnChoice::Solve => "solve",
            TurnChoice::Vowel => "vowel",
        }
    }
}

impl fmt::Display for TurnChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.word())
    }
}

/// Choices offered for one action, in display order
pub type Menu = SmallVec<[TurnChoice; 3]>;

/// Read-only view of the session for controllers and presenters
///
/// This provides access to game information without allowing mutation.
pub struct GameStateView<'a> {
    session: &'a GameSession,
}

impl<'a> GameStateView<'a> {
    pub fn new(session: &'a GameSession) -> Self {
        GameStateView { session }
    }

    pub fn board(&self) -> &'a Board {
        &self.session.board
    }

    pub fn players(&self) -> &'a [Player] {
        &self.session.players
    }

    /// Seat whose turn it is
    pub fn active_seat(&self) -> usize {
        self.session.turn
    }

    pub fn active_player(&self) -> &'a Player {
        &self.session.players[self.session.turn]
    }

    /// Current round number, starting at 1 once the first round is dealt
    pub fn round(&self) -> u32 {
        self.session.round
    }

    /// True while a round is being played (the scoreboard shows round cash)
    pub fn round_active(&self) -> bool {
        self.session.round_active
    }

    pub fn phase(&self) -> RoundPhase {
        self.session.phase
    }

    pub fn config(&self) -> &'a GameConfig {
        &self.session.config
    }

    pub fn logger(&self) -> &'a GameLogger {
        &self.session.logger
    }
}

/// Player controller trait
///
/// Implement this trait to create computer players or connect to a UI.
/// The round engine calls these methods when decisions need to be made and
/// rejects answers outside what it asked for with
/// [`WheelError::InvalidAction`](crate::WheelError::InvalidAction).
pub trait PlayerController {
    /// Pick one of the offered choices
    fn choose_action(&mut self, view: &GameStateView, menu: &[TurnChoice]) -> Result<TurnChoice>;

    /// Name a vowel to buy (the fee is already paid)
    fn choose_vowel(&mut self, view: &GameStateView) -> Result<Letter>;

    /// Name a consonant after a cash or trip spin
    fn choose_consonant(&mut self, view: &GameStateView) -> Result<Letter>;

    /// Attempt to solve the puzzle
    fn choose_solution(&mut self, view: &GameStateView) -> Result<String>;

    /// Called once per round after winnings are settled
    fn on_round_end(&mut self, _view: &GameStateView, _won: bool) {}
}
