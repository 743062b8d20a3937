//! Player representation

use crate::core::{Cash, PlayerName};
use serde::{Deserialize, Serialize};

/// A prize that can be won from a trip wedge
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Prize {
    pub name: String,
    pub value: Cash,
}

impl Prize {
    pub fn new(name: impl Into<String>, value: Cash) -> Self {
        Prize {
            name: name.into(),
            value,
        }
    }
}

/// Profile a computer contestant is created from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    pub name: String,
    pub bio: String,
}

impl Character {
    pub fn new(name: impl Into<String>, bio: impl Into<String>) -> Self {
        Character {
            name: name.into(),
            bio: bio.into(),
        }
    }
}

/// Who is sitting in a seat (display only; decisions live in controllers)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerKind {
    Human,
    Computer { difficulty: u8 },
}

/// Represents a contestant and their winnings
///
/// Winnings come in two layers. Round cash and prizes accumulate while a
/// round is being played; totals only change when a round is won.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub name: PlayerName,
    pub bio: String,
    pub kind: PlayerKind,
    total_cash: Cash,
    total_prizes: Vec<Prize>,
    round_cash: Cash,
    round_prizes: Vec<Prize>,
}

impl Player {
    pub fn new(name: impl Into<PlayerName>, bio: impl Into<String>, kind: PlayerKind) -> Self {
        Player {
            name: name.into(),
            bio: bio.into(),
            kind,
            total_cash: 0,
            total_prizes: Vec::new(),
            round_cash: 0,
            round_prizes: Vec::new(),
        }
    }

    pub fn human(name: impl Into<PlayerName>, bio: impl Into<String>) -> Self {
        Player::new(name, bio, PlayerKind::Human)
    }

    pub fn computer(character: &Character, difficulty: u8) -> Self {
        Player::new(
            character.name.as_str(),
            character.bio.as_str(),
            PlayerKind::Computer { difficulty },
        )
    }

    pub fn is_human(&self) -> bool {
        self.kind == PlayerKind::Human
    }

    pub fn total_cash(&self) -> Cash {
        self.total_cash
    }

    pub fn total_prizes(&self) -> &[Prize] {
        &self.total_prizes
    }

    pub fn round_cash(&self) -> Cash {
        self.round_cash
    }

    pub fn round_prizes(&self) -> &[Prize] {
        &self.round_prizes
    }

    /// Banked cash plus the value of banked prizes (excludes the current round)
    pub fn total_score(&self) -> Cash {
        self.total_cash + self.total_prizes.iter().map(|p| p.value).sum::<Cash>()
    }

    /// Round cash plus the value of prizes won this round
    pub fn round_score(&self) -> Cash {
        self.round_cash + self.round_prizes.iter().map(|p| p.value).sum::<Cash>()
    }

    pub fn add_cash(&mut self, amount: Cash) {
        self.round_cash += amount;
    }

    /// Pay for something out of round cash (the vowel fee)
    pub fn subtract_cash(&mut self, amount: Cash) {
        self.round_cash -= amount;
    }

    pub fn add_prize(&mut self, prize: Prize) {
        self.round_prizes.push(prize);
    }

    /// Settle the round
    ///
    /// A winner banks round cash and prizes into totals. Everyone's round
    /// cash and prizes are cleared afterwards, win or lose.
    pub fn end_round_update(&mut self, did_win: bool) {
        if did_win {
            self.total_cash += self.round_cash;
            self.total_prizes.append(&mut self.round_prizes);
        }
        self.round_cash = 0;
        self.round_prizes.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_creation() {
        let player = Player::human("Alice", "From Ohio");
        assert_eq!(player.name.as_str(), "Alice");
        assert!(player.is_human());
        assert_eq!(player.total_cash(), 0);
        assert_eq!(player.round_cash(), 0);

        let character = Character::new("Robo", "A friendly machine");
        let computer = Player::computer(&character, 7);
        assert_eq!(computer.kind, PlayerKind::Computer { difficulty: 7 });
        assert!(!computer.is_human());
    }

    #[test]
    fn test_losing_round_discards_winnings() {
        let mut player = Player::human("Bob", "");
        player.add_cash(900);
        player.add_prize(Prize::new("Trip to Paris", 4000));
        player.end_round_update(true);

        player.add_cash(1200);
        player.add_prize(Prize::new("Trip to Rome", 3500));
        player.end_round_update(false);

        assert_eq!(player.round_cash(), 0);
        assert!(player.round_prizes().is_empty());
        assert_eq!(player.total_cash(), 900);
        assert_eq!(player.total_prizes(), &[Prize::new("Trip to Paris", 4000)]);
    }

    #[test]
    fn test_winning_round_banks_winnings() {
        let mut player = Player::human("Carol", "");
        player.add_cash(700);
        player.subtract_cash(250);
        player.add_prize(Prize::new("Trip to Tokyo", 6000));
        assert_eq!(player.round_score(), 6450);

        player.end_round_update(true);

        assert_eq!(player.total_cash(), 450);
        assert_eq!(player.total_score(), 6450);
        assert_eq!(player.round_cash(), 0);
        assert!(player.round_prizes().is_empty());
        assert_eq!(player.round_score(), 0);
    }
}
