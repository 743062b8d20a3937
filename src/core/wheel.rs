//! The wheel and its wedges

use crate::core::{Cash, Prize};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// What landing on a wedge does
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WedgeKind {
    /// Pays this much per occurrence of the called consonant
    Cash(Cash),
    /// Awards the prize if the called consonant is in the puzzle
    Trip(Prize),
    /// Ends the turn
    Bankrupt,
    /// Ends the turn
    LoseTurn,
}

impl WedgeKind {
    /// True for wedges that end the turn before a letter is called
    pub fn ends_turn(&self) -> bool {
        matches!(self, WedgeKind::Bankrupt | WedgeKind::LoseTurn)
    }
}

/// One segment of the wheel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wedge {
    /// Text printed on the wedge, e.g. "$500" or "BANKRUPT"
    pub label: String,
    pub kind: WedgeKind,
}

impl Wedge {
    pub fn new(label: impl Into<String>, kind: WedgeKind) -> Self {
        Wedge {
            label: label.into(),
            kind,
        }
    }

    pub fn cash(value: Cash) -> Self {
        Wedge::new(format!("${value}"), WedgeKind::Cash(value))
    }

    pub fn bankrupt() -> Self {
        Wedge::new("BANKRUPT", WedgeKind::Bankrupt)
    }

    pub fn lose_turn() -> Self {
        Wedge::new("LOSE A TURN", WedgeKind::LoseTurn)
    }
}

impl fmt::Display for Wedge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label)
    }
}

/// The wheel: a fixed list of wedges loaded once at startup
///
/// Spins are a uniform draw over the list, so listing a wedge twice doubles
/// its chance of coming up. There is no separate weight table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wheel {
    wedges: Vec<Wedge>,
}

impl Wheel {
    pub fn new(wedges: Vec<Wedge>) -> Self {
        Wheel { wedges }
    }

    pub fn wedges(&self) -> &[Wedge] {
        &self.wedges
    }

    pub fn is_empty(&self) -> bool {
        self.wedges.is_empty()
    }

    /// Spin the wheel
    ///
    /// # Panics
    /// Panics if the wheel has no wedges; sessions refuse to start with an
    /// empty wheel.
    pub fn spin<R: Rng + ?Sized>(&self, rng: &mut R) -> &Wedge {
        self.wedges
            .choose(rng)
            .expect("wheel must have at least one wedge")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Rng;

    #[test]
    fn test_spin_two_wedges_is_even() {
        let wheel = Wheel::new(vec![Wedge::cash(500), Wedge::bankrupt()]);
        let mut rng = ChaCha12Rng::seed_from_u64(7);

        let draws = 10_000;
        let cash = (0..draws)
            .filter(|_| matches!(wheel.spin(&mut rng).kind, WedgeKind::Cash(500)))
            .count();

        let share = cash as f64 / draws as f64;
        assert!((share - 0.5).abs() < 0.03, "cash share was {share}");
    }

    #[test]
    fn test_duplicate_wedges_weight_the_spin() {
        let wheel = Wheel::new(vec![
            Wedge::cash(300),
            Wedge::cash(300),
            Wedge::cash(300),
            Wedge::lose_turn(),
        ]);
        let mut rng = ChaCha12Rng::seed_from_u64(99);

        let draws = 10_000;
        let lose = (0..draws)
            .filter(|_| wheel.spin(&mut rng).kind == WedgeKind::LoseTurn)
            .count();

        let share = lose as f64 / draws as f64;
        assert!((share - 0.25).abs() < 0.03, "lose-turn share was {share}");
    }

    #[test]
    fn test_ends_turn() {
        assert!(WedgeKind::Bankrupt.ends_turn());
        assert!(WedgeKind::LoseTurn.ends_turn());
        assert!(!WedgeKind::Cash(900).ends_turn());
        assert!(!WedgeKind::Trip(Prize::new("Trip to Hawaii", 5000)).ends_turn());
    }

    #[test]
    fn test_cash_label() {
        assert_eq!(Wedge::cash(650).to_string(), "$650");
    }
}
