//! Computer contestant
//!
//! Decisions are a function of the visible board plus a seeded RNG, so a
//! seeded game replays identically. Difficulty (1-10) biases letter picks
//! towards common letters and makes the computer more willing to name the
//! real answer once enough of it is showing.

use crate::core::{Letter, HIDDEN_GLYPH};
use crate::game::controller::{GameStateView, PlayerController, TurnChoice};
use crate::{Result, WheelError};
use rand::seq::IteratorRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha12Rng;

pub const MIN_DIFFICULTY: u8 = 1;
pub const MAX_DIFFICULTY: u8 = 10;

pub struct ComputerController {
    difficulty: u8,
    rng: ChaCha12Rng,
}

impl ComputerController {
    /// Create a computer seeded from entropy
    pub fn new(difficulty: u8) -> Self {
        Self::with_rng(difficulty, ChaCha12Rng::from_entropy())
    }

    /// Create a computer with a deterministic seed
    pub fn with_seed(difficulty: u8, seed: u64) -> Self {
        Self::with_rng(difficulty, ChaCha12Rng::seed_from_u64(seed))
    }

    fn with_rng(difficulty: u8, rng: ChaCha12Rng) -> Self {
        ComputerController {
            difficulty: difficulty.clamp(MIN_DIFFICULTY, MAX_DIFFICULTY),
            rng,
        }
    }

    pub fn difficulty(&self) -> u8 {
        self.difficulty
    }

    /// Pick an uncalled letter out of `class`
    ///
    /// Skilled players lean on letter frequency; the rest guess at random.
    /// With nothing left in the class the first letter is returned anyway,
    /// which the engine treats as a repeat call.
    fn pick_letter(&mut self, view: &GameStateView, class: fn(Letter) -> bool) -> Result<Letter> {
        let board = view.board();
        let fresh = |l: &Letter| class(*l) && !board.was_guessed(*l);

        let smart = self.rng.gen_bool(f64::from(self.difficulty) / 10.0);
        let pick = if smart {
            Letter::by_frequency().find(fresh)
        } else {
            Letter::all().filter(fresh).choose(&mut self.rng)
        };

        pick.or_else(|| Letter::all().find(|l| class(*l)))
            .ok_or_else(|| WheelError::InvalidAction("no letter of the requested kind".into()))
    }

    /// Most common letter not yet on the board, used to fill blanks
    fn best_guess(view: &GameStateView) -> char {
        Letter::by_frequency()
            .find(|l| !view.board().was_guessed(*l))
            .map_or('E', Letter::as_char)
    }

    fn log(&self, view: &GameStateView, message: &str) {
        view.logger().controller_choice(
            "COMPUTER",
            &format!("{} {}", view.active_player().name, message),
        );
    }
}

impl PlayerController for ComputerController {
    fn choose_action(&mut self, view: &GameStateView, menu: &[TurnChoice]) -> Result<TurnChoice> {
        let board = view.board();
        let config = view.config();
        let offered = |choice| menu.contains(&choice);

        let ready_to_solve = board.solved_fraction() > config.solve_threshold;
        let choice = if ready_to_solve && offered(TurnChoice::Solve) {
            TurnChoice::Solve
        } else if offered(TurnChoice::Vowel) && self.rng.gen::<f64>() > 1.0 - config.vowel_chance {
            TurnChoice::Vowel
        } else if offered(TurnChoice::Spin) && board.consonants_remain() {
            TurnChoice::Spin
        } else {
            TurnChoice::Solve
        };

        self.log(
            view,
            &format!(
                "chose {} out of {} (solved {:.0}%)",
                choice,
                menu.iter().map(|c| c.word()).collect::<Vec<_>>().join("/"),
                board.solved_fraction() * 100.0
            ),
        );
        Ok(choice)
    }

    fn choose_vowel(&mut self, view: &GameStateView) -> Result<Letter> {
        let letter = self.pick_letter(view, Letter::is_vowel)?;
        self.log(view, &format!("bought vowel {letter}"));
        Ok(letter)
    }

    fn choose_consonant(&mut self, view: &GameStateView) -> Result<Letter> {
        let letter = self.pick_letter(view, Letter::is_consonant)?;
        self.log(view, &format!("called consonant {letter}"));
        Ok(letter)
    }

    fn choose_solution(&mut self, view: &GameStateView) -> Result<String> {
        let board = view.board();
        let confidence = board.solved_fraction() * (0.5 + f64::from(self.difficulty) / 20.0);

        let solution = if self.rng.gen::<f64>() < confidence {
            board.answer().to_string()
        } else {
            let fill = Self::best_guess(view);
            board
                .masked()
                .chars()
                .map(|c| if c == HIDDEN_GLYPH { fill } else { c })
                .collect()
        };

        self.log(view, &format!("tried to solve with {solution:?}"));
        Ok(solution)
    }
}
