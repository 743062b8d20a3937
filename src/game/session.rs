//! Game session: three players, the current board, and the turn pointer
//!
//! The session outlives every round. It deals a fresh board, hands itself to
//! a [`RoundEngine`] for the round, and keeps the turn pointer where the
//! round left it, so the winner of one round opens the next.

use crate::core::{Board, Cash, Character, Player, PlayerKind, Prize, Puzzle, Wheel};
use crate::game::config::GameConfig;
use crate::game::controller::GameStateView;
use crate::game::dialogue::{Cue, LineArgs, Speech};
use crate::game::logger::GameLogger;
use crate::game::presenter::Presenter;
use crate::game::round::{RoundEngine, RoundPhase, RoundResult, Seats};
use crate::{Result, WheelError};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha12Rng;
use serde::{Deserialize, Serialize};

/// Seats at the table
pub const PLAYER_COUNT: usize = 3;

/// Build `count` computer players from a shuffled character pool
pub fn create_computer_players<R: Rng + ?Sized>(
    characters: &[Character],
    count: usize,
    difficulty: u8,
    rng: &mut R,
) -> Result<Vec<Player>> {
    if characters.len() < count {
        return Err(WheelError::InvalidSetup(format!(
            "need {count} characters for computer players, found {}",
            characters.len()
        )));
    }
    let mut pool: Vec<&Character> = characters.iter().collect();
    pool.shuffle(rng);
    Ok(pool
        .into_iter()
        .take(count)
        .map(|c| Player::computer(c, difficulty))
        .collect())
}

/// Final standings for one player
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSummary {
    pub name: String,
    pub kind: PlayerKind,
    pub total_cash: Cash,
    pub prizes: Vec<Prize>,
    pub total_score: Cash,
    pub rounds_won: u32,
}

/// Result of a whole game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSummary {
    pub rounds_played: u32,
    pub players: Vec<PlayerSummary>,
    /// Seat with the highest total score; None on a tie for first
    pub leader: Option<usize>,
}

pub struct GameSession {
    pub(crate) players: [Player; PLAYER_COUNT],
    pub(crate) board: Board,
    /// Seat whose turn it is, always below `PLAYER_COUNT`
    pub(crate) turn: usize,
    pub(crate) round: u32,
    pub(crate) round_active: bool,
    pub(crate) phase: RoundPhase,
    pub(crate) puzzles: Vec<Puzzle>,
    pub(crate) wheel: Wheel,
    pub(crate) config: GameConfig,
    pub(crate) rng: ChaCha12Rng,
    pub(crate) logger: GameLogger,
    rounds_won: [u32; PLAYER_COUNT],
}

impl GameSession {
    /// Create a session; seat order follows `players`
    ///
    /// The RNG starts from a fixed seed; call [`GameSession::seed_rng`] for a
    /// different (or random) game.
    pub fn new(
        players: Vec<Player>,
        puzzles: Vec<Puzzle>,
        wheel: Wheel,
        config: GameConfig,
    ) -> Result<Self> {
        let players: [Player; PLAYER_COUNT] = players.try_into().map_err(|p: Vec<Player>| {
            WheelError::InvalidSetup(format!("expected {PLAYER_COUNT} players, got {}", p.len()))
        })?;
        if puzzles.is_empty() {
            return Err(WheelError::InvalidSetup("no puzzles to play".to_string()));
        }
        if wheel.is_empty() {
            return Err(WheelError::InvalidSetup("the wheel has no wedges".to_string()));
        }

        Ok(GameSession {
            players,
            board: Board::empty(),
            turn: 0,
            round: 0,
            round_active: false,
            phase: RoundPhase::default(),
            puzzles,
            wheel,
            config,
            rng: ChaCha12Rng::seed_from_u64(0),
            logger: GameLogger::new(),
            rounds_won: [0; PLAYER_COUNT],
        })
    }

    /// Set the RNG seed for deterministic games
    ///
    /// The seed drives puzzle picks, wheel spins and host lines.
    pub fn seed_rng(&mut self, seed: u64) {
        self.rng = ChaCha12Rng::seed_from_u64(seed);
    }

    /// Seed the RNG from the operating system
    pub fn seed_from_entropy(&mut self) {
        self.rng = ChaCha12Rng::from_entropy();
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player(&self, seat: usize) -> &Player {
        &self.players[seat]
    }

    pub fn player_mut(&mut self, seat: usize) -> &mut Player {
        &mut self.players[seat]
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn wheel(&self) -> &Wheel {
        &self.wheel
    }

    pub fn turn(&self) -> usize {
        self.turn
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn is_round_active(&self) -> bool {
        self.round_active
    }

    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn logger(&self) -> &GameLogger {
        &self.logger
    }

    pub fn logger_mut(&mut self) -> &mut GameLogger {
        &mut self.logger
    }

    /// Rounds won so far, by seat
    pub fn rounds_won(&self) -> &[u32; PLAYER_COUNT] {
        &self.rounds_won
    }

    pub fn view(&self) -> GameStateView<'_> {
        GameStateView::new(self)
    }

    /// Advance the turn pointer to the next seat
    pub fn next_player(&mut self) {
        self.turn = (self.turn + 1) % PLAYER_COUNT;
    }

    /// Put a specific puzzle on a fresh board
    pub fn deal(&mut self, puzzle: &Puzzle) {
        self.board = Board::new(puzzle);
        self.phase = RoundPhase::AwaitingChoice;
    }

    /// Pick a puzzle at random and deal it as the next round
    pub fn new_round(&mut self) -> Result<()> {
        let puzzle = self
            .puzzles
            .choose(&mut self.rng)
            .cloned()
            .ok_or_else(|| WheelError::InvalidSetup("no puzzles to play".to_string()))?;
        self.round += 1;
        self.deal(&puzzle);
        self.logger.verbose(&format!(
            "Round {} puzzle: {} ({})",
            self.round,
            self.board.answer(),
            self.board.category()
        ));
        Ok(())
    }

    /// Scoreboard switches to round cash
    pub fn start_round(&mut self) {
        self.round_active = true;
    }

    /// Scoreboard switches back to totals
    pub fn end_round(&mut self) {
        self.round_active = false;
    }

    fn say(&self, presenter: &mut dyn Presenter, speech: Speech) -> Result<()> {
        presenter.render(&self.view(), &speech)
    }

    /// Deal and play one round to completion
    pub fn play_round(
        &mut self,
        seats: &mut Seats<'_>,
        presenter: &mut dyn Presenter,
    ) -> Result<RoundResult> {
        self.new_round()?;
        self.start_round();

        self.logger.normal(&format!(
            "Round {}: {} opens, category {}",
            self.round,
            self.players[self.turn].name,
            self.board.category()
        ));
        let intro = format!(
            "Welcome to round {}! The category is {}. {}, you're up first.",
            self.round,
            self.board.category(),
            self.players[self.turn].name
        );
        self.say(presenter, Speech::host(intro))?;

        let result = RoundEngine::new(self).run_round(seats, presenter)?;
        self.end_round();

        match result.winner {
            Some(seat) => {
                self.rounds_won[seat] += 1;
                let winner = &self.players[seat];
                self.logger.minimal(&format!(
                    "Round {}: {} wins ${} (total ${})",
                    self.round,
                    winner.name,
                    result.banked,
                    winner.total_score()
                ));
                let args = LineArgs {
                    name: Some(winner.name.to_string()),
                    cash: Some(winner.total_score()),
                    ..Default::default()
                };
                let line = Cue::RoundWinner.line(&mut self.rng, &args);
                self.say(presenter, Speech::host(line))?;
            }
            None => {
                self.logger.minimal(&format!(
                    "Round {}: no winner after {} turns",
                    self.round, result.turns
                ));
                let text = format!("Nobody got it! The answer was {}.", self.board.answer());
                self.say(presenter, Speech::host(text))?;
            }
        }

        Ok(result)
    }

    /// Play `rounds` rounds and report the standings
    pub fn play_game(
        &mut self,
        rounds: u32,
        seats: &mut Seats<'_>,
        presenter: &mut dyn Presenter,
    ) -> Result<GameSummary> {
        for _ in 0..rounds {
            self.play_round(seats, presenter)?;
        }

        let summary = self.summary();
        for player in &summary.players {
            self.logger.minimal(&format!(
                "{}: ${} cash, {} prize(s), score ${}, {} round(s) won",
                player.name,
                player.total_cash,
                player.prizes.len(),
                player.total_score,
                player.rounds_won
            ));
        }
        let closing = match summary.leader {
            Some(seat) => format!(
                "That's the game! {} wins with ${}.",
                self.players[seat].name,
                self.players[seat].total_score()
            ),
            None => "That's the game! It ends in a tie.".to_string(),
        };
        self.logger.minimal(&closing);
        self.say(presenter, Speech::host(closing))?;

        Ok(summary)
    }

    /// Standings as of now
    pub fn summary(&self) -> GameSummary {
        let players: Vec<PlayerSummary> = self
            .players
            .iter()
            .zip(self.rounds_won)
            .map(|(p, rounds_won)| PlayerSummary {
                name: p.name.to_string(),
                kind: p.kind,
                total_cash: p.total_cash(),
                prizes: p.total_prizes().to_vec(),
                total_score: p.total_score(),
                rounds_won,
            })
            .collect();

        let best = players.iter().map(|p| p.total_score).max().unwrap_or(0);
        let mut leaders = players
            .iter()
            .enumerate()
            .filter(|(_, p)| p.total_score == best);
        let leader = match (leaders.next(), leaders.next()) {
            (Some((seat, _)), None) => Some(seat),
            _ => None,
        };

        GameSummary {
            rounds_played: self.round,
            players,
            leader,
        }
    }
}

impl std::fmt::Debug for GameSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameSession")
            .field("players", &self.players)
            .field("board", &self.board.masked())
            .field("turn", &self.turn)
            .field("round", &self.round)
            .field("phase", &self.phase)
            .finish()
    }
}
