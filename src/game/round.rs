//! Round engine
//!
//! Drives one round from a freshly dealt board to a winner. Each action by
//! the active player goes `AwaitingChoice -> Spinning | BuyingVowel | Solving
//! -> Resolving` and ends with a [`TurnOutcome`]: the same player goes
//! again, the turn passes to the next seat, or the puzzle is solved.
//!
//! Repeat letters, missing letters and wrong solutions are ordinary outcomes.
//! The error channel is reserved for I/O failures and controllers answering
//! something they were not asked for.

use crate::core::{Board, Cash, Letter, Player, Wedge, WedgeKind};
use crate::game::config::GameConfig;
use crate::game::controller::{GameStateView, Menu, PlayerController, TurnChoice};
use crate::game::dialogue::{Cue, LineArgs, Speech};
use crate::game::presenter::Presenter;
use crate::game::session::{GameSession, PLAYER_COUNT};
use crate::{Result, WheelError};
use serde::{Deserialize, Serialize};
use smallvec::smallvec;

/// One controller per seat, indexed like the session's players
pub type Seats<'c> = [&'c mut dyn PlayerController; PLAYER_COUNT];

/// Where the engine is within the active player's action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RoundPhase {
    #[default]
    AwaitingChoice,
    Spinning,
    BuyingVowel,
    Solving,
    Resolving,
    RoundOver,
}

/// Result of calling a letter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LetterOutcome {
    /// Already called this round
    Duplicate,
    /// Not in the puzzle
    Absent,
    /// Shown on the board `count` times
    Revealed { count: usize },
}

/// Result of a spin, before any letter is called
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpinOutcome {
    Bankrupt,
    LoseTurn,
    /// A cash or trip wedge; the player now calls a consonant
    Landed(Wedge),
}

/// What happens after one resolved action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    /// Same player acts again
    Continue,
    /// Turn moves to the next seat
    PassTurn,
    /// The active player solved the puzzle
    Solved,
}

/// Why a round ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundEndReason {
    /// The player in this seat solved the puzzle
    Solved(usize),
    /// `max_turns` turn passes went by without a solve
    TurnLimit,
}

/// Result of playing a round to completion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundResult {
    /// Seat of the winner (None if the turn limit was hit)
    pub winner: Option<usize>,
    /// Number of times the turn passed
    pub turns: u32,
    /// Round cash plus prize value the winner banked
    pub banked: Cash,
    pub end_reason: RoundEndReason,
}

/// Choices offered to `player` at the start of an action
///
/// With every letter showing only `solve` is left. Buying a vowel needs an
/// unbought vowel in the puzzle and at least the vowel fee in round cash.
pub fn build_menu(board: &Board, player: &Player, config: &GameConfig) -> Menu {
    if !board.letters_remain() {
        smallvec![TurnChoice::Solve]
    } else if board.vowels_remain() && player.round_cash() >= config.vowel_cost {
        smallvec![TurnChoice::Spin, TurnChoice::Solve, TurnChoice::Vowel]
    } else {
        smallvec![TurnChoice::Spin, TurnChoice::Solve]
    }
}

/// Question put to a human for the action menu
fn menu_prompt(name: &str, menu: &[TurnChoice]) -> String {
    let words: Vec<&str> = menu
        .iter()
        .map(|c| match c {
            TurnChoice::Vowel => "buy a vowel",
            other => other.word(),
        })
        .collect();
    let options = match words.as_slice() {
        [only] => only.to_string(),
        [first, second] => format!("{first} or {second}"),
        [init @ .., last] => format!("{}, or {last}", init.join(", ")),
        [] => String::new(),
    };
    format!("{name}, would you like to {options}?")
}

fn choice_cue(choice: TurnChoice) -> Cue {
    match choice {
        TurnChoice::Spin => Cue::Spin,
        TurnChoice::Solve => Cue::Solve,
        TurnChoice::Vowel => Cue::Vowel,
    }
}

/// Round engine
///
/// Borrows the session for the length of one round. The engine is the only
/// thing that mutates the board and the players while the round runs.
pub struct RoundEngine<'a> {
    pub session: &'a mut GameSession,
    turns_elapsed: u32,
}

impl<'a> RoundEngine<'a> {
    pub fn new(session: &'a mut GameSession) -> Self {
        RoundEngine {
            session,
            turns_elapsed: 0,
        }
    }

    pub fn turns_elapsed(&self) -> u32 {
        self.turns_elapsed
    }

    fn view(&self) -> GameStateView<'_> {
        GameStateView::new(&*self.session)
    }

    fn name(&self, seat: usize) -> String {
        self.session.players[seat].name.to_string()
    }

    fn say(&self, presenter: &mut dyn Presenter, speech: Speech) -> Result<()> {
        presenter.render(&self.view(), &speech)
    }

    fn host(&mut self, presenter: &mut dyn Presenter, cue: Cue, args: &LineArgs) -> Result<()> {
        let line = cue.line(&mut self.session.rng, args);
        self.say(presenter, Speech::host(line))
    }

    /// Ask the human a question; computers are never prompted
    fn prompt(&self, presenter: &mut dyn Presenter, seat: usize, text: String) -> Result<()> {
        if self.session.players[seat].is_human() {
            self.say(presenter, Speech::prompt(text))?;
        }
        Ok(())
    }

    /// Run the round until someone solves it or the turn limit is hit
    pub fn run_round(
        &mut self,
        seats: &mut Seats<'_>,
        presenter: &mut dyn Presenter,
    ) -> Result<RoundResult> {
        loop {
            if let Some(result) = self.run_action_once(seats, presenter)? {
                return Ok(result);
            }
        }
    }

    /// Run at most `actions` actions; `None` if the round is still going
    pub fn run_actions(
        &mut self,
        seats: &mut Seats<'_>,
        presenter: &mut dyn Presenter,
        actions: u32,
    ) -> Result<Option<RoundResult>> {
        for _ in 0..actions {
            if let Some(result) = self.run_action_once(seats, presenter)? {
                return Ok(Some(result));
            }
        }
        Ok(None)
    }

    fn run_action_once(
        &mut self,
        seats: &mut Seats<'_>,
        presenter: &mut dyn Presenter,
    ) -> Result<Option<RoundResult>> {
        let seat = self.session.turn;
        match self.take_action(&mut *seats[seat], presenter)? {
            TurnOutcome::Continue => Ok(None),
            TurnOutcome::Solved => self.finish(seats, RoundEndReason::Solved(seat)).map(Some),
            TurnOutcome::PassTurn => {
                self.turns_elapsed += 1;
                if let Some(max_turns) = self.session.config.max_turns {
                    if self.turns_elapsed >= max_turns {
                        self.session
                            .logger
                            .normal(&format!("Turn limit ({max_turns}) reached"));
                        return self.finish(seats, RoundEndReason::TurnLimit).map(Some);
                    }
                }
                self.session.next_player();
                let next = self.session.turn;
                self.session
                    .logger
                    .normal(&format!("Turn passes to {}", self.name(next)));
                let text = format!("{}, it's your turn.", self.name(next));
                self.say(presenter, Speech::host(text))?;
                Ok(None)
            }
        }
    }

    /// Let the active player take one action and resolve it
    pub fn take_action(
        &mut self,
        controller: &mut dyn PlayerController,
        presenter: &mut dyn Presenter,
    ) -> Result<TurnOutcome> {
        let seat = self.session.turn;
        self.session.phase = RoundPhase::AwaitingChoice;

        let menu = build_menu(
            &self.session.board,
            &self.session.players[seat],
            &self.session.config,
        );
        self.session.logger.verbose(&format!(
            "{} | {} | menu: {}",
            self.session.board.masked(),
            self.name(seat),
            menu.iter().map(|c| c.word()).collect::<Vec<_>>().join(", ")
        ));

        self.prompt(presenter, seat, menu_prompt(&self.name(seat), &menu))?;
        let choice = controller.choose_action(&self.view(), &menu)?;
        if !menu.contains(&choice) {
            return Err(WheelError::InvalidAction(format!(
                "{} chose {choice}, which was not offered",
                self.name(seat)
            )));
        }

        let line = choice_cue(choice).line(&mut self.session.rng, &LineArgs::default());
        self.say(presenter, Speech::new(self.name(seat), line))?;

        match choice {
            TurnChoice::Spin => self.spin(controller, presenter),
            TurnChoice::Vowel => self.buy_vowel(controller, presenter),
            TurnChoice::Solve => self.solve(controller, presenter),
        }
    }

    /// Spin the wheel and sort the wedge into turn-ending or letter-calling
    pub fn spin_wheel(&mut self) -> SpinOutcome {
        let wedge = self.session.wheel.spin(&mut self.session.rng);
        if !wedge.kind.ends_turn() {
            return SpinOutcome::Landed(wedge.clone());
        }
        match wedge.kind {
            WedgeKind::Bankrupt => SpinOutcome::Bankrupt,
            _ => SpinOutcome::LoseTurn,
        }
    }

    /// Call a letter against the board
    ///
    /// Absent letters are recorded too, so they count as called afterwards.
    pub fn guess_letter(&mut self, letter: Letter) -> LetterOutcome {
        let board = &mut self.session.board;
        if board.was_guessed(letter) {
            return LetterOutcome::Duplicate;
        }
        board.add_guess(letter);
        match board.letter_count(letter) {
            0 => LetterOutcome::Absent,
            count => LetterOutcome::Revealed { count },
        }
    }

    fn spin(
        &mut self,
        controller: &mut dyn PlayerController,
        presenter: &mut dyn Presenter,
    ) -> Result<TurnOutcome> {
        let seat = self.session.turn;
        self.session.phase = RoundPhase::Spinning;
        self.say(presenter, Speech::narration("*Spinning the wheel*"))?;

        let outcome = self.spin_wheel();
        let wedge = match outcome {
            SpinOutcome::Bankrupt => {
                self.session
                    .logger
                    .normal(&format!("{} spun BANKRUPT", self.name(seat)));
                self.host(presenter, Cue::Bankrupt, &LineArgs::default())?;
                return Ok(TurnOutcome::PassTurn);
            }
            SpinOutcome::LoseTurn => {
                self.session
                    .logger
                    .normal(&format!("{} spun LOSE A TURN", self.name(seat)));
                self.host(presenter, Cue::LoseTurn, &LineArgs::default())?;
                return Ok(TurnOutcome::PassTurn);
            }
            SpinOutcome::Landed(wedge) => wedge,
        };

        self.session
            .logger
            .normal(&format!("{} spun {}", self.name(seat), wedge.label));
        match &wedge.kind {
            WedgeKind::Trip(prize) => {
                let args = LineArgs {
                    prize: Some(prize.name.clone()),
                    ..Default::default()
                };
                self.host(presenter, Cue::Trip, &args)?;
            }
            _ => {
                let text = format!("You landed on {}.", wedge.label);
                self.say(presenter, Speech::host(text))?;
            }
        }

        self.prompt(presenter, seat, "Pick a consonant.".to_string())?;
        let letter = controller.choose_consonant(&self.view())?;
        if !letter.is_consonant() {
            return Err(WheelError::InvalidAction(format!(
                "{} called {letter} after a spin; vowels must be bought",
                self.name(seat)
            )));
        }
        let text = format!("Is there {} '{letter}'?", letter.article());
        self.say(presenter, Speech::new(self.name(seat), text))?;

        self.session.phase = RoundPhase::Resolving;
        let outcome = self.guess_letter(letter);
        self.announce_letter(presenter, letter, outcome)?;

        match outcome {
            LetterOutcome::Revealed { count } => {
                self.award(seat, &wedge, count);
                Ok(TurnOutcome::Continue)
            }
            LetterOutcome::Duplicate | LetterOutcome::Absent => Ok(TurnOutcome::PassTurn),
        }
    }

    /// Pay out a wedge for `count` copies of a called consonant
    fn award(&mut self, seat: usize, wedge: &Wedge, count: usize) {
        let player = &mut self.session.players[seat];
        match &wedge.kind {
            WedgeKind::Cash(value) => {
                let amount = value * count as Cash;
                player.add_cash(amount);
                self.session.logger.normal(&format!(
                    "{} earns ${amount} (round cash ${})",
                    player.name,
                    player.round_cash()
                ));
            }
            WedgeKind::Trip(prize) => {
                player.add_prize(prize.clone());
                self.session
                    .logger
                    .normal(&format!("{} wins {}", player.name, prize.name));
            }
            WedgeKind::Bankrupt | WedgeKind::LoseTurn => {}
        }
    }

    fn buy_vowel(
        &mut self,
        controller: &mut dyn PlayerController,
        presenter: &mut dyn Presenter,
    ) -> Result<TurnOutcome> {
        let seat = self.session.turn;
        self.session.phase = RoundPhase::BuyingVowel;

        // The fee is charged up front and kept whatever the vowel turns out to be
        let cost = self.session.config.vowel_cost;
        self.session.players[seat].subtract_cash(cost);
        self.session
            .logger
            .normal(&format!("{} pays ${cost} for a vowel", self.name(seat)));

        self.prompt(presenter, seat, "Which vowel would you like to buy?".to_string())?;
        let letter = controller.choose_vowel(&self.view())?;
        if !letter.is_vowel() {
            return Err(WheelError::InvalidAction(format!(
                "{} bought {letter}, which is not a vowel",
                self.name(seat)
            )));
        }
        let text = format!("I'd like {} '{letter}'.", letter.article());
        self.say(presenter, Speech::new(self.name(seat), text))?;

        self.session.phase = RoundPhase::Resolving;
        let outcome = self.guess_letter(letter);
        self.announce_letter(presenter, letter, outcome)?;

        Ok(match outcome {
            LetterOutcome::Revealed { .. } => TurnOutcome::Continue,
            LetterOutcome::Duplicate | LetterOutcome::Absent => TurnOutcome::PassTurn,
        })
    }

    fn solve(
        &mut self,
        controller: &mut dyn PlayerController,
        presenter: &mut dyn Presenter,
    ) -> Result<TurnOutcome> {
        let seat = self.session.turn;
        self.session.phase = RoundPhase::Solving;

        self.prompt(presenter, seat, "What's your answer?".to_string())?;
        let guess = controller.choose_solution(&self.view())?;
        self.say(presenter, Speech::new(self.name(seat), guess.clone()))?;

        self.session.phase = RoundPhase::Resolving;
        if self.session.board.check_solution(&guess) {
            self.session.board.reveal();
            self.session
                .logger
                .normal(&format!("{} solved {:?}", self.name(seat), self.session.board.answer()));
            self.host(presenter, Cue::CorrectSolve, &LineArgs::default())?;
            Ok(TurnOutcome::Solved)
        } else {
            self.session
                .logger
                .normal(&format!("{} failed to solve with {guess:?}", self.name(seat)));
            self.host(presenter, Cue::FailedSolve, &LineArgs::default())?;
            Ok(TurnOutcome::PassTurn)
        }
    }

    fn announce_letter(
        &mut self,
        presenter: &mut dyn Presenter,
        letter: Letter,
        outcome: LetterOutcome,
    ) -> Result<()> {
        let mut args = LineArgs::letter(letter.as_char());
        let cue = match outcome {
            LetterOutcome::Duplicate => Cue::DuplicateLetter,
            LetterOutcome::Absent => Cue::FailedGuess,
            LetterOutcome::Revealed { count: 1 } => Cue::CorrectGuessSingle,
            LetterOutcome::Revealed { count } => {
                args.count = Some(count);
                Cue::CorrectGuessMulti
            }
        };
        self.session.logger.normal(&format!(
            "{letter}: {outcome:?} -> {}",
            self.session.board.masked()
        ));
        self.host(presenter, cue, &args)
    }

    /// Settle winnings and tell every controller how the round went
    ///
    /// The winner banks first, then everyone else clears their round
    /// winnings in seat order.
    fn finish(&mut self, seats: &mut Seats<'_>, reason: RoundEndReason) -> Result<RoundResult> {
        self.session.phase = RoundPhase::RoundOver;

        let winner = match reason {
            RoundEndReason::Solved(seat) => Some(seat),
            RoundEndReason::TurnLimit => None,
        };

        let mut banked = 0;
        if let Some(seat) = winner {
            let player = &mut self.session.players[seat];
            banked = player.round_score();
            player.end_round_update(true);
        }
        for (seat, player) in self.session.players.iter_mut().enumerate() {
            if Some(seat) != winner {
                player.end_round_update(false);
            }
        }

        for (seat, controller) in seats.iter_mut().enumerate() {
            controller.on_round_end(&GameStateView::new(&*self.session), Some(seat) == winner);
        }

        Ok(RoundResult {
            winner,
            turns: self.turns_elapsed,
            banked,
            end_reason: reason,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Prize, Puzzle, Wheel};
    use crate::game::fixed_script_controller::FixedScriptController;
    use crate::game::presenter::NullPresenter;

    fn letter(c: char) -> Letter {
        Letter::new(c).unwrap()
    }

    fn session_with(answer: &str, wheel: Vec<Wedge>) -> GameSession {
        let puzzle = Puzzle::new("Phrase", answer);
        let mut session = GameSession::new(
            vec![
                Player::human("Ada", ""),
                Player::human("Bea", ""),
                Player::human("Cy", ""),
            ],
            vec![puzzle.clone()],
            Wheel::new(wheel),
            GameConfig::default(),
        )
        .unwrap();
        session.deal(&puzzle);
        session.start_round();
        session
    }

    fn script(words: &[&str]) -> FixedScriptController {
        FixedScriptController::from_words(words).unwrap()
    }

    #[test]
    fn test_menu_solve_only_when_nothing_hidden() {
        let mut board = Board::new(&Puzzle::new("Phrase", "PYTHON PROGRAMMING"));
        board.reveal();
        let mut player = Player::human("Ada", "");
        player.add_cash(5000);

        let menu = build_menu(&board, &player, &GameConfig::default());
        assert_eq!(menu.as_slice(), &[TurnChoice::Solve]);
    }

    #[test]
    fn test_menu_vowel_gate_is_inclusive() {
        let board = Board::new(&Puzzle::new("Phrase", "PYTHON PROGRAMMING"));
        let config = GameConfig::default();

        let mut player = Player::human("Ada", "");
        player.add_cash(250);
        assert!(build_menu(&board, &player, &config).contains(&TurnChoice::Vowel));

        player.subtract_cash(1);
        assert_eq!(
            build_menu(&board, &player, &config).as_slice(),
            &[TurnChoice::Spin, TurnChoice::Solve]
        );
    }

    #[test]
    fn test_menu_no_vowel_when_vowels_bought() {
        let mut board = Board::new(&Puzzle::new("Phrase", "PYTHON PROGRAMMING"));
        for c in "AEIOU".chars() {
            board.add_guess(letter(c));
        }
        let mut player = Player::human("Ada", "");
        player.add_cash(1000);

        assert!(!build_menu(&board, &player, &GameConfig::default()).contains(&TurnChoice::Vowel));
    }

    #[test]
    fn test_guess_letter_outcomes() {
        let mut session = session_with("PYTHON PROGRAMMING", vec![Wedge::cash(100)]);
        let mut engine = RoundEngine::new(&mut session);

        assert_eq!(engine.guess_letter(letter('R')), LetterOutcome::Revealed { count: 2 });
        assert_eq!(engine.guess_letter(letter('R')), LetterOutcome::Duplicate);
        assert_eq!(engine.guess_letter(letter('Z')), LetterOutcome::Absent);
        assert_eq!(engine.guess_letter(letter('Z')), LetterOutcome::Duplicate);
    }

    #[test]
    fn test_cash_spin_pays_per_occurrence() {
        let mut session = session_with("RARE RECIPE BOOK", vec![Wedge::cash(100)]);
        let mut ada = script(&["spin", "R"]);
        let mut engine = RoundEngine::new(&mut session);

        let outcome = engine.take_action(&mut ada, &mut NullPresenter).unwrap();
        assert_eq!(outcome, TurnOutcome::Continue);
        assert_eq!(session.players[0].round_cash(), 300);
    }

    #[test]
    fn test_trip_spin_awards_prize() {
        let prize = Prize::new("Trip to Lisbon", 4200);
        let mut session = session_with(
            "PYTHON PROGRAMMING",
            vec![Wedge::new("TRIP", WedgeKind::Trip(prize.clone()))],
        );
        let mut ada = script(&["spin", "G"]);
        let mut engine = RoundEngine::new(&mut session);

        assert_eq!(
            engine.take_action(&mut ada, &mut NullPresenter).unwrap(),
            TurnOutcome::Continue
        );
        assert_eq!(session.players[0].round_prizes(), &[prize]);
        assert_eq!(session.players[0].round_cash(), 0);
    }

    #[test]
    fn test_bankrupt_keeps_round_cash_until_round_end() {
        let mut session = session_with("PYTHON PROGRAMMING", vec![Wedge::bankrupt()]);
        session.players[0].add_cash(700);
        let mut ada = script(&["spin"]);
        let mut engine = RoundEngine::new(&mut session);

        assert_eq!(
            engine.take_action(&mut ada, &mut NullPresenter).unwrap(),
            TurnOutcome::PassTurn
        );
        assert_eq!(session.players[0].round_cash(), 700);
    }

    #[test]
    fn test_absent_vowel_still_costs_the_fee() {
        let mut session = session_with("PYTHON PROGRAMMING", vec![Wedge::cash(100)]);
        session.players[0].add_cash(300);
        let mut ada = script(&["vowel", "E"]);
        let mut engine = RoundEngine::new(&mut session);

        assert_eq!(
            engine.take_action(&mut ada, &mut NullPresenter).unwrap(),
            TurnOutcome::PassTurn
        );
        assert_eq!(session.players[0].round_cash(), 50);
    }

    #[test]
    fn test_present_vowel_continues_without_reward() {
        let mut session = session_with("PYTHON PROGRAMMING", vec![Wedge::cash(100)]);
        session.players[0].add_cash(300);
        let mut ada = script(&["vowel", "O"]);
        let mut engine = RoundEngine::new(&mut session);

        assert_eq!(
            engine.take_action(&mut ada, &mut NullPresenter).unwrap(),
            TurnOutcome::Continue
        );
        assert_eq!(session.players[0].round_cash(), 50);
        assert!(session.board.was_guessed(letter('O')));
    }

    #[test]
    fn test_repeated_vowel_costs_only_the_fee() {
        let mut session = session_with("PYTHON PROGRAMMING", vec![Wedge::cash(100)]);
        session.board.add_guess(letter('O'));
        session.players[0].add_cash(600);
        let mut ada = script(&["vowel", "O"]);
        let mut engine = RoundEngine::new(&mut session);

        assert_eq!(
            engine.take_action(&mut ada, &mut NullPresenter).unwrap(),
            TurnOutcome::PassTurn
        );
        assert_eq!(session.players[0].round_cash(), 350);
        assert_eq!(session.board.masked(), "▓▓▓▓O▓ ▓▓O▓▓▓▓▓▓▓▓");
    }

    #[test]
    fn test_repeated_consonant_pays_nothing() {
        let mut session = session_with("PYTHON PROGRAMMING", vec![Wedge::cash(100)]);
        session.board.add_guess(letter('N'));
        session.players[0].add_cash(350);
        let mut ada = script(&["spin", "N"]);
        let mut engine = RoundEngine::new(&mut session);

        assert_eq!(
            engine.take_action(&mut ada, &mut NullPresenter).unwrap(),
            TurnOutcome::PassTurn
        );
        assert_eq!(session.players[0].round_cash(), 350);
        assert_eq!(ada.remaining(), 0);
    }

    #[test]
    fn test_spin_wheel_sorts_wedges() {
        let mut session = session_with("PYTHON PROGRAMMING", vec![Wedge::lose_turn()]);
        assert_eq!(RoundEngine::new(&mut session).spin_wheel(), SpinOutcome::LoseTurn);

        let mut session = session_with("PYTHON PROGRAMMING", vec![Wedge::bankrupt()]);
        assert_eq!(RoundEngine::new(&mut session).spin_wheel(), SpinOutcome::Bankrupt);

        let mut session = session_with("PYTHON PROGRAMMING", vec![Wedge::cash(650)]);
        assert_eq!(
            RoundEngine::new(&mut session).spin_wheel(),
            SpinOutcome::Landed(Wedge::cash(650))
        );
    }

    #[test]
    fn test_unoffered_choice_is_rejected() {
        let mut session = session_with("PYTHON PROGRAMMING", vec![Wedge::cash(100)]);
        let mut ada = script(&["vowel", "E"]);
        let mut engine = RoundEngine::new(&mut session);

        assert!(matches!(
            engine.take_action(&mut ada, &mut NullPresenter),
            Err(WheelError::InvalidAction(_))
        ));
    }

    #[test]
    fn test_vowel_after_spin_is_rejected() {
        let mut session = session_with("PYTHON PROGRAMMING", vec![Wedge::cash(100)]);
        let mut ada = script(&["spin", "A"]);
        let mut engine = RoundEngine::new(&mut session);

        assert!(matches!(
            engine.take_action(&mut ada, &mut NullPresenter),
            Err(WheelError::InvalidAction(_))
        ));
    }

    #[test]
    fn test_round_settles_winner_and_losers() {
        let mut session = session_with("PYTHON PROGRAMMING", vec![Wedge::cash(100)]);
        let mut ada = script(&["spin", "P", "spin", "Z"]);
        let mut bea = script(&["spin", "R", "solve", "python programming"]);
        let mut cy = script(&[]);

        let result = {
            let mut seats: Seats = [&mut ada, &mut bea, &mut cy];
            RoundEngine::new(&mut session)
                .run_round(&mut seats, &mut NullPresenter)
                .unwrap()
        };

        assert_eq!(result.winner, Some(1));
        assert_eq!(result.end_reason, RoundEndReason::Solved(1));
        assert_eq!(result.turns, 1);
        assert_eq!(result.banked, 200);

        assert_eq!(session.players[0].total_cash(), 0);
        assert_eq!(session.players[0].round_cash(), 0);
        assert_eq!(session.players[1].total_cash(), 200);
        assert_eq!(session.turn, 1);
        assert_eq!(session.phase, RoundPhase::RoundOver);
        assert_eq!(session.board.masked(), "PYTHON PROGRAMMING");
    }

    #[test]
    fn test_turn_limit_ends_round_without_winner() {
        let mut session = session_with("PYTHON PROGRAMMING", vec![Wedge::lose_turn()]);
        session.config = GameConfig::default().with_max_turns(5);
        let mut a = script(&["spin"; 10]);
        let mut b = script(&["spin"; 10]);
        let mut c = script(&["spin"; 10]);

        let result = {
            let mut seats: Seats = [&mut a, &mut b, &mut c];
            RoundEngine::new(&mut session)
                .run_round(&mut seats, &mut NullPresenter)
                .unwrap()
        };

        assert_eq!(result.winner, None);
        assert_eq!(result.end_reason, RoundEndReason::TurnLimit);
        assert_eq!(result.turns, 5);
    }

    #[test]
    fn test_run_actions_stops_early() {
        let mut session = session_with("PYTHON PROGRAMMING", vec![Wedge::cash(100)]);
        let mut a = script(&["spin", "T", "spin", "N"]);
        let mut b = script(&[]);
        let mut c = script(&[]);

        let pending = {
            let mut seats: Seats = [&mut a, &mut b, &mut c];
            RoundEngine::new(&mut session)
                .run_actions(&mut seats, &mut NullPresenter, 2)
                .unwrap()
        };

        assert!(pending.is_none());
        assert_eq!(session.players[0].round_cash(), 300);
        assert_eq!(session.turn, 0);
    }

    #[test]
    fn test_menu_prompt_wording() {
        assert_eq!(
            menu_prompt("Ada", &[TurnChoice::Spin, TurnChoice::Solve, TurnChoice::Vowel]),
            "Ada, would you like to spin, solve, or buy a vowel?"
        );
        assert_eq!(
            menu_prompt("Ada", &[TurnChoice::Spin, TurnChoice::Solve]),
            "Ada, would you like to spin or solve?"
        );
    }
}
