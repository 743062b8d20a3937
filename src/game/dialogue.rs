//! Dialogue lines spoken during a round
//!
//! The engine describes what happened as a [`Speech`]; presenters decide how
//! (and how slowly) to show it. Host lines are drawn from small phrase tables
//! so repeated events don't always read the same.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Name shown for the show's host
pub const HOST: &str = "Pat";

/// One line of dialogue
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Speech {
    /// Who is talking; empty for stage directions
    pub speaker: String,
    pub text: String,
    /// True when the line is a question the human is about to answer
    pub awaits_input: bool,
}

impl Speech {
    pub fn new(speaker: impl Into<String>, text: impl Into<String>) -> Self {
        Speech {
            speaker: speaker.into(),
            text: text.into(),
            awaits_input: false,
        }
    }

    pub fn host(text: impl Into<String>) -> Self {
        Speech::new(HOST, text)
    }

    /// Stage direction with no speaker, e.g. "*Spinning the wheel*"
    pub fn narration(text: impl Into<String>) -> Self {
        Speech::new("", text)
    }

    /// A question the host puts to the human player
    pub fn prompt(text: impl Into<String>) -> Self {
        Speech {
            speaker: HOST.to_string(),
            text: text.into(),
            awaits_input: true,
        }
    }
}

/// Events that have a table of host (or player) lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cue {
    Spin,
    Solve,
    Vowel,
    Bankrupt,
    LoseTurn,
    Trip,
    DuplicateLetter,
    FailedGuess,
    CorrectGuessSingle,
    CorrectGuessMulti,
    CorrectSolve,
    FailedSolve,
    RoundWinner,
}

impl Cue {
    /// Line templates; placeholders are `{name}`, `{letter}`, `{aan}`,
    /// `{count}`, `{cash}` and `{prize}`
    pub fn phrases(self) -> &'static [&'static str] {
        match self {
            Cue::Spin => &["I'll spin.", "Let's spin the wheel!", "Spin it, please."],
            Cue::Solve => &[
                "I'd like to solve.",
                "I think I've got it!",
                "Let me solve the puzzle.",
            ],
            Cue::Vowel => &["I'd like to buy a vowel.", "Let me buy a vowel."],
            Cue::Bankrupt => &["Oh no, bankrupt!", "Bankrupt. That's a tough break."],
            Cue::LoseTurn => &["Sorry, you lose a turn.", "Lose a turn. Better luck next time."],
            Cue::Trip => &[
                "You landed on a trip: {prize}!",
                "A trip is on the line: {prize}!",
            ],
            Cue::DuplicateLetter => &[
                "Sorry, '{letter}' has already been called.",
                "We've already seen '{letter}'.",
            ],
            Cue::FailedGuess => &["Sorry, there is no '{letter}'.", "No '{letter}', I'm afraid."],
            Cue::CorrectGuessSingle => &["There is {aan} '{letter}'.", "Yes, one '{letter}'."],
            Cue::CorrectGuessMulti => &[
                "There are {count} '{letter}'s.",
                "Yes, {count} '{letter}'s!",
            ],
            Cue::CorrectSolve => &["That's right!", "You solved it!", "Correct!"],
            Cue::FailedSolve => &["Sorry, that's not it.", "No, that's not the answer."],
            Cue::RoundWinner => &[
                "Congratulations {name}, your total is now ${cash}!",
                "{name} takes the round and now has ${cash}.",
            ],
        }
    }

    /// Pick one template at random and fill in its placeholders
    pub fn line<R: Rng + ?Sized>(self, rng: &mut R, args: &LineArgs) -> String {
        let template = self.phrases().choose(rng).copied().unwrap_or_default();
        args.fill(template)
    }
}

/// Values substituted into a phrase template
#[derive(Debug, Clone, Default)]
pub struct LineArgs {
    pub name: Option<String>,
    pub letter: Option<char>,
    pub count: Option<usize>,
    pub cash: Option<i64>,
    pub prize: Option<String>,
}

impl LineArgs {
    pub fn letter(letter: char) -> Self {
        LineArgs {
            letter: Some(letter),
            ..Default::default()
        }
    }

    pub fn fill(&self, template: &str) -> String {
        let mut line = template.to_string();
        if let Some(name) = &self.name {
            line = line.replace("{name}", name);
        }
        if let Some(letter) = self.letter {
            line = line
                .replace("{letter}", &letter.to_string())
                .replace("{aan}", article(letter));
        }
        if let Some(count) = self.count {
            line = line.replace("{count}", &count.to_string());
        }
        if let Some(cash) = self.cash {
            line = line.replace("{cash}", &cash.to_string());
        }
        if let Some(prize) = &self.prize {
            line = line.replace("{prize}", prize);
        }
        line
    }
}

fn article(letter: char) -> &'static str {
    crate::core::Letter::new(letter).map_or("a", |l| l.article())
}
