//! Strongly-typed wrappers for game concepts
//!
//! Guessed letters, player names and puzzle categories are all "just strings"
//! in the data files. Wrapping them keeps the round engine from mixing them
//! up and lets `Letter` enforce its A-Z invariant at construction time.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Amount of money won or spent during a game
pub type Cash = i64;

/// A single uppercase ASCII letter, `A` through `Z`
///
/// The only way to build one is [`Letter::new`], which upper-cases its input
/// and rejects anything that is not an ASCII letter. Every guessed letter on
/// a board is therefore a valid uppercase letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "char", into = "char")]
pub struct Letter(u8);

impl Letter {
    /// All 26 letters in alphabetical order
    pub const ALPHABET: &'static str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

    /// The five letters that must be bought rather than called
    pub const VOWELS: &'static str = "AEIOU";

    /// The 21 letters that can be called after a spin
    pub const CONSONANTS: &'static str = "BCDFGHJKLMNPQRSTVWXYZ";

    /// English letters from most to least frequent
    pub const FREQUENCY_ORDER: &'static str = "ETAOINSRHLDCUMFPGWYBVKXJQZ";

    pub fn new(c: char) -> Option<Self> {
        if c.is_ascii_alphabetic() {
            Some(Letter(c.to_ascii_uppercase() as u8))
        } else {
            None
        }
    }

    /// Parse a one-character string such as a validated player guess
    pub fn from_str_single(s: &str) -> Option<Self> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Letter::new(c),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        self.0 as char
    }

    pub fn is_vowel(self) -> bool {
        Self::VOWELS.as_bytes().contains(&self.0)
    }

    pub fn is_consonant(self) -> bool {
        !self.is_vowel()
    }

    /// Iterate over every letter A-Z
    pub fn all() -> impl Iterator<Item = Letter> {
        (b'A'..=b'Z').map(Letter)
    }

    pub fn vowels() -> impl Iterator<Item = Letter> {
        Self::VOWELS.bytes().map(Letter)
    }

    pub fn consonants() -> impl Iterator<Item = Letter> {
        Self::CONSONANTS.bytes().map(Letter)
    }

    /// Iterate in English frequency order
    pub fn by_frequency() -> impl Iterator<Item = Letter> {
        Self::FREQUENCY_ORDER.bytes().map(Letter)
    }

    /// Indefinite article used when a letter is spoken aloud ("an 'S'", "a 'T'")
    pub fn article(self) -> &'static str {
        match self.as_char() {
            'B' | 'C' | 'D' | 'G' | 'J' | 'K' | 'P' | 'Q' | 'T' | 'U' | 'V' | 'W' | 'Y' | 'Z' => {
                "a"
            }
            _ => "an",
        }
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl TryFrom<char> for Letter {
    type Error = String;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Letter::new(c).ok_or_else(|| format!("'{c}' is not a letter"))
    }
}

impl From<Letter> for char {
    fn from(letter: Letter) -> Self {
        letter.as_char()
    }
}

/// Puzzle category shown under the board (e.g. "Phrase", "Place")
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Category(String);

impl Category {
    pub fn new(s: impl Into<String>) -> Self {
        Category(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Category {
    fn from(s: &str) -> Self {
        Category(s.to_string())
    }
}

/// Player name (distinct from other string types)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerName(String);

impl PlayerName {
    pub fn new(s: impl Into<String>) -> Self {
        PlayerName(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for PlayerName {
    fn from(s: String) -> Self {
        PlayerName(s)
    }
}

impl From<&str> for PlayerName {
    fn from(s: &str) -> Self {
        PlayerName(s.to_string())
    }
}
