//! Validated line input for human players
//!
//! A [`LineInput`] keeps asking until a line passes every [`Validator`], so
//! the round engine only ever sees well-formed answers. Rejections are shown
//! to the player and never leave this module.

use crate::core::Letter;
use crate::{Result, WheelError};
use std::io::{BufRead, Write};

/// Prompt printed before every read
pub const PROMPT: &str = ">>> ";

/// A single check applied to a line of input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validator {
    /// Length in characters, both ends inclusive
    LengthRange { min: usize, max: usize },
    /// Integer value, both ends inclusive
    NumberRange { min: i64, max: i64 },
    /// Letters only (spaces ignored)
    Alphabetic,
    /// Letters and digits only (spaces ignored)
    Alphanumeric,
    /// Digits only (spaces ignored)
    Numeric,
    Vowel,
    Consonant,
    /// Must mention at least one of these words
    OneOf(Vec<String>),
}

fn plural(n: usize) -> &'static str {
    if n == 1 {
        ""
    } else {
        "s"
    }
}

impl Validator {
    /// Returns the rejection reason, or `None` if the line is acceptable
    pub fn check(&self, line: &str) -> Option<String> {
        match self {
            Validator::LengthRange { min, max } => {
                let len = line.chars().count();
                if min == max {
                    (len != *min)
                        .then(|| format!("Input must be {min} character{} long", plural(*min)))
                } else if len < *min {
                    Some(format!("Input must be at least {min} character{} long", plural(*min)))
                } else if len > *max {
                    Some(format!("Input cannot be more than {max} character{} long", plural(*max)))
                } else {
                    None
                }
            }
            Validator::NumberRange { min, max } => match line.trim().parse::<i64>() {
                Err(_) => Some(format!("Input must be an integer in range {min} - {max}")),
                Ok(n) if n < *min || n > *max => {
                    Some(format!("Input must be in range {min} - {max}"))
                }
                Ok(_) => None,
            },
            Validator::Alphabetic => {
                let ok =
                    non_space(line).all(char::is_alphabetic) && non_space(line).next().is_some();
                (!ok).then(|| "Input must be alphabetical".to_string())
            }
            Validator::Alphanumeric => {
                let ok =
                    non_space(line).all(char::is_alphanumeric) && non_space(line).next().is_some();
                (!ok).then(|| "Input must be alphanumeric".to_string())
            }
            Validator::Numeric => {
                let ok =
                    non_space(line).all(|c| c.is_ascii_digit()) && non_space(line).next().is_some();
                (!ok).then(|| "Input must be a number".to_string())
            }
            Validator::Vowel => match Letter::from_str_single(line) {
                Some(l) if l.is_vowel() => None,
                _ => Some("Input must be a vowel".to_string()),
            },
            Validator::Consonant => match Letter::from_str_single(line) {
                Some(l) if l.is_consonant() => None,
                _ => Some("Input must be a consonant".to_string()),
            },
            Validator::OneOf(options) => {
                let lower = line.to_lowercase();
                if options.iter().any(|o| lower.contains(o.as_str())) {
                    None
                } else {
                    Some(format!("Input must include {}", list_options(options)))
                }
            }
        }
    }
}

fn non_space(line: &str) -> impl Iterator<Item = char> + '_ {
    line.chars().filter(|c| *c != ' ')
}

/// "spin", "spin or solve", "spin, solve, or vowel"
fn list_options(options: &[String]) -> String {
    match options {
        [] => String::new(),
        [only] => only.clone(),
        [first, second] => format!("{first} or {second}"),
        [init @ .., last] => format!("{}, or {last}", init.join(", ")),
    }
}

/// Run `validators` in order and return the first rejection
pub fn validate(line: &str, validators: &[Validator]) -> Option<String> {
    validators.iter().find_map(|v| v.check(line))
}

/// Validator presets for each question the game asks
pub mod presets {
    use super::Validator;

    pub fn name() -> Vec<Validator> {
        vec![Validator::LengthRange { min: 2, max: 12 }, Validator::Alphabetic]
    }

    pub fn bio() -> Vec<Validator> {
        vec![Validator::LengthRange { min: 2, max: 200 }]
    }

    pub fn difficulty() -> Vec<Validator> {
        vec![Validator::NumberRange { min: 1, max: 10 }]
    }

    pub fn consonant() -> Vec<Validator> {
        vec![Validator::LengthRange { min: 1, max: 1 }, Validator::Consonant]
    }

    pub fn vowel() -> Vec<Validator> {
        vec![Validator::LengthRange { min: 1, max: 1 }, Validator::Vowel]
    }

    pub fn solution() -> Vec<Validator> {
        vec![Validator::LengthRange { min: 1, max: 60 }]
    }

    pub fn choice<'a>(words: impl IntoIterator<Item = &'a str>) -> Vec<Validator> {
        vec![Validator::OneOf(words.into_iter().map(str::to_string).collect())]
    }
}

/// Reads validated lines from `reader`, writing prompts and errors to `writer`
pub struct LineInput<R, W> {
    reader: R,
    writer: W,
}

impl LineInput<std::io::StdinLock<'static>, std::io::Stdout> {
    pub fn stdio() -> Self {
        LineInput::new(std::io::stdin().lock(), std::io::stdout())
    }
}

impl<R: BufRead, W: Write> LineInput<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        LineInput { reader, writer }
    }

    /// Prompt until a line passes all validators; returns the trimmed line
    ///
    /// Fails only when the input ends or cannot be read.
    pub fn read(&mut self, validators: &[Validator]) -> Result<String> {
        loop {
            write!(self.writer, "{PROMPT}")?;
            self.writer.flush()?;

            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Err(WheelError::InputClosed);
            }

            let line = line.trim();
            match validate(line, validators) {
                None => return Ok(line.to_string()),
                Some(reason) => writeln!(self.writer, " ### Error: Invalid input. {reason}.")?,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_length_messages() {
        let one = Validator::LengthRange { min: 1, max: 1 };
        assert_eq!(one.check("ab").as_deref(), Some("Input must be 1 character long"));
        assert_eq!(one.check("a"), None);

        let name = Validator::LengthRange { min: 2, max: 12 };
        assert_eq!(name.check("a").as_deref(), Some("Input must be at least 2 characters long"));
        assert_eq!(
            name.check("abcdefghijklm").as_deref(),
            Some("Input cannot be more than 12 characters long")
        );
    }

    #[test]
    fn test_number_range() {
        let v = Validator::NumberRange { min: 1, max: 10 };
        assert_eq!(v.check("7"), None);
        assert_eq!(v.check("11").as_deref(), Some("Input must be in range 1 - 10"));
        assert_eq!(v.check("ten").as_deref(), Some("Input must be an integer in range 1 - 10"));
    }

    #[test]
    fn test_letter_classes() {
        assert_eq!(Validator::Vowel.check("e"), None);
        assert_eq!(Validator::Vowel.check("t").as_deref(), Some("Input must be a vowel"));
        assert_eq!(Validator::Consonant.check("T"), None);
        assert_eq!(Validator::Consonant.check("a").as_deref(), Some("Input must be a consonant"));
        assert_eq!(Validator::Alphabetic.check("Mary Ann"), None);
        assert!(Validator::Alphabetic.check("R2D2").is_some());
        assert_eq!(Validator::Alphanumeric.check("R2D2"), None);
        assert!(Validator::Numeric.check("12a").is_some());
    }

    #[test]
    fn test_one_of_wording() {
        let three = &presets::choice(["spin", "solve", "vowel"])[0];
        assert_eq!(three.check("I'd like to buy a VOWEL"), None);
        assert_eq!(
            three.check("pass").as_deref(),
            Some("Input must include spin, solve, or vowel")
        );

        let two = &presets::choice(["spin", "solve"])[0];
        assert_eq!(two.check("x").as_deref(), Some("Input must include spin or solve"));
    }

    #[test]
    fn test_first_rejection_wins() {
        assert_eq!(
            validate("ab", &presets::consonant()).as_deref(),
            Some("Input must be 1 character long")
        );
        assert_eq!(validate("b", &presets::consonant()), None);
    }

    #[test]
    fn test_reprompts_until_valid() {
        let mut out = Vec::new();
        let mut input = LineInput::new(Cursor::new("xyz\na\n  r \n"), &mut out);

        let line = input.read(&presets::consonant()).unwrap();
        assert_eq!(line, "r");

        let transcript = String::from_utf8(out).unwrap();
        assert_eq!(
            transcript,
            ">>>  ### Error: Invalid input. Input must be 1 character long.\n\
             >>>  ### Error: Invalid input. Input must be a consonant.\n\
             >>> "
        );
    }

    #[test]
    fn test_closed_input() {
        let mut input = LineInput::new(Cursor::new("zz\n"), Vec::new());
        assert!(matches!(
            input.read(&presets::vowel()),
            Err(WheelError::InputClosed)
        ));
    }
}
