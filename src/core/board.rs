//! Puzzle board: the answer for the current round and the letters called so far

use crate::core::{Category, Letter, Puzzle};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Glyph drawn in place of a letter that has not been called yet
pub const HIDDEN_GLYPH: char = '▓';

/// Per-round board state
///
/// Created fresh from a [`Puzzle`] at the start of every round. The answer is
/// normalized to uppercase; guessed letters are a set, so re-adding a letter
/// is harmless. Preventing repeat guesses is the round engine's job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    category: Category,
    answer: String,
    guessed: BTreeSet<Letter>,
}

impl Board {
    pub fn new(puzzle: &Puzzle) -> Self {
        Board {
            category: puzzle.category.clone(),
            answer: puzzle.answer.to_uppercase(),
            guessed: BTreeSet::new(),
        }
    }

    /// Board shown before the first round is dealt
    pub fn empty() -> Self {
        Board {
            category: Category::new(""),
            answer: String::new(),
            guessed: BTreeSet::new(),
        }
    }

    pub fn category(&self) -> &Category {
        &self.category
    }

    /// The full, uppercase answer
    pub fn answer(&self) -> &str {
        &self.answer
    }

    /// Guessed letters in alphabetical order
    pub fn guessed(&self) -> impl Iterator<Item = Letter> + '_ {
        self.guessed.iter().copied()
    }

    pub fn add_guess(&mut self, letter: Letter) {
        self.guessed.insert(letter);
    }

    pub fn was_guessed(&self, letter: Letter) -> bool {
        self.guessed.contains(&letter)
    }

    /// Number of times `letter` appears in the answer
    pub fn letter_count(&self, letter: Letter) -> usize {
        self.letters().filter(|&l| l == letter).count()
    }

    /// True while some vowel in the answer has not been bought
    pub fn vowels_remain(&self) -> bool {
        self.letters().any(|l| l.is_vowel() && !self.was_guessed(l))
    }

    /// True while some consonant in the answer has not been called
    pub fn consonants_remain(&self) -> bool {
        self.letters().any(|l| l.is_consonant() && !self.was_guessed(l))
    }

    /// True while any letter in the answer is still hidden
    pub fn letters_remain(&self) -> bool {
        self.letters().any(|l| !self.was_guessed(l))
    }

    /// Share of the answer's letters already on display, in `[0, 1]`
    ///
    /// An answer with no letters at all counts as fully solved.
    pub fn solved_fraction(&self) -> f64 {
        let total = self.letters().count();
        if total == 0 {
            return 1.0;
        }
        let shown = self.letters().filter(|&l| self.was_guessed(l)).count();
        shown as f64 / total as f64
    }

    /// The answer as players see it: uncalled letters are hidden, everything
    /// else (spaces, punctuation, called letters) is shown as-is
    pub fn masked(&self) -> String {
        self.answer
            .chars()
            .map(|c| match Letter::new(c) {
                Some(letter) if !self.was_guessed(letter) => HIDDEN_GLYPH,
                _ => c,
            })
            .collect()
    }

    /// Check a free-form solve attempt
    ///
    /// Both sides are reduced to letters and spaces and case-folded, so
    /// "MOTHERS DAY" solves "MOTHER'S DAY".
    pub fn check_solution(&self, guess: &str) -> bool {
        reduce_phrase(&self.answer) == reduce_phrase(guess)
    }

    /// Mark all 26 letters as called so the full answer is displayed
    pub fn reveal(&mut self) {
        self.guessed.extend(Letter::all());
    }

    fn letters(&self) -> impl Iterator<Item = Letter> + '_ {
        self.answer.chars().filter_map(Letter::new)
    }
}

/// Reduce a phrase to its letters and spaces, uppercased
pub fn reduce_phrase(phrase: &str) -> String {
    phrase
        .chars()
        .filter(|c| c.is_alphabetic() || *c == ' ')
        .flat_map(char::to_uppercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letter(c: char) -> Letter {
        Letter::new(c).unwrap()
    }

    fn board(answer: &str) -> Board {
        Board::new(&Puzzle::new("Phrase", answer))
    }

    #[test]
    fn test_answer_is_uppercased() {
        let board = board("Mother's Day");
        assert_eq!(board.answer(), "MOTHER'S DAY");
        assert_eq!(board.category().as_str(), "Phrase");
    }

    #[test]
    fn test_masked_shows_punctuation_and_guesses() {
        let mut board = board("ROCK-N-ROLL, BABY.");
        assert_eq!(board.masked(), "▓▓▓▓-▓-▓▓▓▓, ▓▓▓▓.");

        board.add_guess(letter('r'));
        board.add_guess(letter('B'));
        assert_eq!(board.masked(), "R▓▓▓-▓-R▓▓▓, B▓B▓.");
    }

    #[test]
    fn test_masked_with_quotes_and_apostrophes() {
        let board = board("\"IT'S A DEAL\"");
        assert_eq!(board.masked(), "\"▓▓'▓ ▓ ▓▓▓▓\"");
    }

    #[test]
    fn test_python_programming_scenario() {
        let mut board = board("PYTHON PROGRAMMING");
        for c in ['P', 'Y', 'T', 'H', 'O', 'N'] {
            board.add_guess(letter(c));
        }

        assert_eq!(board.masked(), "PYTHON P▓O▓▓▓▓▓▓N▓");
        // P,Y,T,H,O,N fill 6 + P,O,N = 9 of 17 letters
        assert!((board.solved_fraction() - 9.0 / 17.0).abs() < 1e-9);
    }

    #[test]
    fn test_letter_count_and_was_guessed() {
        let mut board = board("BANANA SPLIT");
        assert_eq!(board.letter_count(letter('A')), 3);
        assert_eq!(board.letter_count(letter('N')), 2);
        assert_eq!(board.letter_count(letter('Z')), 0);

        assert!(!board.was_guessed(letter('N')));
        board.add_guess(letter('N'));
        assert!(board.was_guessed(letter('N')));
        // re-adding is tolerated
        board.add_guess(letter('N'));
        assert_eq!(board.guessed().count(), 1);
    }

    #[test]
    fn test_remaining_letter_queries() {
        let mut board = board("TEA TO GO");
        assert!(board.vowels_remain());
        assert!(board.consonants_remain());

        for c in ['T', 'G'] {
            board.add_guess(letter(c));
        }
        assert!(!board.consonants_remain());
        assert!(board.letters_remain());

        for c in ['E', 'A', 'O'] {
            board.add_guess(letter(c));
        }
        assert!(!board.vowels_remain());
        assert!(!board.letters_remain());
        assert_eq!(board.solved_fraction(), 1.0);
    }

    #[test]
    fn test_check_solution_ignores_case_and_punctuation() {
        let board = board("MOTHER'S DAY");
        assert!(board.check_solution("MOTHER'S DAY"));
        assert!(board.check_solution("MOTHERS DAY"));
        assert!(board.check_solution("mothers day"));
        assert!(board.check_solution("Mother's Day!"));
        assert!(!board.check_solution("MOTHER DAY"));
        assert!(!board.check_solution("MOTHERSDAY"));
    }

    #[test]
    fn test_reveal_shows_full_answer() {
        let mut board = board("DON'T COUNT YOUR CHICKENS");
        board.add_guess(letter('C'));
        board.reveal();
        assert_eq!(board.masked(), board.answer());
        assert!(!board.letters_remain());

        // revealing twice changes nothing
        board.reveal();
        assert_eq!(board.masked(), "DON'T COUNT YOUR CHICKENS");
    }

    #[test]
    fn test_reduce_phrase() {
        assert_eq!(reduce_phrase("Rock-n-Roll, baby."), "ROCKNROLL BABY");
    }
}
