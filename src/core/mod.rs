//! Core game types: letters, puzzles, the board, the wheel and players

pub mod board;
pub mod player;
pub mod puzzle;
pub mod types;
pub mod wheel;

pub use board::{Board, HIDDEN_GLYPH};
pub use player::{Character, Player, PlayerKind, Prize};
pub use puzzle::Puzzle;
pub use types::{Cash, Category, Letter, PlayerName};
pub use wheel::{Wedge, WedgeKind, Wheel};
