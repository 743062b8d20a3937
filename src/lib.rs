//! Wheel Spin - a televised word puzzle game in the terminal
//!
//! One human contestant plays against two computer contestants. Each round
//! deals a masked puzzle; players spin the wheel and call consonants, buy
//! vowels, or try to solve. The round engine in [`game::round`] owns the
//! turn state machine; everything in [`ui`] and [`loader`] is presentation
//! and data plumbing around it.

pub mod core;
pub mod error;
pub mod game;
pub mod loader;
pub mod ui;

pub use error::{Result, WheelError};
