//! Game session, round engine and player controllers

pub mod computer_controller;
pub mod config;
pub mod controller;
pub mod dialogue;
pub mod fixed_script_controller;
pub mod input;
pub mod interactive_controller;
pub mod logger;
pub mod presenter;
pub mod round;
pub mod session;

pub use computer_controller::ComputerController;
pub use config::GameConfig;
pub use controller::{GameStateView, Menu, PlayerController, TurnChoice};
pub use dialogue::{Cue, LineArgs, Speech, HOST};
pub use fixed_script_controller::{FixedScriptController, ScriptedMove};
pub use input::{LineInput, Validator};
pub use interactive_controller::InteractiveController;
pub use logger::{GameLogger, LogEntry, OutputFormat, OutputMode, VerbosityLevel};
pub use presenter::{LogPresenter, NullPresenter, Presenter};
pub use round::{
    build_menu, LetterOutcome, RoundEndReason, RoundEngine, RoundPhase, RoundResult, Seats,
    SpinOutcome, TurnOutcome,
};
pub use session::{create_computer_players, GameSession, GameSummary, PlayerSummary, PLAYER_COUNT};
