//! Error types for the wheel-spin game

use thiserror::Error;

#[derive(Error, Debug)]
pub enum WheelError {
    #[error("Invalid game data: {0}")]
    InvalidData(String),

    #[error("Invalid game setup: {0}")]
    InvalidSetup(String),

    #[error("Invalid player action: {0}")]
    InvalidAction(String),

    #[error("Input stream closed while waiting for a player decision")]
    InputClosed,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Task join error: {0}")]
    Join(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, WheelError>;
