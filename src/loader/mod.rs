//! Data loaders
//!
//! Puzzle, character, prize and wheel files, plus optional JSON rule overrides

pub mod data;

pub use data::{parse_characters, parse_prizes, parse_puzzles, parse_wheel, GameData};

use crate::game::GameConfig;
use crate::{Result, WheelError};
use std::path::Path;

/// Read a [`GameConfig`] from a JSON file; missing fields keep their defaults
pub async fn load_config(path: impl AsRef<Path>) -> Result<GameConfig> {
    let path = path.as_ref();
    let contents = tokio::fs::read_to_string(path).await.map_err(|e| {
        WheelError::InvalidData(format!("failed to read '{}': {e}", path.display()))
    })?;
    Ok(serde_json::from_str(&contents)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn test_load_config_overrides() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"vowel_cost": 300, "max_turns": 40}}"#).unwrap();

        let config = load_config(file.path()).await.unwrap();
        assert_eq!(config.vowel_cost, 300);
        assert_eq!(config.max_turns, Some(40));
        assert_eq!(config.solve_threshold, GameConfig::default().solve_threshold);
    }

    #[tokio::test]
    async fn test_load_config_bad_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "vowel_cost = 300").unwrap();
        assert!(matches!(
            load_config(file.path()).await,
            Err(WheelError::Json(_))
        ));
    }
}
