//! Game data files: puzzles, characters, prizes and wheel wedges
//!
//! The four files live together in one directory (`data/` in the repo).
//! Copies are compiled into the binary so the game runs without them.

use crate::core::{Character, Prize, Puzzle, Wedge, WedgeKind, Wheel};
use crate::{Result, WheelError};
use rustc_hash::FxHashMap;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

pub const PUZZLES_FILE: &str = "puzzles.json";
pub const CHARACTERS_FILE: &str = "characters.csv";
pub const PRIZES_FILE: &str = "prizes.csv";
pub const WHEEL_FILE: &str = "wheel.csv";

const BUILTIN_PUZZLES: &str = include_str!("../../data/puzzles.json");
const BUILTIN_CHARACTERS: &str = include_str!("../../data/characters.csv");
const BUILTIN_PRIZES: &str = include_str!("../../data/prizes.csv");
const BUILTIN_WHEEL: &str = include_str!("../../data/wheel.csv");

/// Everything a session needs from disk
#[derive(Debug, Clone)]
pub struct GameData {
    pub puzzles: Vec<Puzzle>,
    pub characters: Vec<Character>,
    pub prizes: Vec<Prize>,
    pub wheel: Wheel,
}

impl GameData {
    /// Parse the copies bundled with the crate
    pub fn builtin() -> Result<Self> {
        Self::parse(
            BUILTIN_PUZZLES,
            BUILTIN_CHARACTERS,
            BUILTIN_PRIZES,
            BUILTIN_WHEEL,
        )
    }

    /// Parse all four files from their contents
    pub fn parse(puzzles: &str, characters: &str, prizes: &str, wheel: &str) -> Result<Self> {
        let puzzles = parse_puzzles(puzzles)?;
        let characters = parse_characters(characters)?;
        let prizes = parse_prizes(prizes)?;
        let wheel = parse_wheel(wheel, &prizes)?;

        if puzzles.is_empty() {
            return Err(WheelError::InvalidData(
                "no playable puzzles (need more than 12 characters and 3+ words)".to_string(),
            ));
        }
        if wheel.is_empty() {
            return Err(WheelError::InvalidData("wheel has no wedges".to_string()));
        }

        Ok(GameData {
            puzzles,
            characters,
            prizes,
            wheel,
        })
    }

    /// Read the four files from `dir`
    ///
    /// The reads run concurrently; parsing happens on a blocking thread.
    pub async fn load_dir(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        let (puzzles, characters, prizes, wheel) = tokio::try_join!(
            read(dir, PUZZLES_FILE),
            read(dir, CHARACTERS_FILE),
            read(dir, PRIZES_FILE),
            read(dir, WHEEL_FILE),
        )?;

        tokio::task::spawn_blocking(move || {
            GameData::parse(&puzzles, &characters, &prizes, &wheel)
        })
        .await?
    }
}

async fn read(dir: &Path, name: &str) -> Result<String> {
    let path = dir.join(name);
    tokio::fs::read_to_string(&path).await.map_err(|e| {
        WheelError::InvalidData(format!("failed to read '{}': {e}", path.display()))
    })
}

/// Puzzles from a `{ "Category": ["ANSWER", ...] }` JSON object
///
/// Answers are transliterated to ASCII and upper-cased; short answers and
/// answers with fewer than three words are dropped.
pub fn parse_puzzles(json: &str) -> Result<Vec<Puzzle>> {
    let by_category: BTreeMap<String, Vec<String>> = serde_json::from_str(json)?;
    Ok(by_category
        .into_iter()
        .flat_map(|(category, answers)| {
            answers.into_iter().filter_map(move |answer| {
                let answer = deunicode::deunicode(answer.trim()).to_uppercase();
                Puzzle::is_playable(&answer).then(|| Puzzle::new(category.clone(), answer))
            })
        })
        .collect())
}

fn csv_reader(contents: &str, delimiter: u8) -> csv::Reader<&[u8]> {
    csv::ReaderBuilder::new()
        .has_headers(false)
        .delimiter(delimiter)
        .trim(csv::Trim::All)
        .from_reader(contents.as_bytes())
}

/// Characters from `name|bio` lines
pub fn parse_characters(contents: &str) -> Result<Vec<Character>> {
    csv_reader(contents, b'|')
        .deserialize()
        .map(|row| row.map_err(WheelError::from))
        .collect()
}

/// Prizes from `name,value` lines
pub fn parse_prizes(contents: &str) -> Result<Vec<Prize>> {
    csv_reader(contents, b',')
        .deserialize()
        .map(|row| row.map_err(WheelError::from))
        .collect()
}

#[derive(Debug, Deserialize)]
struct WedgeRow {
    label: String,
    kind: String,
    value: String,
}

/// Wedges from `label,kind,value` lines
///
/// `kind` is `cash`, `trip`, `bankrupt` or `lose_turn`. A trip's value names
/// a prize (case-insensitive). Repeated rows are kept; each one is another
/// slot on the wheel.
pub fn parse_wheel(contents: &str, prizes: &[Prize]) -> Result<Wheel> {
    let by_name: FxHashMap<String, &Prize> = prizes
        .iter()
        .map(|p| (p.name.to_lowercase(), p))
        .collect();

    let mut wedges = Vec::new();
    for (line, row) in csv_reader(contents, b',').deserialize::<WedgeRow>().enumerate() {
        let row = row?;
        let kind = match row.kind.to_lowercase().as_str() {
            "cash" => WedgeKind::Cash(row.value.parse().map_err(|_| {
                WheelError::InvalidData(format!(
                    "wheel line {}: cash value {:?} is not a number",
                    line + 1,
                    row.value
                ))
            })?),
            "trip" => {
                let prize = by_name.get(&row.value.to_lowercase()).ok_or_else(|| {
                    WheelError::InvalidData(format!(
                        "wheel line {}: unknown prize {:?}",
                        line + 1,
                        row.value
                    ))
                })?;
                WedgeKind::Trip((*prize).clone())
            }
            "bankrupt" => WedgeKind::Bankrupt,
            "lose_turn" => WedgeKind::LoseTurn,
            other => {
                return Err(WheelError::InvalidData(format!(
                    "wheel line {}: unknown wedge kind {other:?}",
                    line + 1
                )))
            }
        };
        wedges.push(Wedge::new(row.label, kind));
    }
    Ok(Wheel::new(wedges))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_data_parses() {
        let data = GameData::builtin().unwrap();
        assert!(!data.puzzles.is_empty());
        assert!(data.characters.len() >= 3);
        assert!(!data.wheel.is_empty());
        assert!(data
            .puzzles
            .iter()
            .all(|p| Puzzle::is_playable(&p.answer) && p.answer.is_ascii()));
    }

    #[test]
    fn test_puzzles_filtered_and_normalized() {
        let json = r#"{
            "Place": ["Downtown São Paulo at night", "Tokyo", "Break a leg"],
            "Phrase": ["piece of cake"]
        }"#;
        let puzzles = parse_puzzles(json).unwrap();
        assert_eq!(
            puzzles,
            vec![
                Puzzle::new("Phrase", "PIECE OF CAKE"),
                Puzzle::new("Place", "DOWNTOWN SAO PAULO AT NIGHT"),
            ]
        );
    }

    #[test]
    fn test_characters_use_pipe_delimiter() {
        let characters =
            parse_characters("Gus|Drives trucks, reads books\nRosa|Never loses\n").unwrap();
        assert_eq!(
            characters,
            vec![
                Character::new("Gus", "Drives trucks, reads books"),
                Character::new("Rosa", "Never loses"),
            ]
        );
    }

    #[test]
    fn test_wheel_keeps_duplicates_and_resolves_trips() {
        let prizes = parse_prizes("Trip to Paris,6200\n").unwrap();
        let wheel = parse_wheel(
            "$500,cash,500\n$500,cash,500\nBANKRUPT,bankrupt,0\n\
             LOSE A TURN,lose_turn,0\nTRIP,trip,trip to paris\n",
            &prizes,
        )
        .unwrap();

        assert_eq!(wheel.wedges().len(), 5);
        assert_eq!(wheel.wedges()[1], Wedge::cash(500));
        assert_eq!(
            wheel.wedges()[4].kind,
            WedgeKind::Trip(Prize::new("Trip to Paris", 6200))
        );
    }

    #[test]
    fn test_wheel_rejects_bad_rows() {
        assert!(matches!(
            parse_wheel("TRIP,trip,Trip to Mars\n", &[]),
            Err(WheelError::InvalidData(_))
        ));
        assert!(matches!(
            parse_wheel("$X,cash,lots\n", &[]),
            Err(WheelError::InvalidData(_))
        ));
        assert!(matches!(
            parse_wheel("FREE SPIN,free_spin,0\n", &[]),
            Err(WheelError::InvalidData(_))
        ));
    }

    #[test]
    fn test_empty_puzzles_rejected() {
        let result = GameData::parse(r#"{"Thing": ["UMBRELLA"]}"#, "", "", "$500,cash,500\n");
        assert!(matches!(result, Err(WheelError::InvalidData(_))));
    }

    #[tokio::test]
    async fn test_load_dir_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = GameData::load_dir(dir.path()).await;
        assert!(matches!(result, Err(WheelError::InvalidData(_))));
    }
}
