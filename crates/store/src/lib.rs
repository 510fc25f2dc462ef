//! File-backed high score.
//!
//! The best score lives in a small JSON document:
//!
//! ```text
//! {"high_score": 1234}
//! ```
//!
//! The store never lets file problems reach gameplay. A missing file means
//! no high score yet; an unreadable or malformed file is logged and treated
//! as 0; a failed write is logged and the in-memory value is kept.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use pet_tetris_core::HighScoreStore;

pub use pet_tetris_core as core;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
struct HighScoreFile {
    high_score: u32,
}

/// High score persisted to a JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileHighScore {
    path: PathBuf,
    value: u32,
}

impl JsonFileHighScore {
    /// Open the store at `path`, loading the current value if there is one.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let value = match load(&path) {
            Ok(Some(value)) => value,
            Ok(None) => {
                debug!(path = %path.display(), "no high score file yet");
                0
            }
            Err(err) => {
                warn!(path = %path.display(), "ignoring high score file: {err:#}");
                0
            }
        };
        Self { path, value }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn save(&self) -> Result<()> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)
                .with_context(|| format!("creating {}", dir.display()))?;
        }
        let doc = HighScoreFile {
            high_score: self.value,
        };
        let bytes = serde_json::to_vec_pretty(&doc)?;
        fs::write(&self.path, bytes)
            .with_context(|| format!("writing {}", self.path.display()))?;
        Ok(())
    }
}

impl HighScoreStore for JsonFileHighScore {
    fn get(&self) -> u32 {
        self.value
    }

    fn set(&mut self, score: u32) {
        self.value = score;
        if let Err(err) = self.save() {
            warn!("high score not saved: {err:#}");
        }
    }
}

fn load(path: &Path) -> Result<Option<u32>> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(err) => {
            return Err(err).with_context(|| format!("reading {}", path.display()));
        }
    };
    let doc: HighScoreFile = serde_json::from_slice(&bytes)
        .with_context(|| format!("parsing {}", path.display()))?;
    Ok(Some(doc.high_score))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_starts_at_zero() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileHighScore::open(dir.path().join("scores.json"));
        assert_eq!(store.get(), 0);
    }

    #[test]
    fn set_persists_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("scores.json");

        let mut store = JsonFileHighScore::open(&path);
        store.set(4200);
        assert_eq!(store.get(), 4200);

        let reopened = JsonFileHighScore::open(&path);
        assert_eq!(reopened.get(), 4200);

        let raw: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(raw["high_score"], 4200);
    }

    #[test]
    fn malformed_file_is_treated_as_zero() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scores.json");
        fs::write(&path, "not json").unwrap();

        let mut store = JsonFileHighScore::open(&path);
        assert_eq!(store.get(), 0);

        // The next write replaces the bad document.
        store.set(10);
        assert_eq!(JsonFileHighScore::open(&path).get(), 10);
    }

    #[test]
    fn unwritable_path_keeps_value_in_memory() {
        let dir = tempfile::tempdir().unwrap();
        // A directory where the file should be makes every write fail.
        let path = dir.path().join("scores.json");
        fs::create_dir(&path).unwrap();

        let mut store = JsonFileHighScore::open(&path);
        store.set(77);
        assert_eq!(store.get(), 77);
    }

    #[test]
    fn drives_a_game_session() {
        use pet_tetris_core::{Board, GameState, ScriptedPieces};
        use pet_tetris_core::types::PieceKind;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scores.json");

        let mut game = GameState::with_sources(
            Board::default(),
            Box::new(ScriptedPieces::repeat(PieceKind::O)),
            Box::new(JsonFileHighScore::open(&path)),
        );
        game.start();
        game.hard_drop();
        assert_eq!(game.high_score(), 38);
        assert_eq!(JsonFileHighScore::open(&path).get(), 38);
    }
}
