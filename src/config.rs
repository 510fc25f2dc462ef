//! Runtime configuration, read from the environment.
//!
//! | variable                     | default                      |
//! |------------------------------|------------------------------|
//! | `PET_TETRIS_SEED`            | derived from the clock       |
//! | `PET_TETRIS_HIGH_SCORE_PATH` | `pet-tetris-highscore.json`  |
//! | `PET_TETRIS_LOG`             | unset (logging off)          |
//! | `PET_TETRIS_LOG_FILTER`      | `info`                       |
//!
//! Unparseable values fall back to their defaults.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

pub const DEFAULT_HIGH_SCORE_PATH: &str = "pet-tetris-highscore.json";
pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Piece randomizer seed; `None` means pick one at startup.
    pub seed: Option<u64>,
    pub high_score_path: PathBuf,
    /// Log file. The game owns the terminal, so logs never go to stdout.
    pub log_path: Option<PathBuf>,
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: None,
            high_score_path: PathBuf::from(DEFAULT_HIGH_SCORE_PATH),
            log_path: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let defaults = Self::default();
        Self {
            seed: var("PET_TETRIS_SEED").and_then(|s| s.parse().ok()),
            high_score_path: var("PET_TETRIS_HIGH_SCORE_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.high_score_path),
            log_path: var("PET_TETRIS_LOG").map(PathBuf::from),
            log_filter: var("PET_TETRIS_LOG_FILTER").unwrap_or(defaults.log_filter),
        }
    }

    /// The configured seed, or one derived from the wall clock.
    pub fn seed_or_clock(&self) -> u64 {
        self.seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_nanos() as u64)
                .unwrap_or(1)
        })
    }
}
