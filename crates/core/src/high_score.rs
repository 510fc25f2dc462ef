//! High score persistence seam.

use std::fmt::Debug;

/// Key-value home for the single best score.
///
/// The game reads it when a session starts and writes it every time the
/// running score climbs past it.
pub trait HighScoreStore: Debug {
    fn get(&self) -> u32;
    fn set(&mut self, score: u32);
}

/// Store that lives only as long as the process.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MemoryHighScore {
    value: u32,
}

impl MemoryHighScore {
    pub fn new(value: u32) -> Self {
        Self { value }
    }
}

impl HighScoreStore for MemoryHighScore {
    fn get(&self) -> u32 {
        self.value
    }

    fn set(&mut self, score: u32) {
        self.value = score;
    }
}
