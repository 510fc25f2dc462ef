//! Core game rules - pure, deterministic, and testable
//!
//! This crate holds the whole game: the shape catalog, the board, collision
//! predicates, scoring and the session state machine. It performs no I/O.
//! Drawing goes through [`DrawSurface`] and the best score through
//! [`HighScoreStore`]; the host supplies both.
//!
//! # Module Structure
//!
//! - [`pieces`]: seven kinds, four precomputed rotation states each, no kicks
//! - [`board`]: fixed-size grid, locking and row compaction
//! - [`collision`]: pure placement predicates and the drop probe
//! - [`scoring`]: line rewards, drop bonuses, levels, gravity table
//! - [`rng`]: uniform (bag-free) piece randomizer and a scripted source
//! - [`game_state`]: the session and its `Idle/Running/Paused/GameOver` machine
//! - [`present`]: the drawing seam
//! - [`high_score`]: the persistence seam
//!
//! # Example
//!
//! ```
//! use pet_tetris_core::GameState;
//! use pet_tetris_types::Command;
//!
//! let mut game = GameState::new(12345);
//! game.apply(Command::Start);
//!
//! game.apply(Command::MoveRight);
//! game.apply(Command::RotateCw);
//! game.apply(Command::HardDrop);
//!
//! assert!(game.score() > 0); // Hard drop awards points
//! ```
//!
//! # Timing
//!
//! Gravity is driven from outside. Call [`GameState::tick`] with elapsed
//! milliseconds, or [`GameState::tick_at`] with a monotonic timestamp; the
//! latter rebases itself on resume so paused time never causes a drop.

pub mod board;
pub mod collision;
pub mod game_state;
pub mod high_score;
pub mod pieces;
pub mod present;
pub mod rng;
pub mod scoring;

pub use pet_tetris_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, LockOutcome};
pub use collision::{can_place, drop_distance, try_place};
pub use game_state::{GameState, Tetromino};
pub use high_score::{HighScoreStore, MemoryHighScore};
pub use pieces::{get_shape, shape_at};
pub use present::{DrawSurface, Stats};
pub use rng::{PieceSource, ScriptedPieces, UniformPieces};
pub use scoring::{calculate_drop_score, calculate_score, ScoreResult};
