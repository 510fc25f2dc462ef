//! Terminal input: maps `crossterm` key events onto [`Command`]s.
//!
//! The game core only understands the command stream; everything about
//! physical keys lives here.

pub mod map;

pub use pet_tetris_types as types;

pub use map::{handle_key_event, should_quit};
pub use types::Command;
