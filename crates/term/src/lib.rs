//! Terminal front end.
//!
//! [`GameView`] implements the core's `DrawSurface` by painting into a
//! [`FrameBuffer`]; [`TerminalRenderer`] flushes framebuffers to the terminal
//! with crossterm, writing only what changed since the last frame.
//!
//! Keeping the view pure means layout can be unit-tested without a terminal.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use pet_tetris_core as core;
pub use pet_tetris_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
