//! Pet Tetris (workspace facade crate).
//!
//! Re-exports the workspace crates under one roof as
//! `pet_tetris::{core,input,store,term,types}` and adds the runtime
//! [`config`] read by the binary.

pub mod config;

pub use pet_tetris_core as core;
pub use pet_tetris_input as input;
pub use pet_tetris_store as store;
pub use pet_tetris_term as term;
pub use pet_tetris_types as types;
