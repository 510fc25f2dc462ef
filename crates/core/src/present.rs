//! Presentation seam.
//!
//! The core never draws. After a mutation the host hands a [`DrawSurface`] to
//! [`GameState::present`](crate::GameState::present), which replays the
//! current session onto it.

use crate::board::Board;
use crate::types::PieceKind;

/// Read-only numbers for a score panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Stats {
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub high_score: u32,
}

/// Something that can show a game session.
///
/// Cell coordinates are board `(x, y)`. Active cells carry their kind for
/// coloring; cells above row 0 may appear and are the surface's to clip.
pub trait DrawSurface {
    fn draw_board(&mut self, board: &Board, active: &[(i8, i8, PieceKind)]);

    fn draw_next_preview(&mut self, kind: PieceKind);

    /// `None` clears any overlay.
    fn draw_overlay(&mut self, text: Option<&str>);

    fn draw_stats(&mut self, stats: Stats);

    /// Landing position of the active piece.
    fn draw_ghost(&mut self, _cells: &[(i8, i8)]) {}
}
