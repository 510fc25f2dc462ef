//! GameView: a [`DrawSurface`] that paints into a terminal framebuffer.
//!
//! This module is pure (no I/O). A frame is built by calling
//! [`GameView::begin_frame`], then letting the game present itself, then
//! handing [`GameView::frame_mut`] to the renderer.

use crate::core::pieces::get_shape;
use crate::core::{Board, DrawSurface, Stats};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{PieceKind, Rotation, BOARD_HEIGHT, BOARD_WIDTH};

const WELL_BG: Rgb = Rgb::new(30, 30, 40);
const SCREEN_BG: Rgb = Rgb::new(0, 0, 0);

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Where the bordered well sits in the frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Layout {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
}

/// Terminal presentation of one game session.
#[derive(Debug)]
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    viewport: Viewport,
    fb: FrameBuffer,
    layout: Option<Layout>,
    active: Vec<(i8, i8)>,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self::new(2, 1)
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            viewport: Viewport::new(0, 0),
            fb: FrameBuffer::new(0, 0),
            layout: None,
            active: Vec::with_capacity(4),
        }
    }

    /// Blank the framebuffer at the viewport's size.
    pub fn begin_frame(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.fb.reset(viewport.width, viewport.height);
        self.layout = None;
        self.active.clear();
    }

    pub fn frame(&self) -> &FrameBuffer {
        &self.fb
    }

    pub fn frame_mut(&mut self) -> &mut FrameBuffer {
        &mut self.fb
    }

    fn layout_for(&self, board_w: u8, board_h: u8) -> Layout {
        let w = board_w as u16 * self.cell_w + 2;
        let h = board_h as u16 * self.cell_h + 2;
        Layout {
            x: self.viewport.width.saturating_sub(w) / 2,
            y: self.viewport.height.saturating_sub(h) / 2,
            w,
            h,
        }
    }

    fn layout(&self) -> Layout {
        self.layout
            .unwrap_or_else(|| self.layout_for(BOARD_WIDTH, BOARD_HEIGHT))
    }

    fn fill_board_cell(&mut self, layout: Layout, x: i8, y: i8, ch: char, style: CellStyle) {
        if x < 0 || y < 0 {
            return;
        }
        let px = layout.x + 1 + x as u16 * self.cell_w;
        let py = layout.y + 1 + y as u16 * self.cell_h;
        if px >= layout.x + layout.w - 1 || py >= layout.y + layout.h - 1 {
            return;
        }
        self.fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn panel_x(&self) -> Option<u16> {
        let layout = self.layout();
        let x = layout.x.saturating_add(layout.w).saturating_add(2);
        (x.saturating_add(10) <= self.viewport.width).then_some(x)
    }
}

impl DrawSurface for GameView {
    fn draw_board(&mut self, board: &Board, active: &[(i8, i8, PieceKind)]) {
        let layout = self.layout_for(board.width(), board.height());
        self.layout = Some(layout);

        let border = CellStyle::plain(Rgb::new(200, 200, 200), SCREEN_BG);
        self.fb.draw_box(layout.x, layout.y, layout.w, layout.h, border);

        let empty = CellStyle::plain(Rgb::new(90, 90, 100), WELL_BG).dim();
        for y in 0..board.height() as i8 {
            for x in 0..board.width() as i8 {
                match board.get(x, y).flatten() {
                    Some(kind) => self.fill_board_cell(layout, x, y, '█', piece_style(kind)),
                    None => self.fill_board_cell(layout, x, y, '·', empty),
                }
            }
        }

        for &(x, y, kind) in active {
            self.fill_board_cell(layout, x, y, '█', piece_style(kind).bold());
            self.active.push((x, y));
        }
    }

    fn draw_ghost(&mut self, cells: &[(i8, i8)]) {
        let layout = self.layout();
        let style = CellStyle::plain(Rgb::new(140, 140, 140), WELL_BG).dim();
        for &(x, y) in cells {
            if !self.active.contains(&(x, y)) {
                self.fill_board_cell(layout, x, y, '░', style);
            }
        }
    }

    fn draw_next_preview(&mut self, kind: PieceKind) {
        let Some(px) = self.panel_x() else {
            return;
        };
        let top = self.layout().y;
        self.fb.put_str(px, top, "NEXT", label_style());
        for (dx, dy) in get_shape(kind, Rotation::North) {
            let x = px + dx as u16 * 2;
            let y = top + 1 + dy as u16;
            self.fb.fill_rect(x, y, 2, 1, '█', piece_style(kind));
        }
    }

    fn draw_stats(&mut self, stats: Stats) {
        let Some(px) = self.panel_x() else {
            return;
        };
        let mut y = self.layout().y + 6;
        let value = CellStyle::plain(Rgb::new(200, 200, 200), SCREEN_BG);
        for (label, number) in [
            ("SCORE", stats.score),
            ("LEVEL", stats.level),
            ("LINES", stats.lines),
            ("HIGH", stats.high_score),
        ] {
            self.fb.put_str(px, y, label, label_style());
            self.fb.put_u32(px, y + 1, number, value);
            y += 3;
        }
    }

    fn draw_overlay(&mut self, text: Option<&str>) {
        let Some(text) = text else {
            return;
        };
        let layout = self.layout();
        let text_w = text.chars().count() as u16;
        let x = layout.x + layout.w.saturating_sub(text_w) / 2;
        let y = layout.y + layout.h / 2;
        let style = CellStyle::plain(Rgb::new(255, 255, 255), SCREEN_BG).bold();
        self.fb.put_str(x, y, text, style);
    }
}

fn label_style() -> CellStyle {
    CellStyle::plain(Rgb::new(220, 220, 220), SCREEN_BG).bold()
}

fn piece_style(kind: PieceKind) -> CellStyle {
    let fg = match kind {
        PieceKind::I => Rgb::new(80, 220, 220),
        PieceKind::J => Rgb::new(80, 120, 220),
        PieceKind::L => Rgb::new(255, 165, 0),
        PieceKind::O => Rgb::new(240, 220, 80),
        PieceKind::S => Rgb::new(100, 220, 120),
        PieceKind::T => Rgb::new(200, 120, 220),
        PieceKind::Z => Rgb::new(220, 80, 80),
    };
    CellStyle::plain(fg, WELL_BG)
}
