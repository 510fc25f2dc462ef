//! Board module - manages the game grid
//!
//! The board is a `width x height` grid (10x20 by default) where each cell is
//! either empty or holds the kind of the piece that was locked there.
//! Storage is a flat row-major vector; dimensions never change after creation.
//!
//! Coordinates: (x, y) where x is the column (left to right) and y is the row
//! (top to bottom). Rows above the board (y < 0) are open air: pieces may
//! occupy them while falling, but nothing is ever locked there.

use crate::types::{Cell, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

/// Result of committing cells to the board.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockOutcome {
    Locked,
    /// At least one cell was above row 0. Nothing was written.
    TopOut,
}

/// The game board using flat array storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: u8,
    height: u8,
    /// Flat vector of cells, row-major order (y * width + x)
    cells: Vec<Cell>,
}

impl Board {
    /// Create an empty board.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is outside `1..=127`; coordinates are `i8`.
    pub fn new(width: u8, height: u8) -> Self {
        assert!(
            (1..=i8::MAX as u8).contains(&width) && (1..=i8::MAX as u8).contains(&height),
            "board dimensions out of range: {width}x{height}"
        );
        Self {
            width,
            height,
            cells: vec![None; width as usize * height as usize],
        }
    }

    #[inline(always)]
    fn index(&self, x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= self.width as i8 || y < 0 || y >= self.height as i8 {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Bounds test used while a piece is in play.
    ///
    /// The column must be on the board and the row must not be below the
    /// floor. Rows above the board count as inside.
    pub fn is_inside(&self, x: i8, y: i8) -> bool {
        x >= 0 && x < self.width as i8 && y < self.height as i8
    }

    /// True if a mino may not occupy (x, y).
    ///
    /// Rows at or below the floor block, as do occupied cells. Rows above the
    /// board never block.
    pub fn is_blocked(&self, x: i8, y: i8) -> bool {
        if y >= self.height as i8 {
            return true;
        }
        if y < 0 {
            return false;
        }
        match self.get(x, y) {
            Some(cell) => cell.is_some(),
            None => true,
        }
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        self.row(y)
            .map(|row| row.iter().all(|cell| cell.is_some()))
            .unwrap_or(false)
    }

    /// Cells of row `y`, left to right.
    pub fn row(&self, y: usize) -> Option<&[Cell]> {
        if y >= self.height as usize {
            return None;
        }
        let width = self.width as usize;
        Some(&self.cells[y * width..(y + 1) * width])
    }

    /// Commit `(x, y, kind)` cells.
    ///
    /// If any cell sits above row 0 the whole write is skipped and
    /// [`LockOutcome::TopOut`] is returned.
    pub fn lock_cells(&mut self, cells: &[(i8, i8, PieceKind)]) -> LockOutcome {
        if cells.iter().any(|&(_, y, _)| y < 0) {
            return LockOutcome::TopOut;
        }
        for &(x, y, kind) in cells {
            self.set(x, y, Some(kind));
        }
        LockOutcome::Locked
    }

    /// Remove every full row and return how many were removed.
    ///
    /// Single bottom-to-top pass with a read cursor and a write cursor: each
    /// row is inspected exactly once against its original contents, so rows
    /// that shift down are never skipped. Vacated rows at the top are emptied.
    pub fn clear_full_rows(&mut self) -> usize {
        let width = self.width as usize;
        let mut write_y = self.height as usize;
        let mut cleared = 0;

        for read_y in (0..self.height as usize).rev() {
            if self.is_row_full(read_y) {
                cleared += 1;
                continue;
            }
            write_y -= 1;
            if write_y != read_y {
                let src = read_y * width;
                self.cells.copy_within(src..src + width, write_y * width);
            }
        }

        self.cells[..write_y * width].fill(None);
        cleared
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    /// Build a board from text rows, `.` for empty and a piece letter for filled.
    #[cfg(test)]
    pub fn from_rows(rows: &[&str]) -> Self {
        let width = rows[0].len() as u8;
        let mut board = Board::new(width, rows.len() as u8);
        for (y, row) in rows.iter().enumerate() {
            for (x, ch) in row.chars().enumerate() {
                let cell = PieceKind::from_str(&ch.to_string());
                board.set(x as i8, y as i8, cell);
            }
        }
        board
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(BOARD_WIDTH, BOARD_HEIGHT)
    }
}
