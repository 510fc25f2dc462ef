//! Game state module - the session and its state machine
//!
//! [`GameState`] owns the board, the active piece, the next-piece preview and
//! the score counters, and is the only thing that mutates them. Every request
//! is checked against [`collision::can_place`] first; illegal requests are
//! rejected by returning `false` and leave the session untouched.
//!
//! Lifecycle: `Idle -> Running <-> Paused`, `Running -> GameOver`, and
//! `Start` from any phase begins a fresh session.

use tracing::{debug, info};

use crate::board::{Board, LockOutcome};
use crate::collision::{self, try_place};
use crate::high_score::{HighScoreStore, MemoryHighScore};
use crate::pieces::{get_shape, PieceShape, SHAPE_FRAME};
use crate::present::{DrawSurface, Stats};
use crate::rng::{PieceSource, UniformPieces};
use crate::scoring::{calculate_drop_score, calculate_score, drop_interval_ms};
use crate::types::*;

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tetromino {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub x: i8,
    pub y: i8,
}

impl Tetromino {
    pub fn new(kind: PieceKind, x: i8, y: i8) -> Self {
        Self {
            kind,
            rotation: Rotation::North,
            x,
            y,
        }
    }

    /// Spawn placement: shape frame centered horizontally, origin on
    /// [`SPAWN_ROW`] so the piece starts partly above the board.
    pub fn spawn(kind: PieceKind, board_width: u8) -> Self {
        let x = (board_width as i8 - SHAPE_FRAME) / 2;
        Self::new(kind, x, SPAWN_ROW)
    }

    /// Get the shape (mino offsets) for current rotation
    pub fn shape(&self) -> PieceShape {
        get_shape(self.kind, self.rotation)
    }

    /// Absolute board cells.
    ///
    /// Offsets are non-negative, so a cell past `i8::MAX` clamps to a
    /// column or row no board contains.
    pub fn cells(&self) -> [(i8, i8); 4] {
        self.shape()
            .map(|(dx, dy)| (self.x.saturating_add(dx), self.y.saturating_add(dy)))
    }

    /// Hypothetical copy moved by `(dx, dy)` and turned `rotation_delta`
    /// quarter turns clockwise. `None` if the origin leaves the `i8` range.
    pub fn shifted(&self, dx: i8, dy: i8, rotation_delta: i8) -> Option<Self> {
        Some(Self {
            rotation: self.rotation.turned(rotation_delta),
            x: self.x.checked_add(dx)?,
            y: self.y.checked_add(dy)?,
            ..*self
        })
    }
}

/// Complete game state
#[derive(Debug)]
pub struct GameState {
    board: Board,
    active: Option<Tetromino>,
    next: Option<PieceKind>,
    pieces: Box<dyn PieceSource>,
    high_scores: Box<dyn HighScoreStore>,
    phase: GamePhase,
    score: u32,
    level: u32,
    lines: u32,
    high_score: u32,
    drop_interval_ms: u32,
    /// Time accumulated toward the next gravity step.
    drop_timer_ms: u32,
    /// Basis for [`GameState::tick_at`]; cleared whenever play stops so the
    /// next timestamp starts a fresh interval.
    last_tick_at: Option<u64>,
}

impl GameState {
    /// Create an idle game on a 10x20 board with uniform random pieces and an
    /// in-memory high score.
    pub fn new(seed: u64) -> Self {
        Self::with_sources(
            Board::default(),
            Box::new(UniformPieces::new(seed)),
            Box::new(MemoryHighScore::default()),
        )
    }

    /// Create an idle game from explicit parts. The board's dimensions are
    /// kept for every session; its contents are wiped on start.
    pub fn with_sources(
        board: Board,
        pieces: Box<dyn PieceSource>,
        high_scores: Box<dyn HighScoreStore>,
    ) -> Self {
        let high_score = high_scores.get();
        Self {
            board,
            active: None,
            next: None,
            pieces,
            high_scores,
            phase: GamePhase::Idle,
            score: 0,
            level: 1,
            lines: 0,
            high_score,
            drop_interval_ms: drop_interval_ms(1),
            drop_timer_ms: 0,
            last_tick_at: None,
        }
    }

    /// Start a fresh session, discarding any previous one.
    pub fn start(&mut self) {
        self.board.clear();
        self.active = None;
        self.score = 0;
        self.level = 1;
        self.lines = 0;
        self.drop_interval_ms = drop_interval_ms(1);
        self.drop_timer_ms = 0;
        self.last_tick_at = None;
        self.high_score = self.high_scores.get();
        self.next = Some(self.pieces.next_kind());
        self.phase = GamePhase::Running;
        info!(high_score = self.high_score, "session started");
        self.spawn_piece();
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn running(&self) -> bool {
        matches!(self.phase, GamePhase::Running | GamePhase::Paused)
    }

    pub fn paused(&self) -> bool {
        self.phase == GamePhase::Paused
    }

    pub fn game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn drop_interval_ms(&self) -> u32 {
        self.drop_interval_ms
    }

    pub fn next_piece(&self) -> Option<PieceKind> {
        self.next
    }

    pub fn active(&self) -> Option<Tetromino> {
        self.active
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Direct board access for setting up scenarios. Bypasses every rule.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn stats(&self) -> Stats {
        Stats {
            score: self.score,
            level: self.level,
            lines: self.lines,
            high_score: self.high_score,
        }
    }

    /// Promote the next piece to active and draw a new next piece.
    ///
    /// If the fresh piece already overlaps locked cells the game is over and
    /// no piece becomes active. Returns whether a piece entered play.
    pub(crate) fn spawn_piece(&mut self) -> bool {
        let kind = match self.next.take() {
            Some(kind) => kind,
            None => self.pieces.next_kind(),
        };
        self.next = Some(self.pieces.next_kind());

        let piece = Tetromino::spawn(kind, self.board.width());
        self.drop_timer_ms = 0;

        if !collision::fits(&self.board, &piece) {
            debug!(?kind, "spawn blocked");
            self.active = None;
            self.end_game();
            return false;
        }

        debug!(?kind, next = ?self.next, "spawned");
        self.active = Some(piece);
        true
    }

    /// Advance gravity by `elapsed_ms`.
    ///
    /// Does nothing unless running and unpaused. Once the accumulated time
    /// reaches the drop interval the piece falls one row, or locks if it
    /// cannot. Returns whether the session changed.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if self.phase != GamePhase::Running {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };

        self.drop_timer_ms = self.drop_timer_ms.saturating_add(elapsed_ms);
        if self.drop_timer_ms < self.drop_interval_ms {
            return false;
        }

        match try_place(&self.board, &active, 0, 1, 0) {
            Some(fallen) => {
                self.active = Some(fallen);
                self.drop_timer_ms = 0;
            }
            None => self.lock_piece(),
        }
        true
    }

    /// Advance gravity to the monotonic timestamp `now_ms`.
    ///
    /// The first timestamp after start or resume only sets the basis, so time
    /// spent paused (or idle) never counts toward a drop.
    pub fn tick_at(&mut self, now_ms: u64) -> bool {
        if self.phase != GamePhase::Running {
            self.last_tick_at = None;
            return false;
        }
        let elapsed = match self.last_tick_at {
            Some(prev) => now_ms.saturating_sub(prev),
            None => 0,
        };
        self.last_tick_at = Some(now_ms);
        self.tick(u32::try_from(elapsed).unwrap_or(u32::MAX))
    }

    /// Try to move the active piece
    ///
    /// Moving down earns the soft drop bonus and restarts the gravity timer.
    pub fn try_move(&mut self, dx: i8, dy: i8) -> bool {
        if self.phase != GamePhase::Running {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };
        let Some(moved) = try_place(&self.board, &active, dx, dy, 0) else {
            return false;
        };

        self.active = Some(moved);
        if dy > 0 {
            self.add_score(calculate_drop_score(dy as u32, false));
            self.drop_timer_ms = 0;
        }
        true
    }

    /// Rotate clockwise in place. There are no kicks: a blocked rotation is
    /// simply refused.
    pub fn try_rotate(&mut self) -> bool {
        if self.phase != GamePhase::Running {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };
        let Some(rotated) = try_place(&self.board, &active, 0, 0, 1) else {
            return false;
        };
        self.active = Some(rotated);
        true
    }

    /// Drop the active piece as far as it goes and lock it.
    ///
    /// Returns the bonus awarded for the fall.
    pub fn hard_drop(&mut self) -> u32 {
        if self.phase != GamePhase::Running {
            return 0;
        }
        let Some(active) = self.active else {
            return 0;
        };

        let distance = collision::drop_distance(&self.board, &active);
        self.active = Some(try_place(&self.board, &active, 0, distance, 0).unwrap_or(active));

        let bonus = calculate_drop_score(distance as u32, true);
        self.add_score(bonus);
        self.lock_piece();
        bonus
    }

    /// Lock the active piece onto the board and handle line clears
    pub(crate) fn lock_piece(&mut self) {
        let Some(active) = self.active.take() else {
            return;
        };

        let cells = active.cells().map(|(x, y)| (x, y, active.kind));
        if self.board.lock_cells(&cells) == LockOutcome::TopOut {
            debug!(kind = ?active.kind, y = active.y, "locked above the board");
            self.end_game();
            return;
        }

        let cleared = self.board.clear_full_rows();
        let result = calculate_score(cleared, self.level, self.lines);
        if cleared > 0 {
            debug!(
                cleared,
                points = result.points,
                level = result.level,
                "rows cleared"
            );
        }
        if result.leveled_up(self.level) {
            info!(level = result.level, interval_ms = result.drop_interval_ms, "level up");
        }

        self.lines = result.total_lines;
        self.level = result.level;
        self.drop_interval_ms = result.drop_interval_ms;
        self.add_score(result.points);

        self.spawn_piece();
    }

    /// Pause or resume. Has no effect outside a session.
    pub fn toggle_pause(&mut self) -> bool {
        self.phase = match self.phase {
            GamePhase::Running => GamePhase::Paused,
            GamePhase::Paused => GamePhase::Running,
            GamePhase::Idle | GamePhase::GameOver => return false,
        };
        self.last_tick_at = None;
        true
    }

    /// Apply one command from the input stream.
    pub fn apply(&mut self, command: Command) -> bool {
        match command {
            Command::MoveLeft => self.try_move(-1, 0),
            Command::MoveRight => self.try_move(1, 0),
            Command::SoftDrop => self.try_move(0, 1),
            Command::RotateCw => self.try_rotate(),
            Command::HardDrop => {
                if self.phase != GamePhase::Running || self.active.is_none() {
                    return false;
                }
                self.hard_drop();
                true
            }
            Command::TogglePause => self.toggle_pause(),
            Command::Start => {
                self.start();
                true
            }
        }
    }

    /// Row the active piece would land on.
    pub fn ghost_y(&self) -> Option<i8> {
        let active = self.active?;
        Some(active.y.saturating_add(collision::drop_distance(&self.board, &active)))
    }

    /// Replay the session onto a draw surface.
    pub fn present(&self, surface: &mut impl DrawSurface) {
        match self.active {
            Some(active) => {
                let cells = active.cells().map(|(x, y)| (x, y, active.kind));
                surface.draw_board(&self.board, &cells);
                if let Some(ghost_y) = self.ghost_y() {
                    surface.draw_ghost(&Tetromino { y: ghost_y, ..active }.cells());
                }
            }
            None => surface.draw_board(&self.board, &[]),
        }
        if let Some(next) = self.next {
            surface.draw_next_preview(next);
        }
        surface.draw_stats(self.stats());
        surface.draw_overlay(self.phase.overlay_text());
    }

    fn add_score(&mut self, points: u32) {
        if points == 0 {
            return;
        }
        self.score = self.score.saturating_add(points);
        if self.score > self.high_score {
            self.high_score = self.score;
            self.high_scores.set(self.score);
        }
    }

    fn end_game(&mut self) {
        self.phase = GamePhase::GameOver;
        self.last_tick_at = None;
        info!(
            score = self.score,
            lines = self.lines,
            level = self.level,
            "game over"
        );
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
