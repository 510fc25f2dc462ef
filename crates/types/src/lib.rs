//! Shared types and constants for pet-tetris.
//!
//! Everything here is plain data with no dependencies, so the core rules, the
//! terminal front end and the high-score store can all agree on the same
//! vocabulary without depending on each other.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9, left to right)
//! - **Height**: 20 rows (indexed 0-19, top to bottom)
//! - **Spawn row**: -1, so freshly spawned pieces poke out above the visible area
//!
//! # Drop Intervals by Level
//!
//! Gravity speeds up with level (milliseconds per row). Levels past the end of
//! the table keep using its last entry.
//!
//! | Level | Interval |
//! |-------|----------|
//! | 1 | 1000ms |
//! | 2 | 800ms |
//! | 3 | 650ms |
//! | 4 | 500ms |
//! | 5 | 400ms |
//! | 6 | 320ms |
//! | 7 | 250ms |
//! | 8 | 200ms |
//! | 9 | 160ms |
//! | 10+ | 120ms |
//!
//! # Examples
//!
//! ```
//! use pet_tetris_types::{Command, PieceKind, Rotation, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! assert_eq!(PieceKind::from_str("t"), Some(PieceKind::T));
//! assert_eq!(Rotation::from_index(5), Rotation::East);
//! assert_eq!(Command::from_str("hardDrop"), Some(Command::HardDrop));
//! assert_eq!((BOARD_WIDTH, BOARD_HEIGHT), (10, 20));
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Origin row of a freshly spawned piece.
pub const SPAWN_ROW: i8 = -1;

/// Host tick period in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Drop intervals by level (milliseconds per row), indexed by `level - 1`.
pub const DROP_INTERVALS: [u32; 10] = [1000, 800, 650, 500, 400, 320, 250, 200, 160, 120];

/// Line clear rewards indexed by rows cleared, multiplied by the level.
pub const LINE_SCORES: [u32; 5] = [0, 100, 300, 500, 800];

/// Cumulative lines needed per level step.
pub const LINES_PER_LEVEL: u32 = 10;

/// Points per row for a manual soft drop.
pub const SOFT_DROP_POINTS: u32 = 1;

/// Points per row for a hard drop.
pub const HARD_DROP_POINTS: u32 = 2;

/// The seven tetromino piece kinds
///
/// The kind is stored in locked board cells and is only used for color:
/// - **I**: Cyan, horizontal bar
/// - **J**: Blue, J-shaped
/// - **L**: Orange, L-shaped (mirror of J)
/// - **O**: Yellow, 2x2 square
/// - **S**: Green, S-shaped
/// - **T**: Magenta, T-shaped
/// - **Z**: Red, Z-shaped (mirror of S)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl PieceKind {
    /// Every kind, in catalog order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ];

    /// Parse piece kind from string (case-insensitive)
    ///
    /// ```
    /// use pet_tetris_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("O"), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            "o" => Some(PieceKind::O),
            "s" => Some(PieceKind::S),
            "t" => Some(PieceKind::T),
            "z" => Some(PieceKind::Z),
            _ => None,
        }
    }
}

/// Rotation states (North = spawn orientation)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rotation {
    North,
    East,
    South,
    West,
}

impl Rotation {
    /// Map any integer onto a rotation state, wrapping mod 4.
    pub fn from_index(index: i32) -> Self {
        match index.rem_euclid(4) {
            0 => Rotation::North,
            1 => Rotation::East,
            2 => Rotation::South,
            _ => Rotation::West,
        }
    }

    /// Rotation index in `0..4`.
    pub fn index(&self) -> u8 {
        match self {
            Rotation::North => 0,
            Rotation::East => 1,
            Rotation::South => 2,
            Rotation::West => 3,
        }
    }

    /// Rotation reached after `delta` clockwise quarter turns.
    pub fn turned(&self, delta: i8) -> Self {
        Self::from_index(self.index() as i32 + delta as i32)
    }

    /// Rotate clockwise
    pub fn rotate_cw(&self) -> Self {
        self.turned(1)
    }
}

/// Commands accepted by the game state machine.
///
/// Raw device input is mapped to these elsewhere; the core only sees the
/// command stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    MoveLeft,
    MoveRight,
    SoftDrop,
    RotateCw,
    HardDrop,
    TogglePause,
    Start,
}

impl Command {
    /// Parse a command name (case-insensitive).
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(Command::MoveLeft),
            "moveright" => Some(Command::MoveRight),
            "softdrop" => Some(Command::SoftDrop),
            "rotatecw" => Some(Command::RotateCw),
            "harddrop" => Some(Command::HardDrop),
            "togglepause" | "pause" => Some(Command::TogglePause),
            "start" | "restart" => Some(Command::Start),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Command::MoveLeft => "moveLeft",
            Command::MoveRight => "moveRight",
            Command::SoftDrop => "softDrop",
            Command::RotateCw => "rotateCw",
            Command::HardDrop => "hardDrop",
            Command::TogglePause => "togglePause",
            Command::Start => "start",
        }
    }
}

/// Lifecycle phase of a game session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GamePhase {
    /// Before the first start.
    #[default]
    Idle,
    Running,
    Paused,
    GameOver,
}

impl GamePhase {
    /// Text shown over the board, if any.
    pub fn overlay_text(&self) -> Option<&'static str> {
        match self {
            GamePhase::Idle => Some("PRESS ENTER"),
            GamePhase::Running => None,
            GamePhase::Paused => Some("PAUSED"),
            GamePhase::GameOver => Some("GAME OVER"),
        }
    }
}

/// Cell on the board (None = empty, Some = locked piece kind)
pub type Cell = Option<PieceKind>;
