//! Collision predicates.
//!
//! Everything here is a pure function of a board and a hypothetical piece
//! state; nothing mutates, so callers may probe as often as they like.

use crate::board::Board;
use crate::game_state::Tetromino;

/// Can `piece`, shifted by `(dx, dy)` and turned `rotation_delta` quarter
/// turns clockwise, sit on `board`?
///
/// Every mino must have its column on the board and its row above the floor.
/// Minos above row 0 skip the occupancy check.
/// A shift whose origin leaves the `i8` range is rejected.
pub fn can_place(board: &Board, piece: &Tetromino, dx: i8, dy: i8, rotation_delta: i8) -> bool {
    try_place(board, piece, dx, dy, rotation_delta).is_some()
}

/// The shifted piece, if [`can_place`] would accept it.
pub fn try_place(
    board: &Board,
    piece: &Tetromino,
    dx: i8,
    dy: i8,
    rotation_delta: i8,
) -> Option<Tetromino> {
    piece
        .shifted(dx, dy, rotation_delta)
        .filter(|moved| fits(board, moved))
}

/// Can `piece` sit on `board` exactly where it is?
pub fn fits(board: &Board, piece: &Tetromino) -> bool {
    piece
        .cells()
        .iter()
        .all(|&(x, y)| board.is_inside(x, y) && !board.is_blocked(x, y))
}

/// How many rows `piece` can fall before it would collide.
pub fn drop_distance(board: &Board, piece: &Tetromino) -> i8 {
    let mut distance = 0;
    while distance < i8::MAX && can_place(board, piece, 0, distance + 1, 0) {
        distance += 1;
    }
    distance
}
