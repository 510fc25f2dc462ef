//! Shape catalog tests

use std::collections::HashSet;

use pet_tetris::core::{get_shape, shape_at};
use pet_tetris::types::{PieceKind, Rotation};

const ROTATIONS: [Rotation; 4] = [
    Rotation::North,
    Rotation::East,
    Rotation::South,
    Rotation::West,
];

#[test]
fn test_every_state_has_four_distinct_cells_in_frame() {
    for kind in PieceKind::ALL {
        for rotation in ROTATIONS {
            let shape = get_shape(kind, rotation);
            let unique: HashSet<_> = shape.iter().copied().collect();
            assert_eq!(unique.len(), 4, "{kind:?} {rotation:?}");
            for (x, y) in shape {
                assert!((0..4).contains(&x) && (0..4).contains(&y), "{kind:?} {rotation:?}");
            }
        }
    }
}

#[test]
fn test_o_is_rotation_invariant() {
    let north = get_shape(PieceKind::O, Rotation::North);
    for rotation in ROTATIONS {
        assert_eq!(get_shape(PieceKind::O, rotation), north);
    }
}

#[test]
fn test_i_horizontal_and_vertical() {
    let north = get_shape(PieceKind::I, Rotation::North);
    assert!(north.iter().all(|&(_, y)| y == north[0].1));
    let east = get_shape(PieceKind::I, Rotation::East);
    assert!(east.iter().all(|&(x, _)| x == east[0].0));
}

#[test]
fn test_north_states_touch_the_second_frame_row() {
    // Spawning at row -1 puts local row 1 on board row 0.
    for kind in PieceKind::ALL {
        let shape = get_shape(kind, Rotation::North);
        assert!(shape.iter().any(|&(_, y)| y == 1), "{kind:?}");
        assert!(shape.iter().all(|&(_, y)| y <= 1), "{kind:?}");
    }
}

#[test]
fn test_rotation_indices_wrap() {
    for kind in PieceKind::ALL {
        assert_eq!(shape_at(kind, 4), shape_at(kind, 0));
        assert_eq!(shape_at(kind, -1), shape_at(kind, 3));
        assert_eq!(shape_at(kind, 1), get_shape(kind, Rotation::East));
    }
}

#[test]
fn test_four_clockwise_turns_return_home() {
    let mut rotation = Rotation::North;
    for _ in 0..4 {
        rotation = rotation.rotate_cw();
    }
    assert_eq!(rotation, Rotation::North);
    assert_eq!(Rotation::North.turned(-1), Rotation::West);
}
