//! Integration tests for the game loop: whole sessions driven through the
//! public API, the way the binary drives them.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use pet_tetris::core::{Board, GameState, MemoryHighScore, ScriptedPieces};
use pet_tetris::input::handle_key_event;
use pet_tetris::types::{Command, GamePhase, PieceKind};

fn scripted(kinds: &[PieceKind]) -> GameState {
    GameState::with_sources(
        Board::default(),
        Box::new(ScriptedPieces::new(kinds.iter().copied())),
        Box::new(MemoryHighScore::default()),
    )
}

/// Fill the bottom row except the four columns an unrotated I spawns over.
fn leave_i_gap(game: &mut GameState) {
    for x in 0..10 {
        if !(3..=6).contains(&x) {
            game.board_mut().set(x, 19, Some(PieceKind::Z));
        }
    }
}

#[test]
fn test_game_lifecycle() {
    let mut game = GameState::new(12345);
    assert_eq!(game.phase(), GamePhase::Idle);
    assert!(!game.running());

    assert!(game.apply(Command::Start));
    assert_eq!(game.phase(), GamePhase::Running);
    assert!(game.active().is_some());
    assert!(game.next_piece().is_some());
}

#[test]
fn test_same_seed_same_pieces() {
    let mut a = GameState::new(99);
    let mut b = GameState::new(99);
    a.start();
    b.start();
    for _ in 0..20 {
        assert_eq!(a.active().map(|p| p.kind), b.active().map(|p| p.kind));
        assert_eq!(a.next_piece(), b.next_piece());
        a.hard_drop();
        b.hard_drop();
        if a.game_over() {
            break;
        }
    }
    assert_eq!(a.score(), b.score());
}

#[test]
fn test_o_hard_drop_to_the_floor() {
    let mut game = scripted(&[PieceKind::O]);
    game.start();

    assert!(game.apply(Command::HardDrop));
    assert_eq!(game.score(), 38);
    assert_eq!(game.lines(), 0);
    for (x, y) in [(4, 18), (5, 18), (4, 19), (5, 19)] {
        assert_eq!(game.board().get(x, y), Some(Some(PieceKind::O)));
    }
    assert_eq!(game.board().cells().iter().filter(|c| c.is_some()).count(), 4);
}

#[test]
fn test_completing_a_row_clears_it() {
    let mut game = scripted(&[PieceKind::I]);
    game.start();
    leave_i_gap(&mut game);
    game.board_mut().set(0, 18, Some(PieceKind::J));

    game.hard_drop();

    assert_eq!(game.lines(), 1);
    assert_eq!(game.score(), 38 + 100);
    // The row above slid down; row 0 is empty.
    assert_eq!(game.board().get(0, 19), Some(Some(PieceKind::J)));
    assert!(game.board().row(0).unwrap().iter().all(|c| c.is_none()));
    assert_eq!(game.board().cells().iter().filter(|c| c.is_some()).count(), 1);
}

#[test]
fn test_blocked_spawn_after_lock_ends_game() {
    let mut game = scripted(&[PieceKind::I, PieceKind::T]);
    game.start();
    // A shelf right under the spawn row: the I locks on row 0 where it stands.
    for x in 0..9 {
        game.board_mut().set(x, 1, Some(PieceKind::L));
    }
    let mut expected = game.board().clone();
    for x in 3..=6 {
        expected.set(x, 0, Some(PieceKind::I));
    }

    assert!(game.apply(Command::HardDrop));
    assert_eq!(game.score(), 0);
    // The T that follows overlaps row 0 straight away.
    assert_eq!(game.phase(), GamePhase::GameOver);
    assert!(game.active().is_none());
    assert_eq!(game.board(), &expected);

    assert!(!game.apply(Command::HardDrop));
    assert!(!game.apply(Command::MoveLeft));
    assert!(!game.tick(10_000));
}

#[test]
fn test_moves_past_the_coordinate_range_are_rejected() {
    let mut game = scripted(&[PieceKind::O]);
    game.start();
    let before = game.active();

    assert!(!game.try_move(i8::MAX, 0));
    assert!(!game.try_move(0, i8::MAX));
    assert!(!game.try_move(i8::MIN, 0));
    assert_eq!(game.active(), before);
    assert_eq!(game.phase(), GamePhase::Running);
}

#[test]
fn test_stacking_to_the_top_ends_the_game() {
    let mut game = scripted(&[PieceKind::O]);
    game.start();

    let mut drops = 0;
    while game.apply(Command::HardDrop) {
        drops += 1;
        assert!(drops <= 10, "stack never topped out");
    }

    assert_eq!(drops, 10);
    assert!(game.game_over());
    // Distances 19, 17, ..., 1 at two points a row.
    assert_eq!(game.score(), 200);
    assert_eq!(game.high_score(), 200);
    assert!(game.board().is_occupied(4, 0));
}

#[test]
fn test_pause_and_resume_does_not_drop() {
    let mut game = scripted(&[PieceKind::T]);
    game.start();
    let y = game.active().unwrap().y;

    game.tick_at(1_000);
    game.tick_at(1_500);
    assert!(game.apply(Command::TogglePause));
    assert_eq!(game.phase(), GamePhase::Paused);
    assert!(!game.tick_at(100_000));
    assert!(!game.apply(Command::RotateCw));
    assert!(game.apply(Command::TogglePause));

    assert!(!game.tick_at(200_000));
    assert_eq!(game.active().unwrap().y, y);
    assert!(game.tick_at(200_500));
    assert_eq!(game.active().unwrap().y, y + 1);
}

#[test]
fn test_levels_and_gravity() {
    let mut game = scripted(&[PieceKind::I]);
    game.start();
    assert_eq!(game.drop_interval_ms(), 1000);

    for _ in 0..10 {
        leave_i_gap(&mut game);
        game.hard_drop();
    }
    assert_eq!(game.lines(), 10);
    assert_eq!(game.level(), 2);
    assert_eq!(game.drop_interval_ms(), 800);
    // Every one of those clears was scored at level 1.
    assert_eq!(game.score(), 10 * (38 + 100));

    leave_i_gap(&mut game);
    game.hard_drop();
    assert_eq!(game.score(), 10 * (38 + 100) + 38 + 200);
}

#[test]
fn test_gravity_follows_the_level() {
    let mut game = scripted(&[PieceKind::I]);
    game.start();
    for _ in 0..10 {
        leave_i_gap(&mut game);
        game.hard_drop();
    }
    let y = game.active().unwrap().y;
    assert!(!game.tick(799));
    assert!(game.tick(1));
    assert_eq!(game.active().unwrap().y, y + 1);
}

#[test]
fn test_restart_resets_counters() {
    let mut game = scripted(&[PieceKind::I]);
    game.start();
    leave_i_gap(&mut game);
    game.hard_drop();
    assert!(game.score() > 0);

    assert!(game.apply(Command::Start));
    assert_eq!(game.score(), 0);
    assert_eq!(game.lines(), 0);
    assert_eq!(game.level(), 1);
    assert_eq!(game.high_score(), 138);
    assert!(game.board().cells().iter().all(|c| c.is_none()));
}

#[test]
fn test_keys_drive_the_session() {
    let key = |code| handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));

    let mut game = scripted(&[PieceKind::O]);
    game.apply(key(KeyCode::Enter).unwrap());
    assert!(game.running());

    let x = game.active().unwrap().x;
    game.apply(key(KeyCode::Left).unwrap());
    assert_eq!(game.active().unwrap().x, x - 1);

    game.apply(key(KeyCode::Char('p')).unwrap());
    assert!(game.paused());
    game.apply(key(KeyCode::Char('p')).unwrap());

    game.apply(key(KeyCode::Char(' ')).unwrap());
    assert_eq!(game.board().get(3, 19), Some(Some(PieceKind::O)));
}
