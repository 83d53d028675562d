//! Rotation and wall kick tests

use tui_blocks::core::{
    rotate_with_kicks, tetromino, ActivePiece, Board, GameState, SequenceSource, ShapeMatrix,
};
use tui_blocks::types::{Color, GameAction, PieceKind};

#[test]
fn test_four_rotations_restore_every_shape() {
    for kind in PieceKind::ALL {
        let start = tetromino(kind).shape;
        let mut shape = start;
        for _ in 0..4 {
            shape = shape.rotated_cw();
            assert_eq!(shape.count(), 4, "{kind:?}");
        }
        assert_eq!(shape, start, "{kind:?}");
    }
}

#[test]
fn test_t_rotation_states() {
    let spawn = tetromino(PieceKind::T).shape;
    let states = [
        ShapeMatrix::from_rows([[0, 1, 0], [0, 1, 1], [0, 1, 0]]),
        ShapeMatrix::from_rows([[0, 0, 0], [1, 1, 1], [0, 1, 0]]),
        ShapeMatrix::from_rows([[0, 1, 0], [1, 1, 0], [0, 1, 0]]),
        spawn,
    ];

    let mut shape = spawn;
    for expected in states {
        shape = shape.rotated_cw();
        assert_eq!(shape, expected);
    }
}

#[test]
fn test_o_rotation_changes_nothing() {
    let board = Board::new();
    let mut piece = ActivePiece::spawn(PieceKind::O);
    let before = piece;
    assert!(rotate_with_kicks(&mut piece, &board));
    assert_eq!(piece, before);
}

#[test]
fn test_game_rotation_kicks_off_left_wall() {
    let mut game = GameState::new(SequenceSource::repeat(PieceKind::T));
    assert!(game.apply_action(GameAction::Rotate));

    // The rotated T only uses matrix columns 1 and 2, so it can hang one
    // column past the left edge of its own box.
    for _ in 0..5 {
        assert!(game.apply_action(GameAction::MoveLeft));
    }
    assert!(!game.apply_action(GameAction::MoveLeft));
    assert_eq!(game.active().x, -1);

    assert!(game.apply_action(GameAction::Rotate));
    assert_eq!(game.active().x, 0);
    assert_eq!(
        game.active().shape,
        ShapeMatrix::from_rows([[0, 0, 0], [1, 1, 1], [0, 1, 0]])
    );
}

#[test]
fn test_game_rotation_kicks_off_right_wall() {
    let mut game = GameState::new(SequenceSource::repeat(PieceKind::I));
    for _ in 0..2 {
        assert!(game.apply_action(GameAction::MoveRight));
    }
    assert!(!game.apply_action(GameAction::MoveRight));
    assert_eq!(game.active().x, 6);

    // Vertical I sits in matrix column 2: column 8 is fine as is.
    assert!(game.apply_action(GameAction::Rotate));
    assert_eq!(game.active().x, 6);

    // Push the vertical I to the wall, then back to horizontal.
    assert!(game.apply_action(GameAction::MoveRight));
    assert_eq!(game.active().x, 7);
    assert!(game.apply_action(GameAction::Rotate));
    assert_eq!(game.active().x, 6);
    assert_eq!(
        game.active().shape,
        tetromino(PieceKind::I).shape.rotated_cw().rotated_cw()
    );
}

#[test]
fn test_exhausted_kick_search_leaves_piece_unchanged() {
    let mut game = GameState::new(SequenceSource::repeat(PieceKind::I));
    // Horizontal I on matrix row 1: y = 18 rests it on the floor.
    for _ in 0..18 {
        assert!(game.apply_action(GameAction::SoftDrop));
    }
    let before = *game.active();
    assert_eq!(before.y, 18);

    // Standing up would need rows 18..=21.
    assert!(!game.apply_action(GameAction::Rotate));
    assert_eq!(*game.active(), before);
}

#[test]
fn test_rotation_blocked_by_stack_is_restored() {
    let mut board = Board::new();
    for y in 2..20 {
        board.fill_row(y, Color::from_hex(0x808080));
    }

    let mut piece = ActivePiece::spawn(PieceKind::I);
    piece.x = 3;
    let before = piece;
    assert!(!board.collides(&piece.shape, piece.x, piece.y));

    // Vertical I would reach into the filled rows wherever it goes.
    assert!(!rotate_with_kicks(&mut piece, &board));
    assert_eq!(piece, before);
}
