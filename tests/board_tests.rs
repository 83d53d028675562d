//! Board tests: bounds, collision, merge and line clearing

use tui_blocks::core::{tetromino, Board, ShapeMatrix};
use tui_blocks::types::{Color, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

const GREY: Color = Color::from_hex(0x808080);
const RED: Color = Color::from_hex(0xf00000);

fn o_shape() -> ShapeMatrix {
    tetromino(PieceKind::O).shape
}

#[test]
fn test_board_new_empty() {
    let board = Board::new();
    assert_eq!(board.width(), BOARD_WIDTH);
    assert_eq!(board.height(), BOARD_HEIGHT);
    assert_eq!(board.occupied_count(), 0);

    for y in 0..BOARD_HEIGHT as i8 {
        for x in 0..BOARD_WIDTH as i8 {
            assert_eq!(board.get(x, y), Some(None), "cell ({x}, {y})");
        }
    }
}

#[test]
fn test_board_get_out_of_bounds() {
    let board = Board::new();
    assert_eq!(board.get(-1, 0), None);
    assert_eq!(board.get(0, -1), None);
    assert_eq!(board.get(BOARD_WIDTH as i8, 0), None);
    assert_eq!(board.get(0, BOARD_HEIGHT as i8), None);
}

#[test]
fn test_board_set_out_of_bounds() {
    let mut board = Board::new();
    assert!(!board.set(-1, 0, Some(GREY)));
    assert!(!board.set(0, BOARD_HEIGHT as i8, Some(GREY)));
    assert!(board.set(9, 19, Some(GREY)));
    assert!(board.is_occupied(9, 19));
}

#[test]
fn test_collision_at_walls_and_floor() {
    let board = Board::new();
    let o = o_shape();

    assert!(board.collides(&o, -1, 0));
    assert!(!board.collides(&o, 8, 0));
    assert!(board.collides(&o, 9, 0));
    assert!(!board.collides(&o, 0, 18));
    assert!(board.collides(&o, 0, 19));
}

#[test]
fn test_rows_above_top_never_collide() {
    let mut board = Board::new();
    let o = o_shape();

    // Entirely above the board.
    assert!(!board.collides(&o, 0, -2));
    assert!(!board.collides(&o, 0, -1));

    // Straddling the top edge still sees the visible row.
    board.set(0, 0, Some(GREY));
    assert!(board.collides(&o, 0, -1));
    assert!(!board.collides(&o, 0, -2));
}

#[test]
fn test_collision_with_locked_cell() {
    let mut board = Board::new();
    board.set(5, 10, Some(GREY));
    let o = o_shape();

    assert!(board.collides(&o, 4, 9));
    assert!(board.collides(&o, 5, 10));
    assert!(!board.collides(&o, 6, 10));
    assert!(!board.collides(&o, 3, 9));
}

#[test]
fn test_merge_drops_cells_above_top() {
    let mut board = Board::new();
    board.merge(&o_shape(), 0, -1, RED);

    assert_eq!(board.occupied_count(), 2);
    assert_eq!(board.get(0, 0), Some(Some(RED)));
    assert_eq!(board.get(1, 0), Some(Some(RED)));
}

#[test]
fn test_clear_on_empty_board() {
    let mut board = Board::new();
    assert!(board.clear_full_rows().is_empty());
    assert_eq!(board, Board::new());
}

#[test]
fn test_clear_two_bottom_rows_shifts_remainder() {
    let mut board = Board::new();
    board.fill_row(18, GREY);
    board.fill_row(19, GREY);
    board.set(0, 17, Some(RED));

    let cleared = board.clear_full_rows();
    assert_eq!(cleared.as_slice(), &[19, 18]);

    assert_eq!(board.get(0, 19), Some(Some(RED)));
    assert_eq!(board.occupied_count(), 1);
    for y in 0..19 {
        assert!(!board.is_row_full(y));
    }
}

#[test]
fn test_clear_non_adjacent_rows() {
    let mut board = Board::new();
    board.fill_row(17, GREY);
    board.set(3, 18, Some(RED));
    board.fill_row(19, GREY);
    board.set(7, 16, Some(RED));

    let cleared = board.clear_full_rows();
    assert_eq!(cleared.as_slice(), &[19, 17]);

    // Old row 18 drops one row, old row 16 drops two.
    assert_eq!(board.get(3, 19), Some(Some(RED)));
    assert_eq!(board.get(7, 18), Some(Some(RED)));
    assert_eq!(board.occupied_count(), 2);
}

#[test]
fn test_clear_four_rows_leaves_empty_top() {
    let mut board = Board::new();
    for y in 16..20 {
        board.fill_row(y, GREY);
    }
    board.set(4, 15, Some(RED));

    assert_eq!(board.clear_full_rows().len(), 4);
    assert_eq!(board.get(4, 19), Some(Some(RED)));
    for y in 0..4 {
        assert_eq!(board.rows()[y], [None; 10]);
    }
}

#[test]
fn test_from_rows_matches_rows() {
    let mut rows = Board::new().rows();
    rows[19][0] = Some(RED);
    rows[0][9] = Some(GREY);

    let board = Board::from_rows(&rows);
    assert_eq!(board.rows(), rows);
    assert_eq!(board.get(0, 19), Some(Some(RED)));
    assert_eq!(board.get(9, 0), Some(Some(GREY)));
}
