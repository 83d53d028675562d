use tui_blocks::core::{GameState, SequenceSource};
use tui_blocks::term::{encode_diff_into, FrameBuffer, GameView, Rgb, Viewport};
use tui_blocks::types::{Color, GameAction, PieceKind};

fn o_game() -> GameState {
    GameState::new(SequenceSource::repeat(PieceKind::O))
}

fn find_row(fb: &FrameBuffer, needle: &str) -> Option<u16> {
    (0..fb.height()).find(|&y| fb.row_text(y).contains(needle))
}

#[test]
fn term_view_renders_locked_cell_as_two_chars_wide() {
    let mut snap = o_game().snapshot();
    let red = Color::from_hex(0xf00000);
    snap.board[19][0] = Some(red);

    let fb = GameView::default().render(&snap, Viewport::new(22, 22));

    // Inside border: (1,1) origin. Each cell is 2 chars wide.
    let y0 = 1 + 19;
    for x in [1, 2] {
        let cell = fb.get(x, y0).unwrap();
        assert_eq!(cell.ch, '█');
        assert_eq!(cell.style.fg, Rgb::from(red));
    }
    assert_eq!(fb.get(3, y0).unwrap().ch, '·');
}

#[test]
fn term_view_centres_the_well() {
    let fb = GameView::default().render(&o_game().snapshot(), Viewport::new(30, 26));
    // (30 - 22) / 2 = 4, (26 - 22) / 2 = 2.
    assert_eq!(fb.get(4, 2).unwrap().ch, '┌');
    assert_eq!(fb.get(25, 23).unwrap().ch, '┘');
}

#[test]
fn term_view_draws_side_panel_when_wide_enough() {
    let mut snap = o_game().snapshot();
    snap.score = 1234;
    snap.drop_interval_ms = 900;

    let fb = GameView::default().render(&snap, Viewport::new(60, 24));
    let score_row = find_row(&fb, "SCORE").expect("score label");
    assert!(fb.row_text(score_row + 1).contains("1234"));

    let speed_row = find_row(&fb, "SPEED").expect("speed label");
    assert!(fb.row_text(speed_row + 1).contains("900ms"));
}

#[test]
fn term_view_hides_side_panel_when_narrow() {
    let fb = GameView::default().render(&o_game().snapshot(), Viewport::new(24, 22));
    assert_eq!(find_row(&fb, "SCORE"), None);
}

#[test]
fn term_view_shows_pause_overlay() {
    let mut game = o_game();
    game.apply_action(GameAction::Pause);
    let fb = GameView::default().render(&game.snapshot(), Viewport::new(40, 24));
    assert!(find_row(&fb, "PAUSED").is_some());
    assert_eq!(find_row(&fb, "GAME OVER"), None);
}

#[test]
fn term_view_shows_game_over_after_topping_out() {
    let mut game = o_game();
    for _ in 0..10 {
        game.apply_action(GameAction::HardDrop);
    }
    assert!(game.game_over());

    let fb = GameView::default().render(&game.snapshot(), Viewport::new(40, 24));
    assert!(find_row(&fb, "GAME OVER").is_some());
}

#[test]
fn term_render_into_reuses_buffer_and_diffs_moves() {
    let view = GameView::default();
    let vp = Viewport::new(40, 24);
    let mut game = o_game();

    let before = view.render(&game.snapshot(), vp);
    game.apply_action(GameAction::MoveLeft);

    let mut after = FrameBuffer::new(1, 1);
    view.render_into(&game.snapshot(), vp, &mut after);
    assert_eq!((after.width(), after.height()), (40, 24));
    assert_ne!(before, after);

    let mut diff = Vec::new();
    encode_diff_into(&before, &after, &mut diff).unwrap();
    let mut same = Vec::new();
    encode_diff_into(&after, &after, &mut same).unwrap();
    assert!(diff.len() > same.len());
}
