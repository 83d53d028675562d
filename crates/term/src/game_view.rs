//! GameView: maps a [`GameSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::{Color, BOARD_HEIGHT, BOARD_WIDTH};

const WELL_BG: Rgb = Rgb::new(30, 30, 40);
const PANEL_BG: Rgb = Rgb::new(0, 0, 0);

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

/// Draws the well, the pieces, a score panel and overlays.
#[derive(Debug, Clone, Copy)]
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

/// Screen rectangle of the bordered well.
#[derive(Debug, Clone, Copy)]
struct Frame {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let w = BOARD_WIDTH as u16 * self.cell_w + 2;
        let h = BOARD_HEIGHT as u16 * self.cell_h + 2;
        let frame = Frame {
            x: viewport.width.saturating_sub(w) / 2,
            y: viewport.height.saturating_sub(h) / 2,
            w,
            h,
        };

        self.draw_border(fb, frame);

        for (y, row) in snap.board.iter().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                match cell {
                    Some(color) => self.draw_block(fb, frame, x as u16, y as u16, *color),
                    None => self.draw_empty(fb, frame, x as u16, y as u16),
                }
            }
        }

        // Cells above the top row are not visible.
        for (x, y) in snap.active.board_cells() {
            if (0..BOARD_WIDTH as i16).contains(&x) && (0..BOARD_HEIGHT as i16).contains(&y) {
                self.draw_block(fb, frame, x as u16, y as u16, snap.active.color);
            }
        }

        self.draw_side_panel(fb, snap, viewport, frame);

        if snap.game_over {
            self.draw_overlay_text(fb, frame, "GAME OVER");
        } else if snap.paused {
            self.draw_overlay_text(fb, frame, "PAUSED");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, f: Frame) {
        let style = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);
        let (right, bottom) = (f.x + f.w - 1, f.y + f.h - 1);

        fb.put_char(f.x, f.y, '┌', style);
        fb.put_char(right, f.y, '┐', style);
        fb.put_char(f.x, bottom, '└', style);
        fb.put_char(right, bottom, '┘', style);
        for x in f.x + 1..right {
            fb.put_char(x, f.y, '─', style);
            fb.put_char(x, bottom, '─', style);
        }
        for y in f.y + 1..bottom {
            fb.put_char(f.x, y, '│', style);
            fb.put_char(right, y, '│', style);
        }
    }

    fn draw_empty(&self, fb: &mut FrameBuffer, f: Frame, x: u16, y: u16) {
        let style = CellStyle::new(Rgb::new(90, 90, 100), WELL_BG).dim();
        self.fill_cell(fb, f, x, y, '·', style);
    }

    fn draw_block(&self, fb: &mut FrameBuffer, f: Frame, x: u16, y: u16, color: Color) {
        let style = CellStyle::new(color.into(), WELL_BG).bold();
        self.fill_cell(fb, f, x, y, '█', style);
    }

    fn fill_cell(&self, fb: &mut FrameBuffer, f: Frame, x: u16, y: u16, ch: char, style: CellStyle) {
        let px = f.x + 1 + x * self.cell_w;
        let py = f.y + 1 + y * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, viewport: Viewport, f: Frame) {
        let panel_x = f.x.saturating_add(f.w).saturating_add(2);
        if panel_x.saturating_add(12) > viewport.width {
            return;
        }

        let label = CellStyle::new(Rgb::new(220, 220, 220), PANEL_BG).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);
        let hint = value.dim();

        let mut y = f.y;
        fb.put_str(panel_x, y, "SCORE", label);
        fb.put_u32(panel_x, y + 1, snap.score, value);
        y += 3;

        fb.put_str(panel_x, y, "SPEED", label);
        let digits = fb.put_u32(panel_x, y + 1, snap.drop_interval_ms, value);
        fb.put_str(panel_x + digits, y + 1, "ms", hint);
        y += 3;

        for line in ["P pause", "R restart", "Q quit"] {
            fb.put_str(panel_x, y, line, hint);
            y += 1;
        }
    }

    fn draw_overlay_text(&self, fb: &mut FrameBuffer, f: Frame, text: &str) {
        let text_w = text.chars().count() as u16;
        let x = f.x + f.w.saturating_sub(text_w) / 2;
        let style = CellStyle::new(Rgb::new(255, 255, 255), PANEL_BG).bold();
        fb.put_str(x, f.y + f.h / 2, text, style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameState, SequenceSource};
    use crate::types::PieceKind;

    fn snapshot_of(kind: PieceKind) -> GameSnapshot {
        GameState::new(SequenceSource::repeat(kind)).snapshot()
    }

    #[test]
    fn test_border_corners_at_exact_fit() {
        // 10 cells * 2 columns + 2 border = 22 wide, 20 + 2 = 22 high.
        let fb = GameView::default().render(&snapshot_of(PieceKind::O), Viewport::new(22, 22));
        assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
        assert_eq!(fb.get(21, 0).unwrap().ch, '┐');
        assert_eq!(fb.get(0, 21).unwrap().ch, '└');
        assert_eq!(fb.get(21, 21).unwrap().ch, '┘');
    }

    #[test]
    fn test_active_piece_drawn_in_its_color() {
        let snap = snapshot_of(PieceKind::O);
        let fb = GameView::default().render(&snap, Viewport::new(22, 22));
        // O at origin (4, 0): board column 4 starts at 1 + 4 * 2.
        let cell = fb.get(9, 1).unwrap();
        assert_eq!(cell.ch, '█');
        assert_eq!(cell.style.fg, Rgb::from(snap.active.color));
        assert_eq!(fb.get(8, 1).unwrap().ch, '·');
    }

    #[test]
    fn test_cells_above_top_are_skipped() {
        let mut snap = snapshot_of(PieceKind::O);
        snap.active.y = -1;
        let fb = GameView::default().render(&snap, Viewport::new(22, 22));
        assert_eq!(fb.get(9, 1).unwrap().ch, '█');
        assert_eq!(fb.get(9, 2).unwrap().ch, '·');
        assert_eq!(fb.get(9, 0).unwrap().ch, '─');
    }

    #[test]
    fn test_game_over_overlay() {
        let mut snap = snapshot_of(PieceKind::T);
        snap.game_over = true;
        snap.paused = true;
        let fb = GameView::default().render(&snap, Viewport::new(22, 22));
        assert!(fb.row_text(11).contains("GAME OVER"));
        assert!(!fb.row_text(11).contains("PAUSED"));
    }

    #[test]
    fn test_tiny_viewport_does_not_panic() {
        let fb = GameView::default().render(&snapshot_of(PieceKind::I), Viewport::new(3, 2));
        assert_eq!(fb.width(), 3);
        assert_eq!(fb.height(), 2);
    }
}
