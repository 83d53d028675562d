//! Rotation with a horizontal kick search.
//!
//! The rotated matrix is tried in place first. If it collides, the origin is
//! nudged sideways by +1, -2, +3, -4, ... (cumulative, so the tested columns are
//! x+1, x-1, x+2, x-2, ...) until a free spot turns up or the next step would be
//! wider than the piece's own bounding box. Only x is ever adjusted.

use crate::board::Board;
use crate::pieces::ActivePiece;

/// Rotate `piece` 90° clockwise, kicking sideways if needed.
///
/// Returns `false` when no tested offset fits; the piece is then left exactly as
/// it was before the call.
pub fn rotate_with_kicks(piece: &mut ActivePiece, board: &Board) -> bool {
    let saved = (piece.shape, piece.x);

    piece.shape = piece.shape.rotated_cw();
    let width = piece.shape.width();

    let mut offset: i8 = 1;
    while board.collides(&piece.shape, piece.x, piece.y) {
        piece.x += offset;
        offset = -(offset + offset.signum());
        if offset > width {
            (piece.shape, piece.x) = saved;
            return false;
        }
    }

    true
}
