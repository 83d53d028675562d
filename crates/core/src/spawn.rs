//! Spawner - produces the next active piece and detects a blocked spawn.

use crate::board::Board;
use crate::pieces::ActivePiece;
use crate::rng::PieceSource;

/// Result of spawning a piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpawnOutcome {
    /// The piece fits at the spawn origin.
    Ready(ActivePiece),
    /// The piece collides at the spawn origin; the game is over.
    Blocked(ActivePiece),
}

impl SpawnOutcome {
    pub fn is_blocked(&self) -> bool {
        matches!(self, SpawnOutcome::Blocked(_))
    }

    pub fn piece(self) -> ActivePiece {
        match self {
            SpawnOutcome::Ready(piece) | SpawnOutcome::Blocked(piece) => piece,
        }
    }
}

/// Draw a kind from `source` and place a fresh piece at the spawn origin.
pub fn spawn_next<S: PieceSource + ?Sized>(board: &Board, source: &mut S) -> SpawnOutcome {
    let piece = ActivePiece::spawn(source.next_kind());
    if board.collides(&piece.shape, piece.x, piece.y) {
        SpawnOutcome::Blocked(piece)
    } else {
        SpawnOutcome::Ready(piece)
    }
}
