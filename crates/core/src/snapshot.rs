use crate::board::BoardRows;
use crate::pieces::ActivePiece;

/// Read-only copy of everything a renderer needs for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSnapshot {
    pub board: BoardRows,
    pub active: ActivePiece,
    pub score: u32,
    pub drop_interval_ms: u32,
    pub paused: bool,
    pub game_over: bool,
}

impl GameSnapshot {
    pub fn playable(&self) -> bool {
        !self.game_over && !self.paused
    }
}
