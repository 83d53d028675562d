//! Game state module - manages the complete game state
//!
//! This module ties together the board, the active piece, the spawner and
//! scoring. It handles drop timing, movement, rotation, line clears and the
//! game lifecycle.
//!
//! Every mutator takes `&mut self` and runs to completion, so a tick and a
//! player action can never interleave.

use std::fmt;

use crate::board::Board;
use crate::pieces::ActivePiece;
use crate::rng::{PieceSource, RandomSource};
use crate::rotation::rotate_with_kicks;
use crate::scoring::{drop_interval_for_score, line_clear_score};
use crate::snapshot::GameSnapshot;
use crate::spawn::{spawn_next, SpawnOutcome};
use crate::types::*;

/// Upper bound on soft drops in a hard drop: a piece starts at row 0 and the
/// board has finite height.
const HARD_DROP_LIMIT: usize = BOARD_HEIGHT as usize + MAX_SHAPE_SIZE + 1;

/// Receives the new score whenever it changes.
pub type ScoreListener = Box<dyn FnMut(u32)>;

/// Complete game state
pub struct GameState {
    board: Board,
    active: ActivePiece,
    source: Box<dyn PieceSource>,
    score: u32,
    drop_interval_ms: u32,
    /// Time accumulated toward the next automatic drop.
    drop_counter_ms: u64,
    /// Timestamp of the last processed tick.
    last_tick_ms: u64,
    paused: bool,
    game_over: bool,
    score_listener: Option<ScoreListener>,
}

impl GameState {
    /// Create a game drawing pieces from `source` and spawn the first piece.
    pub fn new(source: impl PieceSource + 'static) -> Self {
        let mut state = Self {
            board: Board::new(),
            // Replaced by the spawn in reset().
            active: ActivePiece::spawn(PieceKind::I),
            source: Box::new(source),
            score: 0,
            drop_interval_ms: BASE_DROP_MS,
            drop_counter_ms: 0,
            last_tick_ms: 0,
            paused: false,
            game_over: false,
            score_listener: None,
        };
        state.reset();
        state
    }

    /// Create a game with uniformly random pieces from `seed`.
    pub fn with_seed(seed: u32) -> Self {
        Self::new(RandomSource::new(seed))
    }

    /// Register the score-changed callback, replacing any previous one.
    pub fn set_score_listener(&mut self, listener: impl FnMut(u32) + 'static) {
        self.score_listener = Some(Box::new(listener));
    }

    /// Reinitialise board, score, timers and flags, then spawn a piece.
    pub fn reset(&mut self) {
        self.board.clear();
        self.score = 0;
        self.drop_interval_ms = BASE_DROP_MS;
        self.drop_counter_ms = 0;
        self.last_tick_ms = 0;
        self.paused = false;
        self.game_over = false;
        log::info!("new game");
        self.spawn_piece();
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn drop_interval_ms(&self) -> u32 {
        self.drop_interval_ms
    }

    pub fn drop_counter_ms(&self) -> u64 {
        self.drop_counter_ms
    }

    pub fn active(&self) -> &ActivePiece {
        &self.active
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_rows(&mut out.board);
        out.active = self.active;
        out.score = self.score;
        out.drop_interval_ms = self.drop_interval_ms;
        out.paused = self.paused;
        out.game_over = self.game_over;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            board: self.board.rows(),
            active: self.active,
            score: self.score,
            drop_interval_ms: self.drop_interval_ms,
            paused: self.paused,
            game_over: self.game_over,
        }
    }

    /// Spawn the next piece; a blocked spawn ends the game.
    ///
    /// The blocked piece stays active so it can still be drawn.
    pub(crate) fn spawn_piece(&mut self) -> bool {
        match spawn_next(&self.board, &mut self.source) {
            SpawnOutcome::Ready(piece) => {
                self.active = piece;
                true
            }
            SpawnOutcome::Blocked(piece) => {
                self.active = piece;
                self.game_over = true;
                log::info!("game over: {:?} blocked at spawn, score {}", piece.kind, self.score);
                false
            }
        }
    }

    /// Shift the piece one column; `dir` is -1 (left) or +1 (right).
    ///
    /// Returns false (and leaves the piece in place) on collision.
    pub fn move_horizontal(&mut self, dir: i8) -> bool {
        debug_assert!(dir == -1 || dir == 1, "direction must be -1 or 1");
        if self.game_over {
            return false;
        }

        self.active.x += dir;
        if self.collides() {
            self.active.x -= dir;
            return false;
        }
        true
    }

    /// Move the piece down one row.
    ///
    /// Returns true while the piece is still falling. When it cannot descend it
    /// is locked in place, lines are cleared, the next piece spawns and this
    /// returns false.
    pub fn soft_drop(&mut self) -> bool {
        if self.game_over {
            return false;
        }

        self.active.y += 1;
        if self.collides() {
            self.active.y -= 1;
            self.lock_piece();
            return false;
        }
        true
    }

    /// Drop the piece until it locks.
    pub fn hard_drop(&mut self) {
        if self.game_over {
            return;
        }
        for _ in 0..HARD_DROP_LIMIT {
            if !self.soft_drop() {
                break;
            }
        }
    }

    /// Rotate the piece clockwise, kicking sideways if needed.
    ///
    /// A rotation with no free spot is silently dropped.
    pub fn rotate(&mut self) {
        self.try_rotate();
    }

    fn try_rotate(&mut self) -> bool {
        if self.game_over {
            return false;
        }
        rotate_with_kicks(&mut self.active, &self.board)
    }

    pub fn toggle_pause(&mut self) {
        if self.game_over {
            return;
        }
        self.paused = !self.paused;
        log::debug!("paused: {}", self.paused);
    }

    /// Drop scheduler, fed with absolute timestamps in milliseconds.
    ///
    /// Paused or finished games ignore the tick entirely. Otherwise elapsed time
    /// accumulates, and once it exceeds the drop interval the piece drops one
    /// row and the accumulator restarts from zero. A long stall therefore
    /// yields a single drop, not a catch-up burst.
    pub fn tick(&mut self, timestamp_ms: u64) {
        if self.paused || self.game_over {
            return;
        }

        let elapsed = timestamp_ms.saturating_sub(self.last_tick_ms);
        self.last_tick_ms = timestamp_ms;
        self.drop_counter_ms = self.drop_counter_ms.saturating_add(elapsed);

        if self.drop_counter_ms > self.drop_interval_ms as u64 {
            self.soft_drop();
            self.drop_counter_ms = 0;
        }
    }

    /// Apply a game action
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        if self.game_over && action != GameAction::Restart {
            return false;
        }

        match action {
            GameAction::MoveLeft => self.move_horizontal(-1),
            GameAction::MoveRight => self.move_horizontal(1),
            GameAction::SoftDrop => self.soft_drop(),
            GameAction::Rotate => self.try_rotate(),
            GameAction::HardDrop => {
                self.hard_drop();
                true
            }
            GameAction::Pause => {
                self.toggle_pause();
                true
            }
            GameAction::Restart => {
                self.reset();
                true
            }
        }
    }

    fn collides(&self) -> bool {
        self.board
            .collides(&self.active.shape, self.active.x, self.active.y)
    }

    /// Merge the active piece, clear lines and spawn the next piece.
    fn lock_piece(&mut self) {
        let piece = self.active;
        self.board.merge(&piece.shape, piece.x, piece.y, piece.color);
        let lines = self.clear_lines();
        log::debug!(
            "locked {:?} at ({}, {}), {} line(s) cleared",
            piece.kind,
            piece.x,
            piece.y,
            lines
        );
        self.spawn_piece();
    }

    /// Clear full rows in one pass and score them together.
    pub(crate) fn clear_lines(&mut self) -> usize {
        let lines = self.board.clear_full_rows().len();
        if lines == 0 {
            return 0;
        }

        let old_score = self.score;
        self.score = self.score.saturating_add(line_clear_score(lines));
        self.drop_interval_ms = drop_interval_for_score(self.score);

        if self.score != old_score {
            log::debug!(
                "score {} -> {}, drop interval {}ms",
                old_score,
                self.score,
                self.drop_interval_ms
            );
            if let Some(listener) = self.score_listener.as_mut() {
                listener(self.score);
            }
        }

        lines
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::with_seed(1)
    }
}

impl fmt::Debug for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameState")
            .field("active", &self.active)
            .field("score", &self.score)
            .field("drop_interval_ms", &self.drop_interval_ms)
            .field("drop_counter_ms", &self.drop_counter_ms)
            .field("last_tick_ms", &self.last_tick_ms)
            .field("paused", &self.paused)
            .field("game_over", &self.game_over)
            .finish_non_exhaustive()
    }
}
