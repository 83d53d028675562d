//! Core game logic module - pure, deterministic, and testable
//!
//! This crate holds the rules of the falling-block game and nothing else: no
//! terminal, no keyboard, no clock. The host feeds it discrete actions and
//! absolute timestamps; renderers read a [`GameSnapshot`].
//!
//! # Module Structure
//!
//! - [`board`]: 10x20 grid with collision, merge and line clearing
//! - [`pieces`]: tetromino catalog, shape matrices and the active piece
//! - [`rotation`]: clockwise rotation with a horizontal kick search
//! - [`rng`]: piece sources (seeded uniform random, fixed sequences)
//! - [`spawn`]: spawning and blocked-spawn (game over) detection
//! - [`scoring`]: line clear points and the speed curve
//! - [`game_state`]: the engine tying it all together
//!
//! # Example
//!
//! ```
//! use tui_blocks_core::{GameState, SequenceSource};
//! use tui_blocks_types::{GameAction, PieceKind};
//!
//! let mut game = GameState::new(SequenceSource::repeat(PieceKind::O));
//! game.apply_action(GameAction::MoveLeft);
//! game.apply_action(GameAction::HardDrop);
//!
//! assert_eq!(game.board().occupied_count(), 4);
//! assert!(!game.game_over());
//! ```
//!
//! # Timing
//!
//! Call [`GameState::tick`] with a monotonically increasing timestamp in
//! milliseconds. Once the time accumulated since the last drop exceeds the
//! current drop interval, the piece falls by one row.

pub mod board;
pub mod game_state;
pub mod pieces;
pub mod rng;
pub mod rotation;
pub mod scoring;
pub mod snapshot;
pub mod spawn;

pub use tui_blocks_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use game_state::{GameState, ScoreListener};
pub use pieces::{tetromino, ActivePiece, ShapeMatrix, Tetromino};
pub use rng::{PieceSource, RandomSource, SequenceSource, SimpleRng};
pub use rotation::rotate_with_kicks;
pub use scoring::{drop_interval_for_score, line_clear_score};
pub use snapshot::GameSnapshot;
pub use spawn::{spawn_next, SpawnOutcome};
