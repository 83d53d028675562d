//! Terminal renderer for the falling-block game.
//!
//! Rendering is split in two: [`GameView`] turns a snapshot into a
//! [`FrameBuffer`] (pure, testable), and [`TerminalRenderer`] flushes
//! framebuffers to the terminal, redrawing only what changed.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_blocks_core as core;
pub use tui_blocks_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
