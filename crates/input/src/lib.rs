//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events onto [`crate::types::GameAction`] through an
//! explicit, configurable [`ControlMap`].

pub mod map;

pub use tui_blocks_types as types;

pub use map::{parse_key_name, should_quit, ControlMap, ControlOverrides};
