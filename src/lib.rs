//! tui-blocks (workspace facade crate).
//!
//! Re-exports the workspace crates under one name and holds the pieces only the
//! terminal binary needs: environment configuration and logger setup.

pub mod config;
pub mod logging;

pub use tui_blocks_core as core;
pub use tui_blocks_input as input;
pub use tui_blocks_term as term;
pub use tui_blocks_types as types;

pub use config::GameConfig;
