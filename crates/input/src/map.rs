//! Key mapping from terminal events to game actions.
//!
//! The five gameplay keys live in a [`ControlMap`] owned by the caller. It can be
//! customised with a partial set of [`ControlOverrides`]; anything not
//! overridden keeps its current binding.

use anyhow::{bail, Context, Result};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::Deserialize;

use crate::types::GameAction;

/// Key bindings for the five gameplay actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlMap {
    pub left: KeyCode,
    pub right: KeyCode,
    pub down: KeyCode,
    pub rotate: KeyCode,
    pub hard_drop: KeyCode,
}

impl Default for ControlMap {
    fn default() -> Self {
        Self {
            left: KeyCode::Left,
            right: KeyCode::Right,
            down: KeyCode::Down,
            rotate: KeyCode::Up,
            hard_drop: KeyCode::Char(' '),
        }
    }
}

/// Partial rebinding, as read from configuration.
///
/// ```
/// use tui_blocks_input::{ControlMap, ControlOverrides};
/// use crossterm::event::KeyCode;
///
/// let overrides = ControlOverrides::from_json(r#"{"left":"a","hardDrop":"Enter"}"#).unwrap();
/// let map = ControlMap::default().with_overrides(&overrides).unwrap();
/// assert_eq!(map.left, KeyCode::Char('a'));
/// assert_eq!(map.hard_drop, KeyCode::Enter);
/// assert_eq!(map.right, KeyCode::Right);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ControlOverrides {
    pub left: Option<String>,
    pub right: Option<String>,
    pub down: Option<String>,
    pub rotate: Option<String>,
    pub hard_drop: Option<String>,
}

impl ControlOverrides {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("invalid controls JSON")
    }
}

impl ControlMap {
    /// Apply `overrides` on top of this map.
    pub fn with_overrides(mut self, overrides: &ControlOverrides) -> Result<Self> {
        let slots = [
            (&mut self.left, &overrides.left, "left"),
            (&mut self.right, &overrides.right, "right"),
            (&mut self.down, &overrides.down, "down"),
            (&mut self.rotate, &overrides.rotate, "rotate"),
            (&mut self.hard_drop, &overrides.hard_drop, "hardDrop"),
        ];
        for (slot, name, field) in slots {
            if let Some(name) = name {
                *slot = parse_key_name(name).with_context(|| format!("binding for `{field}`"))?;
            }
        }
        Ok(self)
    }

    /// Action bound to `key`, if any.
    ///
    /// Besides the configurable keys, `p` pauses and `r` restarts.
    pub fn action_for(&self, key: KeyEvent) -> Option<GameAction> {
        let code = normalize(key.code);
        let bound = [
            (self.left, GameAction::MoveLeft),
            (self.right, GameAction::MoveRight),
            (self.down, GameAction::SoftDrop),
            (self.rotate, GameAction::Rotate),
            (self.hard_drop, GameAction::HardDrop),
        ];
        if let Some(&(_, action)) = bound.iter().find(|(k, _)| normalize(*k) == code) {
            return Some(action);
        }

        match code {
            KeyCode::Char('p') => Some(GameAction::Pause),
            KeyCode::Char('r') => Some(GameAction::Restart),
            _ => None,
        }
    }
}

/// Parse a key name.
///
/// Accepts arrow names (`Left`, `ArrowLeft`, ...), `Space`, `Enter`, `Tab`,
/// `Esc`, `Backspace`, or any single character.
pub fn parse_key_name(name: &str) -> Result<KeyCode> {
    let mut chars = name.chars();
    if let (Some(ch), None) = (chars.next(), chars.next()) {
        return Ok(normalize(KeyCode::Char(ch)));
    }

    let code = match name.to_lowercase().as_str() {
        "left" | "arrowleft" => KeyCode::Left,
        "right" | "arrowright" => KeyCode::Right,
        "up" | "arrowup" => KeyCode::Up,
        "down" | "arrowdown" => KeyCode::Down,
        "space" | "spacebar" => KeyCode::Char(' '),
        "enter" | "return" => KeyCode::Enter,
        "tab" => KeyCode::Tab,
        "esc" | "escape" => KeyCode::Esc,
        "backspace" => KeyCode::Backspace,
        _ => bail!("unknown key name `{name}`"),
    };
    Ok(code)
}

/// Letters bind case-insensitively.
fn normalize(code: KeyCode) -> KeyCode {
    match code {
        KeyCode::Char(c) => KeyCode::Char(c.to_ascii_lowercase()),
        other => other,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
