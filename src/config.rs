//! Runtime configuration read from `BLOCKS_*` environment variables.

use std::env;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};

use crate::input::{ControlMap, ControlOverrides};

pub const DEFAULT_FRAME_MS: u64 = 16;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Piece RNG seed. `None` means pick one from the wall clock.
    pub seed: Option<u32>,
    pub controls: ControlMap,
    /// Host frame period in milliseconds.
    pub frame_ms: u64,
    pub log_path: Option<String>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: None,
            controls: ControlMap::default(),
            frame_ms: DEFAULT_FRAME_MS,
            log_path: None,
        }
    }
}

impl GameConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let var = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let seed = var("BLOCKS_SEED")
            .map(|s| s.parse::<u32>().with_context(|| format!("BLOCKS_SEED=`{s}`")))
            .transpose()?;

        let frame_ms = match var("BLOCKS_FRAME_MS") {
            Some(s) => s
                .parse::<u64>()
                .with_context(|| format!("BLOCKS_FRAME_MS=`{s}`"))?
                .max(1),
            None => DEFAULT_FRAME_MS,
        };

        let controls = match var("BLOCKS_CONTROLS") {
            Some(json) => {
                let overrides = ControlOverrides::from_json(&json).context("BLOCKS_CONTROLS")?;
                ControlMap::default()
                    .with_overrides(&overrides)
                    .context("BLOCKS_CONTROLS")?
            }
            None => ControlMap::default(),
        };

        Ok(Self {
            seed,
            controls,
            frame_ms,
            log_path: var("BLOCKS_LOG_PATH"),
        })
    }

    /// The configured seed, or one derived from the current time.
    pub fn resolved_seed(&self) -> u32 {
        self.seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_millis() as u32)
                .unwrap_or(1)
        })
    }
}
