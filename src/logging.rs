//! env_logger setup for the terminal binary.
//!
//! The game owns the alternate screen, so records go to `BLOCKS_LOG_PATH` when
//! it is configured. Without a log file, stderr is only used when `RUST_LOG` is
//! set explicitly.

use std::fs::OpenOptions;

use anyhow::{Context, Result};
use env_logger::{Builder, Env, Target};

pub fn init(log_path: Option<&str>) -> Result<()> {
    let env = Env::default().default_filter_or("info");
    let mut builder = Builder::from_env(env);

    match log_path {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("open log file `{path}`"))?;
            builder.target(Target::Pipe(Box::new(file)));
        }
        None if std::env::var_os("RUST_LOG").is_some() => {
            builder.target(Target::Stderr);
        }
        None => return Ok(()),
    }

    builder.try_init().context("install logger")
}
