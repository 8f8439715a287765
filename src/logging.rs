//! Logger setup.
//!
//! The game owns the terminal while it runs, so records go to a file when one
//! is configured. Without a file, logging stays off unless `RUST_LOG` asks for
//! it explicitly.

use std::fs::OpenOptions;
use std::path::Path;

use anyhow::{Context, Result};
use env_logger::{Builder, Env, Target};

pub fn init(log_path: Option<&Path>) -> Result<()> {
    let mut builder = Builder::from_env(Env::default().default_filter_or("info"));

    match log_path {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("open log file {}", path.display()))?;
            builder.target(Target::Pipe(Box::new(file)));
        }
        None if std::env::var_os("RUST_LOG").is_none() => return Ok(()),
        None => {}
    }

    builder.try_init().context("install logger")?;
    Ok(())
}
