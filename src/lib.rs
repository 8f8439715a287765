//! Terminal Flappy Bird (workspace facade crate).
//!
//! Exposes `flappy_tui::{core, input, term, types}` from the member crates
//! under `crates/`, plus the binary's startup concerns (`config`, `logging`).

pub mod config;
pub mod logging;

pub use flappy_tui_core as core;
pub use flappy_tui_input as input;
pub use flappy_tui_term as term;
pub use flappy_tui_types as types;
