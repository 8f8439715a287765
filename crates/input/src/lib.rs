//! Terminal input module (engine-facing).
//!
//! Independent of any rendering code. It maps
//! `crossterm` key events into [`crate::types::GameAction`]; everything that is
//! not in the table is ignored.

pub mod map;

pub use flappy_tui_types as types;

pub use map::{handle_event, handle_key_event};
