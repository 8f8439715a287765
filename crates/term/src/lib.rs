//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It avoids widget/layout libraries and instead renders into a simple
//! framebuffer that can be flushed to a terminal backend.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Render only from `GameSnapshot`, never from live state
//! - Keep the field's aspect ratio despite tall terminal glyphs

pub mod audio;
pub mod fb;
pub mod game_view;
pub mod renderer;

pub use flappy_tui_core as core;
pub use flappy_tui_types as types;

pub use audio::{Chime, SoundCue};
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{FieldLayout, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
