//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and simulation logic.
//! It has **zero dependencies** on rendering, audio, or terminal I/O, making it:
//!
//! - **Deterministic**: Same seed and the same flap ticks produce identical rounds
//! - **Testable**: Every rule is exercised by plain unit tests
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//! - **Fast**: Zero-allocation hot paths for game tick processing
//!
//! # Module Structure
//!
//! - [`bird`]: Free fall, flap impulse, dive rotation, wing animation
//! - [`pipe`]: Pipe pairs and the fixed-size recycling pool
//! - [`floor`]: Wrapping floor segment
//! - [`collision`]: Bounds and pipe-gap overlap checks
//! - [`scoring`]: One-shot pipe scoring and the high score
//! - [`snapshot`]: Baseline capture/restore and the per-frame view snapshot
//! - [`game_state`]: Round lifecycle (idle, playing, game over)
//! - [`rng`]: Seeded gap placement
//!
//! # Example
//!
//! ```
//! use flappy_tui_core::GameState;
//! use flappy_tui_types::{Difficulty, GameAction, Phase, TICK_MS};
//!
//! let mut game = GameState::new(Difficulty::Easy, 12345);
//! assert_eq!(game.phase(), Phase::Idle);
//!
//! game.apply_action(GameAction::Flap);
//! assert_eq!(game.phase(), Phase::Playing);
//!
//! // Without further flaps the bird falls into the floor.
//! while !game.game_over() {
//!     game.tick(TICK_MS);
//! }
//! assert_eq!(game.score(), 0);
//! ```
//!
//! # Timing
//!
//! The simulation uses a fixed timestep: every [`GameState::tick`] call is one
//! 16ms step. Only the game-over countdown looks at the elapsed time passed in.

pub mod bird;
pub mod collision;
pub mod floor;
pub mod game_state;
pub mod pipe;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use flappy_tui_types as types;

// Re-export commonly used types for convenience
pub use bird::{Bird, WingAnimation};
pub use floor::Floor;
pub use game_state::{GameEvents, GameState};
pub use pipe::{PipePair, PipePool};
pub use rng::SimpleRng;
pub use scoring::Scoreboard;
pub use snapshot::{BirdSnapshot, GameSnapshot, PipeSnapshot, WorldSnapshot};
