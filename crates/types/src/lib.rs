//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core simulation, terminal rendering, input mapping).
//!
//! # Logical Screen
//!
//! All positions live in a fixed logical coordinate space:
//!
//! - **Width**: 576 units
//! - **Height**: 1024 units
//! - **Origin**: top-left, y grows downwards
//!
//! # Tuning Constants
//!
//! Kinematic values are expressed per tick:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Fixed timestep interval (~60 FPS) |
//! | `GRAVITY` | 0.3 | Added to the bird's velocity every tick |
//! | `FLAP_POWER` | 6 | Upward velocity set by a flap |
//! | `ROTATION_SPEED` | 0.05 | Growth of the fall-angle accumulator per tick |
//! | `PIPE_SPEED` | 4 | Pipe scroll per tick |
//! | `FLOOR_SPEED` | 4 | Floor scroll per tick |
//! | `GAME_OVER_DELAY_MS` | 3000 | Frozen time before the world resets |
//!
//! # Examples
//!
//! ```
//! use flappy_tui_types::{Difficulty, GameAction};
//!
//! let difficulty = Difficulty::from_arg(Some("hard"));
//! assert_eq!(difficulty, Difficulty::Hard);
//! assert!(difficulty.pipe_gap() < Difficulty::Medium.pipe_gap());
//!
//! let action = GameAction::from_str("flap").unwrap();
//! assert_eq!(action, GameAction::Flap);
//! ```

/// Logical screen width
pub const SCREEN_WIDTH: f64 = 576.0;

/// Logical screen height
pub const SCREEN_HEIGHT: f64 = 1024.0;

/// Target frame rate
pub const FPS: u32 = 60;

/// Fixed timestep interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 1000 / FPS;

/// Velocity added to the bird every tick
pub const GRAVITY: f64 = 0.3;

/// Magnitude of the upward velocity a flap sets
pub const FLAP_POWER: f64 = 6.0;

/// Per-tick growth of the bird's fall-angle accumulator (degrees)
pub const ROTATION_SPEED: f64 = 0.05;

/// Nose-up angle a flap snaps the bird to (degrees)
pub const FLAP_ROTATION: f64 = 20.0;

/// Lowest rendered rotation (nose straight down)
pub const MAX_DIVE_ROTATION: f64 = -90.0;

/// Bird sprite width
pub const BIRD_WIDTH: f64 = 68.0;

/// Bird sprite height
pub const BIRD_HEIGHT: f64 = 48.0;

/// Fixed horizontal bird position
pub const BIRD_X: f64 = 28.0;

/// Bird height at spawn (screen middle)
pub const BIRD_SPAWN_Y: f64 = SCREEN_HEIGHT / 2.0;

/// Horizontal thickness of a pipe
pub const PIPE_THICKNESS: f64 = 104.0;

/// Height of a single pipe half sprite
pub const PIPE_HEIGHT: f64 = 640.0;

/// Horizontal pipe speed per tick
pub const PIPE_SPEED: f64 = 4.0;

/// Live pipe pairs at all times
pub const PIPE_COUNT: usize = 2;

/// Spawn x of the first pipe pair (one and a half screens right)
pub const FIRST_PIPE_X: f64 = SCREEN_WIDTH + SCREEN_WIDTH / 2.0;

/// Horizontal distance between the two initial pipe pairs
pub const PIPE_SPACING: f64 = 340.0;

/// X where a recycled pipe pair re-enters (just off the right edge)
pub const PIPE_RESPAWN_X: f64 = SCREEN_WIDTH;

/// Minimum clearance between the gap and the ceiling/floor
pub const GAP_MARGIN: u32 = 50;

/// Height of the floor strip
pub const FLOOR_HEIGHT: f64 = 224.0;

/// Y of the floor's top edge
pub const FLOOR_Y: f64 = SCREEN_HEIGHT - FLOOR_HEIGHT;

/// Horizontal floor speed per tick
pub const FLOOR_SPEED: f64 = 4.0;

/// Frozen time between a collision and the automatic reset
pub const GAME_OVER_DELAY_MS: u32 = 3000;

/// Wing animation frame duration
pub const WING_FRAME_MS: u64 = 100;

/// Number of wing animation frames (up, mid, down)
pub const WING_FRAMES: u8 = 3;

/// Pipe gap per difficulty
pub const EASY_PIPE_GAP: u32 = 250;
pub const MEDIUM_PIPE_GAP: u32 = 200;
pub const HARD_PIPE_GAP: u32 = 150;

/// Difficulty selected on the command line.
///
/// Only the pipe gap changes between difficulties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Parse the optional positional argument.
    ///
    /// `hard`/`h` and `med`/`m` select the narrower gaps; anything else
    /// (including no argument) falls back to [`Difficulty::Easy`].
    ///
    /// # Examples
    ///
    /// ```
    /// use flappy_tui_types::Difficulty;
    ///
    /// assert_eq!(Difficulty::from_arg(Some("h")), Difficulty::Hard);
    /// assert_eq!(Difficulty::from_arg(Some("med")), Difficulty::Medium);
    /// assert_eq!(Difficulty::from_arg(Some("extreme")), Difficulty::Easy);
    /// assert_eq!(Difficulty::from_arg(None), Difficulty::Easy);
    /// ```
    pub fn from_arg(arg: Option<&str>) -> Self {
        match arg {
            Some("hard") | Some("h") => Difficulty::Hard,
            Some("med") | Some("m") => Difficulty::Medium,
            _ => Difficulty::Easy,
        }
    }

    /// Vertical size of the opening in every pipe pair
    pub fn pipe_gap(&self) -> u32 {
        match self {
            Difficulty::Easy => EASY_PIPE_GAP,
            Difficulty::Medium => MEDIUM_PIPE_GAP,
            Difficulty::Hard => HARD_PIPE_GAP,
        }
    }

    /// Largest gap start that keeps the whole gap above the floor margin
    pub fn max_gap_start(&self) -> u32 {
        SCREEN_HEIGHT as u32 - self.pipe_gap() - FLOOR_HEIGHT as u32 - GAP_MARGIN
    }

    /// Display label used by the welcome overlay
    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

/// Logical player commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameAction {
    Flap,
    Quit,
}

impl GameAction {
    /// Parse action from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "flap" => Some(GameAction::Flap),
            "quit" => Some(GameAction::Quit),
            _ => None,
        }
    }

    /// Convert to string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Flap => "flap",
            GameAction::Quit => "quit",
        }
    }
}

/// Round lifecycle.
///
/// `Idle -> Playing` on the first flap, `Playing -> GameOver` on collision,
/// `GameOver -> Idle` once the game-over delay has elapsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    #[default]
    Idle,
    Playing,
    GameOver,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Idle => "idle",
            Phase::Playing => "playing",
            Phase::GameOver => "gameOver",
        }
    }
}

/// Side effects produced by the simulation, consumed by audio and logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameEvent {
    /// The bird flapped (round may have just started).
    Flapped,
    /// A pipe pair was cleared; carries the new score.
    Scored(u32),
    /// The bird hit a pipe, the floor, or the ceiling.
    Collided,
    /// The round ended and the score beat the previous high score.
    NewHighScore(u32),
    /// The world was reset to its starting layout.
    Restored,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn original_tuning_defaults() {
        assert_eq!(TICK_MS, 16);
        assert_eq!(FLOOR_Y, 800.0);
        assert_eq!(BIRD_X, 28.0);
        assert_eq!(BIRD_SPAWN_Y, 512.0);
        assert_eq!(FIRST_PIPE_X, 864.0);
        assert_eq!(PIPE_COUNT, 2);
    }

    #[test]
    fn difficulty_gaps_are_strictly_ordered() {
        assert!(Difficulty::Hard.pipe_gap() < Difficulty::Medium.pipe_gap());
        assert!(Difficulty::Medium.pipe_gap() < Difficulty::Easy.pipe_gap());
    }

    #[test]
    fn difficulty_from_arg_accepts_short_and_long_forms() {
        assert_eq!(Difficulty::from_arg(Some("hard")), Difficulty::Hard);
        assert_eq!(Difficulty::from_arg(Some("h")), Difficulty::Hard);
        assert_eq!(Difficulty::from_arg(Some("med")), Difficulty::Medium);
        assert_eq!(Difficulty::from_arg(Some("m")), Difficulty::Medium);
        assert_eq!(Difficulty::from_arg(Some("HARD")), Difficulty::Easy);
        assert_eq!(Difficulty::from_arg(None), Difficulty::Easy);
    }

    #[test]
    fn max_gap_start_keeps_gap_on_screen() {
        for d in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
            let bottom = d.max_gap_start() + d.pipe_gap();
            assert!(bottom as f64 <= FLOOR_Y - GAP_MARGIN as f64);
            assert!(d.max_gap_start() >= GAP_MARGIN);
        }
        assert_eq!(Difficulty::Easy.max_gap_start(), 500);
    }

    #[test]
    fn game_action_round_trips_through_str() {
        for action in [GameAction::Flap, GameAction::Quit] {
            assert_eq!(GameAction::from_str(action.as_str()), Some(action));
        }
        assert_eq!(GameAction::from_str("FLAP"), Some(GameAction::Flap));
        assert_eq!(GameAction::from_str("jump"), None);
    }
}
