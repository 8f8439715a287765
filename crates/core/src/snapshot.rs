use crate::bird::Bird;
use crate::pipe::PipePair;
use crate::types::{Difficulty, Phase, PIPE_COUNT};

/// Starting layout of a round, captured once when the game is created.
///
/// Restoring it rebuilds the bird, pipes, and floor at these exact positions.
/// Pipe gaps are not part of the capture; restored pipes get fresh gaps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldSnapshot {
    pub score: u32,
    pub game_over: bool,
    pub bird_x: f64,
    pub bird_y: f64,
    pub pipe_xs: [f64; PIPE_COUNT],
    pub floor_x: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BirdSnapshot {
    pub x: f64,
    pub y: f64,
    pub velocity: f64,
    pub rotation: f64,
    pub wing_frame: u8,
    pub started: bool,
}

impl From<&Bird> for BirdSnapshot {
    fn from(value: &Bird) -> Self {
        Self {
            x: value.x,
            y: value.y,
            velocity: value.velocity,
            rotation: value.rotation,
            wing_frame: value.wings.frame(),
            started: value.started,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PipeSnapshot {
    pub x: f64,
    pub gap_start: u32,
    pub gap_height: u32,
    pub scored: bool,
}

impl From<&PipePair> for PipeSnapshot {
    fn from(value: &PipePair) -> Self {
        Self {
            x: value.x,
            gap_start: value.gap_start(),
            gap_height: value.gap_height(),
            scored: value.scored(),
        }
    }
}

/// Everything a frame needs to draw, copied out of the live state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameSnapshot {
    pub phase: Phase,
    pub difficulty: Difficulty,
    pub score: u32,
    pub high_score: u32,
    pub game_over: bool,
    pub bird: BirdSnapshot,
    pub pipes: [PipeSnapshot; PIPE_COUNT],
    pub floor_x: f64,
    /// Remaining frozen time while in `Phase::GameOver`.
    pub game_over_ms: u32,
}

impl GameSnapshot {
    pub fn playable(&self) -> bool {
        self.phase == Phase::Playing
    }
}
