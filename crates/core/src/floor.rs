//! Scrolling floor. A single segment drawn twice side by side; it wraps back
//! to 0 instead of being recycled.

use crate::types::{FLOOR_HEIGHT, FLOOR_SPEED, FLOOR_Y, SCREEN_WIDTH};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Floor {
    pub x: f64,
}

impl Floor {
    pub fn new(x: f64) -> Self {
        Self { x }
    }

    pub fn y(&self) -> f64 {
        FLOOR_Y
    }

    pub fn height(&self) -> f64 {
        FLOOR_HEIGHT
    }

    /// Scroll one tick, wrapping once the first tile is fully off-screen.
    pub fn advance(&mut self) {
        self.x -= FLOOR_SPEED;
        if self.is_offscreen() {
            self.x = 0.0;
        }
    }

    pub fn is_offscreen(&self) -> bool {
        self.x < -SCREEN_WIDTH
    }
}

impl Default for Floor {
    fn default() -> Self {
        Self::new(0.0)
    }
}
