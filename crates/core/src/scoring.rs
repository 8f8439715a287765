//! Score tracking.
//!
//! A pair scores exactly once: the first tick its trailing edge reaches the
//! bird's x. The one-shot flag lives on the pair itself, so scoring does not
//! depend on the scroll speed dividing evenly into the spawn offsets.

use crate::pipe::PipePool;

/// Round score plus the process-wide high score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Scoreboard {
    score: u32,
    high_score: u32,
}

impl Scoreboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    /// Award a point for every pair that crossed `bird_x` this tick.
    ///
    /// Returns the number of points awarded.
    pub fn score_passed(&mut self, pipes: &mut PipePool, bird_x: f64) -> u32 {
        let mut awarded = 0;
        for pipe in pipes.iter_mut() {
            if pipe.try_score(bird_x) {
                awarded += 1;
            }
        }
        self.score += awarded;
        awarded
    }

    /// Close the round. Returns the new high score if it was beaten.
    pub fn finish_round(&mut self) -> Option<u32> {
        if self.score > self.high_score {
            self.high_score = self.score;
            Some(self.high_score)
        } else {
            None
        }
    }

    /// Reset the round score; the high score is kept.
    pub fn reset_round(&mut self, score: u32) {
        self.score = score;
    }
}
