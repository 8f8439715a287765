//! Pipe pairs and the fixed-size pool that scrolls them past the bird.

use arrayvec::ArrayVec;

use crate::rng::SimpleRng;
use crate::types::{Difficulty, GAP_MARGIN, PIPE_COUNT, PIPE_SPEED, PIPE_THICKNESS};

/// A top and bottom pipe sharing one x and separated by a gap.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PipePair {
    pub x: f64,
    /// Top edge of the gap. Chosen once at spawn.
    gap_start: u32,
    gap_height: u32,
    /// Set the first tick the bird clears this pair.
    scored: bool,
}

impl PipePair {
    /// Fresh pair at `x` with a random gap that fits between the margins.
    pub fn spawn(x: f64, difficulty: Difficulty, rng: &mut SimpleRng) -> Self {
        let gap_start = rng.next_inclusive(GAP_MARGIN, difficulty.max_gap_start());
        Self::with_gap(x, gap_start, difficulty.pipe_gap())
    }

    /// Pair with an explicit gap (tests and benches).
    pub fn with_gap(x: f64, gap_start: u32, gap_height: u32) -> Self {
        Self {
            x,
            gap_start,
            gap_height,
            scored: false,
        }
    }

    pub fn gap_start(&self) -> u32 {
        self.gap_start
    }

    pub fn gap_height(&self) -> u32 {
        self.gap_height
    }

    pub fn gap_end(&self) -> u32 {
        self.gap_start + self.gap_height
    }

    pub fn scored(&self) -> bool {
        self.scored
    }

    pub fn left(&self) -> f64 {
        self.x
    }

    pub fn right(&self) -> f64 {
        self.x + PIPE_THICKNESS
    }

    pub fn advance(&mut self) {
        self.x -= PIPE_SPEED;
    }

    /// Right edge has left the screen.
    pub fn is_offscreen(&self) -> bool {
        self.right() < 0.0
    }

    /// Mark the pair scored once its trailing edge reaches `bird_x`.
    ///
    /// Returns true only on the tick the threshold is first crossed.
    pub fn try_score(&mut self, bird_x: f64) -> bool {
        if self.scored || self.right() > bird_x {
            return false;
        }
        self.scored = true;
        true
    }
}

/// The live pipe pairs. Always holds exactly `PIPE_COUNT`.
#[derive(Debug, Clone, PartialEq)]
pub struct PipePool {
    pairs: ArrayVec<PipePair, PIPE_COUNT>,
}

impl PipePool {
    /// Spawn one pair at each x in `xs`.
    pub fn spawn_at(xs: [f64; PIPE_COUNT], difficulty: Difficulty, rng: &mut SimpleRng) -> Self {
        let pairs = xs
            .iter()
            .map(|&x| PipePair::spawn(x, difficulty, rng))
            .collect();
        Self { pairs }
    }

    pub fn from_pairs(pairs: [PipePair; PIPE_COUNT]) -> Self {
        Self {
            pairs: ArrayVec::from(pairs),
        }
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PipePair> {
        self.pairs.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut PipePair> {
        self.pairs.iter_mut()
    }

    pub fn advance(&mut self) {
        for pair in self.pairs.iter_mut() {
            pair.advance();
        }
    }

    /// Drop pairs that have scrolled off the left edge and spawn a
    /// replacement at `respawn_x` for each one.
    ///
    /// Returns how many pairs were replaced.
    pub fn recycle(&mut self, respawn_x: f64, difficulty: Difficulty, rng: &mut SimpleRng) -> usize {
        let before = self.pairs.len();
        self.pairs.retain(|p| !p.is_offscreen());
        let removed = before - self.pairs.len();
        while !self.pairs.is_full() {
            self.pairs.push(PipePair::spawn(respawn_x, difficulty, rng));
        }
        removed
    }

    /// Snapshot of every pair's x, in pool order.
    pub fn xs(&self) -> [f64; PIPE_COUNT] {
        let mut out = [0.0; PIPE_COUNT];
        for (slot, pair) in out.iter_mut().zip(self.pairs.iter()) {
            *slot = pair.x;
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{FIRST_PIPE_X, PIPE_RESPAWN_X, PIPE_SPACING};

    #[test]
    fn test_spawn_gap_within_bounds() {
        let mut rng = SimpleRng::new(3);
        for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
            for _ in 0..500 {
                let pair = PipePair::spawn(0.0, difficulty, &mut rng);
                assert!(pair.gap_start() >= GAP_MARGIN);
                assert!(pair.gap_start() <= difficulty.max_gap_start());
                assert_eq!(pair.gap_height(), difficulty.pipe_gap());
            }
        }
    }

    #[test]
    fn test_spawned_pairs_are_independent_values() {
        let mut rng = SimpleRng::new(11);
        let pairs: Vec<_> = (0..20)
            .map(|_| PipePair::spawn(0.0, Difficulty::Easy, &mut rng))
            .collect();
        let first = pairs[0].gap_start();
        assert!(pairs.iter().any(|p| p.gap_start() != first));
    }

    #[test]
    fn test_advance_scrolls_left_by_speed() {
        let mut pair = PipePair::with_gap(100.0, 200, 250);
        pair.advance();
        assert_eq!(pair.x, 100.0 - PIPE_SPEED);
        assert_eq!(pair.gap_start(), 200);
    }

    #[test]
    fn test_offscreen_only_when_right_edge_passes_zero() {
        assert!(!PipePair::with_gap(-PIPE_THICKNESS, 200, 250).is_offscreen());
        assert!(PipePair::with_gap(-PIPE_THICKNESS - 1.0, 200, 250).is_offscreen());
    }

    #[test]
    fn test_try_score_fires_once() {
        let mut pair = PipePair::with_gap(0.0, 200, 250);
        assert!(!pair.try_score(28.0));
        pair.x = 28.0 - PIPE_THICKNESS;
        assert!(pair.try_score(28.0));
        assert!(!pair.try_score(28.0));
        pair.x -= 50.0;
        assert!(!pair.try_score(28.0));
        assert!(pair.scored());
    }

    #[test]
    fn test_try_score_with_coarse_steps() {
        // Jumps straight past the threshold without ever landing on it.
        let mut pair = PipePair::with_gap(0.0, 200, 250);
        let mut hits = 0;
        while pair.x > -300.0 {
            pair.x -= 37.0;
            if pair.try_score(28.0) {
                hits += 1;
            }
        }
        assert_eq!(hits, 1);
    }

    #[test]
    fn test_pool_recycle_keeps_count() {
        let mut rng = SimpleRng::new(5);
        let mut pool = PipePool::spawn_at(
            [FIRST_PIPE_X, FIRST_PIPE_X + PIPE_SPACING],
            Difficulty::Easy,
            &mut rng,
        );
        let mut recycled = 0;
        for _ in 0..5_000 {
            pool.advance();
            recycled += pool.recycle(PIPE_RESPAWN_X, Difficulty::Easy, &mut rng);
            assert_eq!(pool.len(), PIPE_COUNT);
        }
        assert!(recycled > 0);
    }

    #[test]
    fn test_pool_recycle_respawns_at_right_edge() {
        let mut rng = SimpleRng::new(5);
        let mut pool = PipePool::from_pairs([
            PipePair::with_gap(-200.0, 100, 250),
            PipePair::with_gap(300.0, 100, 250),
        ]);
        assert_eq!(pool.recycle(PIPE_RESPAWN_X, Difficulty::Hard, &mut rng), 1);
        assert_eq!(pool.xs(), [300.0, PIPE_RESPAWN_X]);
        let fresh = pool.iter().last().unwrap();
        assert!(!fresh.scored());
        assert_eq!(fresh.gap_height(), Difficulty::Hard.pipe_gap());
    }
}
