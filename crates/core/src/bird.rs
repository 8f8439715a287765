//! Bird kinematics: free fall, flap impulse, and the flap-then-dive rotation.

use crate::types::{
    BIRD_HEIGHT, BIRD_WIDTH, FLAP_POWER, FLAP_ROTATION, GRAVITY, MAX_DIVE_ROTATION,
    ROTATION_SPEED, WING_FRAMES, WING_FRAME_MS,
};

/// Wing-beat animation owned by a single bird.
///
/// Advanced from a monotonic clock reading supplied by the render step, so it
/// keeps flapping on the welcome and game-over screens while the simulation
/// itself is frozen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WingAnimation {
    frame: u8,
    last_update_ms: u64,
}

impl WingAnimation {
    pub fn frame(&self) -> u8 {
        self.frame
    }

    /// Step to the next frame once `WING_FRAME_MS` has passed since the last step.
    pub fn update(&mut self, now_ms: u64) -> u8 {
        if now_ms.saturating_sub(self.last_update_ms) >= WING_FRAME_MS {
            self.frame = (self.frame + 1) % WING_FRAMES;
            self.last_update_ms = now_ms;
        }
        self.frame
    }
}

/// The player's bird.
///
/// `x` never changes; the world scrolls past it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bird {
    pub x: f64,
    pub y: f64,
    pub velocity: f64,
    /// Fall-angle accumulator, grows by `ROTATION_SPEED` every tick.
    pub fall_angle: f64,
    /// Rendered rotation in degrees (positive = nose up).
    pub rotation: f64,
    /// Set by the first flap of a round.
    pub started: bool,
    pub wings: WingAnimation,
}

impl Bird {
    /// Motionless bird at the given position
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            velocity: 0.0,
            fall_angle: 0.0,
            rotation: 0.0,
            started: false,
            wings: WingAnimation::default(),
        }
    }

    pub fn width(&self) -> f64 {
        BIRD_WIDTH
    }

    pub fn height(&self) -> f64 {
        BIRD_HEIGHT
    }

    /// One tick of free fall.
    ///
    /// Velocity is unbounded: there is no terminal velocity.
    pub fn advance(&mut self) {
        self.velocity += GRAVITY;
        self.y += self.velocity;

        self.fall_angle += ROTATION_SPEED;
        self.rotation = (self.rotation - self.fall_angle).max(MAX_DIVE_ROTATION);
    }

    /// Instant upward impulse with a nose-up snap.
    ///
    /// Independent of the previous velocity and rotation.
    pub fn flap(&mut self) {
        self.started = true;
        self.velocity = -FLAP_POWER;
        self.rotation = FLAP_ROTATION;
        self.fall_angle = 0.0;
    }

    pub fn top(&self) -> f64 {
        self.y
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height()
    }

    pub fn left(&self) -> f64 {
        self.x
    }

    pub fn right(&self) -> f64 {
        self.x + self.width()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-6, "{a} != {b}");
    }

    #[test]
    fn test_new_bird_is_motionless() {
        let bird = Bird::new(28.0, 512.0);
        assert_eq!(bird.velocity, 0.0);
        assert_eq!(bird.rotation, 0.0);
        assert!(!bird.started);
    }

    #[test]
    fn test_free_fall_matches_closed_form() {
        for n in [0u32, 1, 2, 10, 60, 240] {
            let mut bird = Bird::new(28.0, 100.0);
            for _ in 0..n {
                bird.advance();
            }
            // y_n = y_0 + g * n(n+1)/2 when starting at rest
            let expected = 100.0 + GRAVITY * (n as f64) * (n as f64 + 1.0) / 2.0;
            assert_close(bird.y, expected);
            assert_close(bird.velocity, GRAVITY * n as f64);
        }
    }

    #[test]
    fn test_velocity_is_unbounded() {
        let mut bird = Bird::new(28.0, 0.0);
        for _ in 0..1000 {
            bird.advance();
        }
        assert_close(bird.velocity, GRAVITY * 1000.0);
    }

    #[test]
    fn test_flap_resets_regardless_of_prior_state() {
        let mut falling = Bird::new(28.0, 300.0);
        for _ in 0..50 {
            falling.advance();
        }
        let mut rising = Bird::new(28.0, 300.0);
        rising.flap();

        for bird in [&mut falling, &mut rising] {
            bird.flap();
            assert_eq!(bird.velocity, -FLAP_POWER);
            assert_eq!(bird.rotation, FLAP_ROTATION);
            assert_eq!(bird.fall_angle, 0.0);
            assert!(bird.started);
        }
    }

    #[test]
    fn test_flap_does_not_move_the_bird_immediately() {
        let mut bird = Bird::new(28.0, 300.0);
        bird.flap();
        assert_eq!(bird.y, 300.0);
        bird.advance();
        assert_close(bird.y, 300.0 - FLAP_POWER + GRAVITY);
    }

    #[test]
    fn test_rotation_dives_and_clamps() {
        let mut bird = Bird::new(28.0, 300.0);
        bird.flap();

        let mut prev = bird.rotation;
        for _ in 0..500 {
            bird.advance();
            assert!(bird.rotation <= prev);
            assert!(bird.rotation >= MAX_DIVE_ROTATION);
            prev = bird.rotation;
        }
        assert_eq!(bird.rotation, MAX_DIVE_ROTATION);
    }

    #[test]
    fn test_wing_animation_steps_every_frame_interval() {
        let mut wings = WingAnimation::default();
        assert_eq!(wings.update(50), 0);
        assert_eq!(wings.update(100), 1);
        assert_eq!(wings.update(150), 1);
        assert_eq!(wings.update(200), 2);
        assert_eq!(wings.update(300), 0);
    }

    #[test]
    fn test_wing_animation_is_per_instance() {
        let mut a = Bird::new(28.0, 0.0);
        let b = Bird::new(28.0, 0.0);
        a.wings.update(100);
        assert_eq!(a.wings.frame(), 1);
        assert_eq!(b.wings.frame(), 0);
    }
}
