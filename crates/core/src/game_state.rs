//! Game state module - owns the world and drives the round lifecycle
//!
//! This module ties together all core components: bird, pipes, floor, collision,
//! and scoring. It runs the fixed-timestep simulation while a round is being
//! played, freezes it on collision, and rebuilds the starting layout from the
//! baseline snapshot once the game-over delay has run out.

use arrayvec::ArrayVec;

use crate::bird::Bird;
use crate::collision;
use crate::floor::Floor;
use crate::pipe::PipePool;
use crate::rng::SimpleRng;
use crate::scoring::Scoreboard;
use crate::snapshot::{BirdSnapshot, GameSnapshot, PipeSnapshot, WorldSnapshot};
use crate::types::*;

/// Events produced by a single `tick` or `apply_action` call.
pub type GameEvents = ArrayVec<GameEvent, 8>;

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    difficulty: Difficulty,
    phase: Phase,
    bird: Bird,
    pipes: PipePool,
    floor: Floor,
    scoreboard: Scoreboard,
    rng: SimpleRng,
    /// Starting layout, captured once in `new`.
    baseline: WorldSnapshot,
    game_over_timer_ms: u32,
    /// Ticks simulated in the current round.
    round_ticks: u32,
    /// Rounds played since the process started.
    rounds: u32,
}

impl GameState {
    /// Build the starting layout and capture it as the reset baseline
    pub fn new(difficulty: Difficulty, seed: u32) -> Self {
        let mut rng = SimpleRng::new(seed);
        let pipes = PipePool::spawn_at(
            [FIRST_PIPE_X, FIRST_PIPE_X + PIPE_SPACING],
            difficulty,
            &mut rng,
        );

        let mut state = Self {
            difficulty,
            phase: Phase::Idle,
            bird: Bird::new(BIRD_X, BIRD_SPAWN_Y),
            pipes,
            floor: Floor::default(),
            scoreboard: Scoreboard::new(),
            rng,
            baseline: WorldSnapshot {
                score: 0,
                game_over: false,
                bird_x: BIRD_X,
                bird_y: BIRD_SPAWN_Y,
                pipe_xs: [0.0; PIPE_COUNT],
                floor_x: 0.0,
            },
            game_over_timer_ms: 0,
            round_ticks: 0,
            rounds: 0,
        };
        state.baseline = state.capture();
        state
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn score(&self) -> u32 {
        self.scoreboard.score()
    }

    pub fn high_score(&self) -> u32 {
        self.scoreboard.high_score()
    }

    pub fn bird(&self) -> &Bird {
        &self.bird
    }

    pub fn pipes(&self) -> &PipePool {
        &self.pipes
    }

    pub fn floor(&self) -> &Floor {
        &self.floor
    }

    pub fn baseline(&self) -> &WorldSnapshot {
        &self.baseline
    }

    pub fn game_over_remaining_ms(&self) -> u32 {
        self.game_over_timer_ms
    }

    pub fn round_ticks(&self) -> u32 {
        self.round_ticks
    }

    pub fn rounds(&self) -> u32 {
        self.rounds
    }

    /// Record the current layout
    pub fn capture(&self) -> WorldSnapshot {
        WorldSnapshot {
            score: self.scoreboard.score(),
            game_over: self.game_over(),
            bird_x: self.bird.x,
            bird_y: self.bird.y,
            pipe_xs: self.pipes.xs(),
            floor_x: self.floor.x,
        }
    }

    /// Rebuild the world from `snapshot` and return to the welcome screen.
    ///
    /// The high score survives; pipes get fresh gaps.
    pub fn restore(&mut self, snapshot: &WorldSnapshot) {
        self.bird = Bird::new(snapshot.bird_x, snapshot.bird_y);
        self.pipes = PipePool::spawn_at(snapshot.pipe_xs, self.difficulty, &mut self.rng);
        self.floor = Floor::new(snapshot.floor_x);
        self.scoreboard.reset_round(snapshot.score);
        self.phase = if snapshot.game_over {
            Phase::GameOver
        } else {
            Phase::Idle
        };
        self.game_over_timer_ms = 0;
        self.round_ticks = 0;
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.phase = self.phase;
        out.difficulty = self.difficulty;
        out.score = self.scoreboard.score();
        out.high_score = self.scoreboard.high_score();
        out.game_over = self.game_over();
        out.bird = BirdSnapshot::from(&self.bird);
        for (slot, pipe) in out.pipes.iter_mut().zip(self.pipes.iter()) {
            *slot = PipeSnapshot::from(pipe);
        }
        out.floor_x = self.floor.x;
        out.game_over_ms = self.game_over_timer_ms;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let blank_pipe = PipeSnapshot {
            x: 0.0,
            gap_start: 0,
            gap_height: 0,
            scored: false,
        };
        let mut s = GameSnapshot {
            phase: Phase::Idle,
            difficulty: self.difficulty,
            score: 0,
            high_score: 0,
            game_over: false,
            bird: BirdSnapshot::from(&self.bird),
            pipes: [blank_pipe; PIPE_COUNT],
            floor_x: 0.0,
            game_over_ms: 0,
        };
        self.snapshot_into(&mut s);
        s
    }

    /// Apply a player command.
    ///
    /// Flap starts the round from the welcome screen and is ignored while the
    /// game-over screen is up. Quit belongs to the caller's loop and is a no-op
    /// here.
    pub fn apply_action(&mut self, action: GameAction) -> GameEvents {
        let mut events = GameEvents::new();
        match action {
            GameAction::Flap => match self.phase {
                Phase::Idle => {
                    self.phase = Phase::Playing;
                    self.rounds = self.rounds.wrapping_add(1);
                    log::info!(
                        "round {} started ({})",
                        self.rounds,
                        self.difficulty.label()
                    );
                    self.bird.flap();
                    events.push(GameEvent::Flapped);
                }
                Phase::Playing => {
                    self.bird.flap();
                    events.push(GameEvent::Flapped);
                }
                Phase::GameOver => {}
            },
            GameAction::Quit => {}
        }
        events
    }

    /// Main game tick.
    ///
    /// Advances the simulation only while playing; on the game-over screen it
    /// counts down the reset delay instead.
    pub fn tick(&mut self, elapsed_ms: u32) -> GameEvents {
        let mut events = GameEvents::new();
        match self.phase {
            Phase::Idle => {}
            Phase::Playing => self.step_world(&mut events),
            Phase::GameOver => {
                self.game_over_timer_ms = self.game_over_timer_ms.saturating_sub(elapsed_ms);
                if self.game_over_timer_ms == 0 {
                    let baseline = self.baseline;
                    self.restore(&baseline);
                    log::debug!("world restored to starting layout");
                    events.push(GameEvent::Restored);
                }
            }
        }
        events
    }

    /// Advance the bird's wing animation from a monotonic clock reading.
    pub fn animate(&mut self, now_ms: u64) {
        self.bird.wings.update(now_ms);
    }

    fn step_world(&mut self, events: &mut GameEvents) {
        self.round_ticks = self.round_ticks.wrapping_add(1);

        self.bird.advance();
        self.pipes.advance();
        self.floor.advance();

        if collision::collides(&self.bird, &self.floor, self.pipes.iter()) {
            self.end_round(events);
            return;
        }

        let before = self.scoreboard.score();
        let awarded = self.scoreboard.score_passed(&mut self.pipes, self.bird.x);
        for point in 1..=awarded {
            events.push(GameEvent::Scored(before + point));
        }

        self.pipes
            .recycle(PIPE_RESPAWN_X, self.difficulty, &mut self.rng);
    }

    fn end_round(&mut self, events: &mut GameEvents) {
        self.phase = Phase::GameOver;
        self.game_over_timer_ms = GAME_OVER_DELAY_MS;
        events.push(GameEvent::Collided);

        log::info!(
            "round {} over after {} ticks, score {}",
            self.rounds,
            self.round_ticks,
            self.scoreboard.score()
        );
        if let Some(high) = self.scoreboard.finish_round() {
            log::info!("new high score {}", high);
            events.push(GameEvent::NewHighScore(high));
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Difficulty::default(), 1)
    }
}
