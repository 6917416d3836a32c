//! Session state: entities, scoring, round lifecycle

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::ball::Ball;
use super::collectible::Collectible;
use super::flipper::{Flipper, FlipperSide};
use super::wall::Wall;
use crate::config::SimulationConfig;

/// Current phase of play
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Run ended; state is frozen until an explicit new round
    GameOver,
}

/// Things that happened during a tick, drained by the driver each frame.
///
/// Scoring is applied by the session itself; these exist so the frontend can
/// trigger sounds and persistence without the physics knowing about either.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    WallHit,
    FlipperHit { side: FlipperSide },
    CollectiblePickup,
    /// The playfield ran out of live collectibles and a new batch was placed
    CollectiblesRestocked,
    ExtraLife,
    BallLost,
    GameOver { score: u64, new_highscore: bool },
}

/// One pinball round: the ball, both flippers, the wall layout, the live
/// collectibles, and all scoring state.
///
/// All randomness (ball spawn jitter, collectible placement, degenerate
/// flipper kicks) flows through the single seeded RNG owned here, so a fixed
/// seed replays a round exactly.
pub struct GameSession {
    pub config: SimulationConfig,
    pub(crate) rng: Pcg32,
    pub phase: GamePhase,
    pub score: u64,
    pub lives: u32,
    /// Best score on record; persisted by the driver, not by the session
    pub highscore: u64,
    /// Last score milestone that granted an extra life
    pub(crate) extra_life_mark: u64,
    pub ball: Ball,
    pub left_flipper: Flipper,
    pub right_flipper: Flipper,
    pub walls: Vec<Wall>,
    pub collectibles: Vec<Collectible>,
    pub(crate) events: Vec<GameEvent>,
}

impl GameSession {
    /// Create a session with the given tuning and RNG seed.
    pub fn new(config: SimulationConfig, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let ball = Ball::spawn(&config, &mut rng);
        let (left_pivot, right_pivot) = flipper_pivots(&config);

        let mut session = Self {
            phase: GamePhase::Playing,
            score: 0,
            lives: config.starting_lives,
            highscore: 0,
            extra_life_mark: 0,
            ball,
            left_flipper: Flipper::new(left_pivot, FlipperSide::Left, &config),
            right_flipper: Flipper::new(right_pivot, FlipperSide::Right, &config),
            walls: playfield_walls(&config),
            collectibles: Vec::new(),
            events: Vec::new(),
            rng,
            config,
        };
        session.restock_collectibles();
        session
    }

    /// Seed the persisted best score, typically from a `HighscoreStore`.
    pub fn set_highscore(&mut self, highscore: u64) {
        self.highscore = highscore;
    }

    /// Start a fresh round after game over.
    ///
    /// Resets score, lives, ball, flippers and collectibles; keeps the
    /// highscore and the RNG stream.
    pub fn new_round(&mut self) {
        self.score = 0;
        self.lives = self.config.starting_lives;
        self.extra_life_mark = 0;
        self.phase = GamePhase::Playing;

        let (left_pivot, right_pivot) = flipper_pivots(&self.config);
        self.left_flipper = Flipper::new(left_pivot, FlipperSide::Left, &self.config);
        self.right_flipper = Flipper::new(right_pivot, FlipperSide::Right, &self.config);
        self.spawn_ball();
        self.restock_collectibles();
        log::info!("new round started, {} lives", self.lives);
    }

    /// Replace the ball with a fresh spawn.
    pub(crate) fn spawn_ball(&mut self) {
        self.ball = Ball::spawn(&self.config, &mut self.rng);
    }

    /// Place a fresh random batch of collectibles in the upper field,
    /// clear of the flipper area.
    pub(crate) fn restock_collectibles(&mut self) {
        let config = &self.config;
        let count = self
            .rng
            .random_range(config.collectible_min_count..=config.collectible_max_count);

        self.collectibles.clear();
        for _ in 0..count {
            let x = self
                .rng
                .random_range(config.collectible_inset_x..=config.field_width - config.collectible_inset_x);
            let y = self
                .rng
                .random_range(config.collectible_top..=config.field_height - config.collectible_bottom_inset);
            self.collectibles
                .push(Collectible::new(Vec2::new(x, y), config.collectible_radius));
        }
    }

    /// True while the ball is slow enough that a manual reset is offered.
    ///
    /// Gated on speed alone; a slow roll along a wall also reads as stuck.
    pub fn ball_is_stuck(&self) -> bool {
        self.ball.speed() < self.config.stuck_threshold
    }

    /// Take the events queued since the last drain.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

fn flipper_pivots(config: &SimulationConfig) -> (Vec2, Vec2) {
    let y = config.field_height - config.flipper_height;
    (
        Vec2::new(config.center_x() - config.flipper_spread, y),
        Vec2::new(config.center_x() + config.flipper_spread, y),
    )
}

/// The fixed wall layout: outer frame, angled lanes feeding the flipper
/// area, gutter walls beside the flippers, a central V obstacle, two side
/// bumper walls and two deflectors above the flippers.
fn playfield_walls(config: &SimulationConfig) -> Vec<Wall> {
    let w = config.field_width;
    let h = config.field_height;
    let cx = config.center_x();

    vec![
        // Outer frame
        Wall::new(Vec2::new(170.0, 230.0), Vec2::new(170.0, h - 280.0)),
        Wall::new(Vec2::new(w - 170.0, 230.0), Vec2::new(w - 170.0, h - 280.0)),
        Wall::new(Vec2::new(170.0, 100.0), Vec2::new(w - 170.0, 100.0)),
        // Lanes into the flipper area
        Wall::new(Vec2::new(170.0, h - 280.0), Vec2::new(cx - 130.0, h - 130.0)),
        Wall::new(Vec2::new(cx + 130.0, h - 130.0), Vec2::new(w - 170.0, h - 280.0)),
        // Gutter walls beside the flippers
        Wall::new(Vec2::new(cx - 130.0, h - 130.0), Vec2::new(cx - 90.0, h - 50.0)),
        Wall::new(Vec2::new(cx + 90.0, h - 50.0), Vec2::new(cx + 130.0, h - 130.0)),
        // Central V obstacle
        Wall::new(Vec2::new(cx - 60.0, h / 2.0 - 100.0), Vec2::new(cx, h / 2.0 - 50.0)),
        Wall::new(Vec2::new(cx + 60.0, h / 2.0 - 100.0), Vec2::new(cx, h / 2.0 - 50.0)),
        // Side bumper walls
        Wall::new(Vec2::new(220.0, h / 2.0 - 20.0), Vec2::new(220.0, h / 2.0 + 60.0)),
        Wall::new(Vec2::new(w - 220.0, h / 2.0 - 20.0), Vec2::new(w - 220.0, h / 2.0 + 60.0)),
        // Deflectors above the flippers
        Wall::new(Vec2::new(cx - 130.0, h - 200.0), Vec2::new(cx - 200.0, h - 250.0)),
        Wall::new(Vec2::new(cx + 130.0, h - 200.0), Vec2::new(cx + 200.0, h - 250.0)),
    ]
}
