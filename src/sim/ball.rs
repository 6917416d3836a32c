//! Ball kinematics and playfield-edge response

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use crate::config::SimulationConfig;

/// The single ball in play.
#[derive(Debug, Clone)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    /// Spawn near the horizontal center with a small sideways jitter.
    pub fn spawn(config: &SimulationConfig, rng: &mut Pcg32) -> Self {
        let center = config.center_x();
        let x = rng.random_range(center - config.spawn_jitter..=center + config.spawn_jitter);
        let vx = rng.random_range(-config.spawn_speed..=config.spawn_speed);
        Self {
            pos: Vec2::new(x, config.spawn_height),
            vel: Vec2::new(vx, 0.0),
            radius: config.ball_radius,
        }
    }

    /// Advance one tick: gravity, semi-implicit Euler integration, edge
    /// bounce, velocity decay.
    ///
    /// The bottom edge is deliberately open; falling past it is the drain
    /// condition, detected by the session rather than the ball.
    pub fn tick(&mut self, config: &SimulationConfig) {
        self.vel.y += config.gravity;
        self.pos += self.vel;

        if self.pos.x - self.radius <= 0.0 {
            self.pos.x = self.radius;
            self.vel.x = self.vel.x.abs() * config.bounds_restitution;
        } else if self.pos.x + self.radius >= config.field_width {
            self.pos.x = config.field_width - self.radius;
            self.vel.x = -self.vel.x.abs() * config.bounds_restitution;
        }

        if self.pos.y - self.radius <= 0.0 {
            self.pos.y = self.radius;
            self.vel.y = self.vel.y.abs() * config.bounds_restitution;
        }

        // Bleed off energy gained from impulse inaccuracies
        self.vel *= config.velocity_decay;
    }

    /// Current speed (Euclidean norm of velocity).
    #[inline]
    pub fn speed(&self) -> f32 {
        self.vel.length()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;

    fn config() -> SimulationConfig {
        SimulationConfig::default()
    }

    #[test]
    fn test_gravity_integration() {
        let config = config();
        let mut ball = Ball {
            pos: Vec2::new(400.0, 175.0),
            vel: Vec2::ZERO,
            radius: config.ball_radius,
        };

        ball.tick(&config);
        assert!((ball.vel.y - config.gravity * config.velocity_decay).abs() < 1e-6);
        assert!((ball.pos.y - (175.0 + config.gravity)).abs() < 1e-5);
        assert_eq!(ball.pos.x, 400.0);
    }

    #[test]
    fn test_left_edge_reflects_with_restitution() {
        let config = config();
        let mut ball = Ball {
            pos: Vec2::new(13.0, 500.0),
            vel: Vec2::new(-5.0, 0.0),
            radius: config.ball_radius,
        };

        ball.tick(&config);
        assert_eq!(ball.pos.x, ball.radius);
        // Pushed away from the edge and damped
        assert!(ball.vel.x > 0.0);
        assert!((ball.vel.x - 5.0 * 0.8 * config.velocity_decay).abs() < 1e-4);
    }

    #[test]
    fn test_right_and_top_edges() {
        let config = config();
        let mut ball = Ball {
            pos: Vec2::new(config.field_width - 13.0, 20.0),
            vel: Vec2::new(6.0, -10.0),
            radius: config.ball_radius,
        };

        ball.tick(&config);
        assert_eq!(ball.pos.x, config.field_width - ball.radius);
        assert!(ball.vel.x < 0.0);
        assert_eq!(ball.pos.y, ball.radius);
        assert!(ball.vel.y > 0.0);
    }

    #[test]
    fn test_spawn_within_jitter_window() {
        let config = config();
        let mut rng = Pcg32::seed_from_u64(7);
        for _ in 0..100 {
            let ball = Ball::spawn(&config, &mut rng);
            assert!(ball.pos.x >= config.center_x() - config.spawn_jitter);
            assert!(ball.pos.x <= config.center_x() + config.spawn_jitter);
            assert_eq!(ball.pos.y, config.spawn_height);
            assert!(ball.vel.x.abs() <= config.spawn_speed);
            assert_eq!(ball.vel.y, 0.0);
        }
    }

    proptest! {
        // With gravity zeroed out, a free tick never adds energy
        #[test]
        fn decay_never_increases_speed(vx in -40.0f32..40.0, vy in -40.0f32..40.0) {
            let mut config = config();
            config.gravity = 0.0;
            let mut ball = Ball {
                pos: Vec2::new(368.0, 500.0),
                vel: Vec2::new(vx, vy),
                radius: config.ball_radius,
            };

            let before = ball.speed();
            ball.tick(&config);
            prop_assert!(ball.speed() <= before + 1e-4);
        }
    }
}
