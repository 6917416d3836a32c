//! Static line-segment obstacles

use glam::Vec2;

use super::ball::Ball;
use super::geometry::{reflect, segment_contact};
use crate::config::SimulationConfig;

/// An immovable wall segment.
///
/// The unit normal is fixed at construction. A zero-length segment gets a
/// zero normal and never produces a collision response.
#[derive(Debug, Clone)]
pub struct Wall {
    pub a: Vec2,
    pub b: Vec2,
    normal: Vec2,
}

impl Wall {
    pub fn new(a: Vec2, b: Vec2) -> Self {
        let normal = (b - a).perp().normalize_or_zero();
        Self { a, b, normal }
    }

    /// Perpendicular unit normal, zero for a degenerate segment.
    #[inline]
    pub fn normal(&self) -> Vec2 {
        self.normal
    }

    /// Reflect the ball off the wall if it overlaps the thickened segment.
    ///
    /// Restitution damps the reflected velocity, and the ball is pushed
    /// clear of the surface so the next tick cannot re-penetrate. Walls are
    /// neutral; the caller decides whether a hit has any score effect.
    pub fn resolve(&self, ball: &mut Ball, config: &SimulationConfig) -> bool {
        let Some(contact) = segment_contact(self.a, self.b, ball.pos) else {
            return false;
        };

        let threshold = ball.radius + config.wall_thickness / 2.0;
        if contact.distance >= threshold {
            return false;
        }

        // Ball center exactly on the segment: no direction to derive, fall
        // back to the fixed perpendicular.
        let normal = if contact.distance == 0.0 {
            self.normal
        } else {
            (ball.pos - contact.point) / contact.distance
        };

        ball.vel = reflect(ball.vel, normal) * config.wall_restitution;

        let overlap = threshold - contact.distance;
        ball.pos += normal * (overlap + config.wall_separation);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn ball_at(pos: Vec2, vel: Vec2) -> Ball {
        Ball {
            pos,
            vel,
            radius: SimulationConfig::default().ball_radius,
        }
    }

    #[test]
    fn test_vertical_wall_reflection() {
        let config = SimulationConfig::default();
        let wall = Wall::new(Vec2::new(170.0, 100.0), Vec2::new(170.0, 300.0));
        // Threshold is 12 + 4 = 16; the ball sits 5 px left of the line
        let mut ball = ball_at(Vec2::new(165.0, 200.0), Vec2::new(5.0, 0.0));

        assert!(wall.resolve(&mut ball, &config));
        assert!((ball.vel.x - (-4.0)).abs() < 1e-4);
        assert_eq!(ball.vel.y, 0.0);

        // Strictly outside the threshold, by the separation epsilon
        let threshold = ball.radius + config.wall_thickness / 2.0;
        assert!((170.0 - ball.pos.x - threshold - config.wall_separation).abs() < 1e-4);
    }

    #[test]
    fn test_miss_beyond_threshold() {
        let config = SimulationConfig::default();
        let wall = Wall::new(Vec2::new(170.0, 100.0), Vec2::new(170.0, 300.0));
        let mut ball = ball_at(Vec2::new(140.0, 200.0), Vec2::new(5.0, 0.0));

        assert!(!wall.resolve(&mut ball, &config));
        assert_eq!(ball.vel, Vec2::new(5.0, 0.0));
    }

    #[test]
    fn test_center_on_segment_uses_fixed_normal() {
        let config = SimulationConfig::default();
        let wall = Wall::new(Vec2::new(100.0, 200.0), Vec2::new(300.0, 200.0));
        let mut ball = ball_at(Vec2::new(200.0, 200.0), Vec2::new(0.0, 3.0));

        assert!(wall.resolve(&mut ball, &config));
        // Pushed off the line along the precomputed perpendicular
        assert!((ball.pos.y - 200.0).abs() > config.wall_thickness / 2.0);
    }

    #[test]
    fn test_degenerate_wall_never_collides() {
        let config = SimulationConfig::default();
        let wall = Wall::new(Vec2::new(50.0, 50.0), Vec2::new(50.0, 50.0));
        assert_eq!(wall.normal(), Vec2::ZERO);

        let mut ball = ball_at(Vec2::new(50.0, 50.0), Vec2::new(1.0, 1.0));
        assert!(!wall.resolve(&mut ball, &config));
    }

    proptest! {
        // Any penetrating contact ends up strictly separated
        #[test]
        fn resolution_leaves_no_penetration(
            t in 0.0f32..1.0,
            depth in 0.01f32..15.9,
            side in prop::bool::ANY,
            vx in -8.0f32..8.0,
            vy in -8.0f32..8.0,
        ) {
            let config = SimulationConfig::default();
            let wall = Wall::new(Vec2::new(150.0, 120.0), Vec2::new(420.0, 300.0));
            let threshold = config.ball_radius + config.wall_thickness / 2.0;

            let on_wall = wall.a + (wall.b - wall.a) * t;
            let normal = if side { wall.normal() } else { -wall.normal() };
            let mut ball = ball_at(on_wall + normal * (threshold - depth), Vec2::new(vx, vy));

            prop_assert!(wall.resolve(&mut ball, &config));
            let contact = segment_contact(wall.a, wall.b, ball.pos).unwrap();
            prop_assert!(contact.distance > threshold);
        }
    }
}
