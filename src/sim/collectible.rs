//! One-shot circular pickups

use glam::Vec2;

use super::ball::Ball;

/// A static pickup on the playfield.
///
/// Purely a trigger: collection never deflects the ball. The flag flips
/// exactly once; a collected pickup stops colliding entirely.
#[derive(Debug, Clone)]
pub struct Collectible {
    pub pos: Vec2,
    pub radius: f32,
    pub collected: bool,
}

impl Collectible {
    pub fn new(pos: Vec2, radius: f32) -> Self {
        Self {
            pos,
            radius,
            collected: false,
        }
    }

    /// Mark as collected on overlap with the ball. Fires at most once.
    pub fn resolve(&mut self, ball: &Ball) -> bool {
        if self.collected {
            return false;
        }
        if self.pos.distance(ball.pos) < self.radius + ball.radius {
            self.collected = true;
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ball_at(pos: Vec2) -> Ball {
        Ball {
            pos,
            vel: Vec2::new(3.0, -2.0),
            radius: 12.0,
        }
    }

    #[test]
    fn test_overlap_collects_once() {
        let mut pickup = Collectible::new(Vec2::new(300.0, 400.0), 8.0);
        let ball = ball_at(Vec2::new(310.0, 400.0));

        assert!(pickup.resolve(&ball));
        assert!(pickup.collected);
        // One-shot: the same overlap never fires again
        assert!(!pickup.resolve(&ball));
    }

    #[test]
    fn test_does_not_touch_ball_velocity() {
        let mut pickup = Collectible::new(Vec2::new(300.0, 400.0), 8.0);
        let ball = ball_at(Vec2::new(305.0, 395.0));

        let vel_before = ball.vel;
        assert!(pickup.resolve(&ball));
        assert_eq!(ball.vel, vel_before);
    }

    #[test]
    fn test_miss_outside_radii_sum() {
        let mut pickup = Collectible::new(Vec2::new(300.0, 400.0), 8.0);
        let ball = ball_at(Vec2::new(321.0, 400.0));

        assert!(!pickup.resolve(&ball));
        assert!(!pickup.collected);
    }
}
