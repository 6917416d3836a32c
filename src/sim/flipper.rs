//! Player-actuated flipper paddles

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use super::ball::Ball;
use super::geometry::{reflect, segment_contact};
use crate::config::SimulationConfig;

/// Which side of the table the flipper is mounted on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlipperSide {
    Left,
    Right,
}

/// A rotating paddle pinned at its pivot.
///
/// The flipper swings between two fixed orientations: a rest angle and an
/// active angle. Holding the control keeps the target on the active angle;
/// releasing it sets the target back to rest. Each tick the current angle
/// covers a fixed fraction of the remaining difference, snapping once the
/// remainder drops below the configured epsilon. Angles are in degrees,
/// screen coordinates (y down); the right flipper's angles are the left
/// one's mirrored through the vertical axis.
#[derive(Debug, Clone)]
pub struct Flipper {
    pub pivot: Vec2,
    pub side: FlipperSide,
    length: f32,
    width: f32,
    rest_angle: f32,
    active_angle: f32,
    /// Current orientation in degrees
    pub angle: f32,
    target_angle: f32,
    /// True while the control is held
    pub active: bool,
}

impl Flipper {
    pub fn new(pivot: Vec2, side: FlipperSide, config: &SimulationConfig) -> Self {
        let (rest_angle, active_angle) = match side {
            FlipperSide::Left => (config.flipper_rest_angle, config.flipper_active_angle),
            FlipperSide::Right => (
                180.0 - config.flipper_rest_angle,
                180.0 - config.flipper_active_angle,
            ),
        };
        Self {
            pivot,
            side,
            length: config.flipper_length,
            width: config.flipper_width,
            rest_angle,
            active_angle,
            angle: rest_angle,
            target_angle: rest_angle,
            active: false,
        }
    }

    /// Begin the upward swing.
    pub fn activate(&mut self) {
        self.active = true;
        self.target_angle = self.active_angle;
    }

    /// Relax back toward the rest position.
    pub fn deactivate(&mut self) {
        self.active = false;
        self.target_angle = self.rest_angle;
    }

    /// Move the current angle a fixed fraction of the way to the target,
    /// snapping exactly once the remainder is within the epsilon.
    pub fn tick(&mut self, config: &SimulationConfig) {
        let diff = self.target_angle - self.angle;
        if diff.abs() > config.flipper_snap_epsilon {
            self.angle += diff * config.flipper_smoothing;
        } else {
            self.angle = self.target_angle;
        }
    }

    /// Paddle width.
    #[inline]
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Far end of the paddle centerline.
    pub fn tip(&self) -> Vec2 {
        self.pivot + self.length * Vec2::from_angle(self.angle.to_radians())
    }

    /// The paddle rectangle as four corners, pivot edge first.
    pub fn quad(&self) -> [Vec2; 4] {
        let along = self.length * Vec2::from_angle(self.angle.to_radians());
        let across = self.width / 2.0 * Vec2::from_angle(self.angle.to_radians()).perp();
        [
            self.pivot + across,
            self.pivot - across,
            self.pivot - across + along,
            self.pivot + across + along,
        ]
    }

    /// Resolve the ball against the paddle centerline.
    ///
    /// The test is the same clamped projection as for walls, against the
    /// pivot-to-tip segment. A strike while the flipper is active amplifies
    /// the reflected velocity and adds an upward kick, modeling the swing
    /// transferring energy. Returns whether the ball was hit; scoring is the
    /// caller's concern.
    pub fn resolve(&self, ball: &mut Ball, rng: &mut Pcg32, config: &SimulationConfig) -> bool {
        let Some(contact) = segment_contact(self.pivot, self.tip(), ball.pos) else {
            return false;
        };

        let threshold = ball.radius + self.width / 2.0;
        if contact.distance > threshold {
            return false;
        }

        if contact.distance == 0.0 {
            // Ball center exactly on the centerline: no usable normal, punt
            // it off in a random direction instead.
            let kick = config.degenerate_kick_speed;
            ball.vel = Vec2::new(
                rng.random_range(-kick..=kick),
                rng.random_range(-kick..=kick),
            );
            return true;
        }

        let normal = (ball.pos - contact.point) / contact.distance;
        if ball.vel.dot(normal) >= 0.0 {
            // Already separating
            return false;
        }

        ball.vel = reflect(ball.vel, normal);
        if self.active {
            ball.vel *= config.flipper_boost;
            ball.vel.y -= config.flipper_kick;
        }

        let overlap = threshold - contact.distance;
        ball.pos += normal * (overlap + config.flipper_separation);
        true
    }
}
