//! Data-driven game tuning
//!
//! Every constant the simulation consumes lives in one immutable
//! [`SimulationConfig`] handed to the session at construction. There is no
//! module-level tunable state.

/// Tuning values for one simulation instance.
///
/// Lengths are in playfield pixels, angles in degrees (screen coordinates,
/// y grows downward), velocities in pixels per tick at the fixed 60 Hz rate.
#[derive(Debug, Clone)]
pub struct SimulationConfig {
    /// Playfield width
    pub field_width: f32,
    /// Playfield height
    pub field_height: f32,
    /// Downward acceleration added to ball velocity each tick
    pub gravity: f32,
    /// Per-axis velocity multiplier applied every tick
    pub velocity_decay: f32,
    /// Restitution for bounces off the playfield edges
    pub bounds_restitution: f32,

    /// Ball radius
    pub ball_radius: f32,
    /// Vertical spawn position
    pub spawn_height: f32,
    /// Horizontal spawn spread around the field center
    pub spawn_jitter: f32,
    /// Maximum sideways speed at spawn
    pub spawn_speed: f32,
    /// Speed below which the ball reads as stuck and a manual reset is offered
    pub stuck_threshold: f32,

    /// Wall segment thickness
    pub wall_thickness: f32,
    /// Restitution applied after a wall reflection
    pub wall_restitution: f32,
    /// Extra clearance pushed beyond the wall surface after resolution
    pub wall_separation: f32,

    /// Flipper paddle length (pivot to tip)
    pub flipper_length: f32,
    /// Flipper paddle width
    pub flipper_width: f32,
    /// Rest angle of the left flipper; the right one is mirrored
    pub flipper_rest_angle: f32,
    /// Active (swung) angle of the left flipper; the right one is mirrored
    pub flipper_active_angle: f32,
    /// Fraction of the remaining angle difference covered each tick
    pub flipper_smoothing: f32,
    /// Remaining difference below which the angle snaps to its target
    pub flipper_snap_epsilon: f32,
    /// Velocity multiplier when the ball is struck by an active flipper
    pub flipper_boost: f32,
    /// Extra upward speed added by an active flipper strike
    pub flipper_kick: f32,
    /// Extra clearance pushed beyond the paddle surface after resolution
    pub flipper_separation: f32,
    /// Horizontal pivot offset from the field center
    pub flipper_spread: f32,
    /// Pivot height above the bottom edge
    pub flipper_height: f32,
    /// Points per flipper hit
    pub flipper_points: u64,
    /// Speed range of the random kick when the ball sits exactly on the
    /// paddle centerline and no normal can be computed
    pub degenerate_kick_speed: f32,

    /// Collectible radius
    pub collectible_radius: f32,
    /// Points per collectible
    pub collectible_points: u64,
    /// Minimum collectibles per batch
    pub collectible_min_count: u32,
    /// Maximum collectibles per batch
    pub collectible_max_count: u32,
    /// Horizontal inset of the collectible zone from both side edges
    pub collectible_inset_x: f32,
    /// Top of the collectible zone
    pub collectible_top: f32,
    /// Bottom inset keeping collectibles out of the flipper area
    pub collectible_bottom_inset: f32,

    /// Lives at round start
    pub starting_lives: u32,
    /// Score increment per extra life
    pub extra_life_step: u64,
    /// How far below the bottom edge the ball counts as drained
    pub drain_margin: f32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            field_width: 736.0,
            field_height: 1024.0,
            gravity: 0.3,
            velocity_decay: 0.999,
            bounds_restitution: 0.8,

            ball_radius: 12.0,
            spawn_height: 175.0,
            spawn_jitter: 50.0,
            spawn_speed: 2.0,
            stuck_threshold: 0.5,

            wall_thickness: 8.0,
            wall_restitution: 0.8,
            wall_separation: 0.2,

            flipper_length: 80.0,
            flipper_width: 8.0,
            flipper_rest_angle: 45.0,
            flipper_active_angle: -15.0,
            flipper_smoothing: 0.2,
            flipper_snap_epsilon: 0.5,
            flipper_boost: 2.0,
            flipper_kick: 6.0,
            flipper_separation: 0.5,
            flipper_spread: 100.0,
            flipper_height: 120.0,
            flipper_points: 10,
            degenerate_kick_speed: 5.0,

            collectible_radius: 8.0,
            collectible_points: 50,
            collectible_min_count: 5,
            collectible_max_count: 10,
            collectible_inset_x: 200.0,
            collectible_top: 150.0,
            collectible_bottom_inset: 350.0,

            starting_lives: 5,
            extra_life_step: 500,
            drain_margin: 50.0,
        }
    }
}

impl SimulationConfig {
    /// Horizontal center of the playfield.
    #[inline]
    pub fn center_x(&self) -> f32 {
        self.field_width / 2.0
    }
}
