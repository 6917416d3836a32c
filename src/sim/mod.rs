//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only, owned by the session
//! - No rendering, audio or platform dependencies

pub mod ball;
pub mod collectible;
pub mod flipper;
pub mod geometry;
pub mod state;
pub mod tick;
pub mod wall;

pub use ball::Ball;
pub use collectible::Collectible;
pub use flipper::{Flipper, FlipperSide};
pub use geometry::{SegmentContact, reflect, segment_contact};
pub use state::{GameEvent, GamePhase, GameSession};
pub use tick::{TickInput, tick};
pub use wall::Wall;
