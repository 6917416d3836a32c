//! Flipfield - a 2D pinball playfield simulation
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, game state)
//! - `config`: Data-driven tuning values
//! - `render`: Drawable-primitive abstraction for frontends
//! - `audio`: Fire-and-forget sound event routing
//! - `highscores`: Persistent best-score storage

pub mod audio;
pub mod config;
pub mod highscores;
pub mod render;
pub mod sim;

pub use config::SimulationConfig;
pub use highscores::{FileHighscoreStore, HighscoreStore, MemoryHighscoreStore};
pub use sim::{GameEvent, GamePhase, GameSession, TickInput, tick};
