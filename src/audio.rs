//! Sound event routing
//!
//! The simulation never plays audio itself. The tick queues [`GameEvent`]s
//! and the driver routes the sound-relevant ones through a [`SoundSink`].
//! With no backend available the [`NullSoundSink`] keeps the game running
//! silently; sinks are fire-and-forget and must never block the tick.

use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Ball struck a flipper
    FlipperHit,
    /// Ball bounced off a wall
    WallHit,
    /// Ball drained past the flippers
    BallLost,
    /// Pickup collected
    CollectiblePickup,
}

/// Fire-and-forget audio capability.
pub trait SoundSink {
    fn play(&mut self, effect: SoundEffect);
}

/// Silent fallback used when no audio backend is available.
#[derive(Debug, Default)]
pub struct NullSoundSink;

impl SoundSink for NullSoundSink {
    fn play(&mut self, _effect: SoundEffect) {}
}

/// Map the sound-relevant session events onto the sink.
pub fn route_events(events: &[GameEvent], sink: &mut dyn SoundSink) {
    for event in events {
        let effect = match event {
            GameEvent::FlipperHit { .. } => SoundEffect::FlipperHit,
            GameEvent::WallHit => SoundEffect::WallHit,
            GameEvent::BallLost => SoundEffect::BallLost,
            GameEvent::CollectiblePickup => SoundEffect::CollectiblePickup,
            _ => continue,
        };
        sink.play(effect);
    }
}
