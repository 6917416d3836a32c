//! Fixed timestep simulation tick
//!
//! Advances the whole session one frame in a fixed order: intents, ball
//! kinematics, flipper smoothing, walls, flippers, collectibles, then the
//! scoring and life rules. The order is load-bearing; collision response
//! assumes positions were integrated first, and the drain check must see
//! the fully resolved ball position.

use super::state::{GameEvent, GamePhase, GameSession};

/// Control intents sampled by the driver for one tick.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Left flipper control held
    pub left_flipper: bool,
    /// Right flipper control held
    pub right_flipper: bool,
    /// Manual respawn request; honored only while the ball reads as stuck
    pub reset_stuck_ball: bool,
    /// Start a fresh round; honored only in the game-over phase
    pub new_round: bool,
}

/// Advance the session by one frame.
pub fn tick(session: &mut GameSession, input: &TickInput) {
    if session.phase == GamePhase::GameOver {
        if input.new_round {
            session.new_round();
        }
        return;
    }

    if input.left_flipper {
        session.left_flipper.activate();
    } else {
        session.left_flipper.deactivate();
    }
    if input.right_flipper {
        session.right_flipper.activate();
    } else {
        session.right_flipper.deactivate();
    }

    if input.reset_stuck_ball && session.ball_is_stuck() {
        log::info!("stuck ball reset");
        session.spawn_ball();
    }

    session.ball.tick(&session.config);
    session.left_flipper.tick(&session.config);
    session.right_flipper.tick(&session.config);

    for wall in &session.walls {
        if wall.resolve(&mut session.ball, &session.config) {
            session.events.push(GameEvent::WallHit);
        }
    }

    if session
        .left_flipper
        .resolve(&mut session.ball, &mut session.rng, &session.config)
    {
        session.score += session.config.flipper_points;
        session.events.push(GameEvent::FlipperHit {
            side: session.left_flipper.side,
        });
    }
    if session
        .right_flipper
        .resolve(&mut session.ball, &mut session.rng, &session.config)
    {
        session.score += session.config.flipper_points;
        session.events.push(GameEvent::FlipperHit {
            side: session.right_flipper.side,
        });
    }

    // Mark during the scan, remove in a second pass
    for pickup in &mut session.collectibles {
        if pickup.resolve(&session.ball) {
            session.score += session.config.collectible_points;
            session.events.push(GameEvent::CollectiblePickup);
        }
    }
    session.collectibles.retain(|pickup| !pickup.collected);
    if session.collectibles.is_empty() {
        session.restock_collectibles();
        session.events.push(GameEvent::CollectiblesRestocked);
    }

    // A single large score jump may cross several milestones
    while session.score >= session.extra_life_mark + session.config.extra_life_step {
        session.lives += 1;
        session.extra_life_mark += session.config.extra_life_step;
        session.events.push(GameEvent::ExtraLife);
    }

    if session.ball.pos.y > session.config.field_height + session.config.drain_margin {
        session.lives -= 1;
        session.events.push(GameEvent::BallLost);
        if session.lives > 0 {
            session.spawn_ball();
        } else {
            session.phase = GamePhase::GameOver;
            let new_highscore = session.score > session.highscore;
            if new_highscore {
                session.highscore = session.score;
            }
            session.events.push(GameEvent::GameOver {
                score: session.score,
                new_highscore,
            });
            log::info!("game over at {} points", session.score);
        }
    }
}
