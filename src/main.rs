//! Flipfield entry point
//!
//! Headless driver: runs the simulation at the fixed tick rate with a small
//! autopilot standing in for the player, routes events to the sound sink
//! and persists the highscore at game over. A windowed frontend supplies
//! its own `Renderer` implementation and input sampling and drives the
//! same `tick`.

use std::time::{SystemTime, UNIX_EPOCH};

use flipfield::SimulationConfig;
use flipfield::audio::{NullSoundSink, route_events};
use flipfield::highscores::{FileHighscoreStore, HighscoreStore};
use flipfield::sim::{GameEvent, GamePhase, GameSession, TickInput, tick};

/// Ticks per second of simulated time
const TICK_RATE: u64 = 60;
/// Cap on a demo run, in simulated seconds
const DEMO_SECONDS: u64 = 180;

fn main() {
    env_logger::init();

    let config = SimulationConfig::default();
    let mut store = FileHighscoreStore::default_path();
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);

    let mut session = GameSession::new(config, seed);
    session.set_highscore(store.load());
    log::info!("flipfield starting, seed {seed}");

    let mut sink = NullSoundSink;
    for _ in 0..TICK_RATE * DEMO_SECONDS {
        let input = autopilot(&session);
        tick(&mut session, &input);

        let events = session.drain_events();
        route_events(&events, &mut sink);
        for event in &events {
            match event {
                GameEvent::ExtraLife => {
                    log::info!("extra ball earned, {} in reserve", session.lives);
                }
                GameEvent::BallLost => {
                    log::info!("ball lost, {} remaining", session.lives);
                }
                GameEvent::GameOver {
                    score,
                    new_highscore,
                } => {
                    log::info!("game over at {score} points");
                    if *new_highscore {
                        if let Err(err) = store.save(session.highscore) {
                            log::warn!("could not save highscore: {err}");
                        }
                    }
                }
                _ => {}
            }
        }

        if session.phase == GamePhase::GameOver {
            break;
        }
    }

    println!(
        "final score: {}  highscore: {}",
        session.score, session.highscore
    );
}

/// Flap the flipper on the ball's side whenever it drops toward the drain.
fn autopilot(session: &GameSession) -> TickInput {
    let ball = &session.ball;
    let dropping = ball.vel.y > 0.0 && ball.pos.y > session.config.field_height - 320.0;
    TickInput {
        left_flipper: dropping && ball.pos.x <= session.config.center_x(),
        right_flipper: dropping && ball.pos.x > session.config.center_x(),
        reset_stuck_ball: session.ball_is_stuck(),
        new_round: false,
    }
}
