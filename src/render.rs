//! Drawable-primitive abstraction
//!
//! The core never draws; it describes. [`draw_session`] translates session
//! state into calls on a [`Renderer`], and each frontend (windowed, test,
//! headless) implements the four primitives however it likes.

use glam::Vec2;

use crate::sim::{Flipper, GamePhase, GameSession};

/// Solid color with alpha.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const GREEN: Color = Color::rgb(0, 255, 0);
    pub const YELLOW: Color = Color::rgb(255, 255, 0);
    pub const GRAY: Color = Color::rgb(128, 128, 128);
    pub const LIGHT_GRAY: Color = Color::rgb(200, 200, 200);
    pub const DARK_BLUE: Color = Color::rgb(0, 0, 100);
}

/// Horizontal anchoring for text labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

/// The primitives a frontend must accept.
pub trait Renderer {
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color);
    fn fill_quad(&mut self, corners: [Vec2; 4], color: Color);
    fn stroke_segment(&mut self, a: Vec2, b: Vec2, thickness: f32, color: Color);
    fn text(&mut self, pos: Vec2, size: f32, align: TextAlign, text: &str, color: Color);
}

/// Translate the whole session into one frame of primitives.
pub fn draw_session(session: &GameSession, out: &mut dyn Renderer) {
    let config = &session.config;
    let w = config.field_width;
    let h = config.field_height;

    // Background fill doubles as the fallback when no backdrop image exists
    out.fill_quad(
        [
            Vec2::ZERO,
            Vec2::new(w, 0.0),
            Vec2::new(w, h),
            Vec2::new(0.0, h),
        ],
        Color::DARK_BLUE,
    );

    for wall in &session.walls {
        out.stroke_segment(wall.a, wall.b, config.wall_thickness, Color::LIGHT_GRAY);
    }

    for pickup in &session.collectibles {
        if pickup.collected {
            continue;
        }
        out.fill_circle(pickup.pos, pickup.radius, Color::GREEN);
        // Sparkle
        out.fill_circle(
            pickup.pos + Vec2::new(pickup.radius / 2.0, -pickup.radius / 2.0),
            pickup.radius / 3.0,
            Color::WHITE,
        );
    }

    draw_flipper(&session.left_flipper, out);
    draw_flipper(&session.right_flipper, out);

    out.fill_circle(session.ball.pos, session.ball.radius, Color::RED);
    // Specular highlight
    out.fill_circle(session.ball.pos + Vec2::new(-3.0, -3.0), 3.0, Color::WHITE);

    out.text(
        Vec2::new(10.0, 10.0),
        36.0,
        TextAlign::Left,
        &format!("Score: {}", session.score),
        Color::WHITE,
    );
    out.text(
        Vec2::new(w - 10.0, 10.0),
        36.0,
        TextAlign::Right,
        &format!("Balls: {}", session.lives),
        Color::WHITE,
    );
    out.text(
        Vec2::new(10.0, 50.0),
        36.0,
        TextAlign::Left,
        &format!("Highscore: {}", session.highscore),
        Color::WHITE,
    );

    if session.phase == GamePhase::Playing && session.ball_is_stuck() {
        out.text(
            Vec2::new(w / 2.0, h - 20.0),
            36.0,
            TextAlign::Center,
            "Ball stuck? Reset to drop a new one",
            Color::YELLOW,
        );
    }

    if session.phase == GamePhase::GameOver {
        draw_game_over(session, out);
    }
}

fn draw_flipper(flipper: &Flipper, out: &mut dyn Renderer) {
    out.fill_quad(flipper.quad(), Color::YELLOW);
    // Rounded tip and pivot hub
    out.fill_circle(flipper.tip(), flipper.width() / 2.0, Color::YELLOW);
    out.fill_circle(flipper.pivot, 5.0, Color::GRAY);
}

fn draw_game_over(session: &GameSession, out: &mut dyn Renderer) {
    let w = session.config.field_width;
    let h = session.config.field_height;
    let center_x = w / 2.0;

    out.fill_quad(
        [
            Vec2::ZERO,
            Vec2::new(w, 0.0),
            Vec2::new(w, h),
            Vec2::new(0.0, h),
        ],
        Color::rgba(0, 0, 0, 180),
    );

    out.text(
        Vec2::new(center_x, h / 2.0 - 100.0),
        72.0,
        TextAlign::Center,
        "GAME OVER",
        Color::RED,
    );
    out.text(
        Vec2::new(center_x, h / 2.0 - 30.0),
        36.0,
        TextAlign::Center,
        &format!("Your score: {}", session.score),
        Color::WHITE,
    );
    out.text(
        Vec2::new(center_x, h / 2.0 + 10.0),
        36.0,
        TextAlign::Center,
        &format!("Highscore: {}", session.highscore),
        Color::WHITE,
    );
    if session.score == session.highscore && session.highscore > 0 {
        out.text(
            Vec2::new(center_x, h / 2.0 + 50.0),
            36.0,
            TextAlign::Center,
            "NEW HIGH SCORE!",
            Color::YELLOW,
        );
    }
    out.text(
        Vec2::new(center_x, h / 2.0 + 120.0),
        36.0,
        TextAlign::Center,
        "Press start to play again",
        Color::WHITE,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SimulationConfig;

    #[derive(Default)]
    struct CountingRenderer {
        circles: usize,
        quads: usize,
        segments: usize,
        labels: Vec<String>,
    }

    impl Renderer for CountingRenderer {
        fn fill_circle(&mut self, _center: Vec2, _radius: f32, _color: Color) {
            self.circles += 1;
        }
        fn fill_quad(&mut self, _corners: [Vec2; 4], _color: Color) {
            self.quads += 1;
        }
        fn stroke_segment(&mut self, _a: Vec2, _b: Vec2, _thickness: f32, _color: Color) {
            self.segments += 1;
        }
        fn text(&mut self, _pos: Vec2, _size: f32, _align: TextAlign, text: &str, _color: Color) {
            self.labels.push(text.to_string());
        }
    }

    #[test]
    fn test_frame_covers_every_entity() {
        let session = GameSession::new(SimulationConfig::default(), 21);
        let mut frame = CountingRenderer::default();
        draw_session(&session, &mut frame);

        assert_eq!(frame.segments, session.walls.len());
        // Background + two paddles
        assert_eq!(frame.quads, 3);
        // Two circles per pickup/flipper, two for the ball
        let expected = session.collectibles.len() * 2 + 4 + 2;
        assert_eq!(frame.circles, expected);
        assert!(frame.labels.iter().any(|l| l.starts_with("Score:")));
        assert!(frame.labels.iter().any(|l| l.starts_with("Highscore:")));
    }

    #[test]
    fn test_game_over_overlay_present() {
        let mut session = GameSession::new(SimulationConfig::default(), 22);
        session.phase = GamePhase::GameOver;
        session.score = 800;
        session.set_highscore(800);

        let mut frame = CountingRenderer::default();
        draw_session(&session, &mut frame);
        assert!(frame.labels.iter().any(|l| l == "GAME OVER"));
        assert!(frame.labels.iter().any(|l| l == "NEW HIGH SCORE!"));
        // Background, two paddles, overlay
        assert_eq!(frame.quads, 4);
    }
}
