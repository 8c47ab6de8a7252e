use raylib::prelude::*;

use crate::constants::*;
use crate::input::PointerEvent;
use crate::scenes::Scene;
use crate::state::SceneId;
use crate::ui::{self, Button, Viewport};

const BALL_RADIUS: f32 = 36.0;
const BOUNCE: f32 = 0.7;  // Speed kept after hitting the floor or a wall
const BALL_COLOR: Color = ui::rgb(0xbd93f9);

/// Keep the ball in the air by tapping it.
pub struct BallGame {
    position: Option<Vector2>,
    velocity: Vector2,
    score: u32,
}

impl BallGame {
    pub fn new() -> Self {
        Self {
            position: None,
            velocity: Vector2::new(0.0, 0.0),
            score: 0,
        }
    }

    #[cfg(test)]
    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn ball(&self, viewport: Viewport) -> Vector2 {
        self.position.unwrap_or_else(|| viewport.at(0.5, 0.4))
    }

    pub fn back_button(viewport: Viewport) -> Button {
        Button::centered("Back", viewport, 0.12, 0.08)
    }
}

impl Default for BallGame {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene for BallGame {
    fn handle(&mut self, event: PointerEvent, viewport: Viewport) -> Option<SceneId> {
        let PointerEvent::Down(point) = event else {
            return None;
        };
        if Self::back_button(viewport).hit(point) {
            return Some(SceneId::Navigation);
        }

        let ball = self.ball(viewport);
        let (dx, dy) = (point.x - ball.x, point.y - ball.y);
        if dx * dx + dy * dy <= BALL_RADIUS * BALL_RADIUS {
            // Push away from the tap, mostly upward
            self.velocity = Vector2::new(-dx / BALL_RADIUS * KICK_SPEED * 0.5, -KICK_SPEED);
            self.score += 1;
        }
        None
    }

    fn update(&mut self, dt: f32, viewport: Viewport) {
        if viewport.is_empty() {
            return;
        }
        let mut ball = self.ball(viewport);

        self.velocity.y += GRAVITY * dt;
        ball.x += self.velocity.x * dt;
        ball.y += self.velocity.y * dt;

        let floor = viewport.height - BALL_RADIUS;
        if ball.y > floor {
            ball.y = floor;
            self.velocity.y = -self.velocity.y.abs() * BOUNCE;
            self.velocity.x *= BOUNCE;
        }
        if ball.x < BALL_RADIUS || ball.x > viewport.width - BALL_RADIUS {
            let right = (viewport.width - BALL_RADIUS).max(BALL_RADIUS);
            ball.x = ball.x.clamp(BALL_RADIUS, right);
            self.velocity.x = -self.velocity.x * BOUNCE;
        }

        self.position = Some(ball);
    }

    fn draw<D: RaylibDraw>(&self, d: &mut D, viewport: Viewport, opacity: f32) {
        let ball = ui::faded(BALL_COLOR, opacity);
        d.draw_circle_v(self.ball(viewport), BALL_RADIUS, ball);

        let score = format!("Score: {}", self.score);
        let text = ui::faded(ui::TEXT, opacity);
        ui::draw_text_centered(d, &score, viewport.at(0.5, 0.08), 30, text);
        Self::back_button(viewport).draw(d, opacity);
    }
}
