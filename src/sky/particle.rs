use rand::Rng;
use raylib::prelude::*;

use crate::constants::*;
use crate::ui::rgb;

/// Nebula colors: pink, purple, light blue, pale yellow.
pub const PALETTE: [Color; 4] = [
    rgb(0xff79c6),
    rgb(0xbd93f9),
    rgb(0x8be9fd),
    rgb(0xf1fa8c),
];

/// One glowing point of paint.
#[derive(Debug, Clone)]
pub struct Particle {
    pub position: Vector2,
    pub velocity: Vector2,
    pub size: f32,
    pub alpha: f32,
    pub color: Color,
}

impl Particle {
    pub fn spawn<R: Rng>(rng: &mut R, at: Vector2) -> Self {
        Self {
            position: Vector2::new(
                at.x + rng.random_range(-JITTER..JITTER),
                at.y + rng.random_range(-JITTER..JITTER),
            ),
            velocity: Vector2::new(
                rng.random_range(-DRIFT..DRIFT),
                rng.random_range(-DRIFT..DRIFT),
            ),
            size: rng.random_range(MIN_SIZE..MAX_SIZE),
            alpha: 1.0,
            color: PALETTE[rng.random_range(0..PALETTE.len())],
        }
    }

    pub fn update(&mut self) {
        self.position.x += self.velocity.x;
        self.position.y += self.velocity.y;
        self.alpha -= ALPHA_DECAY;
    }

    pub fn is_spent(&self) -> bool {
        self.alpha <= 0.0
    }

    pub fn draw<D: RaylibDraw>(&self, d: &mut D) {
        if self.is_spent() {
            return;
        }
        let color = Color {
            a: (self.alpha.min(1.0) * 255.0) as u8,
            ..self.color
        };
        d.draw_circle_v(self.position, self.size, color);
    }
}
