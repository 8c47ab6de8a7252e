use log::info;
use raylib::prelude::*;

use crate::input::PointerEvent;
use crate::scenes::Scene;
use crate::state::SceneId;
use crate::ui::{self, Button, Viewport};

/// Normalized star positions, in the order they must be linked (a heart).
pub const STARS: [(f32, f32); 8] = [
    (0.50, 0.34),
    (0.40, 0.24),
    (0.30, 0.32),
    (0.33, 0.48),
    (0.50, 0.66),
    (0.67, 0.48),
    (0.70, 0.32),
    (0.60, 0.24),
];

const STAR_HIT_RADIUS: f32 = 28.0;
const STAR_COLOR: Color = ui::rgb(0xf1fa8c);

/// Connect-the-stars puzzle.
#[derive(Default)]
pub struct Constellation {
    linked: usize,
}

impl Constellation {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn linked(&self) -> usize {
        self.linked
    }

    pub fn is_solved(&self) -> bool {
        self.linked == STARS.len()
    }

    pub fn star(viewport: Viewport, index: usize) -> Vector2 {
        let (x, y) = STARS[index];
        viewport.at(x, y)
    }

    pub fn next_button(viewport: Viewport) -> Button {
        Button::centered("Next", viewport, 0.5, 0.86)
    }

    fn hit_star(viewport: Viewport, point: Vector2) -> Option<usize> {
        (0..STARS.len()).find(|&i| {
            let star = Self::star(viewport, i);
            let (dx, dy) = (star.x - point.x, star.y - point.y);
            dx * dx + dy * dy <= STAR_HIT_RADIUS * STAR_HIT_RADIUS
        })
    }
}

impl Scene for Constellation {
    fn handle(&mut self, event: PointerEvent, viewport: Viewport) -> Option<SceneId> {
        let PointerEvent::Down(point) = event else {
            return None;
        };

        if self.is_solved() {
            return Self::next_button(viewport)
                .hit(point)
                .then_some(SceneId::WishingJar);
        }

        if Self::hit_star(viewport, point) == Some(self.linked) {
            self.linked += 1;
            if self.is_solved() {
                info!("Constellation solved");
            }
        }
        None
    }

    fn draw<D: RaylibDraw>(&self, d: &mut D, viewport: Viewport, opacity: f32) {
        let line = ui::faded(ui::ACCENT, opacity * 0.8);
        for i in 1..self.linked {
            let (from, to) = (Self::star(viewport, i - 1), Self::star(viewport, i));
            d.draw_line_ex(from, to, 3.0, line);
        }
        if self.is_solved() {
            let last = Self::star(viewport, STARS.len() - 1);
            d.draw_line_ex(last, Self::star(viewport, 0), 3.0, line);
        }

        for i in 0..STARS.len() {
            let radius = if i == self.linked { 9.0 } else { 6.0 };
            let color = if i < self.linked {
                STAR_COLOR
            } else {
                ui::MUTED
            };
            d.draw_circle_v(Self::star(viewport, i), radius, ui::faded(color, opacity));
        }

        let caption = if self.is_solved() {
            "Our constellation."
        } else {
            "Connect the stars, one by one."
        };
        let text = ui::faded(ui::TEXT, opacity);
        ui::draw_text_centered(d, caption, viewport.at(0.5, 0.1), 30, text);
        if self.is_solved() {
            Self::next_button(viewport).draw(d, opacity);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: Viewport = Viewport {
        width: 1000.0,
        height: 800.0,
    };

    fn tap(scene: &mut Constellation, point: Vector2) -> Option<SceneId> {
        scene.handle(PointerEvent::Down(point), VIEWPORT)
    }

    #[test]
    fn links_only_in_order() {
        let mut scene = Constellation::new();
        tap(&mut scene, Constellation::star(VIEWPORT, 2));
        assert_eq!(scene.linked(), 0);

        tap(&mut scene, Constellation::star(VIEWPORT, 0));
        tap(&mut scene, Constellation::star(VIEWPORT, 1));
        assert_eq!(scene.linked(), 2);

        tap(&mut scene, Constellation::star(VIEWPORT, 1));
        assert_eq!(scene.linked(), 2);
    }

    #[test]
    fn next_only_after_solving() {
        let mut scene = Constellation::new();
        let next = Constellation::next_button(VIEWPORT).center();
        assert_eq!(tap(&mut scene, next), None);

        for i in 0..STARS.len() {
            assert_eq!(tap(&mut scene, Constellation::star(VIEWPORT, i)), None);
        }
        assert!(scene.is_solved());
        assert_eq!(tap(&mut scene, next), Some(SceneId::WishingJar));
    }
}
