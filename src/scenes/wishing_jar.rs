use rand::Rng;
use rand::rngs::StdRng;
use raylib::prelude::*;

use crate::constants::*;
use crate::input::PointerEvent;
use crate::scenes::Scene;
use crate::state::SceneId;
use crate::ui::{self, Button, Viewport};

const WISH_COLOR: Color = ui::rgb(0x8be9fd);

/// Tap the jar to drop a wish into it.
pub struct WishingJar {
    rng: StdRng,
    // Normalized positions inside the jar
    wishes: Vec<Vector2>,
}

impl WishingJar {
    pub fn new(rng: StdRng) -> Self {
        Self {
            rng,
            wishes: Vec::new(),
        }
    }

    #[cfg(test)]
    pub fn wishes(&self) -> usize {
        self.wishes.len()
    }

    pub fn jar(viewport: Viewport) -> Rectangle {
        Rectangle::new(
            viewport.width * 0.38,
            viewport.height * 0.25,
            viewport.width * 0.24,
            viewport.height * 0.5,
        )
    }

    pub fn next_button(viewport: Viewport) -> Button {
        Button::centered("Next", viewport, 0.5, 0.88)
    }
}

impl Scene for WishingJar {
    fn handle(&mut self, event: PointerEvent, viewport: Viewport) -> Option<SceneId> {
        let PointerEvent::Down(point) = event else {
            return None;
        };

        if Self::next_button(viewport).hit(point) {
            return Some(SceneId::PaintSky);
        }
        if ui::contains(&Self::jar(viewport), point) && self.wishes.len() < MAX_WISHES {
            let wish = Vector2::new(
                self.rng.random_range(0.1..0.9),
                self.rng.random_range(0.3..0.95),
            );
            self.wishes.push(wish);
        }
        None
    }

    fn draw<D: RaylibDraw>(&self, d: &mut D, viewport: Viewport, opacity: f32) {
        let jar = Self::jar(viewport);
        let glass = ui::faded(ui::MUTED, opacity);
        let (left, right, top, bottom) = (jar.x, jar.x + jar.width, jar.y, jar.y + jar.height);
        d.draw_line_ex(Vector2::new(left, top), Vector2::new(left, bottom), 4.0, glass);
        d.draw_line_ex(Vector2::new(right, top), Vector2::new(right, bottom), 4.0, glass);
        d.draw_line_ex(Vector2::new(left, bottom), Vector2::new(right, bottom), 4.0, glass);

        for wish in &self.wishes {
            let center = Vector2::new(
                jar.x + jar.width * wish.x,
                jar.y + jar.height * wish.y,
            );
            d.draw_circle_v(center, 5.0, ui::faded(WISH_COLOR, opacity));
        }

        ui::draw_text_centered(
            d,
            "Tap the jar to make a wish.",
            viewport.at(0.5, 0.12),
            30,
            ui::faded(ui::TEXT, opacity),
        );
        Self::next_button(viewport).draw(d, opacity);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    const VIEWPORT: Viewport = Viewport {
        width: 1000.0,
        height: 800.0,
    };

    #[test]
    fn tapping_the_jar_adds_wishes_up_to_the_cap() {
        let mut scene = WishingJar::new(StdRng::seed_from_u64(9));
        let jar = WishingJar::jar(VIEWPORT);
        let inside = Vector2::new(jar.x + jar.width * 0.5, jar.y + jar.height * 0.5);

        for _ in 0..MAX_WISHES + 10 {
            assert_eq!(scene.handle(PointerEvent::Down(inside), VIEWPORT), None);
        }
        assert_eq!(scene.wishes(), MAX_WISHES);
    }

    #[test]
    fn next_goes_to_paint_sky() {
        let mut scene = WishingJar::new(StdRng::seed_from_u64(9));
        let corner = PointerEvent::Down(Vector2::new(5.0, 5.0));
        assert_eq!(scene.handle(corner, VIEWPORT), None);
        assert_eq!(scene.wishes(), 0);

        let next = WishingJar::next_button(VIEWPORT).center();
        assert_eq!(
            scene.handle(PointerEvent::Down(next), VIEWPORT),
            Some(SceneId::PaintSky)
        );
    }
}
