use log::debug;
use rand::Rng;
use rand::rngs::StdRng;
use raylib::prelude::*;

use crate::constants::*;
use crate::input::PointerEvent;
use crate::scenes::Scene;
use crate::state::SceneId;
use crate::ui::{self, BUTTON_HEIGHT, BUTTON_WIDTH, Button, Viewport};

/// A button that jumps away until it has been tapped enough times.
pub struct CatchButton {
    rng: StdRng,
    taps: u32,
    taps_needed: u32,
    // Top-left of the button as a fraction of the free space; None = centered
    position: Option<Vector2>,
}

impl CatchButton {
    pub fn new(mut rng: StdRng) -> Self {
        let taps_needed = rng.random_range(MIN_TAPS..=MAX_TAPS);
        Self {
            rng,
            taps: 0,
            taps_needed,
            position: None,
        }
    }

    #[cfg(test)]
    pub fn taps(&self) -> u32 {
        self.taps
    }

    #[cfg(test)]
    pub fn taps_needed(&self) -> u32 {
        self.taps_needed
    }

    pub fn button(&self, viewport: Viewport) -> Button {
        match self.position {
            None => Button::centered("Catch me!", viewport, 0.5, 0.5),
            Some(fraction) => {
                let free_x = (viewport.width - BUTTON_WIDTH).max(0.0);
                let free_y = (viewport.height - BUTTON_HEIGHT).max(0.0);
                Button::new(
                    "Catch me!",
                    Rectangle::new(
                        free_x * fraction.x,
                        free_y * fraction.y,
                        BUTTON_WIDTH,
                        BUTTON_HEIGHT,
                    ),
                )
            }
        }
    }
}

impl Scene for CatchButton {
    fn handle(&mut self, event: PointerEvent, viewport: Viewport) -> Option<SceneId> {
        let PointerEvent::Down(point) = event else {
            return None;
        };
        if !self.button(viewport).hit(point) {
            return None;
        }

        self.taps += 1;
        if self.taps >= self.taps_needed {
            return Some(SceneId::Letter);
        }

        self.position = Some(Vector2::new(
            self.rng.random_range(0.0..=1.0),
            self.rng.random_range(0.0..=1.0),
        ));
        debug!("Button escaped ({}/{} taps)", self.taps, self.taps_needed);
        None
    }

    fn draw<D: RaylibDraw>(&self, d: &mut D, viewport: Viewport, opacity: f32) {
        ui::draw_text_centered(
            d,
            "Can you catch the button?",
            viewport.at(0.5, 0.12),
            32,
            ui::faded(ui::TEXT, opacity),
        );
        self.button(viewport).draw(d, opacity);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    const VIEWPORT: Viewport = Viewport {
        width: 1280.0,
        height: 720.0,
    };

    fn tap_button(scene: &mut CatchButton) -> Option<SceneId> {
        let center = scene.button(VIEWPORT).center();
        scene.handle(PointerEvent::Down(center), VIEWPORT)
    }

    #[test]
    fn taps_needed_in_range() {
        for seed in 0..32 {
            let scene = CatchButton::new(StdRng::seed_from_u64(seed));
            assert!((MIN_TAPS..=MAX_TAPS).contains(&scene.taps_needed()));
        }
    }

    #[test]
    fn transitions_on_the_threshold_tap() {
        let mut scene = CatchButton::new(StdRng::seed_from_u64(7));
        let needed = scene.taps_needed();

        for _ in 1..needed {
            assert_eq!(tap_button(&mut scene), None);
        }
        assert_eq!(tap_button(&mut scene), Some(SceneId::Letter));
        assert_eq!(scene.taps(), needed);
    }

    #[test]
    fn missed_taps_do_not_count() {
        let mut scene = CatchButton::new(StdRng::seed_from_u64(1));
        let away = Vector2::new(1.0, 1.0);
        assert_eq!(scene.handle(PointerEvent::Down(away), VIEWPORT), None);
        let center = scene.button(VIEWPORT).center();
        assert_eq!(scene.handle(PointerEvent::Move(center), VIEWPORT), None);
        assert_eq!(scene.taps(), 0);
    }

    #[test]
    fn button_stays_inside_the_scene() {
        let mut scene = CatchButton::new(StdRng::seed_from_u64(3));
        for _ in 0..3 {
            tap_button(&mut scene);
            let rect = scene.button(VIEWPORT).rect;
            assert!(rect.x >= 0.0 && rect.x + rect.width <= VIEWPORT.width);
            assert!(rect.y >= 0.0 && rect.y + rect.height <= VIEWPORT.height);
        }
    }
}
