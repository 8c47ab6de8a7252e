use raylib::prelude::*;

use crate::input::PointerEvent;
use crate::scenes::Scene;
use crate::state::SceneId;
use crate::ui::{self, Button, Viewport};

/// Hub for the sub-activities.
pub struct Navigation;

impl Navigation {
    pub fn buttons(viewport: Viewport) -> [(Button, SceneId); 2] {
        [
            (Button::centered("Ball game", viewport, 0.35, 0.55), SceneId::BallGame),
            (Button::centered("Garden", viewport, 0.65, 0.55), SceneId::Garden),
        ]
    }
}

impl Scene for Navigation {
    fn handle(&mut self, event: PointerEvent, viewport: Viewport) -> Option<SceneId> {
        let PointerEvent::Down(point) = event else {
            return None;
        };
        Self::buttons(viewport)
            .into_iter()
            .find(|(button, _)| button.hit(point))
            .map(|(_, target)| target)
    }

    fn draw<D: RaylibDraw>(&self, d: &mut D, viewport: Viewport, opacity: f32) {
        ui::draw_text_centered(
            d,
            "Where to next?",
            viewport.at(0.5, 0.3),
            36,
            ui::faded(ui::TEXT, opacity),
        );
        for (button, _) in Self::buttons(viewport) {
            button.draw(d, opacity);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buttons_route_to_sub_activities() {
        let viewport = Viewport::new(1280.0, 720.0);
        let mut nav = Navigation;
        for (button, target) in Navigation::buttons(viewport) {
            let event = PointerEvent::Down(button.center());
            assert_eq!(nav.handle(event, viewport), Some(target));
        }
        let below = PointerEvent::Down(viewport.at(0.5, 0.9));
        assert_eq!(nav.handle(below, viewport), None);
    }
}
