use raylib::prelude::*;

use crate::input::PointerEvent;
use crate::scenes::Scene;
use crate::state::SceneId;
use crate::ui::{self, Button, Viewport};

const LINES: [&str; 5] = [
    "You caught it.",
    "",
    "Some things are worth chasing,",
    "and this little story is one of them.",
    "Come and look at the stars with me.",
];

pub struct Letter;

impl Letter {
    pub fn close_button(viewport: Viewport) -> Button {
        Button::centered("Close", viewport, 0.5, 0.78)
    }
}

impl Scene for Letter {
    fn handle(&mut self, event: PointerEvent, viewport: Viewport) -> Option<SceneId> {
        match event {
            PointerEvent::Down(point) if Self::close_button(viewport).hit(point) => {
                Some(SceneId::Constellation)
            }
            _ => None,
        }
    }

    fn draw<D: RaylibDraw>(&self, d: &mut D, viewport: Viewport, opacity: f32) {
        let paper = Rectangle::new(
            viewport.width * 0.2,
            viewport.height * 0.12,
            viewport.width * 0.6,
            viewport.height * 0.76,
        );
        d.draw_rectangle_rounded(paper, 0.05, 8, ui::faded(ui::TEXT, opacity));

        for (i, line) in LINES.iter().enumerate() {
            let center = viewport.at(0.5, 0.25 + i as f32 * 0.08);
            let color = ui::faded(ui::BACKGROUND, opacity);
            ui::draw_text_centered(d, line, center, 26, color);
        }
        Self::close_button(viewport).draw(d, opacity);
    }
}
