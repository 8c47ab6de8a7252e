use raylib::prelude::*;

use crate::constants::*;
use crate::input::PointerEvent;
use crate::scenes::Scene;
use crate::state::SceneId;
use crate::ui::{self, Button, Viewport};

const HORIZON: f32 = 0.6;  // Normalized y where the ground starts
const STEM_HEIGHT: f32 = 60.0;
const PETALS: [Color; 3] = [
    ui::rgb(0xff79c6),
    ui::rgb(0xbd93f9),
    ui::rgb(0xf1fa8c),
];
const GROUND: Color = ui::rgb(0x1d3b2a);
const STEM: Color = ui::rgb(0x50fa7b);

struct Flower {
    root: Vector2, // Normalized
    growth: f32,   // 0..1
}

/// Tap the ground to plant flowers.
#[derive(Default)]
pub struct Garden {
    flowers: Vec<Flower>,
}

impl Garden {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn flowers(&self) -> usize {
        self.flowers.len()
    }

    #[cfg(test)]
    pub fn fully_grown(&self) -> usize {
        self.flowers.iter().filter(|f| f.growth >= 1.0).count()
    }

    pub fn back_button(viewport: Viewport) -> Button {
        Button::centered("Back", viewport, 0.12, 0.08)
    }
}

impl Scene for Garden {
    fn handle(&mut self, event: PointerEvent, viewport: Viewport) -> Option<SceneId> {
        let PointerEvent::Down(point) = event else {
            return None;
        };
        if Self::back_button(viewport).hit(point) {
            return Some(SceneId::Navigation);
        }
        let above_ground = point.y < viewport.height * HORIZON;
        if viewport.is_empty() || above_ground || self.flowers.len() >= MAX_FLOWERS {
            return None;
        }

        self.flowers.push(Flower {
            root: Vector2::new(point.x / viewport.width, point.y / viewport.height),
            growth: 0.0,
        });
        None
    }

    fn update(&mut self, dt: f32, _viewport: Viewport) {
        for flower in self.flowers.iter_mut() {
            flower.growth = (flower.growth + dt / FLOWER_GROW_DURATION).min(1.0);
        }
    }

    fn draw<D: RaylibDraw>(&self, d: &mut D, viewport: Viewport, opacity: f32) {
        let horizon = viewport.height * HORIZON;
        d.draw_rectangle(
            0,
            horizon as i32,
            viewport.width as i32,
            (viewport.height - horizon) as i32,
            ui::faded(GROUND, opacity),
        );

        for (i, flower) in self.flowers.iter().enumerate() {
            let root = viewport.at(flower.root.x, flower.root.y);
            let top = Vector2::new(root.x, root.y - STEM_HEIGHT * flower.growth);
            d.draw_line_ex(root, top, 3.0, ui::faded(STEM, opacity));
            let petal = ui::faded(PETALS[i % PETALS.len()], opacity);
            d.draw_circle_v(top, 4.0 + 8.0 * flower.growth, petal);
        }

        ui::draw_text_centered(
            d,
            "Plant something.",
            viewport.at(0.5, 0.2),
            30,
            ui::faded(ui::TEXT, opacity),
        );
        Self::back_button(viewport).draw(d, opacity);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: Viewport = Viewport {
        width: 800.0,
        height: 600.0,
    };

    #[test]
    fn plants_only_below_the_horizon() {
        let mut garden = Garden::new();
        garden.handle(PointerEvent::Down(VIEWPORT.at(0.5, 0.3)), VIEWPORT);
        assert_eq!(garden.flowers(), 0);

        garden.handle(PointerEvent::Down(VIEWPORT.at(0.5, 0.8)), VIEWPORT);
        assert_eq!(garden.flowers(), 1);
    }

    #[test]
    fn flowers_grow_within_a_second() {
        let mut garden = Garden::new();
        garden.handle(PointerEvent::Down(VIEWPORT.at(0.4, 0.9)), VIEWPORT);
        garden.update(0.5, VIEWPORT);
        assert_eq!(garden.fully_grown(), 0);
        garden.update(0.5, VIEWPORT);
        assert_eq!(garden.fully_grown(), 1);
    }

    #[test]
    fn planting_is_capped() {
        let mut garden = Garden::new();
        for _ in 0..MAX_FLOWERS + 5 {
            garden.handle(PointerEvent::Down(VIEWPORT.at(0.7, 0.9)), VIEWPORT);
        }
        assert_eq!(garden.flowers(), MAX_FLOWERS);
    }
}
