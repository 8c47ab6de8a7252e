use raylib::prelude::*;

/// Mouse and touch input reduced to one pointer.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum PointerEvent {
    Down(Vector2),
    Move(Vector2),
    Up(Vector2),
}

impl PointerEvent {
    #[cfg(test)]
    pub fn position(&self) -> Vector2 {
        match *self {
            PointerEvent::Down(p) | PointerEvent::Move(p) | PointerEvent::Up(p) => p,
        }
    }
}

/// Pointer state read from the window for one frame.
#[derive(Debug, Clone, Copy)]
pub struct RawPointer {
    pub position: Vector2,
    pub pressed: bool,
    pub released: bool,
}

impl RawPointer {
    /// Reads touch point 0 if any, the mouse otherwise. `scale` maps window
    /// coordinates to framebuffer coordinates.
    pub fn read(rl: &RaylibHandle, scale: Vector2) -> Self {
        let touching = rl.get_touch_point_count() > 0;
        let window_position = if touching {
            rl.get_touch_position(0)
        } else {
            rl.get_mouse_position()
        };

        // raylib reports the first touch as the left mouse button
        Self {
            position: Vector2::new(
                window_position.x * scale.x,
                window_position.y * scale.y,
            ),
            pressed: rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT),
            released: rl.is_mouse_button_released(MouseButton::MOUSE_BUTTON_LEFT),
        }
    }
}

/// Turns per-frame pointer state into Down / Move / Up events.
#[derive(Default)]
pub struct PointerTracker {
    last_position: Option<Vector2>,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sample(&mut self, raw: RawPointer) -> Vec<PointerEvent> {
        let mut events = Vec::new();
        let moved = self
            .last_position
            .is_some_and(|last| last.x != raw.position.x || last.y != raw.position.y);

        if raw.pressed {
            events.push(PointerEvent::Down(raw.position));
        } else if moved {
            events.push(PointerEvent::Move(raw.position));
        }
        if raw.released {
            events.push(PointerEvent::Up(raw.position));
        }

        self.last_position = Some(raw.position);
        events
    }
}
