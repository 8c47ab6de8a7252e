use std::ffi::CString;

use raylib::prelude::*;

pub const BACKGROUND: Color = rgb(0x0b0d1f);
pub const TEXT: Color = rgb(0xf8f8f2);
pub const ACCENT: Color = rgb(0xff79c6);
pub const MUTED: Color = rgb(0x6272a4);

pub const BUTTON_WIDTH: f32 = 200.0;
pub const BUTTON_HEIGHT: f32 = 54.0;
const BUTTON_FONT: i32 = 24;

/// Opaque color from a 0xRRGGBB value.
pub const fn rgb(hex: u32) -> Color {
    Color {
        r: (hex >> 16) as u8,
        g: (hex >> 8) as u8,
        b: hex as u8,
        a: 0xff,
    }
}

/// Logical size of the drawing area.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.width < 1.0 || self.height < 1.0
    }

    /// Point from normalized (0..1) coordinates.
    pub fn at(&self, x: f32, y: f32) -> Vector2 {
        Vector2::new(self.width * x, self.height * y)
    }
}

/// Applies a scene opacity on top of a color's own alpha.
pub fn faded(color: Color, opacity: f32) -> Color {
    let alpha = (color.a as f32 * opacity.clamp(0.0, 1.0)).round() as u8;
    Color { a: alpha, ..color }
}

pub fn contains(rect: &Rectangle, point: Vector2) -> bool {
    point.x >= rect.x
        && point.x <= rect.x + rect.width
        && point.y >= rect.y
        && point.y <= rect.y + rect.height
}

/// Width in pixels of `text` in the default font.
pub fn text_width(text: &str, size: i32) -> i32 {
    // Text with an interior NUL cannot be passed to raylib
    let Ok(c_text) = CString::new(text) else {
        return 0;
    };
    unsafe { raylib::ffi::MeasureText(c_text.as_ptr(), size) }
}

pub fn draw_text_centered<D: RaylibDraw>(
    d: &mut D,
    text: &str,
    center: Vector2,
    size: i32,
    color: Color,
) {
    let width = text_width(text, size);
    d.draw_text(
        text,
        center.x as i32 - width / 2,
        center.y as i32 - size / 2,
        size,
        color,
    );
}

/// Clickable labelled rectangle.
#[derive(Debug, Clone)]
pub struct Button {
    pub label: &'static str,
    pub rect: Rectangle,
}

impl Button {
    pub fn new(label: &'static str, rect: Rectangle) -> Self {
        Self { label, rect }
    }

    /// Button of the default size centered on a normalized point.
    pub fn centered(label: &'static str, viewport: Viewport, x: f32, y: f32) -> Self {
        let center = viewport.at(x, y);
        Self::new(
            label,
            Rectangle::new(
                center.x - BUTTON_WIDTH * 0.5,
                center.y - BUTTON_HEIGHT * 0.5,
                BUTTON_WIDTH,
                BUTTON_HEIGHT,
            ),
        )
    }

    pub fn center(&self) -> Vector2 {
        Vector2::new(
            self.rect.x + self.rect.width * 0.5,
            self.rect.y + self.rect.height * 0.5,
        )
    }

    pub fn hit(&self, point: Vector2) -> bool {
        contains(&self.rect, point)
    }

    pub fn draw<D: RaylibDraw>(&self, d: &mut D, opacity: f32) {
        d.draw_rectangle_rounded(self.rect, 0.4, 8, faded(ACCENT, opacity));
        draw_text_centered(
            d,
            self.label,
            self.center(),
            BUTTON_FONT,
            faded(BACKGROUND, opacity),
        );
    }
}
