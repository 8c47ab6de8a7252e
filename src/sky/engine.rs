use anyhow::{Result, anyhow};
use log::{info, warn};
use rand::rngs::StdRng;
use raylib::prelude::*;

use crate::constants::*;
use crate::input::PointerEvent;
use crate::scenes::Scene;
use crate::sky::state::PaintSession;
use crate::state::SceneId;
use crate::ui::{self, Button, Viewport};

const SKY: Color = Color::BLACK;

/// Tint for blitting the canvas with premultiplied blending. The canvas
/// alpha drops under the trail overlay while its colors are already scaled
/// by that alpha, so the scene opacity scales every channel.
pub fn canvas_tint(opacity: f32) -> Color {
    let level = (opacity.clamp(0.0, 1.0) * 255.0).round() as u8;
    Color {
        r: level,
        g: level,
        b: level,
        a: level,
    }
}

/// "Paint Our Sky": a particle canvas that keeps its previous frames as
/// fading trails.
pub struct SkyPainter {
    session: PaintSession,
    canvas: Option<RenderTexture2D>,
    canvas_size: Viewport,
    running: bool,
}

impl SkyPainter {
    pub fn new(rng: StdRng) -> Self {
        Self {
            session: PaintSession::new(rng),
            canvas: None,
            canvas_size: Viewport::new(0.0, 0.0),
            running: false,
        }
    }

    #[cfg(test)]
    pub fn session(&self) -> &PaintSession {
        &self.session
    }

    #[cfg(test)]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Sets the canvas up for a new visit: viewport-sized and opaque black,
    /// with a fresh session. Safe to call on every visit.
    pub fn enter(
        &mut self,
        rl: &mut RaylibHandle,
        thread: &RaylibThread,
        viewport: Viewport,
    ) -> Result<()> {
        self.setup_canvas(rl, thread, viewport)?;
        self.begin_session();
        Ok(())
    }

    /// Recreates the canvas at the viewport size, cleared to the sky color.
    /// A viewport without area leaves no canvas.
    pub fn setup_canvas(
        &mut self,
        rl: &mut RaylibHandle,
        thread: &RaylibThread,
        viewport: Viewport,
    ) -> Result<()> {
        self.canvas = None;
        self.canvas_size = viewport;

        if viewport.is_empty() {
            warn!(
                "Sky canvas has no area ({}x{}), drawing disabled",
                viewport.width, viewport.height
            );
            return Ok(());
        }

        let mut canvas = rl
            .load_render_texture(thread, viewport.width as u32, viewport.height as u32)
            .map_err(|e| anyhow!("Failed to create sky canvas: {}", e))?;
        rl.draw_texture_mode(thread, &mut canvas, |mut d| {
            d.clear_background(SKY);
        });
        self.canvas = Some(canvas);

        info!("Sky canvas ready at {}x{}", viewport.width, viewport.height);
        Ok(())
    }

    /// Resets painting state and starts the render loop. The loop is never
    /// started twice.
    pub fn begin_session(&mut self) {
        self.session.reset();
        self.running = true;
    }

    /// One render-loop tick: trail overlay, particle step, particle draw.
    pub fn render_frame(&mut self, rl: &mut RaylibHandle, thread: &RaylibThread) {
        if !self.running {
            return;
        }
        self.session.step();

        let Some(canvas) = self.canvas.as_mut() else {
            return;
        };
        let particles = self.session.particles();
        let width = self.canvas_size.width as i32;
        let height = self.canvas_size.height as i32;
        let trail = ui::faded(SKY, TRAIL_OPACITY);

        rl.draw_texture_mode(thread, canvas, |mut d| {
            d.draw_rectangle(0, 0, width, height, trail);
            for particle in particles {
                particle.draw(&mut d);
            }
        });
    }

    pub fn finish_button(viewport: Viewport) -> Button {
        Button::centered("Finish", viewport, 0.5, 0.85)
    }
}

impl Scene for SkyPainter {
    fn handle(&mut self, event: PointerEvent, viewport: Viewport) -> Option<SceneId> {
        match event {
            PointerEvent::Down(point) => {
                let finish = Self::finish_button(viewport);
                if self.session.milestone_reached() && finish.hit(point) {
                    return Some(SceneId::Navigation);
                }
                self.session.pointer_down(point);
            }
            PointerEvent::Move(point) => {
                self.session.pointer_move(point);
            }
            PointerEvent::Up(_) => self.session.pointer_up(),
        }
        None
    }

    fn update(&mut self, dt: f32, _viewport: Viewport) {
        self.session.update_prompt(dt);
    }

    fn draw<D: RaylibDraw>(&self, d: &mut D, viewport: Viewport, opacity: f32) {
        let (width, height) = (viewport.width as i32, viewport.height as i32);
        d.draw_rectangle(0, 0, width, height, ui::faded(SKY, opacity));

        if let Some(canvas) = &self.canvas {
            // Render textures are stored upside down
            let source = Rectangle::new(
                0.0,
                0.0,
                self.canvas_size.width,
                -self.canvas_size.height,
            );
            let target = Rectangle::new(0.0, 0.0, viewport.width, viewport.height);

            unsafe {
                raylib::ffi::BeginBlendMode(BlendMode::BLEND_ALPHA_PREMULTIPLY as i32);
            }
            d.draw_texture_pro(
                canvas,
                source,
                target,
                Vector2::new(0.0, 0.0),
                0.0,
                canvas_tint(opacity),
            );
            unsafe {
                raylib::ffi::EndBlendMode();
            }
        }

        let prompt = opacity * self.session.prompt_opacity();
        if prompt > 0.0 {
            ui::draw_text_centered(
                d,
                "Touch and drag to paint our sky",
                viewport.at(0.5, 0.5),
                32,
                ui::faded(ui::TEXT, prompt),
            );
        }

        if self.session.milestone_reached() {
            ui::draw_text_centered(
                d,
                "Look what we made together.",
                viewport.at(0.5, 0.72),
                34,
                ui::faded(ui::TEXT, opacity),
            );
            Self::finish_button(viewport).draw(d, opacity);
        }
    }
}
