use anyhow::Result;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use raylib::prelude::*;

use crate::controller::SceneController;
use crate::input::PointerEvent;
use crate::scenes::*;
use crate::sky::SkyPainter;
use crate::state::SceneId;
use crate::ui::{self, Viewport};

/// Runs `$body` with `$scene` bound to the behaviour for `$id`.
macro_rules! with_scene {
    ($app:expr, $id:expr, $scene:ident => $body:expr) => {
        match $id {
            SceneId::CatchButton => {
                let $scene = &mut $app.catch_button;
                $body
            }
            SceneId::Letter => {
                let $scene = &mut $app.letter;
                $body
            }
            SceneId::Constellation => {
                let $scene = &mut $app.constellation;
                $body
            }
            SceneId::WishingJar => {
                let $scene = &mut $app.wishing_jar;
                $body
            }
            SceneId::PaintSky => {
                let $scene = &mut $app.sky;
                $body
            }
            SceneId::Navigation => {
                let $scene = &mut $app.navigation;
                $body
            }
            SceneId::BallGame => {
                let $scene = &mut $app.ball_game;
                $body
            }
            SceneId::Garden => {
                let $scene = &mut $app.garden;
                $body
            }
        }
    };
}

/// Scene controller plus every scene's behaviour.
pub struct App {
    controller: SceneController,
    viewport: Viewport,

    catch_button: CatchButton,
    letter: Letter,
    constellation: Constellation,
    wishing_jar: WishingJar,
    sky: SkyPainter,
    navigation: Navigation,
    ball_game: BallGame,
    garden: Garden,
}

impl App {
    pub fn new(start: SceneId, viewport: Viewport, mut rng: StdRng) -> Self {
        let mut fork = || StdRng::seed_from_u64(rng.random());
        Self {
            controller: SceneController::with_all_scenes(start),
            viewport,
            catch_button: CatchButton::new(fork()),
            letter: Letter,
            constellation: Constellation::new(),
            wishing_jar: WishingJar::new(fork()),
            sky: SkyPainter::new(fork()),
            navigation: Navigation,
            ball_game: BallGame::new(),
            garden: Garden::new(),
        }
    }

    /// Runs the enter hook of the start scene.
    pub fn start(&mut self, rl: &mut RaylibHandle, thread: &RaylibThread) -> Result<()> {
        if self.controller.current() == SceneId::PaintSky {
            self.sky.enter(rl, thread, self.viewport)?;
        }
        Ok(())
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Routes a pointer event to the current scene and starts any transition
    /// it asks for.
    pub fn handle_pointer(&mut self, event: PointerEvent) {
        let viewport = self.viewport;
        let current = self.controller.current();
        let request = with_scene!(self, current, scene => scene.handle(event, viewport));
        if let Some(target) = request {
            self.controller.transition_to(target);
        }
    }

    /// Advances transitions and scene animations by `dt` seconds. A fresh
    /// paint session starts whenever PaintSky is shown; returns true if that
    /// happened so the caller can rebuild the sky canvas.
    pub fn advance(&mut self, dt: f32) -> bool {
        let mut sky_entered = false;
        for shown in self.controller.advance(dt) {
            if shown == SceneId::PaintSky {
                self.sky.begin_session();
                sky_entered = true;
            }
        }

        let viewport = self.viewport;
        for id in self.controller.visible_scenes() {
            with_scene!(self, id, scene => scene.update(dt, viewport));
        }
        sky_entered
    }

    /// Advances the app, then runs the sky render loop for this frame.
    pub fn update(&mut self, rl: &mut RaylibHandle, thread: &RaylibThread, dt: f32) -> Result<()> {
        if self.advance(dt) {
            self.sky.setup_canvas(rl, thread, self.viewport)?;
        }
        self.sky.render_frame(rl, thread);
        Ok(())
    }

    pub fn draw<D: RaylibDraw>(&mut self, d: &mut D) {
        d.clear_background(ui::BACKGROUND);

        let viewport = self.viewport;
        for id in self.controller.visible_scenes() {
            let opacity = self.controller.opacity(id);
            with_scene!(self, id, scene => scene.draw(&mut *d, viewport, opacity));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::*;

    fn app(start: SceneId) -> App {
        App::new(start, Viewport::new(1280.0, 720.0), StdRng::seed_from_u64(11))
    }

    fn paint_past_the_milestone(app: &mut App) {
        let at = app.viewport.at(0.3, 0.3);
        app.handle_pointer(PointerEvent::Down(at));
        for _ in 0..45 {
            app.handle_pointer(PointerEvent::Move(at));
        }
        app.handle_pointer(PointerEvent::Up(at));
        assert!(app.sky.session().milestone_reached());
    }

    #[test]
    fn letter_close_transitions_to_constellation() {
        let mut app = app(SceneId::Letter);
        let close = Letter::close_button(app.viewport).center();
        app.handle_pointer(PointerEvent::Down(close));

        assert!(app.controller.is_fading(SceneId::Letter));
        assert_eq!(app.controller.current(), SceneId::Letter);
        assert!(!app.advance(TRANSITION_DELAY));
        assert_eq!(app.controller.current(), SceneId::Constellation);
    }

    #[test]
    fn events_reach_only_the_current_scene() {
        let mut app = app(SceneId::Navigation);
        let viewport = app.viewport;
        let (garden, _) = Navigation::buttons(viewport)[1].clone();
        app.handle_pointer(PointerEvent::Down(garden.center()));
        app.advance(TRANSITION_DELAY);
        assert_eq!(app.controller.current(), SceneId::Garden);

        app.handle_pointer(PointerEvent::Down(viewport.at(0.5, 0.9)));
        assert_eq!(app.garden.flowers(), 1);
        assert!(app.sky.session().particles().is_empty());
    }

    #[test]
    fn showing_paint_sky_starts_a_fresh_session() {
        let mut app = app(SceneId::PaintSky);
        app.sky.begin_session();
        paint_past_the_milestone(&mut app);

        let finish = SkyPainter::finish_button(app.viewport).center();
        app.handle_pointer(PointerEvent::Down(finish));
        assert!(!app.advance(TRANSITION_DELAY));
        assert_eq!(app.controller.current(), SceneId::Navigation);

        app.controller.transition_to(SceneId::WishingJar);
        app.advance(TRANSITION_DELAY);
        let next = WishingJar::next_button(app.viewport).center();
        app.handle_pointer(PointerEvent::Down(next));

        assert!(app.advance(TRANSITION_DELAY));
        assert_eq!(app.controller.current(), SceneId::PaintSky);
        assert!(app.sky.session().particles().is_empty());
        assert!(!app.sky.session().milestone_reached());
        assert_eq!(app.sky.session().prompt_opacity(), 1.0);
    }

    #[test]
    fn leaving_paint_sky_keeps_the_session() {
        let mut app = app(SceneId::PaintSky);
        app.sky.begin_session();
        paint_past_the_milestone(&mut app);
        let live = app.sky.session().particles().len();

        let finish = SkyPainter::finish_button(app.viewport).center();
        app.handle_pointer(PointerEvent::Down(finish));
        assert!(!app.advance(TRANSITION_DELAY));

        assert!(!app.controller.is_visible(SceneId::PaintSky));
        assert_eq!(app.sky.session().particles().len(), live);
        assert!(app.sky.session().milestone_reached());
    }
}
