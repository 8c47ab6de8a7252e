use raylib::prelude::*;

use crate::input::PointerEvent;
use crate::state::SceneId;
use crate::ui::Viewport;

pub mod ball_game;
pub mod catch_button;
pub mod constellation;
pub mod garden;
pub mod letter;
pub mod navigation;
pub mod wishing_jar;

pub use ball_game::BallGame;
pub use catch_button::CatchButton;
pub use constellation::Constellation;
pub use garden::Garden;
pub use letter::Letter;
pub use navigation::Navigation;
pub use wishing_jar::WishingJar;

/// Behaviour of one scene. Pointer events only reach the current scene.
pub trait Scene {
    /// Handles one pointer event, returning the scene to transition to.
    fn handle(&mut self, event: PointerEvent, viewport: Viewport) -> Option<SceneId>;

    fn update(&mut self, _dt: f32, _viewport: Viewport) {}

    fn draw<D: RaylibDraw>(&self, d: &mut D, viewport: Viewport, opacity: f32);
}
