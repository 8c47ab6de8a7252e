pub mod engine;
pub mod particle;
pub mod state;

pub use engine::SkyPainter;
