use std::fmt;

use clap::ValueEnum;

/// Every scene of the story, in the order they are first visited.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, ValueEnum)]
pub enum SceneId {
    CatchButton,   // Runaway button mini-game
    Letter,        // Letter modal
    Constellation, // Connect-the-stars puzzle
    WishingJar,    // Drop wishes into the jar
    PaintSky,      // Particle canvas
    Navigation,    // Hub for the sub-activities
    BallGame,      // Sub-activity
    Garden,        // Sub-activity
}

impl SceneId {
    pub const ALL: [SceneId; 8] = [
        SceneId::CatchButton,
        SceneId::Letter,
        SceneId::Constellation,
        SceneId::WishingJar,
        SceneId::PaintSky,
        SceneId::Navigation,
        SceneId::BallGame,
        SceneId::Garden,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SceneId::CatchButton => "catch-button",
            SceneId::Letter => "letter",
            SceneId::Constellation => "constellation",
            SceneId::WishingJar => "wishing-jar",
            SceneId::PaintSky => "paint-sky",
            SceneId::Navigation => "navigation",
            SceneId::BallGame => "ball-game",
            SceneId::Garden => "garden",
        }
    }
}

impl fmt::Display for SceneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Visibility state of one scene's visual container.
#[derive(Debug, PartialEq, Clone, Copy, Default)]
pub struct Container {
    pub visible: bool,
    pub fading_out: bool,
    pub fade_timer: f32,
}

impl Container {
    pub fn start_fade_out(&mut self) {
        self.fading_out = true;
        self.fade_timer = 0.0;
    }

    pub fn hide(&mut self) {
        self.visible = false;
        self.fading_out = false;
        self.fade_timer = 0.0;
    }

    pub fn show(&mut self) {
        self.visible = true;
    }
}
