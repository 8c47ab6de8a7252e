pub const DEFAULT_WIDTH: i32 = 1280;          // Initial window width
pub const DEFAULT_HEIGHT: i32 = 720;          // Initial window height
pub const FPS: u32 = 60;                      // Frames per second

pub const TRANSITION_DELAY: f32 = 0.5;        // Scene fade out / show delay (seconds)
pub const PROMPT_FADE_DURATION: f32 = 0.5;    // Paint prompt fade (seconds)

// --- Sky painter ---
pub const BURST_SIZE: usize = 5;              // Particles per pointer sample
pub const PARTICLE_MILESTONE: usize = 200;    // Live count that reveals the finish UI
pub const ALPHA_DECAY: f32 = 0.02;            // Alpha lost per frame
pub const TRAIL_OPACITY: f32 = 0.1;           // Overlay drawn over the previous frame
pub const JITTER: f32 = 20.0;                 // Spawn offset range per axis (+/-)
pub const DRIFT: f32 = 0.25;                  // Velocity range per axis (+/-, units per frame)
pub const MIN_SIZE: f32 = 1.0;
pub const MAX_SIZE: f32 = 3.0;

// --- Other scenes ---
pub const MIN_TAPS: u32 = 5;
pub const MAX_TAPS: u32 = 7;
pub const MAX_WISHES: usize = 64;
pub const MAX_FLOWERS: usize = 48;
pub const FLOWER_GROW_DURATION: f32 = 1.0;    // Seconds for a flower to reach full height
pub const GRAVITY: f32 = 900.0;               // Ball game, pixels / s^2
pub const KICK_SPEED: f32 = 620.0;            // Upward speed after a tap
