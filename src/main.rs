use std::path::PathBuf;

use anyhow::{Result, anyhow};
use clap::Parser;
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;
use raylib::prelude::*;

mod app;
mod constants;
mod controller;
mod ffmpeg;
mod input;
mod scenes;
mod sky;
mod state;
mod timeline;
mod ui;

use crate::app::App;
use crate::constants::*;
use crate::ffmpeg::Recorder;
use crate::input::{PointerTracker, RawPointer};
use crate::state::SceneId;
use crate::ui::Viewport;

/// A small interactive story that ends with a sky you can paint.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Scene to start from
    #[arg(long, value_enum, default_value_t = SceneId::CatchButton)]
    start: SceneId,

    /// Initial window width
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    width: i32,

    /// Initial window height
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    height: i32,

    /// Target frames per second
    #[arg(long, default_value_t = FPS)]
    fps: u32,

    /// Seed for every random choice (taps needed, particles, ...)
    #[arg(long)]
    seed: Option<u64>,

    /// Record every frame to this video file through ffmpeg
    #[arg(long)]
    record: Option<PathBuf>,

    /// Let raylib log at info level
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let recording = args.record.is_some();
    let mut builder = raylib::init();
    builder.size(args.width, args.height).title("Sky Story").vsync();
    if !recording {
        // Recorded videos need a fixed frame size
        builder.resizable();
    }
    let (mut rl, thread) = builder.build();
    rl.set_target_fps(args.fps);
    let raylib_log = if args.verbose {
        TraceLogLevel::LOG_INFO
    } else {
        TraceLogLevel::LOG_ERROR
    };
    rl.set_trace_log(raylib_log);

    let rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let mut size = (rl.get_screen_width().max(1), rl.get_screen_height().max(1));
    let mut framebuffer = load_framebuffer(&mut rl, &thread, size)?;

    let viewport = Viewport::new(size.0 as f32, size.1 as f32);
    let mut app = App::new(args.start, viewport, rng);
    app.start(&mut rl, &thread)?;

    let mut recorder = match &args.record {
        Some(path) => {
            let video_name = path.to_string_lossy();
            Some(Recorder::new(size.0, size.1, args.fps, &video_name)?)
        }
        None => None,
    };
    let frame_time = 1.0 / args.fps.max(1) as f32;

    let mut tracker = PointerTracker::new();
    info!("Starting at scene {}", args.start);

    // --- Main Loop ---
    while !rl.window_should_close() {
        // Recording renders at a fixed step so the video plays back in real time
        let dt = if recording {
            frame_time
        } else {
            rl.get_frame_time()
        };

        let screen = (rl.get_screen_width(), rl.get_screen_height());
        if !recording && screen.0 > 0 && screen.1 > 0 && screen != size {
            size = screen;
            framebuffer = load_framebuffer(&mut rl, &thread, size)?;
            app.set_viewport(Viewport::new(size.0 as f32, size.1 as f32));
        }

        // --- Input ---
        let scale = Vector2::new(
            size.0 as f32 / screen.0.max(1) as f32,
            size.1 as f32 / screen.1.max(1) as f32,
        );
        for event in tracker.sample(RawPointer::read(&rl, scale)) {
            app.handle_pointer(event);
        }

        // --- Update Logic ---
        app.update(&mut rl, &thread, dt)?;

        // --- Render into the framebuffer, then scale it to the window ---
        rl.draw_texture_mode(&thread, &mut framebuffer, |mut d| {
            app.draw(&mut d);
        });

        let mut d = rl.begin_drawing(&thread);
        let sw = d.get_screen_width() as f32;
        let sh = d.get_screen_height() as f32;
        d.clear_background(Color::BLACK);
        d.draw_texture_pro(
            &framebuffer,
            Rectangle::new(0.0, 0.0, size.0 as f32, -(size.1 as f32)),
            Rectangle::new(0.0, 0.0, sw, sh),
            Vector2::new(0.0, 0.0),
            0.0,
            Color::WHITE,
        );
        drop(d);

        if let Some(recorder) = recorder.as_mut() {
            let image = framebuffer
                .load_image()
                .map_err(|e| anyhow!("Failed to read back framebuffer: {}", e))?;
            recorder.write(&image)?;
        }
    }

    // Closes the ffmpeg pipe and waits for the file
    drop(recorder);
    Ok(())
}

fn load_framebuffer(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    (width, height): (i32, i32),
) -> Result<RenderTexture2D> {
    rl.load_render_texture(thread, width as u32, height as u32)
        .map_err(|e| anyhow!("Failed to create {}x{} framebuffer: {}", width, height, e))
}
