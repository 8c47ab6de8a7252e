use std::io::Write;
use std::process::{Child, ChildStdin, Command, Stdio};

use anyhow::{Context, Result};
use log::{error, info};
use raylib::prelude::*;

/// Pipes rendered frames into an `ffmpeg` process as raw RGBA video.
pub struct Recorder {
    process: Child,
    stdin: Option<ChildStdin>,
    frames: u64,
}

impl Recorder {
    pub fn new(width: i32, height: i32, fps: u32, video_name: &str) -> Result<Recorder> {
        let mut process = Command::new("ffmpeg")
            .stdin(Stdio::piped())
            .args(["-loglevel", "error"])
            .arg("-y")
            .args(["-f", "rawvideo"])
            .args(["-pixel_format", "rgba"])
            .args(["-video_size", &format!("{}x{}", width, height)])
            .args(["-framerate", &format!("{}", fps)])
            .args(["-i", "-"])
            .args(["-c:v", "libx264"])
            // yuv420p needs even dimensions
            .args(["-vf", "scale=trunc(iw/2)*2:trunc(ih/2)*2"])
            .args(["-pix_fmt", "yuv420p"])
            .arg(video_name)
            .spawn()
            .context("Failed to start ffmpeg process")?;
        let stdin = process.stdin.take().context("Failed to open ffmpeg stdin")?;

        info!("Recording {}x{} @ {} fps to {}", width, height, fps, video_name);
        Ok(Recorder {
            process,
            stdin: Some(stdin),
            frames: 0,
        })
    }

    /// Writes one frame read back from a render texture (bottom row first).
    pub fn write(&mut self, image: &Image) -> Result<()> {
        let width = image.width() as usize;
        let height = image.height() as usize;
        let row_len = width * 4; // RGBA

        let pixels =
            unsafe { std::slice::from_raw_parts(image.data() as *const u8, row_len * height) };
        let stdin = self.stdin.as_mut().context("ffmpeg stdin already closed")?;

        // ffmpeg expects top to bottom
        for row in pixels.chunks_exact(row_len).rev() {
            stdin.write_all(row).context("Failed to write to ffmpeg stdin")?;
        }
        self.frames += 1;
        Ok(())
    }
}

impl Drop for Recorder {
    fn drop(&mut self) {
        // Close stdin so ffmpeg finishes the file
        self.stdin = None;
        match self.process.wait() {
            Ok(status) if status.success() => info!("Recording finished, {} frames", self.frames),
            Ok(status) => error!("ffmpeg exited with {}", status),
            Err(e) => error!("Failed to wait for ffmpeg process: {}", e),
        }
    }
}
