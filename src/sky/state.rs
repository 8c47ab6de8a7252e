use log::{info, trace};
use rand::rngs::StdRng;
use raylib::prelude::*;

use crate::constants::*;
use crate::sky::particle::Particle;

/// Per-visit painting state: live particles, the painting flag, the one-shot
/// milestone and the instruction prompt.
pub struct PaintSession {
    rng: StdRng,
    particles: Vec<Particle>,
    painting: bool,
    milestone_reached: bool,
    prompt_opacity: f32,
    prompt_fading: bool,
}

impl PaintSession {
    pub fn new(rng: StdRng) -> Self {
        Self {
            rng,
            particles: Vec::new(),
            painting: false,
            milestone_reached: false,
            prompt_opacity: 1.0,
            prompt_fading: false,
        }
    }

    pub fn reset(&mut self) {
        self.particles.clear();
        self.painting = false;
        self.milestone_reached = false;
        self.prompt_opacity = 1.0;
        self.prompt_fading = false;
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    #[cfg(test)]
    pub fn is_painting(&self) -> bool {
        self.painting
    }

    pub fn milestone_reached(&self) -> bool {
        self.milestone_reached
    }

    pub fn prompt_opacity(&self) -> f32 {
        self.prompt_opacity
    }

    /// Starts painting and deposits the first burst. Returns true if this
    /// deposit reached the milestone.
    pub fn pointer_down(&mut self, at: Vector2) -> bool {
        self.painting = true;
        self.prompt_fading = true;
        self.paint(at)
    }

    /// Deposits a burst while painting. Returns true if this deposit reached
    /// the milestone.
    pub fn pointer_move(&mut self, at: Vector2) -> bool {
        self.paint(at)
    }

    pub fn pointer_up(&mut self) {
        self.painting = false;
    }

    fn paint(&mut self, at: Vector2) -> bool {
        if !self.painting {
            return false;
        }

        for _ in 0..BURST_SIZE {
            let particle = Particle::spawn(&mut self.rng, at);
            self.particles.push(particle);
        }
        trace!("Burst at ({:.0}, {:.0}), {} live", at.x, at.y, self.particles.len());

        if self.particles.len() > PARTICLE_MILESTONE && !self.milestone_reached {
            self.milestone_reached = true;
            info!("Sky milestone reached with {} particles", self.particles.len());
            return true;
        }
        false
    }

    /// One render-loop tick: advance and fade every particle, then drop the
    /// ones that have faded out.
    pub fn step(&mut self) {
        for particle in self.particles.iter_mut() {
            particle.update();
        }
        self.particles.retain(|p| !p.is_spent());
    }

    /// Time-based prompt fade, independent of the particle tick.
    pub fn update_prompt(&mut self, dt: f32) {
        if self.prompt_fading {
            self.prompt_opacity = (self.prompt_opacity - dt / PROMPT_FADE_DURATION).max(0.0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn session() -> PaintSession {
        PaintSession::new(StdRng::seed_from_u64(2024))
    }

    #[test]
    fn down_then_up_leaves_one_burst_near_the_pointer() {
        let mut s = session();
        let at = Vector2::new(100.0, 100.0);
        s.pointer_down(at);
        s.pointer_up();

        assert_eq!(s.particles().len(), BURST_SIZE);
        assert!(!s.is_painting());
        for p in s.particles() {
            assert!((p.position.x - 100.0).abs() <= JITTER);
            assert!((p.position.y - 100.0).abs() <= JITTER);
        }
    }

    #[test]
    fn move_adds_a_burst_only_while_painting() {
        let mut s = session();
        s.pointer_move(Vector2::new(10.0, 10.0));
        assert!(s.particles().is_empty());

        s.pointer_down(Vector2::new(10.0, 10.0));
        for i in 1..=10 {
            s.pointer_move(Vector2::new(10.0 + i as f32, 10.0));
            assert_eq!(s.particles().len(), BURST_SIZE * (i + 1));
        }

        s.pointer_up();
        s.pointer_move(Vector2::new(50.0, 50.0));
        assert_eq!(s.particles().len(), BURST_SIZE * 11);
    }

    #[test]
    fn milestone_on_the_deposit_that_passes_the_threshold() {
        let mut s = session();
        let at = Vector2::new(300.0, 300.0);
        assert!(!s.pointer_down(at));
        for _ in 0..39 {
            assert!(!s.pointer_move(at));
        }
        assert_eq!(s.particles().len(), 200);
        assert!(!s.milestone_reached());

        assert!(s.pointer_move(at));
        assert_eq!(s.particles().len(), 205);
        assert!(s.milestone_reached());
    }

    #[test]
    fn milestone_fires_once_per_session() {
        let mut s = session();
        let at = Vector2::new(0.0, 0.0);
        s.pointer_down(at);
        let mut reveals = 0;
        for _ in 0..60 {
            if s.pointer_move(at) {
                reveals += 1;
            }
        }
        assert_eq!(reveals, 1);

        // Let everything fade, then paint past the threshold again
        for _ in 0..100 {
            s.step();
        }
        assert!(s.particles().is_empty());
        assert!(s.milestone_reached());
        for _ in 0..60 {
            assert!(!s.pointer_move(at));
        }
    }

    #[test]
    fn particle_removed_in_the_frame_alpha_reaches_zero() {
        let mut s = session();
        s.pointer_down(Vector2::new(50.0, 50.0));
        s.pointer_up();

        let mut expected = 1.0f32;
        loop {
            let before: Vec<f32> = s.particles().iter().map(|p| p.alpha).collect();
            s.step();
            expected -= ALPHA_DECAY;
            if expected <= 0.0 {
                assert!(s.particles().is_empty());
                break;
            }
            assert_eq!(s.particles().len(), BURST_SIZE);
            for (p, old) in s.particles().iter().zip(before) {
                assert!(p.alpha < old);
                assert_eq!(p.alpha, expected);
            }
        }
    }

    #[test]
    fn reset_clears_the_session() {
        let mut s = session();
        let at = Vector2::new(0.0, 0.0);
        s.pointer_down(at);
        for _ in 0..50 {
            s.pointer_move(at);
        }
        s.update_prompt(1.0);
        assert!(s.milestone_reached());
        assert_eq!(s.prompt_opacity(), 0.0);

        s.reset();
        assert!(s.particles().is_empty());
        assert!(!s.milestone_reached());
        assert!(!s.is_painting());
        assert_eq!(s.prompt_opacity(), 1.0);
    }

    #[test]
    fn prompt_fades_after_first_touch() {
        let mut s = session();
        s.update_prompt(0.25);
        assert_eq!(s.prompt_opacity(), 1.0);

        s.pointer_down(Vector2::new(1.0, 1.0));
        s.update_prompt(0.25);
        assert_eq!(s.prompt_opacity(), 0.5);
    }
}
