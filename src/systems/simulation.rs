//! Frame simulation system
//!
//! Drives one frame of every subsystem:
//! - Delta time calculation
//! - Entity updates (events, movers, springs)
//! - Camera motion
//! - Particle effects
//! - Audio instance bookkeeping

use std::time::Instant;

use axe_anim::{Entity, EntityList};
use axe_audio::AudioManager;
use axe_camera::Camera;
use axe_particles::ParticleSystem;

/// Result of a simulation update
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SimulationResult {
    /// Seconds the frame advanced by, after capping
    pub dt: f32,
    /// Live particle effects across all systems
    pub effects: usize,
    /// Live particles across all systems
    pub particles: usize,
    /// Tracked sound instances
    pub sounds: usize,
}

/// Steps the frame-driven subsystems in a fixed order
pub struct SimulationSystem {
    last_frame: Instant,
    max_dt: f32,
    frame: u64,
    elapsed: f32,
}

impl SimulationSystem {
    /// Default cap on a single frame delta, in seconds
    pub const MAX_DT: f32 = 0.1;

    pub fn new() -> Self {
        Self {
            last_frame: Instant::now(),
            max_dt: Self::MAX_DT,
            frame: 0,
            elapsed: 0.0,
        }
    }

    /// Negative caps are treated as zero
    pub fn with_max_dt(mut self, max_dt: f32) -> Self {
        self.max_dt = max_dt.max(0.0);
        self
    }

    pub fn max_dt(&self) -> f32 {
        self.max_dt
    }

    /// Frames stepped so far
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Simulated seconds so far
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Wall-clock seconds since the last call, capped at `max_dt`
    pub fn frame_delta(&mut self) -> f32 {
        let now = Instant::now();
        let raw_dt = (now - self.last_frame).as_secs_f32();
        // Cap dt so the first frame or a stall doesn't jump everything forward
        self.last_frame = now;
        raw_dt.min(self.max_dt)
    }

    /// Run one frame using the wall-clock delta
    pub fn update(
        &mut self,
        camera: &mut Camera,
        particles: &mut [ParticleSystem],
        entities: &mut EntityList,
        audio: &mut AudioManager,
    ) -> SimulationResult {
        let dt = self.frame_delta();
        self.step(dt, camera, particles, entities, audio)
    }

    /// Run one frame of `dt` seconds
    ///
    /// Entities run first so values they animate are current for the camera
    /// and the particle systems in the same frame.
    pub fn step(
        &mut self,
        dt: f32,
        camera: &mut Camera,
        particles: &mut [ParticleSystem],
        entities: &mut EntityList,
        audio: &mut AudioManager,
    ) -> SimulationResult {
        let dt = dt.max(0.0).min(self.max_dt);

        entities.update(dt);
        camera.update(dt);

        let mut effects = 0;
        let mut live = 0;
        for system in particles.iter_mut() {
            system.update(dt);
            effects += system.effect_count();
            live += system.particle_count();
        }

        audio.update(dt);

        self.frame += 1;
        self.elapsed += dt;

        SimulationResult {
            dt,
            effects,
            particles: live,
            sounds: audio.instance_count(),
        }
    }
}

impl Default for SimulationSystem {
    fn default() -> Self {
        Self::new()
    }
}
