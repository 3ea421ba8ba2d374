//! Headless demo scene
//!
//! A spark emitter travels around a square on a looping event. Every half
//! second it bursts, kicks the camera and plays a positional spark sound
//! while a music queue loops underneath. The camera pans and zooms along
//! queued tweens. Nothing is drawn; the demo only logs what happened.

use std::cell::Cell;
use std::rc::Rc;

use axe_anim::{
    shared, AnimError, Easing, EasingMethod, EasingType, EntityList, Event, IntRange, LinearPath,
    Range, Shared, Tween,
};
use axe_audio::{AudioError, AudioLibrary, AudioLibraryDef, AudioManager, SilentBackend};
use axe_camera::Camera;
use axe_math::numbers::PI2;
use axe_math::{Color, MatchType, Vec2, Vec3};
use axe_particles::{
    AlphaInfluence, ColorInitializer, DampingInfluence, DirectionalVelocity, EllipseVolume,
    Particle, ParticleEmitter, ParticleListener, ParticleSystem, ScaleInitializer,
};

use crate::config::AppConfig;
use crate::systems::{SimulationResult, SimulationSystem};

/// Flag carried by spark sounds
pub const SPARK_SOUND: u64 = 1 << 0;
/// Flag carried by music
pub const MUSIC_SOUND: u64 = 1 << 1;

/// Name of the audio context the demo loads
pub const DEMO_CONTEXT: &str = "demo";

const BURST_INTERVAL: f32 = 0.5;
const MAX_SPARK_SOUNDS: usize = 4;

/// Errors building the demo scene
#[derive(Debug)]
pub enum DemoError {
    Anim(AnimError),
    Audio(AudioError),
}

impl std::fmt::Display for DemoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DemoError::Anim(e) => write!(f, "Demo animation error: {}", e),
            DemoError::Audio(e) => write!(f, "Demo audio error: {}", e),
        }
    }
}

impl std::error::Error for DemoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DemoError::Anim(e) => Some(e),
            DemoError::Audio(e) => Some(e),
        }
    }
}

impl From<AnimError> for DemoError {
    fn from(e: AnimError) -> Self {
        DemoError::Anim(e)
    }
}

impl From<AudioError> for DemoError {
    fn from(e: AudioError) -> Self {
        DemoError::Audio(e)
    }
}

/// Counts particles as the emitter hands them out
struct EmitCounter(Rc<Cell<u64>>);

impl ParticleListener for EmitCounter {
    fn on_emit(&mut self, _particle: &Particle) {
        self.0.set(self.0.get() + 1);
    }
}

/// What a demo run did
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DemoSummary {
    pub frames: u64,
    pub elapsed: f32,
    pub bursts: u32,
    pub emitted: u64,
    pub peak_particles: usize,
    pub peak_sounds: usize,
    pub camera_center: Vec2,
}

/// Everything the demo updates each frame
pub struct DemoScene {
    pub camera: Camera,
    pub particles: Vec<ParticleSystem>,
    pub entities: EntityList,
    pub audio: AudioManager,
    library: AudioLibrary,
    spark_origin: Shared<Vec2>,
    emitted: Rc<Cell<u64>>,
    burst_timer: f32,
    bursts: u32,
}

impl DemoScene {
    /// Build the scene from configuration
    ///
    /// The audio library comes from `audio.library` when set, otherwise the
    /// built-in one is used. Either way it must define the `demo` context.
    pub fn new(config: &AppConfig) -> Result<Self, DemoError> {
        let mut camera = Camera::with_config(&config.camera.to_camera_config());
        let smooth = Easing::new(EasingType::InOut, EasingMethod::Cubic);
        camera.queue_center(
            Tween::new(0.0, 400.0, 2.0).with_easing(smooth),
            Tween::new(0.0, 300.0, 2.0).with_easing(smooth),
            true,
        );
        camera.queue_scale(Tween::new(1.0, 1.5, 1.0), Tween::new(1.0, 1.5, 1.0), true);
        camera.queue_scale(Tween::new(1.5, 1.0, 1.0), Tween::new(1.5, 1.0, 1.0), true);

        let emitted = Rc::new(Cell::new(0));
        let sparks = ParticleEmitter::new()
            .with_initial_particles(IntRange::new(12, 20))
            .with_burst_capacity(IntRange::fixed(1))
            .with_particle_life(Range::new(0.4, 0.9))
            .with_volume(EllipseVolume::new(Range::new(0.0, 6.0)))
            .with_velocity(DirectionalVelocity::new(Range::new(0.0, PI2), Range::new(60.0, 180.0)))
            .with_initializer(ColorInitializer::new(vec![Color::YELLOW, Color::ORANGE, Color::WHITE]))
            .with_initializer(ScaleInitializer::uniform(0.5, 1.5))
            .with_influence(DampingInfluence::uniform(2.0))
            .with_influence(AlphaInfluence::tween(1.0, 0.0))
            .with_listener(EmitCounter(emitted.clone()));
        let particles = vec![ParticleSystem::with_config(sparks, config.particles.to_particle_config())];

        let spark_origin = shared(Vec2::new(100.0, 100.0));
        let route = LinearPath::new(vec![
            Vec2::new(100.0, 100.0),
            Vec2::new(500.0, 100.0),
            Vec2::new(500.0, 500.0),
            Vec2::new(100.0, 500.0),
            Vec2::new(100.0, 100.0),
        ])?;
        let mut entities = EntityList::new();
        entities.add(Event::new(spark_origin.clone(), route, 4.0).with_loops(Event::<Vec2>::INFINITE));

        let mut audio = AudioManager::with_config(SilentBackend::new(), config.audio.to_audio_config());
        let def = match &config.audio.library {
            Some(path) => {
                log::info!("Loading audio library from {}", path);
                AudioLibraryDef::load(path)?
            }
            None => Self::default_library(),
        };
        let mut library = def.install(&mut audio)?;
        library.load_context(&mut audio, DEMO_CONTEXT)?;

        if let Some(music) = library.source_mut("music") {
            audio.play_looped(music, MUSIC_SOUND);
        } else {
            log::warn!("Audio library has no music source");
        }

        Ok(Self {
            camera,
            particles,
            entities,
            audio,
            library,
            spark_origin,
            emitted,
            burst_timer: 0.0,
            bursts: 0,
        })
    }

    /// Library used when the configuration names none
    pub fn default_library() -> AudioLibraryDef {
        AudioLibraryDef::new()
            .with_sound("spark1", "sfx/spark1", 0.3)
            .with_sound("spark2", "sfx/spark2", 0.3)
            .with_sound("spark3", "sfx/spark3", 0.4)
            .with_sound("theme_a", "music/theme_a", 8.0)
            .with_sound("theme_b", "music/theme_b", 8.0)
            .with_bank("sparks", &[("spark1", 3), ("spark2", 2), ("spark3", 1)])
            .with_queue("music", &["theme_a", "theme_b"])
            .with_context(DEMO_CONTEXT, &["sparks", "music"])
    }

    pub fn library(&self) -> &AudioLibrary {
        &self.library
    }

    /// Current position of the travelling emitter
    pub fn spark_origin(&self) -> Vec2 {
        *self.spark_origin.borrow()
    }

    pub fn bursts(&self) -> u32 {
        self.bursts
    }

    /// Particles emitted since the scene was built
    pub fn emitted(&self) -> u64 {
        self.emitted.get()
    }

    /// Burst if due, then step every subsystem by `dt`
    pub fn frame(&mut self, sim: &mut SimulationSystem, dt: f32) -> SimulationResult {
        self.burst_timer += dt;
        if self.burst_timer >= BURST_INTERVAL {
            self.burst_timer -= BURST_INTERVAL;
            self.burst();
        }

        sim.step(dt, &mut self.camera, &mut self.particles, &mut self.entities, &mut self.audio)
    }

    fn burst(&mut self) {
        let origin = self.spark_origin();
        for system in &mut self.particles {
            system.spawn_at(origin);
        }
        self.camera.jitter_center(40.0, 25.0);
        self.bursts += 1;

        if self.audio.count(SPARK_SOUND, MatchType::AnyOf) >= MAX_SPARK_SOUNDS {
            return;
        }
        let listener = Vec3::from(self.camera.center);
        match self.library.source_mut("sparks") {
            Some(sparks) => {
                self.audio.play_3d(listener, Vec3::from(origin), sparks, SPARK_SOUND, false);
            }
            None => log::warn!("Audio library has no sparks source"),
        }
    }

    /// Run `frames` fixed steps of `dt` seconds
    pub fn run(&mut self, sim: &mut SimulationSystem, frames: u32, dt: f32) -> DemoSummary {
        let mut summary = DemoSummary::default();
        for _ in 0..frames {
            let result = self.frame(sim, dt);
            summary.peak_particles = summary.peak_particles.max(result.particles);
            summary.peak_sounds = summary.peak_sounds.max(result.sounds);
        }

        summary.frames = sim.frame();
        summary.elapsed = sim.elapsed();
        summary.bursts = self.bursts;
        summary.emitted = self.emitted();
        summary.camera_center = self.camera.center;
        summary
    }
}
