//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`AXE_SECTION__KEY`)

use figment::{Figment, providers::{Format, Toml, Env}};
use serde::{Serialize, Deserialize};
use std::path::Path;

use axe_math::{Rect, Vec2};

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// 2D camera configuration
    #[serde(default)]
    pub camera: CameraConfig,
    /// Particle system configuration
    #[serde(default)]
    pub particles: ParticlesConfig,
    /// Audio configuration
    #[serde(default)]
    pub audio: AudioConfig,
    /// Frame loop configuration
    #[serde(default)]
    pub simulation: SimulationConfig,
    /// Debug configuration
    #[serde(default)]
    pub debug: DebugConfig,
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`AXE_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // AXE_SIMULATION__FRAMES=10 -> simulation.frames = 10
        figment = figment.merge(Env::prefixed("AXE_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }
}

/// Camera configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Viewport width in pixels
    pub width: f32,
    /// Viewport height in pixels
    pub height: f32,
    /// Rotation point as a fraction of the viewport [x, y]
    pub anchor: [f32; 2],
    /// Jitter spring stiffness (negative pulls toward rest)
    pub jitter_stiffness: f32,
    /// Jitter spring damping
    pub jitter_damping: f32,
    /// Distance at which jitter snaps to rest
    pub epsilon: f32,
    /// World area the view is kept inside [x, y, width, height]
    pub bounds: Option<[i32; 4]>,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            anchor: [0.5, 0.5],
            jitter_stiffness: -10.0,
            jitter_damping: 1.2,
            epsilon: 0.001,
            bounds: None,
        }
    }
}

impl CameraConfig {
    /// Convert to the camera crate's configuration
    pub fn to_camera_config(&self) -> axe_camera::CameraConfig {
        axe_camera::CameraConfig {
            size: Vec2::new(self.width, self.height),
            anchor: Vec2::new(self.anchor[0], self.anchor[1]),
            jitter_stiffness: self.jitter_stiffness,
            jitter_damping: self.jitter_damping,
            epsilon: self.epsilon,
            bounds: self.bounds.map(|[x, y, w, h]| Rect::new(x, y, w, h)),
        }
    }
}

/// Particle configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ParticlesConfig {
    /// Particles kept for reuse per emitter
    pub pool_capacity: usize,
    /// Particles preallocated per effect
    pub effect_capacity: usize,
    /// Fixed seed for reproducible effects
    pub seed: Option<u64>,
}

impl Default for ParticlesConfig {
    fn default() -> Self {
        Self {
            pool_capacity: 512,
            effect_capacity: 64,
            seed: None,
        }
    }
}

impl ParticlesConfig {
    /// Convert to the particle crate's configuration
    pub fn to_particle_config(&self) -> axe_particles::ParticleConfig {
        axe_particles::ParticleConfig {
            pool_capacity: self.pool_capacity,
            effect_capacity: self.effect_capacity,
            seed: self.seed,
        }
    }
}

/// Audio configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioConfig {
    /// Most sound instances tracked at once
    pub instance_max: usize,
    /// Distance at which positional sounds start to fade
    pub distance_scale: f32,
    /// RON audio library to install at startup
    pub library: Option<String>,
    /// Fixed seed for banks and queues
    pub seed: Option<u64>,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            instance_max: 64,
            distance_scale: 1.0,
            library: None,
            seed: None,
        }
    }
}

impl AudioConfig {
    /// Convert to the audio crate's configuration
    pub fn to_audio_config(&self) -> axe_audio::AudioConfig {
        axe_audio::AudioConfig {
            instance_max: self.instance_max,
            distance_scale: self.distance_scale,
            seed: self.seed,
        }
    }
}

/// Frame loop configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Largest frame delta in seconds
    pub max_dt: f32,
    /// Step length of the headless demo in seconds
    pub fixed_dt: f32,
    /// Number of steps the headless demo runs
    pub frames: u32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            max_dt: 0.1,
            fixed_dt: 1.0 / 60.0,
            frames: 600,
        }
    }
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level (error, warn, info, debug, trace)
    pub log_level: String,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}
