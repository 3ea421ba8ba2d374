//! Sound device seam
//!
//! The audio layer talks to the host sound device only through these traits.
//! A [`SoundBackend`] turns asset names into [`SoundEffect`]s, and each effect
//! creates independent [`SoundVoice`]s that play, pause and stop.
//! [`SilentBackend`] implements the seam in memory: its voices keep time but
//! make no sound.

use std::collections::{HashMap, HashSet};

use crate::AudioError;

/// Playback state of a voice or instance
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum AudioState {
    #[default]
    Stopped,
    Playing,
    Paused,
}

/// Loads sound assets
pub trait SoundBackend {
    fn load(&mut self, asset: &str) -> Result<Box<dyn SoundEffect>, AudioError>;
}

/// A loaded sound that can be voiced many times
pub trait SoundEffect {
    /// Length in seconds
    fn duration(&self) -> f32;

    fn create_voice(&self) -> Box<dyn SoundVoice>;
}

/// One playing copy of a sound effect
pub trait SoundVoice {
    fn play(&mut self);
    fn pause(&mut self);
    fn resume(&mut self);
    fn stop(&mut self);
    fn state(&self) -> AudioState;

    fn set_looped(&mut self, looped: bool);
    fn is_looped(&self) -> bool;

    /// 0 (silent) to 1 (full)
    fn set_volume(&mut self, volume: f32);
    fn volume(&self) -> f32;

    /// -1 (left) to 1 (right)
    fn set_pan(&mut self, pan: f32);
    fn pan(&self) -> f32;

    /// -1 (octave down) to 1 (octave up)
    fn set_pitch(&mut self, pitch: f32);
    fn pitch(&self) -> f32;

    /// Let the voice observe the passage of time
    ///
    /// Hardware voices track their own position and can ignore this.
    fn advance(&mut self, _dt: f32) {}
}

/// In-memory backend for headless runs and tests
#[derive(Clone, Debug)]
pub struct SilentBackend {
    default_duration: f32,
    durations: HashMap<String, f32>,
    missing: HashSet<String>,
}

impl Default for SilentBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl SilentBackend {
    pub const DEFAULT_DURATION: f32 = 1.0;

    pub fn new() -> Self {
        Self {
            default_duration: Self::DEFAULT_DURATION,
            durations: HashMap::new(),
            missing: HashSet::new(),
        }
    }

    /// Duration used for assets without an explicit one
    pub fn with_default_duration(mut self, seconds: f32) -> Self {
        self.default_duration = seconds;
        self
    }

    pub fn with_duration(mut self, asset: impl Into<String>, seconds: f32) -> Self {
        self.durations.insert(asset.into(), seconds);
        self
    }

    /// Make loading `asset` fail
    pub fn with_missing(mut self, asset: impl Into<String>) -> Self {
        self.missing.insert(asset.into());
        self
    }
}

impl SoundBackend for SilentBackend {
    fn load(&mut self, asset: &str) -> Result<Box<dyn SoundEffect>, AudioError> {
        if self.missing.contains(asset) {
            return Err(AudioError::Load {
                asset: asset.to_string(),
                reason: "asset not found".to_string(),
            });
        }
        let duration = self.durations.get(asset).copied().unwrap_or(self.default_duration);
        Ok(Box::new(SilentEffect { duration }))
    }
}

/// Effect produced by [`SilentBackend`]
#[derive(Clone, Copy, Debug)]
pub struct SilentEffect {
    pub duration: f32,
}

impl SoundEffect for SilentEffect {
    fn duration(&self) -> f32 {
        self.duration
    }

    fn create_voice(&self) -> Box<dyn SoundVoice> {
        Box::new(SilentVoice::new(self.duration))
    }
}

/// Voice that stops once its duration has played, unless looped
#[derive(Clone, Debug)]
pub struct SilentVoice {
    state: AudioState,
    looped: bool,
    volume: f32,
    pan: f32,
    pitch: f32,
    duration: f32,
    position: f32,
}

impl SilentVoice {
    pub fn new(duration: f32) -> Self {
        Self {
            state: AudioState::Stopped,
            looped: false,
            volume: 1.0,
            pan: 0.0,
            pitch: 0.0,
            duration,
            position: 0.0,
        }
    }

    /// Seconds played since the voice started or last looped
    pub fn position(&self) -> f32 {
        self.position
    }
}

impl SoundVoice for SilentVoice {
    fn play(&mut self) {
        if self.state == AudioState::Stopped {
            self.position = 0.0;
        }
        self.state = AudioState::Playing;
    }

    fn pause(&mut self) {
        if self.state == AudioState::Playing {
            self.state = AudioState::Paused;
        }
    }

    fn resume(&mut self) {
        if self.state == AudioState::Paused {
            self.state = AudioState::Playing;
        }
    }

    fn stop(&mut self) {
        self.state = AudioState::Stopped;
        self.position = 0.0;
    }

    fn state(&self) -> AudioState {
        self.state
    }

    fn set_looped(&mut self, looped: bool) {
        self.looped = looped;
    }

    fn is_looped(&self) -> bool {
        self.looped
    }

    fn set_volume(&mut self, volume: f32) {
        self.volume = volume.clamp(0.0, 1.0);
    }

    fn volume(&self) -> f32 {
        self.volume
    }

    fn set_pan(&mut self, pan: f32) {
        self.pan = pan.clamp(-1.0, 1.0);
    }

    fn pan(&self) -> f32 {
        self.pan
    }

    fn set_pitch(&mut self, pitch: f32) {
        self.pitch = pitch.clamp(-1.0, 1.0);
    }

    fn pitch(&self) -> f32 {
        self.pitch
    }

    fn advance(&mut self, dt: f32) {
        if self.state != AudioState::Playing {
            return;
        }
        self.position += dt;
        if self.position >= self.duration {
            if self.looped && self.duration > 0.0 {
                self.position %= self.duration;
            } else {
                self.stop();
            }
        }
    }
}
