//! Registered sounds

use slotmap::new_key_type;

use crate::{AudioError, SoundBackend, SoundEffect, SoundVoice};

new_key_type! {
    /// Key of a sound registered with an [`AudioManager`](crate::AudioManager)
    pub struct AudioKey;
}

/// A named sound asset, loaded on demand through a [`SoundBackend`]
pub struct Audio {
    asset_name: String,
    duration: f32,
    effect: Option<Box<dyn SoundEffect>>,
}

impl Audio {
    /// `duration` is in seconds; zero defers to the loaded effect
    pub fn new(asset_name: impl Into<String>, duration: f32) -> Self {
        Self {
            asset_name: asset_name.into(),
            duration,
            effect: None,
        }
    }

    pub fn asset_name(&self) -> &str {
        &self.asset_name
    }

    pub fn duration(&self) -> f32 {
        match &self.effect {
            Some(effect) if self.duration <= 0.0 => effect.duration(),
            _ => self.duration,
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.effect.is_some()
    }

    pub fn effect(&self) -> Option<&dyn SoundEffect> {
        self.effect.as_deref()
    }

    /// Load the effect unless it is already loaded
    pub fn load(&mut self, backend: &mut dyn SoundBackend) -> Result<(), AudioError> {
        if self.effect.is_none() {
            self.effect = Some(backend.load(&self.asset_name)?);
        }
        Ok(())
    }

    pub fn unload(&mut self) {
        self.effect = None;
    }

    /// A fresh voice of the effect, or `None` if it is not loaded
    pub fn new_voice(&self) -> Option<Box<dyn SoundVoice>> {
        match &self.effect {
            Some(effect) => Some(effect.create_voice()),
            None => {
                log::warn!("Audio effect not loaded: {}", self.asset_name);
                None
            }
        }
    }
}

impl std::fmt::Debug for Audio {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Audio")
            .field("asset_name", &self.asset_name)
            .field("duration", &self.duration)
            .field("loaded", &self.is_loaded())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AudioState, SilentBackend};

    #[test]
    fn test_load_once_and_unload() {
        let mut backend = SilentBackend::new().with_duration("hit", 0.25);
        let mut audio = Audio::new("hit", 0.0);
        assert!(!audio.is_loaded());
        assert!(audio.new_voice().is_none());

        audio.load(&mut backend).unwrap();
        audio.load(&mut backend).unwrap();
        assert!(audio.is_loaded());
        assert_eq!(audio.duration(), 0.25);

        audio.unload();
        assert!(!audio.is_loaded());
    }

    #[test]
    fn test_declared_duration_wins() {
        let mut backend = SilentBackend::new();
        let mut audio = Audio::new("hit", 3.0);
        audio.load(&mut backend).unwrap();
        assert_eq!(audio.duration(), 3.0);
    }

    #[test]
    fn test_voices_are_independent() {
        let mut backend = SilentBackend::new();
        let mut audio = Audio::new("hit", 0.0);
        audio.load(&mut backend).unwrap();

        let mut a = audio.new_voice().unwrap();
        let b = audio.new_voice().unwrap();
        a.play();
        assert_eq!(a.state(), AudioState::Playing);
        assert_eq!(b.state(), AudioState::Stopped);
    }

    #[test]
    fn test_failed_load_stays_unloaded() {
        let mut backend = SilentBackend::new().with_missing("gone");
        let mut audio = Audio::new("gone", 1.0);
        assert!(audio.load(&mut backend).is_err());
        assert!(!audio.is_loaded());
    }
}
