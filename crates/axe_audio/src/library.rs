//! Audio libraries: sounds, banks, queues and contexts defined in RON
//!
//! An [`AudioLibraryDef`] is the serializable description. Installing it
//! registers every sound with an [`AudioManager`] and yields an
//! [`AudioLibrary`] that resolves names to sounds, banks, queues and
//! contexts at runtime.
//!
//! ```ron
//! AudioLibraryDef(
//!     sounds: [
//!         SoundDef(name: "step1", asset: "sfx/step1", duration: 0.2),
//!         SoundDef(name: "step2", asset: "sfx/step2", duration: 0.2),
//!     ],
//!     banks: [BankDef(name: "steps", weights: [("step1", 3), ("step2", 1)])],
//!     queues: [],
//!     contexts: [ContextDef(name: "level", sources: ["steps"])],
//! )
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Serialize, Deserialize};

use crate::{AudioBank, AudioContext, AudioError, AudioKey, AudioManager, AudioQueue, AudioSource, InstanceKey};

/// A single sound asset
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SoundDef {
    pub name: String,
    pub asset: String,
    /// Seconds; zero defers to the loaded effect
    #[serde(default)]
    pub duration: f32,
}

/// Weighted random choice between named sounds
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BankDef {
    pub name: String,
    pub weights: Vec<(String, u32)>,
}

/// Shuffle bag over named sounds
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct QueueDef {
    pub name: String,
    pub sounds: Vec<String>,
}

/// Named group of sounds, banks and queues loaded together
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ContextDef {
    pub name: String,
    pub sources: Vec<String>,
}

/// Serializable audio library
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioLibraryDef {
    pub sounds: Vec<SoundDef>,
    pub banks: Vec<BankDef>,
    pub queues: Vec<QueueDef>,
    pub contexts: Vec<ContextDef>,
}

impl AudioLibraryDef {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sound(mut self, name: &str, asset: &str, duration: f32) -> Self {
        self.sounds.push(SoundDef {
            name: name.to_string(),
            asset: asset.to_string(),
            duration,
        });
        self
    }

    pub fn with_bank(mut self, name: &str, weights: &[(&str, u32)]) -> Self {
        self.banks.push(BankDef {
            name: name.to_string(),
            weights: weights.iter().map(|(s, w)| (s.to_string(), *w)).collect(),
        });
        self
    }

    pub fn with_queue(mut self, name: &str, sounds: &[&str]) -> Self {
        self.queues.push(QueueDef {
            name: name.to_string(),
            sounds: sounds.iter().map(|s| s.to_string()).collect(),
        });
        self
    }

    pub fn with_context(mut self, name: &str, sources: &[&str]) -> Self {
        self.contexts.push(ContextDef {
            name: name.to_string(),
            sources: sources.iter().map(|s| s.to_string()).collect(),
        });
        self
    }

    /// Load a library from a RON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, AudioError> {
        let contents = fs::read_to_string(path.as_ref())?;
        let def = Self::from_ron(&contents)?;
        log::debug!(
            "Loaded audio library {} ({} sounds)",
            path.as_ref().display(),
            def.sounds.len()
        );
        Ok(def)
    }

    /// Save a library to a RON file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), AudioError> {
        let contents = self.to_ron()?;
        fs::write(path, contents)?;
        Ok(())
    }

    pub fn from_ron(contents: &str) -> Result<Self, AudioError> {
        Ok(ron::from_str(contents)?)
    }

    pub fn to_ron(&self) -> Result<String, AudioError> {
        let pretty = ron::ser::PrettyConfig::new()
            .struct_names(true)
            .enumerate_arrays(false);
        Ok(ron::ser::to_string_pretty(self, pretty)?)
    }

    /// Register everything with `manager`
    pub fn install(&self, manager: &mut AudioManager) -> Result<AudioLibrary, AudioError> {
        AudioLibrary::install(self, manager)
    }
}

/// Installed audio library
#[derive(Clone, Debug, Default)]
pub struct AudioLibrary {
    sounds: HashMap<String, AudioKey>,
    banks: HashMap<String, AudioBank>,
    queues: HashMap<String, AudioQueue>,
    contexts: HashMap<String, AudioContext>,
}

impl AudioLibrary {
    pub fn install(def: &AudioLibraryDef, manager: &mut AudioManager) -> Result<Self, AudioError> {
        let mut library = Self::default();

        for sound in &def.sounds {
            let key = manager.register(sound.name.as_str(), sound.asset.as_str(), sound.duration);
            library.sounds.insert(sound.name.clone(), key);
        }

        for bank in &def.banks {
            let weights = bank
                .weights
                .iter()
                .map(|(name, weight)| Ok((library.sound_key(manager, name)?, *weight)))
                .collect::<Result<Vec<_>, AudioError>>()?;
            library.banks.insert(bank.name.clone(), AudioBank::new(&weights));
        }

        for queue in &def.queues {
            let keys = queue
                .sounds
                .iter()
                .map(|name| library.sound_key(manager, name))
                .collect::<Result<Vec<_>, AudioError>>()?;
            library.queues.insert(queue.name.clone(), AudioQueue::new(keys));
        }

        for context in &def.contexts {
            let mut built = AudioContext::new(context.name.as_str());
            for name in &context.sources {
                let source = library
                    .source(name)
                    .ok_or_else(|| AudioError::UnknownSound(name.clone()))?;
                built.add(source);
            }
            library.contexts.insert(context.name.clone(), built);
        }

        log::debug!(
            "Installed audio library: {} sounds, {} banks, {} queues, {} contexts",
            library.sounds.len(),
            library.banks.len(),
            library.queues.len(),
            library.contexts.len()
        );
        Ok(library)
    }

    /// A sound from this library, or one registered with the manager earlier
    fn sound_key(&self, manager: &AudioManager, name: &str) -> Result<AudioKey, AudioError> {
        self.sounds
            .get(name)
            .copied()
            .or_else(|| manager.audio_key(name))
            .ok_or_else(|| AudioError::UnknownSound(name.to_string()))
    }

    pub fn sound(&self, name: &str) -> Option<AudioKey> {
        self.sounds.get(name).copied()
    }

    pub fn bank(&self, name: &str) -> Option<&AudioBank> {
        self.banks.get(name)
    }

    pub fn queue(&self, name: &str) -> Option<&AudioQueue> {
        self.queues.get(name)
    }

    pub fn context(&self, name: &str) -> Option<&AudioContext> {
        self.contexts.get(name)
    }

    /// Sound, bank or queue with this name
    pub fn source(&self, name: &str) -> Option<&dyn AudioSource> {
        if let Some(key) = self.sounds.get(name) {
            return Some(key as &dyn AudioSource);
        }
        if let Some(bank) = self.banks.get(name) {
            return Some(bank as &dyn AudioSource);
        }
        self.queues.get(name).map(|queue| queue as &dyn AudioSource)
    }

    pub fn source_mut(&mut self, name: &str) -> Option<&mut dyn AudioSource> {
        if let Some(key) = self.sounds.get_mut(name) {
            return Some(key as &mut dyn AudioSource);
        }
        if let Some(bank) = self.banks.get_mut(name) {
            return Some(bank as &mut dyn AudioSource);
        }
        self.queues.get_mut(name).map(|queue| queue as &mut dyn AudioSource)
    }

    /// Play the named sound, bank or queue
    pub fn play(
        &mut self,
        manager: &mut AudioManager,
        name: &str,
        flags: u64,
    ) -> Result<Option<InstanceKey>, AudioError> {
        let source = self
            .source_mut(name)
            .ok_or_else(|| AudioError::UnknownSound(name.to_string()))?;
        Ok(manager.play(source, flags))
    }

    pub fn load_context(&self, manager: &mut AudioManager, name: &str) -> Result<(), AudioError> {
        let context = self
            .context(name)
            .ok_or_else(|| AudioError::UnknownContext(name.to_string()))?;
        manager.load(context)
    }

    pub fn unload_context(
        &self,
        manager: &mut AudioManager,
        name: &str,
        dispose_unreferenced: bool,
    ) -> Result<(), AudioError> {
        let context = self
            .context(name)
            .ok_or_else(|| AudioError::UnknownContext(name.to_string()))?;
        manager.unload(context, dispose_unreferenced);
        Ok(())
    }
}
