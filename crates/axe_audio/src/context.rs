//! Named groups of sounds loaded and unloaded together

use crate::{AudioKey, AudioSource};

/// A flattened list of sounds, such as everything one level needs
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AudioContext {
    name: String,
    audio: Vec<AudioKey>,
}

impl AudioContext {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            audio: Vec::new(),
        }
    }

    /// Add every sound a source can produce
    pub fn with_source(mut self, source: &dyn AudioSource) -> Self {
        self.add(source);
        self
    }

    pub fn add(&mut self, source: &dyn AudioSource) {
        self.audio.extend_from_slice(source.audio());
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn audio(&self) -> &[AudioKey] {
        &self.audio
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AudioBank, AudioQueue};
    use slotmap::SlotMap;

    #[test]
    fn test_flattens_sources() {
        let mut map: SlotMap<AudioKey, ()> = SlotMap::with_key();
        let (a, b, c, d) = (map.insert(()), map.insert(()), map.insert(()), map.insert(()));

        let context = AudioContext::new("level")
            .with_source(&a)
            .with_source(&AudioBank::new(&[(b, 2), (c, 1)]))
            .with_source(&AudioQueue::new(vec![d, a]));

        assert_eq!(context.name(), "level");
        assert_eq!(context.audio(), &[a, b, c, d, a]);
    }
}
