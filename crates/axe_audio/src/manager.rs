//! Audio manager: reference-counted loading and tracked playback
//!
//! Sounds are registered once by name and loaded through [`AudioContext`]s.
//! Each sound counts how many loaded contexts use it, so switching between
//! contexts that share sounds does not reload them. Playing a sound creates
//! a tracked [`AudioInstance`]; [`AudioManager::update`] drops instances that
//! have stopped or whose sound was unloaded.

use std::collections::HashMap;

use axe_math::{MatchType, Vec3};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Serialize, Deserialize};
use slotmap::{SecondaryMap, SlotMap};

use crate::{
    Audio, AudioContext, AudioError, AudioInstance, AudioKey, AudioSource, AudioState, InstanceKey,
    SoundBackend, SoundVoice,
};

/// Audio manager settings
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioConfig {
    /// Most instances tracked at once
    pub instance_max: usize,
    /// Distance at which positional sounds start to fade
    pub distance_scale: f32,
    /// Fixed RNG seed for banks and queues
    pub seed: Option<u64>,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            instance_max: AudioManager::INSTANCE_MAX,
            distance_scale: 1.0,
            seed: None,
        }
    }
}

/// Pan and volume of a sound at `emitter` heard from `listener`
///
/// Pan follows the X offset. Volume is full within `distance_scale` and
/// falls off inversely with distance beyond it.
pub fn spatial_mix(listener: Vec3, emitter: Vec3, distance_scale: f32) -> (f32, f32) {
    let offset = emitter - listener;
    let distance = offset.length();
    if distance <= 0.0 {
        return (0.0, 1.0);
    }
    let pan = (offset.x / distance).clamp(-1.0, 1.0);
    let scaled = distance / distance_scale.max(f32::EPSILON);
    let volume = if scaled <= 1.0 { 1.0 } else { 1.0 / scaled };
    (pan, volume)
}

pub struct AudioManager {
    backend: Box<dyn SoundBackend>,
    audio: SlotMap<AudioKey, Audio>,
    names: HashMap<String, AudioKey>,
    references: SecondaryMap<AudioKey, u32>,
    contexts: Vec<AudioContext>,
    instances: SlotMap<InstanceKey, AudioInstance>,
    rng: StdRng,
    pub config: AudioConfig,
}

impl AudioManager {
    pub const INSTANCE_MAX: usize = 64;

    pub fn new(backend: impl SoundBackend + 'static) -> Self {
        Self::with_config(backend, AudioConfig::default())
    }

    pub fn with_config(backend: impl SoundBackend + 'static, config: AudioConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            backend: Box::new(backend),
            audio: SlotMap::with_key(),
            names: HashMap::new(),
            references: SecondaryMap::new(),
            contexts: Vec::new(),
            instances: SlotMap::with_key(),
            rng,
            config,
        }
    }

    // --- Sounds ---

    /// Register a sound under `name`; an existing name keeps its sound
    pub fn register(&mut self, name: impl Into<String>, asset: impl Into<String>, duration: f32) -> AudioKey {
        let name = name.into();
        if let Some(&key) = self.names.get(&name) {
            return key;
        }
        let key = self.audio.insert(Audio::new(asset, duration));
        self.names.insert(name, key);
        key
    }

    pub fn audio(&self, key: AudioKey) -> Option<&Audio> {
        self.audio.get(key)
    }

    pub fn audio_key(&self, name: &str) -> Option<AudioKey> {
        self.names.get(name).copied()
    }

    /// Number of loaded contexts using a sound
    pub fn references(&self, key: AudioKey) -> u32 {
        self.references.get(key).copied().unwrap_or(0)
    }

    // --- Contexts ---

    /// Load every sound of a context and count the reference
    ///
    /// A context that is already loaded is ignored. Sounds that fail to load
    /// are still counted so a later unload stays balanced; the first failure
    /// is returned once the whole context has been processed.
    pub fn load(&mut self, context: &AudioContext) -> Result<(), AudioError> {
        if self.is_loaded(context) {
            return Ok(());
        }
        log::debug!("Loading audio context '{}'", context.name());
        self.contexts.push(context.clone());

        let mut first_error = None;
        for &key in context.audio() {
            let Some(audio) = self.audio.get_mut(key) else {
                log::warn!("Audio context '{}' names an unregistered sound", context.name());
                continue;
            };
            if let Err(e) = audio.load(self.backend.as_mut()) {
                log::warn!("{}", e);
                first_error.get_or_insert(e);
            }
            let count = self.references.get(key).copied().unwrap_or(0);
            self.references.insert(key, count + 1);
        }

        match first_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    pub fn is_loaded(&self, context: &AudioContext) -> bool {
        self.contexts.iter().any(|c| c.name() == context.name())
    }

    /// Release a loaded context's references
    ///
    /// With `dispose_unreferenced`, sounds left without references are
    /// unloaded at once; otherwise they stay loaded until [`cleanup`](Self::cleanup).
    pub fn unload(&mut self, context: &AudioContext, dispose_unreferenced: bool) {
        let Some(index) = self.contexts.iter().position(|c| c.name() == context.name()) else {
            return;
        };
        let loaded = self.contexts.remove(index);
        log::debug!("Unloading audio context '{}'", loaded.name());

        for &key in loaded.audio() {
            let Some(count) = self.references.get(key).copied() else {
                continue;
            };
            let count = count.saturating_sub(1);
            if count == 0 && dispose_unreferenced {
                self.references.remove(key);
                if let Some(audio) = self.audio.get_mut(key) {
                    audio.unload();
                }
            } else {
                self.references.insert(key, count);
            }
        }
    }

    /// Unload every sound no context references
    pub fn cleanup(&mut self) {
        let unreferenced: Vec<AudioKey> = self
            .references
            .iter()
            .filter(|(_, &count)| count == 0)
            .map(|(key, _)| key)
            .collect();

        for key in unreferenced {
            self.references.remove(key);
            if let Some(audio) = self.audio.get_mut(key) {
                audio.unload();
            }
        }
    }

    // --- Playback ---

    fn has_room(&self) -> bool {
        if self.instances.len() < self.config.instance_max {
            true
        } else {
            log::warn!("Audio instance limit of {} reached", self.config.instance_max);
            false
        }
    }

    fn voice_for<S: AudioSource + ?Sized>(&mut self, source: &mut S) -> Option<(AudioKey, Box<dyn SoundVoice>)> {
        let key = source.next_audio(&mut self.rng)?;
        let voice = self.audio.get(key)?.new_voice()?;
        Some((key, voice))
    }

    /// Track an instance created elsewhere
    pub fn track(&mut self, instance: AudioInstance) -> Option<InstanceKey> {
        if !self.has_room() {
            return None;
        }
        Some(self.instances.insert(instance))
    }

    /// Create and track an instance without playing it
    ///
    /// Unless it is started before the next update, the instance is dropped
    /// as stopped.
    pub fn create<S: AudioSource + ?Sized>(&mut self, source: &mut S, flags: u64) -> Option<InstanceKey> {
        if !self.has_room() {
            return None;
        }
        let (key, voice) = self.voice_for(source)?;
        self.track(AudioInstance::new(key, voice, flags))
    }

    fn start<S: AudioSource + ?Sized>(
        &mut self,
        source: &mut S,
        flags: u64,
        looped: bool,
        mix: Option<(f32, f32)>,
    ) -> Option<InstanceKey> {
        if !self.has_room() {
            return None;
        }
        let (key, mut voice) = self.voice_for(source)?;
        voice.set_looped(looped);
        if let Some((pan, volume)) = mix {
            voice.set_pan(pan);
            voice.set_volume(volume);
        }
        voice.play();
        self.track(AudioInstance::new(key, voice, flags))
    }

    pub fn play<S: AudioSource + ?Sized>(&mut self, source: &mut S, flags: u64) -> Option<InstanceKey> {
        self.start(source, flags, false, None)
    }

    pub fn play_looped<S: AudioSource + ?Sized>(&mut self, source: &mut S, flags: u64) -> Option<InstanceKey> {
        self.start(source, flags, true, None)
    }

    /// Play only while fewer than `max_concurrent` instances share any of `flags`
    pub fn play_limited<S: AudioSource + ?Sized>(
        &mut self,
        source: &mut S,
        flags: u64,
        max_concurrent: usize,
    ) -> Option<InstanceKey> {
        if self.count(flags, MatchType::AnyOf) < max_concurrent {
            self.play(source, flags)
        } else {
            None
        }
    }

    /// Play with pan and volume derived from listener and emitter positions
    pub fn play_3d<S: AudioSource + ?Sized>(
        &mut self,
        listener: Vec3,
        emitter: Vec3,
        source: &mut S,
        flags: u64,
        looped: bool,
    ) -> Option<InstanceKey> {
        let mix = spatial_mix(listener, emitter, self.config.distance_scale);
        self.start(source, flags, looped, Some(mix))
    }

    // --- Instances ---

    pub fn instance(&self, key: InstanceKey) -> Option<&AudioInstance> {
        self.instances.get(key)
    }

    pub fn instance_mut(&mut self, key: InstanceKey) -> Option<&mut AudioInstance> {
        self.instances.get_mut(key)
    }

    pub fn instances(&self) -> impl Iterator<Item = (InstanceKey, &AudioInstance)> {
        self.instances.iter()
    }

    pub fn instance_count(&self) -> usize {
        self.instances.len()
    }

    fn matching_mut(&mut self, flags: u64, match_type: MatchType) -> impl Iterator<Item = &mut AudioInstance> {
        self.instances
            .values_mut()
            .filter(move |instance| instance.has_flags_matching(flags, match_type))
    }

    pub fn set_volume(&mut self, volume: f32, flags: u64, match_type: MatchType) {
        for instance in self.matching_mut(flags, match_type) {
            instance.voice_mut().set_volume(volume);
        }
    }

    pub fn set_pan(&mut self, pan: f32, flags: u64, match_type: MatchType) {
        for instance in self.matching_mut(flags, match_type) {
            instance.voice_mut().set_pan(pan);
        }
    }

    pub fn set_pitch(&mut self, pitch: f32, flags: u64, match_type: MatchType) {
        for instance in self.matching_mut(flags, match_type) {
            instance.voice_mut().set_pitch(pitch);
        }
    }

    pub fn pause(&mut self, flags: u64, match_type: MatchType) {
        for instance in self.matching_mut(flags, match_type) {
            instance.voice_mut().pause();
        }
    }

    pub fn resume(&mut self, flags: u64, match_type: MatchType) {
        for instance in self.matching_mut(flags, match_type) {
            instance.voice_mut().resume();
        }
    }

    pub fn stop(&mut self, flags: u64, match_type: MatchType) {
        for instance in self.matching_mut(flags, match_type) {
            instance.voice_mut().stop();
        }
    }

    /// Collect the keys of matching instances
    pub fn retrieve(&self, flags: u64, match_type: MatchType, destination: &mut impl Extend<InstanceKey>) {
        destination.extend(
            self.instances
                .iter()
                .filter(|(_, instance)| instance.has_flags_matching(flags, match_type))
                .map(|(key, _)| key),
        );
    }

    pub fn count(&self, flags: u64, match_type: MatchType) -> usize {
        self.instances
            .values()
            .filter(|instance| instance.has_flags_matching(flags, match_type))
            .count()
    }

    /// Matching instances whose state, as of the last update, is `state`
    pub fn count_in_state(&self, flags: u64, match_type: MatchType, state: AudioState) -> usize {
        self.instances
            .values()
            .filter(|instance| instance.has_flags_matching(flags, match_type) && instance.state() == state)
            .count()
    }

    /// Update every instance and drop the stopped ones
    pub fn update(&mut self, dt: f32) {
        let audio = &self.audio;
        self.instances.retain(|_, instance| {
            let loaded = audio.get(instance.audio()).map_or(false, Audio::is_loaded);
            if loaded {
                instance.update(dt);
            }
            let keep = loaded && !instance.has_expired();
            if !keep {
                instance.voice_mut().stop();
            }
            keep
        });
    }

    /// Stop everything and unload every referenced sound
    pub fn dispose(&mut self) {
        for instance in self.instances.values_mut() {
            instance.voice_mut().stop();
        }
        self.instances.clear();

        for (key, _) in &self.references {
            if let Some(audio) = self.audio.get_mut(key) {
                audio.unload();
            }
        }
        self.references.clear();
        self.contexts.clear();
        log::debug!("Audio manager disposed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AudioQueue, SilentBackend};

    const SFX: u64 = 0b01;
    const MUSIC: u64 = 0b10;

    fn manager(max: usize) -> AudioManager {
        let backend = SilentBackend::new().with_duration("long", 10.0).with_missing("gone");
        AudioManager::with_config(
            backend,
            AudioConfig { instance_max: max, seed: Some(3), ..AudioConfig::default() },
        )
    }

    fn loaded_sound(m: &mut AudioManager, name: &str) -> AudioKey {
        let key = m.register(name, name, 0.0);
        m.load(&AudioContext::new(name).with_source(&key)).unwrap();
        key
    }

    #[test]
    fn test_register_reuses_name() {
        let mut m = manager(4);
        let a = m.register("hit", "sfx/hit", 0.0);
        let b = m.register("hit", "sfx/other", 0.0);
        assert_eq!(a, b);
        assert_eq!(m.audio(a).unwrap().asset_name(), "sfx/hit");
        assert_eq!(m.audio_key("hit"), Some(a));
        assert_eq!(m.audio_key("miss"), None);
    }

    #[test]
    fn test_shared_sound_reference_counting() {
        let mut m = manager(4);
        let shared = m.register("shared", "shared", 0.0);
        let only = m.register("only", "only", 0.0);
        let menu = AudioContext::new("menu").with_source(&shared);
        let level = AudioContext::new("level").with_source(&shared).with_source(&only);

        m.load(&menu).unwrap();
        m.load(&level).unwrap();
        m.load(&level).unwrap();
        assert_eq!(m.references(shared), 2);
        assert_eq!(m.references(only), 1);

        m.unload(&level, true);
        assert!(!m.is_loaded(&level));
        assert!(m.audio(shared).unwrap().is_loaded());
        assert!(!m.audio(only).unwrap().is_loaded());

        m.unload(&menu, true);
        assert!(!m.audio(shared).unwrap().is_loaded());
        assert_eq!(m.references(shared), 0);
    }

    #[test]
    fn test_cleanup_unloads_unreferenced() {
        let mut m = manager(4);
        let key = m.register("hit", "hit", 0.0);
        let context = AudioContext::new("c").with_source(&key);
        m.load(&context).unwrap();
        m.unload(&context, false);
        assert!(m.audio(key).unwrap().is_loaded());

        m.cleanup();
        assert!(!m.audio(key).unwrap().is_loaded());
    }

    #[test]
    fn test_unloading_unknown_context_is_ignored() {
        let mut m = manager(4);
        let key = loaded_sound(&mut m, "hit");
        m.unload(&AudioContext::new("never").with_source(&key), true);
        assert_eq!(m.references(key), 1);
    }

    #[test]
    fn test_load_reports_missing_asset() {
        let mut m = manager(4);
        let good = m.register("good", "good", 0.0);
        let bad = m.register("bad", "gone", 0.0);
        let context = AudioContext::new("c").with_source(&bad).with_source(&good);

        assert!(matches!(m.load(&context), Err(AudioError::Load { .. })));
        assert!(m.is_loaded(&context));
        assert!(m.audio(good).unwrap().is_loaded());
        assert_eq!(m.references(bad), 1);
    }

    #[test]
    fn test_play_until_finished() {
        let mut m = manager(4);
        let mut key = loaded_sound(&mut m, "hit");
        let inst = m.play(&mut key, SFX).unwrap();

        m.update(0.5);
        assert_eq!(m.instance(inst).unwrap().state(), AudioState::Playing);
        m.update(0.6);
        assert!(m.instance(inst).is_none());
        assert_eq!(m.instance_count(), 0);
    }

    #[test]
    fn test_play_unloaded_sound_fails() {
        let mut m = manager(4);
        let mut key = m.register("hit", "hit", 0.0);
        assert!(m.play(&mut key, SFX).is_none());
    }

    #[test]
    fn test_instance_limit() {
        let mut m = manager(2);
        let mut key = loaded_sound(&mut m, "hit");
        assert!(m.play(&mut key, SFX).is_some());
        assert!(m.play(&mut key, SFX).is_some());
        assert!(m.play(&mut key, SFX).is_none());
    }

    #[test]
    fn test_play_limited_by_flags() {
        let mut m = manager(8);
        let mut key = loaded_sound(&mut m, "hit");
        assert!(m.play_limited(&mut key, SFX, 1).is_some());
        assert!(m.play_limited(&mut key, SFX, 1).is_none());
        assert!(m.play_limited(&mut key, MUSIC, 1).is_some());
    }

    #[test]
    fn test_looped_keeps_playing() {
        let mut m = manager(4);
        let mut key = loaded_sound(&mut m, "hit");
        let inst = m.play_looped(&mut key, MUSIC).unwrap();
        for _ in 0..10 {
            m.update(0.5);
        }
        assert!(m.instance(inst).unwrap().voice().is_looped());
        assert_eq!(m.count_in_state(MUSIC, MatchType::All, AudioState::Playing), 1);
    }

    #[test]
    fn test_play_3d_mix() {
        let mut m = manager(4);
        let mut key = loaded_sound(&mut m, "hit");
        let inst = m
            .play_3d(Vec3::ZERO, Vec3::new(-10.0, 0.0, 0.0), &mut key, SFX, false)
            .unwrap();
        let voice = m.instance(inst).unwrap().voice();
        assert_eq!(voice.pan(), -1.0);
        assert!((voice.volume() - 0.1).abs() < 0.0001);
    }

    #[test]
    fn test_spatial_mix_near_is_full() {
        assert_eq!(spatial_mix(Vec3::ZERO, Vec3::ZERO, 1.0), (0.0, 1.0));
        let (pan, volume) = spatial_mix(Vec3::ZERO, Vec3::new(0.0, 0.0, 2.0), 4.0);
        assert_eq!(pan, 0.0);
        assert_eq!(volume, 1.0);
    }

    #[test]
    fn test_group_controls() {
        let mut m = manager(8);
        let mut key = loaded_sound(&mut m, "long");
        let sfx = m.play(&mut key, SFX).unwrap();
        let music = m.play(&mut key, MUSIC).unwrap();
        m.update(0.1);

        m.set_volume(0.5, SFX, MatchType::AnyOf);
        m.set_pan(0.25, MUSIC, MatchType::AnyOf);
        m.set_pitch(-0.5, SFX | MUSIC, MatchType::AnyOf);
        assert_eq!(m.instance(sfx).unwrap().voice().volume(), 0.5);
        assert_eq!(m.instance(music).unwrap().voice().volume(), 1.0);
        assert_eq!(m.instance(music).unwrap().voice().pan(), 0.25);
        assert_eq!(m.instance(sfx).unwrap().voice().pitch(), -0.5);

        m.pause(MUSIC, MatchType::AnyOf);
        m.update(0.1);
        assert_eq!(m.count_in_state(0, MatchType::None, AudioState::Paused), 1);
        assert_eq!(m.count_in_state(MUSIC, MatchType::Exact, AudioState::Paused), 1);

        m.resume(MUSIC, MatchType::AnyOf);
        m.stop(SFX, MatchType::AnyOf);
        m.update(0.1);
        assert!(m.instance(sfx).is_none());
        assert_eq!(m.instance(music).unwrap().state(), AudioState::Playing);

        let mut found = Vec::new();
        m.retrieve(MUSIC, MatchType::AnyOf, &mut found);
        assert_eq!(found, vec![music]);
        assert_eq!(m.count(SFX, MatchType::AnyOf), 0);
    }

    #[test]
    fn test_unloaded_audio_drops_instances() {
        let mut m = manager(4);
        let key = m.register("long", "long", 0.0);
        let context = AudioContext::new("c").with_source(&key);
        m.load(&context).unwrap();
        let mut source = key;
        m.play(&mut source, SFX).unwrap();
        m.update(0.1);
        assert_eq!(m.instance_count(), 1);

        m.unload(&context, true);
        m.update(0.1);
        assert_eq!(m.instance_count(), 0);
    }

    #[test]
    fn test_create_then_track_externally() {
        let mut m = manager(4);
        let mut key = loaded_sound(&mut m, "hit");
        let inst = m.create(&mut key, SFX).unwrap();
        assert_eq!(m.instance(inst).unwrap().state(), AudioState::Stopped);
        m.instance_mut(inst).unwrap().voice_mut().play();
        m.update(0.1);
        assert!(m.instance(inst).is_some());

        let voice = m.audio(key).unwrap().new_voice().unwrap();
        assert!(m.track(AudioInstance::new(key, voice, MUSIC)).is_some());
        assert_eq!(m.instance_count(), 2);
    }

    #[test]
    fn test_queue_source_through_manager() {
        let mut m = manager(8);
        let a = loaded_sound(&mut m, "a");
        let b = loaded_sound(&mut m, "b");
        let mut queue = AudioQueue::new(vec![a, b]);
        let first = m.play(&mut queue, SFX).unwrap();
        let second = m.play(&mut queue, SFX).unwrap();
        let played = [m.instance(first).unwrap().audio(), m.instance(second).unwrap().audio()];
        assert!(played.contains(&a) && played.contains(&b));
    }

    #[test]
    fn test_dispose() {
        let mut m = manager(4);
        let mut key = loaded_sound(&mut m, "hit");
        m.play(&mut key, SFX).unwrap();
        m.dispose();
        assert_eq!(m.instance_count(), 0);
        assert!(!m.audio(key).unwrap().is_loaded());
        assert_eq!(m.references(key), 0);
    }
}
