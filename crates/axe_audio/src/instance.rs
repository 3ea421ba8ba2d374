//! Tracked, flag-tagged playing sounds

use axe_math::MatchType;
use slotmap::new_key_type;

use crate::{AudioKey, AudioState, SoundVoice};

new_key_type! {
    /// Key of an instance tracked by an [`AudioManager`](crate::AudioManager)
    pub struct InstanceKey;
}

/// Called with the sound, the new state and the previous state
pub type StateListener = Box<dyn FnMut(AudioKey, AudioState, AudioState)>;

/// One voice of a sound, tagged with flags for group control
pub struct AudioInstance {
    audio: AudioKey,
    voice: Box<dyn SoundVoice>,
    flags: u64,
    state: AudioState,
    length: f32,
    time: f32,
    listeners: Vec<StateListener>,
}

impl AudioInstance {
    pub fn new(audio: AudioKey, voice: Box<dyn SoundVoice>, flags: u64) -> Self {
        Self {
            audio,
            voice,
            flags,
            state: AudioState::Stopped,
            length: 0.0,
            time: 0.0,
            listeners: Vec::new(),
        }
    }

    /// Stop after `seconds` of playback; zero plays to the end
    pub fn with_length(mut self, seconds: f32) -> Self {
        self.length = seconds;
        self
    }

    pub fn on_state_change(&mut self, listener: impl FnMut(AudioKey, AudioState, AudioState) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    pub fn audio(&self) -> AudioKey {
        self.audio
    }

    pub fn voice(&self) -> &dyn SoundVoice {
        self.voice.as_ref()
    }

    pub fn voice_mut(&mut self) -> &mut dyn SoundVoice {
        self.voice.as_mut()
    }

    pub fn flags(&self) -> u64 {
        self.flags
    }

    /// State as of the last update
    pub fn state(&self) -> AudioState {
        self.state
    }

    pub fn has_expired(&self) -> bool {
        self.state == AudioState::Stopped
    }

    pub fn length(&self) -> f32 {
        self.length
    }

    pub fn set_length(&mut self, seconds: f32) {
        self.length = seconds;
    }

    /// Seconds played while a length limit is set
    pub fn time(&self) -> f32 {
        self.time
    }

    /// True if any of `flags` is set
    pub fn has_flags(&self, flags: u64) -> bool {
        self.has_flags_matching(flags, MatchType::AnyOf)
    }

    pub fn has_flags_matching(&self, flags: u64, match_type: MatchType) -> bool {
        match_type.is_match(self.flags, flags)
    }

    pub fn update(&mut self, dt: f32) {
        if self.voice.state() == AudioState::Playing {
            if self.length > 0.0 {
                self.time += dt;
                if self.time >= self.length {
                    self.voice.stop();
                }
            }
            self.voice.advance(dt);
        }

        let new_state = self.voice.state();
        if new_state != self.state {
            for listener in &mut self.listeners {
                listener(self.audio, new_state, self.state);
            }
        }
        self.state = new_state;
    }
}
