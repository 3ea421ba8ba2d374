//! Audio management for the Axe toolkit
//!
//! ## Device Seam
//!
//! - [`SoundBackend`] / [`SoundEffect`] / [`SoundVoice`] - host sound device
//! - [`SilentBackend`] - in-memory device for headless runs
//!
//! ## Sounds and Playback
//!
//! - [`Audio`] - a registered asset, keyed by [`AudioKey`]
//! - [`AudioInstance`] - a tracked voice tagged with flags
//! - [`AudioSource`] - [`AudioKey`], [`AudioBank`] and [`AudioQueue`] pick what plays
//! - [`AudioContext`] - sounds loaded and unloaded together
//! - [`AudioManager`] - reference-counted loading and instance tracking
//! - [`AudioLibraryDef`] / [`AudioLibrary`] - RON definitions installed by name

mod error;
mod backend;
mod audio;
mod instance;
mod source;
mod context;
mod manager;
mod library;

pub use error::AudioError;
pub use backend::{AudioState, SilentBackend, SilentEffect, SilentVoice, SoundBackend, SoundEffect, SoundVoice};
pub use audio::{Audio, AudioKey};
pub use instance::{AudioInstance, InstanceKey, StateListener};
pub use source::{AudioBank, AudioQueue, AudioSource};
pub use context::AudioContext;
pub use manager::{spatial_mix, AudioConfig, AudioManager};
pub use library::{AudioLibrary, AudioLibraryDef, BankDef, ContextDef, QueueDef, SoundDef};
