//! Cameras for the Axe toolkit
//!
//! - [`Camera`] - 2D view with queued tweens, spring jitter, bounds and pause
//! - [`Camera3`] - orbit camera usable as an animated [`axe_anim::Attribute`]

mod camera;
mod camera3;

pub use camera::{Camera, CameraConfig};
pub use camera3::Camera3;
