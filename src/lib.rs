//! Axe - gameplay support toolkit
//!
//! Re-exports the workspace crates and adds the application layer:
//! - [`config`]: layered configuration (TOML files + `AXE_` environment)
//! - [`systems`]: the per-frame simulation driver
//! - [`demo`]: a headless scene exercising every subsystem

pub mod config;
pub mod demo;
pub mod systems;

pub use axe_anim as anim;
pub use axe_audio as audio;
pub use axe_camera as camera;
pub use axe_math as math;
pub use axe_particles as particles;
