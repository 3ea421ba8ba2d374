//! 2D particle effects for the Axe toolkit
//!
//! A [`ParticleEmitter`] is the template: random ranges rolled per effect
//! plus pluggable strategies for new particles.
//!
//! - [`ParticleVolume`] places new particles and suggests a direction
//! - [`ParticleVelocity`] sets their starting velocity
//! - [`ParticleInitializer`] adjusts them once after emission
//! - [`ParticleInfluence`] acts on them every frame
//! - [`ParticleListener`] observes emission, updates and deaths
//!
//! [`ParticleEffect`]s run the emit/step loop and [`ParticleSystem`] keeps a
//! set of them alive against one emitter and particle [`Pool`].

mod particle;
mod volume;
mod velocity;
mod initializer;
mod influence;
mod listener;
mod emitter;
mod effect;
mod system;

pub use particle::{Particle, Pool};
pub use volume::{BoundsVolume, DefaultVolume, EllipseVolume, ParticleVolume, PathVolume};
pub use velocity::{
    DirectionalVelocity, OrthoVelocity, OutwardVelocity, ParticleVelocity, TowardsVelocity,
    ZeroVelocity,
};
pub use initializer::{
    AccelerationInitializer, AccelerationScalarInitializer, AngleAccelerationInitializer,
    AngleInitializer, AngleVelocityInitializer, ColorInitializer, ParticleInitializer,
    ScaleAccelerationInitializer, ScaleInitializer, ScaleVelocityInitializer, SizeInitializer,
    TileInitializer,
};
pub use influence::{
    AccelerationInfluence, AlignInfluence, AlphaInfluence, AngleInfluence, ColorInfluence,
    DampingInfluence, ParticleInfluence, ScaleInfluence, SizeInfluence, TileInfluence,
    VelocityInfluence,
};
pub use listener::ParticleListener;
pub use emitter::{ParticleEmitter, DEFAULT_CAPACITY};
pub use effect::{EffectState, ParticleEffect};
pub use system::{EffectKey, ParticleConfig, ParticleSystem};
