//! Hooks for observing particles as they are emitted, updated and retired

use crate::Particle;

/// Receives particle lifecycle notifications from an emitter
pub trait ParticleListener {
    fn on_emit(&mut self, _particle: &Particle) {}

    fn on_update(&mut self, _particle: &Particle) {}

    fn on_death(&mut self, _particle: &Particle) {}
}
