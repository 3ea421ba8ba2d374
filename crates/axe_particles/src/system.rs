//! Particle system owning an emitter and the effects spawned from it

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use slotmap::{new_key_type, SlotMap};

use axe_math::Vec2;

use crate::{ParticleEffect, ParticleEmitter};

new_key_type! {
    /// Key to a live effect in a particle system
    pub struct EffectKey;
}

/// Particle system configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParticleConfig {
    /// Particles kept for reuse by the emitter pool
    pub pool_capacity: usize,
    /// Particles preallocated per effect
    pub effect_capacity: usize,
    /// Fixed RNG seed for reproducible effects
    pub seed: Option<u64>,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            pool_capacity: 512,
            effect_capacity: ParticleEffect::DEFAULT_CAPACITY,
            seed: None,
        }
    }
}

/// Effects spawned from a single emitter
pub struct ParticleSystem {
    emitter: ParticleEmitter,
    effects: SlotMap<EffectKey, ParticleEffect>,
    rng: StdRng,
    pub config: ParticleConfig,
}

impl ParticleSystem {
    /// Create a system with default configuration
    pub fn new(emitter: ParticleEmitter) -> Self {
        Self::with_config(emitter, ParticleConfig::default())
    }

    pub fn with_config(emitter: ParticleEmitter, config: ParticleConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            emitter: emitter.with_pool_capacity(config.pool_capacity),
            effects: SlotMap::with_key(),
            rng,
            config,
        }
    }

    /// Start a new effect at the origin
    pub fn spawn(&mut self) -> EffectKey {
        self.spawn_at(Vec2::ZERO)
    }

    /// Start a new effect at `position`
    pub fn spawn_at(&mut self, position: Vec2) -> EffectKey {
        let effect = ParticleEffect::with_capacity(&self.emitter, self.config.effect_capacity, &mut self.rng)
            .with_position(position);
        let key = self.effects.insert(effect);
        log::debug!("Spawned particle effect {:?} at ({}, {})", key, position.x, position.y);
        key
    }

    pub fn get(&self, key: EffectKey) -> Option<&ParticleEffect> {
        self.effects.get(key)
    }

    pub fn get_mut(&mut self, key: EffectKey) -> Option<&mut ParticleEffect> {
        self.effects.get_mut(key)
    }

    /// Remove an effect, returning its particles to the pool
    pub fn remove(&mut self, key: EffectKey) -> Option<ParticleEffect> {
        let mut effect = self.effects.remove(key)?;
        effect.clear(&mut self.emitter);
        Some(effect)
    }

    pub fn emitter(&self) -> &ParticleEmitter {
        &self.emitter
    }

    pub fn emitter_mut(&mut self) -> &mut ParticleEmitter {
        &mut self.emitter
    }

    /// Step every effect and drop the ones that expired
    pub fn update(&mut self, dt: f32) {
        for (_key, effect) in &mut self.effects {
            effect.update(dt, &mut self.emitter, &mut self.rng);
        }

        self.effects.retain(|key, effect| {
            if effect.is_expired() {
                log::debug!("Particle effect {:?} expired", key);
                false
            } else {
                true
            }
        });
    }

    pub fn effect_count(&self) -> usize {
        self.effects.len()
    }

    /// Live particles across all effects
    pub fn particle_count(&self) -> usize {
        self.effects.values().map(|e| e.particle_count()).sum()
    }

    /// Iterate over all live effects
    pub fn effects(&self) -> impl Iterator<Item = (EffectKey, &ParticleEffect)> {
        self.effects.iter()
    }

    /// Remove every effect
    pub fn clear(&mut self) {
        for (_key, effect) in &mut self.effects {
            effect.clear(&mut self.emitter);
        }
        self.effects.clear();
    }
}
