//! A running group of particles spawned from an emitter

use rand::RngCore;

use axe_math::{Tile, Vec2};

use crate::{Particle, ParticleEmitter};

/// Lifecycle of a [`ParticleEffect`]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EffectState {
    /// Waiting out the start delay
    #[default]
    Delayed,
    /// Emitting bursts
    Alive,
    /// No longer emitting; waits for live particles to die
    Dying,
    /// Expired with all particles returned to the pool
    Dead,
}

/// A live effect
///
/// Effects do not own their emitter; every update borrows it so that many
/// effects share one template and one particle pool.
#[derive(Clone, Debug)]
pub struct ParticleEffect {
    particles: Vec<Particle>,
    state: EffectState,
    emitting: bool,
    expired: bool,
    pub enabled: bool,
    time: f32,
    delay: f32,
    lifetime: f32,
    capacity: i32,
    emitter_time: f32,
    burst_delay: f32,
    burst_amount: i32,
    burst_capacity: i32,
    /// World position the particles are drawn relative to
    pub position: Vec2,
    /// Added to each new particle's location
    pub offset: Vec2,
    pub scale: Vec2,
    pub angle: f32,
    pub particle_anchor: Vec2,
    pub tile: Tile,
}

impl ParticleEffect {
    pub const DEFAULT_CAPACITY: usize = 64;

    /// Roll a new effect from the emitter's ranges
    pub fn new(emitter: &ParticleEmitter, rng: &mut dyn RngCore) -> Self {
        Self::with_capacity(emitter, Self::DEFAULT_CAPACITY, rng)
    }

    /// Like [`ParticleEffect::new`], preallocating room for `initial_capacity` particles
    pub fn with_capacity(emitter: &ParticleEmitter, initial_capacity: usize, rng: &mut dyn RngCore) -> Self {
        let burst_delay = emitter.burst_delay.random(rng);
        Self {
            particles: Vec::with_capacity(initial_capacity),
            state: EffectState::Delayed,
            emitting: true,
            expired: false,
            enabled: true,
            time: 0.0,
            delay: emitter.delay.random(rng),
            lifetime: emitter.effect_life.random(rng),
            capacity: emitter.capacity.random(rng),
            // first burst fires on the first alive update
            emitter_time: burst_delay,
            burst_delay,
            burst_amount: emitter.initial_particles.random(rng),
            burst_capacity: emitter.burst_capacity.random(rng),
            position: Vec2::ZERO,
            offset: emitter.offset.random(rng),
            scale: emitter.scale.random(rng),
            angle: emitter.angle.random(rng),
            particle_anchor: emitter.particle_anchor.random(rng),
            tile: emitter.tile,
        }
    }

    pub fn with_position(mut self, position: Vec2) -> Self {
        self.position = position;
        self
    }

    pub fn update(&mut self, dt: f32, emitter: &mut ParticleEmitter, rng: &mut dyn RngCore) {
        if !self.enabled || self.expired {
            return;
        }

        self.time += dt;

        if self.state == EffectState::Delayed && self.time > self.delay {
            self.state = EffectState::Alive;
            self.time -= self.delay;
        }
        if self.lifetime > 0.0 && self.state == EffectState::Alive && self.time > self.lifetime {
            self.state = EffectState::Dying;
        }

        if self.state == EffectState::Dying && self.particles.is_empty() {
            self.expire(emitter);
        } else {
            self.advance(dt, emitter, rng);
        }
    }

    fn advance(&mut self, dt: f32, emitter: &mut ParticleEmitter, rng: &mut dyn RngCore) {
        if self.state == EffectState::Alive && self.emitting {
            self.emitter_time += dt;
            if self.emitter_time > self.burst_delay {
                self.burst(emitter, rng);
            }
        }

        self.step(dt, emitter);

        for influence in emitter.influences() {
            influence.influence(&mut self.particles, dt);
        }

        emitter.notify_update(&self.particles);
    }

    /// Age every particle and retire the dead ones, keeping order
    fn step(&mut self, dt: f32, emitter: &mut ParticleEmitter) {
        self.particles.retain_mut(|particle| {
            particle.update(dt);
            if particle.is_alive() {
                true
            } else {
                emitter.retire(*particle);
                false
            }
        });
    }

    /// Emit the pending burst and roll the next one
    pub fn burst(&mut self, emitter: &mut ParticleEmitter, rng: &mut dyn RngCore) {
        let room = self.capacity - self.particles.len() as i32;
        let amount = self.burst_amount.min(room);

        if amount > 0 {
            self.particles.reserve(amount as usize);

            for _ in 0..amount {
                let mut particle = emitter.emit();
                emitter.reset_particle(&mut particle, self.offset, rng);
                emitter.notify_emit(&particle);
                self.particles.push(particle);
            }

            if self.burst_capacity > 0 {
                self.burst_capacity -= 1;
                if self.burst_capacity == 0 {
                    self.state = EffectState::Dying;
                }
            }
        }

        self.emitter_time -= self.burst_delay.min(self.emitter_time);
        self.burst_delay = emitter.burst_delay.random(rng);
        self.burst_amount = emitter.burst_amount.random(rng);
    }

    /// Restart the effect's clock
    pub fn reset(&mut self) {
        self.time = 0.0;
        self.state = if self.delay > 0.0 {
            EffectState::Delayed
        } else {
            EffectState::Alive
        };
        self.expired = false;
    }

    pub fn start(&mut self) {
        self.reset();
    }

    /// Return every particle to the pool
    pub fn clear(&mut self, emitter: &mut ParticleEmitter) {
        for particle in self.particles.drain(..) {
            emitter.free(particle);
        }
    }

    /// Stop the effect and release its particles
    pub fn expire(&mut self, emitter: &mut ParticleEmitter) {
        self.expired = true;
        self.state = EffectState::Dead;
        self.clear(emitter);
    }

    pub fn is_expired(&self) -> bool {
        self.expired
    }

    pub fn state(&self) -> EffectState {
        self.state
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn particle_count(&self) -> usize {
        self.particles.len()
    }

    pub fn capacity(&self) -> i32 {
        self.capacity
    }

    pub fn set_capacity(&mut self, capacity: i32) {
        self.capacity = capacity;
    }

    pub fn is_emitting(&self) -> bool {
        self.emitting
    }

    pub fn set_emitting(&mut self, emitting: bool) {
        self.emitting = emitting;
    }

    pub fn delay(&self) -> f32 {
        self.delay
    }

    pub fn set_delay(&mut self, delay: f32) {
        self.delay = delay;
    }

    pub fn lifetime(&self) -> f32 {
        self.lifetime
    }

    pub fn set_lifetime(&mut self, lifetime: f32) {
        self.lifetime = lifetime;
    }

    /// Seconds spent in the current phase
    pub fn age(&self) -> f32 {
        self.time
    }
}
