//! Emitters describe how effects spawn and shape their particles
//!
//! An emitter holds the random ranges each [`crate::ParticleEffect`] rolls
//! when it is created, the strategies applied to every new particle, and
//! the pool particles are recycled through.

use rand::RngCore;

use axe_anim::{IntRange, Range};
use axe_math::{Tile, Vec2};

use crate::{
    DefaultVolume, Particle, ParticleInfluence, ParticleInitializer, ParticleListener,
    ParticleVelocity, ParticleVolume, Pool, ZeroVelocity,
};

/// Default upper bound on particles per effect
pub const DEFAULT_CAPACITY: i32 = 512;

/// Template for particle effects
pub struct ParticleEmitter {
    /// Seconds between bursts
    pub burst_delay: Range<f32>,
    /// Particles per burst
    pub burst_amount: IntRange,
    /// Bursts before the effect starts dying; 0 bursts forever
    pub burst_capacity: IntRange,
    /// Maximum live particles per effect
    pub capacity: IntRange,
    /// Seconds before an effect becomes alive
    pub delay: Range<f32>,
    pub angle: Range<f32>,
    pub scale: Range<Vec2>,
    /// Seconds an effect emits for; 0 emits until its burst capacity runs out
    pub effect_life: Range<f32>,
    pub particle_life: Range<f32>,
    /// Size of the first burst
    pub initial_particles: IntRange,
    pub offset: Range<Vec2>,
    pub particle_anchor: Range<Vec2>,
    pub tile: Tile,
    volume: Box<dyn ParticleVolume>,
    velocity: Box<dyn ParticleVelocity>,
    influences: Vec<Box<dyn ParticleInfluence>>,
    initializers: Vec<Box<dyn ParticleInitializer>>,
    listener: Option<Box<dyn ParticleListener>>,
    pool: Pool<Particle>,
}

impl Default for ParticleEmitter {
    fn default() -> Self {
        Self {
            burst_delay: Range::default(),
            burst_amount: IntRange::default(),
            burst_capacity: IntRange::default(),
            capacity: IntRange::fixed(DEFAULT_CAPACITY),
            delay: Range::default(),
            angle: Range::default(),
            scale: Range::fixed(Vec2::ONE),
            effect_life: Range::default(),
            particle_life: Range::default(),
            initial_particles: IntRange::default(),
            offset: Range::fixed(Vec2::ZERO),
            particle_anchor: Range::fixed(Vec2::splat(0.5)),
            tile: Tile::default(),
            volume: Box::new(DefaultVolume::default()),
            velocity: Box::new(ZeroVelocity),
            influences: Vec::new(),
            initializers: Vec::new(),
            listener: None,
            pool: Pool::new(DEFAULT_CAPACITY as usize, Particle::default),
        }
    }
}

impl ParticleEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_burst(mut self, delay: Range<f32>, amount: IntRange) -> Self {
        self.burst_delay = delay;
        self.burst_amount = amount;
        self
    }

    pub fn with_burst_capacity(mut self, burst_capacity: IntRange) -> Self {
        self.burst_capacity = burst_capacity;
        self
    }

    pub fn with_capacity(mut self, capacity: IntRange) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn with_delay(mut self, delay: Range<f32>) -> Self {
        self.delay = delay;
        self
    }

    pub fn with_effect_life(mut self, effect_life: Range<f32>) -> Self {
        self.effect_life = effect_life;
        self
    }

    pub fn with_particle_life(mut self, particle_life: Range<f32>) -> Self {
        self.particle_life = particle_life;
        self
    }

    pub fn with_initial_particles(mut self, initial_particles: IntRange) -> Self {
        self.initial_particles = initial_particles;
        self
    }

    pub fn with_offset(mut self, offset: Range<Vec2>) -> Self {
        self.offset = offset;
        self
    }

    pub fn with_tile(mut self, tile: Tile) -> Self {
        self.tile = tile;
        self
    }

    pub fn with_volume(mut self, volume: impl ParticleVolume + 'static) -> Self {
        self.volume = Box::new(volume);
        self
    }

    pub fn with_velocity(mut self, velocity: impl ParticleVelocity + 'static) -> Self {
        self.velocity = Box::new(velocity);
        self
    }

    pub fn with_influence(mut self, influence: impl ParticleInfluence + 'static) -> Self {
        self.add_influence(influence);
        self
    }

    pub fn with_initializer(mut self, initializer: impl ParticleInitializer + 'static) -> Self {
        self.add_initializer(initializer);
        self
    }

    pub fn with_listener(mut self, listener: impl ParticleListener + 'static) -> Self {
        self.listener = Some(Box::new(listener));
        self
    }

    /// Replace the particle pool with an empty one of the given size
    pub fn with_pool_capacity(mut self, capacity: usize) -> Self {
        self.pool = Pool::new(capacity, Particle::default);
        self
    }

    pub fn add_influence(&mut self, influence: impl ParticleInfluence + 'static) {
        self.influences.push(Box::new(influence));
    }

    pub fn add_initializer(&mut self, initializer: impl ParticleInitializer + 'static) {
        self.initializers.push(Box::new(initializer));
    }

    pub fn influences(&self) -> &[Box<dyn ParticleInfluence>] {
        &self.influences
    }

    pub fn pool(&self) -> &Pool<Particle> {
        &self.pool
    }

    /// Prepare a particle for a new life in an effect with the given offset
    pub fn reset_particle(&self, particle: &mut Particle, offset: Vec2, rng: &mut dyn RngCore) {
        particle.reset(self.particle_life.random(rng));

        let direction = self.volume.new_volume(particle, rng);
        self.velocity.new_velocity(particle, direction, rng);
        particle.location += offset;

        for initializer in &self.initializers {
            initializer.initialize(particle, rng);
        }
    }

    /// Take a particle from the pool
    pub fn emit(&mut self) -> Particle {
        self.pool.alloc()
    }

    /// Return a particle to the pool
    pub fn free(&mut self, particle: Particle) {
        self.pool.free(particle);
    }

    pub(crate) fn notify_emit(&mut self, particle: &Particle) {
        if let Some(listener) = self.listener.as_mut() {
            listener.on_emit(particle);
        }
    }

    pub(crate) fn notify_update(&mut self, particles: &[Particle]) {
        if let Some(listener) = self.listener.as_mut() {
            for particle in particles {
                listener.on_update(particle);
            }
        }
    }

    /// Report a dead particle and send it back to the pool
    pub(crate) fn retire(&mut self, particle: Particle) {
        if let Some(listener) = self.listener.as_mut() {
            listener.on_death(&particle);
        }
        self.pool.free(particle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{OutwardVelocity, SizeInitializer};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_defaults() {
        let emitter = ParticleEmitter::new();
        assert_eq!(emitter.capacity, IntRange::fixed(512));
        assert_eq!(emitter.scale, Range::fixed(Vec2::ONE));
        assert_eq!(emitter.particle_anchor, Range::fixed(Vec2::splat(0.5)));
        assert_eq!(emitter.pool().capacity(), 512);
    }

    #[test]
    fn test_reset_particle_applies_strategies() {
        let mut rng = StdRng::seed_from_u64(11);
        let emitter = ParticleEmitter::new()
            .with_particle_life(Range::fixed(2.0))
            .with_velocity(OutwardVelocity::new(Range::fixed(4.0)))
            .with_initializer(SizeInitializer::square(3.0, 3.0));

        let mut p = Particle { age: 9.0, ..Default::default() };
        emitter.reset_particle(&mut p, Vec2::new(100.0, 50.0), &mut rng);

        assert_eq!(p.age, 0.0);
        assert_eq!(p.lifetime, 2.0);
        assert_eq!(p.location, Vec2::new(100.0, 50.0));
        assert!((p.velocity.length() - 4.0).abs() < 0.0001);
        assert_eq!(p.size, Vec2::splat(3.0));
    }

    #[test]
    fn test_emit_and_free_use_pool() {
        let mut emitter = ParticleEmitter::new().with_pool_capacity(4);
        let p = emitter.emit();
        emitter.free(p);
        assert_eq!(emitter.pool().len(), 1);
        let _ = emitter.emit();
        assert!(emitter.pool().is_empty());
    }
}
