//! Particle state and the pool particles are recycled through

use axe_math::{Color, Tile, Vec2};

/// A single simulated particle
///
/// Motion is integrated in [`Particle::update`]: acceleration feeds
/// velocity, which feeds location, and likewise for scale and angle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub location: Vec2,
    pub velocity: Vec2,
    pub acceleration: Vec2,
    /// Drawn size in world units
    pub size: Vec2,
    pub scale: Vec2,
    pub scale_velocity: Vec2,
    pub scale_acceleration: Vec2,
    /// Rotation in radians
    pub angle: f32,
    pub angle_velocity: f32,
    pub angle_acceleration: f32,
    pub shade: Color,
    pub tile: Tile,
    /// Seconds since the particle was emitted
    pub age: f32,
    /// Seconds the particle lives for
    pub lifetime: f32,
}

impl Default for Particle {
    fn default() -> Self {
        Self {
            location: Vec2::ZERO,
            velocity: Vec2::ZERO,
            acceleration: Vec2::ZERO,
            size: Vec2::ZERO,
            scale: Vec2::ONE,
            scale_velocity: Vec2::ZERO,
            scale_acceleration: Vec2::ZERO,
            angle: 0.0,
            angle_velocity: 0.0,
            angle_acceleration: 0.0,
            shade: Color::TRANSPARENT,
            tile: Tile::default(),
            age: 0.0,
            lifetime: 0.0,
        }
    }
}

impl Particle {
    pub fn update(&mut self, dt: f32) {
        self.age += dt;
        self.velocity += self.acceleration * dt;
        self.location += self.velocity * dt;
        self.scale_velocity += self.scale_acceleration * dt;
        self.scale += self.scale_velocity * dt;
        self.angle_velocity += self.angle_acceleration * dt;
        self.angle += self.angle_velocity * dt;
    }

    /// Start a new life; location, size and tile are left for the emitter
    pub fn reset(&mut self, lifetime: f32) {
        self.age = 0.0;
        self.lifetime = lifetime;
        self.velocity = Vec2::ZERO;
        self.acceleration = Vec2::ZERO;
        self.scale = Vec2::ONE;
        self.scale_velocity = Vec2::ZERO;
        self.scale_acceleration = Vec2::ZERO;
        self.angle = 0.0;
        self.angle_velocity = 0.0;
        self.angle_acceleration = 0.0;
        self.shade = Color::TRANSPARENT;
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.age < self.lifetime
    }

    /// Fraction of the lifetime used, 1 for particles without a lifetime
    #[inline]
    pub fn progress(&self) -> f32 {
        if self.lifetime > 0.0 {
            self.age / self.lifetime
        } else {
            1.0
        }
    }
}

/// Fixed-capacity free list with a factory for when it runs dry
pub struct Pool<T> {
    stack: Vec<T>,
    capacity: usize,
    factory: fn() -> T,
}

impl<T> Pool<T> {
    pub fn new(capacity: usize, factory: fn() -> T) -> Self {
        Self {
            stack: Vec::with_capacity(capacity),
            capacity,
            factory,
        }
    }

    /// Take a pooled item, or build a new one
    pub fn alloc(&mut self) -> T {
        self.stack.pop().unwrap_or_else(self.factory)
    }

    /// Return an item; it is dropped when the pool is full
    pub fn free(&mut self, item: T) {
        if self.stack.len() < self.capacity {
            self.stack.push(item);
        }
    }

    /// Number of items waiting to be reused
    pub fn len(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl<T: Default> Default for Pool<T> {
    fn default() -> Self {
        Self::new(512, T::default)
    }
}
