//! Initializers adjust a particle once, right after it is emitted

use rand::RngCore;

use axe_anim::Range;
use axe_math::numbers::{self, PI2};
use axe_math::{Color, Tile, Vec2};

use crate::Particle;

/// One-time setup applied to each new particle
pub trait ParticleInitializer {
    fn initialize(&self, particle: &mut Particle, rng: &mut dyn RngCore);
}

#[derive(Clone, Debug, PartialEq)]
pub struct AccelerationInitializer {
    pub acceleration: Range<Vec2>,
}

impl AccelerationInitializer {
    pub fn new(acceleration: Range<Vec2>) -> Self {
        Self { acceleration }
    }
}

impl ParticleInitializer for AccelerationInitializer {
    fn initialize(&self, particle: &mut Particle, rng: &mut dyn RngCore) {
        self.acceleration.random_into(rng, &mut particle.acceleration);
    }
}

/// Acceleration along the particle's current velocity
///
/// A relative initializer scales the velocity by the sampled value; an
/// absolute one uses the sampled value as the acceleration's length.
#[derive(Clone, Debug, PartialEq)]
pub struct AccelerationScalarInitializer {
    pub acceleration: Range<f32>,
    pub relative: bool,
}

impl AccelerationScalarInitializer {
    pub fn relative(acceleration: Range<f32>) -> Self {
        Self { acceleration, relative: true }
    }

    pub fn absolute(acceleration: Range<f32>) -> Self {
        Self { acceleration, relative: false }
    }
}

impl ParticleInitializer for AccelerationScalarInitializer {
    fn initialize(&self, particle: &mut Particle, rng: &mut dyn RngCore) {
        let amount = self.acceleration.random(rng);
        particle.acceleration = if self.relative {
            particle.velocity * amount
        } else {
            particle.velocity.with_length(amount)
        };
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct AngleInitializer {
    pub angle: Range<f32>,
}

impl AngleInitializer {
    pub fn new(angle: Range<f32>) -> Self {
        Self { angle }
    }

    /// Any rotation in a full turn
    pub fn random() -> Self {
        Self::new(Range::new(0.0, PI2))
    }
}

impl ParticleInitializer for AngleInitializer {
    fn initialize(&self, particle: &mut Particle, rng: &mut dyn RngCore) {
        particle.angle = self.angle.random(rng);
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct AngleVelocityInitializer {
    pub angle_velocity: Range<f32>,
}

impl AngleVelocityInitializer {
    pub fn new(angle_velocity: Range<f32>) -> Self {
        Self { angle_velocity }
    }
}

impl ParticleInitializer for AngleVelocityInitializer {
    fn initialize(&self, particle: &mut Particle, rng: &mut dyn RngCore) {
        particle.angle_velocity = self.angle_velocity.random(rng);
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct AngleAccelerationInitializer {
    pub angle_acceleration: Range<f32>,
}

impl AngleAccelerationInitializer {
    pub fn new(angle_acceleration: Range<f32>) -> Self {
        Self { angle_acceleration }
    }
}

impl ParticleInitializer for AngleAccelerationInitializer {
    fn initialize(&self, particle: &mut Particle, rng: &mut dyn RngCore) {
        particle.angle_acceleration = self.angle_acceleration.random(rng);
    }
}

/// Picks one of a set of colors, white when the set is empty
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ColorInitializer {
    pub colors: Vec<Color>,
}

impl ColorInitializer {
    pub fn new(colors: Vec<Color>) -> Self {
        Self { colors }
    }
}

impl ParticleInitializer for ColorInitializer {
    fn initialize(&self, particle: &mut Particle, rng: &mut dyn RngCore) {
        particle.shade = numbers::random_choice(rng, &self.colors, Color::WHITE);
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ScaleInitializer {
    pub scale: Range<Vec2>,
}

impl ScaleInitializer {
    pub fn new(scale: Range<Vec2>) -> Self {
        Self { scale }
    }

    /// Same factor on both axes
    pub fn uniform(min: f32, max: f32) -> Self {
        Self::new(Range::new(Vec2::splat(min), Vec2::splat(max)))
    }
}

impl ParticleInitializer for ScaleInitializer {
    fn initialize(&self, particle: &mut Particle, rng: &mut dyn RngCore) {
        self.scale.random_into(rng, &mut particle.scale);
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ScaleVelocityInitializer {
    pub scale_velocity: Range<Vec2>,
}

impl ScaleVelocityInitializer {
    pub fn new(scale_velocity: Range<Vec2>) -> Self {
        Self { scale_velocity }
    }
}

impl ParticleInitializer for ScaleVelocityInitializer {
    fn initialize(&self, particle: &mut Particle, rng: &mut dyn RngCore) {
        self.scale_velocity.random_into(rng, &mut particle.scale_velocity);
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ScaleAccelerationInitializer {
    pub scale_acceleration: Range<Vec2>,
}

impl ScaleAccelerationInitializer {
    pub fn new(scale_acceleration: Range<Vec2>) -> Self {
        Self { scale_acceleration }
    }
}

impl ParticleInitializer for ScaleAccelerationInitializer {
    fn initialize(&self, particle: &mut Particle, rng: &mut dyn RngCore) {
        self.scale_acceleration.random_into(rng, &mut particle.scale_acceleration);
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SizeInitializer {
    pub size: Range<Vec2>,
}

impl SizeInitializer {
    pub fn new(size: Range<Vec2>) -> Self {
        Self { size }
    }

    /// Square particles with a side in `[min, max)`
    pub fn square(min: f32, max: f32) -> Self {
        Self::new(Range::new(Vec2::splat(min), Vec2::splat(max)))
    }
}

impl ParticleInitializer for SizeInitializer {
    fn initialize(&self, particle: &mut Particle, rng: &mut dyn RngCore) {
        self.size.random_into(rng, &mut particle.size);
    }
}

/// Picks one of a set of tiles; an empty set leaves the tile alone
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TileInitializer {
    pub tiles: Vec<Tile>,
}

impl TileInitializer {
    pub fn new(tiles: Vec<Tile>) -> Self {
        Self { tiles }
    }
}

impl ParticleInitializer for TileInitializer {
    fn initialize(&self, particle: &mut Particle, rng: &mut dyn RngCore) {
        particle.tile = numbers::random_choice(rng, &self.tiles, particle.tile);
    }
}
