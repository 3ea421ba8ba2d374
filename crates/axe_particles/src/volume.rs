//! Volumes place new particles relative to their effect
//!
//! Each volume sets the particle's location and returns a suggested unit
//! direction, which velocities such as [`crate::OutwardVelocity`] use.

use rand::RngCore;

use axe_anim::{Path, Range};
use axe_math::numbers::{self, PI2};
use axe_math::Vec2;

use crate::Particle;

/// Positions a freshly emitted particle
pub trait ParticleVolume {
    fn new_volume(&self, particle: &mut Particle, rng: &mut dyn RngCore) -> Vec2;
}

/// Emits from the effect origin in a random direction
#[derive(Clone, Debug, PartialEq)]
pub struct DefaultVolume {
    pub angles: Range<f32>,
}

impl Default for DefaultVolume {
    fn default() -> Self {
        Self::new(Range::new(0.0, PI2))
    }
}

impl DefaultVolume {
    pub fn new(angles: Range<f32>) -> Self {
        Self { angles }
    }
}

impl ParticleVolume for DefaultVolume {
    fn new_volume(&self, particle: &mut Particle, rng: &mut dyn RngCore) -> Vec2 {
        particle.location = Vec2::ZERO;
        Vec2::from_angle(self.angles.random(rng), 1.0)
    }
}

/// Emits along the border of a box centered on the origin
///
/// `width` and `height` are half-extents. One axis is pinned near the
/// edge and the other is spread across the inner extent.
#[derive(Clone, Debug, PartialEq)]
pub struct BoundsVolume {
    pub width: Range<f32>,
    pub height: Range<f32>,
}

impl BoundsVolume {
    pub fn new(width: Range<f32>, height: Range<f32>) -> Self {
        Self { width, height }
    }

    pub fn fixed(width: f32, height: f32) -> Self {
        Self::new(Range::fixed(width), Range::fixed(height))
    }
}

impl ParticleVolume for BoundsVolume {
    fn new_volume(&self, particle: &mut Particle, rng: &mut dyn RngCore) -> Vec2 {
        let mut w = self.width.random(rng) * numbers::random_sign(rng);
        let mut h = self.height.random(rng) * numbers::random_sign(rng);

        if numbers::random_int(rng, 2) == 1 {
            w = numbers::random_float(rng, self.width.min) * numbers::random_sign(rng);
        } else {
            h = numbers::random_float(rng, self.height.min) * numbers::random_sign(rng);
        }

        particle.location = Vec2::new(w, h);
        particle.location.normalized()
    }
}

/// Emits on a ring of random radius
#[derive(Clone, Debug, PartialEq)]
pub struct EllipseVolume {
    pub radius: Range<f32>,
    pub angles: Range<f32>,
}

impl EllipseVolume {
    pub fn new(radius: Range<f32>) -> Self {
        Self {
            radius,
            angles: Range::new(0.0, PI2),
        }
    }

    pub fn with_angles(mut self, angles: Range<f32>) -> Self {
        self.angles = angles;
        self
    }
}

impl ParticleVolume for EllipseVolume {
    fn new_volume(&self, particle: &mut Particle, rng: &mut dyn RngCore) -> Vec2 {
        let direction = Vec2::from_angle(self.angles.random(rng), 1.0);
        particle.location = direction * self.radius.random(rng);
        direction
    }
}

/// Emits from a random point on a path, heading along its normal
pub struct PathVolume {
    path: Box<dyn Path<Vec2>>,
}

impl PathVolume {
    const STEP: f32 = 0.01;

    pub fn new(path: impl Path<Vec2> + 'static) -> Self {
        Self { path: Box::new(path) }
    }
}

impl ParticleVolume for PathVolume {
    fn new_volume(&self, particle: &mut Particle, rng: &mut dyn RngCore) -> Vec2 {
        let x = numbers::random_float(rng, 1.0 - Self::STEP);
        let p0 = self.path.get(x);
        let p1 = self.path.get(x + Self::STEP);

        particle.location = p0;
        Vec2::new(p0.y - p1.y, p1.x - p0.x).normalized()
    }
}
