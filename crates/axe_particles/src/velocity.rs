//! Starting velocities for emitted particles

use rand::RngCore;

use axe_anim::Range;
use axe_math::Vec2;

use crate::Particle;

/// Sets a particle's initial velocity
///
/// `direction` is the unit direction suggested by the emitter's volume.
pub trait ParticleVelocity {
    fn new_velocity(&self, particle: &mut Particle, direction: Vec2, rng: &mut dyn RngCore);
}

/// Particles start at rest
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ZeroVelocity;

impl ParticleVelocity for ZeroVelocity {
    fn new_velocity(&self, particle: &mut Particle, _direction: Vec2, _rng: &mut dyn RngCore) {
        particle.velocity = Vec2::ZERO;
    }
}

/// A random heading and speed, ignoring the volume
#[derive(Clone, Debug, PartialEq)]
pub struct DirectionalVelocity {
    pub angles: Range<f32>,
    pub speeds: Range<f32>,
}

impl DirectionalVelocity {
    pub fn new(angles: Range<f32>, speeds: Range<f32>) -> Self {
        Self { angles, speeds }
    }
}

impl ParticleVelocity for DirectionalVelocity {
    fn new_velocity(&self, particle: &mut Particle, _direction: Vec2, rng: &mut dyn RngCore) {
        let angle = self.angles.random(rng);
        let speed = self.speeds.random(rng);
        particle.velocity = Vec2::from_angle(angle, speed);
    }
}

/// Independent x and y velocity ranges
#[derive(Clone, Debug, PartialEq)]
pub struct OrthoVelocity {
    pub velocity: Range<Vec2>,
}

impl OrthoVelocity {
    pub fn new(velocity: Range<Vec2>) -> Self {
        Self { velocity }
    }
}

impl ParticleVelocity for OrthoVelocity {
    fn new_velocity(&self, particle: &mut Particle, _direction: Vec2, rng: &mut dyn RngCore) {
        self.velocity.random_into(rng, &mut particle.velocity);
    }
}

/// Moves along the volume's direction
#[derive(Clone, Debug, PartialEq)]
pub struct OutwardVelocity {
    pub speeds: Range<f32>,
}

impl OutwardVelocity {
    pub fn new(speeds: Range<f32>) -> Self {
        Self { speeds }
    }
}

impl ParticleVelocity for OutwardVelocity {
    fn new_velocity(&self, particle: &mut Particle, direction: Vec2, rng: &mut dyn RngCore) {
        particle.velocity = direction * self.speeds.random(rng);
    }
}

/// Moves along the line through a fixed point relative to the effect
///
/// Positive speeds carry particles away from `target`; negative speeds head
/// for it.
#[derive(Clone, Debug, PartialEq)]
pub struct TowardsVelocity {
    pub speeds: Range<f32>,
    pub target: Vec2,
}

impl TowardsVelocity {
    pub fn new(speeds: Range<f32>, target: Vec2) -> Self {
        Self { speeds, target }
    }
}

impl ParticleVelocity for TowardsVelocity {
    fn new_velocity(&self, particle: &mut Particle, _direction: Vec2, rng: &mut dyn RngCore) {
        let speed = self.speeds.random(rng);
        let away = (particle.location - self.target).with_length(speed.abs());
        particle.velocity = if speed < 0.0 { -away } else { away };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_zero() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut p = Particle { velocity: Vec2::ONE, ..Default::default() };
        ZeroVelocity.new_velocity(&mut p, Vec2::X, &mut rng);
        assert_eq!(p.velocity, Vec2::ZERO);
    }

    #[test]
    fn test_outward_uses_direction() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut p = Particle::default();
        OutwardVelocity::new(Range::fixed(3.0)).new_velocity(&mut p, Vec2::Y, &mut rng);
        assert_eq!(p.velocity, Vec2::new(0.0, 3.0));
    }

    #[test]
    fn test_directional() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut p = Particle::default();
        let v = DirectionalVelocity::new(Range::fixed(std::f32::consts::FRAC_PI_2), Range::fixed(2.0));
        v.new_velocity(&mut p, Vec2::X, &mut rng);
        assert!(p.velocity.x.abs() < 0.0001);
        assert!((p.velocity.y - 2.0).abs() < 0.0001);
    }

    #[test]
    fn test_towards_positive_speed_leaves_target() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut p = Particle { location: Vec2::new(10.0, 0.0), ..Default::default() };
        TowardsVelocity::new(Range::fixed(5.0), Vec2::ZERO).new_velocity(&mut p, Vec2::X, &mut rng);
        assert!((p.velocity.x - 5.0).abs() < 0.0001);
        assert!(p.velocity.y.abs() < 0.0001);
    }

    #[test]
    fn test_towards_negative_speed_heads_for_target() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut p = Particle { location: Vec2::new(3.0, 4.0), ..Default::default() };
        TowardsVelocity::new(Range::fixed(-5.0), Vec2::ZERO).new_velocity(&mut p, Vec2::X, &mut rng);
        assert!((p.velocity.x + 3.0).abs() < 0.0001);
        assert!((p.velocity.y + 4.0).abs() < 0.0001);
    }

    #[test]
    fn test_ortho_in_range() {
        let mut rng = StdRng::seed_from_u64(6);
        let v = OrthoVelocity::new(Range::new(Vec2::new(-1.0, 5.0), Vec2::new(1.0, 6.0)));
        for _ in 0..20 {
            let mut p = Particle::default();
            v.new_velocity(&mut p, Vec2::ZERO, &mut rng);
            assert!(p.velocity.x >= -1.0 && p.velocity.x <= 1.0);
            assert!(p.velocity.y >= 5.0 && p.velocity.y <= 6.0);
        }
    }
}
