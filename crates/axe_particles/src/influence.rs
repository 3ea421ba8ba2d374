//! Influences act on every live particle each frame
//!
//! Path-driven influences sample their path at the particle's progress
//! through its lifetime.

use axe_anim::{AnimError, JumpPath, LinearPath, Path, TweenPath};
use axe_math::{channel, Color, Tile, Vec2};

use crate::Particle;

/// Per-frame effect on live particles
pub trait ParticleInfluence {
    fn apply(&self, particle: &mut Particle, dt: f32);

    fn influence(&self, particles: &mut [Particle], dt: f32) {
        for particle in particles {
            self.apply(particle, dt);
        }
    }
}

/// Constant acceleration, such as gravity
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AccelerationInfluence {
    pub acceleration: Vec2,
}

impl AccelerationInfluence {
    pub fn new(acceleration: Vec2) -> Self {
        Self { acceleration }
    }
}

impl ParticleInfluence for AccelerationInfluence {
    fn apply(&self, particle: &mut Particle, dt: f32) {
        particle.velocity += self.acceleration * dt;
    }
}

/// Fades the shade's alpha along a path of values in `[0, 1]`
pub struct AlphaInfluence {
    path: Box<dyn Path<f32>>,
}

impl AlphaInfluence {
    pub fn new(path: impl Path<f32> + 'static) -> Self {
        Self { path: Box::new(path) }
    }

    pub fn tween(start: f32, end: f32) -> Self {
        Self::new(TweenPath::new(start, end))
    }

    /// Evenly paced through each alpha in turn
    pub fn linear(alphas: Vec<f32>) -> Result<Self, AnimError> {
        Ok(Self::new(LinearPath::new(alphas)?))
    }
}

impl ParticleInfluence for AlphaInfluence {
    fn apply(&self, particle: &mut Particle, _dt: f32) {
        let alpha = self.path.get(particle.progress());
        particle.shade.a = channel(alpha * 255.0);
    }
}

pub struct AngleInfluence {
    path: Box<dyn Path<f32>>,
}

impl AngleInfluence {
    pub fn new(path: impl Path<f32> + 'static) -> Self {
        Self { path: Box::new(path) }
    }
}

impl ParticleInfluence for AngleInfluence {
    fn apply(&self, particle: &mut Particle, _dt: f32) {
        let progress = particle.progress();
        self.path.set(&mut particle.angle, progress);
    }
}

pub struct ColorInfluence {
    path: Box<dyn Path<Color>>,
}

impl ColorInfluence {
    pub fn new(path: impl Path<Color> + 'static) -> Self {
        Self { path: Box::new(path) }
    }

    pub fn tween(start: Color, end: Color) -> Self {
        Self::new(TweenPath::new(start, end))
    }

    pub fn linear(colors: Vec<Color>) -> Result<Self, AnimError> {
        Ok(Self::new(LinearPath::new(colors)?))
    }
}

impl ParticleInfluence for ColorInfluence {
    fn apply(&self, particle: &mut Particle, _dt: f32) {
        let progress = particle.progress();
        self.path.set(&mut particle.shade, progress);
    }
}

/// Multiplies velocity by a per-axis factor every frame
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DampingInfluence {
    pub damping: Vec2,
}

impl DampingInfluence {
    pub fn new(damping: Vec2) -> Self {
        Self { damping }
    }

    pub fn uniform(damping: f32) -> Self {
        Self::new(Vec2::splat(damping))
    }
}

impl ParticleInfluence for DampingInfluence {
    fn apply(&self, particle: &mut Particle, _dt: f32) {
        particle.velocity = particle.velocity.component_mul(self.damping);
    }
}

pub struct ScaleInfluence {
    path: Box<dyn Path<Vec2>>,
}

impl ScaleInfluence {
    pub fn new(path: impl Path<Vec2> + 'static) -> Self {
        Self { path: Box::new(path) }
    }
}

impl ParticleInfluence for ScaleInfluence {
    fn apply(&self, particle: &mut Particle, _dt: f32) {
        let progress = particle.progress();
        self.path.set(&mut particle.scale, progress);
    }
}

pub struct SizeInfluence {
    path: Box<dyn Path<Vec2>>,
}

impl SizeInfluence {
    pub fn new(path: impl Path<Vec2> + 'static) -> Self {
        Self { path: Box::new(path) }
    }

    pub fn tween(start: Vec2, end: Vec2) -> Self {
        Self::new(TweenPath::new(start, end))
    }

    pub fn linear(sizes: Vec<Vec2>) -> Result<Self, AnimError> {
        Ok(Self::new(LinearPath::new(sizes)?))
    }
}

impl ParticleInfluence for SizeInfluence {
    fn apply(&self, particle: &mut Particle, _dt: f32) {
        let progress = particle.progress();
        self.path.set(&mut particle.size, progress);
    }
}

/// Steps through sprite tiles over the particle's life
pub struct TileInfluence {
    path: Box<dyn Path<Tile>>,
}

impl TileInfluence {
    pub fn new(path: impl Path<Tile> + 'static) -> Self {
        Self { path: Box::new(path) }
    }

    pub fn frames(tiles: Vec<Tile>) -> Result<Self, AnimError> {
        Ok(Self::new(JumpPath::new(tiles)?))
    }
}

impl ParticleInfluence for TileInfluence {
    fn apply(&self, particle: &mut Particle, _dt: f32) {
        let progress = particle.progress();
        self.path.set(&mut particle.tile, progress);
    }
}

pub struct VelocityInfluence {
    path: Box<dyn Path<Vec2>>,
}

impl VelocityInfluence {
    pub fn new(path: impl Path<Vec2> + 'static) -> Self {
        Self { path: Box::new(path) }
    }
}

impl ParticleInfluence for VelocityInfluence {
    fn apply(&self, particle: &mut Particle, _dt: f32) {
        let progress = particle.progress();
        self.path.set(&mut particle.velocity, progress);
    }
}

/// Points each particle along its direction of travel
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AlignInfluence {
    pub offset: f32,
}

impl AlignInfluence {
    pub fn new(offset: f32) -> Self {
        Self { offset }
    }
}

impl ParticleInfluence for AlignInfluence {
    fn apply(&self, particle: &mut Particle, _dt: f32) {
        particle.angle = particle.velocity.angle() + self.offset;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axe_math::Rect;

    fn aged(age: f32) -> Particle {
        Particle { age, lifetime: 1.0, ..Default::default() }
    }

    #[test]
    fn test_acceleration() {
        let mut particles = [aged(0.0), aged(0.0)];
        AccelerationInfluence::new(Vec2::new(0.0, -10.0)).influence(&mut particles, 0.5);
        for p in &particles {
            assert_eq!(p.velocity, Vec2::new(0.0, -5.0));
        }
    }

    #[test]
    fn test_alpha_fades_with_age() {
        let fade = AlphaInfluence::tween(1.0, 0.0);
        let mut p = aged(0.0);
        fade.apply(&mut p, 0.0);
        assert_eq!(p.shade.a, 255);
        p.age = 0.5;
        fade.apply(&mut p, 0.0);
        assert_eq!(p.shade.a, 128);
        p.age = 1.0;
        fade.apply(&mut p, 0.0);
        assert_eq!(p.shade.a, 0);
    }

    #[test]
    fn test_alpha_clamps() {
        let mut p = aged(0.5);
        AlphaInfluence::tween(2.0, 2.0).apply(&mut p, 0.0);
        assert_eq!(p.shade.a, 255);
    }

    #[test]
    fn test_damping() {
        let mut p = Particle { velocity: Vec2::new(10.0, 4.0), ..aged(0.0) };
        DampingInfluence::new(Vec2::new(0.5, 0.25)).apply(&mut p, 0.016);
        assert_eq!(p.velocity, Vec2::new(5.0, 1.0));
    }

    #[test]
    fn test_align() {
        let mut p = Particle { velocity: Vec2::new(0.0, 3.0), ..aged(0.0) };
        AlignInfluence::new(0.5).apply(&mut p, 0.0);
        assert!((p.angle - (std::f32::consts::FRAC_PI_2 + 0.5)).abs() < 0.0001);
    }

    #[test]
    fn test_angle_follows_path() {
        let spin = AngleInfluence::new(TweenPath::new(0.0, 2.0));
        let mut p = aged(0.25);
        spin.apply(&mut p, 0.0);
        assert!((p.angle - 0.5).abs() < 0.0001);
        p.age = 1.0;
        spin.apply(&mut p, 0.0);
        assert!((p.angle - 2.0).abs() < 0.0001);
    }

    #[test]
    fn test_size_tween() {
        let mut p = aged(0.5);
        SizeInfluence::tween(Vec2::ZERO, Vec2::splat(8.0)).apply(&mut p, 0.0);
        assert_eq!(p.size, Vec2::splat(4.0));
    }

    #[test]
    fn test_tile_frames() {
        let tiles: Vec<Tile> = (0..4).map(|i| Tile::new(Rect::new(i * 8, 0, 8, 8))).collect();
        let influence = TileInfluence::frames(tiles.clone()).unwrap();
        let mut p = aged(0.6);
        influence.apply(&mut p, 0.0);
        assert_eq!(p.tile, tiles[2]);
    }

    #[test]
    fn test_linear_rejects_single_point() {
        assert!(ColorInfluence::linear(vec![Color::RED]).is_err());
    }
}
