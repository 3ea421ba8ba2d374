//! Rotation quaternion

use serde::{Serialize, Deserialize};

use crate::Vec3;

/// Quaternion used to rotate vectors about an arbitrary axis
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Quaternion {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Default for Quaternion {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Quaternion {
    pub const IDENTITY: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// Rotation of `angle` radians about `axis`. The axis need not be unit length.
    pub fn from_axis_angle(axis: Vec3, angle: f32) -> Self {
        let half = angle * 0.5;
        let len = axis.length();
        if len == 0.0 {
            return Self::IDENTITY;
        }
        let sin = half.sin() / len;
        Self::new(axis.x * sin, axis.y * sin, axis.z * sin, half.cos())
    }

    /// Conjugate; the inverse for unit quaternions
    #[inline]
    pub fn invert(self) -> Self {
        Self::new(-self.x, -self.y, -self.z, self.w)
    }

    /// Hamilton product `self * other`
    pub fn mul(self, b: Self) -> Self {
        let a = self;
        Self::new(
            a.w * b.x + a.x * b.w + a.y * b.z - a.z * b.y,
            a.w * b.y + a.y * b.w + a.z * b.x - a.x * b.z,
            a.w * b.z + a.z * b.w + a.x * b.y - a.y * b.x,
            a.w * b.w - a.x * b.x - a.y * b.y - a.z * b.z,
        )
    }

    /// Rotate `v`, keeping its length
    pub fn rotate(self, v: Vec3) -> Vec3 {
        let mut unit = v;
        let length = unit.normalize();
        let p = Self::new(unit.x, unit.y, unit.z, 0.0);
        let r = self.mul(p.mul(self.invert()));
        Vec3::new(r.x, r.y, r.z) * length
    }
}

impl std::ops::Mul for Quaternion {
    type Output = Self;
    fn mul(self, other: Self) -> Self {
        Quaternion::mul(self, other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    const EPSILON: f32 = 0.0001;

    fn approx_eq(a: Vec3, b: Vec3) -> bool {
        (a.x - b.x).abs() < EPSILON && (a.y - b.y).abs() < EPSILON && (a.z - b.z).abs() < EPSILON
    }

    #[test]
    fn test_rotate_about_z() {
        let q = Quaternion::from_axis_angle(Vec3::FAR, FRAC_PI_2);
        let v = q.rotate(Vec3::RIGHT);
        assert!(approx_eq(v, Vec3::UP), "got {:?}", v);
    }

    #[test]
    fn test_rotate_preserves_length() {
        let q = Quaternion::from_axis_angle(Vec3::new(1.0, 2.0, 3.0), 1.1);
        let v = Vec3::new(3.0, -4.0, 12.0);
        let r = q.rotate(v);
        assert!((r.length() - 13.0).abs() < 0.001);
    }

    #[test]
    fn test_unnormalized_axis() {
        let a = Quaternion::from_axis_angle(Vec3::new(0.0, 5.0, 0.0), 0.7);
        let b = Quaternion::from_axis_angle(Vec3::UP, 0.7);
        assert!((a.y - b.y).abs() < EPSILON);
        assert!((a.w - b.w).abs() < EPSILON);
    }

    #[test]
    fn test_inverse_undoes_rotation() {
        let q = Quaternion::from_axis_angle(Vec3::UP, 0.9);
        let v = Vec3::new(1.0, 2.0, 3.0);
        let back = q.invert().rotate(q.rotate(v));
        assert!(approx_eq(back, v));
    }
}
