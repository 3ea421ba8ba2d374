//! 3D Vector type
//!
//! Axis conventions: +X is right, +Y is up and +Z points away from the viewer.

use bytemuck::{Pod, Zeroable};
use serde::{Serialize, Deserialize};

/// 3D Vector with x, y and z components
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0);
    pub const RIGHT: Self = Self::new(1.0, 0.0, 0.0);
    pub const LEFT: Self = Self::new(-1.0, 0.0, 0.0);
    pub const UP: Self = Self::new(0.0, 1.0, 0.0);
    pub const DOWN: Self = Self::new(0.0, -1.0, 0.0);
    pub const NEAR: Self = Self::new(0.0, 0.0, -1.0);
    pub const FAR: Self = Self::new(0.0, 0.0, 1.0);

    /// Create a new Vec3
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub const fn splat(v: f32) -> Self {
        Self { x: v, y: v, z: v }
    }

    /// Dot product
    #[inline]
    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Cross product
    #[inline]
    pub fn cross(self, other: Self) -> Self {
        Self::new(
            self.y * other.z - other.y * self.z,
            self.z * other.x - other.z * self.x,
            self.x * other.y - other.x * self.y,
        )
    }

    /// Length squared (faster than length)
    #[inline]
    pub fn length_squared(self) -> f32 {
        self.dot(self)
    }

    /// Length (magnitude)
    #[inline]
    pub fn length(self) -> f32 {
        self.length_squared().sqrt()
    }

    #[inline]
    pub fn distance(self, other: Self) -> f32 {
        self.distance_squared(other).sqrt()
    }

    #[inline]
    pub fn distance_squared(self, other: Self) -> f32 {
        (other - self).length_squared()
    }

    /// Normalize to unit length
    #[inline]
    pub fn normalized(self) -> Self {
        let mut v = self;
        v.normalize();
        v
    }

    /// Normalize in place, returning the length before normalization.
    ///
    /// Zero and unit vectors are left untouched.
    pub fn normalize(&mut self) -> f32 {
        let sq = self.length_squared();
        if sq != 0.0 && sq != 1.0 {
            let len = sq.sqrt();
            *self = *self / len;
            return len;
        }
        sq
    }

    /// Rescale to the given length; zero vectors are unchanged
    #[inline]
    pub fn with_length(self, length: f32) -> Self {
        let sq = self.length_squared();
        if sq == 0.0 || sq == length * length {
            return self;
        }
        self * (length / sq.sqrt())
    }

    /// Reflect `v` about the normal `n`
    #[inline]
    pub fn reflect(v: Self, n: Self) -> Self {
        v + n * (-2.0 * v.dot(n))
    }

    /// Negated reflection of `v` about `n`
    #[inline]
    pub fn refract(v: Self, n: Self) -> Self {
        -Self::reflect(v, n)
    }

    /// Mean of the given points, or zero when empty
    pub fn average(points: &[Vec3]) -> Self {
        if points.is_empty() {
            return Self::ZERO;
        }
        let sum = points.iter().fold(Self::ZERO, |acc, p| acc + *p);
        sum / points.len() as f32
    }

    /// Unit normal of the triangle `a, b, c`
    pub fn triangle_normal(a: Self, b: Self, c: Self) -> Self {
        Self::new(
            a.y * (b.z - c.z) + b.y * (c.z - a.z) + c.y * (a.z - b.z),
            a.z * (b.x - c.x) + b.z * (c.x - a.x) + c.z * (a.x - b.x),
            a.x * (b.y - c.y) + b.x * (c.y - a.y) + c.x * (a.y - b.y),
        )
        .normalized()
    }

    /// Heading around the Y axis, measured from +Z towards +X
    #[inline]
    pub fn yaw(self) -> f32 {
        self.x.atan2(self.z)
    }

    /// Elevation above the XZ plane
    #[inline]
    pub fn pitch(self) -> f32 {
        self.y.atan2((self.x * self.x + self.z * self.z).sqrt())
    }

    /// Angle between two vectors in radians; zero if either has no length
    pub fn angle_between(self, other: Self) -> f32 {
        let a = self.length();
        let b = other.length();
        if a == 0.0 || b == 0.0 {
            return 0.0;
        }
        (self.dot(other) / (a * b)).clamp(-1.0, 1.0).acos()
    }

    /// Linear interpolation between two vectors
    #[inline]
    pub fn lerp(self, other: Self, t: f32) -> Self {
        (other - self) * t + self
    }

    /// Component-wise multiplication (Hadamard product)
    #[inline]
    pub fn component_mul(self, other: Self) -> Self {
        Self::new(self.x * other.x, self.y * other.y, self.z * other.z)
    }

    #[inline]
    pub fn min_components(self, other: Self) -> Self {
        Self::new(self.x.min(other.x), self.y.min(other.y), self.z.min(other.z))
    }

    #[inline]
    pub fn max_components(self, other: Self) -> Self {
        Self::new(self.x.max(other.x), self.y.max(other.y), self.z.max(other.z))
    }

    #[inline]
    pub fn is_zero(self) -> bool {
        self == Self::ZERO
    }
}

// Operator overloads

impl std::ops::Add for Vec3 {
    type Output = Self;
    #[inline]
    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl std::ops::AddAssign for Vec3 {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.x += other.x;
        self.y += other.y;
        self.z += other.z;
    }
}

impl std::ops::Sub for Vec3 {
    type Output = Self;
    #[inline]
    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl std::ops::SubAssign for Vec3 {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.x -= other.x;
        self.y -= other.y;
        self.z -= other.z;
    }
}

impl std::ops::Mul<f32> for Vec3 {
    type Output = Self;
    #[inline]
    fn mul(self, scalar: f32) -> Self {
        Self::new(self.x * scalar, self.y * scalar, self.z * scalar)
    }
}

impl std::ops::MulAssign<f32> for Vec3 {
    #[inline]
    fn mul_assign(&mut self, scalar: f32) {
        self.x *= scalar;
        self.y *= scalar;
        self.z *= scalar;
    }
}

impl std::ops::Neg for Vec3 {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl std::ops::Div<f32> for Vec3 {
    type Output = Self;
    #[inline]
    fn div(self, scalar: f32) -> Self {
        if scalar == 0.0 {
            return self;
        }
        self * (1.0 / scalar)
    }
}

impl From<crate::Vec2> for Vec3 {
    fn from(v: crate::Vec2) -> Self {
        Self::new(v.x, v.y, 0.0)
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
    fn test_cross_axes() {
        assert_eq!(Vec3::RIGHT.cross(Vec3::UP), Vec3::FAR);
        assert_eq!(Vec3::UP.cross(Vec3::FAR), Vec3::RIGHT);
    }

    #[test]
    fn test_normalize_returns_length() {
        let mut v = Vec3::new(0.0, 3.0, 4.0);
        let len = v.normalize();
        assert_eq!(len, 5.0);
        assert!(approx_eq(v, Vec3::new(0.0, 0.6, 0.8)));

        let mut zero = Vec3::ZERO;
        assert_eq!(zero.normalize(), 0.0);
        assert_eq!(zero, Vec3::ZERO);
    }

    #[test]
    fn test_reflect_and_refract() {
        let v = Vec3::new(1.0, -1.0, 0.0);
        let r = Vec3::reflect(v, Vec3::UP);
        assert!(approx_eq(r, Vec3::new(1.0, 1.0, 0.0)));
        assert!(approx_eq(Vec3::refract(v, Vec3::UP), -r));
    }

    #[test]
    fn test_average() {
        let points = [Vec3::ZERO, Vec3::new(2.0, 4.0, 6.0)];
        assert_eq!(Vec3::average(&points), Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(Vec3::average(&[]), Vec3::ZERO);
    }

    #[test]
    fn test_triangle_normal() {
        let n = Vec3::triangle_normal(Vec3::ZERO, Vec3::RIGHT, Vec3::UP);
        assert!(approx_eq(n, Vec3::FAR));
    }

    #[test]
    fn test_yaw_and_pitch() {
        assert!((Vec3::RIGHT.yaw() - FRAC_PI_2).abs() < EPSILON);
        assert!(Vec3::FAR.yaw().abs() < EPSILON);
        assert!((Vec3::UP.pitch() - FRAC_PI_2).abs() < EPSILON);
    }

    #[test]
    fn test_angle_between() {
        assert!((Vec3::RIGHT.angle_between(Vec3::UP) - FRAC_PI_2).abs() < EPSILON);
        assert_eq!(Vec3::ZERO.angle_between(Vec3::UP), 0.0);
    }

    #[test]
    fn test_distance() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 6.0, 3.0);
        assert_eq!(a.distance(b), 5.0);
        assert_eq!(a.distance_squared(b), 25.0);
    }
}
