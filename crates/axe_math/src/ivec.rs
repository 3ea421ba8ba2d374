//! Integer vectors for grid and pixel coordinates

use serde::{Serialize, Deserialize};

/// 2D integer vector
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Vec2i {
    pub x: i32,
    pub y: i32,
}

impl Vec2i {
    pub const ZERO: Self = Self::new(0, 0);
    pub const ONE: Self = Self::new(1, 1);
    pub const UP: Self = Self::new(0, 1);
    pub const DOWN: Self = Self::new(0, -1);
    pub const RIGHT: Self = Self::new(1, 0);
    pub const LEFT: Self = Self::new(-1, 0);

    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn dot(self, other: Self) -> i32 {
        self.x * other.x + self.y * other.y
    }

    /// Scalar 2D cross product
    #[inline]
    pub fn cross(self, other: Self) -> i32 {
        self.y * other.x - self.x * other.y
    }

    #[inline]
    pub fn length(self) -> f32 {
        (self.dot(self) as f32).sqrt()
    }

    #[inline]
    pub fn distance(self, other: Self) -> f32 {
        (other - self).length()
    }

    /// Clamp each component into the given box
    pub fn clamp(self, min: Self, max: Self) -> Self {
        Self::new(self.x.clamp(min.x, max.x), self.y.clamp(min.y, max.y))
    }

    /// Interpolate, truncating toward zero
    pub fn lerp(self, other: Self, t: f32) -> Self {
        Self::new(
            ((other.x - self.x) as f32 * t) as i32 + self.x,
            ((other.y - self.y) as f32 * t) as i32 + self.y,
        )
    }

    /// Multiply by a float, truncating toward zero
    pub fn scaled(self, s: f32) -> Self {
        Self::new((self.x as f32 * s) as i32, (self.y as f32 * s) as i32)
    }
}

impl std::ops::Add for Vec2i {
    type Output = Self;
    #[inline]
    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }
}

impl std::ops::AddAssign for Vec2i {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.x += other.x;
        self.y += other.y;
    }
}

impl std::ops::Sub for Vec2i {
    type Output = Self;
    #[inline]
    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }
}

impl std::ops::Mul<i32> for Vec2i {
    type Output = Self;
    #[inline]
    fn mul(self, scalar: i32) -> Self {
        Self::new(self.x * scalar, self.y * scalar)
    }
}

impl std::ops::Neg for Vec2i {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

/// 3D integer vector
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Vec3i {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl Vec3i {
    pub const ZERO: Self = Self::new(0, 0, 0);
    pub const ONE: Self = Self::new(1, 1, 1);

    #[inline]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub fn dot(self, other: Self) -> i32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    pub fn cross(self, other: Self) -> Self {
        Self::new(
            self.y * other.z - other.y * self.z,
            self.z * other.x - other.z * self.x,
            self.x * other.y - other.x * self.y,
        )
    }

    #[inline]
    pub fn length(self) -> f32 {
        (self.dot(self) as f32).sqrt()
    }

    #[inline]
    pub fn distance(self, other: Self) -> f32 {
        (other - self).length()
    }

    pub fn clamp(self, min: Self, max: Self) -> Self {
        Self::new(
            self.x.clamp(min.x, max.x),
            self.y.clamp(min.y, max.y),
            self.z.clamp(min.z, max.z),
        )
    }

    /// Interpolate, truncating toward zero
    pub fn lerp(self, other: Self, t: f32) -> Self {
        Self::new(
            ((other.x - self.x) as f32 * t) as i32 + self.x,
            ((other.y - self.y) as f32 * t) as i32 + self.y,
            ((other.z - self.z) as f32 * t) as i32 + self.z,
        )
    }

    /// Multiply by a float, truncating toward zero
    pub fn scaled(self, s: f32) -> Self {
        Self::new(
            (self.x as f32 * s) as i32,
            (self.y as f32 * s) as i32,
            (self.z as f32 * s) as i32,
        )
    }
}

impl std::ops::Add for Vec3i {
    type Output = Self;
    #[inline]
    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl std::ops::AddAssign for Vec3i {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.x += other.x;
        self.y += other.y;
        self.z += other.z;
    }
}

impl std::ops::Sub for Vec3i {
    type Output = Self;
    #[inline]
    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl std::ops::Mul<i32> for Vec3i {
    type Output = Self;
    #[inline]
    fn mul(self, scalar: i32) -> Self {
        Self::new(self.x * scalar, self.y * scalar, self.z * scalar)
    }
}

impl std::ops::Neg for Vec3i {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec2i_products() {
        let a = Vec2i::new(2, 3);
        let b = Vec2i::new(4, -1);
        assert_eq!(a.dot(b), 5);
        assert_eq!(a.cross(b), 14);
        assert_eq!(Vec2i::new(3, 4).length(), 5.0);
    }

    #[test]
    fn test_vec2i_lerp_truncates() {
        let v = Vec2i::ZERO.lerp(Vec2i::new(5, -5), 0.5);
        assert_eq!(v, Vec2i::new(2, -2));
    }

    #[test]
    fn test_vec2i_clamp() {
        let v = Vec2i::new(-5, 20).clamp(Vec2i::ZERO, Vec2i::new(10, 10));
        assert_eq!(v, Vec2i::new(0, 10));
    }

    #[test]
    fn test_vec3i() {
        let a = Vec3i::new(1, 0, 0);
        let b = Vec3i::new(0, 1, 0);
        assert_eq!(a.cross(b), Vec3i::new(0, 0, 1));
        assert_eq!(Vec3i::new(2, 3, 6).length(), 7.0);
        assert_eq!((a - b) * 2, Vec3i::new(2, -2, 0));
        assert_eq!(Vec3i::new(3, -3, 4).scaled(0.5), Vec3i::new(1, -1, 2));
    }
}
