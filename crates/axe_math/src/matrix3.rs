//! Affine 3D transform: a 3x3 linear part plus a translation
//!
//! Points are column vectors, so `a * b` applies `b` first. The builder
//! methods (`rotate_*`, `scale`, `translate`, `shear_*`) post-multiply, which
//! means each one acts in the local space produced by the calls before it.

use serde::{Serialize, Deserialize};

use crate::Vec3;

/// Affine transform stored row-major with a separate translation column
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Matrix3 {
    pub m00: f32,
    pub m01: f32,
    pub m02: f32,
    pub m10: f32,
    pub m11: f32,
    pub m12: f32,
    pub m20: f32,
    pub m21: f32,
    pub m22: f32,
    pub tx: f32,
    pub ty: f32,
    pub tz: f32,
}

impl Default for Matrix3 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Matrix3 {
    pub const IDENTITY: Self = Self {
        m00: 1.0,
        m01: 0.0,
        m02: 0.0,
        m10: 0.0,
        m11: 1.0,
        m12: 0.0,
        m20: 0.0,
        m21: 0.0,
        m22: 1.0,
        tx: 0.0,
        ty: 0.0,
        tz: 0.0,
    };

    /// Pure translation
    pub fn from_translation(t: Vec3) -> Self {
        Self { tx: t.x, ty: t.y, tz: t.z, ..Self::IDENTITY }
    }

    /// Pure scale
    pub fn from_scale(s: Vec3) -> Self {
        Self { m00: s.x, m11: s.y, m22: s.z, ..Self::IDENTITY }
    }

    /// Rotation from yaw (about Y), pitch (about X) and roll (about Z)
    pub fn from_euler(yaw: f32, pitch: f32, roll: f32) -> Self {
        let (sin_x, cos_x) = pitch.sin_cos();
        let (sin_y, cos_y) = yaw.sin_cos();
        let (sin_z, cos_z) = roll.sin_cos();
        Self {
            m00: cos_z * cos_y,
            m01: cos_z * -sin_y * -sin_x + sin_z * cos_x,
            m02: cos_z * -sin_y * cos_x + sin_z * sin_x,
            m10: -sin_z * cos_y,
            m11: -sin_z * -sin_y * -sin_x + cos_z * cos_x,
            m12: -sin_z * -sin_y * cos_x + cos_z * sin_x,
            m20: sin_y,
            m21: cos_y * -sin_x,
            m22: cos_y * cos_x,
            ..Self::IDENTITY
        }
    }

    /// Transform a point (linear part plus translation)
    #[inline]
    pub fn transform(&self, p: Vec3) -> Vec3 {
        self.transform_vector(p) + self.translation()
    }

    /// Transform a direction (linear part only)
    #[inline]
    pub fn transform_vector(&self, p: Vec3) -> Vec3 {
        Vec3::new(
            p.x * self.m00 + p.y * self.m01 + p.z * self.m02,
            p.x * self.m10 + p.y * self.m11 + p.z * self.m12,
            p.x * self.m20 + p.y * self.m21 + p.z * self.m22,
        )
    }

    #[inline]
    pub fn x_axis(&self) -> Vec3 {
        Vec3::new(self.m00, self.m10, self.m20)
    }

    #[inline]
    pub fn y_axis(&self) -> Vec3 {
        Vec3::new(self.m01, self.m11, self.m21)
    }

    #[inline]
    pub fn z_axis(&self) -> Vec3 {
        Vec3::new(self.m02, self.m12, self.m22)
    }

    #[inline]
    pub fn translation(&self) -> Vec3 {
        Vec3::new(self.tx, self.ty, self.tz)
    }

    /// Rotate by `theta` radians about `axis` (normalized if needed)
    pub fn rotate(mut self, theta: f32, axis: Vec3) -> Self {
        let v = axis.normalized();
        if v.is_zero() {
            return self;
        }
        let (sin, cos) = theta.sin_cos();
        let mcos = 1.0 - cos;

        let b = Self {
            m00: v.x * v.x * mcos + cos,
            m01: v.x * v.y * mcos - v.z * sin,
            m02: v.x * v.z * mcos + v.y * sin,
            m10: v.y * v.x * mcos + v.z * sin,
            m11: v.y * v.y * mcos + cos,
            m12: v.y * v.z * mcos - v.x * sin,
            m20: v.z * v.x * mcos - v.y * sin,
            m21: v.z * v.y * mcos + v.x * sin,
            m22: v.z * v.z * mcos + cos,
            ..Self::IDENTITY
        };

        let t = self.translation();
        self = self.linear_mul(&b);
        self.tx = t.x;
        self.ty = t.y;
        self.tz = t.z;
        self
    }

    /// Rotate about the local X axis
    pub fn rotate_x(mut self, pitch: f32) -> Self {
        if pitch != 0.0 {
            let (s, c) = pitch.sin_cos();
            let (a01, a11, a21) = (self.m01, self.m11, self.m21);
            self.m01 = a01 * c + self.m02 * s;
            self.m02 = self.m02 * c - a01 * s;
            self.m11 = a11 * c + self.m12 * s;
            self.m12 = self.m12 * c - a11 * s;
            self.m21 = a21 * c + self.m22 * s;
            self.m22 = self.m22 * c - a21 * s;
        }
        self
    }

    /// Rotate about the local Y axis
    pub fn rotate_y(mut self, yaw: f32) -> Self {
        if yaw != 0.0 {
            let (s, c) = yaw.sin_cos();
            let (a00, a10, a20) = (self.m00, self.m10, self.m20);
            self.m00 = a00 * c - self.m02 * s;
            self.m02 = self.m02 * c + a00 * s;
            self.m10 = a10 * c - self.m12 * s;
            self.m12 = self.m12 * c + a10 * s;
            self.m20 = a20 * c - self.m22 * s;
            self.m22 = self.m22 * c + a20 * s;
        }
        self
    }

    /// Rotate about the local Z axis
    pub fn rotate_z(mut self, roll: f32) -> Self {
        if roll != 0.0 {
            let (s, c) = roll.sin_cos();
            let (a00, a10, a20) = (self.m00, self.m10, self.m20);
            self.m00 = a00 * c + self.m01 * s;
            self.m01 = self.m01 * c - a00 * s;
            self.m10 = a10 * c + self.m11 * s;
            self.m11 = self.m11 * c - a10 * s;
            self.m20 = a20 * c + self.m21 * s;
            self.m21 = self.m21 * c - a20 * s;
        }
        self
    }

    /// Translate in local space
    pub fn translate(mut self, d: Vec3) -> Self {
        let t = self.transform_vector(d);
        self.tx += t.x;
        self.ty += t.y;
        self.tz += t.z;
        self
    }

    /// Translate in world space, ignoring the linear part
    pub fn translate_before(mut self, d: Vec3) -> Self {
        self.tx += d.x;
        self.ty += d.y;
        self.tz += d.z;
        self
    }

    /// Scale the local axes
    pub fn scale(mut self, sx: f32, sy: f32, sz: f32) -> Self {
        self.m00 *= sx;
        self.m01 *= sy;
        self.m02 *= sz;
        self.m10 *= sx;
        self.m11 *= sy;
        self.m12 *= sz;
        self.m20 *= sx;
        self.m21 *= sy;
        self.m22 *= sz;
        self
    }

    pub fn shear_xy(mut self, hx: f32, hy: f32) -> Self {
        self.m02 += self.m00 * hx + self.m01 * hy;
        self.m12 += self.m10 * hx + self.m11 * hy;
        self.m22 += self.m20 * hx + self.m21 * hy;
        self
    }

    pub fn shear_xz(mut self, hx: f32, hz: f32) -> Self {
        self.m01 += self.m00 * hx + self.m02 * hz;
        self.m11 += self.m10 * hx + self.m12 * hz;
        self.m21 += self.m20 * hx + self.m22 * hz;
        self
    }

    pub fn shear_yz(mut self, hy: f32, hz: f32) -> Self {
        self.m00 += self.m01 * hy + self.m02 * hz;
        self.m10 += self.m11 * hy + self.m12 * hz;
        self.m20 += self.m21 * hy + self.m22 * hz;
        self
    }

    /// Compose `self * b`: the result applies `b` first, then `self`
    pub fn mul(&self, b: &Self) -> Self {
        let t = self.transform(b.translation());
        let mut out = self.linear_mul(b);
        out.tx = t.x;
        out.ty = t.y;
        out.tz = t.z;
        out
    }

    fn linear_mul(&self, b: &Self) -> Self {
        let a = self;
        Self {
            m00: a.m00 * b.m00 + a.m01 * b.m10 + a.m02 * b.m20,
            m01: a.m00 * b.m01 + a.m01 * b.m11 + a.m02 * b.m21,
            m02: a.m00 * b.m02 + a.m01 * b.m12 + a.m02 * b.m22,
            m10: a.m10 * b.m00 + a.m11 * b.m10 + a.m12 * b.m20,
            m11: a.m10 * b.m01 + a.m11 * b.m11 + a.m12 * b.m21,
            m12: a.m10 * b.m02 + a.m11 * b.m12 + a.m12 * b.m22,
            m20: a.m20 * b.m00 + a.m21 * b.m10 + a.m22 * b.m20,
            m21: a.m20 * b.m01 + a.m21 * b.m11 + a.m22 * b.m21,
            m22: a.m20 * b.m02 + a.m21 * b.m12 + a.m22 * b.m22,
            tx: 0.0,
            ty: 0.0,
            tz: 0.0,
        }
    }
}

impl std::ops::Mul for Matrix3 {
    type Output = Self;
    fn mul(self, other: Self) -> Self {
        Matrix3::mul(&self, &other)
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
    fn test_identity_transform() {
        let p = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(Matrix3::IDENTITY.transform(p), p);
    }

    #[test]
    fn test_rotate_z_quarter_turn() {
        let m = Matrix3::IDENTITY.rotate_z(FRAC_PI_2);
        assert!(approx_eq(m.transform(Vec3::RIGHT), Vec3::UP));
    }

    #[test]
    fn test_axis_angle_matches_rotate_z() {
        let a = Matrix3::IDENTITY.rotate(0.6, Vec3::new(0.0, 0.0, 3.0));
        let b = Matrix3::IDENTITY.rotate_z(0.6);
        let p = Vec3::new(1.0, 2.0, 3.0);
        assert!(approx_eq(a.transform(p), b.transform(p)));
    }

    #[test]
    fn test_axis_angle_matches_rotate_x_and_y() {
        let p = Vec3::new(-2.0, 0.5, 1.5);
        let ax = Matrix3::IDENTITY.rotate(1.2, Vec3::RIGHT);
        assert!(approx_eq(ax.transform(p), Matrix3::IDENTITY.rotate_x(1.2).transform(p)));
        let ay = Matrix3::IDENTITY.rotate(-0.4, Vec3::UP);
        assert!(approx_eq(ay.transform(p), Matrix3::IDENTITY.rotate_y(-0.4).transform(p)));
    }

    #[test]
    fn test_local_vs_world_translation() {
        let m = Matrix3::IDENTITY.scale(2.0, 2.0, 2.0).translate(Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(m.translation(), Vec3::new(2.0, 0.0, 0.0));
        let w = Matrix3::IDENTITY.scale(2.0, 2.0, 2.0).translate_before(Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(w.translation(), Vec3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_composition_order() {
        let t = Matrix3::from_translation(Vec3::new(10.0, 0.0, 0.0));
        let s = Matrix3::from_scale(Vec3::new(2.0, 2.0, 2.0));
        let p = Vec3::new(1.0, 1.0, 0.0);
        // Scale first, then translate
        assert_eq!((t * s).transform(p), Vec3::new(12.0, 2.0, 0.0));
        assert_eq!((s * t).transform(p), Vec3::new(22.0, 2.0, 0.0));
    }

    #[test]
    fn test_builder_matches_composition() {
        let built = Matrix3::from_translation(Vec3::new(5.0, 5.0, 0.0))
            .scale(2.0, 3.0, 1.0)
            .rotate_z(0.3)
            .translate(Vec3::new(-1.0, -2.0, 0.0));
        let composed = Matrix3::from_translation(Vec3::new(5.0, 5.0, 0.0))
            * Matrix3::from_scale(Vec3::new(2.0, 3.0, 1.0))
            * Matrix3::IDENTITY.rotate_z(0.3)
            * Matrix3::from_translation(Vec3::new(-1.0, -2.0, 0.0));
        let p = Vec3::new(0.7, -1.3, 0.0);
        assert!(approx_eq(built.transform(p), composed.transform(p)));
    }

    #[test]
    fn test_shear_xy() {
        let m = Matrix3::IDENTITY.shear_xy(1.0, 0.0);
        assert_eq!(m.transform(Vec3::new(0.0, 0.0, 2.0)), Vec3::new(2.0, 0.0, 2.0));
    }

    #[test]
    fn test_euler_identity() {
        let m = Matrix3::from_euler(0.0, 0.0, 0.0);
        assert!(approx_eq(m.x_axis(), Vec3::RIGHT));
        assert!(approx_eq(m.y_axis(), Vec3::UP));
        assert!(approx_eq(m.z_axis(), Vec3::FAR));
    }
}
