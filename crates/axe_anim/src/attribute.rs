//! Animatable values
//!
//! An [`Attribute`] is any plain value that paths, springs and movers can
//! interpolate and integrate. Implementations exist for the math types of
//! `axe_math`; integer-backed types truncate and byte colors clamp.

use axe_math::{channel, Bound3, Bound3i, Color, Matrix3, Rect, Tile, Vec2, Vec2i, Vec3, Vec3i};

/// A value that can be interpolated and integrated over time
pub trait Attribute: Clone + PartialEq {
    /// Value at `delta` along the way from `start` to `end`
    fn interpolate(start: &Self, end: &Self, delta: f32) -> Self;

    /// `self += value * delta`
    fn add_scaled(&mut self, value: &Self, delta: f32);

    /// Component-wise multiply
    fn mul_assign_by(&mut self, value: &Self);

    /// Multiply every component by `d`
    fn scale(&mut self, d: f32);

    /// Distance used to weight path segments
    fn distance(&self, to: &Self) -> f32;

    /// Additive identity
    fn zero() -> Self;
}

impl Attribute for f32 {
    fn interpolate(start: &Self, end: &Self, delta: f32) -> Self {
        (end - start) * delta + start
    }

    fn add_scaled(&mut self, value: &Self, delta: f32) {
        *self += value * delta;
    }

    fn mul_assign_by(&mut self, value: &Self) {
        *self *= value;
    }

    fn scale(&mut self, d: f32) {
        *self *= d;
    }

    fn distance(&self, to: &Self) -> f32 {
        (to - self).abs()
    }

    fn zero() -> Self {
        0.0
    }
}

impl Attribute for Vec2 {
    fn interpolate(start: &Self, end: &Self, delta: f32) -> Self {
        start.lerp(*end, delta)
    }

    fn add_scaled(&mut self, value: &Self, delta: f32) {
        *self += *value * delta;
    }

    fn mul_assign_by(&mut self, value: &Self) {
        *self = self.component_mul(*value);
    }

    fn scale(&mut self, d: f32) {
        *self *= d;
    }

    fn distance(&self, to: &Self) -> f32 {
        Vec2::distance(*self, *to)
    }

    fn zero() -> Self {
        Vec2::ZERO
    }
}

impl Attribute for Vec3 {
    fn interpolate(start: &Self, end: &Self, delta: f32) -> Self {
        start.lerp(*end, delta)
    }

    fn add_scaled(&mut self, value: &Self, delta: f32) {
        *self += *value * delta;
    }

    fn mul_assign_by(&mut self, value: &Self) {
        *self = self.component_mul(*value);
    }

    fn scale(&mut self, d: f32) {
        *self *= d;
    }

    fn distance(&self, to: &Self) -> f32 {
        Vec3::distance(*self, *to)
    }

    fn zero() -> Self {
        Vec3::ZERO
    }
}

impl Attribute for Vec2i {
    fn interpolate(start: &Self, end: &Self, delta: f32) -> Self {
        start.lerp(*end, delta)
    }

    fn add_scaled(&mut self, value: &Self, delta: f32) {
        *self += value.scaled(delta);
    }

    fn mul_assign_by(&mut self, value: &Self) {
        self.x *= value.x;
        self.y *= value.y;
    }

    fn scale(&mut self, d: f32) {
        *self = self.scaled(d);
    }

    fn distance(&self, to: &Self) -> f32 {
        Vec2i::distance(*self, *to)
    }

    fn zero() -> Self {
        Vec2i::ZERO
    }
}

#[inline]
fn lerp_i32(start: i32, end: i32, delta: f32) -> i32 {
    ((end - start) as f32 * delta) as i32 + start
}

#[inline]
fn scale_i32(value: i32, d: f32) -> i32 {
    (value as f32 * d) as i32
}

/// Integer scalars truncate toward zero after every operation
impl Attribute for i32 {
    fn interpolate(start: &Self, end: &Self, delta: f32) -> Self {
        lerp_i32(*start, *end, delta)
    }

    fn add_scaled(&mut self, value: &Self, delta: f32) {
        *self += scale_i32(*value, delta);
    }

    fn mul_assign_by(&mut self, value: &Self) {
        *self *= value;
    }

    fn scale(&mut self, d: f32) {
        *self = scale_i32(*self, d);
    }

    fn distance(&self, to: &Self) -> f32 {
        (to - self).abs() as f32
    }

    fn zero() -> Self {
        0
    }
}

impl Attribute for Vec3i {
    fn interpolate(start: &Self, end: &Self, delta: f32) -> Self {
        start.lerp(*end, delta)
    }

    fn add_scaled(&mut self, value: &Self, delta: f32) {
        *self += value.scaled(delta);
    }

    fn mul_assign_by(&mut self, value: &Self) {
        self.x *= value.x;
        self.y *= value.y;
        self.z *= value.z;
    }

    fn scale(&mut self, d: f32) {
        *self = self.scaled(d);
    }

    fn distance(&self, to: &Self) -> f32 {
        Vec3i::distance(*self, *to)
    }

    fn zero() -> Self {
        Vec3i::ZERO
    }
}

impl Attribute for Rect {
    fn interpolate(start: &Self, end: &Self, delta: f32) -> Self {
        Rect::new(
            lerp_i32(start.x, end.x, delta),
            lerp_i32(start.y, end.y, delta),
            lerp_i32(start.width, end.width, delta),
            lerp_i32(start.height, end.height, delta),
        )
    }

    fn add_scaled(&mut self, value: &Self, delta: f32) {
        self.x += (value.x as f32 * delta) as i32;
        self.y += (value.y as f32 * delta) as i32;
        self.width += (value.width as f32 * delta) as i32;
        self.height += (value.height as f32 * delta) as i32;
    }

    fn mul_assign_by(&mut self, value: &Self) {
        self.x *= value.x;
        self.y *= value.y;
        self.width *= value.width;
        self.height *= value.height;
    }

    fn scale(&mut self, d: f32) {
        self.x = (self.x as f32 * d) as i32;
        self.y = (self.y as f32 * d) as i32;
        self.width = (self.width as f32 * d) as i32;
        self.height = (self.height as f32 * d) as i32;
    }

    fn distance(&self, to: &Self) -> f32 {
        let dx = (to.x - self.x) as f32;
        let dy = (to.y - self.y) as f32;
        let dw = (to.width - self.width) as f32;
        let dh = (to.height - self.height) as f32;
        (dx * dx + dy * dy + dw * dw + dh * dh).sqrt()
    }

    fn zero() -> Self {
        Rect::default()
    }
}

impl Attribute for Color {
    fn interpolate(start: &Self, end: &Self, delta: f32) -> Self {
        let lerp = |s: u8, e: u8| channel((e as f32 - s as f32) * delta + s as f32);
        Color::rgba(
            lerp(start.r, end.r),
            lerp(start.g, end.g),
            lerp(start.b, end.b),
            lerp(start.a, end.a),
        )
    }

    fn add_scaled(&mut self, value: &Self, delta: f32) {
        let add = |c: u8, v: u8| channel(c as f32 + v as f32 * delta);
        *self = Color::rgba(
            add(self.r, value.r),
            add(self.g, value.g),
            add(self.b, value.b),
            add(self.a, value.a),
        );
    }

    fn mul_assign_by(&mut self, value: &Self) {
        let mul = |c: u8, v: u8| channel(c as f32 * v as f32 / 255.0);
        *self = Color::rgba(
            mul(self.r, value.r),
            mul(self.g, value.g),
            mul(self.b, value.b),
            mul(self.a, value.a),
        );
    }

    fn scale(&mut self, d: f32) {
        let s = |c: u8| channel(c as f32 * d);
        *self = Color::rgba(s(self.r), s(self.g), s(self.b), s(self.a));
    }

    fn distance(&self, to: &Self) -> f32 {
        let d = |a: u8, b: u8| {
            let x = b as f32 - a as f32;
            x * x
        };
        (d(self.r, to.r) + d(self.g, to.g) + d(self.b, to.b) + d(self.a, to.a)).sqrt()
    }

    fn zero() -> Self {
        Color::TRANSPARENT
    }
}

impl Attribute for Tile {
    fn interpolate(start: &Self, end: &Self, delta: f32) -> Self {
        Tile::new(Rect::interpolate(&start.source, &end.source, delta))
    }

    fn add_scaled(&mut self, value: &Self, delta: f32) {
        self.source.add_scaled(&value.source, delta);
    }

    fn mul_assign_by(&mut self, value: &Self) {
        self.source.mul_assign_by(&value.source);
    }

    fn scale(&mut self, d: f32) {
        Attribute::scale(&mut self.source, d);
    }

    fn distance(&self, to: &Self) -> f32 {
        Attribute::distance(&self.source, &to.source)
    }

    fn zero() -> Self {
        Tile::default()
    }
}

impl Attribute for Bound3 {
    fn interpolate(start: &Self, end: &Self, delta: f32) -> Self {
        let lerp = |s: f32, e: f32| (e - s) * delta + s;
        Bound3 {
            l: lerp(start.l, end.l),
            r: lerp(start.r, end.r),
            t: lerp(start.t, end.t),
            b: lerp(start.b, end.b),
            n: lerp(start.n, end.n),
            f: lerp(start.f, end.f),
        }
    }

    fn add_scaled(&mut self, value: &Self, delta: f32) {
        self.l += value.l * delta;
        self.r += value.r * delta;
        self.t += value.t * delta;
        self.b += value.b * delta;
        self.n += value.n * delta;
        self.f += value.f * delta;
    }

    fn mul_assign_by(&mut self, value: &Self) {
        self.l *= value.l;
        self.r *= value.r;
        self.t *= value.t;
        self.b *= value.b;
        self.n *= value.n;
        self.f *= value.f;
    }

    fn scale(&mut self, d: f32) {
        self.l *= d;
        self.r *= d;
        self.t *= d;
        self.b *= d;
        self.n *= d;
        self.f *= d;
    }

    /// Difference in enclosed volume
    fn distance(&self, to: &Self) -> f32 {
        (to.volume() - self.volume()).abs()
    }

    fn zero() -> Self {
        Bound3::default()
    }
}

impl Attribute for Bound3i {
    fn interpolate(start: &Self, end: &Self, delta: f32) -> Self {
        Bound3i {
            l: lerp_i32(start.l, end.l, delta),
            r: lerp_i32(start.r, end.r, delta),
            t: lerp_i32(start.t, end.t, delta),
            b: lerp_i32(start.b, end.b, delta),
            n: lerp_i32(start.n, end.n, delta),
            f: lerp_i32(start.f, end.f, delta),
        }
    }

    fn add_scaled(&mut self, value: &Self, delta: f32) {
        self.l += scale_i32(value.l, delta);
        self.r += scale_i32(value.r, delta);
        self.t += scale_i32(value.t, delta);
        self.b += scale_i32(value.b, delta);
        self.n += scale_i32(value.n, delta);
        self.f += scale_i32(value.f, delta);
    }

    fn mul_assign_by(&mut self, value: &Self) {
        self.l *= value.l;
        self.r *= value.r;
        self.t *= value.t;
        self.b *= value.b;
        self.n *= value.n;
        self.f *= value.f;
    }

    fn scale(&mut self, d: f32) {
        self.l = scale_i32(self.l, d);
        self.r = scale_i32(self.r, d);
        self.t = scale_i32(self.t, d);
        self.b = scale_i32(self.b, d);
        self.n = scale_i32(self.n, d);
        self.f = scale_i32(self.f, d);
    }

    /// Difference in enclosed volume
    fn distance(&self, to: &Self) -> f32 {
        (to.volume() - self.volume()).abs() as f32
    }

    fn zero() -> Self {
        Bound3i::default()
    }
}

fn matrix_components(m: &Matrix3) -> [f32; 12] {
    [
        m.m00, m.m01, m.m02, m.m10, m.m11, m.m12, m.m20, m.m21, m.m22, m.tx, m.ty, m.tz,
    ]
}

fn matrix_from_components(c: [f32; 12]) -> Matrix3 {
    Matrix3 {
        m00: c[0],
        m01: c[1],
        m02: c[2],
        m10: c[3],
        m11: c[4],
        m12: c[5],
        m20: c[6],
        m21: c[7],
        m22: c[8],
        tx: c[9],
        ty: c[10],
        tz: c[11],
    }
}

/// Matrices animate component-wise; no orthonormalization is applied
impl Attribute for Matrix3 {
    fn interpolate(start: &Self, end: &Self, delta: f32) -> Self {
        let s = matrix_components(start);
        let e = matrix_components(end);
        matrix_from_components(std::array::from_fn(|i| (e[i] - s[i]) * delta + s[i]))
    }

    fn add_scaled(&mut self, value: &Self, delta: f32) {
        let s = matrix_components(self);
        let v = matrix_components(value);
        *self = matrix_from_components(std::array::from_fn(|i| s[i] + v[i] * delta));
    }

    fn mul_assign_by(&mut self, value: &Self) {
        let s = matrix_components(self);
        let v = matrix_components(value);
        *self = matrix_from_components(std::array::from_fn(|i| s[i] * v[i]));
    }

    fn scale(&mut self, d: f32) {
        let s = matrix_components(self);
        *self = matrix_from_components(std::array::from_fn(|i| s[i] * d));
    }

    fn distance(&self, to: &Self) -> f32 {
        let s = matrix_components(self);
        let t = matrix_components(to);
        s.iter().zip(t.iter()).map(|(a, b)| (b - a) * (b - a)).sum::<f32>().sqrt()
    }

    fn zero() -> Self {
        matrix_from_components([0.0; 12])
    }
}
