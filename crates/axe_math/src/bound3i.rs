//! Axis-aligned 3D integer bounds
//!
//! Same plane layout as [`Bound3`](crate::Bound3): Y points up so `t >= b`,
//! and near is the smaller z. Halving uses an arithmetic shift, so centers
//! round toward negative infinity.

use serde::{Serialize, Deserialize};

use crate::Vec3i;

/// Integer box stored as its six planes, typically in grid cells
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Bound3i {
    pub l: i32,
    pub r: i32,
    pub t: i32,
    pub b: i32,
    pub n: i32,
    pub f: i32,
}

impl Bound3i {
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32, near: i32, far: i32) -> Self {
        Self { l: left, r: right, t: top, b: bottom, n: near, f: far }
    }

    /// A zero-size bound at `p`
    pub fn at_point(p: Vec3i) -> Self {
        Self::new(p.x, p.y, p.x, p.y, p.z, p.z)
    }

    /// Smallest bound containing both corners
    pub fn from_corners(a: Vec3i, c: Vec3i) -> Self {
        let mut bound = Self::at_point(a);
        bound.include(c);
        bound
    }

    /// Bound with its minimum corner at `(x, y, z)`
    pub fn from_rect(x: i32, y: i32, z: i32, width: i32, height: i32, depth: i32) -> Self {
        Self::new(x, y + height, x + width, y, z, z + depth)
    }

    /// Bound around a center with the given radii
    pub fn from_ellipse(center: Vec3i, rw: i32, rh: i32, rd: i32) -> Self {
        let (rw, rh, rd) = (rw.abs(), rh.abs(), rd.abs());
        Self::new(
            center.x - rw,
            center.y + rh,
            center.x + rw,
            center.y - rh,
            center.z - rd,
            center.z + rd,
        )
    }

    /// Grow to include the point
    pub fn include(&mut self, p: Vec3i) {
        self.l = self.l.min(p.x);
        self.r = self.r.max(p.x);
        self.t = self.t.max(p.y);
        self.b = self.b.min(p.y);
        self.n = self.n.min(p.z);
        self.f = self.f.max(p.z);
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Collapse to a single point
    pub fn clear_to(&mut self, p: Vec3i) {
        *self = Self::at_point(p);
    }

    /// Move so the center sits on `p`, keeping the size
    pub fn center_on(&mut self, p: Vec3i) {
        let w = self.width() >> 1;
        let h = self.height() >> 1;
        let d = self.depth() >> 1;
        *self = Self::new(p.x - w, p.y + h, p.x + w, p.y - h, p.z - d, p.z + d);
    }

    pub fn translate(&mut self, delta: Vec3i) {
        self.l += delta.x;
        self.r += delta.x;
        self.t += delta.y;
        self.b += delta.y;
        self.n += delta.z;
        self.f += delta.z;
    }

    /// Scale the half extents about the center
    pub fn zoom(&mut self, sx: i32, sy: i32, sz: i32) {
        let hw = (self.width() >> 1) * sx.abs();
        let hh = (self.height() >> 1) * sy.abs();
        let hd = (self.depth() >> 1) * sz.abs();
        *self = Self::from_ellipse(self.center(), hw, hh, hd);
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.r - self.l
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.t - self.b
    }

    #[inline]
    pub fn depth(&self) -> i32 {
        self.f - self.n
    }

    /// Enclosed volume in cells
    #[inline]
    pub fn volume(&self) -> i32 {
        self.width() * self.height() * self.depth()
    }

    #[inline]
    pub fn cx(&self) -> i32 {
        (self.l + self.r) >> 1
    }

    #[inline]
    pub fn cy(&self) -> i32 {
        (self.t + self.b) >> 1
    }

    #[inline]
    pub fn cz(&self) -> i32 {
        (self.n + self.f) >> 1
    }

    pub fn center(&self) -> Vec3i {
        Vec3i::new(self.cx(), self.cy(), self.cz())
    }

    /// Overlap of two bounds; may be inverted when they do not touch
    pub fn intersection(&self, other: &Self) -> Self {
        Self::new(
            self.l.max(other.l),
            self.t.min(other.t),
            self.r.min(other.r),
            self.b.max(other.b),
            self.n.max(other.n),
            self.f.min(other.f),
        )
    }

    pub fn union(&self, other: &Self) -> Self {
        Self::new(
            self.l.min(other.l),
            self.t.max(other.t),
            self.r.max(other.r),
            self.b.min(other.b),
            self.n.min(other.n),
            self.f.max(other.f),
        )
    }

    /// Overlap with positive volume; shared faces do not count
    pub fn intersects(&self, x: &Self) -> bool {
        !(x.l >= self.r
            || x.r <= self.l
            || x.t <= self.b
            || x.b >= self.t
            || x.n >= self.f
            || x.f <= self.n)
    }

    /// Overlap including shared faces
    pub fn touches(&self, x: &Self) -> bool {
        !(x.l > self.r || x.r < self.l || x.t < self.b || x.b > self.t || x.n > self.f || x.f < self.n)
    }

    /// `x` lies within this bound, faces may coincide
    pub fn contains_bound(&self, x: &Self) -> bool {
        !(x.l < self.l || x.r > self.r || x.t > self.t || x.b < self.b || x.n < self.n || x.f > self.f)
    }

    /// `x` lies strictly within this bound
    pub fn inside(&self, x: &Self) -> bool {
        !(x.l <= self.l
            || x.r >= self.r
            || x.t >= self.t
            || x.b <= self.b
            || x.n <= self.n
            || x.f >= self.f)
    }

    pub fn contains_point(&self, p: Vec3i) -> bool {
        !(p.x < self.l || p.x > self.r || p.y > self.t || p.y < self.b || p.z > self.f || p.z < self.n)
    }

    pub fn is_empty(&self) -> bool {
        self.width() == 0 && self.height() == 0 && self.depth() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_corners_orders_planes() {
        let b = Bound3i::from_corners(Vec3i::new(4, -2, 7), Vec3i::new(-1, 3, 2));
        assert_eq!(b, Bound3i::new(-1, 3, 4, -2, 2, 7));
        assert_eq!(b.width(), 5);
        assert_eq!(b.height(), 5);
        assert_eq!(b.depth(), 5);
        assert_eq!(b.volume(), 125);
    }

    #[test]
    fn test_center_rounds_down() {
        let b = Bound3i::from_rect(-3, -3, -3, 2, 2, 2);
        assert_eq!(b.center(), Vec3i::new(-2, -2, -2));
        let odd = Bound3i::from_rect(-2, 0, 0, 1, 1, 1);
        assert_eq!(odd.cx(), -2);
    }

    #[test]
    fn test_intersects_is_strict() {
        let a = Bound3i::from_rect(0, 0, 0, 2, 2, 2);
        let mut b = a;
        b.translate(Vec3i::new(2, 0, 0));
        assert!(!a.intersects(&b));
        assert!(a.touches(&b));

        b.translate(Vec3i::new(-1, 0, 0));
        assert!(a.intersects(&b));
        assert_eq!(a.intersection(&b).width(), 1);
        assert_eq!(a.union(&b).width(), 3);
    }

    #[test]
    fn test_containment() {
        let outer = Bound3i::from_rect(-1, -1, -1, 4, 4, 4);
        let inner = Bound3i::from_rect(0, 0, 0, 2, 2, 2);
        assert!(outer.contains_bound(&inner));
        assert!(outer.inside(&inner));
        assert!(!inner.inside(&inner));
        assert!(inner.contains_point(Vec3i::new(2, 2, 0)));
        assert!(!inner.contains_point(Vec3i::new(2, 3, 0)));
    }

    #[test]
    fn test_center_on_and_zoom() {
        let mut b = Bound3i::from_rect(0, 0, 0, 4, 4, 4);
        b.center_on(Vec3i::ZERO);
        assert_eq!(b, Bound3i::new(-2, 2, 2, -2, -2, 2));
        b.zoom(3, -3, 1);
        assert_eq!(b.width(), 12);
        assert_eq!(b.height(), 12);
        assert_eq!(b.depth(), 4);
        assert_eq!(b.center(), Vec3i::ZERO);
    }
}
