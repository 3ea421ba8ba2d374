//! Axis-aligned 3D bounds
//!
//! Y points up, so `t >= b` for a well-formed bound. Near is the smaller z.

use serde::{Serialize, Deserialize};

use crate::{Line3, Vec3};

/// Axis-aligned box stored as its six planes
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Bound3 {
    pub l: f32,
    pub r: f32,
    pub t: f32,
    pub b: f32,
    pub n: f32,
    pub f: f32,
}

impl Bound3 {
    pub const fn new(left: f32, top: f32, right: f32, bottom: f32, near: f32, far: f32) -> Self {
        Self { l: left, r: right, t: top, b: bottom, n: near, f: far }
    }

    /// A zero-size bound at `p`
    pub fn at_point(p: Vec3) -> Self {
        let mut b = Self::default();
        b.clear_to(p);
        b
    }

    /// Bound with its minimum corner at `(x, y, z)`
    pub fn from_rect(x: f32, y: f32, z: f32, width: f32, height: f32, depth: f32) -> Self {
        Self::new(x, y + height, x + width, y, z, z + depth)
    }

    /// Smallest bound containing both ends of the segment
    pub fn from_line(line: &Line3) -> Self {
        let (s, e) = (line.start, line.end);
        Self::new(
            s.x.min(e.x),
            s.y.max(e.y),
            s.x.max(e.x),
            s.y.min(e.y),
            s.z.min(e.z),
            s.z.max(e.z),
        )
    }

    /// Bound around a center with the given radii
    pub fn from_ellipse(center: Vec3, rw: f32, rh: f32, rd: f32) -> Self {
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
    pub fn include(&mut self, p: Vec3) {
        if p.x < self.l {
            self.l = p.x;
        }
        if p.x > self.r {
            self.r = p.x;
        }
        if p.y > self.t {
            self.t = p.y;
        }
        if p.y < self.b {
            self.b = p.y;
        }
        if p.z < self.n {
            self.n = p.z;
        }
        if p.z > self.f {
            self.f = p.z;
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Collapse to a single point
    pub fn clear_to(&mut self, p: Vec3) {
        self.l = p.x;
        self.r = p.x;
        self.t = p.y;
        self.b = p.y;
        self.n = p.z;
        self.f = p.z;
    }

    /// Move so the center sits on `p`, keeping the size
    pub fn center_on(&mut self, p: Vec3) {
        let w = self.width() * 0.5;
        let h = self.height() * 0.5;
        let d = self.depth() * 0.5;
        *self = Self::new(p.x - w, p.y + h, p.x + w, p.y - h, p.z - d, p.z + d);
    }

    pub fn translate(&mut self, delta: Vec3) {
        self.l += delta.x;
        self.r += delta.x;
        self.t += delta.y;
        self.b += delta.y;
        self.n += delta.z;
        self.f += delta.z;
    }

    /// Push every face outward by the given amounts
    pub fn expand(&mut self, gx: f32, gy: f32, gz: f32) {
        self.l -= gx;
        self.r += gx;
        self.t += gy;
        self.b -= gy;
        self.n -= gz;
        self.f += gz;
    }

    /// Scale about the center
    pub fn zoom(&mut self, sx: f32, sy: f32, sz: f32) {
        let hw = self.width() * 0.5 * sx.abs();
        let hh = self.height() * 0.5 * sy.abs();
        let hd = self.depth() * 0.5 * sz.abs();
        *self = Self::from_ellipse(self.center(), hw, hh, hd);
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.r - self.l
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.t - self.b
    }

    #[inline]
    pub fn depth(&self) -> f32 {
        self.f - self.n
    }

    /// Enclosed volume
    #[inline]
    pub fn volume(&self) -> f32 {
        self.width() * self.height() * self.depth()
    }

    #[inline]
    pub fn cx(&self) -> f32 {
        (self.l + self.r) * 0.5
    }

    #[inline]
    pub fn cy(&self) -> f32 {
        (self.t + self.b) * 0.5
    }

    #[inline]
    pub fn cz(&self) -> f32 {
        (self.n + self.f) * 0.5
    }

    pub fn center(&self) -> Vec3 {
        Vec3::new(self.cx(), self.cy(), self.cz())
    }

    pub fn corners(&self) -> [Vec3; 8] {
        let Self { l, r, t, b, n, f } = *self;
        [
            Vec3::new(l, t, n),
            Vec3::new(l, b, n),
            Vec3::new(l, t, f),
            Vec3::new(l, b, f),
            Vec3::new(r, t, n),
            Vec3::new(r, b, n),
            Vec3::new(r, t, f),
            Vec3::new(r, b, f),
        ]
    }

    /// The twelve edges: four near-to-far, four left-to-right, four bottom-to-top
    pub fn edges(&self) -> [Line3; 12] {
        let Self { l, r, t, b, n, f } = *self;
        [
            Line3::from_coords(l, t, n, l, t, f),
            Line3::from_coords(l, b, n, l, b, f),
            Line3::from_coords(r, t, n, r, t, f),
            Line3::from_coords(r, b, n, r, b, f),
            Line3::from_coords(l, t, n, r, t, n),
            Line3::from_coords(l, b, n, r, b, n),
            Line3::from_coords(l, t, f, r, t, f),
            Line3::from_coords(l, b, f, r, b, f),
            Line3::from_coords(l, b, n, l, t, n),
            Line3::from_coords(r, b, n, r, t, n),
            Line3::from_coords(l, b, f, l, t, f),
            Line3::from_coords(r, b, f, r, t, f),
        ]
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

    pub fn contains_point(&self, p: Vec3) -> bool {
        !(p.x < self.l || p.x > self.r || p.y > self.t || p.y < self.b || p.z > self.f || p.z < self.n)
    }

    pub fn is_empty(&self) -> bool {
        self.width() == 0.0 && self.height() == 0.0 && self.depth() == 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit() -> Bound3 {
        Bound3::from_rect(0.0, 0.0, 0.0, 1.0, 1.0, 1.0)
    }

    #[test]
    fn test_from_rect_is_y_up() {
        let b = Bound3::from_rect(1.0, 2.0, 3.0, 4.0, 5.0, 6.0);
        assert_eq!(b.b, 2.0);
        assert_eq!(b.t, 7.0);
        assert_eq!(b.height(), 5.0);
        assert_eq!(b.volume(), 120.0);
    }

    #[test]
    fn test_include_grows() {
        let mut b = Bound3::at_point(Vec3::ZERO);
        assert!(b.is_empty());
        b.include(Vec3::new(2.0, -1.0, 3.0));
        b.include(Vec3::new(-1.0, 4.0, 0.0));
        assert_eq!(b, Bound3::new(-1.0, 4.0, 2.0, -1.0, 0.0, 3.0));
    }

    #[test]
    fn test_intersects_is_strict() {
        let a = unit();
        let mut b = unit();
        b.translate(Vec3::new(1.0, 0.0, 0.0));
        assert!(!a.intersects(&b));
        assert!(a.touches(&b));

        b.translate(Vec3::new(-0.5, 0.0, 0.0));
        assert!(a.intersects(&b));
        let i = a.intersection(&b);
        assert_eq!(i.width(), 0.5);
        assert_eq!(a.union(&b).width(), 1.5);
    }

    #[test]
    fn test_containment() {
        let outer = Bound3::from_rect(-1.0, -1.0, -1.0, 3.0, 3.0, 3.0);
        let inner = unit();
        assert!(outer.contains_bound(&inner));
        assert!(outer.inside(&inner));
        assert!(inner.contains_bound(&inner));
        assert!(!inner.inside(&inner));
        assert!(inner.contains_point(Vec3::new(0.5, 1.0, 0.0)));
        assert!(!inner.contains_point(Vec3::new(0.5, 1.5, 0.0)));
    }

    #[test]
    fn test_center_and_zoom() {
        let mut b = unit();
        b.center_on(Vec3::ZERO);
        assert_eq!(b.center(), Vec3::ZERO);
        b.zoom(2.0, 2.0, 2.0);
        assert_eq!(b.width(), 2.0);
        assert_eq!(b.t, 1.0);
        assert_eq!(b.b, -1.0);
    }

    #[test]
    fn test_corners_and_edges() {
        let b = unit();
        let corners = b.corners();
        assert!(corners.iter().all(|c| b.contains_point(*c)));
        let edges = b.edges();
        assert!(edges.iter().all(|e| (e.length() - 1.0).abs() < 0.0001));
    }

    #[test]
    fn test_from_line_and_ellipse() {
        let line = Line3::from_coords(3.0, -2.0, 1.0, -1.0, 2.0, 5.0);
        let b = Bound3::from_line(&line);
        assert_eq!(b, Bound3::new(-1.0, 2.0, 3.0, -2.0, 1.0, 5.0));

        let e = Bound3::from_ellipse(Vec3::new(1.0, 1.0, 1.0), -1.0, 2.0, 3.0);
        assert_eq!(e.width(), 2.0);
        assert_eq!(e.height(), 4.0);
        assert_eq!(e.depth(), 6.0);
    }
}
