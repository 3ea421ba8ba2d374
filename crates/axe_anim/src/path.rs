//! Paths map a progress value in `[0, 1]` onto an attribute value
//!
//! Constructors that need a minimum number of points return
//! [`AnimError`] instead of panicking later in `set`.

use axe_math::numbers::binomial;

use crate::{AnimError, Attribute};

/// A curve through attribute space
pub trait Path<T: Attribute> {
    /// Write the value at `delta` into `subject`
    fn set(&self, subject: &mut T, delta: f32);

    /// The value at `delta`
    fn get(&self, delta: f32) -> T {
        let mut out = T::zero();
        self.set(&mut out, delta);
        out
    }
}

fn require_points<T>(points: &[T], required: usize) -> Result<(), AnimError> {
    if points.is_empty() {
        return Err(AnimError::EmptyPath);
    }
    if points.len() < required {
        return Err(AnimError::TooFewPoints { required, found: points.len() });
    }
    Ok(())
}

/// Straight interpolation between two values
#[derive(Clone, Debug, PartialEq)]
pub struct TweenPath<T> {
    pub start: T,
    pub end: T,
}

impl<T: Attribute> TweenPath<T> {
    pub fn new(start: T, end: T) -> Self {
        Self { start, end }
    }
}

impl<T: Attribute> Path<T> for TweenPath<T> {
    fn set(&self, subject: &mut T, delta: f32) {
        *subject = T::interpolate(&self.start, &self.end, delta);
    }
}

/// Bezier curve of any order; the first and last points are the endpoints
#[derive(Clone, Debug)]
pub struct BezierPath<T> {
    points: Vec<T>,
    weights: Vec<f32>,
}

impl<T: Attribute> BezierPath<T> {
    pub fn new(points: Vec<T>) -> Result<Self, AnimError> {
        require_points(&points, 1)?;
        let n = points.len() as u64 - 1;
        let weights = (0..=n).map(|i| binomial(n, i) as f32).collect();
        Ok(Self { points, weights })
    }

    pub fn points(&self) -> &[T] {
        &self.points
    }
}

impl<T: Attribute> Path<T> for BezierPath<T> {
    fn set(&self, subject: &mut T, delta: f32) {
        let n = self.points.len() as i32 - 1;
        let inv = 1.0 - delta;
        let mut out = T::zero();
        for (i, (point, weight)) in self.points.iter().zip(&self.weights).enumerate() {
            let i = i as i32;
            let w = weight * inv.powi(n - i) * delta.powi(i);
            out.add_scaled(point, w);
        }
        *subject = out;
    }
}

/// Fixed four-point Bezier
#[derive(Clone, Debug, PartialEq)]
pub struct CubicPath<T> {
    pub p0: T,
    pub p1: T,
    pub p2: T,
    pub p3: T,
}

impl<T: Attribute> CubicPath<T> {
    pub fn new(p0: T, p1: T, p2: T, p3: T) -> Self {
        Self { p0, p1, p2, p3 }
    }
}

impl<T: Attribute> Path<T> for CubicPath<T> {
    fn set(&self, subject: &mut T, delta: f32) {
        let d1 = delta;
        let d2 = d1 * d1;
        let d3 = d2 * d1;
        let i1 = 1.0 - d1;
        let i2 = i1 * i1;
        let i3 = i2 * i1;

        let mut out = T::zero();
        out.add_scaled(&self.p0, i3);
        out.add_scaled(&self.p1, 3.0 * i2 * d1);
        out.add_scaled(&self.p2, 3.0 * i1 * d2);
        out.add_scaled(&self.p3, d3);
        *subject = out;
    }
}

/// Fixed three-point Bezier
#[derive(Clone, Debug, PartialEq)]
pub struct QuadraticPath<T> {
    pub p0: T,
    pub p1: T,
    pub p2: T,
}

impl<T: Attribute> QuadraticPath<T> {
    pub fn new(p0: T, p1: T, p2: T) -> Self {
        Self { p0, p1, p2 }
    }
}

impl<T: Attribute> Path<T> for QuadraticPath<T> {
    fn set(&self, subject: &mut T, delta: f32) {
        let d1 = delta;
        let d2 = d1 * d1;
        let i1 = 1.0 - d1;
        let i2 = i1 * i1;

        let mut out = T::zero();
        out.add_scaled(&self.p0, i2);
        out.add_scaled(&self.p1, 2.0 * i1 * d1);
        out.add_scaled(&self.p2, d2);
        *subject = out;
    }
}

/// A path pre-sampled into a lookup table
#[derive(Clone, Debug)]
pub struct CompiledPath<T> {
    samples: Vec<T>,
}

impl<T: Attribute> CompiledPath<T> {
    /// Sample `path` at `count` evenly spaced deltas from 0 to 1 inclusive
    pub fn new(path: &dyn Path<T>, count: usize) -> Result<Self, AnimError> {
        if count == 0 {
            return Err(AnimError::EmptyPath);
        }
        let last = (count - 1).max(1) as f32;
        let samples = (0..count).map(|i| path.get(i as f32 / last)).collect();
        Ok(Self { samples })
    }

    pub fn samples(&self) -> &[T] {
        &self.samples
    }
}

impl<T: Attribute> Path<T> for CompiledPath<T> {
    fn set(&self, subject: &mut T, delta: f32) {
        let n = self.samples.len();
        let index = ((delta * n as f32).floor() as i64).clamp(0, n as i64 - 1) as usize;
        *subject = self.samples[index].clone();
    }
}

/// Evenly spaced points joined by straight segments
#[derive(Clone, Debug)]
pub struct IntegralPath<T> {
    points: Vec<T>,
}

impl<T: Attribute> IntegralPath<T> {
    pub fn new(points: Vec<T>) -> Result<Self, AnimError> {
        require_points(&points, 2)?;
        Ok(Self { points })
    }
}

impl<T: Attribute> Path<T> for IntegralPath<T> {
    fn set(&self, subject: &mut T, delta: f32) {
        let last = self.points.len() - 1;
        let a = delta * last as f32;
        let index = (a.floor() as i64).clamp(0, last as i64 - 1) as usize;
        let q = a - index as f32;
        *subject = T::interpolate(&self.points[index], &self.points[index + 1], q);
    }
}

/// Steps between points with no interpolation
#[derive(Clone, Debug)]
pub struct JumpPath<T> {
    points: Vec<T>,
}

impl<T: Attribute> JumpPath<T> {
    pub fn new(points: Vec<T>) -> Result<Self, AnimError> {
        require_points(&points, 1)?;
        Ok(Self { points })
    }
}

impl<T: Attribute> Path<T> for JumpPath<T> {
    fn set(&self, subject: &mut T, delta: f32) {
        let n = self.points.len();
        let index = ((delta * n as f32).floor() as i64).clamp(0, n as i64 - 1) as usize;
        *subject = self.points[index].clone();
    }
}

/// Straight segments traversed at constant speed
#[derive(Clone, Debug)]
pub struct LinearPath<T> {
    points: Vec<T>,
    lengths: Vec<f32>,
    length: f32,
}

impl<T: Attribute> LinearPath<T> {
    pub fn new(points: Vec<T>) -> Result<Self, AnimError> {
        require_points(&points, 2)?;
        let lengths: Vec<f32> = points.windows(2).map(|w| w[0].distance(&w[1])).collect();
        let length = lengths.iter().sum();
        Ok(Self { points, lengths, length })
    }

    /// Total length over all segments
    pub fn path_length(&self) -> f32 {
        self.length
    }

    pub fn segment_length(&self, index: usize) -> f32 {
        self.lengths.get(index).copied().unwrap_or(0.0)
    }
}

impl<T: Attribute> Path<T> for LinearPath<T> {
    fn set(&self, subject: &mut T, delta: f32) {
        if delta <= 0.0 || self.length <= 0.0 {
            *subject = self.points[0].clone();
            return;
        }
        let last = self.lengths.len() - 1;
        let mut remaining = delta * self.length;
        for (i, &len) in self.lengths.iter().enumerate() {
            if remaining <= len || i == last {
                let q = if len > 0.0 { (remaining / len).min(1.0) } else { 1.0 };
                *subject = T::interpolate(&self.points[i], &self.points[i + 1], q);
                return;
            }
            remaining -= len;
        }
    }
}

/// Points reached at given times; times are normalized by the last one
#[derive(Clone, Debug)]
pub struct TimedPath<T> {
    points: Vec<T>,
    times: Vec<f32>,
}

impl<T: Attribute> TimedPath<T> {
    pub fn new(points: Vec<T>, times: Vec<f32>) -> Result<Self, AnimError> {
        require_points(&points, 1)?;
        if times.len() != points.len() {
            return Err(AnimError::LengthMismatch {
                index: 1,
                expected: points.len(),
                found: times.len(),
            });
        }
        let end = times[times.len() - 1];
        let times = if end > 0.0 {
            times.iter().map(|t| t / end).collect()
        } else {
            times
        };
        Ok(Self { points, times })
    }

    pub fn times(&self) -> &[f32] {
        &self.times
    }
}

impl<T: Attribute> Path<T> for TimedPath<T> {
    fn set(&self, subject: &mut T, delta: f32) {
        let last = self.points.len() - 1;
        if delta <= self.times[0] {
            *subject = self.points[0].clone();
            return;
        }
        if delta >= self.times[last] {
            *subject = self.points[last].clone();
            return;
        }
        let i = self
            .times
            .windows(2)
            .position(|w| delta >= w[0] && delta < w[1])
            .unwrap_or(last - 1);
        let span = self.times[i + 1] - self.times[i];
        let q = if span > 0.0 { (delta - self.times[i]) / span } else { 1.0 };
        *subject = T::interpolate(&self.points[i], &self.points[i + 1], q);
    }
}
