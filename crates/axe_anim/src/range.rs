//! Random ranges over attributes

use rand::Rng;
use serde::{Serialize, Deserialize};

use crate::Attribute;

/// A range between two attribute values, sampled by uniform interpolation
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Range<T> {
    pub min: T,
    pub max: T,
}

impl<T: Attribute> Range<T> {
    pub fn new(min: T, max: T) -> Self {
        Self { min, max }
    }

    /// A range that always yields `value`
    pub fn fixed(value: T) -> Self {
        Self { min: value.clone(), max: value }
    }

    /// Sample a value with a uniform delta in `[0, 1)`
    pub fn random<R: Rng + ?Sized>(&self, rng: &mut R) -> T {
        T::interpolate(&self.min, &self.max, rng.gen::<f32>())
    }

    /// Sample directly into an existing value
    pub fn random_into<R: Rng + ?Sized>(&self, rng: &mut R, out: &mut T) {
        *out = self.random(rng);
    }
}

impl<T: Attribute + Default> Default for Range<T> {
    fn default() -> Self {
        Self::fixed(T::default())
    }
}

impl<T: Attribute> Attribute for Range<T> {
    fn interpolate(start: &Self, end: &Self, delta: f32) -> Self {
        Self {
            min: T::interpolate(&start.min, &end.min, delta),
            max: T::interpolate(&start.max, &end.max, delta),
        }
    }

    fn add_scaled(&mut self, value: &Self, delta: f32) {
        self.min.add_scaled(&value.min, delta);
        self.max.add_scaled(&value.max, delta);
    }

    fn mul_assign_by(&mut self, value: &Self) {
        self.min.mul_assign_by(&value.min);
        self.max.mul_assign_by(&value.max);
    }

    fn scale(&mut self, d: f32) {
        self.min.scale(d);
        self.max.scale(d);
    }

    fn distance(&self, to: &Self) -> f32 {
        (self.min.distance(&to.min) + self.max.distance(&to.max)) * 0.5
    }

    fn zero() -> Self {
        Self { min: T::zero(), max: T::zero() }
    }
}

/// An integer range sampled inclusive of both ends
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntRange {
    pub min: i32,
    pub max: i32,
}

impl IntRange {
    pub const fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }

    pub const fn fixed(value: i32) -> Self {
        Self { min: value, max: value }
    }

    pub fn random<R: Rng + ?Sized>(&self, rng: &mut R) -> i32 {
        axe_math::numbers::random_int_range(rng, self.min, self.max)
    }
}
