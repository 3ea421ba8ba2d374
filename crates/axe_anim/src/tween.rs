//! Scalar tweens and springs
//!
//! These are the plain `f32` building blocks used by the camera: a tween
//! eases between two numbers over a fixed duration and a spring oscillates
//! around a rest value.

use serde::{Serialize, Deserialize};

use crate::Easing;

/// Eased transition between two scalars
#[derive(Clone, Debug, PartialEq)]
pub struct Tween {
    pub start: f32,
    pub end: f32,
    pub duration: f32,
    pub easing: Easing,
    /// Restart automatically once complete
    pub repeat: bool,
    value: f32,
    time: f32,
}

impl Tween {
    pub fn new(start: f32, end: f32, duration: f32) -> Self {
        Self {
            start,
            end,
            duration,
            easing: Easing::default(),
            repeat: false,
            value: start,
            time: 0.0,
        }
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn with_repeat(mut self, repeat: bool) -> Self {
        self.repeat = repeat;
        self
    }

    pub fn reset(&mut self) {
        self.value = self.start;
        self.time = 0.0;
    }

    pub fn update(&mut self, dt: f32) {
        self.time = (self.time + dt).min(self.duration);

        let progress = if self.duration > 0.0 {
            self.time / self.duration
        } else {
            1.0
        };
        self.value = (self.end - self.start) * self.easing.delta(progress) + self.start;

        if self.repeat && self.is_complete() {
            self.reset();
        }
    }

    pub fn is_complete(&self) -> bool {
        self.time >= self.duration
    }

    /// Jump to the end on the next update
    pub fn make_complete(&mut self) {
        self.time = self.duration;
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn time(&self) -> f32 {
        self.time
    }
}

/// One-dimensional damped spring
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScalarSpring {
    pub stiffness: f32,
    pub damping: f32,
    pub rest: f32,
    pub velocity: f32,
    pub position: f32,
}

impl Default for ScalarSpring {
    fn default() -> Self {
        Self::new(Self::DEFAULT_STIFFNESS, Self::DEFAULT_DAMPING)
    }
}

impl ScalarSpring {
    pub const DEFAULT_STIFFNESS: f32 = -10.0;
    pub const DEFAULT_DAMPING: f32 = 1.2;

    pub fn new(stiffness: f32, damping: f32) -> Self {
        Self {
            stiffness,
            damping,
            rest: 0.0,
            velocity: 0.0,
            position: 0.0,
        }
    }

    pub fn update(&mut self, dt: f32) {
        self.velocity += (self.stiffness * (self.position - self.rest) - self.damping * self.velocity) * dt;
        self.position += self.velocity * dt;
    }

    /// Offset of the position from rest
    pub fn offset(&self) -> f32 {
        self.position - self.rest
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{EasingMethod, EasingType};

    #[test]
    fn test_tween_linear() {
        let mut t = Tween::new(0.0, 10.0, 2.0);
        t.update(0.5);
        assert!((t.value() - 2.5).abs() < 0.0001);
        t.update(5.0);
        assert_eq!(t.value(), 10.0);
        assert!(t.is_complete());
    }

    #[test]
    fn test_tween_eased() {
        let mut t = Tween::new(0.0, 1.0, 1.0)
            .with_easing(Easing::new(EasingType::In, EasingMethod::Quadratic));
        t.update(0.5);
        assert!((t.value() - 0.25).abs() < 0.0001);
    }

    #[test]
    fn test_tween_repeat_resets() {
        let mut t = Tween::new(1.0, 2.0, 1.0).with_repeat(true);
        t.update(1.5);
        assert!(!t.is_complete());
        assert_eq!(t.value(), 1.0);
        assert_eq!(t.time(), 0.0);
    }

    #[test]
    fn test_zero_duration_completes_at_end() {
        let mut t = Tween::new(3.0, 7.0, 0.0);
        t.update(0.016);
        assert!(t.is_complete());
        assert_eq!(t.value(), 7.0);
    }

    #[test]
    fn test_make_complete() {
        let mut t = Tween::new(0.0, 4.0, 1.0);
        t.make_complete();
        assert!(t.is_complete());
        t.update(0.0);
        assert_eq!(t.value(), 4.0);
    }

    #[test]
    fn test_spring_defaults() {
        let s = ScalarSpring::default();
        assert_eq!(s.stiffness, -10.0);
        assert_eq!(s.damping, 1.2);
        assert_eq!(s.rest, 0.0);
    }

    #[test]
    fn test_spring_oscillates_back() {
        let mut s = ScalarSpring::default();
        s.velocity = 5.0;
        s.update(0.1);
        assert!(s.position > 0.0);
        for _ in 0..3000 {
            s.update(0.01);
        }
        assert!(s.offset().abs() < 0.01);
    }
}
