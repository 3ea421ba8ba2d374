//! 3D line segment

use serde::{Serialize, Deserialize};

use crate::Vec3;

/// A segment from `start` to `end`
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Line3 {
    pub start: Vec3,
    pub end: Vec3,
}

impl Line3 {
    #[inline]
    pub const fn new(start: Vec3, end: Vec3) -> Self {
        Self { start, end }
    }

    pub fn from_coords(x0: f32, y0: f32, z0: f32, x1: f32, y1: f32, z1: f32) -> Self {
        Self::new(Vec3::new(x0, y0, z0), Vec3::new(x1, y1, z1))
    }

    pub fn length(&self) -> f32 {
        self.start.distance(self.end)
    }

    /// Unit vector pointing from start to end
    pub fn direction(&self) -> Vec3 {
        self.diff().normalized()
    }

    /// `end - start`
    pub fn diff(&self) -> Vec3 {
        self.end - self.start
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_measurements() {
        let line = Line3::from_coords(1.0, 1.0, 1.0, 1.0, 4.0, 5.0);
        assert_eq!(line.length(), 5.0);
        assert_eq!(line.diff(), Vec3::new(0.0, 3.0, 4.0));
        let dir = line.direction();
        assert!((dir.y - 0.6).abs() < 0.0001);
        assert!((dir.z - 0.8).abs() < 0.0001);
    }
}
