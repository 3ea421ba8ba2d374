//! Integer rectangles, byte colors and sprite-sheet tiles

use bytemuck::{Pod, Zeroable};
use serde::{Serialize, Deserialize};

use crate::Vec2;

/// Integer rectangle with its origin at the top-left corner
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    #[inline]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    #[inline]
    pub fn left(&self) -> i32 {
        self.x
    }

    #[inline]
    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    #[inline]
    pub fn top(&self) -> i32 {
        self.y
    }

    #[inline]
    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    /// Whether the point lies inside; the right and bottom edges are exclusive
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.left() as f32
            && p.x < self.right() as f32
            && p.y >= self.top() as f32
            && p.y < self.bottom() as f32
    }

    pub fn intersects(&self, other: &Rect) -> bool {
        other.left() < self.right()
            && self.left() < other.right()
            && other.top() < self.bottom()
            && self.top() < other.bottom()
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(
            self.x as f32 + self.width as f32 * 0.5,
            self.y as f32 + self.height as f32 * 0.5,
        )
    }
}

/// RGBA color with byte channels
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Pod, Zeroable, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

impl Color {
    pub const WHITE: Self = Self::rgba(255, 255, 255, 255);
    pub const BLACK: Self = Self::rgba(0, 0, 0, 255);
    pub const RED: Self = Self::rgba(255, 0, 0, 255);
    pub const GREEN: Self = Self::rgba(0, 255, 0, 255);
    pub const BLUE: Self = Self::rgba(0, 0, 255, 255);
    pub const YELLOW: Self = Self::rgba(255, 255, 0, 255);
    pub const ORANGE: Self = Self::rgba(255, 165, 0, 255);
    pub const TRANSPARENT: Self = Self::rgba(0, 0, 0, 0);

    #[inline]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Build from channels in `[0, 1]`, clamping out-of-range values
    pub fn from_floats(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self::rgba(channel(r * 255.0), channel(g * 255.0), channel(b * 255.0), channel(a * 255.0))
    }

    #[inline]
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Channels as floats in `[0, 1]`
    pub fn to_floats(self) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            self.a as f32 / 255.0,
        ]
    }
}

/// Round and clamp a float into a byte channel
#[inline]
pub fn channel(v: f32) -> u8 {
    v.round().clamp(0.0, 255.0) as u8
}

/// A source rectangle on a sprite sheet
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tile {
    pub source: Rect,
}

impl Tile {
    pub const fn new(source: Rect) -> Self {
        Self { source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_edges() {
        let r = Rect::new(2, 3, 10, 5);
        assert_eq!(r.right(), 12);
        assert_eq!(r.bottom(), 8);
        assert!(r.contains(Vec2::new(2.0, 3.0)));
        assert!(!r.contains(Vec2::new(12.0, 4.0)));
        assert_eq!(r.center(), Vec2::new(7.0, 5.5));
    }

    #[test]
    fn test_rect_intersects() {
        let a = Rect::new(0, 0, 10, 10);
        assert!(a.intersects(&Rect::new(5, 5, 10, 10)));
        assert!(!a.intersects(&Rect::new(10, 0, 5, 5)));
    }

    #[test]
    fn test_color_from_floats_clamps() {
        let c = Color::from_floats(1.5, 0.5, -1.0, 1.0);
        assert_eq!(c, Color::rgba(255, 128, 0, 255));
        assert_eq!(Color::WHITE.with_alpha(0).a, 0);
    }
}
