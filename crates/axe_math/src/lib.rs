//! Math library for the Axe toolkit
//!
//! ## Vector Types
//!
//! - [`Vec2`] / [`Vec3`] - float vectors
//! - [`Vec2i`] / [`Vec3i`] - integer vectors
//!
//! ## Shapes and Transforms
//!
//! - [`Rect`] - integer rectangle used for clip and camera bounds
//! - [`Bound3`] / [`Bound3i`] - axis-aligned 3D boxes
//! - [`PlotCell3`] - grid cells crossed by a ray
//! - [`Line3`] - 3D segment
//! - [`Matrix3`] - affine 3D transform
//! - [`Quaternion`] - axis-angle rotation
//!
//! ## Data
//!
//! - [`Color`] - RGBA byte color
//! - [`Tile`] - sprite-sheet source rectangle
//! - [`MatchType`] / [`BitSet`] - flag matching
//! - [`numbers`] - constants, clamping, binomials and random helpers

mod vec2;
mod vec3;
mod ivec;
mod rect;
mod bound3;
mod bound3i;
mod plot;
mod line3;
pub mod matrix3;
mod quaternion;
mod match_type;
pub mod numbers;

pub use vec2::Vec2;
pub use vec3::Vec3;
pub use ivec::{Vec2i, Vec3i};
pub use rect::{channel, Color, Rect, Tile};
pub use bound3::Bound3;
pub use bound3i::Bound3i;
pub use plot::PlotCell3;
pub use line3::Line3;
pub use matrix3::Matrix3;
pub use quaternion::Quaternion;
pub use match_type::{BitSet, MatchType};
