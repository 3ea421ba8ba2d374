//! Animation primitives for the Axe toolkit
//!
//! ## Values
//!
//! - [`Attribute`] - interpolation and arithmetic over animatable values
//! - [`Range`] / [`IntRange`] - random sampling between two values
//!
//! ## Timing
//!
//! - [`Easing`] - an [`EasingType`] applied to an [`EasingMethod`]
//! - [`Path`] - maps a delta in `[0, 1]` onto a value
//! - [`Tween`] / [`ScalarSpring`] - scalar helpers used by the camera
//!
//! ## Entities
//!
//! - [`Entity`] / [`EntityList`] - per-frame update with expiry
//! - [`Event`] - delayed, looping path animation
//! - [`Mover`], [`Pair`], [`Spring`], [`Watcher`] - value drivers
//!
//! ## Sprites
//!
//! - [`Animation`] / [`Frame`] - frame stepping over a sprite sheet
//! - [`AnimationSheet`] - RON description of an animation

mod attribute;
mod range;
mod easing;
mod path;
mod entity;
mod motion;
mod event;
mod tween;
mod animation;
mod error;

pub use attribute::Attribute;
pub use range::{IntRange, Range};
pub use easing::{Easing, EasingMethod, EasingType};
pub use path::{
    BezierPath, CompiledPath, CubicPath, IntegralPath, JumpPath, LinearPath, Path, QuadraticPath,
    TimedPath, TweenPath,
};
pub use entity::{shared, Entity, EntityList, EntityState, Lifeline, Shared};
pub use motion::{Mover, Pair, Spring, Watcher};
pub use event::{Event, EventState};
pub use tween::{ScalarSpring, Tween};
pub use animation::{Animation, AnimationSheet, Flip, Frame, FrameArrays};
pub use error::AnimError;
