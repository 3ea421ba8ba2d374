//! Easing curves
//!
//! An [`Easing`] pairs a transition [`EasingType`] (how the curve is applied
//! over the interval) with an [`EasingMethod`] (the motion curve itself).
//! Both parse from and print to their names, so they can live in data files.

use std::f32::consts::PI;
use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Deserialize};

use crate::AnimError;

/// How a motion curve is applied across `[0, 1]`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EasingType {
    #[default]
    In,
    Out,
    InOut,
    PingPong,
}

impl EasingType {
    pub const ALL: [EasingType; 4] = [
        EasingType::In,
        EasingType::Out,
        EasingType::InOut,
        EasingType::PingPong,
    ];

    pub fn name(self) -> &'static str {
        match self {
            EasingType::In => "In",
            EasingType::Out => "Out",
            EasingType::InOut => "InOut",
            EasingType::PingPong => "PingPong",
        }
    }

    /// Apply `method` to `d` under this transition
    pub fn delta(self, d: f32, method: EasingMethod) -> f32 {
        let f = |x: f32| method.motion(x);
        match self {
            EasingType::In => f(d),
            EasingType::Out => 1.0 - f(1.0 - d),
            EasingType::InOut => {
                if d < 0.5 {
                    f(2.0 * d) * 0.5
                } else {
                    1.0 - f(2.0 - 2.0 * d) * 0.5
                }
            }
            EasingType::PingPong => {
                if d < 0.5 {
                    f(2.0 * d)
                } else {
                    f(2.0 - 2.0 * d)
                }
            }
        }
    }
}

/// Motion curves mapping `[0, 1]` onto a progress value
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EasingMethod {
    #[default]
    Linear,
    Quadratic,
    Cubic,
    Quartic,
    Quintic,
    Back,
    Sine,
    Elastic,
    Revisit,
    SlowBounce,
    Bounce,
    SmallBounce,
    TinyBounce,
    Hesitant,
    Lasso,
    Sqrt,
    Log10,
    Slingshot,
    Circular,
    Gentle,
}

const BOUNCE_FREQUENCY: f32 = PI * PI * 1.5;

impl EasingMethod {
    pub const ALL: [EasingMethod; 20] = [
        EasingMethod::Linear,
        EasingMethod::Quadratic,
        EasingMethod::Cubic,
        EasingMethod::Quartic,
        EasingMethod::Quintic,
        EasingMethod::Back,
        EasingMethod::Sine,
        EasingMethod::Elastic,
        EasingMethod::Revisit,
        EasingMethod::SlowBounce,
        EasingMethod::Bounce,
        EasingMethod::SmallBounce,
        EasingMethod::TinyBounce,
        EasingMethod::Hesitant,
        EasingMethod::Lasso,
        EasingMethod::Sqrt,
        EasingMethod::Log10,
        EasingMethod::Slingshot,
        EasingMethod::Circular,
        EasingMethod::Gentle,
    ];

    pub fn name(self) -> &'static str {
        match self {
            EasingMethod::Linear => "Linear",
            EasingMethod::Quadratic => "Quadratic",
            EasingMethod::Cubic => "Cubic",
            EasingMethod::Quartic => "Quartic",
            EasingMethod::Quintic => "Quintic",
            EasingMethod::Back => "Back",
            EasingMethod::Sine => "Sine",
            EasingMethod::Elastic => "Elastic",
            EasingMethod::Revisit => "Revisit",
            EasingMethod::SlowBounce => "SlowBounce",
            EasingMethod::Bounce => "Bounce",
            EasingMethod::SmallBounce => "SmallBounce",
            EasingMethod::TinyBounce => "TinyBounce",
            EasingMethod::Hesitant => "Hesitant",
            EasingMethod::Lasso => "Lasso",
            EasingMethod::Sqrt => "Sqrt",
            EasingMethod::Log10 => "Log10",
            EasingMethod::Slingshot => "Slingshot",
            EasingMethod::Circular => "Circular",
            EasingMethod::Gentle => "Gentle",
        }
    }

    /// Evaluate the curve at `d`
    pub fn motion(self, d: f32) -> f32 {
        match self {
            EasingMethod::Linear => d,
            EasingMethod::Quadratic => d * d,
            EasingMethod::Cubic => d * d * d,
            EasingMethod::Quartic => {
                let d2 = d * d;
                d2 * d2
            }
            EasingMethod::Quintic => {
                let d2 = d * d;
                d2 * d2 * d
            }
            EasingMethod::Back => {
                let d2 = d * d;
                d2 * d + d2 - d
            }
            EasingMethod::Sine => (d * PI * 0.5).sin(),
            EasingMethod::Elastic => {
                let d2 = d * d;
                let d3 = d2 * d;
                let scale = d2 * (2.0 * d3 + d2 - 4.0 * d + 2.0);
                let wave = -(d * PI * 3.5).sin();
                scale * wave
            }
            EasingMethod::Revisit => (-(d * PI).sin() + d).abs(),
            EasingMethod::SlowBounce => {
                let d2 = d * d;
                1.0 - ((1.0 - d2) * (d2 * d * BOUNCE_FREQUENCY).cos()).abs()
            }
            EasingMethod::Bounce => 1.0 - ((1.0 - d) * (d * d * BOUNCE_FREQUENCY).cos()).abs(),
            EasingMethod::SmallBounce => {
                let inv = 1.0 - d;
                1.0 - (inv * inv * (d * d * BOUNCE_FREQUENCY).cos()).abs()
            }
            EasingMethod::TinyBounce => {
                let inv = 1.0 - d;
                1.0 - (inv * inv * (d * d * 7.0).cos()).abs()
            }
            EasingMethod::Hesitant => (d * d * 12.0).cos() * d * (1.0 - d) + d,
            EasingMethod::Lasso => {
                let d2 = d * d;
                1.0 - (d2 * d * 36.0).cos() * (1.0 - d)
            }
            EasingMethod::Sqrt => d.sqrt(),
            EasingMethod::Log10 => (d.log10() + 2.0) * 0.5,
            EasingMethod::Slingshot => {
                if d < 0.7 {
                    d * -0.357
                } else {
                    let x = d - 0.7;
                    (x * x * 27.5 - 0.5) * 0.5
                }
            }
            EasingMethod::Circular => 1.0 - (1.0 - d * d).sqrt(),
            EasingMethod::Gentle => 3.0 * (1.0 - d) * d * d + d * d * d,
        }
    }
}

impl fmt::Display for EasingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for EasingMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EasingType {
    type Err = AnimError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EasingType::ALL
            .into_iter()
            .find(|t| t.name() == s)
            .ok_or_else(|| AnimError::UnknownEasing(s.to_string()))
    }
}

impl FromStr for EasingMethod {
    type Err = AnimError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EasingMethod::ALL
            .into_iter()
            .find(|m| m.name() == s)
            .ok_or_else(|| AnimError::UnknownEasing(s.to_string()))
    }
}

/// A transition type, motion curve and blend scale
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Easing {
    pub ty: EasingType,
    pub method: EasingMethod,
    /// Blend between the eased value (1.0) and linear progress (0.0)
    pub scale: f32,
}

impl Default for Easing {
    fn default() -> Self {
        Self::new(EasingType::In, EasingMethod::Linear)
    }
}

impl Easing {
    pub const fn new(ty: EasingType, method: EasingMethod) -> Self {
        Self { ty, method, scale: 1.0 }
    }

    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    /// Eased progress for a linear progress `delta`
    pub fn delta(&self, delta: f32) -> f32 {
        let d = self.ty.delta(delta, self.method);
        if self.scale != 1.0 {
            self.scale * d + (1.0 - self.scale) * delta
        } else {
            d
        }
    }
}

impl fmt::Display for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.ty, self.method)?;
        if self.scale != 1.0 {
            write!(f, "*{}", self.scale)?;
        }
        Ok(())
    }
}
