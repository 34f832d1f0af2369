//! Animatable properties and their values.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Interpolation trait for values that can be smoothly transitioned
pub trait Interpolatable {
    fn lerp(&self, other: &Self, t: f64) -> Self;
}

impl Interpolatable for f64 {
    fn lerp(&self, other: &Self, t: f64) -> Self {
        self + (other - self) * t
    }
}

/// Unit attached to a property value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Unit {
    Px,
    Percent,
    Deg,
    /// Unitless (scale, opacity)
    Number,
}

impl Unit {
    pub fn suffix(&self) -> &'static str {
        match self {
            Unit::Px => "px",
            Unit::Percent => "%",
            Unit::Deg => "deg",
            Unit::Number => "",
        }
    }
}

/// A numeric property value with its unit
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Value {
    pub amount: f64,
    pub unit: Unit,
}

impl Value {
    pub fn new(amount: f64, unit: Unit) -> Self {
        Self { amount, unit }
    }

    pub fn px(amount: f64) -> Self {
        Self::new(amount, Unit::Px)
    }

    pub fn percent(amount: f64) -> Self {
        Self::new(amount, Unit::Percent)
    }

    pub fn deg(amount: f64) -> Self {
        Self::new(amount, Unit::Deg)
    }

    pub fn number(amount: f64) -> Self {
        Self::new(amount, Unit::Number)
    }

    /// Resolve against a reference length (used for percentages)
    pub fn to_px(&self, reference: f64) -> f64 {
        match self.unit {
            Unit::Percent => self.amount / 100.0 * reference,
            _ => self.amount,
        }
    }
}

impl Interpolatable for Value {
    /// The result carries the target's unit. Start amounts are taken as-is
    /// when units differ; every mixed-unit transition in the page starts from 0.
    fn lerp(&self, other: &Self, t: f64) -> Self {
        Value::new(self.amount.lerp(&other.amount, t), other.unit)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", format_amount(self.amount), self.unit.suffix())
    }
}

/// Trim float noise so generated styles stay readable
pub fn format_amount(amount: f64) -> String {
    let rounded = (amount * 1000.0).round() / 1000.0;
    if rounded == 0.0 {
        "0".to_string()
    } else {
        format!("{}", rounded)
    }
}

/// Style properties a tween can drive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Property {
    /// Horizontal translation
    X,
    /// Vertical translation
    Y,
    /// Rotation in degrees
    Rotate,
    /// Uniform scale
    Scale,
    Opacity,
    /// Offset from the containing block's bottom edge
    Bottom,
}

impl Property {
    /// Unit a bare number is interpreted in
    pub fn default_unit(&self) -> Unit {
        match self {
            Property::X | Property::Y | Property::Bottom => Unit::Px,
            Property::Rotate => Unit::Deg,
            Property::Scale | Property::Opacity => Unit::Number,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Property::X => "x",
            Property::Y => "y",
            Property::Rotate => "rotate",
            Property::Scale => "scale",
            Property::Opacity => "opacity",
            Property::Bottom => "bottom",
        }
    }
}
