use crate::animation::props::{format_amount, Property, Value};
use serde::{Deserialize, Serialize};

/// Pivot for rotation and scale, as percentages of the element box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TransformOrigin {
    pub x: f64,
    pub y: f64,
}

impl TransformOrigin {
    pub const CENTER: TransformOrigin = TransformOrigin { x: 50.0, y: 50.0 };
}

impl Default for TransformOrigin {
    fn default() -> Self {
        Self::CENTER
    }
}

/// The animatable part of an element's presentation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Style {
    pub x: Value,
    pub y: Value,
    /// Degrees
    pub rotate: f64,
    pub scale: f64,
    pub opacity: f64,
    pub bottom: Option<Value>,
    pub origin: TransformOrigin,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            x: Value::px(0.0),
            y: Value::px(0.0),
            rotate: 0.0,
            scale: 1.0,
            opacity: 1.0,
            bottom: None,
            origin: TransformOrigin::default(),
        }
    }
}

impl Style {
    /// Resting pose helper: rotated and scaled
    pub fn posed(rotate: f64, scale: f64) -> Self {
        Self {
            rotate,
            scale,
            ..Self::default()
        }
    }

    pub fn with_x(mut self, x: Value) -> Self {
        self.x = x;
        self
    }

    pub fn with_bottom(mut self, bottom: Value) -> Self {
        self.bottom = Some(bottom);
        self
    }

    /// Current value of a property
    pub fn get(&self, property: Property) -> Value {
        match property {
            Property::X => self.x,
            Property::Y => self.y,
            Property::Rotate => Value::deg(self.rotate),
            Property::Scale => Value::number(self.scale),
            Property::Opacity => Value::number(self.opacity),
            Property::Bottom => self.bottom.unwrap_or(Value::px(0.0)),
        }
    }

    /// Write a property. Rotation, scale and opacity ignore the unit.
    pub fn set(&mut self, property: Property, value: Value) {
        match property {
            Property::X => self.x = value,
            Property::Y => self.y = value,
            Property::Rotate => self.rotate = value.amount,
            Property::Scale => self.scale = value.amount,
            Property::Opacity => self.opacity = value.amount.clamp(0.0, 1.0),
            Property::Bottom => self.bottom = Some(value),
        }
    }

    pub fn has_transform(&self) -> bool {
        self.x.amount != 0.0 || self.y.amount != 0.0 || self.rotate != 0.0 || self.scale != 1.0
    }

    /// Inline CSS for this style. Empty when the style is neutral.
    pub fn to_css(&self) -> String {
        let mut parts = Vec::new();
        if self.has_transform() {
            parts.push(format!(
                "transform: translate({}, {}) rotate({}deg) scale({})",
                self.x,
                self.y,
                format_amount(self.rotate),
                format_amount(self.scale)
            ));
            parts.push(format!(
                "transform-origin: {}% {}%",
                format_amount(self.origin.x),
                format_amount(self.origin.y)
            ));
        }
        if self.opacity < 1.0 {
            parts.push(format!("opacity: {}", format_amount(self.opacity)));
        }
        if let Some(bottom) = self.bottom {
            parts.push(format!("bottom: {}", bottom));
        }
        parts.join("; ")
    }
}

/// Translate a bare number into the property's default unit
pub fn value_for(property: Property, amount: f64) -> Value {
    Value::new(amount, property.default_unit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_set_round_trip_for_transforms() {
        let mut style = Style::default();
        style.set(Property::Rotate, Value::deg(-10.0));
        style.set(Property::Scale, Value::number(1.7));
        style.set(Property::X, Value::percent(8.0));
        assert_eq!(style.get(Property::Rotate), Value::deg(-10.0));
        assert_eq!(style.get(Property::Scale), Value::number(1.7));
        assert_eq!(style.get(Property::X), Value::percent(8.0));
    }

    #[test]
    fn test_opacity_is_clamped() {
        let mut style = Style::default();
        style.set(Property::Opacity, Value::number(-0.2));
        assert_eq!(style.opacity, 0.0);
    }

    #[test]
    fn test_neutral_style_emits_no_css() {
        assert_eq!(Style::default().to_css(), "");
    }

    #[test]
    fn test_css_for_resting_pose() {
        let css = Style::posed(-10.0, 1.7).to_css();
        assert!(css.contains("rotate(-10deg)"));
        assert!(css.contains("scale(1.7)"));
        assert!(css.contains("transform-origin: 50% 50%"));
    }
}
