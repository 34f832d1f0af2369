use crate::LandingError;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

/// Easing curves understood by the tween engine.
///
/// Names follow the `Family.easeMode` spelling used by web animation
/// libraries, so configs can say `"Power4.easeInOut"` or `"expo.inOut"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Ease {
    Linear,
    Power1In,
    Power1Out,
    Power1InOut,
    Power2In,
    Power2Out,
    Power2InOut,
    Power3In,
    Power3Out,
    Power3InOut,
    Power4In,
    Power4Out,
    Power4InOut,
    ExpoIn,
    ExpoOut,
    ExpoInOut,
    SineIn,
    SineOut,
    SineInOut,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Mode {
    In,
    Out,
    InOut,
}

impl Ease {
    /// Apply the easing function to a normalized time value (0.0 to 1.0)
    pub fn apply(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Ease::Linear => t,
            Ease::Power1In => power(t, 2, Mode::In),
            Ease::Power1Out => power(t, 2, Mode::Out),
            Ease::Power1InOut => power(t, 2, Mode::InOut),
            Ease::Power2In => power(t, 3, Mode::In),
            Ease::Power2Out => power(t, 3, Mode::Out),
            Ease::Power2InOut => power(t, 3, Mode::InOut),
            Ease::Power3In => power(t, 4, Mode::In),
            Ease::Power3Out => power(t, 4, Mode::Out),
            Ease::Power3InOut => power(t, 4, Mode::InOut),
            Ease::Power4In => power(t, 5, Mode::In),
            Ease::Power4Out => power(t, 5, Mode::Out),
            Ease::Power4InOut => power(t, 5, Mode::InOut),
            Ease::ExpoIn => {
                if t == 0.0 {
                    0.0
                } else {
                    (2.0_f64).powf(10.0 * (t - 1.0))
                }
            }
            Ease::ExpoOut => {
                if t == 1.0 {
                    1.0
                } else {
                    1.0 - (2.0_f64).powf(-10.0 * t)
                }
            }
            Ease::ExpoInOut => {
                if t == 0.0 {
                    0.0
                } else if t == 1.0 {
                    1.0
                } else if t < 0.5 {
                    (2.0_f64).powf(20.0 * t - 10.0) / 2.0
                } else {
                    (2.0 - (2.0_f64).powf(-20.0 * t + 10.0)) / 2.0
                }
            }
            Ease::SineIn => 1.0 - (t * PI / 2.0).cos(),
            Ease::SineOut => (t * PI / 2.0).sin(),
            Ease::SineInOut => -(((PI * t).cos() - 1.0) / 2.0),
        }
    }

    fn family_and_mode(&self) -> (&'static str, &'static str) {
        match self {
            Ease::Linear => ("none", ""),
            Ease::Power1In => ("Power1", "easeIn"),
            Ease::Power1Out => ("Power1", "easeOut"),
            Ease::Power1InOut => ("Power1", "easeInOut"),
            Ease::Power2In => ("Power2", "easeIn"),
            Ease::Power2Out => ("Power2", "easeOut"),
            Ease::Power2InOut => ("Power2", "easeInOut"),
            Ease::Power3In => ("Power3", "easeIn"),
            Ease::Power3Out => ("Power3", "easeOut"),
            Ease::Power3InOut => ("Power3", "easeInOut"),
            Ease::Power4In => ("Power4", "easeIn"),
            Ease::Power4Out => ("Power4", "easeOut"),
            Ease::Power4InOut => ("Power4", "easeInOut"),
            Ease::ExpoIn => ("Expo", "easeIn"),
            Ease::ExpoOut => ("Expo", "easeOut"),
            Ease::ExpoInOut => ("Expo", "easeInOut"),
            Ease::SineIn => ("Sine", "easeIn"),
            Ease::SineOut => ("Sine", "easeOut"),
            Ease::SineInOut => ("Sine", "easeInOut"),
        }
    }
}

/// Polynomial ease of the given exponent
fn power(t: f64, exponent: i32, mode: Mode) -> f64 {
    match mode {
        Mode::In => t.powi(exponent),
        Mode::Out => 1.0 - (1.0 - t).powi(exponent),
        Mode::InOut => {
            if t < 0.5 {
                (2.0 * t).powi(exponent) / 2.0
            } else {
                1.0 - (2.0 * (1.0 - t)).powi(exponent) / 2.0
            }
        }
    }
}

impl Default for Ease {
    fn default() -> Self {
        Ease::Power1Out
    }
}

impl fmt::Display for Ease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.family_and_mode() {
            (family, "") => write!(f, "{}", family),
            (family, mode) => write!(f, "{}.{}", family, mode),
        }
    }
}

impl FromStr for Ease {
    type Err = LandingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        let (family, mode) = match normalized.split_once('.') {
            Some((family, mode)) => (family, mode),
            None => (normalized.as_str(), "out"),
        };

        let mode = match mode {
            "in" | "easein" => Mode::In,
            "out" | "easeout" => Mode::Out,
            "inout" | "easeinout" => Mode::InOut,
            _ => return Err(LandingError::InvalidEase(s.to_string())),
        };

        let ease = match (family, mode) {
            ("none" | "linear", _) => Ease::Linear,
            ("power1" | "quad", Mode::In) => Ease::Power1In,
            ("power1" | "quad", Mode::Out) => Ease::Power1Out,
            ("power1" | "quad", Mode::InOut) => Ease::Power1InOut,
            ("power2" | "cubic", Mode::In) => Ease::Power2In,
            ("power2" | "cubic", Mode::Out) => Ease::Power2Out,
            ("power2" | "cubic", Mode::InOut) => Ease::Power2InOut,
            ("power3" | "quart", Mode::In) => Ease::Power3In,
            ("power3" | "quart", Mode::Out) => Ease::Power3Out,
            ("power3" | "quart", Mode::InOut) => Ease::Power3InOut,
            ("power4" | "quint" | "strong", Mode::In) => Ease::Power4In,
            ("power4" | "quint" | "strong", Mode::Out) => Ease::Power4Out,
            ("power4" | "quint" | "strong", Mode::InOut) => Ease::Power4InOut,
            ("expo", Mode::In) => Ease::ExpoIn,
            ("expo", Mode::Out) => Ease::ExpoOut,
            ("expo", Mode::InOut) => Ease::ExpoInOut,
            ("sine", Mode::In) => Ease::SineIn,
            ("sine", Mode::Out) => Ease::SineOut,
            ("sine", Mode::InOut) => Ease::SineInOut,
            _ => return Err(LandingError::InvalidEase(s.to_string())),
        };
        Ok(ease)
    }
}

impl TryFrom<String> for Ease {
    type Error = LandingError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Ease> for String {
    fn from(ease: Ease) -> Self {
        ease.to_string()
    }
}
