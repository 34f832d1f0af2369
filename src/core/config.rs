//! Configuration for the landing page's timing, motion and assets
//!
//! Every number the page animates with lives here so hosts can retune the
//! presentation through presets or a JSON document without touching the view.

use crate::animation::easing::Ease;
use crate::core::constants::{
    DEFAULT_TWEEN_DURATION, MAX_FRAME_DT, PARALLAX_BACKGROUND_FACTOR,
    PARALLAX_RANGE, PARALLAX_SKY_FACTOR, PARALLAX_TEXT_FACTOR, REVEAL_PROGRESS_THRESHOLD,
};
use crate::LandingError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq)]
pub enum LandingProfile {
    /// The full-length presentation
    Cinematic,
    /// Same choreography at a quarter of the length, for previews
    Brisk,
    Custom(LandingConfig),
}

impl LandingProfile {
    /// The config this profile stands for. Custom configs are validated.
    pub fn resolve(&self) -> Result<LandingConfig, LandingError> {
        match self {
            Self::Cinematic => Ok(LandingConfig::default()),
            Self::Brisk => Ok(LandingConfig::default().time_scaled(0.25)),
            Self::Custom(config) => {
                config.validate()?;
                Ok(config.clone())
            }
        }
    }
}

impl Default for LandingProfile {
    fn default() -> Self {
        Self::Cinematic
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LandingConfig {
    pub splash: SplashConfig,
    pub reveal: RevealConfig,
    pub parallax: ParallaxConfig,
    pub frame: FrameTimingConfig,
    pub assets: AssetManifest,
}

impl LandingConfig {
    pub fn from_json_str(json: &str) -> Result<Self, LandingError> {
        let config: LandingConfig = serde_json::from_str(json)?;
        config.validate()?;
        log::debug!("loaded landing config: {:?}", config);
        Ok(config)
    }

    pub fn from_json_file(path: impl AsRef<std::path::Path>) -> Result<Self, LandingError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        log::info!("reading landing config from {}", path.display());
        Self::from_json_str(&json)
    }

    pub fn to_json_string(&self) -> Result<String, LandingError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Multiply every duration and offset by `factor`
    pub fn time_scaled(mut self, factor: f64) -> Self {
        let splash = &mut self.splash;
        splash.rotate_duration *= factor;
        splash.scale_duration *= factor;
        splash.scale_offset *= factor;

        let reveal = &mut self.reveal;
        reveal.duration *= factor;
        reveal.container_offset *= factor;
        reveal.layer_offset *= factor;

        self.parallax.follow_duration *= factor;
        self
    }

    pub fn validate(&self) -> Result<(), LandingError> {
        let durations = [
            ("splash.rotate_duration", self.splash.rotate_duration),
            ("splash.scale_duration", self.splash.scale_duration),
            ("reveal.duration", self.reveal.duration),
            ("parallax.follow_duration", self.parallax.follow_duration),
        ];
        for (name, value) in durations {
            if !value.is_finite() || value <= 0.0 {
                return Err(LandingError::Config(format!(
                    "{} must be a positive number of seconds, got {}",
                    name, value
                )));
            }
        }

        let threshold = self.splash.reveal_threshold;
        if !(threshold > 0.0 && threshold <= 1.0) {
            return Err(LandingError::Config(format!(
                "splash.reveal_threshold must be in (0, 1], got {}",
                threshold
            )));
        }

        if !self.parallax.range.is_finite() {
            return Err(LandingError::Config("parallax.range must be finite".into()));
        }

        if !(self.frame.max_step > 0.0) {
            return Err(LandingError::Config(format!(
                "frame.max_step must be positive, got {}",
                self.frame.max_step
            )));
        }
        Ok(())
    }
}

/// The two-step mask animation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SplashConfig {
    pub rotate_to: f64,
    pub rotate_duration: f64,
    pub rotate_ease: Ease,
    pub scale_to: f64,
    pub scale_duration: f64,
    /// Start of the scale step relative to the end of the rotate step
    pub scale_offset: f64,
    pub scale_ease: Ease,
    pub reveal_threshold: f64,
}

impl Default for SplashConfig {
    fn default() -> Self {
        Self {
            rotate_to: 10.0,
            rotate_duration: 2.0,
            rotate_ease: Ease::Power4InOut,
            scale_to: 10.0,
            scale_duration: 2.0,
            scale_offset: -1.8,
            scale_ease: Ease::ExpoInOut,
            reveal_threshold: REVEAL_PROGRESS_THRESHOLD,
        }
    }
}

impl SplashConfig {
    /// Seconds from mount until the reveal fires, ignoring frame quantization
    pub fn reveal_at(&self) -> f64 {
        let scale_start = (self.rotate_duration + self.scale_offset).max(0.0);
        scale_start + self.scale_duration * self.reveal_threshold
    }
}

/// The five layer tweens run once the content is revealed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    pub duration: f64,
    pub ease: Ease,
    /// Delay of the container tween; negative starts it part-way through
    pub container_offset: f64,
    /// Delay of the layer tweens
    pub layer_offset: f64,
    pub sky_scale: f64,
    pub background_scale: f64,
    pub character_scale: f64,
    pub text_scale: f64,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            duration: 2.0,
            ease: Ease::ExpoInOut,
            container_offset: -1.0,
            layer_offset: -0.8,
            sky_scale: 1.1,
            background_scale: 1.1,
            character_scale: 1.2,
            text_scale: 1.0,
        }
    }
}

/// Pointer-follow offsets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParallaxConfig {
    pub enabled: bool,
    pub range: f64,
    pub text_factor: f64,
    pub sky_factor: f64,
    pub background_factor: f64,
    pub follow_duration: f64,
    pub follow_ease: Ease,
}

impl Default for ParallaxConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            range: PARALLAX_RANGE,
            text_factor: PARALLAX_TEXT_FACTOR,
            sky_factor: PARALLAX_SKY_FACTOR,
            background_factor: PARALLAX_BACKGROUND_FACTOR,
            follow_duration: DEFAULT_TWEEN_DURATION,
            follow_ease: Ease::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrameTimingConfig {
    /// Longest step a single tick may advance, in seconds
    pub max_step: f64,
}

impl FrameTimingConfig {
    /// Clamp a measured frame step. Negative or non-finite steps become zero.
    pub fn clamp_step(&self, dt: f64) -> f64 {
        if !dt.is_finite() || dt <= 0.0 {
            0.0
        } else {
            dt.min(self.max_step)
        }
    }
}

impl Default for FrameTimingConfig {
    fn default() -> Self {
        Self {
            max_step: MAX_FRAME_DT,
        }
    }
}

/// Image paths, relative to the page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetManifest {
    pub background: String,
    pub sky: String,
    pub character: String,
    pub product: String,
    pub feature: String,
}

impl Default for AssetManifest {
    fn default() -> Self {
        Self {
            background: "./bg.png".to_string(),
            sky: "./sky.png".to_string(),
            character: "./girlbg.png".to_string(),
            product: "./ps5.png".to_string(),
            feature: "./imag.png".to_string(),
        }
    }
}
