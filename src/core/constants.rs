//! Page-wide constants. Keeping them in a single place makes it easier to
//! tweak the presentation's magic numbers; anything a host may want to tune
//! is mirrored in [`crate::core::config`].

/// Tween duration used when a call does not specify one, in seconds.
pub const DEFAULT_TWEEN_DURATION: f64 = 0.5;

/// Splash progress at which the main content is revealed.
pub const REVEAL_PROGRESS_THRESHOLD: f64 = 0.9;

/// Full horizontal parallax range; the pointer at either edge shifts by half.
pub const PARALLAX_RANGE: f64 = 40.0;

/// Per-layer parallax multipliers.
pub const PARALLAX_TEXT_FACTOR: f64 = 0.4;
pub const PARALLAX_SKY_FACTOR: f64 = 1.0;
pub const PARALLAX_BACKGROUND_FACTOR: f64 = 1.7;

/// Splash mask geometry (svg user units).
pub const SPLASH_VIEW_BOX: (f64, f64, f64, f64) = (0.0, 0.0, 800.0, 600.0);
pub const SPLASH_FONT_SIZE: f64 = 250.0;
pub const SPLASH_MASK_ID: &str = "viMask";

/// Longest step a single tick may advance, so a stalled tab does not skip the splash.
pub const MAX_FRAME_DT: f64 = 0.1;
