use crate::core::config::ParallaxConfig;

/// Horizontal offsets for the three pointer-following layers
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParallaxOffsets {
    /// `(x / width - 0.5) * range`
    pub shift: f64,
    /// Heading text, as a percentage of its own width
    pub text_percent: f64,
    pub sky_px: f64,
    pub background_px: f64,
}

impl ParallaxOffsets {
    pub const NEUTRAL: ParallaxOffsets = ParallaxOffsets {
        shift: 0.0,
        text_percent: 0.0,
        sky_px: 0.0,
        background_px: 0.0,
    };

    /// Offsets for a pointer at `pointer_x` over a viewport `viewport_width`
    /// wide. A viewport without a usable width yields no shift.
    pub fn compute(pointer_x: f64, viewport_width: f64, config: &ParallaxConfig) -> Self {
        if !pointer_x.is_finite() || !viewport_width.is_finite() || viewport_width <= 0.0 {
            return Self::NEUTRAL;
        }
        let shift = (pointer_x / viewport_width - 0.5) * config.range;
        Self::from_shift(shift, config)
    }

    pub fn from_shift(shift: f64, config: &ParallaxConfig) -> Self {
        Self {
            shift,
            text_percent: shift * config.text_factor,
            sky_px: shift * config.sky_factor,
            background_px: shift * config.background_factor,
        }
    }

    pub fn is_neutral(&self) -> bool {
        self.shift == 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_center_is_neutral() {
        let offsets = ParallaxOffsets::compute(640.0, 1280.0, &ParallaxConfig::default());
        assert!(offsets.is_neutral());
        assert_eq!(offsets.sky_px, 0.0);
        assert_eq!(offsets.background_px, 0.0);
        assert_eq!(offsets.text_percent, 0.0);
    }

    #[test]
    fn test_right_edge() {
        let offsets = ParallaxOffsets::compute(1280.0, 1280.0, &ParallaxConfig::default());
        assert!(close(offsets.shift, 20.0));
        assert!(close(offsets.sky_px, 20.0));
        assert!(close(offsets.background_px, 34.0));
        assert!(close(offsets.text_percent, 8.0));
    }

    #[test]
    fn test_left_edge_mirrors_right() {
        let offsets = ParallaxOffsets::compute(0.0, 1280.0, &ParallaxConfig::default());
        assert!(close(offsets.shift, -20.0));
        assert!(close(offsets.background_px, -34.0));
    }

    #[test]
    fn test_degenerate_viewport() {
        let config = ParallaxConfig::default();
        assert_eq!(ParallaxOffsets::compute(10.0, 0.0, &config), ParallaxOffsets::NEUTRAL);
        assert_eq!(ParallaxOffsets::compute(f64::NAN, 800.0, &config), ParallaxOffsets::NEUTRAL);
    }
}
