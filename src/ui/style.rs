use egui::{Color32, FontId};

/// Placeholder colours for the painted preview.
///
/// The egui back end does not load the page's images; each layer is drawn as
/// a flat shape in its own colour so its pose and parallax stay visible.
#[derive(Debug, Clone)]
pub struct LandingPalette {
    /// Behind everything, and the splash overlay
    pub backdrop: Color32,
    /// The image seen through the "VI" mask
    pub splash_fill: Color32,
    pub sky: Color32,
    pub background: Color32,
    pub character: Color32,
    /// Hero words
    pub text: Color32,
    pub product: Color32,
    /// Navbar and scroll hint
    pub chrome: Color32,
    pub hero_font: FontId,
    pub chrome_font: FontId,
}

impl Default for LandingPalette {
    fn default() -> Self {
        Self {
            backdrop: Color32::BLACK,
            splash_fill: Color32::from_rgb(214, 120, 64),
            sky: Color32::from_rgb(94, 154, 214),
            background: Color32::from_rgb(198, 112, 78),
            character: Color32::from_rgb(60, 44, 70),
            text: Color32::WHITE,
            product: Color32::from_rgb(230, 230, 236),
            chrome: Color32::from_rgba_unmultiplied(255, 255, 255, 220),
            hero_font: FontId::proportional(72.0),
            chrome_font: FontId::proportional(16.0),
        }
    }
}

/// Predefined palettes
pub struct LandingThemes;

impl LandingThemes {
    /// Warm dusk tones (default)
    pub fn dusk() -> LandingPalette {
        LandingPalette::default()
    }

    /// Outlines-only look for checking layer geometry
    pub fn wireframe() -> LandingPalette {
        LandingPalette {
            backdrop: Color32::from_gray(24),
            splash_fill: Color32::from_gray(180),
            sky: Color32::from_rgba_unmultiplied(80, 160, 255, 60),
            background: Color32::from_rgba_unmultiplied(255, 140, 80, 60),
            character: Color32::from_rgba_unmultiplied(200, 80, 255, 90),
            text: Color32::YELLOW,
            product: Color32::from_rgba_unmultiplied(255, 255, 255, 60),
            ..LandingPalette::default()
        }
    }
}
