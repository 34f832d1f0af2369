use crate::{
    animation::engine::AnimationEngine,
    core::{
        constants::{SPLASH_FONT_SIZE, SPLASH_VIEW_BOX},
        geo::{Point, Size},
    },
    scene::{
        markup::{BACKGROUND_CLASS, CHARACTER_CLASS, MASK_GROUP_CLASS, SKY_CLASS, TEXT_CLASS},
        style::Style,
        transform::Affine,
        tree::Scene,
    },
    ui::style::LandingPalette,
    view::{landing::LandingView, state::ViewState},
};
use egui::{Align2, Color32, FontId, Painter, Pos2, Rect, Response, Sense, Shape, Stroke, Ui, Vec2, Widget};

/// Largest font the preview asks egui to rasterize
const MAX_PREVIEW_FONT: f32 = 512.0;

/// Landing widget configuration
#[derive(Debug, Clone)]
pub struct LandingWidgetConfig {
    /// Fixed size; otherwise the widget fills the available space
    pub size: Option<Vec2>,
    /// Mount the view on first paint if the host has not
    pub auto_mount: bool,
    /// Tick the view with egui's frame time
    pub drive_clock: bool,
    /// Forward hover movement as pointer-move events
    pub track_pointer: bool,
    pub palette: LandingPalette,
}

impl Default for LandingWidgetConfig {
    fn default() -> Self {
        Self {
            size: None,
            auto_mount: true,
            drive_clock: true,
            track_pointer: true,
            palette: LandingPalette::default(),
        }
    }
}

/// Immediate-mode widget that drives a [`LandingView`] and paints its scene.
///
/// The view lives in the host app; the widget borrows it for one frame.
///
/// ```rust,ignore
/// ui.add(LandingWidget::new(&mut self.view));
/// ```
pub struct LandingWidget<'a, E: AnimationEngine> {
    view: &'a mut LandingView<E>,
    config: LandingWidgetConfig,
}

impl<'a, E: AnimationEngine> LandingWidget<'a, E> {
    pub fn new(view: &'a mut LandingView<E>) -> Self {
        Self {
            view,
            config: LandingWidgetConfig::default(),
        }
    }

    pub fn with_config(view: &'a mut LandingView<E>, config: LandingWidgetConfig) -> Self {
        Self { view, config }
    }

    pub fn size(mut self, size: Vec2) -> Self {
        self.config.size = Some(size);
        self
    }

    pub fn palette(mut self, palette: LandingPalette) -> Self {
        self.config.palette = palette;
        self
    }

    /// Leave ticking to the host
    pub fn manual_clock(mut self) -> Self {
        self.config.drive_clock = false;
        self
    }
}

impl<E: AnimationEngine> Widget for LandingWidget<'_, E> {
    fn ui(self, ui: &mut Ui) -> Response {
        let desired_size = self.config.size.unwrap_or_else(|| ui.available_size());
        let (rect, response) = ui.allocate_exact_size(desired_size, Sense::hover());
        let viewport = Size::new(rect.width() as f64, rect.height() as f64);

        if self.config.auto_mount && !self.view.is_mounted() {
            self.view.mount();
        }
        if self.view.viewport() != viewport {
            self.view.set_viewport(viewport);
        }
        if self.config.drive_clock {
            let dt = ui.input(|i| i.stable_dt) as f64;
            self.view.tick(dt);
        }

        if self.config.track_pointer {
            if let Some(pos) = response.hover_pos() {
                let last_pointer_id = response.id.with("last_pointer");
                let last: Option<Pos2> = ui.ctx().memory(|mem| mem.data.get_temp(last_pointer_id));
                if last != Some(pos) {
                    ui.ctx()
                        .memory_mut(|mem| mem.data.insert_temp(last_pointer_id, pos));
                    let local = pos - rect.min;
                    self.view
                        .pointer_move(Point::new(local.x as f64, local.y as f64), viewport);
                }
            }
        }

        let painter = ui.painter_at(rect);
        painter.rect_filled(rect, 0.0, self.config.palette.backdrop);
        match self.view.state() {
            Some(ViewState::Splash(_)) => {
                paint_splash(&painter, rect, self.view.scene(), &self.config.palette)
            }
            Some(ViewState::Revealed(_)) => {
                paint_revealed(&painter, rect, self.view.scene(), &self.config.palette)
            }
            None => {}
        }

        if self.view.is_mounted()
            && (self.view.engine().active_count() > 0 || !self.view.is_revealed())
        {
            ui.ctx().request_repaint();
        }

        response
    }
}

fn to_screen(point: Point, origin: Pos2) -> Pos2 {
    Pos2::new(origin.x + point.x as f32, origin.y + point.y as f32)
}

fn quad(affine: &Affine, position: Point, size: Size, origin: Pos2) -> Vec<Pos2> {
    [
        Point::new(position.x, position.y),
        Point::new(position.x + size.width, position.y),
        Point::new(position.x + size.width, position.y + size.height),
        Point::new(position.x, position.y + size.height),
    ]
    .into_iter()
    .map(|corner| to_screen(affine.apply(corner), origin))
    .collect()
}

fn fade(color: Color32, opacity: f64) -> Color32 {
    color.gamma_multiply(opacity.clamp(0.0, 1.0) as f32)
}

fn scaled_font(base: &FontId, scale: f64) -> FontId {
    let size = (base.size * scale as f32).clamp(1.0, MAX_PREVIEW_FONT);
    FontId::new(size, base.family.clone())
}

/// The "VI" mask over the background placeholder, fitted into the widget
fn paint_splash(painter: &Painter, rect: Rect, scene: &Scene, palette: &LandingPalette) {
    let Some(group) = scene.first(&format!(".{}", MASK_GROUP_CLASS)) else {
        return;
    };
    let Some(style) = scene.style(group) else {
        return;
    };

    let (_, _, box_w, box_h) = SPLASH_VIEW_BOX;
    let fit = (rect.width() as f64 / box_w).min(rect.height() as f64 / box_h);
    let offset = Point::new(
        (rect.width() as f64 - box_w * fit) / 2.0,
        (rect.height() as f64 - box_h * fit) / 2.0,
    );
    let view_box = Size::new(box_w, box_h);
    let affine = Affine::translate(offset.x, offset.y)
        .then(&Affine::scale(fit))
        .then(&Affine::from_style(style, Point::new(0.0, 0.0), view_box));

    // glyph box of the two letters, centred in the view box
    let glyphs = Size::new(SPLASH_FONT_SIZE * 1.2, SPLASH_FONT_SIZE);
    let centre = view_box.center();
    let glyph_origin = Point::new(centre.x - glyphs.width / 2.0, centre.y - glyphs.height / 2.0);
    let colour = fade(palette.splash_fill, style.opacity);

    painter.add(Shape::convex_polygon(
        quad(&affine, glyph_origin, glyphs, rect.min),
        Color32::TRANSPARENT,
        Stroke::new(1.0, colour),
    ));
    painter.text(
        to_screen(affine.apply(centre), rect.min),
        Align2::CENTER_CENTER,
        "VI",
        scaled_font(
            &FontId::new(SPLASH_FONT_SIZE as f32, palette.hero_font.family.clone()),
            affine.scale_factor(),
        ),
        colour,
    );
}

/// Where each hero layer sits before its own transform
fn hero_box(class: &str, viewport: Size, style: &Style) -> (Point, Size) {
    let Size { width, height } = viewport;
    match class {
        CHARACTER_CLASS => {
            let size = Size::new(width * 0.35, height * 0.85);
            let bottom = style.bottom.map(|b| b.to_px(height)).unwrap_or(0.0);
            (
                Point::new(width * 0.5, height - size.height - bottom),
                size,
            )
        }
        TEXT_CLASS => (
            Point::new(width * 0.3, height * 0.08),
            Size::new(width * 0.4, height * 0.4),
        ),
        _ => (Point::new(0.0, 0.0), viewport),
    }
}

fn paint_revealed(painter: &Painter, rect: Rect, scene: &Scene, palette: &LandingPalette) {
    let viewport = Size::new(rect.width() as f64, rect.height() as f64);
    let Some(main_style) = scene.first(".main").and_then(|id| scene.style(id)) else {
        return;
    };
    let main = Affine::from_style(main_style, Point::new(0.0, 0.0), viewport);

    let layers = [
        (SKY_CLASS, palette.sky),
        (BACKGROUND_CLASS, palette.background),
        (TEXT_CLASS, palette.text),
        (CHARACTER_CLASS, palette.character),
    ];
    for (class, colour) in layers {
        let Some(id) = scene.first(&format!(".{}", class)) else {
            continue;
        };
        let Some(style) = scene.style(id) else {
            continue;
        };
        let (position, size) = hero_box(class, viewport, style);
        let affine = main.then(&Affine::from_style(style, position, size));
        let colour = fade(colour, style.opacity * main_style.opacity);

        if class == TEXT_CLASS {
            paint_words(painter, rect, scene, &affine, position, size, colour, palette);
        } else {
            painter.add(Shape::convex_polygon(
                quad(&affine, position, size, rect.min),
                colour,
                Stroke::NONE,
            ));
        }
    }

    paint_chrome(painter, rect, &main, viewport, palette);
}

#[allow(clippy::too_many_arguments)]
fn paint_words(
    painter: &Painter,
    rect: Rect,
    scene: &Scene,
    affine: &Affine,
    position: Point,
    size: Size,
    colour: Color32,
    palette: &LandingPalette,
) {
    let words: Vec<&str> = scene
        .select(&format!(".{} h1", TEXT_CLASS))
        .into_iter()
        .filter_map(|id| scene.get(id).and_then(|node| node.text.as_deref()))
        .collect();
    if words.is_empty() {
        return;
    }

    let line_height = size.height / words.len() as f64;
    let font = scaled_font(&palette.hero_font, affine.scale_factor());
    for (line, word) in words.iter().enumerate() {
        let anchor = Point::new(
            position.x + size.width / 2.0,
            position.y + line_height * (line as f64 + 0.5),
        );
        painter.text(
            to_screen(affine.apply(anchor), rect.min),
            Align2::CENTER_CENTER,
            word,
            font.clone(),
            colour,
        );
    }
}

/// Navbar brand, scroll hint and product shot; they ride on the container only
fn paint_chrome(painter: &Painter, rect: Rect, main: &Affine, viewport: Size, palette: &LandingPalette) {
    let font = scaled_font(&palette.chrome_font, main.scale_factor());
    painter.text(
        to_screen(main.apply(Point::new(40.0, 40.0)), rect.min),
        Align2::LEFT_CENTER,
        "Rockstar",
        font.clone(),
        palette.chrome,
    );
    painter.text(
        to_screen(main.apply(Point::new(40.0, viewport.height - 30.0)), rect.min),
        Align2::LEFT_CENTER,
        "Scroll Down",
        font,
        palette.chrome,
    );

    let product = Size::new(viewport.width * 0.12, viewport.height * 0.06);
    let position = Point::new(
        (viewport.width - product.width) / 2.0,
        viewport.height - product.height - 16.0,
    );
    painter.add(Shape::convex_polygon(
        quad(main, position, product, rect.min),
        palette.product,
        Stroke::NONE,
    ));
}
