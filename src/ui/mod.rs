pub mod style;
pub mod widget;

pub use style::{LandingPalette, LandingThemes};

pub use widget::{LandingWidget, LandingWidgetConfig};

use crate::{animation::engine::Tweener, core::config::LandingConfig, view::landing::LandingView};

/// Shorthands for hosting a landing view inside an egui layout
pub trait UiLandingExt {
    /// Drive and paint `view`, filling the available space
    fn landing(&mut self, view: &mut LandingView<Tweener>) -> egui::Response;

    /// Same, at a fixed size
    fn landing_sized(&mut self, view: &mut LandingView<Tweener>, size: egui::Vec2) -> egui::Response;
}

impl UiLandingExt for egui::Ui {
    fn landing(&mut self, view: &mut LandingView<Tweener>) -> egui::Response {
        self.add(LandingWidget::new(view))
    }

    fn landing_sized(&mut self, view: &mut LandingView<Tweener>, size: egui::Vec2) -> egui::Response {
        self.add(LandingWidget::new(view).size(size))
    }
}

/// A view on the default engine, ready to hand to [`UiLandingExt::landing`]
pub fn default_view(config: LandingConfig) -> LandingView<Tweener> {
    LandingView::new(Tweener::new(), config)
}
