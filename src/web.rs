//! Browser binding: mounts a landing view into a DOM root and keeps the DOM in
//! step with the scene.
//!
//! Structural changes (splash removed, main built) re-render the root's
//! markup; style-only changes patch the `style` attribute of the affected
//! elements, found by their `data-node` attribute.

use crate::{
    animation::engine::Tweener,
    core::{
        config::LandingConfig,
        geo::{Point, Size},
        logging::init_console_logger,
    },
    input::events::EventHandled,
    scene::html,
    view::landing::LandingView,
    LandingError,
};
use wasm_bindgen::prelude::*;
use web_sys::Element;

fn js_error(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Main WASM entry point
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();

    init_console_logger(log::Level::Info);
    log::info!("landing-reveal initialized");
}

/// A landing view bound to a DOM element
#[wasm_bindgen]
pub struct WebLanding {
    view: LandingView<Tweener>,
    root: Element,
    rendered_revision: Option<u64>,
}

#[wasm_bindgen]
impl WebLanding {
    /// Bind to the first element matching `root_selector`, with an optional
    /// JSON configuration document
    #[wasm_bindgen(constructor)]
    pub fn new(root_selector: &str, config_json: Option<String>) -> Result<WebLanding, JsValue> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(|| js_error(LandingError::Render("no document available".into())))?;
        let root = document
            .query_selector(root_selector)?
            .ok_or_else(|| {
                js_error(LandingError::Render(format!("no element matches {}", root_selector)))
            })?;

        let config = match config_json {
            Some(json) => LandingConfig::from_json_str(&json).map_err(js_error)?,
            None => LandingConfig::default(),
        };

        Ok(WebLanding {
            view: LandingView::new(Tweener::new(), config),
            root,
            rendered_revision: None,
        })
    }

    pub fn mount(&mut self) -> Result<(), JsValue> {
        self.view.mount();
        self.sync()
    }

    /// Advance by `dt_ms` milliseconds (a `requestAnimationFrame` delta) and
    /// flush the changes to the DOM
    pub fn tick(&mut self, dt_ms: f64) -> Result<(), JsValue> {
        self.view.tick(dt_ms / 1000.0);
        self.sync()
    }

    /// Forward a `mousemove` in client coordinates. True if parallax ran.
    #[wasm_bindgen(js_name = pointerMove)]
    pub fn pointer_move(&mut self, x: f64, y: f64, width: f64, height: f64) -> bool {
        self.view.pointer_move(Point::new(x, y), Size::new(width, height)) == EventHandled::Handled
    }

    pub fn unmount(&mut self) {
        self.view.unmount();
        self.root.set_inner_html("");
        self.rendered_revision = None;
    }

    #[wasm_bindgen(js_name = isRevealed)]
    pub fn is_revealed(&self) -> bool {
        self.view.is_revealed()
    }

    /// Current markup of the scene
    pub fn html(&self) -> String {
        html::render(self.view.scene())
    }

    fn sync(&mut self) -> Result<(), JsValue> {
        let revision = self.view.scene().revision();
        let dirty = self.view.scene_mut().take_dirty();

        if self.rendered_revision != Some(revision) {
            self.root.set_inner_html(&html::render(self.view.scene()));
            self.rendered_revision = Some(revision);
            log::debug!("re-rendered landing root at revision {}", revision);
            return Ok(());
        }

        for id in dirty {
            let Some(style) = self.view.scene().style(id) else {
                continue;
            };
            let selector = format!("[data-node=\"{}\"]", id.0);
            if let Some(element) = self.root.query_selector(&selector)? {
                element.set_attribute("style", &style.to_css())?;
            }
        }
        Ok(())
    }
}
