//! # landing-reveal
//!
//! A landing page with a splash-mask reveal and a parallax hero section.
//!
//! The page is modelled as a [`Scene`] tree whose node styles are driven by a
//! small tween engine ([`Tweener`]). A [`LandingView`] owns the reveal flag,
//! runs the splash and reveal sequences, and forwards pointer movement to the
//! parallax listener. Back ends render the scene as HTML, paint it with egui,
//! or bind it to a browser DOM.

pub mod animation;
pub mod core;
pub mod input;
pub mod prelude;
pub mod scene;
pub mod view;

#[cfg(feature = "egui")]
pub mod ui;

#[cfg(feature = "wasm")]
pub mod web;

pub use crate::core::constants;

// Re-export public API
pub use core::{
    config::{LandingConfig, LandingProfile},
    geo::{Point, Size},
};

pub use animation::{
    easing::Ease,
    engine::{AnimationEngine, Tweener},
    timeline::Timeline,
    tween::{TweenId, TweenVars},
};

pub use input::{events::InputEvent, parallax::ParallaxOffsets};

pub use scene::{node::NodeId, tree::Scene};

pub use view::{landing::LandingView, state::ViewState};

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Common error types
#[derive(Debug, thiserror::Error)]
pub enum LandingError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Unknown ease: {0}")]
    InvalidEase(String),

    #[error("Invalid selector: {0}")]
    InvalidSelector(String),

    #[error("Render error: {0}")]
    Render(String),
}

/// Error type alias for convenience
pub type Error = LandingError;
