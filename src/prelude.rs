//! Prelude module for common landing-reveal types and traits
//!
//! This module re-exports the most commonly used types, traits, and functions
//! for easy importing with `use landing_reveal::prelude::*;`

pub use crate::core::{
    config::{
        AssetManifest, FrameTimingConfig, LandingConfig, LandingProfile, ParallaxConfig,
        RevealConfig, SplashConfig,
    },
    geo::{Point, Size},
};

pub use crate::animation::{
    easing::Ease,
    engine::{AnimationEngine, Tweener},
    props::{Property, Unit, Value},
    stream::{ProgressStream, ThresholdWatch},
    timeline::Timeline,
    tween::{TweenId, TweenVars},
};

pub use crate::input::{
    events::{EventHandled, InputEvent},
    listeners::{ListenerId, PointerListeners},
    parallax::ParallaxOffsets,
};

pub use crate::scene::{
    node::{ElementKind, Node, NodeId},
    selector::Selector,
    style::{Style, TransformOrigin},
    transform::Affine,
    tree::Scene,
};

pub use crate::view::{
    landing::LandingView,
    state::{RevealFlag, ViewState},
};

#[cfg(feature = "egui")]
pub use crate::ui::{
    style::LandingPalette,
    widget::{LandingWidget, LandingWidgetConfig},
    UiLandingExt,
};

pub use crate::{Error as LandingError, Result};

pub use fxhash::{FxHashMap as HashMap, FxHashSet as HashSet};
