use crate::animation::engine::AnimationEngine;
use crate::animation::tween::TweenId;
use crate::core::config::LandingConfig;
use crate::core::geo::{Point, Size};
use crate::input::events::{EventHandled, InputEvent};
use crate::input::listeners::{ListenerId, PointerListeners};
use crate::input::parallax::ParallaxOffsets;
use crate::scene::markup::{build_main, build_splash};
use crate::scene::tree::Scene;
use crate::view::reveal::{apply_parallax, start_reveal};
use crate::view::splash::SplashSequence;
use crate::view::state::{RevealFlag, RevealedTree, SplashTree, ViewState};
use crate::LandingError;

/// Reveal tweens and the listener bound after them
#[derive(Debug)]
struct RevealEffect {
    tweens: Vec<TweenId>,
    listener: ListenerId,
}

/// Everything that lives exactly as long as one mount
#[derive(Debug)]
struct Mounted {
    revealed: RevealFlag,
    state: ViewState,
    splash: Option<SplashSequence>,
    reveal: Option<RevealEffect>,
}

/// The landing page component.
///
/// The host drives it: [`mount`](Self::mount) once, [`tick`](Self::tick) every
/// frame, [`pointer_move`](Self::pointer_move) (or
/// [`handle_event`](Self::handle_event)) for input. The animation engine
/// is injected and owned by the view.
#[derive(Debug)]
pub struct LandingView<E: AnimationEngine> {
    engine: E,
    config: LandingConfig,
    scene: Scene,
    listeners: PointerListeners,
    viewport: Size,
    mounted: Option<Mounted>,
}

impl<E: AnimationEngine> LandingView<E> {
    /// Build a view over a config the caller has already validated, such as a
    /// resolved [`LandingProfile`](crate::core::config::LandingProfile) or one
    /// parsed with [`LandingConfig::from_json_str`].
    pub fn new(engine: E, config: LandingConfig) -> Self {
        Self {
            engine,
            config,
            scene: Scene::new(),
            listeners: PointerListeners::new(),
            viewport: Size::default(),
            mounted: None,
        }
    }

    /// Validate `config` first; a rejected config could never reach the reveal
    pub fn try_new(engine: E, config: LandingConfig) -> Result<Self, LandingError> {
        config.validate()?;
        Ok(Self::new(engine, config))
    }

    /// Build the splash overlay and start the splash sequence
    pub fn mount(&mut self) {
        if self.mounted.is_some() {
            log::debug!("landing view already mounted");
            return;
        }

        let overlay = build_splash(&mut self.scene, &self.config.assets);
        let splash = SplashSequence::start(&mut self.engine, &self.config.splash);
        log::info!(
            "landing view mounted; reveal expected after {:.2}s",
            self.config.splash.reveal_at()
        );

        self.mounted = Some(Mounted {
            revealed: RevealFlag::default(),
            state: ViewState::Splash(SplashTree { overlay }),
            splash: Some(splash),
            reveal: None,
        });
    }

    /// Stop everything this mount started and drop its tree
    pub fn unmount(&mut self) {
        let Some(mounted) = self.mounted.take() else {
            return;
        };
        if let Some(reveal) = &mounted.reveal {
            self.listeners.unbind(reveal.listener);
        }
        self.engine.kill_all();
        self.scene.clear();
        log::info!("landing view unmounted (revealed: {})", mounted.revealed.is_set());
    }

    /// Advance one frame by `dt` seconds
    pub fn tick(&mut self, dt: f64) {
        let Some(mounted) = self.mounted.as_mut() else {
            return;
        };

        let dt = self.config.frame.clamp_step(dt);
        self.engine.tick(&mut self.scene, dt);

        let crossed = mounted.splash.as_mut().map(SplashSequence::poll).unwrap_or(false);
        if crossed && mounted.revealed.raise() {
            if let Some(splash) = mounted.splash.take() {
                splash.halt(&mut self.engine);
            }
            if let ViewState::Splash(tree) = mounted.state {
                self.scene.remove(tree.overlay);
            }
            let main = build_main(&mut self.scene, &self.config.assets);
            mounted.state = ViewState::Revealed(RevealedTree { main });
            log::info!("splash threshold crossed at {:.2}s; content revealed", self.engine.time());
        }

        if mounted.revealed.is_set() && mounted.reveal.is_none() {
            if let ViewState::Revealed(tree) = mounted.state {
                let tweens = start_reveal(&mut self.engine, &self.config.reveal);
                let listener = self.listeners.bind(tree.main);
                log::debug!("reveal started with tweens {:?}; pointer listener {:?}", tweens, listener);
                mounted.reveal = Some(RevealEffect { tweens, listener });
            }
        }
    }

    /// Route a host input event to the operation it stands for
    pub fn handle_event(&mut self, event: &InputEvent) -> EventHandled {
        match event {
            InputEvent::PointerMove { position, viewport } => self.pointer_move(*position, *viewport),
            InputEvent::Resize { size } => {
                self.set_viewport(*size);
                EventHandled::Handled
            }
            InputEvent::PointerLeave => EventHandled::NotHandled,
        }
    }

    /// Feed the pointer position to the parallax listener. Ignored until the
    /// content is revealed and the listener is bound.
    pub fn pointer_move(&mut self, position: Point, viewport: Size) -> EventHandled {
        self.viewport = viewport;
        let Some(reveal) = self.mounted.as_ref().and_then(|m| m.reveal.as_ref()) else {
            return EventHandled::NotHandled;
        };
        if !self.config.parallax.enabled
            || !self.listeners.live(&self.scene).contains(&reveal.listener)
        {
            return EventHandled::NotHandled;
        }

        let offsets = ParallaxOffsets::compute(position.x, viewport.width, &self.config.parallax);
        apply_parallax(&mut self.engine, &offsets, &self.config.parallax);
        EventHandled::Handled
    }

    pub fn set_viewport(&mut self, size: Size) {
        self.viewport = size;
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted.is_some()
    }

    pub fn is_revealed(&self) -> bool {
        self.mounted
            .as_ref()
            .map(|m| m.revealed.is_set())
            .unwrap_or(false)
    }

    /// Whether the layer tweens have been started for this mount
    pub fn reveal_started(&self) -> bool {
        self.mounted
            .as_ref()
            .map(|m| m.reveal.is_some())
            .unwrap_or(false)
    }

    pub fn reveal_tweens(&self) -> &[TweenId] {
        self.mounted
            .as_ref()
            .and_then(|m| m.reveal.as_ref())
            .map(|r| r.tweens.as_slice())
            .unwrap_or(&[])
    }

    pub fn state(&self) -> Option<ViewState> {
        self.mounted.as_ref().map(|m| m.state)
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Mutable access for back ends that consume dirty tracking
    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn config(&self) -> &LandingConfig {
        &self.config
    }

    pub fn viewport(&self) -> Size {
        self.viewport
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}
