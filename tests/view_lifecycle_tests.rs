use landing_reveal::{
    animation::{
        props::{Unit, Value},
        stream::ProgressStream,
    },
    input::events::EventHandled,
    scene::html,
    AnimationEngine, InputEvent, LandingConfig, LandingError, LandingProfile, LandingView, Point,
    Scene, Size,
    Timeline, TweenId, TweenVars, Tweener, ViewState,
};

/// End-to-end behaviour of the landing view as a host drives it
#[cfg(test)]
mod view_lifecycle_tests {
    use super::*;

    const FRAME: f64 = 1.0 / 60.0;

    /// Engine that records every selector it is asked to animate
    #[derive(Debug, Default)]
    struct RecordingEngine {
        inner: Tweener,
        targets: Vec<String>,
    }

    impl AnimationEngine for RecordingEngine {
        fn to(&mut self, selector: &str, vars: TweenVars) -> TweenId {
            self.targets.push(selector.to_string());
            self.inner.to(selector, vars)
        }

        fn play(&mut self, timeline: Timeline) -> Vec<TweenId> {
            for entry in timeline.entries() {
                self.targets.push(entry.selector.clone());
            }
            self.inner.play(timeline)
        }

        fn progress(&self, id: TweenId) -> Option<f64> {
            self.inner.progress(id)
        }

        fn subscribe(&mut self, id: TweenId) -> ProgressStream {
            self.inner.subscribe(id)
        }

        fn kill(&mut self, id: TweenId) -> bool {
            self.inner.kill(id)
        }

        fn kill_all(&mut self) {
            self.inner.kill_all()
        }

        fn tick(&mut self, scene: &mut Scene, dt: f64) {
            self.inner.tick(scene, dt)
        }

        fn time(&self) -> f64 {
            self.inner.time()
        }

        fn active_count(&self) -> usize {
            self.inner.active_count()
        }
    }

    fn cinematic() -> LandingView<Tweener> {
        LandingView::new(Tweener::new(), LandingProfile::Cinematic.resolve().unwrap())
    }

    fn run_for<E: AnimationEngine>(view: &mut LandingView<E>, seconds: f64) {
        let frames = (seconds / FRAME).ceil() as usize;
        for _ in 0..frames {
            view.tick(FRAME);
        }
    }

    fn run_until_revealed<E: AnimationEngine>(view: &mut LandingView<E>) -> usize {
        let mut frames = 0;
        while !view.is_revealed() && frames < 10_000 {
            view.tick(FRAME);
            frames += 1;
        }
        frames
    }

    fn x_of(view: &LandingView<Tweener>, selector: &str) -> Value {
        let id = view.scene().first(selector).expect("layer present");
        view.scene().style(id).expect("style").x
    }

    fn assert_close(value: Value, amount: f64, unit: Unit) {
        assert_eq!(value.unit, unit);
        assert!(
            (value.amount - amount).abs() < 1e-6,
            "expected {} got {}",
            amount,
            value.amount
        );
    }

    #[test]
    fn test_mount_shows_only_the_splash() {
        let mut view = cinematic();
        view.mount();

        assert!(matches!(view.state(), Some(ViewState::Splash(_))));
        assert!(view.scene().first(".svg").is_some());
        assert!(view.scene().first("#viMask .vi-mask-group").is_some());
        assert!(view.scene().first(".main").is_none());
        assert!(!view.is_revealed());
        assert_eq!(view.listener_count(), 0);
    }

    #[test]
    fn test_reveal_fires_when_second_tween_reaches_ninety_percent() {
        let mut view = cinematic();
        view.mount();

        // rotate 2s, scale starts at 0.2s, 90% of 2s later is 2.0s
        let frames = run_until_revealed(&mut view);
        let elapsed = frames as f64 * FRAME;
        assert!((elapsed - 2.0).abs() <= 2.0 * FRAME, "revealed at {}", elapsed);

        assert!(matches!(view.state(), Some(ViewState::Revealed(_))));
        assert!(view.scene().first(".svg").is_none());
        assert_eq!(view.scene().select(".main").len(), 1);
        assert_eq!(view.reveal_tweens().len(), 5);
        assert_eq!(view.listener_count(), 1);
    }

    #[test]
    fn test_transition_happens_once() {
        let mut view = cinematic();
        view.mount();
        run_until_revealed(&mut view);

        let state = view.state();
        let tweens = view.reveal_tweens().to_vec();
        run_for(&mut view, 5.0);

        assert!(view.is_revealed());
        assert_eq!(view.state(), state);
        assert_eq!(view.reveal_tweens(), tweens.as_slice());
        assert_eq!(view.scene().select(".main").len(), 1);
        assert_eq!(view.scene().select(".svg").len(), 0);
        assert_eq!(view.listener_count(), 1);
    }

    #[test]
    fn test_layers_settle_on_their_targets() {
        let mut view = cinematic();
        view.mount();
        run_until_revealed(&mut view);
        run_for(&mut view, 3.0);

        let scene = view.scene();
        let style = |selector: &str| *scene.style(scene.first(selector).unwrap()).unwrap();

        assert!((style(".main").scale - 1.0).abs() < 1e-6);
        assert!((style(".sky").scale - 1.1).abs() < 1e-6);
        assert!((style(".bg").scale - 1.1).abs() < 1e-6);
        assert!((style(".character").scale - 1.2).abs() < 1e-6);
        assert!(style(".text").rotate.abs() < 1e-6);
        assert_close(style(".character").x, -50.0, Unit::Percent);
        assert_eq!(engine_idle(&view), 0);
    }

    fn engine_idle(view: &LandingView<Tweener>) -> usize {
        view.engine().active_count()
    }

    #[test]
    fn test_unmount_before_threshold_never_starts_reveal() {
        let mut view = LandingView::new(RecordingEngine::default(), LandingConfig::default());
        view.mount();
        run_for(&mut view, 1.0);
        assert!(!view.is_revealed());

        view.unmount();
        run_for(&mut view, 5.0);

        assert!(!view.is_mounted());
        assert!(!view.is_revealed());
        assert!(view.scene().is_empty());
        assert_eq!(view.listener_count(), 0);
        assert!(view.engine().targets.iter().all(|t| t == ".vi-mask-group"));
        assert_eq!(view.engine().active_count(), 0);
    }

    #[test]
    fn test_remount_cycles_keep_one_listener() {
        let mut view = LandingView::new(Tweener::new(), LandingProfile::Brisk.resolve().unwrap());
        for _ in 0..3 {
            view.mount();
            run_until_revealed(&mut view);
            assert!(view.listener_count() <= 1);
            view.unmount();
            assert_eq!(view.listener_count(), 0);
            assert!(!view.is_revealed());
        }
    }

    #[test]
    fn test_pointer_before_reveal_is_ignored() {
        let mut view = cinematic();
        let event = InputEvent::pointer_move(100.0, 100.0, Size::new(1280.0, 720.0));
        assert_eq!(view.handle_event(&event), EventHandled::NotHandled);

        view.mount();
        let active = view.engine().active_count();
        assert_eq!(view.handle_event(&event), EventHandled::NotHandled);
        assert_eq!(view.engine().active_count(), active);
    }

    #[test]
    fn test_parallax_centre_and_right_edge() {
        let mut view = cinematic();
        view.mount();
        run_until_revealed(&mut view);
        run_for(&mut view, 3.0);

        let viewport = Size::new(1280.0, 720.0);
        let centre = InputEvent::pointer_move(640.0, 360.0, viewport);
        assert_eq!(view.handle_event(&centre), EventHandled::Handled);
        run_for(&mut view, 1.0);
        assert_close(x_of(&view, ".sky"), 0.0, Unit::Px);
        assert_close(x_of(&view, ".bg"), 0.0, Unit::Px);
        assert_close(x_of(&view, ".main .text"), 0.0, Unit::Percent);

        let right = InputEvent::pointer_move(1280.0, 360.0, viewport);
        assert_eq!(view.handle_event(&right), EventHandled::Handled);
        run_for(&mut view, 1.0);
        assert_close(x_of(&view, ".sky"), 20.0, Unit::Px);
        assert_close(x_of(&view, ".bg"), 34.0, Unit::Px);
        assert_close(x_of(&view, ".main .text"), 8.0, Unit::Percent);
    }

    #[test]
    fn test_latest_pointer_move_wins() {
        let mut view = cinematic();
        view.mount();
        run_until_revealed(&mut view);
        run_for(&mut view, 3.0);

        let viewport = Size::new(1000.0, 800.0);
        view.pointer_move(Point::new(1000.0, 0.0), viewport);
        view.tick(FRAME);
        view.pointer_move(Point::new(0.0, 0.0), viewport);
        run_for(&mut view, 1.0);

        assert_close(x_of(&view, ".sky"), -20.0, Unit::Px);
        assert_close(x_of(&view, ".bg"), -34.0, Unit::Px);
    }

    #[test]
    fn test_parallax_can_be_disabled() {
        let mut config = LandingConfig::default();
        config.parallax.enabled = false;
        let mut view = LandingView::new(Tweener::new(), config);
        view.mount();
        run_until_revealed(&mut view);

        let event = InputEvent::pointer_move(0.0, 0.0, Size::new(800.0, 600.0));
        assert_eq!(view.handle_event(&event), EventHandled::NotHandled);
    }

    #[test]
    fn test_resize_updates_viewport() {
        let mut view = cinematic();
        let size = Size::new(640.0, 480.0);
        assert_eq!(view.handle_event(&InputEvent::Resize { size }), EventHandled::Handled);
        assert_eq!(view.viewport(), size);
    }

    #[test]
    fn test_unrunnable_custom_config_is_refused() {
        let mut config = LandingConfig::default();
        config.splash.reveal_threshold = 1.5;
        let profile = LandingProfile::Custom(config.clone());
        assert!(matches!(profile.resolve(), Err(LandingError::Config(_))));
        assert!(LandingView::try_new(Tweener::new(), config).is_err());

        let mut config = LandingConfig::default();
        config.frame.max_step = -1.0;
        assert!(LandingProfile::Custom(config.clone()).resolve().is_err());
        assert!(LandingView::try_new(Tweener::new(), config).is_err());
    }

    #[test]
    fn test_long_frame_is_clamped() {
        let mut view = cinematic();
        view.mount();
        view.tick(30.0);
        assert!((view.engine().time() - 0.1).abs() < 1e-9);
        assert!(!view.is_revealed());
    }

    #[test]
    fn test_markup_follows_state() {
        let mut view = LandingView::new(Tweener::new(), LandingProfile::Brisk.resolve().unwrap());
        view.mount();
        let splash = html::render(view.scene());
        assert!(splash.contains("id=\"viMask\""));
        assert!(splash.contains(">VI<"));
        assert!(!splash.contains("grand"));

        run_until_revealed(&mut view);
        let page = html::render(view.scene());
        assert!(!page.contains("viMask"));
        assert!(page.contains("class=\"main\""));
        assert!(page.contains(">grand<"));
        assert!(page.contains("Download Now"));
    }

    #[test]
    fn test_config_from_partial_json() {
        let config =
            LandingConfig::from_json_str(r#"{"parallax": {"enabled": false}}"#).unwrap();
        assert!(!config.parallax.enabled);
        assert_eq!(config.splash, LandingConfig::default().splash);
        assert!(LandingConfig::from_json_str("{not json").is_err());
    }
}
