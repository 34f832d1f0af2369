use crate::animation::stream::{progress_channel, ProgressStream};
use crate::animation::timeline::Timeline;
use crate::animation::tween::{Tween, TweenId, TweenState, TweenVars};
use crate::scene::tree::Scene;
use crossbeam_channel::Sender;
use fxhash::FxHashMap;

/// Capabilities the landing view needs from an animation engine.
///
/// The view holds its engine by value, so hosts can inject a recording or
/// deterministic implementation in place of [`Tweener`].
pub trait AnimationEngine {
    /// Animate every node matching `selector` toward `vars`, starting `vars.delay`
    /// seconds from now
    fn to(&mut self, selector: &str, vars: TweenVars) -> TweenId;

    /// Schedule a timeline starting now; ids come back in entry order
    fn play(&mut self, timeline: Timeline) -> Vec<TweenId>;

    /// Linear playback progress of a live tween
    fn progress(&self, id: TweenId) -> Option<f64>;

    /// Subscribe to per-frame progress samples of a tween
    fn subscribe(&mut self, id: TweenId) -> ProgressStream;

    /// Stop a tween where it is. Returns false if it was not live.
    fn kill(&mut self, id: TweenId) -> bool;

    fn kill_all(&mut self);

    /// Advance by `dt` seconds and write the frame into `scene`
    fn tick(&mut self, scene: &mut Scene, dt: f64);

    /// Seconds elapsed on the engine clock
    fn time(&self) -> f64;

    /// Live (pending or running) tweens
    fn active_count(&self) -> usize;
}

/// The bundled engine: tweens render in creation order, and a tween that
/// starts on a node property takes it over from earlier live tweens.
#[derive(Debug, Default)]
pub struct Tweener {
    time: f64,
    next_id: u64,
    tweens: Vec<Tween>,
    subscribers: FxHashMap<TweenId, Vec<Sender<f64>>>,
}

impl Tweener {
    pub fn new() -> Self {
        Self::default()
    }

    fn schedule(&mut self, selector: &str, vars: TweenVars, start_at: f64) -> TweenId {
        let id = TweenId(self.next_id);
        self.next_id += 1;
        self.tweens.push(Tween::new(id, selector, vars, start_at));
        id
    }

    pub fn tween(&self, id: TweenId) -> Option<&Tween> {
        self.tweens.iter().find(|tween| tween.id == id)
    }

    fn publish(&mut self, id: TweenId, progress: f64) {
        if let Some(senders) = self.subscribers.get_mut(&id) {
            senders.retain(|tx| tx.send(progress).is_ok());
        }
    }
}

impl AnimationEngine for Tweener {
    fn to(&mut self, selector: &str, vars: TweenVars) -> TweenId {
        let start_at = self.time + vars.delay;
        self.schedule(selector, vars, start_at)
    }

    fn play(&mut self, timeline: Timeline) -> Vec<TweenId> {
        let start = self.time;
        timeline
            .into_entries()
            .into_iter()
            .map(|entry| self.schedule(&entry.selector, entry.vars, start + entry.offset))
            .collect()
    }

    fn progress(&self, id: TweenId) -> Option<f64> {
        self.tween(id).map(|tween| tween.progress_at(self.time))
    }

    fn subscribe(&mut self, id: TweenId) -> ProgressStream {
        let (tx, stream) = progress_channel();
        if self.tween(id).is_some() {
            self.subscribers.entry(id).or_default().push(tx);
        }
        stream
    }

    fn kill(&mut self, id: TweenId) -> bool {
        self.subscribers.remove(&id);
        match self.tweens.iter().position(|tween| tween.id == id) {
            Some(index) => {
                self.tweens.remove(index);
                log::debug!("killed tween {:?}", id);
                true
            }
            None => false,
        }
    }

    fn kill_all(&mut self) {
        self.tweens.clear();
        self.subscribers.clear();
    }

    fn tick(&mut self, scene: &mut Scene, dt: f64) {
        self.time += dt.max(0.0);
        let now = self.time;

        let mut samples = Vec::new();
        for index in 0..self.tweens.len() {
            let (earlier, rest) = self.tweens.split_at_mut(index);
            let Some((tween, later)) = rest.split_first_mut() else {
                break;
            };
            if now < tween.start_at {
                continue;
            }

            // the tween that starts last owns a node/property, wherever it sits in the list
            if !tween.is_initialized() {
                let claimed = tween.init(scene);
                if !claimed.is_empty() {
                    for other in earlier.iter_mut().chain(later.iter_mut()) {
                        if other.is_initialized() {
                            other.release(&claimed);
                        }
                    }
                }
            }

            tween.state = TweenState::Running;
            tween.render(scene, now);

            let progress = tween.progress_at(now);
            if progress >= 1.0 {
                tween.state = TweenState::Finished;
            }
            samples.push((tween.id, progress));
        }

        for (id, progress) in samples {
            self.publish(id, progress);
        }

        self.tweens.retain(Tween::is_live);
        let tweens = &self.tweens;
        self.subscribers.retain(|id, senders| {
            !senders.is_empty() && tweens.iter().any(|tween| tween.id == *id)
        });
    }

    fn time(&self) -> f64 {
        self.time
    }

    fn active_count(&self) -> usize {
        self.tweens.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::easing::Ease;
    use crate::animation::props::{Property, Value};
    use crate::scene::node::Node;
    use crate::scene::style::Style;

    fn scene_with(class: &str, style: Style) -> (Scene, crate::scene::node::NodeId) {
        let mut scene = Scene::new();
        let id = scene.append_root(Node::div().class(class).style(style));
        (scene, id)
    }

    fn run(engine: &mut Tweener, scene: &mut Scene, seconds: f64) {
        let steps = (seconds / 0.01).round() as usize;
        for _ in 0..steps {
            engine.tick(scene, 0.01);
        }
    }

    #[test]
    fn test_tween_reaches_target_and_retires() {
        let (mut scene, node) = scene_with("layer", Style::posed(-20.0, 1.5));
        let mut engine = Tweener::new();
        let id = engine.to(".layer", TweenVars::new().rotate(0.0).scale(1.1).duration(1.0));

        run(&mut engine, &mut scene, 0.5);
        assert!(engine.progress(id).unwrap() > 0.45);

        run(&mut engine, &mut scene, 0.6);
        assert_eq!(engine.progress(id), None);
        assert_eq!(engine.active_count(), 0);
        let style = scene.style(node).unwrap();
        assert!(style.rotate.abs() < 1e-9);
        assert!((style.scale - 1.1).abs() < 1e-9);
    }

    #[test]
    fn test_negative_delay_starts_part_way() {
        let (mut scene, node) = scene_with("main", Style::posed(-10.0, 1.7));
        let mut engine = Tweener::new();
        let id = engine.to(
            ".main",
            TweenVars::new().rotate(0.0).duration(2.0).delay(-1.0).ease(Ease::Linear),
        );
        assert_eq!(engine.progress(id), Some(0.5));

        engine.tick(&mut scene, 0.0);
        assert!((scene.style(node).unwrap().rotate + 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_positive_delay_waits() {
        let (mut scene, node) = scene_with("a", Style::default());
        let mut engine = Tweener::new();
        engine.to(".a", TweenVars::new().opacity(0.0).delay(0.5).duration(0.5));
        run(&mut engine, &mut scene, 0.4);
        assert_eq!(scene.style(node).unwrap().opacity, 1.0);
        run(&mut engine, &mut scene, 0.7);
        assert_eq!(scene.style(node).unwrap().opacity, 0.0);
    }

    #[test]
    fn test_timeline_chains_on_the_engine_clock() {
        let (mut scene, node) = scene_with("mask", Style::default());
        let mut engine = Tweener::new();
        let ids = engine.play(
            Timeline::new()
                .to(".mask", TweenVars::new().rotate(10.0).duration(2.0))
                .to(".mask", TweenVars::new().scale(10.0).duration(2.0).delay(-1.8)),
        );
        assert_eq!(ids.len(), 2);

        run(&mut engine, &mut scene, 0.1);
        assert_eq!(engine.progress(ids[1]), Some(0.0));
        assert_eq!(scene.style(node).unwrap().scale, 1.0);

        run(&mut engine, &mut scene, 0.3);
        assert!(engine.progress(ids[1]).unwrap() > 0.0);
        assert!(scene.style(node).unwrap().scale > 1.0);
    }

    #[test]
    fn test_later_tween_takes_over_property() {
        let (mut scene, node) = scene_with("sky", Style::default());
        let mut engine = Tweener::new();
        let first = engine.to(".sky", TweenVars::new().x(Value::px(20.0)).duration(1.0));
        engine.tick(&mut scene, 0.1);
        let second = engine.to(".sky", TweenVars::new().x(Value::px(-20.0)).duration(1.0));

        run(&mut engine, &mut scene, 1.2);
        assert!((scene.style(node).unwrap().x.amount + 20.0).abs() < 1e-9);
        assert!(engine.tween(first).is_none());
        assert!(engine.tween(second).is_none());
    }

    #[test]
    fn test_takeover_only_touches_shared_properties() {
        let (mut scene, node) = scene_with("sky", Style::default());
        let mut engine = Tweener::new();
        let first = engine.to(".sky", TweenVars::new().x(Value::px(20.0)).scale(2.0).duration(1.0));
        engine.tick(&mut scene, 0.1);
        engine.to(".sky", TweenVars::new().x(Value::px(0.0)).duration(0.2));
        engine.tick(&mut scene, 0.01);
        assert_eq!(engine.tween(first).map(Tween::track_count), Some(1));

        run(&mut engine, &mut scene, 1.0);
        assert!((scene.style(node).unwrap().scale - 2.0).abs() < 1e-9);
        assert_eq!(scene.style(node).unwrap().get(Property::X), Value::px(0.0));
    }

    #[test]
    fn test_kill_stops_in_place_and_closes_stream() {
        let (mut scene, node) = scene_with("a", Style::default());
        let mut engine = Tweener::new();
        let id = engine.to(".a", TweenVars::new().scale(3.0).duration(1.0).ease(Ease::Linear));
        let stream = engine.subscribe(id);

        run(&mut engine, &mut scene, 0.5);
        assert_eq!(stream.drain().len(), 50);
        assert!(engine.kill(id));
        assert!(!engine.kill(id));

        let frozen = scene.style(node).unwrap().scale;
        run(&mut engine, &mut scene, 0.5);
        assert_eq!(scene.style(node).unwrap().scale, frozen);
        assert!(stream.try_next().is_none());
    }

    #[test]
    fn test_progress_samples_are_monotonic() {
        let (mut scene, _) = scene_with("a", Style::default());
        let mut engine = Tweener::new();
        let id = engine.to(".a", TweenVars::new().scale(2.0).duration(0.25));
        let stream = engine.subscribe(id);
        run(&mut engine, &mut scene, 0.5);

        let samples = stream.drain();
        assert!(samples.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(samples.last().copied(), Some(1.0));
    }

    #[test]
    fn test_subscribing_to_unknown_tween_is_closed() {
        let mut engine = Tweener::new();
        let mut watch = engine.subscribe(TweenId(42)).until(0.9);
        assert!(!watch.poll());
        assert!(!watch.is_armed());
    }

    #[test]
    fn test_tween_without_targets_still_completes() {
        let mut scene = Scene::new();
        let mut engine = Tweener::new();
        let id = engine.to(".missing", TweenVars::new().scale(2.0).duration(0.1));
        run(&mut engine, &mut scene, 0.2);
        assert_eq!(engine.progress(id), None);
        assert!(scene.take_dirty().is_empty());
    }

    #[test]
    fn test_delayed_tween_takes_over_when_it_starts() {
        let (mut scene, node) = scene_with("sky", Style::default());
        let mut engine = Tweener::new();
        engine.to(".sky", TweenVars::new().x(Value::px(50.0)).duration(0.5).delay(0.5));
        let running = engine.to(".sky", TweenVars::new().x(Value::px(-20.0)).duration(2.0));

        run(&mut engine, &mut scene, 0.6);
        assert_eq!(engine.tween(running).map(Tween::track_count), Some(0));

        run(&mut engine, &mut scene, 2.0);
        assert!((scene.style(node).unwrap().x.amount - 50.0).abs() < 1e-9);
        assert_eq!(engine.active_count(), 0);
    }
}
