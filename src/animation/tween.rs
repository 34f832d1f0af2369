use crate::animation::easing::Ease;
use crate::animation::props::{Interpolatable, Property, Value};
use crate::core::constants::DEFAULT_TWEEN_DURATION;
use crate::scene::node::NodeId;
use crate::scene::style::{value_for, TransformOrigin};
use crate::scene::tree::Scene;
use serde::{Deserialize, Serialize};

/// Handle to a tween scheduled on an engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TweenId(pub u64);

/// What a tween animates to and how
#[derive(Debug, Clone, PartialEq)]
pub struct TweenVars {
    pub props: Vec<(Property, Value)>,
    /// Seconds
    pub duration: f64,
    /// Seconds before the tween starts; negative starts it part-way through
    pub delay: f64,
    pub ease: Ease,
    pub origin: Option<TransformOrigin>,
}

impl Default for TweenVars {
    fn default() -> Self {
        Self {
            props: Vec::new(),
            duration: DEFAULT_TWEEN_DURATION,
            delay: 0.0,
            ease: Ease::default(),
            origin: None,
        }
    }
}

impl TweenVars {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a property target, replacing an earlier one for the same property
    pub fn prop(mut self, property: Property, value: Value) -> Self {
        match self.props.iter_mut().find(|(p, _)| *p == property) {
            Some(entry) => entry.1 = value,
            None => self.props.push((property, value)),
        }
        self
    }

    pub fn x(self, value: Value) -> Self {
        self.prop(Property::X, value)
    }

    pub fn rotate(self, degrees: f64) -> Self {
        self.prop(Property::Rotate, value_for(Property::Rotate, degrees))
    }

    pub fn scale(self, scale: f64) -> Self {
        self.prop(Property::Scale, value_for(Property::Scale, scale))
    }

    pub fn opacity(self, opacity: f64) -> Self {
        self.prop(Property::Opacity, value_for(Property::Opacity, opacity))
    }

    pub fn bottom(self, value: Value) -> Self {
        self.prop(Property::Bottom, value)
    }

    pub fn duration(mut self, seconds: f64) -> Self {
        self.duration = seconds;
        self
    }

    pub fn delay(mut self, seconds: f64) -> Self {
        self.delay = seconds;
        self
    }

    pub fn ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    pub fn origin(mut self, origin: TransformOrigin) -> Self {
        self.origin = Some(origin);
        self
    }

    pub fn target(&self, property: Property) -> Option<Value> {
        self.props
            .iter()
            .find(|(p, _)| *p == property)
            .map(|(_, v)| *v)
    }
}

/// State of a tween animation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TweenState {
    /// Scheduled, start time not reached
    Pending,
    Running,
    Finished,
}

/// One property of one matched node
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Track {
    pub node: NodeId,
    pub property: Property,
    pub from: Value,
    pub to: Value,
}

/// A time-bounded interpolation of style properties on every node a selector matches
#[derive(Debug, Clone)]
pub struct Tween {
    pub id: TweenId,
    pub selector: String,
    pub vars: TweenVars,
    /// Engine time at which progress is 0
    pub start_at: f64,
    pub state: TweenState,
    tracks: Vec<Track>,
    initialized: bool,
}

impl Tween {
    pub(crate) fn new(id: TweenId, selector: &str, vars: TweenVars, start_at: f64) -> Self {
        Self {
            id,
            selector: selector.to_string(),
            vars,
            start_at,
            state: TweenState::Pending,
            tracks: Vec::new(),
            initialized: false,
        }
    }

    /// Linear playback progress at engine time `time`, in [0, 1]
    pub fn progress_at(&self, time: f64) -> f64 {
        if time < self.start_at {
            return 0.0;
        }
        if self.vars.duration <= 0.0 {
            return 1.0;
        }
        ((time - self.start_at) / self.vars.duration).clamp(0.0, 1.0)
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn is_live(&self) -> bool {
        self.state != TweenState::Finished
    }

    /// Number of node/property pairs still driven by this tween
    pub fn track_count(&self) -> usize {
        self.tracks.len()
    }

    /// Resolve targets and record start values. Returns the claimed
    /// node/property pairs so earlier tweens can let go of them.
    pub(crate) fn init(&mut self, scene: &mut Scene) -> Vec<(NodeId, Property)> {
        self.initialized = true;
        let nodes = scene.select(&self.selector);
        if nodes.is_empty() {
            log::debug!("tween {:?}: no element matches '{}'", self.id, self.selector);
        }

        for node in nodes {
            if let Some(origin) = self.vars.origin {
                scene.set_origin(node, origin);
            }
            let Some(style) = scene.style(node) else {
                continue;
            };
            for (property, to) in &self.vars.props {
                self.tracks.push(Track {
                    node,
                    property: *property,
                    from: style.get(*property),
                    to: *to,
                });
            }
        }

        self.tracks
            .iter()
            .map(|track| (track.node, track.property))
            .collect()
    }

    /// Drop tracks another tween has taken over
    pub(crate) fn release(&mut self, claimed: &[(NodeId, Property)]) {
        self.tracks
            .retain(|track| !claimed.contains(&(track.node, track.property)));
    }

    pub(crate) fn render(&self, scene: &mut Scene, time: f64) {
        let eased = self.vars.ease.apply(self.progress_at(time));
        for track in &self.tracks {
            scene.set_property(track.node, track.property, track.from.lerp(&track.to, eased));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::node::Node;
    use crate::scene::style::Style;

    #[test]
    fn test_vars_builder_replaces_duplicates() {
        let vars = TweenVars::new().scale(2.0).rotate(10.0).scale(3.0);
        assert_eq!(vars.props.len(), 2);
        assert_eq!(vars.target(Property::Scale), Some(Value::number(3.0)));
        assert_eq!(vars.target(Property::Rotate), Some(Value::deg(10.0)));
        assert_eq!(vars.duration, DEFAULT_TWEEN_DURATION);
        assert_eq!(vars.ease, Ease::Power1Out);
    }

    #[test]
    fn test_progress_is_clamped_and_offset() {
        let tween = Tween::new(TweenId(1), ".a", TweenVars::new().duration(2.0), 1.0);
        assert_eq!(tween.progress_at(0.5), 0.0);
        assert_eq!(tween.progress_at(2.0), 0.5);
        assert_eq!(tween.progress_at(9.0), 1.0);

        let instant = Tween::new(TweenId(2), ".a", TweenVars::new().duration(0.0), 0.0);
        assert_eq!(instant.progress_at(0.0), 1.0);
    }

    #[test]
    fn test_init_captures_from_values_per_node() {
        let mut scene = Scene::new();
        let a = scene.append_root(Node::div().class("layer").style(Style::posed(-20.0, 1.5)));
        let b = scene.append_root(Node::div().class("layer").style(Style::posed(-3.0, 1.8)));

        let mut tween = Tween::new(
            TweenId(1),
            ".layer",
            TweenVars::new().rotate(0.0).ease(Ease::Linear).duration(1.0),
            0.0,
        );
        let claimed = tween.init(&mut scene);
        assert_eq!(claimed, vec![(a, Property::Rotate), (b, Property::Rotate)]);

        tween.render(&mut scene, 0.5);
        assert_eq!(scene.style(a).unwrap().rotate, -10.0);
        assert_eq!(scene.style(b).unwrap().rotate, -1.5);
    }

    #[test]
    fn test_missing_targets_are_silent() {
        let mut scene = Scene::new();
        let mut tween = Tween::new(TweenId(1), ".absent", TweenVars::new().scale(2.0), 0.0);
        assert!(tween.init(&mut scene).is_empty());
        tween.render(&mut scene, 1.0);
        assert_eq!(tween.track_count(), 0);
    }
}
