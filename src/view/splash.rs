//! The mask animation that plays on mount.

use crate::animation::engine::AnimationEngine;
use crate::animation::stream::ThresholdWatch;
use crate::animation::timeline::Timeline;
use crate::animation::tween::{TweenId, TweenVars};
use crate::core::config::SplashConfig;
use crate::scene::markup::MASK_GROUP_CLASS;
use crate::scene::style::TransformOrigin;

/// Rotate the mask group, then blow it up and fade it out
pub fn splash_timeline(config: &SplashConfig) -> Timeline {
    let target = format!(".{}", MASK_GROUP_CLASS);
    Timeline::new()
        .to(
            &target,
            TweenVars::new()
                .rotate(config.rotate_to)
                .duration(config.rotate_duration)
                .ease(config.rotate_ease)
                .origin(TransformOrigin::CENTER),
        )
        .to(
            &target,
            TweenVars::new()
                .scale(config.scale_to)
                .opacity(0.0)
                .duration(config.scale_duration)
                .delay(config.scale_offset)
                .ease(config.scale_ease)
                .origin(TransformOrigin::CENTER),
        )
}

/// A running splash and the watch on its final tween
#[derive(Debug)]
pub struct SplashSequence {
    tweens: Vec<TweenId>,
    watch: Option<ThresholdWatch>,
}

impl SplashSequence {
    pub fn start<E: AnimationEngine>(engine: &mut E, config: &SplashConfig) -> Self {
        let tweens = engine.play(splash_timeline(config));
        let watch = tweens
            .last()
            .map(|scale| engine.subscribe(*scale).until(config.reveal_threshold));
        log::debug!("splash started with tweens {:?}", tweens);
        Self { tweens, watch }
    }

    /// The scale-and-fade tween whose progress gates the reveal
    pub fn gate(&self) -> Option<TweenId> {
        self.tweens.last().copied()
    }

    /// True once, on the frame the gate tween crosses the threshold
    pub fn poll(&mut self) -> bool {
        self.watch.as_mut().map(ThresholdWatch::poll).unwrap_or(false)
    }

    /// Stop the gate tween before it runs to completion
    pub fn halt<E: AnimationEngine>(&self, engine: &mut E) {
        if let Some(gate) = self.gate() {
            engine.kill(gate);
        }
    }
}
