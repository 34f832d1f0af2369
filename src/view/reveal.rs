//! Layer tweens run once the page is revealed, and the parallax follow.

use crate::animation::engine::AnimationEngine;
use crate::animation::props::Value;
use crate::animation::tween::{TweenId, TweenVars};
use crate::core::config::{ParallaxConfig, RevealConfig};
use crate::input::parallax::ParallaxOffsets;
use crate::scene::markup::{BACKGROUND_CLASS, CHARACTER_CLASS, MAIN_CLASS, SKY_CLASS, TEXT_CLASS};

/// Selector and target for each layer, in the order they are started
pub fn reveal_targets(config: &RevealConfig) -> Vec<(String, TweenVars)> {
    let settle = |scale: f64, delay: f64| {
        TweenVars::new()
            .scale(scale)
            .rotate(0.0)
            .duration(config.duration)
            .delay(delay)
            .ease(config.ease)
    };

    vec![
        (
            format!(".{}", MAIN_CLASS),
            settle(1.0, config.container_offset),
        ),
        (
            format!(".{}", SKY_CLASS),
            settle(config.sky_scale, config.layer_offset),
        ),
        (
            format!(".{}", BACKGROUND_CLASS),
            settle(config.background_scale, config.layer_offset),
        ),
        (
            format!(".{}", CHARACTER_CLASS),
            settle(config.character_scale, config.layer_offset)
                .x(Value::percent(-50.0))
                .bottom(Value::percent(-15.0)),
        ),
        (
            format!(".{}", TEXT_CLASS),
            settle(config.text_scale, config.layer_offset),
        ),
    ]
}

/// Start the five layer tweens
pub fn start_reveal<E: AnimationEngine>(engine: &mut E, config: &RevealConfig) -> Vec<TweenId> {
    reveal_targets(config)
        .into_iter()
        .map(|(selector, vars)| engine.to(&selector, vars))
        .collect()
}

/// Re-target the three following layers
pub fn apply_parallax<E: AnimationEngine>(
    engine: &mut E,
    offsets: &ParallaxOffsets,
    config: &ParallaxConfig,
) -> [TweenId; 3] {
    let follow = |value: Value| {
        TweenVars::new()
            .x(value)
            .duration(config.follow_duration)
            .ease(config.follow_ease)
    };

    [
        engine.to(
            &format!(".{} .{}", MAIN_CLASS, TEXT_CLASS),
            follow(Value::percent(offsets.text_percent)),
        ),
        engine.to(&format!(".{}", SKY_CLASS), follow(Value::px(offsets.sky_px))),
        engine.to(
            &format!(".{}", BACKGROUND_CLASS),
            follow(Value::px(offsets.background_px)),
        ),
    ]
}
