pub mod easing;
pub mod engine;
pub mod props;
pub mod stream;
pub mod timeline;
pub mod tween;

// Re-export commonly used types and functions for convenience
pub use easing::Ease;
pub use engine::{AnimationEngine, Tweener};
pub use props::{Interpolatable, Property, Unit, Value};
pub use stream::{ProgressStream, ThresholdWatch};
pub use timeline::{Timeline, TimelineEntry};
pub use tween::{Tween, TweenId, TweenState, TweenVars};
