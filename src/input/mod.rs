pub mod events;
pub mod listeners;
pub mod parallax;

// Re-export the essential types
pub use events::{EventHandled, InputEvent};
pub use listeners::{ListenerId, PointerListeners};
pub use parallax::ParallaxOffsets;
