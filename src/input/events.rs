use crate::core::geo::{Point, Size};
use serde::{Deserialize, Serialize};

/// Input events the landing view reacts to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum InputEvent {
    /// Pointer moved, in client coordinates, over a viewport of the given size
    PointerMove { position: Point, viewport: Size },
    /// Pointer left the page
    PointerLeave,
    /// Viewport/window resize
    Resize { size: Size },
}

/// Whether an event was handled
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EventHandled {
    Handled,
    NotHandled,
}

impl InputEvent {
    pub fn pointer_move(x: f64, y: f64, viewport: Size) -> Self {
        InputEvent::PointerMove {
            position: Point::new(x, y),
            viewport,
        }
    }
}
