//! Input adapters
//!
//! Each adapter turns a raw event stream (pointer phases, button levels,
//! vehicle bytes) into [`GearIntent`]s. Adapters know nothing about each
//! other or about the manager; [`GearPanel`] and the firmware decide where
//! intents go.

mod button;
mod drag;
mod hold;
mod intent;
mod panel;
mod tap;

pub use button::{ButtonInput, BUTTON_DEBOUNCE_MS};
pub use drag::{
    DragFeedback, DragGesture, DECAY_FACTOR, DECAY_FRAME_MS, DRAG_PREVIEW_OFFSET, DRAG_THRESHOLD,
    DRAG_VISUAL_LIMIT,
};
pub use hold::{HoldGesture, HOLD_DURATION_MS};
pub use intent::GearIntent;
pub use panel::GearPanel;
pub use crate::remote::ThrottleFeed;
pub use tap::TapSelector;

/// Malformed gesture input
///
/// Callers treat it as a no-op; the firmware logs it at debug level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GestureError {
    /// Move or release with no matching press
    OrphanedGestureEvent,
}
