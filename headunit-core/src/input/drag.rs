//! Drag-car gesture
//!
//! Vertical drag on the car widget: up selects Drive, down selects Reverse.
//! The decision uses the raw travel at release. The visual offset is clamped
//! separately so the car cannot leave the widget, and after release it eases
//! back to rest over a few frames.

use super::{GearIntent, GestureError};
use headunit_protocol::GearState;

/// Travel needed to select a gear, in display units (strict inequality)
pub const DRAG_THRESHOLD: i32 = 35;

/// Visual offset bound, in display units
pub const DRAG_VISUAL_LIMIT: i16 = 50;

/// Offset beyond which the target arrow is highlighted while dragging
pub const DRAG_PREVIEW_OFFSET: i16 = 12;

/// Decay multiplier applied once per frame after release
pub const DECAY_FACTOR: f32 = 0.72;

/// Decay frame period in milliseconds
pub const DECAY_FRAME_MS: u32 = 16;

/// What the panel needs to draw the drag car
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DragFeedback {
    /// Clamped visual offset, negative is up
    pub offset: i16,
    /// Arrow to highlight, only while the finger is down
    pub preview: Option<GearState>,
}

/// Drag gesture recognizer
#[derive(Debug, Clone)]
pub struct DragGesture {
    threshold: i32,
    visual_limit: i16,
    origin_y: i16,
    offset: f32,
    dragging: bool,
    animating: bool,
}

impl Default for DragGesture {
    fn default() -> Self {
        Self::new()
    }
}

impl DragGesture {
    pub const fn new() -> Self {
        Self::with_limits(DRAG_THRESHOLD, DRAG_VISUAL_LIMIT)
    }

    pub const fn with_limits(threshold: i32, visual_limit: i16) -> Self {
        Self {
            threshold,
            visual_limit,
            origin_y: 0,
            offset: 0.0,
            dragging: false,
            animating: false,
        }
    }

    /// Finger down: record the origin and cancel any running decay
    pub fn press(&mut self, y: i16) {
        self.origin_y = y;
        self.offset = 0.0;
        self.dragging = true;
        self.animating = false;
    }

    /// Finger moved: returns the clamped visual offset
    pub fn move_to(&mut self, y: i16) -> Result<i16, GestureError> {
        if !self.dragging {
            return Err(GestureError::OrphanedGestureEvent);
        }
        let limit = self.visual_limit as i32;
        let offset = self.delta(y).max(-limit).min(limit) as i16;
        self.offset = offset as f32;
        Ok(offset)
    }

    /// Finger lifted: decide on the unclamped travel
    pub fn release(&mut self, y: i16) -> Result<Option<GearIntent>, GestureError> {
        if !self.dragging {
            return Err(GestureError::OrphanedGestureEvent);
        }
        self.dragging = false;
        self.animating = self.offset != 0.0;

        let delta = self.delta(y);
        let gear = if delta < -self.threshold {
            Some(GearState::Drive)
        } else if delta > self.threshold {
            Some(GearState::Reverse)
        } else {
            None
        };
        Ok(gear.map(GearIntent::touch))
    }

    /// Advance the release animation by one frame
    ///
    /// Returns true while the offset is still easing back to rest.
    pub fn decay_step(&mut self) -> bool {
        if !self.animating {
            return false;
        }
        self.offset *= DECAY_FACTOR;
        if self.offset > -1.0 && self.offset < 1.0 {
            self.offset = 0.0;
            self.animating = false;
        }
        self.animating
    }

    /// Drop an in-progress drag without emitting anything
    pub fn cancel(&mut self) {
        self.dragging = false;
        self.animating = false;
        self.offset = 0.0;
    }

    /// Current visual offset in display units
    pub fn visual_offset(&self) -> i16 {
        self.offset as i16
    }

    /// Gear whose arrow should be highlighted during a drag
    pub fn preview(&self) -> Option<GearState> {
        if !self.dragging {
            return None;
        }
        match self.visual_offset() {
            o if o < -DRAG_PREVIEW_OFFSET => Some(GearState::Drive),
            o if o > DRAG_PREVIEW_OFFSET => Some(GearState::Reverse),
            _ => None,
        }
    }

    /// Current offset and highlighted arrow
    pub fn feedback(&self) -> DragFeedback {
        DragFeedback {
            offset: self.visual_offset(),
            preview: self.preview(),
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn is_animating(&self) -> bool {
        self.animating
    }

    fn delta(&self, y: i16) -> i32 {
        y as i32 - self.origin_y as i32
    }
}
