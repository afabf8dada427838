//! On-screen gear panel
//!
//! Routes touch events from the panel link to the adapter that owns each
//! control and forwards the resulting intents to a [`GearIntentSink`]:
//!
//! - P / R / D: click semantics, select on release
//! - N: press-and-hold only
//! - drag car: vertical drag gesture

use super::{DragFeedback, DragGesture, GearIntent, GestureError, HoldGesture, TapSelector};
use crate::gear::GearIntentSink;
use headunit_protocol::{GearControl, GearState, TouchEvent, TouchPhase};

/// Gesture routing for one panel
pub struct GearPanel<'a, S: GearIntentSink> {
    sink: &'a S,
    taps: TapSelector,
    hold: HoldGesture,
    drag: DragGesture,
    pressed_button: Option<GearControl>,
}

impl<'a, S: GearIntentSink> GearPanel<'a, S> {
    pub fn new(sink: &'a S) -> Self {
        Self::with_gestures(sink, HoldGesture::new(), DragGesture::new())
    }

    /// Create a panel with preconfigured gesture recognizers
    pub fn with_gestures(sink: &'a S, hold: HoldGesture, drag: DragGesture) -> Self {
        Self {
            sink,
            taps: TapSelector::new(),
            hold,
            drag,
            pressed_button: None,
        }
    }

    /// Handle one touch event
    ///
    /// Returns the intent forwarded to the sink, if any.
    pub fn handle(
        &mut self,
        event: TouchEvent,
        now_ms: u32,
    ) -> Result<Option<GearIntent>, GestureError> {
        let intent = match (event.control, event.phase) {
            (GearControl::NeutralButton, TouchPhase::Press) => {
                self.hold.press(now_ms);
                None
            }
            (GearControl::NeutralButton, TouchPhase::Move) => {
                if !self.hold.is_pressed() {
                    return Err(GestureError::OrphanedGestureEvent);
                }
                None
            }
            (GearControl::NeutralButton, TouchPhase::Release) => self.hold.release(now_ms)?,

            (GearControl::DragCar, TouchPhase::Press) => {
                self.drag.press(event.y);
                None
            }
            (GearControl::DragCar, TouchPhase::Move) => {
                self.drag.move_to(event.y)?;
                None
            }
            (GearControl::DragCar, TouchPhase::Release) => self.drag.release(event.y)?,

            (button, TouchPhase::Press) => {
                self.pressed_button = Some(button);
                None
            }
            (button, TouchPhase::Move) => {
                if self.pressed_button != Some(button) {
                    return Err(GestureError::OrphanedGestureEvent);
                }
                None
            }
            (button, TouchPhase::Release) => {
                if self.pressed_button != Some(button) {
                    return Err(GestureError::OrphanedGestureEvent);
                }
                self.pressed_button = None;
                button_gear(button).and_then(|gear| self.taps.tap(gear))
            }
        };

        if let Some(intent) = intent {
            self.sink.notify_gear_intent(intent);
        }
        Ok(intent)
    }

    /// Advance timers: fires the hold gesture and steps drag decay
    pub fn tick(&mut self, now_ms: u32) -> Option<GearIntent> {
        self.drag.decay_step();

        let intent = self.hold.poll(now_ms)?;
        self.sink.notify_gear_intent(intent);
        Some(intent)
    }

    /// Drop every in-progress gesture, e.g. when the panel link resets
    pub fn cancel(&mut self) {
        self.hold.cancel();
        self.drag.cancel();
        self.pressed_button = None;
    }

    /// Pending hold deadline, for arming a timer
    pub fn hold_deadline(&self) -> Option<u32> {
        self.hold.deadline()
    }

    /// True while the drag car is easing back after release
    pub fn is_animating(&self) -> bool {
        self.drag.is_animating()
    }

    /// Drag car position for the panel to draw
    pub fn drag_feedback(&self) -> DragFeedback {
        self.drag.feedback()
    }
}

fn button_gear(control: GearControl) -> Option<GearState> {
    match control {
        GearControl::ParkButton => Some(GearState::Park),
        GearControl::ReverseButton => Some(GearState::Reverse),
        GearControl::NeutralButton => Some(GearState::Neutral),
        GearControl::DriveButton => Some(GearState::Drive),
        GearControl::DragCar => None,
    }
}
