//! Press-and-hold gesture
//!
//! Neutral is only reachable by holding its control for the full hold
//! duration. A short tap never emits anything.
//!
//! Time is passed in explicitly as wrapping milliseconds so the recognizer
//! can be driven from an async timer in firmware and from plain numbers in
//! tests.

use super::{GearIntent, GestureError};
use headunit_protocol::GearState;

/// Hold time required to select Neutral
pub const HOLD_DURATION_MS: u32 = 600;

/// Single-shot hold timer
#[derive(Debug, Clone)]
pub struct HoldGesture {
    duration_ms: u32,
    pressed_at: Option<u32>,
    triggered: bool,
}

impl Default for HoldGesture {
    fn default() -> Self {
        Self::new()
    }
}

impl HoldGesture {
    pub const fn new() -> Self {
        Self::with_duration(HOLD_DURATION_MS)
    }

    pub const fn with_duration(duration_ms: u32) -> Self {
        Self {
            duration_ms,
            pressed_at: None,
            triggered: false,
        }
    }

    /// Finger down: arm the timer
    ///
    /// A second press while held restarts the timer.
    pub fn press(&mut self, now_ms: u32) {
        self.pressed_at = Some(now_ms);
        self.triggered = false;
    }

    /// Check the timer; fires at most once per press
    pub fn poll(&mut self, now_ms: u32) -> Option<GearIntent> {
        let pressed_at = self.pressed_at?;
        if self.triggered || !self.elapsed(pressed_at, now_ms) {
            return None;
        }
        self.triggered = true;
        Some(GearIntent::touch(GearState::Neutral))
    }

    /// Finger lifted: stop the timer
    ///
    /// If the release is observed at or after the deadline the timer ran out
    /// while the finger was still down, so it fires here unless it already
    /// fired from [`poll`](Self::poll).
    pub fn release(&mut self, now_ms: u32) -> Result<Option<GearIntent>, GestureError> {
        let pressed_at = self
            .pressed_at
            .take()
            .ok_or(GestureError::OrphanedGestureEvent)?;

        if self.triggered || !self.elapsed(pressed_at, now_ms) {
            return Ok(None);
        }
        self.triggered = true;
        Ok(Some(GearIntent::touch(GearState::Neutral)))
    }

    /// When the pending timer expires, if one is armed
    pub fn deadline(&self) -> Option<u32> {
        match self.pressed_at {
            Some(pressed_at) if !self.triggered => Some(pressed_at.wrapping_add(self.duration_ms)),
            _ => None,
        }
    }

    /// Drop the press without firing
    pub fn cancel(&mut self) {
        self.pressed_at = None;
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed_at.is_some()
    }

    /// True once the current (or last) press has fired
    pub fn triggered(&self) -> bool {
        self.triggered
    }

    fn elapsed(&self, pressed_at: u32, now_ms: u32) -> bool {
        now_ms.wrapping_sub(pressed_at) >= self.duration_ms
    }
}
