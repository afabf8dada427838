//! Physical gear button
//!
//! Time-based edge detection with debouncing. The button is active-low:
//! a low level means pressed, and only the press edge emits an intent.

use super::GearIntent;
use headunit_protocol::GearState;

/// Minimum time between accepted level changes
pub const BUTTON_DEBOUNCE_MS: u32 = 50;

/// Debounced button bound to one gear
#[derive(Debug, Clone)]
pub struct ButtonInput {
    gear: GearState,
    debounce_ms: u32,
    was_pressed: bool,
    last_change: Option<u32>,
}

impl ButtonInput {
    pub const fn new(gear: GearState) -> Self {
        Self::with_debounce(gear, BUTTON_DEBOUNCE_MS)
    }

    pub const fn with_debounce(gear: GearState, debounce_ms: u32) -> Self {
        Self {
            gear,
            debounce_ms,
            was_pressed: false,
            last_change: None,
        }
    }

    /// Feed the current pin level
    ///
    /// Returns an intent only on an accepted press (falling) edge.
    pub fn update(&mut self, is_low: bool, now_ms: u32) -> Option<GearIntent> {
        if is_low == self.was_pressed {
            return None;
        }
        if let Some(last) = self.last_change {
            if now_ms.wrapping_sub(last) < self.debounce_ms {
                return None;
            }
        }

        self.was_pressed = is_low;
        self.last_change = Some(now_ms);
        is_low.then_some(GearIntent::button(self.gear))
    }

    /// Gear this button selects
    pub fn gear(&self) -> GearState {
        self.gear
    }

    pub fn is_pressed(&self) -> bool {
        self.was_pressed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_edge_fires() {
        let mut button = ButtonInput::new(GearState::Reverse);
        assert_eq!(
            button.update(true, 0),
            Some(GearIntent::button(GearState::Reverse))
        );
        // Held: no repeat
        assert_eq!(button.update(true, 500), None);
    }

    #[test]
    fn test_release_edge_is_silent() {
        let mut button = ButtonInput::new(GearState::Drive);
        button.update(true, 0);
        assert_eq!(button.update(false, 100), None);
        assert!(!button.is_pressed());
    }

    #[test]
    fn test_bounce_is_rejected() {
        let mut button = ButtonInput::new(GearState::Drive);
        assert!(button.update(true, 1000).is_some());
        // Contact bounce within the debounce window
        assert_eq!(button.update(false, 1010), None);
        assert_eq!(button.update(true, 1020), None);
        assert!(button.is_pressed());

        assert_eq!(button.update(false, 1100), None);
        assert!(button.update(true, 1200).is_some());
    }

    #[test]
    fn test_first_edge_has_no_debounce() {
        let mut button = ButtonInput::with_debounce(GearState::Park, 1000);
        assert!(button.update(true, 5).is_some());
    }
}
