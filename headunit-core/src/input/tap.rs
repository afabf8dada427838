//! Direct-select buttons
//!
//! P, R and D select immediately. N has no tap path: the only way to
//! Neutral is the hold gesture, whichever widget is touched.

use super::GearIntent;
use headunit_protocol::GearState;

/// Tap-to-select policy for the on-screen gear buttons
#[derive(Debug, Clone, Copy, Default)]
pub struct TapSelector;

impl TapSelector {
    pub const fn new() -> Self {
        Self
    }

    /// Intent for a completed tap on `gear`, or `None` for Neutral
    pub fn tap(&self, gear: GearState) -> Option<GearIntent> {
        match gear {
            GearState::Neutral => None,
            gear => Some(GearIntent::touch(gear)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direct_select() {
        let taps = TapSelector::new();
        assert_eq!(taps.tap(GearState::Park), Some(GearIntent::touch(GearState::Park)));
        assert_eq!(
            taps.tap(GearState::Reverse),
            Some(GearIntent::touch(GearState::Reverse))
        );
        assert_eq!(taps.tap(GearState::Drive), Some(GearIntent::touch(GearState::Drive)));
    }

    #[test]
    fn test_tap_to_neutral_is_impossible() {
        assert_eq!(TapSelector::new().tap(GearState::Neutral), None);
    }
}
