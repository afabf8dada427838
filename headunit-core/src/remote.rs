//! Inbound vehicle gear
//!
//! Gear bytes from the vehicle bus use the same single-byte mapping as the
//! cluster publish path. They are applied with the `Throttle` source tag,
//! which the publish hook ignores, so a received gear is never echoed back.

use crate::gear::GearError;
use crate::input::GearIntent;
use headunit_protocol::GearState;

/// Decode a gear byte received from the vehicle bus
///
/// Out-of-range bytes are rejected rather than coerced to Park.
pub fn decode_remote_gear(byte: u8) -> Result<GearIntent, GearError> {
    GearState::from_byte(byte)
        .map(GearIntent::throttle)
        .ok_or(GearError::InvalidRemoteGear(byte))
}

/// Vehicle gear feed with reject accounting
#[derive(Debug, Clone, Default)]
pub struct ThrottleFeed {
    accepted: u32,
    rejected: u32,
}

impl ThrottleFeed {
    pub const fn new() -> Self {
        Self {
            accepted: 0,
            rejected: 0,
        }
    }

    /// Map one inbound gear byte to an intent
    pub fn receive(&mut self, byte: u8) -> Result<GearIntent, GearError> {
        match decode_remote_gear(byte) {
            Ok(intent) => {
                self.accepted = self.accepted.wrapping_add(1);
                Ok(intent)
            }
            Err(e) => {
                self.rejected = self.rejected.wrapping_add(1);
                Err(e)
            }
        }
    }

    pub fn accepted(&self) -> u32 {
        self.accepted
    }

    pub fn rejected(&self) -> u32 {
        self.rejected
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gear::{GearSource, GearStateManager};
    use crate::GearIntentSink;

    #[test]
    fn test_valid_bytes() {
        for gear in GearState::ALL {
            let intent = decode_remote_gear(gear.to_byte()).unwrap();
            assert_eq!(intent.gear, gear);
            assert_eq!(intent.source, GearSource::Throttle);
        }
    }

    #[test]
    fn test_invalid_byte_never_becomes_park() {
        let manager = GearStateManager::new();
        manager.set_gear_from_touch(GearState::Drive);

        let result = decode_remote_gear(9);
        assert_eq!(result, Err(GearError::InvalidRemoteGear(9)));
        if let Ok(intent) = result {
            manager.notify_gear_intent(intent);
        }
        assert_eq!(manager.gear(), GearState::Drive);
        assert_eq!(manager.last_source(), GearSource::Touch);
    }

    #[test]
    fn test_feed_counts() {
        let mut feed = ThrottleFeed::new();
        assert!(feed.receive(1).is_ok());
        assert!(feed.receive(4).is_err());
        assert!(feed.receive(0xFF).is_err());
        assert_eq!(feed.accepted(), 1);
        assert_eq!(feed.rejected(), 2);
    }
}
