//! Gear change intents

use crate::gear::GearSource;
use headunit_protocol::GearState;

/// A candidate gear change, not applied until it reaches the manager
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GearIntent {
    pub gear: GearState,
    pub source: GearSource,
}

impl GearIntent {
    pub const fn new(gear: GearState, source: GearSource) -> Self {
        Self { gear, source }
    }

    pub const fn touch(gear: GearState) -> Self {
        Self::new(gear, GearSource::Touch)
    }

    pub const fn throttle(gear: GearState) -> Self {
        Self::new(gear, GearSource::Throttle)
    }

    pub const fn button(gear: GearState) -> Self {
        Self::new(gear, GearSource::Button)
    }
}
