//! Gear state and its single authoritative owner
//!
//! [`GearStateManager`] holds the current `(gear, source)` pair and fans out
//! every write to its observers. Input adapters never touch it directly;
//! they produce [`GearIntent`](crate::input::GearIntent)s for a
//! [`GearIntentSink`].

mod manager;
mod source;

pub use manager::{GearStateManager, MAX_OBSERVERS};
pub use source::{GearSource, SOURCE_LABEL_LEN};

use crate::input::GearIntent;
use headunit_protocol::GearState;

/// A gear change as delivered to observers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GearChange {
    /// Gear after the write
    pub gear: GearState,
    /// Source that performed the write
    pub source: GearSource,
}

/// Receives every applied gear change, in subscription order
///
/// Observers are called synchronously from inside the write and must not
/// block. Implementations use interior mutability for their own state.
pub trait GearObserver {
    fn on_gear_changed(&self, change: GearChange);
}

/// Entry point for input adapters
///
/// Called synchronously and cannot fail. An async caller that must wait for
/// room in a queue uses `()` and forwards the intents the adapter returns.
pub trait GearIntentSink {
    fn notify_gear_intent(&self, intent: GearIntent);
}

impl GearIntentSink for () {
    fn notify_gear_intent(&self, _intent: GearIntent) {}
}

impl<T: GearIntentSink + ?Sized> GearIntentSink for &T {
    fn notify_gear_intent(&self, intent: GearIntent) {
        (**self).notify_gear_intent(intent)
    }
}

/// Errors at the gear boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GearError {
    /// Vehicle reported a gear byte outside 0..=3
    InvalidRemoteGear(u8),
}

/// Observer registration failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SubscribeError {
    /// All observer slots are taken
    Full,
}
