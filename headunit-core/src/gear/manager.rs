//! Gear state manager
//!
//! Writes are applied immediately: the manager overwrites `(gear, source)`
//! and then calls every observer before returning. There is no pending
//! state and no transition guard. Any gear is reachable from any other in
//! one call, including Drive to Reverse while moving; the vehicle side is
//! responsible for gating that.

use core::cell::Cell;

use heapless::Vec;

use super::{GearChange, GearIntentSink, GearObserver, GearSource, SubscribeError};
use crate::input::GearIntent;
use headunit_protocol::GearState;

/// Maximum number of observers
pub const MAX_OBSERVERS: usize = 8;

/// The single authoritative holder of the current gear
///
/// Observers are wired with [`subscribe`](Self::subscribe), which needs
/// `&mut self`, before the manager is shared with its input sources. After
/// that every operation takes `&self`. State lives in `Cell`s, so the type
/// is `!Sync` and cannot be written from two threads at once.
pub struct GearStateManager<'a> {
    gear: Cell<GearState>,
    source: Cell<GearSource>,
    observers: Vec<&'a dyn GearObserver, MAX_OBSERVERS>,
}

impl Default for GearStateManager<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> GearStateManager<'a> {
    /// Create a manager in `(Park, Touch)` with no observers
    pub fn new() -> Self {
        Self {
            gear: Cell::new(GearState::Park),
            source: Cell::new(GearSource::Touch),
            observers: Vec::new(),
        }
    }

    /// Register an observer
    ///
    /// Observers are notified in registration order.
    pub fn subscribe(&mut self, observer: &'a dyn GearObserver) -> Result<(), SubscribeError> {
        self.observers
            .push(observer)
            .map_err(|_| SubscribeError::Full)
    }

    /// Number of registered observers
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Overwrite the current gear and source, then notify every observer
    ///
    /// Repeating the current gear still notifies.
    pub fn set_gear(&self, gear: GearState, source: GearSource) {
        self.gear.set(gear);
        self.source.set(source);

        let change = GearChange { gear, source };
        for observer in self.observers.iter() {
            observer.on_gear_changed(change);
        }
    }

    pub fn set_gear_from_touch(&self, gear: GearState) {
        self.set_gear(gear, GearSource::Touch);
    }

    pub fn set_gear_from_throttle(&self, gear: GearState) {
        self.set_gear(gear, GearSource::Throttle);
    }

    pub fn set_gear_from_button(&self, gear: GearState) {
        self.set_gear(gear, GearSource::Button);
    }

    /// Current gear
    pub fn gear(&self) -> GearState {
        self.gear.get()
    }

    /// Source of the most recent write
    pub fn last_source(&self) -> GearSource {
        self.source.get()
    }
}

impl GearIntentSink for GearStateManager<'_> {
    fn notify_gear_intent(&self, intent: GearIntent) {
        self.set_gear(intent.gear, intent.source);
    }
}
