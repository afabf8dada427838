//! Instrument cluster publish hook
//!
//! Only touch-originated changes are published. Throttle and button changes
//! either came from the vehicle or are already known to it, and publishing
//! them would loop back through the inbound gear feed.

use core::cell::Cell;

use crate::gear::{GearChange, GearObserver, GearSource};

/// Outbound gear transport
///
/// Must not block; a full queue drops the value.
pub trait GearPublisher {
    fn publish_gear(&self, ordinal: u8);
}

/// Publishes touch-originated gear changes as a single byte
pub struct PublishHook<P: GearPublisher> {
    publisher: P,
    published: Cell<u32>,
}

impl<P: GearPublisher> PublishHook<P> {
    pub fn new(publisher: P) -> Self {
        Self {
            publisher,
            published: Cell::new(0),
        }
    }

    /// Number of values handed to the publisher
    pub fn published(&self) -> u32 {
        self.published.get()
    }

    pub fn publisher(&self) -> &P {
        &self.publisher
    }
}

impl<P: GearPublisher> GearObserver for PublishHook<P> {
    fn on_gear_changed(&self, change: GearChange) {
        if change.source != GearSource::Touch {
            return;
        }
        self.publisher.publish_gear(change.gear.to_byte());
        self.published.set(self.published.get().wrapping_add(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use headunit_protocol::GearState;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Sent(RefCell<std::vec::Vec<u8>>);

    impl GearPublisher for Sent {
        fn publish_gear(&self, ordinal: u8) {
            self.0.borrow_mut().push(ordinal);
        }
    }

    #[test]
    fn test_touch_publishes_ordinal() {
        let hook = PublishHook::new(Sent::default());
        hook.on_gear_changed(GearChange {
            gear: GearState::Drive,
            source: GearSource::Touch,
        });
        assert_eq!(hook.publisher().0.borrow().as_slice(), &[3]);
        assert_eq!(hook.published(), 1);
    }

    #[test]
    fn test_no_echo_for_other_sources() {
        let hook = PublishHook::new(Sent::default());
        for source in [GearSource::Button, GearSource::Throttle] {
            hook.on_gear_changed(GearChange {
                gear: GearState::Drive,
                source,
            });
        }
        assert!(hook.publisher().0.borrow().is_empty());
        assert_eq!(hook.published(), 0);
    }
}
