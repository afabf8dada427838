//! Status bar gear text

use core::cell::{Cell, RefCell};

use heapless::String;

use crate::gear::{GearChange, GearObserver, GearSource, SOURCE_LABEL_LEN};
use headunit_protocol::GearState;

/// Capacity of the rendered gear text ("[Gear: P]")
pub const GEAR_TEXT_LEN: usize = 16;

/// Gear letter and source label, redrawn on every notification
pub struct StatusLine {
    gear_text: RefCell<String<GEAR_TEXT_LEN>>,
    source_text: RefCell<String<SOURCE_LABEL_LEN>>,
    renders: Cell<u32>,
}

impl Default for StatusLine {
    fn default() -> Self {
        Self::new()
    }
}

impl StatusLine {
    /// Status line showing the start-up state, `(Park, Touch)`
    pub fn new() -> Self {
        Self {
            gear_text: RefCell::new(render_gear(GearState::Park)),
            source_text: RefCell::new(GearSource::Touch.display_label()),
            renders: Cell::new(0),
        }
    }

    pub fn gear_text(&self) -> String<GEAR_TEXT_LEN> {
        self.gear_text.borrow().clone()
    }

    pub fn source_text(&self) -> String<SOURCE_LABEL_LEN> {
        self.source_text.borrow().clone()
    }

    /// Number of redraws since construction
    pub fn render_count(&self) -> u32 {
        self.renders.get()
    }
}

impl GearObserver for StatusLine {
    fn on_gear_changed(&self, change: GearChange) {
        *self.gear_text.borrow_mut() = render_gear(change.gear);
        *self.source_text.borrow_mut() = change.source.display_label();
        self.renders.set(self.renders.get().wrapping_add(1));
    }
}

fn render_gear(gear: GearState) -> String<GEAR_TEXT_LEN> {
    let mut text = String::new();
    let _ = text.push_str("[Gear: ");
    let _ = text.push(gear.letter());
    let _ = text.push(']');
    text
}
