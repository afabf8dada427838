//! Inter-task communication channels
//!
//! Defines the static channels used for communication between Embassy tasks.
//! Every input source funnels into [`INTENT_CHANNEL`], which only the gear
//! task receives from. That single consumer is what serializes concurrent
//! sources into one well-defined write order.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use embassy_sync::signal::Signal;

use headunit_core::input::DragFeedback;
use headunit_core::link::Battery;
use headunit_core::GearIntent;
use headunit_protocol::{HeadUnitMessage, TouchEvent};

/// Channel capacity for gear intents
const INTENT_CHANNEL_SIZE: usize = 8;

/// Channel capacity for raw touch events from the panel
const TOUCH_CHANNEL_SIZE: usize = 8;

/// Channel capacity for messages to the panel
const PANEL_CHANNEL_SIZE: usize = 8;

/// Channel capacity for outbound cluster gear bytes
const PUBLISH_CHANNEL_SIZE: usize = 4;

/// Channel capacity for vehicle link events
const LINK_CHANNEL_SIZE: usize = 8;

/// Telemetry and liveness from the vehicle bus
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LinkEvent {
    Heartbeat,
    Speed(u16),
    Battery(Battery),
}

/// Gear intents from every source (touch, vehicle feed, buttons)
pub static INTENT_CHANNEL: Channel<CriticalSectionRawMutex, GearIntent, INTENT_CHANNEL_SIZE> =
    Channel::new();

/// Touch events from the panel link
pub static TOUCH_CHANNEL: Channel<CriticalSectionRawMutex, TouchEvent, TOUCH_CHANNEL_SIZE> =
    Channel::new();

/// Indicator, camera and glow updates for the panel
pub static PANEL_CHANNEL: Channel<CriticalSectionRawMutex, HeadUnitMessage, PANEL_CHANNEL_SIZE> =
    Channel::new();

/// Gear ordinals to publish to the instrument cluster
pub static PUBLISH_CHANNEL: Channel<CriticalSectionRawMutex, u8, PUBLISH_CHANNEL_SIZE> =
    Channel::new();

/// Vehicle link events for the link monitor
pub static LINK_CHANNEL: Channel<CriticalSectionRawMutex, LinkEvent, LINK_CHANNEL_SIZE> =
    Channel::new();

/// Latest drag car position; intermediate frames may be skipped
pub static DRAG_FEEDBACK: Signal<CriticalSectionRawMutex, DragFeedback> = Signal::new();

/// Signal that a heartbeat (PING) was received from the panel
pub static PANEL_PING: Signal<CriticalSectionRawMutex, ()> = Signal::new();

/// Signal that a heartbeat (PING) was received from the vehicle bus
pub static VEHICLE_PING: Signal<CriticalSectionRawMutex, ()> = Signal::new();
