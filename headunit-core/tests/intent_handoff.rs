//! Intents queued from several producers into the task that owns the manager

use embassy_futures::block_on;
use embassy_futures::join::join;
use embassy_sync::blocking_mutex::raw::NoopRawMutex;
use embassy_sync::channel::Channel;

use headunit_core::input::{ButtonInput, GearPanel};
use headunit_core::remote::ThrottleFeed;
use headunit_core::{GearIntent, GearIntentSink, GearSource, GearState, GearStateManager};
use headunit_protocol::{FrameParser, GearControl, TouchEvent, TouchPhase, VehicleMessage};

/// Same depth as the firmware's intent queue
const INTENT_QUEUE_DEPTH: usize = 8;

type IntentQueue = Channel<NoopRawMutex, GearIntent, INTENT_QUEUE_DEPTH>;

/// Bytes of one UART read carrying a gear frame per entry
fn vehicle_burst(gears: &[GearState]) -> Vec<u8> {
    let mut wire = Vec::new();
    for gear in gears {
        let frame = VehicleMessage::Gear(gear.to_byte()).to_frame().unwrap();
        wire.extend_from_slice(&frame.encode_to_vec().unwrap());
    }
    wire
}

/// Parse a read buffer and queue every gear, waiting for room
async fn forward_vehicle_gears(wire: &[u8], queue: &IntentQueue) {
    let mut parser = FrameParser::new();
    let mut feed = ThrottleFeed::new();
    for &byte in wire {
        if let Some(frame) = parser.feed(byte).unwrap() {
            if let Ok(VehicleMessage::Gear(raw)) = VehicleMessage::from_frame(&frame) {
                if let Ok(intent) = feed.receive(raw) {
                    queue.send(intent).await;
                }
            }
        }
    }
}

/// Apply `count` intents in arrival order
async fn apply(queue: &IntentQueue, manager: &GearStateManager<'_>, count: usize) {
    for _ in 0..count {
        manager.notify_gear_intent(queue.receive().await);
    }
}

#[test]
fn test_vehicle_burst_larger_than_queue_keeps_last_gear() {
    use GearState::*;
    let gears = [
        Reverse, Drive, Reverse, Drive, Reverse, Drive, Reverse, Drive, Reverse, Drive, Neutral,
        Park,
    ];
    let wire = vehicle_burst(&gears);
    assert!(gears.len() > INTENT_QUEUE_DEPTH);
    assert!(wire.len() <= 64);

    let queue = IntentQueue::new();
    let manager = GearStateManager::new();
    manager.set_gear_from_touch(Drive);

    block_on(join(
        forward_vehicle_gears(&wire, &queue),
        apply(&queue, &manager, gears.len()),
    ));

    assert_eq!(manager.gear(), Park);
    assert_eq!(manager.last_source(), GearSource::Throttle);
    assert!(queue.is_empty());
}

#[test]
fn test_button_and_touch_after_burst_are_not_lost() {
    let wire = vehicle_burst(&[GearState::Reverse; 10]);

    let queue = IntentQueue::new();
    let manager = GearStateManager::new();

    let producers = async {
        forward_vehicle_gears(&wire, &queue).await;

        let mut button = ButtonInput::new(GearState::Neutral);
        if let Some(intent) = button.update(true, 0) {
            queue.send(intent).await;
        }

        // Intents come back from the panel and are queued by the caller
        let mut panel = GearPanel::new(&());
        let press = TouchEvent::new(GearControl::DriveButton, TouchPhase::Press, 0);
        let release = TouchEvent::new(GearControl::DriveButton, TouchPhase::Release, 0);
        panel.handle(press, 0).unwrap();
        if let Some(intent) = panel.handle(release, 40).unwrap() {
            queue.send(intent).await;
        }
    };

    let seen = std::cell::RefCell::new(Vec::new());
    let consumer = async {
        for _ in 0..12 {
            let intent = queue.receive().await;
            seen.borrow_mut().push(intent.source);
            manager.notify_gear_intent(intent);
        }
    };

    block_on(join(producers, consumer));

    let seen = seen.into_inner();
    assert_eq!(seen.len(), 12);
    assert_eq!(&seen[10..], &[GearSource::Button, GearSource::Touch]);
    assert_eq!(manager.gear(), GearState::Drive);
    assert_eq!(manager.last_source(), GearSource::Touch);
    assert!(queue.is_empty());
}
