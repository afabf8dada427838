//! Touch gesture task
//!
//! Owns the gear panel gesture state. Waits for the next touch event, the
//! pending hold deadline, or the next drag decay frame, whichever is first.
//! Gear intents are queued for the gear task; drag car position goes back
//! to the panel whenever it changes.

use defmt::*;
use embassy_futures::select::{select, Either};
use embassy_time::Timer;

use headunit_core::config::GestureConfig;
use headunit_core::input::{DragFeedback, GearPanel};

use crate::channels::{DRAG_FEEDBACK, INTENT_CHANNEL, TOUCH_CHANNEL};
use crate::tasks::tick::now_ms;

/// Touch task - turns panel touch events into gear intents
#[embassy_executor::task]
pub async fn touch_task(config: GestureConfig) {
    info!("Touch task started");

    // Intents come back from handle/tick and are queued below
    let mut panel = GearPanel::with_gestures(&(), config.hold_gesture(), config.drag_gesture());
    let mut shown = DragFeedback::default();

    loop {
        let wake = next_wake_ms(&panel, config.decay_frame_ms);

        let intent = match select(TOUCH_CHANNEL.receive(), sleep_until(wake)).await {
            Either::First(event) => match panel.handle(event, now_ms()) {
                Ok(intent) => intent,
                Err(e) => {
                    debug!("Ignoring {:?} for {:?}", e, event);
                    None
                }
            },
            Either::Second(()) => panel.tick(now_ms()),
        };

        if let Some(intent) = intent {
            debug!("Touch intent: {:?}", intent);
            INTENT_CHANNEL.send(intent).await;
        }

        let feedback = panel.drag_feedback();
        if feedback != shown {
            DRAG_FEEDBACK.signal(feedback);
            shown = feedback;
        }
    }
}

/// Milliseconds until the panel next needs a tick, if ever
fn next_wake_ms(panel: &GearPanel<'_, ()>, frame_ms: u32) -> Option<u32> {
    let hold = panel
        .hold_deadline()
        .map(|deadline| deadline.wrapping_sub(now_ms()) as i32)
        .map(|remaining| remaining.max(0) as u32);
    let decay = panel.is_animating().then_some(frame_ms);

    match (hold, decay) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (a, b) => a.or(b),
    }
}

async fn sleep_until(wake_ms: Option<u32>) {
    match wake_ms {
        Some(ms) => Timer::after_millis(ms as u64).await,
        None => core::future::pending().await,
    }
}
