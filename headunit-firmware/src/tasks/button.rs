//! Physical gear button task
//!
//! Polls the gear buttons and forwards debounced press edges.

use defmt::*;
use embassy_rp::gpio::Input;
use embassy_time::{Duration, Ticker};

use headunit_core::input::ButtonInput;

use crate::channels::INTENT_CHANNEL;
use crate::tasks::tick::now_ms;

/// Button poll interval
const POLL_INTERVAL_MS: u64 = 10;

/// Number of physical gear buttons
pub const BUTTON_COUNT: usize = 4;

/// Button task - buttons are active-low with pull-ups
#[embassy_executor::task]
pub async fn button_task(
    pins: [Input<'static>; BUTTON_COUNT],
    mut buttons: [ButtonInput; BUTTON_COUNT],
) {
    info!("Button task started");

    let mut ticker = Ticker::every(Duration::from_millis(POLL_INTERVAL_MS));

    loop {
        let now = now_ms();
        for (pin, button) in pins.iter().zip(buttons.iter_mut()) {
            if let Some(intent) = button.update(pin.is_low(), now) {
                debug!("Button {:?} pressed", button.gear());
                INTENT_CHANNEL.send(intent).await;
            }
        }

        ticker.next().await;
    }
}
