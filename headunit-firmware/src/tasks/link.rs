//! Vehicle link monitor task
//!
//! Feeds heartbeats and telemetry into the `LinkMonitor` and reports status
//! changes. Link loss is reported only; the current gear is left as is.

use defmt::*;
use embassy_futures::select::{select, Either};
use embassy_time::{Duration, Ticker};

use headunit_core::config::LinkConfig;
use headunit_core::link::LinkStatus;

use crate::channels::{LinkEvent, LINK_CHANNEL};
use crate::tasks::tick::TICK_INTERVAL_MS;

/// Link task - tracks vehicle bus health
#[embassy_executor::task]
pub async fn link_task(config: LinkConfig) {
    info!("Link task started");

    let mut monitor = config.monitor();
    let mut ticker = Ticker::every(Duration::from_millis(TICK_INTERVAL_MS as u64));
    let mut last_status = monitor.status();

    loop {
        match select(LINK_CHANNEL.receive(), ticker.next()).await {
            Either::First(LinkEvent::Heartbeat) => {
                trace!("Vehicle heartbeat");
                monitor.heartbeat_received();
            }
            Either::First(LinkEvent::Speed(kmh_x10)) => {
                monitor.update_speed(kmh_x10);
                trace!("Speed: {=str}", monitor.speed_text().as_str());
            }
            Either::First(LinkEvent::Battery(reported)) => {
                monitor.update_battery(reported);
                let battery = monitor.battery();
                trace!("Battery: {} mV, {}%", battery.millivolts, battery.percent);
            }
            Either::Second(()) => {
                monitor.update_time(TICK_INTERVAL_MS);
            }
        }

        let status = monitor.status();
        if status != last_status {
            match status {
                LinkStatus::Connected => info!("{=str}", status.as_str()),
                LinkStatus::Unavailable => warn!(
                    "{=str} after {} missed heartbeats",
                    status.as_str(),
                    monitor.missed_heartbeats()
                ),
            }
            last_status = status;
        }
    }
}
