//! Vehicle bus UART receive task
//!
//! Gear reports become `Throttle` intents; speed, battery and heartbeats
//! go to the link monitor.

use defmt::*;
use embassy_rp::uart::BufferedUartRx;
use embedded_io_async::Read;

use headunit_core::link::Battery;
use headunit_core::remote::ThrottleFeed;
use headunit_protocol::{FrameParser, VehicleMessage};

use crate::channels::{LinkEvent, INTENT_CHANNEL, LINK_CHANNEL, VEHICLE_PING};

/// Buffer size for UART receive
const RX_BUF_SIZE: usize = 64;

/// Vehicle RX task - receives and parses frames from the vehicle bus bridge
#[embassy_executor::task]
pub async fn vehicle_rx_task(mut rx: BufferedUartRx) {
    info!("Vehicle RX task started");

    let mut parser = FrameParser::new();
    let mut feed = ThrottleFeed::new();
    let mut buf = [0u8; RX_BUF_SIZE];

    loop {
        match rx.read(&mut buf).await {
            Ok(n) if n > 0 => {
                for &byte in &buf[..n] {
                    match parser.feed(byte) {
                        Ok(Some(frame)) => match VehicleMessage::from_frame(&frame) {
                            Ok(msg) => handle_vehicle_message(msg, &mut feed).await,
                            Err(e) => warn!("Failed to parse vehicle message: {:?}", e),
                        },
                        Ok(None) => {}
                        Err(e) => warn!("Vehicle frame error: {:?}", e),
                    }
                }
            }
            Ok(_) => {}
            Err(e) => {
                warn!("Vehicle UART read error: {:?}", e);
                if !parser.is_idle() {
                    debug!("Dropping partial vehicle frame");
                    parser.reset();
                }
            }
        }
    }
}

/// Gear intents wait for queue space; the last reported gear must be the last applied
async fn handle_vehicle_message(msg: VehicleMessage, feed: &mut ThrottleFeed) {
    let event = match msg {
        VehicleMessage::Gear(byte) => {
            match feed.receive(byte) {
                Ok(intent) => {
                    trace!("Vehicle gear {:?} (#{})", intent.gear, feed.accepted());
                    INTENT_CHANNEL.send(intent).await;
                }
                Err(e) => warn!("Dropped vehicle gear: {:?} ({} rejected)", e, feed.rejected()),
            }
            LinkEvent::Heartbeat
        }
        VehicleMessage::Speed { kmh_x10 } => LinkEvent::Speed(kmh_x10),
        VehicleMessage::Battery {
            millivolts,
            percent,
        } => LinkEvent::Battery(Battery {
            millivolts,
            percent,
        }),
        VehicleMessage::Ping => {
            trace!("Vehicle PING received");
            VEHICLE_PING.signal(());
            LinkEvent::Heartbeat
        }
    };

    if LINK_CHANNEL.try_send(event).is_err() {
        trace!("Link channel full");
    }
}
