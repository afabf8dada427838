//! Vehicle bus UART transmit task
//!
//! Publishes touch-originated gear changes to the instrument cluster and
//! answers heartbeats.

use defmt::*;
use embassy_futures::select::{select, Either};
use embassy_rp::uart::BufferedUartTx;
use embedded_io_async::Write;

use headunit_protocol::ClusterMessage;

use crate::channels::{PUBLISH_CHANNEL, VEHICLE_PING};

/// Largest cluster frame: START, LENGTH, TYPE, one payload byte, CHECKSUM
const TX_BUF_SIZE: usize = 8;

/// Vehicle TX task - sends frames to the vehicle bus bridge
#[embassy_executor::task]
pub async fn vehicle_tx_task(mut tx: BufferedUartTx) {
    info!("Vehicle TX task started");

    loop {
        let msg = match select(PUBLISH_CHANNEL.receive(), VEHICLE_PING.wait()).await {
            Either::First(ordinal) => ClusterMessage::Gear(ordinal),
            Either::Second(()) => ClusterMessage::Pong,
        };

        let mut buf = [0u8; TX_BUF_SIZE];
        let Ok(len) = msg.to_frame().and_then(|frame| frame.encode(&mut buf)) else {
            warn!("Failed to encode {:?}", msg);
            continue;
        };

        match tx.write_all(&buf[..len]).await {
            Ok(()) => trace!("Vehicle TX: {:?}", msg),
            Err(e) => warn!("Failed to send cluster frame: {:?}", e),
        }
    }
}
