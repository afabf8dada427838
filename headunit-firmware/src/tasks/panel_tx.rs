//! Touch panel UART transmit task
//!
//! Sends indicator, camera and glow updates, the latest drag car position
//! and heartbeat responses.

use defmt::*;
use embassy_futures::select::{select3, Either3};
use embassy_rp::uart::BufferedUartTx;
use embedded_io_async::Write;

use headunit_protocol::frame::MAX_FRAME_SIZE;
use headunit_protocol::HeadUnitMessage;

use crate::channels::{DRAG_FEEDBACK, PANEL_CHANNEL, PANEL_PING};

/// Panel TX task - sends frames to the touch panel
#[embassy_executor::task]
pub async fn panel_tx_task(mut tx: BufferedUartTx) {
    info!("Panel TX task started");

    loop {
        let msg = match select3(
            PANEL_CHANNEL.receive(),
            DRAG_FEEDBACK.wait(),
            PANEL_PING.wait(),
        )
        .await
        {
            Either3::First(msg) => msg,
            Either3::Second(feedback) => HeadUnitMessage::DragOffset {
                offset: feedback.offset,
                preview: feedback.preview,
            },
            Either3::Third(()) => HeadUnitMessage::Pong,
        };
        send(&mut tx, msg).await;
    }
}

async fn send(tx: &mut BufferedUartTx, msg: HeadUnitMessage) {
    let frame = match msg.to_frame() {
        Ok(frame) => frame,
        Err(e) => {
            warn!("Failed to encode {:?}: {:?}", msg, e);
            return;
        }
    };

    let mut buf = [0u8; MAX_FRAME_SIZE];
    if let Ok(len) = frame.encode(&mut buf) {
        if let Err(e) = tx.write_all(&buf[..len]).await {
            warn!("Failed to send panel frame: {:?}", e);
        } else {
            trace!("Panel TX: {:?}", msg);
        }
    }
}
