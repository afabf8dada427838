//! Touch panel UART receive task
//!
//! Receives frames from the touch panel and dispatches events.

use defmt::*;
use embassy_rp::uart::BufferedUartRx;
use embedded_io_async::Read;

use headunit_protocol::{FrameParser, PanelCommand};

use crate::channels::{PANEL_PING, TOUCH_CHANNEL};

/// Buffer size for UART receive
const RX_BUF_SIZE: usize = 64;

/// Panel RX task - receives and parses frames from the touch panel
#[embassy_executor::task]
pub async fn panel_rx_task(mut rx: BufferedUartRx) {
    info!("Panel RX task started");

    let mut parser = FrameParser::new();
    let mut buf = [0u8; RX_BUF_SIZE];

    loop {
        match rx.read(&mut buf).await {
            Ok(n) if n > 0 => {
                trace!("Panel RX: {} bytes", n);

                for &byte in &buf[..n] {
                    match parser.feed(byte) {
                        Ok(Some(frame)) => match PanelCommand::from_frame(&frame) {
                            Ok(cmd) => handle_panel_command(cmd).await,
                            Err(e) => warn!("Failed to parse panel command: {:?}", e),
                        },
                        Ok(None) => {}
                        Err(e) => warn!("Panel frame error: {:?}", e),
                    }
                }
            }
            Ok(_) => {}
            Err(e) => {
                warn!("Panel UART read error: {:?}", e);
                if !parser.is_idle() {
                    debug!("Dropping partial panel frame");
                    parser.reset();
                }
            }
        }
    }
}

async fn handle_panel_command(cmd: PanelCommand) {
    match cmd {
        PanelCommand::Ping => {
            trace!("Panel PING received");
            PANEL_PING.signal(());
        }
        PanelCommand::Touch(event) => {
            trace!("Touch: {:?}", event);
            // A lost release would leave a gesture stuck down
            TOUCH_CHANNEL.send(event).await;
        }
    }
}
