//! Head Unit - Gear Coordination Firmware
//!
//! Main firmware binary for the RP2040-based head unit controller.
//!
//! Wiring:
//! - UART0 (GPIO0/1): touch panel link
//! - UART1 (GPIO4/5): vehicle bus bridge (telemetry in, cluster gear out)
//! - GPIO12..15: physical P/R/N/D buttons, active-low

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Input, Pull};
use embassy_rp::peripherals::{UART0, UART1};
use embassy_rp::uart::{BufferedInterruptHandler, BufferedUart, Config as UartConfig};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use headunit_core::GearState;

mod channels;
mod config;
mod tasks;

bind_interrupts!(struct Irqs {
    UART0_IRQ => BufferedInterruptHandler<UART0>;
    UART1_IRQ => BufferedInterruptHandler<UART1>;
});

/// UART ring buffer size
const UART_BUF_SIZE: usize = 256;

// Static cells for UART buffers (must live forever)
static PANEL_TX_BUF: StaticCell<[u8; UART_BUF_SIZE]> = StaticCell::new();
static PANEL_RX_BUF: StaticCell<[u8; UART_BUF_SIZE]> = StaticCell::new();
static VEHICLE_TX_BUF: StaticCell<[u8; UART_BUF_SIZE]> = StaticCell::new();
static VEHICLE_RX_BUF: StaticCell<[u8; UART_BUF_SIZE]> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Head unit firmware starting...");

    // Initialize RP2040 peripherals
    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // Load configuration from flash (or use built-in defaults)
    let config = config::load_config(p.FLASH);
    info!(
        "Gestures: drag {} / hold {} ms, link timeout {} ms",
        config.gesture.drag_threshold,
        config.gesture.hold_ms,
        config.link.heartbeat_timeout_ms
    );

    // Touch panel link, 115200 baud default
    let panel_uart = BufferedUart::new(
        p.UART0,
        p.PIN_0,
        p.PIN_1,
        Irqs,
        PANEL_TX_BUF.init([0u8; UART_BUF_SIZE]),
        PANEL_RX_BUF.init([0u8; UART_BUF_SIZE]),
        UartConfig::default(),
    );
    let (panel_tx, panel_rx) = panel_uart.split();
    info!("UART0 initialized for touch panel");

    // Vehicle bus bridge
    let vehicle_uart = BufferedUart::new(
        p.UART1,
        p.PIN_4,
        p.PIN_5,
        Irqs,
        VEHICLE_TX_BUF.init([0u8; UART_BUF_SIZE]),
        VEHICLE_RX_BUF.init([0u8; UART_BUF_SIZE]),
        UartConfig::default(),
    );
    let (vehicle_tx, vehicle_rx) = vehicle_uart.split();
    info!("UART1 initialized for vehicle bus");

    // Physical gear buttons
    let pins = [
        Input::new(p.PIN_12, Pull::Up),
        Input::new(p.PIN_13, Pull::Up),
        Input::new(p.PIN_14, Pull::Up),
        Input::new(p.PIN_15, Pull::Up),
    ];
    let buttons = [
        GearState::Park,
        GearState::Reverse,
        GearState::Neutral,
        GearState::Drive,
    ]
    .map(|gear| config.gesture.button(gear));

    // Spawn tasks
    spawner.spawn(tasks::gear_task(config.glow_brightness)).unwrap();
    spawner.spawn(tasks::panel_rx_task(panel_rx)).unwrap();
    spawner.spawn(tasks::panel_tx_task(panel_tx)).unwrap();
    spawner.spawn(tasks::vehicle_rx_task(vehicle_rx)).unwrap();
    spawner.spawn(tasks::vehicle_tx_task(vehicle_tx)).unwrap();
    spawner.spawn(tasks::touch_task(config.gesture)).unwrap();
    spawner.spawn(tasks::button_task(pins, buttons)).unwrap();
    spawner.spawn(tasks::link_task(config.link)).unwrap();

    info!("All tasks spawned, firmware running");

    loop {
        embassy_time::Timer::after_secs(60).await;
        trace!("Main loop heartbeat");
    }
}
