//! Head Unit Serial Protocol
//!
//! This crate defines the UART-based protocol spoken by the head unit on its
//! two serial links:
//!
//! - **Touch panel link**: the touchscreen module reports pointer activity on
//!   the gear controls; the head unit answers with indicator and camera
//!   commands.
//! - **Vehicle bus link**: the telemetry bridge reports gear, speed and
//!   battery; the head unit publishes touch-originated gear changes for the
//!   instrument cluster.
//!
//! # Protocol Overview
//!
//! All messages use a simple binary frame format:
//! ```text
//! ┌───────┬────────┬──────┬─────────────┬──────────┐
//! │ START │ LENGTH │ TYPE │ PAYLOAD     │ CHECKSUM │
//! │ 1B    │ 1B     │ 1B   │ 0–250B      │ 1B       │
//! └───────┴────────┴──────┴─────────────┴──────────┘
//! ```
//!
//! The panel acts as a "dumb terminal": it captures touches and draws what it
//! is told. All gear policy remains on the head unit.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod events;
pub mod frame;
pub mod gear;
pub mod messages;

pub use events::{GearControl, TouchEvent, TouchPhase};
pub use frame::{Frame, FrameError, FrameParser, FRAME_START, MAX_PAYLOAD_SIZE};
pub use gear::GearState;
pub use messages::{ClusterMessage, HeadUnitMessage, PanelCommand, VehicleMessage};
