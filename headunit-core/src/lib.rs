//! Board-agnostic gear coordination for the head unit firmware
//!
//! This crate contains all gear logic that does not depend on specific
//! hardware or transports:
//!
//! - Gear state manager (last-write-wins arbitration, observer fan-out)
//! - Input adapters (drag gesture, press-and-hold, direct-select taps,
//!   physical button, vehicle gear feed)
//! - Consumers (reverse camera, status line, ambient glow, cluster publish)
//! - Vehicle link health monitoring
//! - Configuration type definitions
//!
//! Everything here is synchronous and single-threaded. The firmware owns one
//! [`GearStateManager`] inside a single task and funnels every input source
//! into it, which keeps "last call wins" well defined.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod config;
pub mod consumers;
pub mod gear;
pub mod input;
pub mod link;
pub mod remote;

pub use gear::{
    GearChange, GearError, GearIntentSink, GearObserver, GearSource, GearStateManager,
    SubscribeError,
};
pub use headunit_protocol::GearState;
pub use input::{GearIntent, GestureError};
