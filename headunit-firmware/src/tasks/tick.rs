//! Millisecond clock shared by the gesture and link tasks
//!
//! Gesture recognizers take wrapping `u32` milliseconds since boot.

use embassy_time::Instant;

/// Link monitor update interval in milliseconds
pub const TICK_INTERVAL_MS: u32 = 100;

/// Milliseconds since boot, wrapping
pub fn now_ms() -> u32 {
    Instant::now().as_millis() as u32
}
