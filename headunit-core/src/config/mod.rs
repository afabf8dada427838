//! Configuration types
//!
//! Board-agnostic tuning values. Defaults carry the contractual gesture
//! timings; the firmware may persist overrides as postcard binary data.

#[cfg(feature = "serde")]
mod storage;
mod types;

#[cfg(feature = "serde")]
pub use storage::{from_bytes, to_bytes, CONFIG_VERSION, MAX_CONFIG_SIZE};
pub use types::*;
