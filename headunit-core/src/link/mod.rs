//! Vehicle link health

mod monitor;

pub use monitor::{
    Battery, LinkMonitor, LinkStatus, HEARTBEAT_TIMEOUT_MS, MAX_MISSED_HEARTBEATS, SPEED_TEXT_LEN,
};
