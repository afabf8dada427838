//! Vehicle link monitor
//!
//! Tracks heartbeat health of the vehicle bus link and the last speed and
//! battery readings for the status bar. Losing the link never touches the
//! gear: the last applied gear stays current until a new write arrives.

use core::fmt::Write;

use heapless::String;

/// Heartbeat period after which one heartbeat counts as missed
pub const HEARTBEAT_TIMEOUT_MS: u32 = 3000;

/// Missed heartbeats before the link is considered lost
pub const MAX_MISSED_HEARTBEATS: u8 = 3;

/// Capacity of the rendered speed text
pub const SPEED_TEXT_LEN: usize = 16;

/// Link condition as shown on the status bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LinkStatus {
    /// Heartbeats arriving
    Connected,
    /// Never connected, or too many heartbeats missed
    Unavailable,
}

impl LinkStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            LinkStatus::Connected => "IPC Connected",
            LinkStatus::Unavailable => "IPC Unavailable",
        }
    }
}

/// Battery reading from the vehicle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Battery {
    pub millivolts: u16,
    pub percent: u8,
}

impl Default for Battery {
    fn default() -> Self {
        Self {
            millivolts: 7800,
            percent: 85,
        }
    }
}

/// Heartbeat and telemetry tracker for the vehicle bus
#[derive(Debug, Clone)]
pub struct LinkMonitor {
    timeout_ms: u32,
    max_missed: u8,
    /// Set by the first heartbeat
    seen: bool,
    missed_heartbeats: u8,
    time_since_heartbeat_ms: u32,
    speed_kmh_x10: Option<u16>,
    battery: Battery,
}

impl Default for LinkMonitor {
    fn default() -> Self {
        Self::new()
    }
}

impl LinkMonitor {
    pub fn new() -> Self {
        Self::with_limits(HEARTBEAT_TIMEOUT_MS, MAX_MISSED_HEARTBEATS)
    }

    pub fn with_limits(timeout_ms: u32, max_missed: u8) -> Self {
        Self {
            timeout_ms,
            max_missed,
            seen: false,
            missed_heartbeats: 0,
            time_since_heartbeat_ms: 0,
            speed_kmh_x10: None,
            battery: Battery::default(),
        }
    }

    /// Record a heartbeat received
    pub fn heartbeat_received(&mut self) {
        self.seen = true;
        self.missed_heartbeats = 0;
        self.time_since_heartbeat_ms = 0;
    }

    /// Update time tracking
    ///
    /// # Arguments
    /// - `delta_ms`: Time elapsed since last update
    pub fn update_time(&mut self, delta_ms: u32) {
        self.time_since_heartbeat_ms = self.time_since_heartbeat_ms.saturating_add(delta_ms);

        if self.time_since_heartbeat_ms >= self.timeout_ms {
            self.missed_heartbeats = self.missed_heartbeats.saturating_add(1);
            self.time_since_heartbeat_ms = 0;
        }
    }

    /// Record a speed report (0.1 km/h units)
    ///
    /// Any telemetry from the vehicle counts as proof of life.
    pub fn update_speed(&mut self, kmh_x10: u16) {
        self.speed_kmh_x10 = Some(kmh_x10);
        self.heartbeat_received();
    }

    /// Record a battery report
    pub fn update_battery(&mut self, battery: Battery) {
        self.battery = battery;
        self.heartbeat_received();
    }

    pub fn status(&self) -> LinkStatus {
        if self.seen && self.missed_heartbeats < self.max_missed {
            LinkStatus::Connected
        } else {
            LinkStatus::Unavailable
        }
    }

    pub fn is_connected(&self) -> bool {
        self.status() == LinkStatus::Connected
    }

    /// Get number of missed heartbeats
    pub fn missed_heartbeats(&self) -> u8 {
        self.missed_heartbeats
    }

    /// Last reported speed, only while connected
    pub fn speed_kmh_x10(&self) -> Option<u16> {
        self.speed_kmh_x10.filter(|_| self.is_connected())
    }

    pub fn battery(&self) -> Battery {
        self.battery
    }

    /// Speed for the status bar: "12.5 km/h", or "--- km/h" without a link
    pub fn speed_text(&self) -> String<SPEED_TEXT_LEN> {
        let mut text = String::new();
        // u16 tenths fit the buffer: "6553.5 km/h" is 11 bytes
        match self.speed_kmh_x10() {
            Some(x10) => {
                let _ = write!(text, "{}.{} km/h", x10 / 10, x10 % 10);
            }
            None => {
                let _ = text.push_str("--- km/h");
            }
        }
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn connected() -> LinkMonitor {
        let mut monitor = LinkMonitor::new();
        monitor.heartbeat_received();
        monitor
    }

    #[test]
    fn test_unavailable_until_first_heartbeat() {
        let monitor = LinkMonitor::new();
        assert_eq!(monitor.status(), LinkStatus::Unavailable);
        assert_eq!(monitor.status().as_str(), "IPC Unavailable");
    }

    #[test]
    fn test_connected_after_heartbeat() {
        let monitor = connected();
        assert_eq!(monitor.status().as_str(), "IPC Connected");
    }

    #[test]
    fn test_link_lost() {
        let mut monitor = connected();

        // Miss 3 heartbeats
        for _ in 0..3 {
            monitor.update_time(HEARTBEAT_TIMEOUT_MS);
        }

        assert_eq!(monitor.status(), LinkStatus::Unavailable);
        assert_eq!(monitor.missed_heartbeats(), 3);
    }

    #[test]
    fn test_heartbeat_resets_counter() {
        let mut monitor = connected();

        // Miss 2 heartbeats
        monitor.update_time(HEARTBEAT_TIMEOUT_MS);
        monitor.update_time(HEARTBEAT_TIMEOUT_MS);
        assert!(monitor.is_connected());

        monitor.heartbeat_received();
        assert_eq!(monitor.missed_heartbeats(), 0);

        monitor.update_time(HEARTBEAT_TIMEOUT_MS);
        assert!(monitor.is_connected());
    }

    #[test]
    fn test_partial_intervals_accumulate() {
        let mut monitor = connected();
        for _ in 0..30 {
            monitor.update_time(100);
        }
        assert_eq!(monitor.missed_heartbeats(), 1);
    }

    #[test]
    fn test_speed_text() {
        let mut monitor = LinkMonitor::new();
        assert_eq!(monitor.speed_text().as_str(), "--- km/h");

        monitor.update_speed(125);
        assert_eq!(monitor.speed_text().as_str(), "12.5 km/h");

        monitor.update_speed(u16::MAX);
        assert_eq!(monitor.speed_text().as_str(), "6553.5 km/h");
    }

    #[test]
    fn test_speed_hidden_when_lost() {
        let mut monitor = LinkMonitor::new();
        monitor.update_speed(300);
        for _ in 0..MAX_MISSED_HEARTBEATS {
            monitor.update_time(HEARTBEAT_TIMEOUT_MS);
        }
        assert_eq!(monitor.speed_kmh_x10(), None);
        assert_eq!(monitor.speed_text().as_str(), "--- km/h");
    }

    #[test]
    fn test_battery() {
        let mut monitor = LinkMonitor::new();
        assert_eq!(monitor.battery().percent, 85);

        monitor.update_battery(Battery {
            millivolts: 7200,
            percent: 40,
        });
        assert_eq!(monitor.battery().millivolts, 7200);
        assert!(monitor.is_connected());
    }
}
