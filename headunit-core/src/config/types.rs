//! Configuration type definitions

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::consumers::DEFAULT_BRIGHTNESS;
use crate::input::{
    ButtonInput, DragGesture, HoldGesture, BUTTON_DEBOUNCE_MS, DECAY_FRAME_MS, DRAG_THRESHOLD,
    DRAG_VISUAL_LIMIT, HOLD_DURATION_MS,
};
use crate::link::{LinkMonitor, HEARTBEAT_TIMEOUT_MS, MAX_MISSED_HEARTBEATS};
use headunit_protocol::GearState;

/// Configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Drag threshold must be non-zero
    InvalidDragThreshold,
    /// Visual limit must be positive
    InvalidVisualLimit,
    /// Hold duration must be non-zero
    InvalidHoldDuration,
    /// Decay frame period must be non-zero
    InvalidFramePeriod,
    /// Heartbeat timeout and miss count must be non-zero
    InvalidHeartbeat,
    /// Brightness above 100 %
    InvalidBrightness,
    /// Stored data has a different layout version
    UnsupportedVersion(u8),
    /// Serialization failed
    Serialize,
    /// Deserialization failed
    Deserialize,
}

/// Touch gesture tuning
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GestureConfig {
    /// Drag travel needed to select a gear (display units)
    pub drag_threshold: u16,
    /// Drag car visual offset bound (display units)
    pub drag_visual_limit: i16,
    /// Drag release animation frame period
    pub decay_frame_ms: u32,
    /// Neutral hold time
    pub hold_ms: u32,
    /// Physical button debounce
    pub button_debounce_ms: u32,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            drag_threshold: DRAG_THRESHOLD as u16,
            drag_visual_limit: DRAG_VISUAL_LIMIT,
            decay_frame_ms: DECAY_FRAME_MS,
            hold_ms: HOLD_DURATION_MS,
            button_debounce_ms: BUTTON_DEBOUNCE_MS,
        }
    }
}

impl GestureConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.drag_threshold == 0 {
            return Err(ConfigError::InvalidDragThreshold);
        }
        if self.drag_visual_limit <= 0 {
            return Err(ConfigError::InvalidVisualLimit);
        }
        if self.hold_ms == 0 {
            return Err(ConfigError::InvalidHoldDuration);
        }
        if self.decay_frame_ms == 0 {
            return Err(ConfigError::InvalidFramePeriod);
        }
        Ok(())
    }

    pub fn drag_gesture(&self) -> DragGesture {
        DragGesture::with_limits(self.drag_threshold as i32, self.drag_visual_limit)
    }

    pub fn hold_gesture(&self) -> HoldGesture {
        HoldGesture::with_duration(self.hold_ms)
    }

    pub fn button(&self, gear: GearState) -> ButtonInput {
        ButtonInput::with_debounce(gear, self.button_debounce_ms)
    }
}

/// Vehicle bus link tuning
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LinkConfig {
    pub heartbeat_timeout_ms: u32,
    pub max_missed_heartbeats: u8,
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self {
            heartbeat_timeout_ms: HEARTBEAT_TIMEOUT_MS,
            max_missed_heartbeats: MAX_MISSED_HEARTBEATS,
        }
    }
}

impl LinkConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.heartbeat_timeout_ms == 0 || self.max_missed_heartbeats == 0 {
            return Err(ConfigError::InvalidHeartbeat);
        }
        Ok(())
    }

    pub fn monitor(&self) -> LinkMonitor {
        LinkMonitor::with_limits(self.heartbeat_timeout_ms, self.max_missed_heartbeats)
    }
}

/// Complete head unit configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HeadUnitConfig {
    pub gesture: GestureConfig,
    pub link: LinkConfig,
    /// Ambient glow brightness, percent
    pub glow_brightness: u8,
}

impl Default for HeadUnitConfig {
    fn default() -> Self {
        Self {
            gesture: GestureConfig::default(),
            link: LinkConfig::default(),
            glow_brightness: DEFAULT_BRIGHTNESS,
        }
    }
}

impl HeadUnitConfig {
    /// Check every section
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.gesture.validate()?;
        self.link.validate()?;
        if self.glow_brightness > 100 {
            return Err(ConfigError::InvalidBrightness);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = HeadUnitConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.gesture.drag_threshold, 35);
        assert_eq!(config.gesture.drag_visual_limit, 50);
        assert_eq!(config.gesture.hold_ms, 600);
        assert_eq!(config.gesture.decay_frame_ms, 16);
        assert_eq!(config.link.heartbeat_timeout_ms, 3000);
        assert_eq!(config.link.max_missed_heartbeats, 3);
    }

    #[test]
    fn test_zero_values_rejected() {
        let mut config = HeadUnitConfig::default();
        config.gesture.drag_threshold = 0;
        assert_eq!(config.validate(), Err(ConfigError::InvalidDragThreshold));

        let mut config = HeadUnitConfig::default();
        config.gesture.drag_visual_limit = -5;
        assert_eq!(config.validate(), Err(ConfigError::InvalidVisualLimit));

        let mut config = HeadUnitConfig::default();
        config.gesture.hold_ms = 0;
        assert_eq!(config.validate(), Err(ConfigError::InvalidHoldDuration));

        let mut config = HeadUnitConfig::default();
        config.link.max_missed_heartbeats = 0;
        assert_eq!(config.validate(), Err(ConfigError::InvalidHeartbeat));

        let mut config = HeadUnitConfig::default();
        config.glow_brightness = 101;
        assert_eq!(config.validate(), Err(ConfigError::InvalidBrightness));
    }

    #[test]
    fn test_builders_use_config() {
        let gesture = GestureConfig {
            hold_ms: 250,
            ..GestureConfig::default()
        };
        let mut hold = gesture.hold_gesture();
        hold.press(0);
        assert_eq!(hold.deadline(), Some(250));
    }
}
