//! Message types for the touch panel and vehicle bus links
//!
//! Touch panel link:
//! - Panel → Head unit: touch events, heartbeat requests
//! - Head unit → Panel: gear indicator, camera visibility, glow tint, drag
//!   car offset, heartbeat responses
//!
//! Vehicle bus link:
//! - Vehicle → Head unit: gear, speed and battery telemetry, heartbeat requests
//! - Head unit → Cluster: touch-originated gear changes, heartbeat responses

use crate::events::{TouchEvent, TOUCH_EVENT_LEN};
use crate::frame::{Frame, FrameError};
use crate::gear::GearState;

// Message type IDs shared by both links
pub const MSG_PING: u8 = 0x02;
pub const MSG_PONG: u8 = 0x24;

// Message type IDs: Panel → Head unit
pub const MSG_TOUCH: u8 = 0x01;

// Message type IDs: Head unit → Panel
pub const MSG_GEAR_INDICATOR: u8 = 0x20;
pub const MSG_CAMERA: u8 = 0x21;
pub const MSG_GLOW: u8 = 0x22;
pub const MSG_DRAG_OFFSET: u8 = 0x23;

/// Drag offset preview byte when no arrow is highlighted
const NO_PREVIEW: u8 = 0xFF;

// Message type IDs: vehicle bus (low byte of the vehicle service event ids)
pub const MSG_SPEED: u8 = 0x81;
pub const MSG_GEAR: u8 = 0x82;
pub const MSG_BATTERY: u8 = 0x83;

/// Source tag byte carried by the gear indicator
///
/// The panel only prints it; the mapping matches the head unit's source tags.
pub const SOURCE_TAG_TOUCH: u8 = 0;
pub const SOURCE_TAG_THROTTLE: u8 = 1;
pub const SOURCE_TAG_BUTTON: u8 = 2;

/// Commands parsed from panel-originated frames
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PanelCommand {
    /// Pointer activity on a gear control
    Touch(TouchEvent),
    /// Heartbeat request
    Ping,
}

impl PanelCommand {
    /// Parse a command from a frame
    pub fn from_frame(frame: &Frame) -> Result<Self, FrameError> {
        match frame.msg_type {
            MSG_TOUCH => TouchEvent::from_bytes(&frame.payload)
                .map(PanelCommand::Touch)
                .ok_or(FrameError::InvalidFrame),
            MSG_PING => Ok(PanelCommand::Ping),
            _ => Err(FrameError::InvalidFrame),
        }
    }

    /// Encode this command into a frame (for testing or simulation)
    pub fn to_frame(&self) -> Result<Frame, FrameError> {
        match self {
            PanelCommand::Touch(event) => Frame::new(MSG_TOUCH, &event.to_bytes()),
            PanelCommand::Ping => Ok(Frame::empty(MSG_PING)),
        }
    }
}

/// Messages from the head unit to the panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HeadUnitMessage {
    /// Current gear and the source tag that last wrote it
    GearIndicator { gear: GearState, source_tag: u8 },
    /// Show or hide the reverse camera view
    Camera { visible: bool },
    /// Ambient glow tint
    Glow { r: u8, g: u8, b: u8 },
    /// Drag car position and the arrow to highlight
    DragOffset {
        offset: i16,
        preview: Option<GearState>,
    },
    /// Heartbeat response
    Pong,
}

impl HeadUnitMessage {
    /// Encode this message into a frame
    pub fn to_frame(&self) -> Result<Frame, FrameError> {
        match *self {
            HeadUnitMessage::GearIndicator { gear, source_tag } => {
                Frame::new(MSG_GEAR_INDICATOR, &[gear.to_byte(), source_tag])
            }
            HeadUnitMessage::Camera { visible } => Frame::new(MSG_CAMERA, &[visible as u8]),
            HeadUnitMessage::Glow { r, g, b } => Frame::new(MSG_GLOW, &[r, g, b]),
            HeadUnitMessage::DragOffset { offset, preview } => {
                let [hi, lo] = offset.to_be_bytes();
                let preview = preview.map_or(NO_PREVIEW, GearState::to_byte);
                Frame::new(MSG_DRAG_OFFSET, &[hi, lo, preview])
            }
            HeadUnitMessage::Pong => Ok(Frame::empty(MSG_PONG)),
        }
    }

    /// Parse a message from a frame (used by the panel side and tests)
    pub fn from_frame(frame: &Frame) -> Result<Self, FrameError> {
        let p = &frame.payload;
        match frame.msg_type {
            MSG_GEAR_INDICATOR if p.len() >= 2 => Ok(HeadUnitMessage::GearIndicator {
                gear: GearState::from_byte(p[0]).ok_or(FrameError::InvalidFrame)?,
                source_tag: p[1],
            }),
            MSG_CAMERA if !p.is_empty() => Ok(HeadUnitMessage::Camera {
                visible: p[0] != 0,
            }),
            MSG_GLOW if p.len() >= 3 => Ok(HeadUnitMessage::Glow {
                r: p[0],
                g: p[1],
                b: p[2],
            }),
            MSG_DRAG_OFFSET if p.len() >= 3 => Ok(HeadUnitMessage::DragOffset {
                offset: i16::from_be_bytes([p[0], p[1]]),
                preview: match p[2] {
                    NO_PREVIEW => None,
                    byte => Some(GearState::from_byte(byte).ok_or(FrameError::InvalidFrame)?),
                },
            }),
            MSG_PONG => Ok(HeadUnitMessage::Pong),
            _ => Err(FrameError::InvalidFrame),
        }
    }
}

/// Messages from the vehicle bus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum VehicleMessage {
    /// Gear reported by the vehicle, undecoded
    ///
    /// The raw byte is passed through so the receiver can classify
    /// out-of-range values instead of losing them in framing.
    Gear(u8),
    /// Vehicle speed in 0.1 km/h
    Speed { kmh_x10: u16 },
    /// Battery state
    Battery { millivolts: u16, percent: u8 },
    /// Heartbeat request
    Ping,
}

impl VehicleMessage {
    /// Parse a message from a frame
    pub fn from_frame(frame: &Frame) -> Result<Self, FrameError> {
        let p = &frame.payload;
        match frame.msg_type {
            MSG_GEAR => p
                .first()
                .map(|&b| VehicleMessage::Gear(b))
                .ok_or(FrameError::InvalidFrame),
            MSG_SPEED if p.len() >= 2 => Ok(VehicleMessage::Speed {
                kmh_x10: u16::from_be_bytes([p[0], p[1]]),
            }),
            MSG_BATTERY if p.len() >= 3 => Ok(VehicleMessage::Battery {
                millivolts: u16::from_be_bytes([p[0], p[1]]),
                percent: p[2],
            }),
            MSG_PING => Ok(VehicleMessage::Ping),
            _ => Err(FrameError::InvalidFrame),
        }
    }

    /// Encode this message into a frame (for testing or simulation)
    pub fn to_frame(&self) -> Result<Frame, FrameError> {
        match *self {
            VehicleMessage::Gear(byte) => Frame::new(MSG_GEAR, &[byte]),
            VehicleMessage::Speed { kmh_x10 } => Frame::new(MSG_SPEED, &kmh_x10.to_be_bytes()),
            VehicleMessage::Battery {
                millivolts,
                percent,
            } => {
                let [hi, lo] = millivolts.to_be_bytes();
                Frame::new(MSG_BATTERY, &[hi, lo, percent])
            }
            VehicleMessage::Ping => Ok(Frame::empty(MSG_PING)),
        }
    }
}

/// Messages from the head unit to the instrument cluster
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ClusterMessage {
    /// Gear ordinal, one byte
    Gear(u8),
    /// Heartbeat response
    Pong,
}

impl ClusterMessage {
    /// Encode this message into a frame
    pub fn to_frame(&self) -> Result<Frame, FrameError> {
        match *self {
            ClusterMessage::Gear(ordinal) => Frame::new(MSG_GEAR, &[ordinal]),
            ClusterMessage::Pong => Ok(Frame::empty(MSG_PONG)),
        }
    }
}

// Compile-time check that a touch event fits a frame
const _: () = assert!(TOUCH_EVENT_LEN <= crate::frame::MAX_PAYLOAD_SIZE);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::{GearControl, TouchPhase};

    #[test]
    fn test_panel_touch_command() {
        let event = TouchEvent::new(GearControl::NeutralButton, TouchPhase::Press, 0);
        let frame = Frame::new(MSG_TOUCH, &event.to_bytes()).unwrap();
        let cmd = PanelCommand::from_frame(&frame).unwrap();
        assert_eq!(cmd, PanelCommand::Touch(event));
    }

    #[test]
    fn test_panel_touch_short_payload() {
        let frame = Frame::new(MSG_TOUCH, &[0x01, 0x01]).unwrap();
        assert_eq!(PanelCommand::from_frame(&frame), Err(FrameError::InvalidFrame));
    }

    #[test]
    fn test_panel_ping() {
        let cmd = PanelCommand::from_frame(&Frame::empty(MSG_PING)).unwrap();
        assert_eq!(cmd, PanelCommand::Ping);
    }

    #[test]
    fn test_gear_indicator_frame() {
        let msg = HeadUnitMessage::GearIndicator {
            gear: GearState::Reverse,
            source_tag: SOURCE_TAG_BUTTON,
        };
        let frame = msg.to_frame().unwrap();
        assert_eq!(frame.msg_type, MSG_GEAR_INDICATOR);
        assert_eq!(frame.payload.as_slice(), &[1, 2]);
        assert_eq!(HeadUnitMessage::from_frame(&frame).unwrap(), msg);
    }

    #[test]
    fn test_camera_frame() {
        let frame = HeadUnitMessage::Camera { visible: true }.to_frame().unwrap();
        assert_eq!(frame.msg_type, MSG_CAMERA);
        assert_eq!(frame.payload.as_slice(), &[1]);
    }

    #[test]
    fn test_drag_offset_frame() {
        let msg = HeadUnitMessage::DragOffset {
            offset: -36,
            preview: Some(GearState::Drive),
        };
        let frame = msg.to_frame().unwrap();
        assert_eq!(frame.msg_type, MSG_DRAG_OFFSET);
        assert_eq!(frame.payload.as_slice(), &[0xFF, 0xDC, 3]);
        assert_eq!(HeadUnitMessage::from_frame(&frame), Ok(msg));
    }

    #[test]
    fn test_drag_offset_at_rest() {
        let frame = HeadUnitMessage::DragOffset {
            offset: 0,
            preview: None,
        }
        .to_frame()
        .unwrap();
        assert_eq!(frame.payload.as_slice(), &[0, 0, NO_PREVIEW]);

        let bad = Frame::new(MSG_DRAG_OFFSET, &[0, 0, 7]).unwrap();
        assert_eq!(HeadUnitMessage::from_frame(&bad), Err(FrameError::InvalidFrame));
    }

    #[test]
    fn test_vehicle_gear_keeps_raw_byte() {
        let frame = Frame::new(MSG_GEAR, &[7]).unwrap();
        assert_eq!(VehicleMessage::from_frame(&frame), Ok(VehicleMessage::Gear(7)));
    }

    #[test]
    fn test_vehicle_gear_empty_payload() {
        let frame = Frame::empty(MSG_GEAR);
        assert_eq!(VehicleMessage::from_frame(&frame), Err(FrameError::InvalidFrame));
    }

    #[test]
    fn test_vehicle_speed_and_battery() {
        let speed = VehicleMessage::Speed { kmh_x10: 125 };
        let frame = speed.to_frame().unwrap();
        assert_eq!(VehicleMessage::from_frame(&frame), Ok(speed));

        let battery = VehicleMessage::Battery {
            millivolts: 7800,
            percent: 85,
        };
        let frame = battery.to_frame().unwrap();
        assert_eq!(frame.payload.as_slice(), &[0x1E, 0x78, 85]);
        assert_eq!(VehicleMessage::from_frame(&frame), Ok(battery));
    }

    #[test]
    fn test_cluster_gear_is_single_byte() {
        let frame = ClusterMessage::Gear(GearState::Drive.to_byte())
            .to_frame()
            .unwrap();
        assert_eq!(frame.msg_type, MSG_GEAR);
        assert_eq!(frame.payload.as_slice(), &[3]);
    }

    #[test]
    fn test_unknown_type_rejected() {
        let frame = Frame::empty(0x7F);
        assert!(PanelCommand::from_frame(&frame).is_err());
        assert!(VehicleMessage::from_frame(&frame).is_err());
        assert!(HeadUnitMessage::from_frame(&frame).is_err());
    }
}
