//! Touch input events from the head unit touch panel

/// Gear controls the panel reports touches for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GearControl {
    /// "P" direct-select button
    ParkButton,
    /// "R" direct-select button
    ReverseButton,
    /// "N" press-and-hold button
    NeutralButton,
    /// "D" direct-select button
    DriveButton,
    /// Drag-car widget (drag up = Drive, drag down = Reverse)
    DragCar,
}

/// Pointer phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TouchPhase {
    /// Finger down
    Press,
    /// Finger moved while down
    Move,
    /// Finger lifted
    Release,
}

/// A single pointer event on a gear control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TouchEvent {
    /// Control under the pointer at press time
    pub control: GearControl,
    /// Pointer phase
    pub phase: TouchPhase,
    /// Pointer Y in display units (used by the drag car only)
    pub y: i16,
}

/// Encoded size of a touch event payload
pub const TOUCH_EVENT_LEN: usize = 4;

// Wire format values: controls
const CONTROL_PARK: u8 = 0x01;
const CONTROL_REVERSE: u8 = 0x02;
const CONTROL_NEUTRAL: u8 = 0x03;
const CONTROL_DRIVE: u8 = 0x04;
const CONTROL_DRAG_CAR: u8 = 0x05;

// Wire format values: phases
const PHASE_PRESS: u8 = 0x01;
const PHASE_MOVE: u8 = 0x02;
const PHASE_RELEASE: u8 = 0x03;

impl GearControl {
    /// Parse a control from its wire format byte
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            CONTROL_PARK => Some(GearControl::ParkButton),
            CONTROL_REVERSE => Some(GearControl::ReverseButton),
            CONTROL_NEUTRAL => Some(GearControl::NeutralButton),
            CONTROL_DRIVE => Some(GearControl::DriveButton),
            CONTROL_DRAG_CAR => Some(GearControl::DragCar),
            _ => None,
        }
    }

    /// Convert to wire format byte
    pub fn to_byte(self) -> u8 {
        match self {
            GearControl::ParkButton => CONTROL_PARK,
            GearControl::ReverseButton => CONTROL_REVERSE,
            GearControl::NeutralButton => CONTROL_NEUTRAL,
            GearControl::DriveButton => CONTROL_DRIVE,
            GearControl::DragCar => CONTROL_DRAG_CAR,
        }
    }
}

impl TouchPhase {
    /// Parse a phase from its wire format byte
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            PHASE_PRESS => Some(TouchPhase::Press),
            PHASE_MOVE => Some(TouchPhase::Move),
            PHASE_RELEASE => Some(TouchPhase::Release),
            _ => None,
        }
    }

    /// Convert to wire format byte
    pub fn to_byte(self) -> u8 {
        match self {
            TouchPhase::Press => PHASE_PRESS,
            TouchPhase::Move => PHASE_MOVE,
            TouchPhase::Release => PHASE_RELEASE,
        }
    }
}

impl TouchEvent {
    /// Create a touch event
    pub const fn new(control: GearControl, phase: TouchPhase, y: i16) -> Self {
        Self { control, phase, y }
    }

    /// Parse from payload bytes: `[control, phase, y_hi, y_lo]`
    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        if bytes.len() < TOUCH_EVENT_LEN {
            return None;
        }
        Some(Self {
            control: GearControl::from_byte(bytes[0])?,
            phase: TouchPhase::from_byte(bytes[1])?,
            y: i16::from_be_bytes([bytes[2], bytes[3]]),
        })
    }

    /// Convert to payload bytes
    pub fn to_bytes(&self) -> [u8; TOUCH_EVENT_LEN] {
        let [y_hi, y_lo] = self.y.to_be_bytes();
        [self.control.to_byte(), self.phase.to_byte(), y_hi, y_lo]
    }
}
