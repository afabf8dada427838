//! Gear selection and its wire encoding
//!
//! The instrument cluster decodes a single byte per gear change, so the
//! ordinal mapping below is fixed: 0=Park, 1=Reverse, 2=Neutral, 3=Drive.

/// Vehicle drive-mode selection
///
/// The ordinal only indexes display tables. It carries no ordering
/// semantics: Park is not "less than" Reverse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum GearState {
    #[default]
    Park = 0,
    Reverse = 1,
    Neutral = 2,
    Drive = 3,
}

// Wire format values
const GEAR_PARK: u8 = 0;
const GEAR_REVERSE: u8 = 1;
const GEAR_NEUTRAL: u8 = 2;
const GEAR_DRIVE: u8 = 3;

impl GearState {
    /// All gears in ordinal order
    pub const ALL: [GearState; 4] = [
        GearState::Park,
        GearState::Reverse,
        GearState::Neutral,
        GearState::Drive,
    ];

    /// Parse a gear from its wire format byte
    ///
    /// Out-of-range bytes return `None`; they are never coerced to Park.
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            GEAR_PARK => Some(GearState::Park),
            GEAR_REVERSE => Some(GearState::Reverse),
            GEAR_NEUTRAL => Some(GearState::Neutral),
            GEAR_DRIVE => Some(GearState::Drive),
            _ => None,
        }
    }

    /// Convert to wire format byte
    pub const fn to_byte(self) -> u8 {
        self as u8
    }

    /// Index into per-gear display tables (colors, labels)
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Single-letter display form
    pub fn letter(self) -> char {
        match self {
            GearState::Park => 'P',
            GearState::Reverse => 'R',
            GearState::Neutral => 'N',
            GearState::Drive => 'D',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_mapping_is_fixed() {
        assert_eq!(GearState::Park.to_byte(), 0);
        assert_eq!(GearState::Reverse.to_byte(), 1);
        assert_eq!(GearState::Neutral.to_byte(), 2);
        assert_eq!(GearState::Drive.to_byte(), 3);
    }

    #[test]
    fn test_from_byte() {
        for gear in GearState::ALL {
            assert_eq!(GearState::from_byte(gear.to_byte()), Some(gear));
        }
    }

    #[test]
    fn test_out_of_range_is_rejected() {
        assert_eq!(GearState::from_byte(4), None);
        assert_eq!(GearState::from_byte(0xFF), None);
    }

    #[test]
    fn test_default_is_park() {
        assert_eq!(GearState::default(), GearState::Park);
    }

    #[test]
    fn test_letters() {
        let letters: [char; 4] = GearState::ALL.map(GearState::letter);
        assert_eq!(letters, ['P', 'R', 'N', 'D']);
    }
}
