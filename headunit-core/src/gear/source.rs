//! Gear source tag

use headunit_protocol::messages::{SOURCE_TAG_BUTTON, SOURCE_TAG_THROTTLE, SOURCE_TAG_TOUCH};
use heapless::String;

/// Capacity of a rendered source label ("Source · Throttle" is 18 bytes)
pub const SOURCE_LABEL_LEN: usize = 24;

const SOURCE_PREFIX: &str = "Source · ";

/// Origin of the most recent gear write
///
/// Used for display and for the cluster publish filter only. Arbitration
/// never weighs one source over another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GearSource {
    /// On-screen gear controls
    #[default]
    Touch,
    /// Vehicle telemetry feed
    Throttle,
    /// Physical gear button
    Button,
}

impl GearSource {
    /// Lower-case tag ("touch", "throttle", "button")
    pub const fn as_str(self) -> &'static str {
        match self {
            GearSource::Touch => "touch",
            GearSource::Throttle => "throttle",
            GearSource::Button => "button",
        }
    }

    /// Capitalized tag for display
    pub const fn label(self) -> &'static str {
        match self {
            GearSource::Touch => "Touch",
            GearSource::Throttle => "Throttle",
            GearSource::Button => "Button",
        }
    }

    /// Status line form, e.g. "Source · Touch"
    pub fn display_label(self) -> String<SOURCE_LABEL_LEN> {
        let mut text = String::new();
        // Capacity covers the longest label
        let _ = text.push_str(SOURCE_PREFIX);
        let _ = text.push_str(self.label());
        text
    }

    /// Tag byte carried by the panel gear indicator
    pub const fn to_byte(self) -> u8 {
        match self {
            GearSource::Touch => SOURCE_TAG_TOUCH,
            GearSource::Throttle => SOURCE_TAG_THROTTLE,
            GearSource::Button => SOURCE_TAG_BUTTON,
        }
    }
}
