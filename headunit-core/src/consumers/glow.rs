//! Ambient glow tint
//!
//! The lighting subsystem tints the ambient glow with the accent colour of
//! the current gear. Brightness is a percentage set from the lighting
//! screen; the glow alpha tops out at [`GLOW_MAX_ALPHA`].

use core::cell::Cell;

use crate::gear::{GearChange, GearObserver};
use headunit_protocol::GearState;

/// Alpha at full brightness
pub const GLOW_MAX_ALPHA: u8 = 85;

/// Brightness percentage at start-up
pub const DEFAULT_BRIGHTNESS: u8 = 75;

/// 24-bit colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// From a 0xRRGGBB literal
    pub const fn from_hex(hex: u32) -> Self {
        Self::new((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
    }
}

/// Accent colours in gear ordinal order (P, R, N, D)
const ACCENT_COLORS: [Rgb; 4] = [
    Rgb::from_hex(0x8E8E93),
    Rgb::from_hex(0xFF3B30),
    Rgb::from_hex(0xFFD60A),
    Rgb::from_hex(0x30D158),
];

/// Accent colour per gear
pub const fn accent_color(gear: GearState) -> Rgb {
    ACCENT_COLORS[gear.index()]
}

/// Where the tint is applied
pub trait GlowOutput {
    fn set_glow(&self, color: Rgb, alpha: u8);
}

/// Keeps the glow tinted with the current gear's accent colour
pub struct GlowTint<L: GlowOutput> {
    output: L,
    color: Cell<Rgb>,
    brightness: Cell<u8>,
}

impl<L: GlowOutput> GlowTint<L> {
    pub fn new(output: L) -> Self {
        Self::with_brightness(output, DEFAULT_BRIGHTNESS)
    }

    pub fn with_brightness(output: L, brightness: u8) -> Self {
        Self {
            output,
            color: Cell::new(accent_color(GearState::Park)),
            brightness: Cell::new(brightness.min(100)),
        }
    }

    /// Glow alpha for a brightness percentage (clamped to 0..=100)
    pub fn alpha(brightness: u8) -> u8 {
        (GLOW_MAX_ALPHA as u16 * brightness.min(100) as u16 / 100) as u8
    }

    /// Change brightness and re-apply the current tint
    pub fn set_brightness(&self, brightness: u8) {
        let brightness = brightness.min(100);
        self.brightness.set(brightness);
        self.output.set_glow(self.color.get(), Self::alpha(brightness));
    }

    pub fn color(&self) -> Rgb {
        self.color.get()
    }

    pub fn brightness(&self) -> u8 {
        self.brightness.get()
    }

    pub fn output(&self) -> &L {
        &self.output
    }
}

impl<L: GlowOutput> GearObserver for GlowTint<L> {
    fn on_gear_changed(&self, change: GearChange) {
        let color = accent_color(change.gear);
        self.color.set(color);
        self.output
            .set_glow(color, Self::alpha(self.brightness.get()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gear::GearSource;

    #[derive(Default)]
    struct LastGlow(Cell<Option<(Rgb, u8)>>);

    impl GlowOutput for LastGlow {
        fn set_glow(&self, color: Rgb, alpha: u8) {
            self.0.set(Some((color, alpha)));
        }
    }

    #[test]
    fn test_accent_colors() {
        assert_eq!(accent_color(GearState::Park), Rgb::new(0x8E, 0x8E, 0x93));
        assert_eq!(accent_color(GearState::Reverse), Rgb::new(0xFF, 0x3B, 0x30));
        assert_eq!(accent_color(GearState::Neutral), Rgb::new(0xFF, 0xD6, 0x0A));
        assert_eq!(accent_color(GearState::Drive), Rgb::new(0x30, 0xD1, 0x58));
    }

    #[test]
    fn test_alpha() {
        assert_eq!(GlowTint::<LastGlow>::alpha(0), 0);
        assert_eq!(GlowTint::<LastGlow>::alpha(75), 63);
        assert_eq!(GlowTint::<LastGlow>::alpha(100), 85);
        assert_eq!(GlowTint::<LastGlow>::alpha(250), 85);
    }

    #[test]
    fn test_tint_follows_gear() {
        let glow = GlowTint::new(LastGlow::default());
        glow.on_gear_changed(GearChange {
            gear: GearState::Drive,
            source: GearSource::Throttle,
        });
        assert_eq!(glow.color(), accent_color(GearState::Drive));
        assert_eq!(
            glow.output().0.get(),
            Some((accent_color(GearState::Drive), 63))
        );
    }

    #[test]
    fn test_brightness_reapplies() {
        let glow = GlowTint::new(LastGlow::default());
        glow.set_brightness(100);
        assert_eq!(
            glow.output().0.get(),
            Some((accent_color(GearState::Park), 85))
        );
    }
}
