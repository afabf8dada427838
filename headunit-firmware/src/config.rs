//! Configuration persistence
//!
//! The head unit config lives in the last 4K flash sector as a version byte
//! followed by postcard data. Erased or invalid flash falls back to the
//! built-in defaults.

use defmt::*;
use embassy_rp::flash::{Blocking, Flash};
use embassy_rp::peripherals::FLASH;
use embassy_rp::Peri;

use headunit_core::config::{self, ConfigError, HeadUnitConfig, MAX_CONFIG_SIZE};

/// Flash size on the target board
pub const FLASH_SIZE: usize = 2 * 1024 * 1024;

/// Config sector offset (last 4K of flash, reserved in memory.x)
const CONFIG_OFFSET: u32 = (FLASH_SIZE - 4096) as u32;

/// Version byte of erased flash
const ERASED: u8 = 0xFF;

/// Load the head unit configuration
///
/// Returns the stored config, or defaults if none is stored or it is invalid.
pub fn load_config(flash: Peri<'static, FLASH>) -> HeadUnitConfig {
    let mut flash = Flash::<_, Blocking, FLASH_SIZE>::new_blocking(flash);
    let mut buffer = [0u8; MAX_CONFIG_SIZE];

    if let Err(e) = flash.blocking_read(CONFIG_OFFSET, &mut buffer) {
        warn!("Config flash read failed: {:?}, using defaults", e);
        return HeadUnitConfig::default();
    }

    match config::from_bytes(&buffer) {
        Ok(config) => {
            info!("Loaded configuration from flash");
            config
        }
        Err(ConfigError::UnsupportedVersion(ERASED)) => {
            debug!("No configuration in flash, using defaults");
            HeadUnitConfig::default()
        }
        Err(e) => {
            warn!("Failed to load configuration: {:?}, using defaults", e);
            HeadUnitConfig::default()
        }
    }
}
