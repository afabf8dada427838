//! Binary configuration encoding
//!
//! Layout: one version byte followed by the postcard encoding of
//! [`HeadUnitConfig`]. Decoded configs are validated before use.

use super::{ConfigError, HeadUnitConfig};

/// Current layout version
pub const CONFIG_VERSION: u8 = 1;

/// Upper bound on the encoded size
pub const MAX_CONFIG_SIZE: usize = 64;

/// Encode `config` into `buffer`, returning the used prefix
pub fn to_bytes<'b>(
    config: &HeadUnitConfig,
    buffer: &'b mut [u8],
) -> Result<&'b mut [u8], ConfigError> {
    let (version, body) = buffer.split_first_mut().ok_or(ConfigError::Serialize)?;
    *version = CONFIG_VERSION;
    let len = postcard::to_slice(config, body)
        .map_err(|_| ConfigError::Serialize)?
        .len();
    Ok(&mut buffer[..1 + len])
}

/// Decode and validate a stored config
pub fn from_bytes(bytes: &[u8]) -> Result<HeadUnitConfig, ConfigError> {
    let (&version, body) = bytes.split_first().ok_or(ConfigError::Deserialize)?;
    if version != CONFIG_VERSION {
        return Err(ConfigError::UnsupportedVersion(version));
    }
    let config: HeadUnitConfig =
        postcard::from_bytes(body).map_err(|_| ConfigError::Deserialize)?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stored_config_restores() {
        let mut config = HeadUnitConfig::default();
        config.gesture.hold_ms = 800;
        config.glow_brightness = 40;

        let mut buffer = [0u8; MAX_CONFIG_SIZE];
        let bytes = to_bytes(&config, &mut buffer).unwrap();
        assert_eq!(bytes[0], CONFIG_VERSION);
        assert_eq!(from_bytes(bytes), Ok(config));
    }

    #[test]
    fn test_wrong_version() {
        let mut buffer = [0u8; MAX_CONFIG_SIZE];
        let bytes = to_bytes(&HeadUnitConfig::default(), &mut buffer).unwrap();
        bytes[0] = 9;
        assert_eq!(from_bytes(bytes), Err(ConfigError::UnsupportedVersion(9)));
    }

    #[test]
    fn test_truncated() {
        assert_eq!(from_bytes(&[]), Err(ConfigError::Deserialize));
        assert_eq!(
            from_bytes(&[CONFIG_VERSION, 0x23]),
            Err(ConfigError::Deserialize)
        );
    }

    #[test]
    fn test_invalid_values_rejected() {
        let mut config = HeadUnitConfig::default();
        config.glow_brightness = 200;
        let mut buffer = [0u8; MAX_CONFIG_SIZE];
        let bytes = to_bytes(&config, &mut buffer).unwrap();
        assert_eq!(from_bytes(bytes), Err(ConfigError::InvalidBrightness));
    }

    #[test]
    fn test_buffer_too_small() {
        let mut buffer = [0u8; 4];
        assert_eq!(
            to_bytes(&HeadUnitConfig::default(), &mut buffer).map(|b| b.len()),
            Err(ConfigError::Serialize)
        );
    }
}
