//! Display configuration
//!
//! Everything a session needs to know before it talks to the panel, plus
//! the drawing defaults it starts with. Stored as postcard so it can sit
//! next to other settings in flash.

use serde::{Deserialize, Serialize};

use oledkit_graphics::Color;
use oledkit_hal::DEFAULT_TIMEOUT_MS;

/// Current config format version
pub const CONFIG_VERSION: u8 = 1;

/// Upper bound on the serialized size
pub const MAX_CONFIG_SIZE: usize = 16;

/// Factory address of most SSD1306 modules (SA0 low)
pub const DEFAULT_ADDRESS: u8 = 0x3C;

/// Configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Serialization failed (buffer too small)
    Serialize,
    /// Deserialization failed
    Deserialize,
    /// Stored config was written by a different format version
    VersionMismatch,
    /// Address is reserved or not 7-bit
    InvalidAddress(u8),
    /// Font size 0 draws nothing
    InvalidFontsize,
}

/// Display session configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayConfig {
    /// Format version
    pub version: u8,
    /// 7-bit I2C address
    pub address: u8,
    /// Bus timeout for each transaction
    pub timeout_ms: u32,
    /// Initial drawing color
    pub color: Color,
    /// Initial text scale
    pub fontsize: u8,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplayConfig {
    pub const fn new() -> Self {
        Self {
            version: CONFIG_VERSION,
            address: DEFAULT_ADDRESS,
            timeout_ms: DEFAULT_TIMEOUT_MS,
            color: Color::Set,
            fontsize: 1,
        }
    }

    pub const fn with_address(mut self, address: u8) -> Self {
        self.address = address;
        self
    }

    pub const fn with_timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    pub const fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub const fn with_fontsize(mut self, fontsize: u8) -> Self {
        self.fontsize = fontsize;
        self
    }

    /// Check values a session cannot work with
    ///
    /// Addresses `0x00..=0x07` and `0x78..=0x7F` are reserved I2C
    /// addresses; anything above `0x7F` is not a 7-bit address.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0x08..=0x77).contains(&self.address) {
            return Err(ConfigError::InvalidAddress(self.address));
        }
        if self.fontsize == 0 {
            return Err(ConfigError::InvalidFontsize);
        }
        Ok(())
    }

    /// Serialize into `buf`, returning the used prefix
    pub fn to_slice<'a>(&self, buf: &'a mut [u8]) -> Result<&'a mut [u8], ConfigError> {
        postcard::to_slice(self, buf).map_err(|_| ConfigError::Serialize)
    }

    /// Deserialize and validate a stored config
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ConfigError> {
        let config: DisplayConfig =
            postcard::from_bytes(bytes).map_err(|_| ConfigError::Deserialize)?;

        if config.version != CONFIG_VERSION {
            #[cfg(feature = "defmt")]
            defmt::warn!(
                "Display config version mismatch: found {}, expected {}",
                config.version,
                CONFIG_VERSION
            );
            return Err(ConfigError::VersionMismatch);
        }

        config.validate()?;
        Ok(config)
    }
}
