//! SSD1306 display session
//!
//! Ties the pieces together for one physical 128x64 panel:
//!
//! - [`DisplayConfig`] - bus address, timeout and drawing defaults,
//!   persistable with postcard
//! - [`Ssd1306`] - owns the bus and the framebuffer, draws with the
//!   session's current color and font size, and pushes frames
//!
//! # Example
//!
//! ```ignore
//! let i2c: StagedI2c<_> = StagedI2c::new(i2c);
//! let mut display = Ssd1306::new(i2c, DisplayConfig::default())?;
//! display.init()?;
//! timer.delay_ms(POWER_ON_DELAY_MS);
//!
//! display.set_fontsize(2);
//! display.text(0, 0, b"Hello");
//! display.circle(96, 40, 12);
//! display.display()?;
//! ```

#![no_std]
#![deny(unsafe_code)]

pub mod config;
pub mod ssd1306;

pub use config::{ConfigError, DisplayConfig, CONFIG_VERSION};
pub use oledkit_graphics::{Color, Cursor, FrameBuffer};
pub use oledkit_protocol::{CommandError, POWER_ON_DELAY_MS};
pub use ssd1306::Ssd1306;
