//! oledkit Hardware Abstraction Layer
//!
//! This crate defines the bus boundary the display stack talks through.
//! The raster engine never touches hardware itself; everything it sends
//! to the controller goes through an [`i2c::I2cBus`] transaction.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  oledkit-display (session, present)     │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  oledkit-hal (this crate - traits)      │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │  StagedI2c    │       │ chip-specific │
//! │ (embedded-hal)│       │ command links │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`i2c::I2cBus`] - begin / write / end transactions on an I2C master
//!
//! # Adapters
//!
//! - [`staged::StagedI2c`] - implements [`i2c::I2cBus`] for any blocking
//!   `embedded_hal::i2c::I2c`

#![no_std]
#![deny(unsafe_code)]

pub mod i2c;
pub mod staged;

// Re-export key types at crate root for convenience
pub use i2c::{I2cBus, I2cBusError, DEFAULT_TIMEOUT_MS};
pub use staged::StagedI2c;
