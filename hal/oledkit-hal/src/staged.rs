//! Staged transactions over embedded-hal
//!
//! `embedded_hal::i2c::I2c` has no open/close transaction calls; a write
//! goes out in one call. [`StagedI2c`] collects the bytes of a transaction
//! into a fixed-capacity buffer and issues them as a single `write` when
//! the transaction ends, so the device sees exactly one START ... STOP.
//!
//! The wrapped bus enforces its own timeout (configured when the
//! chip HAL's I2C peripheral is created); `timeout_ms` is not forwarded.

use embedded_hal::i2c::{Error as _, I2c};
use heapless::Vec;

use crate::i2c::{I2cBus, I2cBusError};

/// Staging capacity for a full 128x64 frame plus its control byte
pub const FRAME_STAGING_SIZE: usize = 1024 + 1;

/// Adapter implementing [`I2cBus`] for a blocking embedded-hal bus
pub struct StagedI2c<I2C, const N: usize = FRAME_STAGING_SIZE> {
    i2c: I2C,
    /// Address of the open transaction
    address: Option<u8>,
    staging: Vec<u8, N>,
    /// Set when the open transaction no longer fits `staging`
    overflowed: bool,
}

impl<I2C, const N: usize> StagedI2c<I2C, N>
where
    I2C: I2c,
{
    /// Wrap an embedded-hal I2C bus
    pub fn new(i2c: I2C) -> Self {
        Self {
            i2c,
            address: None,
            staging: Vec::new(),
            overflowed: false,
        }
    }

    /// Release the wrapped bus
    pub fn release(self) -> I2C {
        self.i2c
    }

    /// Check if a transaction is open
    pub fn in_transaction(&self) -> bool {
        self.address.is_some()
    }
}

impl<I2C, const N: usize> I2cBus for StagedI2c<I2C, N>
where
    I2C: I2c,
{
    type Error = I2cBusError;

    fn begin_transaction(&mut self, address: u8, _timeout_ms: u32) -> Result<(), Self::Error> {
        if self.address.is_some() {
            return Err(I2cBusError::Busy);
        }
        self.staging.clear();
        self.overflowed = false;
        self.address = Some(address);
        Ok(())
    }

    fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
        if self.address.is_none() {
            return Err(I2cBusError::NoTransaction);
        }
        self.staging.extend_from_slice(bytes).map_err(|_| {
            self.overflowed = true;
            I2cBusError::Overflow
        })
    }

    fn end_transaction(&mut self) -> Result<(), Self::Error> {
        let address = self.address.take().ok_or(I2cBusError::NoTransaction)?;
        // A truncated transaction never reaches the wire
        if self.overflowed {
            self.staging.clear();
            return Err(I2cBusError::Overflow);
        }
        let result = self
            .i2c
            .write(address, &self.staging)
            .map_err(|e| I2cBusError::from(e.kind()));
        self.staging.clear();
        result
    }
}
