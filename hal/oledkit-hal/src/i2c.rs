//! I2C bus abstractions
//!
//! Models an I2C master the way command-link style drivers expose it:
//! a transaction is opened for one device address, any number of byte
//! runs are queued into it, and closing it issues the STOP condition.
//! Everything between begin and end reaches the wire as a single
//! START ... STOP sequence.

/// Default transaction timeout in milliseconds
pub const DEFAULT_TIMEOUT_MS: u32 = 1000;

/// I2C bus master
///
/// The error type is the transport's status code. Callers surface it
/// unchanged; nothing in this stack retries a failed transaction.
pub trait I2cBus {
    /// Error type for I2C operations
    type Error;

    /// Open a write transaction to a device
    ///
    /// # Arguments
    /// * `address` - 7-bit I2C address (the write bit is added by the bus)
    /// * `timeout_ms` - Upper bound for the whole transaction
    fn begin_transaction(&mut self, address: u8, timeout_ms: u32) -> Result<(), Self::Error>;

    /// Queue bytes into the open transaction
    fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), Self::Error>;

    /// Close the open transaction (STOP condition)
    ///
    /// Buses that defer execution until STOP report the transfer status here.
    fn end_transaction(&mut self) -> Result<(), Self::Error>;

    /// Run `body` inside a transaction to `address`
    ///
    /// The transaction is always ended, including when `body` fails.
    /// The first error wins.
    fn transaction<F>(&mut self, address: u8, timeout_ms: u32, body: F) -> Result<(), Self::Error>
    where
        Self: Sized,
        F: FnOnce(&mut Self) -> Result<(), Self::Error>,
    {
        self.begin_transaction(address, timeout_ms)?;
        let result = body(self);
        let end = self.end_transaction();
        result.and(end)
    }

    /// Write data to a device in one transaction
    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), Self::Error>
    where
        Self: Sized,
    {
        self.transaction(address, DEFAULT_TIMEOUT_MS, |bus| bus.write_bytes(data))
    }

    /// Check whether a device acknowledges its address with an empty write
    fn acknowledges(&mut self, address: u8) -> bool
    where
        Self: Sized,
    {
        self.transaction(address, DEFAULT_TIMEOUT_MS, |_| Ok(())).is_ok()
    }
}

/// Error from I2C operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum I2cBusError {
    /// Bus error
    Bus,
    /// Arbitration lost
    ArbitrationLost,
    /// NACK received
    Nack,
    /// Overrun
    Overrun,
    /// Transaction did not fit the staging buffer
    Overflow,
    /// `write_bytes` / `end_transaction` without an open transaction
    NoTransaction,
    /// `begin_transaction` while a transaction is already open
    Busy,
    /// Other error
    Other,
}

impl From<embedded_hal::i2c::ErrorKind> for I2cBusError {
    fn from(kind: embedded_hal::i2c::ErrorKind) -> Self {
        use embedded_hal::i2c::ErrorKind;

        match kind {
            ErrorKind::Bus => I2cBusError::Bus,
            ErrorKind::ArbitrationLoss => I2cBusError::ArbitrationLost,
            ErrorKind::NoAcknowledge(_) => I2cBusError::Nack,
            ErrorKind::Overrun => I2cBusError::Overrun,
            _ => I2cBusError::Other,
        }
    }
}
