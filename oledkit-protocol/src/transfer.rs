//! Transaction framing
//!
//! Every helper here opens exactly one transaction per command or frame
//! and relies on [`I2cBus::transaction`] to close it again, so a failed
//! write never leaves the bus mid-transaction.

use oledkit_hal::I2cBus;

use crate::control::ControlByte;

/// A command in a sequence failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CommandError<E> {
    /// Position of the failing command in the sequence
    pub index: usize,
    /// Status reported by the bus
    pub error: E,
}

/// Send one command and its arguments as a command stream
pub fn send_command<B: I2cBus>(
    bus: &mut B,
    address: u8,
    timeout_ms: u32,
    command: &[u8],
) -> Result<(), B::Error> {
    bus.transaction(address, timeout_ms, |bus| {
        bus.write_bytes(&[ControlByte::CommandStream.byte()])?;
        bus.write_bytes(command)
    })
}

/// Send each command in its own transaction, stopping at the first failure
///
/// Takes any sequence of commands, so chained sequences keep one running
/// index for [`CommandError`].
pub fn send_commands<B, I>(
    bus: &mut B,
    address: u8,
    timeout_ms: u32,
    commands: I,
) -> Result<(), CommandError<B::Error>>
where
    B: I2cBus,
    I: IntoIterator,
    I::Item: AsRef<[u8]>,
{
    for (index, command) in commands.into_iter().enumerate() {
        send_command(bus, address, timeout_ms, command.as_ref())
            .map_err(|error| CommandError { index, error })?;
    }
    Ok(())
}

/// Send a full frame as one data stream
///
/// The controller's RAM pointer must already sit at the start of the
/// frame; after a failure its position is unknown.
pub fn send_frame<B: I2cBus>(
    bus: &mut B,
    address: u8,
    timeout_ms: u32,
    frame: &[u8],
) -> Result<(), B::Error> {
    bus.transaction(address, timeout_ms, |bus| {
        bus.write_bytes(&[ControlByte::DataStream.byte()])?;
        bus.write_bytes(frame)
    })
}
