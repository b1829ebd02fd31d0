//! Control bytes
//!
//! The first byte after the address selects how the controller reads the
//! rest of the transaction. Bit 7 (Co) marks a single command, bit 6 (D/C#)
//! marks pixel data.

/// Control byte preceding an I2C payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum ControlByte {
    /// Co=1, D/C#=0: exactly one command byte follows
    CommandSingle = 0x80,
    /// Co=0, D/C#=0: command bytes until STOP
    CommandStream = 0x00,
    /// Co=0, D/C#=1: display RAM bytes until STOP
    DataStream = 0x40,
}

impl ControlByte {
    /// Wire value
    pub const fn byte(self) -> u8 {
        self as u8
    }

    /// Parse a control byte
    pub const fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            0x80 => Some(ControlByte::CommandSingle),
            0x00 => Some(ControlByte::CommandStream),
            0x40 => Some(ControlByte::DataStream),
            _ => None,
        }
    }
}
