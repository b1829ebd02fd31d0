//! Pixel blend modes
//!
//! The display is 1 bit per pixel, so a "color" is really how a drawing
//! operation combines with the bit already in the framebuffer.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Numeric code for [`Color::Clear`] (pixel off)
pub const BLACK: i32 = 0;
/// Numeric code for [`Color::Set`] (pixel on)
pub const WHITE: i32 = 1;
/// Numeric code for [`Color::Invert`] (pixel flipped)
pub const INVERT: i32 = 2;

/// How a primitive writes the pixels it covers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Color {
    /// Write 0
    Clear,
    /// Write 1
    #[default]
    Set,
    /// XOR with 1
    Invert,
}

impl Color {
    /// Decode a numeric color code from a binding layer
    ///
    /// Unknown codes fall back to [`Color::Set`].
    pub const fn from_code(code: i32) -> Self {
        match code {
            BLACK => Color::Clear,
            INVERT => Color::Invert,
            _ => Color::Set,
        }
    }

    /// Numeric code of this color
    pub const fn code(self) -> i32 {
        match self {
            Color::Clear => BLACK,
            Color::Set => WHITE,
            Color::Invert => INVERT,
        }
    }

    /// Apply this color to the bits selected by `mask`
    #[inline]
    pub(crate) fn apply(self, byte: &mut u8, mask: u8) {
        match self {
            Color::Set => *byte |= mask,
            Color::Clear => *byte &= !mask,
            Color::Invert => *byte ^= mask,
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn test_from_code() {
        assert_eq!(Color::from_code(0), Color::Clear);
        assert_eq!(Color::from_code(1), Color::Set);
        assert_eq!(Color::from_code(2), Color::Invert);
    }

    #[test]
    fn test_unknown_code_is_set() {
        assert_eq!(Color::from_code(3), Color::Set);
        assert_eq!(Color::from_code(-1), Color::Set);
        assert_eq!(Color::from_code(i32::MAX), Color::Set);
    }

    #[test]
    fn test_code_roundtrip() {
        for color in [Color::Clear, Color::Set, Color::Invert] {
            assert_eq!(Color::from_code(color.code()), color);
        }
    }

    #[test]
    fn test_apply() {
        let mut byte = 0b0000_0001;
        Color::Set.apply(&mut byte, 0b1000_0000);
        assert_eq!(byte, 0b1000_0001);

        Color::Clear.apply(&mut byte, 0b0000_0001);
        assert_eq!(byte, 0b1000_0000);

        Color::Invert.apply(&mut byte, 0b1100_0000);
        assert_eq!(byte, 0b0100_0000);
    }
}
