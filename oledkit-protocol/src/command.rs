//! SSD1306 command set
//!
//! Only the commands needed to bring the panel up and to point the RAM
//! write pointer at the top-left corner. Contrast and scrolling are set
//! once during init and never changed at runtime.

/// SSD1306 commands
pub mod cmd {
    // Fundamental
    pub const SET_CONTRAST: u8 = 0x81;
    pub const RESUME_RAM_CONTENT_DISPLAY: u8 = 0xA4;
    pub const DISPLAY_OFF: u8 = 0xAE;
    pub const DISPLAY_ON: u8 = 0xAF;

    // Scrolling
    pub const STOP_SCROLLING: u8 = 0x2E;

    // Addressing
    pub const SET_MEMORY_ADDR_MODE: u8 = 0x20;
    pub const SET_COLUMN_ADDR: u8 = 0x21;
    pub const SET_PAGE_ADDR: u8 = 0x22;

    // Hardware configuration
    pub const SET_DISPLAY_START_LINE: u8 = 0x40;
    pub const SET_SEG_REMAP: u8 = 0xA1;
    pub const SET_MUX_RATIO: u8 = 0xA8;
    pub const SET_COM_SCAN_DEC: u8 = 0xC8;
    pub const SET_DISPLAY_OFFSET: u8 = 0xD3;
    pub const SET_COM_PINS: u8 = 0xDA;
    pub const SET_OSC_FREQUENCY: u8 = 0xD5;

    // Charge pump
    pub const SET_CHARGE_PUMP: u8 = 0x8D;
}

/// Horizontal addressing mode argument for `SET_MEMORY_ADDR_MODE`
pub const ADDR_MODE_HORIZONTAL: u8 = 0x00;

/// Time the panel needs after `DISPLAY_ON` before it shows RAM content
pub const POWER_ON_DELAY_MS: u32 = 200;

/// Point the RAM pointer at column 0 / page 0 with horizontal auto-increment
///
/// After this the next 1024 data bytes fill the panel left to right, page
/// by page. Re-send it whenever the pointer position is unknown, e.g.
/// after a failed frame transfer.
pub const ADDRESSING_SEQUENCE: &[&[u8]] = &[
    &[cmd::SET_MEMORY_ADDR_MODE, ADDR_MODE_HORIZONTAL],
    &[cmd::SET_COLUMN_ADDR, 0x00, 0x7F],
    &[cmd::SET_PAGE_ADDR, 0x00, 0x07],
];

/// Panel configuration for a 128x64 module, sent with the display off
pub const INIT_SEQUENCE: &[&[u8]] = &[
    &[cmd::DISPLAY_OFF],
    &[cmd::SET_MUX_RATIO, 0x3F], // 64 lines
    &[cmd::SET_DISPLAY_OFFSET, 0x00],
    &[cmd::SET_DISPLAY_START_LINE],
    &[cmd::SET_SEG_REMAP],    // SEG0 is column 127
    &[cmd::SET_COM_SCAN_DEC], // Flip vertically
    &[cmd::SET_COM_PINS, 0x12], // Alternative COM config
    &[cmd::SET_CONTRAST, 0x7F],
    &[cmd::STOP_SCROLLING],
    &[cmd::RESUME_RAM_CONTENT_DISPLAY],
    &[cmd::SET_OSC_FREQUENCY, 0x00],
    &[cmd::SET_CHARGE_PUMP, 0x14], // Enable charge pump
];

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn test_init_starts_with_display_off() {
        assert_eq!(INIT_SEQUENCE[0], &[cmd::DISPLAY_OFF]);
        assert!(INIT_SEQUENCE.iter().all(|c| !c.contains(&cmd::DISPLAY_ON)));
    }

    #[test]
    fn test_addressing_covers_panel() {
        assert_eq!(ADDRESSING_SEQUENCE[1], &[0x21, 0x00, 127]);
        assert_eq!(ADDRESSING_SEQUENCE[2], &[0x22, 0x00, 7]);
    }

    #[test]
    fn test_no_empty_commands() {
        for command in INIT_SEQUENCE.iter().chain(ADDRESSING_SEQUENCE) {
            assert!(!command.is_empty());
        }
    }
}
