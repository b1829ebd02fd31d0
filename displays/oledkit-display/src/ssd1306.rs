//! SSD1306 session
//!
//! One [`Ssd1306`] value per panel. It owns the bus and the framebuffer;
//! drawing calls only touch memory and the panel changes on
//! [`Ssd1306::display`].

use core::iter::once;

use oledkit_graphics::{Color, Cursor, FrameBuffer};
use oledkit_hal::I2cBus;
use oledkit_protocol::command::cmd;
use oledkit_protocol::{
    send_commands, send_frame, CommandError, ADDRESSING_SEQUENCE, INIT_SEQUENCE,
};

use crate::config::{ConfigError, DisplayConfig};

/// Display on, sent last during init
const DISPLAY_ON: &[u8] = &[cmd::DISPLAY_ON];

/// SSD1306 128x64 display over I2C
///
/// Drawing uses the session's current [`color`](Self::color) and
/// [`fontsize`](Self::fontsize) instead of per-call parameters.
/// Coordinates outside the panel are clipped, so none of the drawing
/// methods can fail.
pub struct Ssd1306<BUS> {
    bus: BUS,
    address: u8,
    timeout_ms: u32,
    framebuffer: FrameBuffer,
    color: Color,
    fontsize: u8,
}

impl<BUS: I2cBus> Ssd1306<BUS> {
    /// Create a session with a blank framebuffer
    ///
    /// The config is validated first, so a reserved address or a zero font
    /// size never reaches the bus. Nothing is sent until
    /// [`init`](Self::init) or [`display`](Self::display).
    pub fn new(bus: BUS, config: DisplayConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            bus,
            address: config.address,
            timeout_ms: config.timeout_ms,
            framebuffer: FrameBuffer::new(),
            color: config.color,
            fontsize: config.fontsize,
        })
    }

    /// Configure the panel and switch it on
    ///
    /// Sends the panel setup, the addressing sequence and display-on, one
    /// transaction per command. The panel needs
    /// [`POWER_ON_DELAY_MS`](oledkit_protocol::POWER_ON_DELAY_MS) before it
    /// shows anything; waiting is up to the caller.
    ///
    /// On failure the error carries the position of the failing command in
    /// that combined sequence.
    pub fn init(&mut self) -> Result<(), CommandError<BUS::Error>> {
        let sequence = INIT_SEQUENCE
            .iter()
            .chain(ADDRESSING_SEQUENCE)
            .chain(once(&DISPLAY_ON));

        send_commands(&mut self.bus, self.address, self.timeout_ms, sequence).map_err(|e| {
            #[cfg(feature = "defmt")]
            defmt::warn!("SSD1306 init failed at command {}", e.index);
            e
        })?;

        #[cfg(feature = "defmt")]
        defmt::info!("SSD1306 initialized at address {=u8:#x}", self.address);
        Ok(())
    }

    /// Point the controller's RAM pointer back at the top-left corner
    ///
    /// Needed after a failed [`display`](Self::display), which leaves the
    /// pointer wherever the transfer stopped.
    pub fn readdress(&mut self) -> Result<(), CommandError<BUS::Error>> {
        send_commands(&mut self.bus, self.address, self.timeout_ms, ADDRESSING_SEQUENCE).map_err(
            |e| {
                #[cfg(feature = "defmt")]
                defmt::warn!("SSD1306 readdress failed at command {}", e.index);
                e
            },
        )
    }

    /// Check whether the panel acknowledges its address
    pub fn is_ready(&mut self) -> bool {
        self.bus.acknowledges(self.address)
    }

    /// Send the framebuffer to the panel
    ///
    /// The bus status is returned unchanged and the transfer is not
    /// retried. Call [`readdress`](Self::readdress) before trying again.
    pub fn display(&mut self) -> Result<(), BUS::Error> {
        let result = send_frame(
            &mut self.bus,
            self.address,
            self.timeout_ms,
            self.framebuffer.as_bytes(),
        );

        #[cfg(feature = "defmt")]
        match &result {
            Ok(()) => defmt::debug!("Frame sent, {} pixels lit", self.framebuffer.count_lit()),
            Err(_) => defmt::warn!("SSD1306 frame transfer failed"),
        }

        result
    }

    /// Release the bus, dropping the framebuffer
    pub fn release(self) -> BUS {
        self.bus
    }
}

impl<BUS> Ssd1306<BUS> {
    /// Turn every pixel off
    pub fn clear(&mut self) {
        self.framebuffer.clear();
    }

    /// Plot one pixel in the current color
    pub fn set_pixel(&mut self, x: i32, y: i32) {
        self.framebuffer.set_pixel(x, y, self.color);
    }

    /// 1 if lit, 0 if off or outside the panel
    pub fn get_pixel(&self, x: i32, y: i32) -> u8 {
        self.framebuffer.get_pixel(x, y)
    }

    /// Draw a line between two points, both inclusive
    pub fn line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32) {
        self.framebuffer.draw_line(x0, y0, x1, y1, self.color);
    }

    /// Draw `h` pixels down from `(x, y)`
    pub fn vline(&mut self, x: i32, y: i32, h: i32) {
        self.framebuffer.draw_vertical_line(x, y, h, self.color);
    }

    /// Draw `w` pixels right from `(x, y)`
    pub fn hline(&mut self, x: i32, y: i32, w: i32) {
        self.framebuffer.draw_horizontal_line(x, y, w, self.color);
    }

    /// Outline a `w` by `h` rectangle
    pub fn rect(&mut self, x: i32, y: i32, w: i32, h: i32) {
        self.framebuffer.draw_rect(x, y, w, h, self.color);
    }

    /// Fill a `w` by `h` rectangle
    pub fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32) {
        self.framebuffer.draw_fill_rect(x, y, w, h, self.color);
    }

    /// Outline a circle of radius `r`
    pub fn circle(&mut self, x: i32, y: i32, r: i32) {
        self.framebuffer.draw_circle(x, y, r, self.color);
    }

    /// Fill a circle of radius `r`
    pub fn fill_circle(&mut self, x: i32, y: i32, r: i32) {
        self.framebuffer.draw_fill_circle(x, y, r, self.color);
    }

    /// Draw text at the current font size, returning the end cursor
    pub fn text(&mut self, x: i32, y: i32, text: &[u8]) -> Cursor {
        self.framebuffer
            .display_text(x, y, text, self.color, self.fontsize)
    }

    /// Current drawing color
    pub fn color(&self) -> Color {
        self.color
    }

    /// Set the drawing color
    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    /// Set the color from a numeric code; unknown codes mean [`Color::Set`]
    pub fn set_color_code(&mut self, code: i32) {
        self.color = Color::from_code(code);
    }

    /// Current text scale
    pub fn fontsize(&self) -> u8 {
        self.fontsize
    }

    /// Set the text scale; 0 makes text invisible
    pub fn set_fontsize(&mut self, fontsize: u8) {
        self.fontsize = fontsize;
    }

    /// Framebuffer as drawn so far
    pub fn framebuffer(&self) -> &FrameBuffer {
        &self.framebuffer
    }

    /// Framebuffer for drawing with an explicit color
    pub fn framebuffer_mut(&mut self) -> &mut FrameBuffer {
        &mut self.framebuffer
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use std::vec::Vec;
    use oledkit_graphics::{BUFFER_SIZE, INVERT};
    use oledkit_hal::{I2cBusError, StagedI2c};

    /// Bus that records every completed transaction
    #[derive(Default)]
    struct RecordingBus {
        open: Option<(u8, Vec<u8>)>,
        done: Vec<(u8, Vec<u8>)>,
        /// Fail the transaction with this index (0-based) at its first write
        fail_transaction: Option<usize>,
        nack_address: bool,
    }

    impl I2cBus for RecordingBus {
        type Error = I2cBusError;

        fn begin_transaction(&mut self, address: u8, _timeout_ms: u32) -> Result<(), Self::Error> {
            self.open = Some((address, Vec::new()));
            if self.nack_address {
                return Err(I2cBusError::Nack);
            }
            Ok(())
        }

        fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
            if self.fail_transaction == Some(self.done.len()) {
                return Err(I2cBusError::Bus);
            }
            self.open.as_mut().unwrap().1.extend_from_slice(bytes);
            Ok(())
        }

        fn end_transaction(&mut self) -> Result<(), Self::Error> {
            let transaction = self.open.take().unwrap();
            self.done.push(transaction);
            Ok(())
        }
    }

    fn session() -> Ssd1306<RecordingBus> {
        Ssd1306::new(RecordingBus::default(), DisplayConfig::default()).unwrap()
    }

    #[test]
    fn test_new_uses_config() {
        let config = DisplayConfig::new()
            .with_color(Color::Invert)
            .with_fontsize(3);
        let display = Ssd1306::new(RecordingBus::default(), config).unwrap();

        assert_eq!(display.color(), Color::Invert);
        assert_eq!(display.fontsize(), 3);
        assert_eq!(display.framebuffer().count_lit(), 0);
        assert!(display.release().done.is_empty());
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let reserved = DisplayConfig::new().with_address(0x7B);
        assert_eq!(
            Ssd1306::new(RecordingBus::default(), reserved).err(),
            Some(ConfigError::InvalidAddress(0x7B))
        );

        let invisible = DisplayConfig::new().with_fontsize(0);
        assert_eq!(
            Ssd1306::new(RecordingBus::default(), invisible).err(),
            Some(ConfigError::InvalidFontsize)
        );
    }

    #[test]
    fn test_drawing_at_coordinate_limits() {
        let mut display = session();
        let (min, max) = (i32::MIN, i32::MAX);

        display.line(min, min, max, max);
        display.line(max, min, min, max);
        display.hline(min, 0, max);
        display.vline(0, min, max);
        display.rect(min, min, max, max);
        display.fill_rect(max, max, max, max);
        display.circle(min, max, max);
        display.fill_circle(max, min, min);
        display.set_fontsize(u8::MAX);
        let end = display.text(max, max, b"edge");
        assert_eq!(end.x, max);

        // The session is still usable and the frame still goes out whole
        display.display().unwrap();
        assert_eq!(display.release().done[0].1.len(), BUFFER_SIZE + 1);
    }

    #[test]
    fn test_init_wire_sequence() {
        let mut display = session();
        display.init().unwrap();

        let bus = display.release();
        let sent: Vec<&[u8]> = bus.done.iter().map(|(_, bytes)| bytes.as_slice()).collect();
        #[rustfmt::skip]
        let expected: [&[u8]; 16] = [
            &[0x00, 0xAE],
            &[0x00, 0xA8, 0x3F],
            &[0x00, 0xD3, 0x00],
            &[0x00, 0x40],
            &[0x00, 0xA1],
            &[0x00, 0xC8],
            &[0x00, 0xDA, 0x12],
            &[0x00, 0x81, 0x7F],
            &[0x00, 0x2E],
            &[0x00, 0xA4],
            &[0x00, 0xD5, 0x00],
            &[0x00, 0x8D, 0x14],
            &[0x00, 0x20, 0x00],
            &[0x00, 0x21, 0x00, 0x7F],
            &[0x00, 0x22, 0x00, 0x07],
            &[0x00, 0xAF],
        ];
        assert_eq!(sent, expected);
        assert!(bus.done.iter().all(|(address, _)| *address == 0x3C));
    }

    #[test]
    fn test_init_failure_reports_index() {
        let bus = RecordingBus {
            fail_transaction: Some(13),
            ..Default::default()
        };
        let mut display = Ssd1306::new(bus, DisplayConfig::default()).unwrap();

        assert_eq!(
            display.init(),
            Err(CommandError {
                index: 13,
                error: I2cBusError::Bus
            })
        );
        // Nothing after the failing command was sent
        assert_eq!(display.release().done.len(), 14);
    }

    #[test]
    fn test_readdress() {
        let mut display = session();
        display.readdress().unwrap();

        let bus = display.release();
        assert_eq!(bus.done.len(), 3);
        assert_eq!(bus.done[1].1, [0x00, 0x21, 0x00, 0x7F]);
    }

    #[test]
    fn test_display_round_trip() {
        let config = DisplayConfig::new().with_address(0x3D);
        let mut display = Ssd1306::new(RecordingBus::default(), config).unwrap();
        display.rect(0, 0, 128, 64);
        display.fill_circle(64, 32, 20);
        display.text(2, 2, b"frame");
        display.display().unwrap();

        let expected = display.framebuffer().as_bytes().to_vec();
        let bus = display.release();
        assert_eq!(bus.done.len(), 1);
        let (address, bytes) = &bus.done[0];
        assert_eq!(*address, 0x3D);
        assert_eq!(bytes.len(), BUFFER_SIZE + 1);
        assert_eq!(bytes[0], 0x40);
        assert_eq!(&bytes[1..], expected.as_slice());
    }

    #[test]
    fn test_display_failure_surfaced() {
        let bus = RecordingBus {
            fail_transaction: Some(0),
            ..Default::default()
        };
        let mut display = Ssd1306::new(bus, DisplayConfig::default()).unwrap();
        display.fill_rect(0, 0, 10, 10);

        assert_eq!(display.display(), Err(I2cBusError::Bus));
        // Framebuffer untouched, transaction still closed
        assert_eq!(display.framebuffer().count_lit(), 100);
        let bus = display.release();
        assert!(bus.open.is_none());
        assert_eq!(bus.done.len(), 1);
    }

    #[test]
    fn test_is_ready() {
        let mut display = session();
        assert!(display.is_ready());
        // Probing sends no payload
        assert!(display.release().done[0].1.is_empty());

        let bus = RecordingBus {
            nack_address: true,
            ..Default::default()
        };
        let mut display = Ssd1306::new(bus, DisplayConfig::default()).unwrap();
        assert!(!display.is_ready());
    }

    #[test]
    fn test_drawing_uses_session_color() {
        let mut display = session();
        display.fill_rect(0, 0, 4, 1);
        display.set_color(Color::Clear);
        display.set_pixel(1, 0);
        display.set_color_code(INVERT);
        display.hline(2, 0, 4);

        let lit: Vec<u8> = (0..7).map(|x| display.get_pixel(x, 0)).collect();
        assert_eq!(lit, [1, 0, 0, 0, 1, 1, 0]);
    }

    #[test]
    fn test_unknown_color_code_means_set() {
        let mut display = session();
        display.set_color(Color::Clear);
        display.set_color_code(42);
        assert_eq!(display.color(), Color::Set);
        display.set_color_code(-1);
        assert_eq!(display.color(), Color::Set);
    }

    #[test]
    fn test_session_primitives_match_framebuffer() {
        let mut display = session();
        display.line(0, 0, 30, 17);
        display.vline(40, 2, 20);
        display.circle(80, 30, 9);

        let mut expected = FrameBuffer::new();
        expected.draw_line(0, 0, 30, 17, Color::Set);
        expected.draw_vertical_line(40, 2, 20, Color::Set);
        expected.draw_circle(80, 30, 9, Color::Set);
        assert_eq!(display.framebuffer(), &expected);

        display.clear();
        assert_eq!(display.framebuffer().count_lit(), 0);
    }

    #[test]
    fn test_text_uses_fontsize() {
        let mut display = session();
        display.set_fontsize(3);
        let cursor = display.text(0, 0, b"ab\nc");
        assert_eq!(cursor, Cursor { x: 16, y: 24 });

        display.clear();
        display.set_fontsize(0);
        display.text(0, 0, b"hidden");
        assert_eq!(display.framebuffer().count_lit(), 0);
    }

    #[test]
    fn test_framebuffer_mut() {
        let mut display = session();
        display.framebuffer_mut().fill(Color::Set);
        assert_eq!(display.get_pixel(127, 63), 1);
    }

    mod staged {
        use super::*;
        use embedded_hal::i2c::{ErrorKind, ErrorType, I2c, Operation};

        /// embedded-hal bus recording whole writes
        #[derive(Default)]
        struct MockI2c {
            writes: Vec<(u8, Vec<u8>)>,
        }

        impl ErrorType for MockI2c {
            type Error = ErrorKind;
        }

        impl I2c for MockI2c {
            fn transaction(
                &mut self,
                address: u8,
                operations: &mut [Operation<'_>],
            ) -> Result<(), Self::Error> {
                let mut data = Vec::new();
                for op in operations.iter() {
                    if let Operation::Write(bytes) = op {
                        data.extend_from_slice(bytes);
                    }
                }
                self.writes.push((address, data));
                Ok(())
            }
        }

        #[test]
        fn test_frame_is_one_bus_write() {
            let bus: StagedI2c<_> = StagedI2c::new(MockI2c::default());
            let mut display = Ssd1306::new(bus, DisplayConfig::default()).unwrap();
            display.init().unwrap();
            display.text(0, 0, b"OK");
            display.display().unwrap();

            let expected = display.framebuffer().as_bytes().to_vec();
            let i2c = display.release().release();
            // 16 init commands, then the frame
            assert_eq!(i2c.writes.len(), 17);
            assert_eq!(i2c.writes[15].1, [0x00, 0xAF]);

            let (address, frame) = &i2c.writes[16];
            assert_eq!(*address, 0x3C);
            assert_eq!(frame[0], 0x40);
            assert_eq!(&frame[1..], expected.as_slice());
        }

        #[test]
        fn test_small_staging_overflows() {
            let bus: StagedI2c<_, 64> = StagedI2c::new(MockI2c::default());
            let mut display = Ssd1306::new(bus, DisplayConfig::default()).unwrap();

            assert_eq!(display.display(), Err(I2cBusError::Overflow));
            assert!(display.release().release().writes.is_empty());
        }
    }
}
