//! HD44780 character LCD on a PCF8574 I2C backpack
//!
//! The backpack's 8-bit expander drives the LCD in 4-bit mode:
//!
//! | P7..P4 | P3        | P2 | P1 | P0 |
//! |--------|-----------|----|----|----|
//! | D7..D4 | backlight | EN | RW | RS |
//!
//! Each byte is sent as two nibbles, each latched by pulsing EN.

use baroguard_core::config::LcdConfig;
use baroguard_core::traits::{DisplayError, TextDisplay};
use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;

/// Expander bits
mod bit {
    pub const RS: u8 = 0x01;
    #[allow(dead_code)]
    pub const RW: u8 = 0x02;
    pub const EN: u8 = 0x04;
    pub const BACKLIGHT: u8 = 0x08;
}

/// HD44780 commands
mod cmd {
    pub const CLEAR: u8 = 0x01;
    /// Increment cursor, no shift
    pub const ENTRY_MODE: u8 = 0x06;
    /// Display on, cursor off, blink off
    pub const DISPLAY_ON: u8 = 0x0C;
    /// 4-bit bus, 2 lines, 5x8 font
    pub const FUNCTION_SET: u8 = 0x28;
    pub const SET_DDRAM_ADDR: u8 = 0x80;
}

/// DDRAM address of the first column of each row
const ROW_OFFSETS: [u8; 4] = [0x00, 0x40, 0x14, 0x54];

/// Character LCD driver
pub struct Lcd<I2C, D> {
    i2c: I2C,
    delay: D,
    config: LcdConfig,
    backlight: bool,
    initialized: bool,
}

impl<I2C: I2c, D: DelayNs> Lcd<I2C, D> {
    /// Create a driver; nothing is sent until `init`
    pub fn new(i2c: I2C, delay: D, config: LcdConfig) -> Self {
        Self {
            i2c,
            delay,
            config,
            backlight: false,
            initialized: false,
        }
    }

    /// Release the bus and delay
    pub fn release(self) -> (I2C, D) {
        (self.i2c, self.delay)
    }

    fn backlight_bit(&self) -> u8 {
        if self.backlight {
            bit::BACKLIGHT
        } else {
            0
        }
    }

    fn expander_write(&mut self, bytes: &[u8]) -> Result<(), DisplayError> {
        self.i2c
            .write(self.config.address, bytes)
            .map_err(|_| DisplayError::Communication)
    }

    /// Latch the upper four bits of `value` with an EN pulse
    fn write_nibble(&mut self, value: u8, mode: u8) -> Result<(), DisplayError> {
        let data = (value & 0xF0) | mode | self.backlight_bit();
        self.expander_write(&[data | bit::EN, data])?;
        self.delay.delay_us(50);
        Ok(())
    }

    fn send(&mut self, value: u8, mode: u8) -> Result<(), DisplayError> {
        self.write_nibble(value, mode)?;
        self.write_nibble(value << 4, mode)
    }

    fn command(&mut self, value: u8) -> Result<(), DisplayError> {
        self.send(value, 0)
    }

    fn ensure_initialized(&self) -> Result<(), DisplayError> {
        if self.initialized {
            Ok(())
        } else {
            Err(DisplayError::NotInitialized)
        }
    }
}

impl<I2C: I2c, D: DelayNs> TextDisplay for Lcd<I2C, D> {
    fn init(&mut self) -> Result<(), DisplayError> {
        self.initialized = false;

        // Power-on settle, then park the bus with all lines low
        self.delay.delay_ms(50);
        let idle = self.backlight_bit();
        self.expander_write(&[idle])?;

        // Reset into 8-bit mode three times, then switch to 4-bit
        self.write_nibble(0x30, 0)?;
        self.delay.delay_us(4500);
        self.write_nibble(0x30, 0)?;
        self.delay.delay_us(4500);
        self.write_nibble(0x30, 0)?;
        self.delay.delay_us(150);
        self.write_nibble(0x20, 0)?;

        self.command(cmd::FUNCTION_SET)?;
        self.command(cmd::DISPLAY_ON)?;
        self.command(cmd::CLEAR)?;
        self.delay.delay_ms(2);
        self.command(cmd::ENTRY_MODE)?;

        self.initialized = true;
        Ok(())
    }

    fn set_backlight(&mut self, on: bool) -> Result<(), DisplayError> {
        self.backlight = on;
        let idle = self.backlight_bit();
        self.expander_write(&[idle])
    }

    fn clear(&mut self) -> Result<(), DisplayError> {
        self.ensure_initialized()?;
        self.command(cmd::CLEAR)?;
        self.delay.delay_ms(2);
        Ok(())
    }

    fn set_cursor(&mut self, col: u8, row: u8) -> Result<(), DisplayError> {
        self.ensure_initialized()?;
        if col >= self.config.cols || row >= self.config.rows {
            return Err(DisplayError::InvalidCoordinates);
        }
        let offset = ROW_OFFSETS
            .get(row as usize)
            .ok_or(DisplayError::InvalidCoordinates)?;
        self.command(cmd::SET_DDRAM_ADDR | (offset + col))
    }

    fn write_str(&mut self, text: &str) -> Result<(), DisplayError> {
        self.ensure_initialized()?;
        for ch in text.chars() {
            let byte = if ch.is_ascii() { ch as u8 } else { b'?' };
            self.send(byte, bit::RS)?;
        }
        Ok(())
    }

    fn dimensions(&self) -> (u8, u8) {
        (self.config.cols, self.config.rows)
    }
}
