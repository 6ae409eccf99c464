//! BMP180 barometric pressure sensor (I2C)
//!
//! Bosch digital pressure sensor with an on-die temperature sensor used for
//! compensation. Every pressure reading needs a fresh temperature reading.
//!
//! # Measurement
//!
//! - Write a conversion command to the control register (0xF4)
//! - Wait for the conversion time
//! - Read the result from 0xF6 (2 bytes for temperature, 3 for pressure)
//! - Compensate with the 11 factory calibration words (0xAA..0xBF)
//!
//! The compensation is the integer algorithm from the datasheet.

use baroguard_core::traits::{Oversampling, PressureReading, PressureSensor, SensorError};
use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;

/// Default 7-bit I2C address
pub const DEFAULT_ADDRESS: u8 = 0x77;

/// Value of the chip ID register
pub const CHIP_ID: u8 = 0x55;

/// BMP180 register addresses and commands
pub mod reg {
    /// First calibration word (AC1 MSB)
    pub const CALIBRATION: u8 = 0xAA;
    /// Chip ID
    pub const CHIP_ID: u8 = 0xD0;
    /// Measurement control
    pub const CONTROL: u8 = 0xF4;
    /// Conversion result MSB
    pub const OUT_MSB: u8 = 0xF6;

    /// Start temperature conversion
    pub const CMD_TEMPERATURE: u8 = 0x2E;
    /// Start pressure conversion; OR in `oss << 6`
    pub const CMD_PRESSURE: u8 = 0x34;
}

/// Temperature conversion time (ms)
const TEMPERATURE_CONVERSION_MS: u32 = 5;

/// Factory calibration coefficients
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Calibration {
    pub ac1: i16,
    pub ac2: i16,
    pub ac3: i16,
    pub ac4: u16,
    pub ac5: u16,
    pub ac6: u16,
    pub b1: i16,
    pub b2: i16,
    pub mb: i16,
    pub mc: i16,
    pub md: i16,
}

impl Calibration {
    /// Size of the calibration block in bytes
    pub const LEN: usize = 22;

    /// Parse the big-endian calibration block
    ///
    /// A word of 0x0000 or 0xFFFF means the EEPROM read went wrong.
    pub fn from_bytes(raw: &[u8; Self::LEN]) -> Result<Self, SensorError> {
        let mut words = [0u16; Self::LEN / 2];
        for (word, pair) in words.iter_mut().zip(raw.chunks_exact(2)) {
            *word = u16::from_be_bytes([pair[0], pair[1]]);
            if *word == 0x0000 || *word == 0xFFFF {
                return Err(SensorError::InvalidData);
            }
        }

        Ok(Self {
            ac1: words[0] as i16,
            ac2: words[1] as i16,
            ac3: words[2] as i16,
            ac4: words[3],
            ac5: words[4],
            ac6: words[5],
            b1: words[6] as i16,
            b2: words[7] as i16,
            mb: words[8] as i16,
            mc: words[9] as i16,
            md: words[10] as i16,
        })
    }

    /// Temperature intermediate B5 from the raw temperature
    fn b5(&self, ut: i32) -> Result<i64, SensorError> {
        let x1 = ((ut as i64 - self.ac6 as i64) * self.ac5 as i64) >> 15;
        let denom = x1 + self.md as i64;
        if denom == 0 {
            return Err(SensorError::InvalidData);
        }
        let x2 = ((self.mc as i64) << 11) / denom;
        Ok(x1 + x2)
    }

    /// Compensated temperature in 0.1 °C
    pub fn temperature(&self, ut: i32) -> Result<i32, SensorError> {
        let b5 = self.b5(ut)?;
        Ok(((b5 + 8) >> 4) as i32)
    }

    /// Compensated pressure in Pa
    ///
    /// `up` is the raw pressure already shifted right by `8 - oss`.
    pub fn pressure(&self, ut: i32, up: i32, oss: u8) -> Result<i32, SensorError> {
        let b6 = self.b5(ut)? - 4000;

        let x1 = (self.b2 as i64 * ((b6 * b6) >> 12)) >> 11;
        let x2 = (self.ac2 as i64 * b6) >> 11;
        let x3 = x1 + x2;
        let b3 = ((((self.ac1 as i64) * 4 + x3) << oss) + 2) >> 2;

        let x1 = (self.ac3 as i64 * b6) >> 13;
        let x2 = (self.b1 as i64 * ((b6 * b6) >> 12)) >> 16;
        let x3 = ((x1 + x2) + 2) >> 2;
        let b4 = (self.ac4 as i64 * (x3 + 32768)) >> 15;

        let b7 = (up as i64 - b3) * (50000 >> oss);
        if b4 <= 0 || b7 < 0 {
            return Err(SensorError::InvalidData);
        }

        let p = (b7 * 2) / b4;
        let x1 = (p >> 8) * (p >> 8);
        let x1 = (x1 * 3038) >> 16;
        let x2 = (-7357 * p) >> 16;

        Ok((p + ((x1 + x2 + 3791) >> 4)) as i32)
    }
}

/// BMP180 driver
///
/// `start_pressure` runs the temperature conversion synchronously, then
/// starts the pressure conversion and leaves the wait to the caller.
pub struct Bmp180<I2C, D> {
    i2c: I2C,
    delay: D,
    address: u8,
    calibration: Option<Calibration>,
    /// Raw temperature latched for the pending pressure conversion
    raw_temperature: i32,
    /// Oversampling of the pressure conversion in flight
    pending: Option<Oversampling>,
}

impl<I2C: I2c, D: DelayNs> Bmp180<I2C, D> {
    /// Create a driver at the default address
    pub fn new(i2c: I2C, delay: D) -> Self {
        Self::with_address(i2c, delay, DEFAULT_ADDRESS)
    }

    /// Create a driver at a specific address
    pub fn with_address(i2c: I2C, delay: D, address: u8) -> Self {
        Self {
            i2c,
            delay,
            address,
            calibration: None,
            raw_temperature: 0,
            pending: None,
        }
    }

    /// Calibration loaded by `begin`
    pub fn calibration(&self) -> Option<&Calibration> {
        self.calibration.as_ref()
    }

    /// Release the bus and delay
    pub fn release(self) -> (I2C, D) {
        (self.i2c, self.delay)
    }

    fn read_registers(&mut self, start: u8, buf: &mut [u8]) -> Result<(), SensorError> {
        self.i2c
            .write_read(self.address, &[start], buf)
            .map_err(|_| SensorError::Bus)
    }

    fn command(&mut self, cmd: u8) -> Result<(), SensorError> {
        self.i2c
            .write(self.address, &[reg::CONTROL, cmd])
            .map_err(|_| SensorError::Bus)
    }

    /// Blocking temperature conversion, returns UT
    fn read_raw_temperature(&mut self) -> Result<i32, SensorError> {
        self.command(reg::CMD_TEMPERATURE)?;
        self.delay.delay_ms(TEMPERATURE_CONVERSION_MS);

        let mut buf = [0u8; 2];
        self.read_registers(reg::OUT_MSB, &mut buf)?;
        Ok(u16::from_be_bytes(buf) as i32)
    }
}

impl<I2C: I2c, D: DelayNs> PressureSensor for Bmp180<I2C, D> {
    const NAME: &'static str = "BMP180";

    fn begin(&mut self) -> Result<(), SensorError> {
        self.calibration = None;
        self.pending = None;

        // An absent device NACKs its address
        let mut id = [0u8; 1];
        self.read_registers(reg::CHIP_ID, &mut id)
            .map_err(|_| SensorError::NotDetected)?;
        if id[0] != CHIP_ID {
            return Err(SensorError::NotDetected);
        }

        let mut raw = [0u8; Calibration::LEN];
        self.read_registers(reg::CALIBRATION, &mut raw)?;
        self.calibration = Some(Calibration::from_bytes(&raw)?);

        Ok(())
    }

    fn start_pressure(&mut self, oversampling: Oversampling) -> Result<u32, SensorError> {
        if self.calibration.is_none() {
            return Err(SensorError::NotReady);
        }
        self.pending = None;

        self.raw_temperature = self.read_raw_temperature()?;
        self.command(reg::CMD_PRESSURE | (oversampling.bits() << 6))?;
        self.pending = Some(oversampling);

        Ok(oversampling.conversion_time_ms())
    }

    fn read_pressure(&mut self) -> Result<PressureReading, SensorError> {
        let calibration = self.calibration.ok_or(SensorError::NotReady)?;
        let oversampling = self.pending.take().ok_or(SensorError::NotReady)?;
        let oss = oversampling.bits();

        let mut buf = [0u8; 3];
        self.read_registers(reg::OUT_MSB, &mut buf)?;
        let up = (((buf[0] as i32) << 16) | ((buf[1] as i32) << 8) | buf[2] as i32) >> (8 - oss);

        let ut = self.raw_temperature;
        let temperature = calibration.temperature(ut)?;
        let pressure = calibration.pressure(ut, up, oss)?;

        Ok(PressureReading {
            pressure_hpa: pressure as f32 / 100.0,
            temperature_c: temperature as f32 / 10.0,
        })
    }
}
