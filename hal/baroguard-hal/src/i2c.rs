//! I2C bus configuration
//!
//! The sensor and the LCD backpack share one I2C bus. Transfers go through
//! `embedded_hal::i2c::I2c`; this module only carries the bus settings the
//! chip HAL needs to bring the peripheral up.

/// I2C configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct I2cConfig {
    /// Clock frequency in Hz
    pub frequency: u32,
}

impl Default for I2cConfig {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl I2cConfig {
    /// Standard mode (100 kHz)
    ///
    /// PCF8574 backpacks are only rated for standard mode.
    pub const STANDARD: Self = Self { frequency: 100_000 };

    /// Fast mode (400 kHz)
    pub const FAST: Self = Self { frequency: 400_000 };
}
