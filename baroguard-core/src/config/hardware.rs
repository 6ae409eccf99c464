//! Hardware configuration types
//!
//! Pin assignments and bus addresses for the indicator board.

/// Pin configuration with optional inversion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinConfig {
    /// GPIO pin number (0-29 for RP2040)
    pub pin: u8,
    /// Pin is active-low (inverted)
    pub inverted: bool,
}

impl PinConfig {
    /// Create a new pin config
    pub const fn new(pin: u8) -> Self {
        Self {
            pin,
            inverted: false,
        }
    }

    /// Create an inverted (active-low) pin
    pub const fn inverted(pin: u8) -> Self {
        Self {
            pin,
            inverted: true,
        }
    }
}

/// Character LCD on an I2C backpack
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LcdConfig {
    /// 7-bit I2C address of the PCF8574 backpack
    pub address: u8,
    /// Character columns
    pub cols: u8,
    /// Character rows
    pub rows: u8,
}

impl LcdConfig {
    /// 20x4 module at the common 0x27 backpack address
    pub const DEFAULT: Self = Self {
        address: 0x27,
        cols: 20,
        rows: 4,
    };
}

/// Board wiring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BoardConfig {
    /// Safe zone indicator
    pub green_led: PinConfig,
    /// Warning zone indicator
    pub yellow_led: PinConfig,
    /// Danger zone indicator
    pub red_led: PinConfig,
    /// Siren speaker (PWM capable)
    pub speaker: PinConfig,
    /// Shared I2C bus data line
    pub i2c_sda: u8,
    /// Shared I2C bus clock line
    pub i2c_scl: u8,
    /// 7-bit I2C address of the pressure sensor
    pub sensor_address: u8,
    /// Character display
    pub lcd: LcdConfig,
}

impl BoardConfig {
    pub const DEFAULT: Self = Self {
        green_led: PinConfig::new(3),
        yellow_led: PinConfig::new(5),
        red_led: PinConfig::new(4),
        speaker: PinConfig::new(8),
        i2c_sda: 6,
        i2c_scl: 7,
        sensor_address: 0x77,
        lcd: LcdConfig::DEFAULT,
    };

    /// Every GPIO this board claims, for conflict checking
    pub fn gpio_pins(&self) -> [u8; 6] {
        [
            self.green_led.pin,
            self.yellow_led.pin,
            self.red_led.pin,
            self.speaker.pin,
            self.i2c_sda,
            self.i2c_scl,
        ]
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
