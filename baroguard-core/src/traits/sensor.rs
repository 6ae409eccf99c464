//! Pressure sensor trait

/// Errors that can occur with pressure sensing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SensorError {
    /// No sensor answered, or the chip ID did not match
    NotDetected,
    /// Bus transfer failed
    Bus,
    /// Read requested without a conversion in progress
    NotReady,
    /// Calibration or conversion data is implausible
    InvalidData,
}

/// Sensor oversampling level
///
/// Higher levels average more internal samples: more precision, longer
/// conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Oversampling {
    UltraLowPower,
    Standard,
    HighResolution,
    #[default]
    UltraHighResolution,
}

impl Oversampling {
    /// Oversampling setting as register bits (0-3)
    pub const fn bits(self) -> u8 {
        match self {
            Oversampling::UltraLowPower => 0,
            Oversampling::Standard => 1,
            Oversampling::HighResolution => 2,
            Oversampling::UltraHighResolution => 3,
        }
    }

    /// Maximum conversion time in milliseconds
    pub const fn conversion_time_ms(self) -> u32 {
        match self {
            Oversampling::UltraLowPower => 5,
            Oversampling::Standard => 8,
            Oversampling::HighResolution => 14,
            Oversampling::UltraHighResolution => 26,
        }
    }
}

/// One compensated measurement
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PressureReading {
    /// Compensated pressure (hPa)
    pub pressure_hpa: f32,
    /// Die temperature used by the compensation (°C); never displayed
    pub temperature_c: f32,
}

/// Trait for barometric pressure sensors
///
/// A measurement is split into a trigger and a read so the caller owns
/// the conversion wait.
pub trait PressureSensor {
    /// Part name used in status messages
    const NAME: &'static str;

    /// Probe the sensor and load its calibration
    fn begin(&mut self) -> Result<(), SensorError>;

    /// Start a pressure conversion
    ///
    /// Returns the number of milliseconds to wait before
    /// [`PressureSensor::read_pressure`].
    fn start_pressure(&mut self, oversampling: Oversampling) -> Result<u32, SensorError>;

    /// Read the result of the last started conversion
    fn read_pressure(&mut self) -> Result<PressureReading, SensorError>;
}
