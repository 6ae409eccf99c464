//! Monitor behavior configuration

use crate::safety::ZoneThresholds;
use crate::traits::Oversampling;

/// Indicator blink timing for the Safe and Warning zones
///
/// One on/off pulse is emitted per cycle; this is not a background blink.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BlinkConfig {
    /// LED on time (ms)
    pub on_ms: u32,
    /// LED off time after the pulse (ms)
    pub off_ms: u32,
}

impl BlinkConfig {
    pub const DEFAULT: Self = Self {
        on_ms: 250,
        off_ms: 250,
    };
}

impl Default for BlinkConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Danger siren configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SirenConfig {
    /// Tone played while the red LED is lit (Hz)
    pub high_hz: u32,
    /// Tone played while the red LED is dark (Hz)
    pub low_hz: u32,
    /// Length of each half of the pattern (ms)
    pub half_period_ms: u32,
    /// How long the siren sounds per Danger cycle (ms)
    pub duration_ms: u32,
}

impl SirenConfig {
    pub const DEFAULT: Self = Self {
        high_hz: 2200,
        low_hz: 1800,
        half_period_ms: 100,
        duration_ms: 1000,
    };
}

impl Default for SirenConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Sensor measurement configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MeasurementConfig {
    /// Oversampling level requested for every pressure conversion
    pub oversampling: Oversampling,
    /// Pause after a failed trigger or read before the next cycle (ms)
    pub retry_delay_ms: u32,
}

impl MeasurementConfig {
    pub const DEFAULT: Self = Self {
        oversampling: Oversampling::UltraHighResolution,
        retry_delay_ms: 1000,
    };
}

impl Default for MeasurementConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Complete monitor configuration
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MonitorConfig {
    /// Zone boundaries
    pub thresholds: ZoneThresholds,
    /// Safe/Warning LED pulse
    pub blink: BlinkConfig,
    /// Danger siren
    pub siren: SirenConfig,
    /// Sensor request settings
    pub measurement: MeasurementConfig,
}

impl MonitorConfig {
    pub const DEFAULT: Self = Self {
        thresholds: ZoneThresholds::DEFAULT,
        blink: BlinkConfig::DEFAULT,
        siren: SirenConfig::DEFAULT,
        measurement: MeasurementConfig::DEFAULT,
    };
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
