//! Zone classification
//!
//! Zones are derived from the current reading alone. There is no
//! hysteresis, so a reading that oscillates across a boundary flips the
//! zone every cycle.

/// Lowest pressure still considered safe (hPa)
pub const SAFE_MIN_HPA: f32 = 750.0;

/// Lowest pressure in the warning band (hPa); anything below is danger
pub const WARNING_MIN_HPA: f32 = 550.0;

/// Oxygen safety zone
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Zone {
    /// Pressure at or above the safe threshold
    Safe,
    /// Pressure between the warning and safe thresholds
    Warning,
    /// Pressure below the warning threshold
    Danger,
}

impl Zone {
    /// Headline shown on the second display row
    pub fn title(&self) -> &'static str {
        match self {
            Zone::Safe => "Safe Zone",
            Zone::Warning => "Warning!",
            Zone::Danger => "Danger!",
        }
    }

    /// Oxygen status shown on the third display row
    pub fn detail(&self) -> &'static str {
        match self {
            Zone::Safe => "Oxygen OK",
            Zone::Warning => "Oxygen dropping",
            Zone::Danger => "Oxygen CRITICAL",
        }
    }

    /// Check if this zone sounds the siren
    pub fn is_alarm(&self) -> bool {
        matches!(self, Zone::Danger)
    }
}

/// Zone boundaries
///
/// Each zone is closed on its lower threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ZoneThresholds {
    /// Readings at or above this are Safe (hPa)
    pub safe_min_hpa: f32,
    /// Readings at or above this (and below `safe_min_hpa`) are Warning (hPa)
    pub warning_min_hpa: f32,
}

impl ZoneThresholds {
    pub const DEFAULT: Self = Self {
        safe_min_hpa: SAFE_MIN_HPA,
        warning_min_hpa: WARNING_MIN_HPA,
    };

    /// Classify a pressure reading
    ///
    /// A NaN reading compares false against both thresholds and lands in
    /// `Danger`.
    pub fn classify(&self, pressure_hpa: f32) -> Zone {
        if pressure_hpa >= self.safe_min_hpa {
            Zone::Safe
        } else if pressure_hpa >= self.warning_min_hpa {
            Zone::Warning
        } else {
            Zone::Danger
        }
    }
}

impl Default for ZoneThresholds {
    fn default() -> Self {
        Self::DEFAULT
    }
}
