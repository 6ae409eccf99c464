//! Cycle outcomes
//!
//! The monitor never logs by itself; it reports what each step did and the
//! firmware turns that into diagnostic output.

use crate::safety::Zone;
use crate::state::{ErrorKind, MonitorState};
use crate::traits::{DisplayError, PressureReading, SensorError};

/// A measurement that did not produce a reading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MeasurementError {
    /// Conversion could not be started
    Trigger(SensorError),
    /// Conversion result could not be read
    Read(SensorError),
}

impl MeasurementError {
    /// Human-readable diagnostic line
    pub fn message(&self) -> &'static str {
        match self {
            MeasurementError::Trigger(_) => "Pressure measurement error.",
            MeasurementError::Read(_) => "Pressure read error.",
        }
    }

    /// Underlying sensor error
    pub fn sensor_error(&self) -> SensorError {
        match self {
            MeasurementError::Trigger(e) | MeasurementError::Read(e) => *e,
        }
    }
}

/// Initialization failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InitError {
    /// Sensor did not answer; the monitor is now halted
    Sensor(SensorError),
    /// Monitor was already halted by an earlier failure
    Halted(ErrorKind),
}

/// What one cycle did
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CycleReport {
    /// A reading was taken and the outputs updated
    Measured {
        reading: PressureReading,
        zone: Zone,
        /// Display write failure, if any; the LEDs and siren still ran
        display_error: Option<DisplayError>,
    },
    /// Trigger or read failed; outputs left unchanged after a pause
    MeasurementFailed(MeasurementError),
    /// Monitor not running; nothing was touched
    Inactive(MonitorState),
}
