//! Events that drive monitor state transitions

use super::machine::ErrorKind;

/// Monitor events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    /// Sensor answered during initialization
    SensorReady,
    /// Initialization failed; the monitor cannot continue
    InitFailed(ErrorKind),
    /// A measurement trigger or read failed (transient)
    MeasurementFailed,
}
