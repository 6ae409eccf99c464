//! State machine definition

use super::events::Event;

/// Monitor states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MonitorState {
    /// Power-on, outputs and sensor not yet initialized
    Boot,
    /// Measuring and driving outputs every cycle
    Running,
    /// Fatal fault; no further cycles run until a physical reset
    Halted(ErrorKind),
}

/// Types of fatal errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ErrorKind {
    /// Pressure sensor did not respond at initialization
    SensorNotDetected,
}

impl MonitorState {
    /// Check if cycles may run
    pub fn is_running(&self) -> bool {
        matches!(self, MonitorState::Running)
    }

    /// Check if this is the terminal halt state
    pub fn is_halted(&self) -> bool {
        matches!(self, MonitorState::Halted(_))
    }

    /// Process an event and return the next state
    ///
    /// `Halted` has no outgoing transitions. Transient measurement failures
    /// never escalate.
    pub fn transition(self, event: Event) -> Self {
        use Event::*;
        use MonitorState::*;

        match (self, event) {
            (Boot, SensorReady) => Running,
            (Boot, InitFailed(kind)) => Halted(kind),

            (Running, MeasurementFailed) => Running,

            (Halted(kind), _) => Halted(kind),

            // Default: stay in current state
            _ => self,
        }
    }
}
