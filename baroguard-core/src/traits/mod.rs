//! Hardware abstraction traits
//!
//! These traits define the interface between the monitor logic and the
//! device drivers. Pin, tone and clock traits come from `baroguard-hal`.

pub mod display;
pub mod indicator;
pub mod sensor;

pub use display::{DisplayError, DisplayExt, TextDisplay};
pub use indicator::Led;
pub use sensor::{Oversampling, PressureReading, PressureSensor, SensorError};
