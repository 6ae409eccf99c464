//! The monitor loop
//!
//! One cycle: silence the speaker, measure, classify, then drive the
//! display, LEDs and siren for the resulting zone. Every wait blocks.

pub mod controller;
pub mod panel;
pub mod report;
pub mod screen;
pub mod siren;

pub use controller::Monitor;
pub use panel::{Indicator, IndicatorPanel};
pub use report::{CycleReport, InitError, MeasurementError};
pub use screen::{status_message, Screen, SCREEN_COLS, SCREEN_ROWS};
pub use siren::Siren;
