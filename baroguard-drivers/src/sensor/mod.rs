//! Pressure sensor implementations

pub mod bmp180;

pub use bmp180::{Bmp180, Calibration};
