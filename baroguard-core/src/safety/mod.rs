//! Pressure safety zones
//!
//! Maps a pressure reading to the zone that drives the indicators.

pub mod zone;

pub use zone::{Zone, ZoneThresholds, SAFE_MIN_HPA, WARNING_MIN_HPA};
