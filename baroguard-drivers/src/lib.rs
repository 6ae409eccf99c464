//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in baroguard-core for the indicator's hardware:
//!
//! - Pressure sensor (BMP180 over I2C)
//! - Character display (HD44780 behind a PCF8574 I2C backpack)
//! - Status LEDs (GPIO, either polarity)

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod display;
pub mod indicator;
pub mod sensor;
