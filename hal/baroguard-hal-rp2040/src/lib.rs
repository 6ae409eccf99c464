//! RP2040-specific HAL for the Baroguard firmware
//!
//! This crate provides RP2040 implementations of the shared
//! `baroguard-hal` traits:
//!
//! - GPIO outputs for the status LEDs, plus pin allocation checks
//! - PWM square-wave tone output for the siren speaker
//! - Millisecond clock and blocking delays on `embassy-time`

#![no_std]

pub mod clock;
pub mod gpio;
pub mod tone;

pub use clock::EmbassyClock;
pub use gpio::{GpioAllocator, PinOutput};
pub use tone::PwmTone;

// Re-export shared traits from baroguard-hal for convenience
pub use baroguard_hal::{Clock, I2cConfig, OutputPin, ToneOutput};
