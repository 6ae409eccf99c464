//! Board-agnostic core logic for the pressure safety indicator
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Hardware abstraction traits (pressure sensor, text display, LEDs)
//! - Zone classification against the fixed pressure thresholds
//! - Monitor state machine (boot, running, halted)
//! - The monitor loop, siren routine and screen composition
//! - Compile-time configuration

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod config;
pub mod monitor;
pub mod safety;
pub mod state;
pub mod traits;

#[cfg(test)]
pub(crate) mod mock;
