//! Configuration types
//!
//! All configuration is compile-time. Defaults are `const` so the firmware
//! can bake them in without any runtime parsing.

pub mod hardware;
pub mod monitor;

pub use hardware::*;
pub use monitor::*;
