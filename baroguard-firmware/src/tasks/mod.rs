//! Embassy tasks
//!
//! The monitor is fully sequential, so there is a single task.

pub mod monitor;

pub use monitor::{monitor_task, MonitorHardware};
