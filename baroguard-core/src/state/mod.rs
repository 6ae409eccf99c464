//! Monitor state machine
//!
//! The monitor boots once, then either runs forever or halts forever.

pub mod events;
pub mod machine;

pub use events::Event;
pub use machine::{ErrorKind, MonitorState};
