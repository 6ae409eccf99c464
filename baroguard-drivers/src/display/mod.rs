//! Display implementations

pub mod lcd;

pub use lcd::Lcd;
