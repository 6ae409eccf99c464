//! Status LED trait

/// A single indicator LED
///
/// Implementations hide wiring polarity: `set_on(true)` always lights it.
pub trait Led {
    /// Turn the LED on or off
    fn set_on(&mut self, on: bool);

    /// Check if the LED is currently lit
    fn is_on(&self) -> bool;
}
