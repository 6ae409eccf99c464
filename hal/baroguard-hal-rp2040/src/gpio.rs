//! GPIO allocation and output pins
//!
//! Tracks which GPIO pins are in use to prevent conflicts, and adapts
//! embassy output pins to the `baroguard-hal` trait.

use embassy_rp::gpio::Output;
use heapless::FnvIndexSet;

/// Maximum number of GPIO pins on RP2040
pub const GPIO_COUNT: usize = 30;

/// Error when claiming a GPIO pin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinError {
    /// Pin number out of range (0-29 valid)
    InvalidPin(u8),
    /// Pin already claimed by another function
    AlreadyTaken(u8),
}

/// GPIO allocator to track pin usage
pub struct GpioAllocator {
    /// Set of allocated GPIO pins
    allocated: FnvIndexSet<u8, 32>,
}

impl Default for GpioAllocator {
    fn default() -> Self {
        Self::new()
    }
}

impl GpioAllocator {
    /// Create a new GPIO allocator
    pub fn new() -> Self {
        Self {
            allocated: FnvIndexSet::new(),
        }
    }

    /// Allocate a GPIO pin
    pub fn allocate(&mut self, pin: u8) -> Result<(), PinError> {
        if pin >= GPIO_COUNT as u8 {
            return Err(PinError::InvalidPin(pin));
        }
        if self.allocated.contains(&pin) {
            return Err(PinError::AlreadyTaken(pin));
        }
        self.allocated
            .insert(pin)
            .map_err(|_| PinError::InvalidPin(pin))?;
        Ok(())
    }

    /// Allocate every pin in `pins`, stopping at the first conflict
    pub fn allocate_all(&mut self, pins: &[u8]) -> Result<(), PinError> {
        for &pin in pins {
            self.allocate(pin)?;
        }
        Ok(())
    }

    /// Release a GPIO pin
    pub fn release(&mut self, pin: u8) {
        self.allocated.remove(&pin);
    }

    /// Check if a pin is allocated
    pub fn is_allocated(&self, pin: u8) -> bool {
        self.allocated.contains(&pin)
    }

    /// Get the number of allocated pins
    pub fn allocated_count(&self) -> usize {
        self.allocated.len()
    }
}

/// Embassy push-pull output behind the `baroguard-hal` trait
pub struct PinOutput<'d> {
    pin: Output<'d>,
}

impl<'d> PinOutput<'d> {
    /// Wrap an already-configured output
    pub fn new(pin: Output<'d>) -> Self {
        Self { pin }
    }
}

impl baroguard_hal::OutputPin for PinOutput<'_> {
    fn set_high(&mut self) {
        self.pin.set_high();
    }

    fn set_low(&mut self) {
        self.pin.set_low();
    }

    fn is_set_high(&self) -> bool {
        self.pin.is_set_high()
    }
}
