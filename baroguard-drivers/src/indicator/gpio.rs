//! GPIO status LED
//!
//! An LED on a GPIO pin, wired either to ground (active-high) or to the
//! supply rail (active-low).

use baroguard_core::traits::Led;
use baroguard_hal::OutputPin;

/// GPIO-driven LED
pub struct GpioLed<P> {
    pin: P,
    /// If true, LED on = pin LOW
    inverted: bool,
    /// Current logical state (true = lit)
    on: bool,
}

impl<P: OutputPin> GpioLed<P> {
    /// Create a new LED output
    ///
    /// # Arguments
    /// - `pin`: The GPIO pin to control
    /// - `inverted`: If true, the LED is lit when the pin is LOW
    pub fn new(pin: P, inverted: bool) -> Self {
        let mut led = Self {
            pin,
            inverted,
            on: false,
        };
        // Ensure LED starts dark
        led.set_on(false);
        led
    }

    /// Create a new LED with active-high output
    pub fn new_active_high(pin: P) -> Self {
        Self::new(pin, false)
    }

    /// Create a new LED with active-low output
    pub fn new_active_low(pin: P) -> Self {
        Self::new(pin, true)
    }

    /// Release the pin
    pub fn into_inner(self) -> P {
        self.pin
    }
}

impl<P: OutputPin> Led for GpioLed<P> {
    fn set_on(&mut self, on: bool) {
        self.on = on;
        self.pin.set_state(on != self.inverted);
    }

    fn is_on(&self) -> bool {
        self.on
    }
}
