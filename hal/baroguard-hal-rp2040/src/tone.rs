//! PWM square-wave tone output
//!
//! One PWM slice drives the speaker pin at 50% duty. The slice is
//! disabled while silent so the pin idles low.

use baroguard_hal::{PwmTiming, ToneOutput};
use embassy_rp::pwm::{Config, Pwm};
use fixed::traits::ToFixed;

/// Speaker driven by an RP2040 PWM slice (channel A)
pub struct PwmTone<'d> {
    pwm: Pwm<'d>,
    /// PWM input clock (system clock)
    clock_hz: u32,
    current_hz: Option<u32>,
}

impl<'d> PwmTone<'d> {
    /// Wrap a PWM slice already bound to the speaker pin
    pub fn new(pwm: Pwm<'d>, clock_hz: u32) -> Self {
        let mut tone = Self {
            pwm,
            clock_hz,
            current_hz: None,
        };
        tone.no_tone();
        tone
    }

    fn disabled_config() -> Config {
        let mut config = Config::default();
        config.enable = false;
        config.compare_a = 0;
        config
    }
}

impl ToneOutput for PwmTone<'_> {
    fn tone(&mut self, frequency_hz: u32) {
        let Some(timing) = PwmTiming::for_frequency(self.clock_hz, frequency_hz) else {
            #[cfg(feature = "defmt")]
            defmt::warn!("Tone {} Hz out of PWM range", frequency_hz);
            self.no_tone();
            return;
        };

        let mut config = Config::default();
        config.divider = timing.divider.to_fixed();
        config.top = timing.top;
        config.compare_a = timing.compare;
        config.enable = true;
        self.pwm.set_config(&config);
        self.current_hz = Some(frequency_hz);
    }

    fn no_tone(&mut self) {
        self.pwm.set_config(&Self::disabled_config());
        self.current_hz = None;
    }

    fn current_hz(&self) -> Option<u32> {
        self.current_hz
    }
}
