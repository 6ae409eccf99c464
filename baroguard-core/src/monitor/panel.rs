//! Status LEDs and speaker

use baroguard_hal::ToneOutput;

use crate::safety::Zone;
use crate::traits::Led;

/// One of the three status LEDs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Indicator {
    Green,
    Yellow,
    Red,
}

impl Indicator {
    /// LED that signals a zone
    pub fn for_zone(zone: Zone) -> Self {
        match zone {
            Zone::Safe => Indicator::Green,
            Zone::Warning => Indicator::Yellow,
            Zone::Danger => Indicator::Red,
        }
    }
}

/// The three status LEDs plus the siren speaker
pub struct IndicatorPanel<L, T> {
    green: L,
    yellow: L,
    red: L,
    speaker: T,
}

impl<L: Led, T: ToneOutput> IndicatorPanel<L, T> {
    /// Take ownership of the outputs and force everything off
    pub fn new(green: L, yellow: L, red: L, speaker: T) -> Self {
        let mut panel = Self {
            green,
            yellow,
            red,
            speaker,
        };
        panel.all_off();
        panel
    }

    /// All LEDs off, speaker silent
    pub fn all_off(&mut self) {
        self.green.set_on(false);
        self.yellow.set_on(false);
        self.red.set_on(false);
        self.speaker.no_tone();
    }

    /// Silence the speaker
    pub fn silence(&mut self) {
        self.speaker.no_tone();
    }

    /// Switch one LED
    pub fn set(&mut self, indicator: Indicator, on: bool) {
        self.led_mut(indicator).set_on(on);
    }

    /// Light `indicator` and switch the other two LEDs off
    pub fn show_only(&mut self, indicator: Indicator) {
        for other in [Indicator::Green, Indicator::Yellow, Indicator::Red] {
            self.set(other, other == indicator);
        }
    }

    /// Check if an LED is lit
    pub fn is_on(&self, indicator: Indicator) -> bool {
        self.led(indicator).is_on()
    }

    /// Red LED and speaker together, for the siren
    pub fn siren_outputs(&mut self) -> (&mut L, &mut T) {
        (&mut self.red, &mut self.speaker)
    }

    pub fn led(&self, indicator: Indicator) -> &L {
        match indicator {
            Indicator::Green => &self.green,
            Indicator::Yellow => &self.yellow,
            Indicator::Red => &self.red,
        }
    }

    fn led_mut(&mut self, indicator: Indicator) -> &mut L {
        match indicator {
            Indicator::Green => &mut self.green,
            Indicator::Yellow => &mut self.yellow,
            Indicator::Red => &mut self.red,
        }
    }

    pub fn speaker(&self) -> &T {
        &self.speaker
    }
}
