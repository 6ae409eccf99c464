//! Audio tone output
//!
//! The siren speaker is driven with a plain square wave. Chip HALs
//! typically generate it with a PWM slice; [`PwmTiming`] holds the
//! divider/TOP math so it can be checked on the host.

/// Square-wave tone output
pub trait ToneOutput {
    /// Start emitting a square wave at `frequency_hz`
    ///
    /// Replaces any tone already playing.
    fn tone(&mut self, frequency_hz: u32);

    /// Silence the output
    fn no_tone(&mut self);

    /// Frequency currently playing, or `None` when silent
    fn current_hz(&self) -> Option<u32>;

    /// Check if the output is silent
    fn is_silent(&self) -> bool {
        self.current_hz().is_none()
    }
}

/// PWM counter settings for a given tone
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PwmTiming {
    /// Integer clock divider (1-255)
    pub divider: u8,
    /// Counter wrap value
    pub top: u16,
    /// Compare value for 50% duty
    pub compare: u16,
}

impl PwmTiming {
    /// Compute counter settings for `frequency_hz` from the PWM input clock
    ///
    /// Picks the smallest divider that keeps TOP within 16 bits, which gives
    /// the best frequency resolution. Returns `None` for a zero frequency or
    /// one that cannot be reached with an 8-bit divider.
    pub fn for_frequency(clock_hz: u32, frequency_hz: u32) -> Option<Self> {
        if frequency_hz == 0 || frequency_hz > clock_hz / 2 {
            return None;
        }

        let period_ticks = clock_hz / frequency_hz;
        let divider = period_ticks.div_ceil(u16::MAX as u32 + 1).max(1);
        if divider > u8::MAX as u32 {
            return None;
        }

        let top = (period_ticks / divider).saturating_sub(1);
        let top = top as u16;

        Some(Self {
            divider: divider as u8,
            top,
            compare: top / 2 + 1,
        })
    }

    /// Frequency actually produced by these settings
    pub fn actual_hz(&self, clock_hz: u32) -> u32 {
        clock_hz / (self.divider as u32 * (self.top as u32 + 1))
    }
}
