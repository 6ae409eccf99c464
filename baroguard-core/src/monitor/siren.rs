//! Danger siren
//!
//! Alternates the red LED with two tones for a fixed duration. The routine
//! blocks the caller for the whole duration and cannot be cancelled.

use baroguard_hal::{Clock, ToneOutput};

use crate::config::SirenConfig;
use crate::traits::Led;

/// Siren pattern player
#[derive(Debug, Clone, Copy)]
pub struct Siren {
    config: SirenConfig,
}

impl Siren {
    pub fn new(config: SirenConfig) -> Self {
        Self { config }
    }

    /// Sound the siren for `duration_ms`
    ///
    /// Each pulse is red on with the high tone for half a period, then red
    /// off with the low tone for half a period. Pulses repeat until the
    /// elapsed time reaches the duration; the speaker is always silent on
    /// return.
    ///
    /// Returns the number of complete on/off pulses played.
    pub fn sound<L, T, C>(&self, red: &mut L, speaker: &mut T, clock: &mut C, duration_ms: u32) -> u32
    where
        L: Led,
        T: ToneOutput,
        C: Clock,
    {
        let start = clock.now_ms();
        let mut pulses = 0;

        while clock.elapsed_since(start) < duration_ms {
            red.set_on(true);
            speaker.tone(self.config.high_hz);
            clock.delay_ms(self.config.half_period_ms);

            red.set_on(false);
            speaker.tone(self.config.low_hz);
            clock.delay_ms(self.config.half_period_ms);

            pulses += 1;
        }

        speaker.no_tone();
        pulses
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{MockClock, MockLed, MockTone};

    #[test]
    fn test_one_second_is_five_pulses() {
        let siren = Siren::new(SirenConfig::DEFAULT);
        let mut red = MockLed::default();
        let mut speaker = MockTone::default();
        let mut clock = MockClock::default();

        let pulses = siren.sound(&mut red, &mut speaker, &mut clock, 1000);

        assert_eq!(pulses, 5);
        assert_eq!(red.on_count, 5);
        assert!(!red.on);
        assert_eq!(clock.total_delay(), 1000);
        assert!(clock.delays.iter().all(|&d| d == 100));

        let expected: Vec<Option<u32>> = [Some(2200), Some(1800)]
            .repeat(5)
            .into_iter()
            .chain([None])
            .collect();
        assert_eq!(speaker.history, expected);
    }

    #[test]
    fn test_zero_duration_only_silences() {
        let siren = Siren::new(SirenConfig::DEFAULT);
        let mut red = MockLed::default();
        let mut speaker = MockTone {
            current: Some(440),
            ..Default::default()
        };
        let mut clock = MockClock::default();

        let pulses = siren.sound(&mut red, &mut speaker, &mut clock, 0);

        assert_eq!(pulses, 0);
        assert_eq!(red.on_count, 0);
        assert!(clock.delays.is_empty());
        assert_eq!(speaker.history, vec![None]);
        assert!(speaker.is_silent());
    }

    #[test]
    fn test_partial_pulse_completes() {
        // Elapsed time only checked between pulses, so 250 ms plays 2 pulses
        let siren = Siren::new(SirenConfig::DEFAULT);
        let mut red = MockLed::default();
        let mut speaker = MockTone::default();
        let mut clock = MockClock::default();

        assert_eq!(siren.sound(&mut red, &mut speaker, &mut clock, 250), 2);
        assert_eq!(clock.total_delay(), 400);
    }

    #[test]
    fn test_survives_clock_wrap() {
        let siren = Siren::new(SirenConfig::DEFAULT);
        let mut red = MockLed::default();
        let mut speaker = MockTone::default();
        let mut clock = MockClock::starting_at(u32::MAX - 150);

        assert_eq!(siren.sound(&mut red, &mut speaker, &mut clock, 1000), 5);
    }
}
