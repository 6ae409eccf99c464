//! Clock backed by the embassy time driver

use baroguard_hal::Clock;
use embassy_time::{block_for, Duration, Instant};

/// Blocking millisecond clock
///
/// `delay_ms` busy-waits on the time driver, so nothing else runs while
/// the monitor is waiting.
#[derive(Debug, Default, Clone, Copy)]
pub struct EmbassyClock;

impl EmbassyClock {
    pub const fn new() -> Self {
        Self
    }
}

impl Clock for EmbassyClock {
    fn now_ms(&self) -> u32 {
        Instant::now().as_millis() as u32
    }

    fn delay_ms(&mut self, ms: u32) {
        block_for(Duration::from_millis(ms as u64));
    }
}
