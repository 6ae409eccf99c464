//! Monotonic time and blocking waits
//!
//! Every wait in the monitor loop is a blocking wait on elapsed time.
//! Routing them through this trait keeps the loop testable with a
//! simulated clock.

/// Millisecond clock with blocking delay
pub trait Clock {
    /// Milliseconds since an arbitrary epoch
    ///
    /// The counter wraps; compare instants with [`Clock::elapsed_since`].
    fn now_ms(&self) -> u32;

    /// Block for `ms` milliseconds
    fn delay_ms(&mut self, ms: u32);

    /// Milliseconds elapsed since `start_ms`, tolerant of counter wrap
    fn elapsed_since(&self, start_ms: u32) -> u32 {
        self.now_ms().wrapping_sub(start_ms)
    }
}
