use std::time::{Duration, Instant};

/// Point in time from which wall-clock durations are measured.
#[derive(Debug, Clone, Copy)]
pub struct TimeStamp(Instant);

impl TimeStamp {
    /// Get a new timestamp for "now"
    pub fn now() -> Self {
        TimeStamp(Instant::now())
    }

    /// Returns the elapsed [`Duration`] since the timestamp.
    pub fn elapsed(&self) -> Duration {
        self.0.elapsed()
    }

    /// Get elapsed seconds since this timestamp
    pub fn elapsed_secs(&self) -> f64 {
        self.0.elapsed().as_secs_f64()
    }

    /// Compute seconds elapsed between two timestamps
    pub fn since_secs(start: &Self, end: &Self) -> f64 {
        end.0.duration_since(start.0).as_secs_f64()
    }
}
