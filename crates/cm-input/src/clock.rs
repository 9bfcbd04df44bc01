//! Motion sampling rate limiter

use std::time::{Duration, Instant};

/// Default spacing between committed motion samples.
pub const DEFAULT_SAMPLE_INTERVAL: Duration = Duration::from_millis(10);

/// Throttles motion processing to the virtual controller's polling rate,
/// independent of how fast the host delivers pointer events.
#[derive(Debug, Clone)]
pub struct SampleClock {
    interval: Duration,
    last_sample: Option<Instant>,
}

impl SampleClock {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_sample: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Returns true if a new sample may be committed at `now`.
    ///
    /// The first query always succeeds. After that, a sample is granted only
    /// once strictly more than one interval has elapsed since the last granted
    /// one, and the reference time moves only when a sample is granted.
    pub fn should_sample(&mut self, now: Instant) -> bool {
        let due = match self.last_sample {
            None => true,
            Some(last) => now.saturating_duration_since(last) > self.interval,
        };
        if due {
            self.last_sample = Some(now);
        }
        due
    }
}

impl Default for SampleClock {
    fn default() -> Self {
        Self::new(DEFAULT_SAMPLE_INTERVAL)
    }
}
