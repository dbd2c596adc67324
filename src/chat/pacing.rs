//! Cosmetic "thinking" delay shown before an answer is displayed.

use crate::config::PacingSettings;
use rand::Rng;
use std::thread;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pacing {
    min: Duration,
    max: Duration,
}

impl Pacing {
    /// Uniform delay in `[min, max]`. A reversed range is clamped to `min`.
    pub fn new(min: Duration, max: Duration) -> Self {
        Self {
            min,
            max: max.max(min),
        }
    }

    pub fn none() -> Self {
        Self::new(Duration::ZERO, Duration::ZERO)
    }

    pub fn from_settings(settings: &PacingSettings) -> Self {
        Self::new(
            Duration::from_millis(settings.min_delay_ms),
            Duration::from_millis(settings.max_delay_ms),
        )
    }

    pub fn is_instant(&self) -> bool {
        self.max.is_zero()
    }

    pub fn next_delay<R: Rng + ?Sized>(&self, rng: &mut R) -> Duration {
        if self.min == self.max {
            return self.min;
        }
        let min_ms = self.min.as_millis() as u64;
        let max_ms = self.max.as_millis() as u64;
        Duration::from_millis(rng.gen_range(min_ms..=max_ms))
    }

    /// Blocks the calling thread for one randomized delay.
    pub fn pause(&self) {
        if self.is_instant() {
            return;
        }
        let delay = self.next_delay(&mut rand::thread_rng());
        thread::sleep(delay);
    }
}

impl Default for Pacing {
    fn default() -> Self {
        Self::from_settings(&PacingSettings::default())
    }
}
