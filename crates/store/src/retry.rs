//! Retry schedule for best-effort document saves.

use std::time::Duration;

/// Bounded retry schedule with exponential backoff.
///
/// The delay before retry `n` is `base_delay * 2^n`, capped at
/// `max_delay`. After `max_retries` failed retries the caller is
/// expected to fall back rather than keep trying.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    max_retries: u32,
    base_delay: Duration,
    max_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 5,
            base_delay: Duration::from_millis(500),
            max_delay: Duration::from_secs(8),
        }
    }
}

impl RetryPolicy {
    /// Creates a policy with the given retry count and default delays.
    pub fn new(max_retries: u32) -> Self {
        Self {
            max_retries,
            ..Self::default()
        }
    }

    /// Sets the base delay.
    pub fn with_base_delay(mut self, base_delay: Duration) -> Self {
        self.base_delay = base_delay;
        self
    }

    /// Sets the delay cap.
    pub fn with_max_delay(mut self, max_delay: Duration) -> Self {
        self.max_delay = max_delay;
        self
    }

    /// Returns the maximum number of retries.
    pub fn max_retries(&self) -> u32 {
        self.max_retries
    }

    /// Returns the delay to wait before retry number `attempt`
    /// (zero-based count of failures so far).
    pub fn delay_for(&self, attempt: u32) -> Duration {
        // 2^attempt saturates well before the cap matters.
        let factor = 1u32 << attempt.min(20);
        self.base_delay.saturating_mul(factor).min(self.max_delay)
    }
}
