use std::time::Duration;

/// Constant-backoff retry policy for transient server errors.
///
/// Total attempts = 1 (initial) + `max_retries`. The delay between attempts
/// does not grow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_retries: u32,
    pub delay:       Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 3,
            delay:       Duration::from_millis(500),
        }
    }
}

impl RetryPolicy {
    #[must_use]
    pub fn max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    #[must_use]
    pub fn delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Delay to wait before the next attempt, or `None` once `retries_done`
    /// has used up the budget.
    pub fn next_delay(&self, retries_done: u32) -> Option<Duration> {
        (retries_done < self.max_retries).then_some(self.delay)
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_retries.saturating_add(1)
    }
}
