use std::time::{Duration, Instant};
use tokio::time::sleep;

/// Spaces out requests so consecutive calls are at least `delay` apart
pub struct RateLimiter {
    delay: Duration,
    last_request: Option<Instant>,
}

impl RateLimiter {
    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay: Duration::from_millis(delay_ms),
            last_request: None,
        }
    }

    pub async fn wait(&mut self) {
        if let Some(remaining) = self.remaining(Instant::now()) {
            sleep(remaining).await;
        }
        self.last_request = Some(Instant::now());
    }

    /// Time still to wait at `now`, if any
    fn remaining(&self, now: Instant) -> Option<Duration> {
        let elapsed = now.saturating_duration_since(self.last_request?);
        self.delay.checked_sub(elapsed).filter(|d| !d.is_zero())
    }
}
