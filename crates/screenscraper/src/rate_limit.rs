//! Minimum-gap rate limiting between outbound calls.
//!
//! One slot, no burst allowance: every call waits until at least `delay` has
//! passed since the previous one. The first call proceeds immediately.

use std::time::{Duration, Instant};

use tracing::debug;

#[derive(Debug)]
pub struct RateLimiter {
    delay: Duration,
    /// `None` until the first call.
    last_request: Option<Instant>,
}

impl RateLimiter {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            last_request: None,
        }
    }

    /// Blocks the calling thread for whatever remains of the delay, then
    /// records the current instant as the last call.
    ///
    /// Returns how long it slept.
    pub fn acquire(&mut self) -> Duration {
        let mut waited = Duration::ZERO;

        if let Some(last) = self.last_request {
            let elapsed = last.elapsed();
            if elapsed < self.delay {
                waited = self.delay - elapsed;
                debug!(delay_ms = waited.as_millis(), "applying rate limit delay");
                std::thread::sleep(waited);
            }
        }

        self.last_request = Some(Instant::now());
        waited
    }

    #[cfg(test)]
    pub(crate) fn last_request(&self) -> Option<Instant> {
        self.last_request
    }
}
