use std::time::Duration;

/// A bounded retry strategy driven by linear back-off.
///
/// The n-th retry waits `base * n`, and no more than `max_retries` delays are
/// handed out before the strategy reports exhaustion.
#[derive(Debug, Clone)]
pub struct LinearBackoff {
    attempt: u32,
    base: Duration,
    max_retries: u32,
}

impl LinearBackoff {
    /// Constructs a new linear back-off strategy. Without `max_retries` the
    /// strategy never gives up.
    pub const fn new(base: Duration) -> LinearBackoff {
        LinearBackoff {
            attempt: 0,
            base,
            max_retries: u32::MAX,
        }
    }

    /// Limit the number of delays handed out.
    pub const fn max_retries(mut self, retries: u32) -> LinearBackoff {
        self.max_retries = retries;
        self
    }

    /// Number of delays handed out so far.
    pub const fn attempts(&self) -> u32 {
        self.attempt
    }

    /// The next `Duration` to wait for, or `None` once the retries are used up.
    fn next_delay(&mut self) -> Option<Duration> {
        if self.attempt >= self.max_retries {
            return None;
        }

        self.attempt += 1;
        Some(
            self.base
                .checked_mul(self.attempt)
                .unwrap_or(Duration::MAX),
        )
    }

    /// Sleep for the next delay. Returns `false` without sleeping once the
    /// retries are used up.
    pub async fn wait(&mut self) -> bool {
        match self.next_delay() {
            Some(delay) => {
                tokio::time::sleep(delay).await;
                true
            }
            None => false,
        }
    }
}
