//! Bounded retry with exponential backoff around one provider fetch.

use std::time::Duration;

use rust_decimal::Decimal;
use tokio::time::sleep;
use tracing::{error, warn};

use rates_types::RateProvider;

/// Retry policy for one refresh cycle: an initial attempt, then up to
/// `max_retries` retries with doubling delays (`base_delay * 2^n`).
///
/// Failures are absorbed, not propagated: a cycle that cannot produce a
/// rate resolves to `None` and the cache writer leaves the previous value
/// in place. A `ProviderError::Unavailable` abandons the cycle
/// immediately - the provider has said it is down, so backing off against
/// it is pointless.
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    max_retries: u32,
    base_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(3, Duration::from_secs(2))
    }
}

impl RetryPolicy {
    pub fn new(max_retries: u32, base_delay: Duration) -> Self {
        Self {
            max_retries,
            base_delay,
        }
    }

    /// Runs one fetch cycle. Resolves to `Some(rate)` on the first
    /// success, `None` once retries are exhausted or suppressed.
    pub async fn run<P: RateProvider + ?Sized>(&self, provider: &P) -> Option<Decimal> {
        let mut attempt: u32 = 0;
        loop {
            match provider.fetch_rate().await {
                Ok(rate) => return Some(rate),
                Err(err) if err.is_unavailable() => {
                    warn!("provider unavailable, skipping cycle without retry");
                    return None;
                }
                Err(err) if attempt >= self.max_retries => {
                    error!(error = %err, retries = self.max_retries, "retries exhausted, no rate this cycle");
                    return None;
                }
                Err(err) => {
                    let delay = self.base_delay * 2u32.pow(attempt);
                    attempt += 1;
                    warn!(error = %err, attempt, ?delay, "fetch failed, backing off");
                    sleep(delay).await;
                }
            }
        }
    }
}
