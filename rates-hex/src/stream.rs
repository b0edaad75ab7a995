//! Per-subscriber sampled sequences over the rate cache.

use std::sync::Arc;
use std::time::Duration;

use futures::Stream;
use rust_decimal::Decimal;
use tokio::time::MissedTickBehavior;
use tokio_stream::StreamExt;
use tokio_stream::wrappers::IntervalStream;

use crate::cache::RateCache;

/// Builds sampled streams over the shared cache.
///
/// Every stream gets its own `tokio::time::interval`, so each subscriber
/// owns its sampling clock: dropping one stream cancels only that
/// subscriber's timer, and no backpressure state is shared - a sample is
/// a cheap non-blocking cache read.
#[derive(Clone)]
pub struct RateStreams {
    cache: Arc<RateCache>,
    sample_interval: Duration,
    conversion_limit: usize,
}

impl RateStreams {
    pub fn new(cache: Arc<RateCache>, sample_interval: Duration, conversion_limit: usize) -> Self {
        Self {
            cache,
            sample_interval,
            conversion_limit,
        }
    }

    /// Unbounded stream of raw rate samples.
    ///
    /// Ticks where the cache is still empty are filtered out; once the
    /// cache populates, every tick yields the current value.
    pub fn rate_stream(&self) -> impl Stream<Item = Decimal> + Send + 'static + use<> {
        let cache = Arc::clone(&self.cache);
        let mut ticker = tokio::time::interval(self.sample_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        IntervalStream::new(ticker).filter_map(move |_| cache.read().map(|snapshot| snapshot.value()))
    }

    /// Rate stream mapped through `amount * rate`, truncated to the
    /// configured number of samples for bounded client consumption.
    pub fn conversion_stream(&self, amount: Decimal) -> impl Stream<Item = Decimal> + Send + 'static + use<> {
        self.rate_stream()
            .map(move |rate| (amount * rate).normalize())
            .take(self.conversion_limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use tokio::time::timeout;

    fn streams(cache: &Arc<RateCache>) -> RateStreams {
        RateStreams::new(Arc::clone(cache), Duration::from_secs(5), 10)
    }

    #[tokio::test(start_paused = true)]
    async fn test_rate_stream_never_emits_while_cache_empty() {
        let cache = Arc::new(RateCache::new());
        let mut stream = Box::pin(streams(&cache).rate_stream());

        let waited = timeout(Duration::from_secs(60), stream.next()).await;
        assert!(waited.is_err(), "empty cache must not produce samples");
    }

    #[tokio::test(start_paused = true)]
    async fn test_rate_stream_emits_current_value_each_tick() {
        let cache = Arc::new(RateCache::new());
        cache.write(dec!(600.00));
        let mut stream = Box::pin(streams(&cache).rate_stream());

        assert_eq!(stream.next().await, Some(dec!(600.00)));
        assert_eq!(stream.next().await, Some(dec!(600.00)));

        cache.write(dec!(605.50));
        assert_eq!(stream.next().await, Some(dec!(605.50)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_conversion_stream_completes_after_limit() {
        let cache = Arc::new(RateCache::new());
        cache.write(dec!(600.00));
        let mut stream = Box::pin(streams(&cache).conversion_stream(dec!(100.00)));

        let mut emitted = Vec::new();
        while let Some(value) = stream.next().await {
            emitted.push(value);
        }

        assert_eq!(emitted.len(), 10);
        assert!(emitted.iter().all(|v| *v == dec!(60000)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_subscribers_sample_independently() {
        let cache = Arc::new(RateCache::new());
        cache.write(dec!(600.00));
        let broadcaster = streams(&cache);

        let mut first = Box::pin(broadcaster.rate_stream());
        let second = Box::pin(broadcaster.rate_stream());

        assert_eq!(first.next().await, Some(dec!(600.00)));
        // Dropping one subscriber stops only its own timer.
        drop(second);
        assert_eq!(first.next().await, Some(dec!(600.00)));
    }
}
