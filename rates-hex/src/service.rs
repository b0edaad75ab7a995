//! Rate Application Service
//!
//! One-shot conversion over a cache snapshot, plus access to the
//! sampled streams. Contains NO infrastructure logic - the refresh loop
//! writes the cache, this service only reads it.

use std::sync::Arc;
use std::time::Duration;

use futures::Stream;
use rust_decimal::Decimal;

use rates_types::{AppError, ConversionResponse};

use crate::cache::RateCache;
use crate::stream::RateStreams;

/// Resource path reported when the rate is unavailable.
const CONVERT_RESOURCE: &str = "/convert";

/// Application service for rate conversion.
pub struct RateService {
    cache: Arc<RateCache>,
    streams: RateStreams,
}

impl RateService {
    /// Creates the service over a shared cache.
    pub fn new(cache: Arc<RateCache>, sample_interval: Duration, conversion_limit: usize) -> Self {
        let streams = RateStreams::new(Arc::clone(&cache), sample_interval, conversion_limit);
        Self { cache, streams }
    }

    /// Converts `amount` at the last known rate.
    ///
    /// Pure read-then-compute: one cache read, decimal multiplication,
    /// no retry, no side effects. Resolves synchronously.
    pub fn convert(&self, amount: Decimal) -> Result<ConversionResponse, AppError> {
        validate_amount(amount)?;

        let snapshot = self.cache.read().ok_or_else(|| AppError::RateUnavailable {
            resource: CONVERT_RESOURCE.to_string(),
        })?;

        Ok(ConversionResponse {
            amount,
            rate: snapshot.value(),
            converted_value: snapshot.convert(amount),
            message: "Conversion successful".to_string(),
            code: "OK".to_string(),
        })
    }

    /// The last successfully fetched rate, if any.
    pub fn latest_rate(&self) -> Option<Decimal> {
        self.cache.read().map(|snapshot| snapshot.value())
    }

    /// Unbounded stream of raw rate samples; one sampling clock per call.
    pub fn rate_stream(&self) -> impl Stream<Item = Decimal> + Send + 'static + use<> {
        self.streams.rate_stream()
    }

    /// Bounded stream of converted amounts for one subscriber.
    pub fn conversion_stream(
        &self,
        amount: Decimal,
    ) -> Result<impl Stream<Item = Decimal> + Send + 'static + use<>, AppError> {
        validate_amount(amount)?;
        Ok(self.streams.conversion_stream(amount))
    }
}

fn validate_amount(amount: Decimal) -> Result<(), AppError> {
    if amount <= Decimal::ZERO {
        return Err(AppError::Validation("amount must be positive".to_string()));
    }
    Ok(())
}
