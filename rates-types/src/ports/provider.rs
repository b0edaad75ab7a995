//! Exchange rate provider port.
//!
//! This trait defines the interface for upstream rate providers.
//! Implementations can be HTTP clients, mock providers, etc.

use rust_decimal::Decimal;

use crate::domain::Currency;

/// Error type for a single fetch attempt against the provider.
///
/// `Unavailable` is the suppressed class: the retry policy gives up
/// immediately on it instead of backing off, because the provider has
/// told us it is down. Everything else is retried.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("Provider temporarily unavailable")]
    Unavailable,

    #[error("Upstream HTTP error: status {status}")]
    Upstream { status: u16 },

    #[error("Failed to reach provider: {0}")]
    Transport(String),

    #[error("Malformed provider payload: {0}")]
    Decode(String),

    #[error("Rate for {0} missing from provider payload")]
    MissingRate(Currency),
}

impl ProviderError {
    /// True when retrying this failure is pointless.
    pub fn is_unavailable(&self) -> bool {
        matches!(self, ProviderError::Unavailable)
    }
}

/// Port trait for exchange rate providers.
///
/// One call performs one request/response cycle: fetch the current rate
/// for the configured source/target currency pair and validate the
/// payload.
#[async_trait::async_trait]
pub trait RateProvider: Send + Sync {
    /// Fetches the current exchange rate (target units per source unit).
    async fn fetch_rate(&self) -> Result<Decimal, ProviderError>;
}

#[async_trait::async_trait]
impl<P: RateProvider + ?Sized> RateProvider for std::sync::Arc<P> {
    async fn fetch_rate(&self) -> Result<Decimal, ProviderError> {
        (**self).fetch_rate().await
    }
}
