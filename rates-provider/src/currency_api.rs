//! HTTP adapter for a currencyapi.com-style rate provider.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use reqwest::StatusCode;
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::{debug, instrument};

use rates_types::{Currency, ProviderError, RateProvider};

/// Connection settings for the upstream provider.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    /// Endpoint serving the latest rates, e.g. `https://api.currencyapi.com/v3/latest`
    pub base_url: String,
    /// API key passed as the `apikey` query parameter
    pub api_key: String,
    /// Currency the returned rates are quoted against
    pub base_currency: Currency,
    /// Currency whose rate this instance tracks
    pub target_currency: Currency,
}

/// `RateProvider` implementation backed by an HTTP rates API.
///
/// The provider returns a JSON body mapping currency codes to
/// `{ "value": <decimal> }` records under a `data` key; a single fetch
/// extracts the configured target currency's value and discards the rest.
pub struct CurrencyApiProvider {
    client: reqwest::Client,
    config: ProviderConfig,
}

#[derive(Debug, Deserialize)]
struct ProviderResponse {
    data: HashMap<String, CurrencyEntry>,
    #[serde(default)]
    meta: Option<ResponseMeta>,
}

#[derive(Debug, Deserialize)]
struct CurrencyEntry {
    value: Option<Decimal>,
}

#[derive(Debug, Deserialize)]
struct ResponseMeta {
    last_updated_at: Option<DateTime<Utc>>,
}

impl ProviderResponse {
    /// Extracts the rate for one currency, if the payload carries it.
    fn rate_for(&self, currency: &Currency) -> Option<Decimal> {
        self.data.get(currency.as_str()).and_then(|entry| entry.value)
    }
}

impl CurrencyApiProvider {
    pub fn new(config: ProviderConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }
}

#[async_trait::async_trait]
impl RateProvider for CurrencyApiProvider {
    #[instrument(skip(self), fields(target = %self.config.target_currency))]
    async fn fetch_rate(&self) -> Result<Decimal, ProviderError> {
        let response = self
            .client
            .get(&self.config.base_url)
            .query(&[
                ("apikey", self.config.api_key.as_str()),
                ("base_currency", self.config.base_currency.as_str()),
            ])
            .send()
            .await
            .map_err(|e| ProviderError::Transport(e.to_string()))?;

        let status = response.status();
        if status == StatusCode::SERVICE_UNAVAILABLE {
            return Err(ProviderError::Unavailable);
        }
        if !status.is_success() {
            return Err(ProviderError::Upstream {
                status: status.as_u16(),
            });
        }

        let payload: ProviderResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::Decode(e.to_string()))?;

        if let Some(updated_at) = payload.meta.as_ref().and_then(|m| m.last_updated_at) {
            debug!(%updated_at, "provider reported rate freshness");
        }

        payload
            .rate_for(&self.config.target_currency)
            .ok_or_else(|| ProviderError::MissingRate(self.config.target_currency.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn xof() -> Currency {
        Currency::new("XOF").unwrap()
    }

    #[test]
    fn test_parses_provider_payload() {
        let payload: ProviderResponse = serde_json::from_str(
            r#"{
                "meta": { "last_updated_at": "2026-08-05T23:59:59Z" },
                "data": {
                    "XOF": { "value": 600.25 },
                    "EUR": { "value": 0.91 }
                }
            }"#,
        )
        .unwrap();

        assert_eq!(payload.rate_for(&xof()), Some(dec!(600.25)));
        assert!(payload.meta.unwrap().last_updated_at.is_some());
    }

    #[test]
    fn test_parses_payload_without_meta() {
        let payload: ProviderResponse =
            serde_json::from_str(r#"{ "data": { "XOF": { "value": 600 } } }"#).unwrap();
        assert_eq!(payload.rate_for(&xof()), Some(dec!(600)));
    }

    #[test]
    fn test_missing_target_currency_yields_none() {
        let payload: ProviderResponse =
            serde_json::from_str(r#"{ "data": { "EUR": { "value": 0.91 } } }"#).unwrap();
        assert_eq!(payload.rate_for(&xof()), None);
    }

    #[test]
    fn test_entry_without_value_yields_none() {
        let payload: ProviderResponse =
            serde_json::from_str(r#"{ "data": { "XOF": { "code": "XOF" } } }"#).unwrap();
        assert_eq!(payload.rate_for(&xof()), None);
    }

    #[test]
    fn test_fractional_rate_survives_as_decimal() {
        let payload: ProviderResponse =
            serde_json::from_str(r#"{ "data": { "XOF": { "value": 600.10 } } }"#).unwrap();
        assert_eq!(payload.rate_for(&xof()), Some(dec!(600.10)));
    }
}
