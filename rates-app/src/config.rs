//! Configuration loading from environment.

use std::env;
use std::time::Duration;

use rates_types::Currency;

const DEFAULT_BASE_URL: &str = "https://api.currencyapi.com/v3/latest";

/// Application configuration.
pub struct Config {
    pub port: u16,
    pub provider_base_url: String,
    pub provider_api_key: String,
    pub base_currency: Currency,
    pub target_currency: Currency,
    pub refresh_interval: Duration,
    pub sample_interval: Duration,
    pub max_retries: u32,
    pub base_backoff: Duration,
    pub stream_limit: usize,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        let port = env::var("PORT").unwrap_or_else(|_| "3000".to_string()).parse()?;

        let provider_base_url =
            env::var("EXCHANGE_API_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        let provider_api_key = env::var("EXCHANGE_API_KEY")
            .map_err(|_| anyhow::anyhow!("EXCHANGE_API_KEY environment variable is required"))?;

        let base_currency = env::var("BASE_CURRENCY")
            .unwrap_or_else(|_| "CAD".to_string())
            .parse::<Currency>()
            .map_err(|e| anyhow::anyhow!("BASE_CURRENCY: {e}"))?;

        let target_currency = env::var("TARGET_CURRENCY")
            .unwrap_or_else(|_| "XOF".to_string())
            .parse::<Currency>()
            .map_err(|e| anyhow::anyhow!("TARGET_CURRENCY: {e}"))?;

        let refresh_interval = Duration::from_secs(parse_secs("REFRESH_INTERVAL_SECS", 30)?);
        let sample_interval = Duration::from_secs(parse_secs("SAMPLE_INTERVAL_SECS", 5)?);
        let base_backoff = Duration::from_secs(parse_secs("BASE_BACKOFF_SECS", 2)?);

        let max_retries = env::var("MAX_RETRIES")
            .unwrap_or_else(|_| "3".to_string())
            .parse()?;

        let stream_limit = env::var("STREAM_LIMIT")
            .unwrap_or_else(|_| "10".to_string())
            .parse()?;

        Ok(Self {
            port,
            provider_base_url,
            provider_api_key,
            base_currency,
            target_currency,
            refresh_interval,
            sample_interval,
            max_retries,
            base_backoff,
            stream_limit,
        })
    }
}

fn parse_secs(var: &str, default: u64) -> anyhow::Result<u64> {
    env::var(var)
        .unwrap_or_else(|_| default.to_string())
        .parse()
        .map_err(|e| anyhow::anyhow!("{var}: {e}"))
}
