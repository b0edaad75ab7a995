//! # Rates Application
//!
//! Binary that wires together all the components:
//! - Load configuration from environment
//! - Initialize the provider adapter
//! - Start the background refresh loop
//! - Start the HTTP server
//! - Stop the refresh loop once the server has drained

mod config;

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use rates_hex::{RateCache, RateService, RetryPolicy, inbound::HttpServer, refresh};
use rates_provider::{CurrencyApiProvider, ProviderConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,rates_app=debug,rates_hex=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = config::Config::from_env()?;

    tracing::info!("Starting rates server on port {}", config.port);
    tracing::info!(
        "Tracking {} -> {} via {}",
        config.base_currency,
        config.target_currency,
        config.provider_base_url
    );

    // Build the outbound provider adapter
    let provider = CurrencyApiProvider::new(ProviderConfig {
        base_url: config.provider_base_url.clone(),
        api_key: config.provider_api_key.clone(),
        base_currency: config.base_currency.clone(),
        target_currency: config.target_currency.clone(),
    });

    // Shared cache and the conversion service over it
    let cache = Arc::new(RateCache::new());
    let service = RateService::new(cache.clone(), config.sample_interval, config.stream_limit);

    // Start the background refresh loop with an explicit handle
    let policy = RetryPolicy::new(config.max_retries, config.base_backoff);
    let refresh_handle = refresh::start(provider, cache, policy, config.refresh_interval);

    // Create and run the HTTP server
    let server = HttpServer::new(service);
    let addr = format!("0.0.0.0:{}", config.port);

    server.run(&addr).await?;

    // Server drained; wind down the refresh loop without interrupting an
    // in-flight fetch.
    refresh_handle.stop().await;
    Ok(())
}
