//! # Rates Provider
//!
//! Outbound adapter for the FX rates service: implements the
//! `RateProvider` port against a currencyapi.com-style HTTP endpoint.
//!
//! One fetch is one request/response cycle; status classification and
//! payload validation happen here so the application layer only ever
//! sees `ProviderError` values.

mod currency_api;

pub use currency_api::{CurrencyApiProvider, ProviderConfig};
