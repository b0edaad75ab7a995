//! OpenAPI specification and documentation.

#![allow(dead_code)] // Path functions are only used by utoipa for documentation generation

use rates_types::dto::{ConversionResponse, ConvertParams, ErrorBody};
use utoipa::OpenApi;

// Dummy functions to generate path documentation
// These are not the actual handlers, just for OpenAPI path generation

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = inline(serde_json::Value), example = json!({"status": "healthy", "rateAvailable": true}))
    )
)]
async fn health() {}

/// Convert an amount at the last known rate
#[utoipa::path(
    get,
    path = "/convert",
    tag = "conversion",
    params(ConvertParams),
    responses(
        (status = 200, description = "Conversion result", body = ConversionResponse),
        (status = 400, description = "Non-positive or malformed amount", body = ErrorBody),
        (status = 503, description = "No rate fetched yet", body = ErrorBody)
    )
)]
async fn convert() {}

/// Stream converted amounts (SSE, completes after 10 samples)
#[utoipa::path(
    get,
    path = "/convert/stream",
    tag = "conversion",
    params(ConvertParams),
    responses(
        (status = 200, description = "text/event-stream of converted values, one per sample tick", content_type = "text/event-stream"),
        (status = 400, description = "Non-positive or malformed amount", body = ErrorBody)
    )
)]
async fn convert_stream() {}

/// Stream raw rate samples (SSE, unbounded)
#[utoipa::path(
    get,
    path = "/rates/stream",
    tag = "rates",
    responses(
        (status = 200, description = "text/event-stream of rate samples; silent while no rate is cached", content_type = "text/event-stream")
    )
)]
async fn rates_stream() {}

/// OpenAPI document for the rates API.
#[derive(OpenApi)]
#[openapi(
    paths(health, convert, convert_stream, rates_stream),
    components(schemas(ConversionResponse, ErrorBody)),
    tags(
        (name = "health", description = "Liveness probe"),
        (name = "conversion", description = "Currency conversion at the cached rate"),
        (name = "rates", description = "Raw rate sampling")
    ),
    info(
        title = "FX Rates Service",
        description = "Periodic-refresh FX rate cache with snapshot and streaming conversion endpoints"
    )
)]
pub struct ApiDoc;
