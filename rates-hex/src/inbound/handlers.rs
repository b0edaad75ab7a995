//! HTTP request handlers.

use std::convert::Infallible;
use std::sync::Arc;

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{
        IntoResponse, Response,
        sse::{Event, KeepAlive, Sse},
    },
};
use futures::Stream;
use tokio_stream::StreamExt;
use uuid::Uuid;

use rates_types::{AppError, ConvertParams};

use crate::service::RateService;

/// Application state shared across handlers.
pub struct AppState {
    pub service: RateService,
}

/// Wrapper to implement IntoResponse for AppError (orphan rule workaround).
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.status())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self.0.to_body())).into_response()
    }
}

/// Health check endpoint; also reports whether a rate has been cached yet.
pub async fn health(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "rateAvailable": state.service.latest_rate().is_some(),
    }))
}

/// One-shot conversion at the last known rate.
#[tracing::instrument(skip(state), fields(amount = %params.amount))]
pub async fn convert(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ConvertParams>,
) -> Result<impl IntoResponse, ApiError> {
    let result = state.service.convert(params.amount)?;
    Ok(Json(result))
}

/// Bounded SSE stream of converted amounts, one event per sample.
#[tracing::instrument(skip(state), fields(amount = %params.amount))]
pub async fn convert_stream(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ConvertParams>,
) -> Result<Sse<impl Stream<Item = Result<Event, Infallible>>>, ApiError> {
    let stream = state.service.conversion_stream(params.amount)?;

    let subscriber = Uuid::new_v4();
    tracing::info!(%subscriber, "conversion stream subscriber connected");

    let events = stream.map(|value| Ok(Event::default().data(value.to_string())));
    Ok(Sse::new(events).keep_alive(KeepAlive::default()))
}

/// Unbounded SSE stream of raw rate samples.
#[tracing::instrument(skip(state))]
pub async fn rates_stream(
    State(state): State<Arc<AppState>>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let subscriber = Uuid::new_v4();
    tracing::info!(%subscriber, "rate stream subscriber connected");

    let events = state
        .service
        .rate_stream()
        .map(|rate| Ok(Event::default().data(rate.to_string())));
    Sse::new(events).keep_alive(KeepAlive::default())
}
