//! HTTP Inbound Adapter
//!
//! Axum-based HTTP server that drives the application layer: JSON for
//! one-shot conversions, SSE for the sampled streams.

mod handlers;
mod server;

pub use server::HttpServer;
