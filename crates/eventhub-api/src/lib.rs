//! # eventhub-api
//!
//! HTTP API layer for EventHub built on Axum.
//!
//! Provides the REST endpoints, the bearer-token extractor, request
//! validation, CORS and logging middleware, DTOs, and error mapping.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, run, run_server};
pub use state::AppState;
