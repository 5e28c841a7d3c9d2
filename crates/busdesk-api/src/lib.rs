//! # busdesk-api
//!
//! HTTP API layer for Rivera BusDesk built on Axum.
//!
//! Provides the REST endpoints, middleware (RBAC guard, CORS, tracing),
//! extractors, DTOs, and error mapping.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, run_server};
pub use error::ApiError;
pub use state::AppState;
