//! API route modules
//!
//! # Structure
//!
//! - [`health`] - health check
//! - [`tables`] - table registration and capacity management
//! - [`guests`] - booking, check-in, departure, seat count
//!
//! Each module exposes a `router()` merged here into the application
//! router.

pub mod guests;
pub mod health;
pub mod tables;

use axum::Router;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::core::ServerState;

// Re-export common types for handlers
pub use crate::utils::{AppError, AppResult};

/// Assemble the application router.
pub fn router() -> Router<ServerState> {
    Router::new()
        .merge(health::router())
        .merge(tables::router())
        .merge(guests::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
