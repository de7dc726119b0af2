//! Shared types for the party seating service
//!
//! Common types used by the server and its clients: ledger entities,
//! request payloads and response structures.

pub mod dto;
pub mod models;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use dto::*;
pub use models::*;
