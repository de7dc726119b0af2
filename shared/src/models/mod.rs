//! Ledger entities
//!
//! Row types owned by the ledgers. Table IDs are `i64`, head counts are
//! `u32` (a party always includes at least the named guest).

pub mod arrival;
pub mod booking;
pub mod table;

// Re-exports
pub use arrival::*;
pub use booking::*;
pub use table::*;
