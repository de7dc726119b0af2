//! Capacity ledgers
//!
//! Three in-process ledgers own the seating books:
//!
//! - [`TableLedger`] - table identities and total capacity
//! - [`BookingLedger`] - reserved seats per guest, capped per table
//! - [`ArrivalLedger`] - occupied seats per guest, capped per table
//!
//! Booked and arrived totals are enforced independently: a table may be
//! over-booked on paper relative to who actually shows up, and a party
//! may arrive larger or smaller than it booked, as long as the physical
//! capacity holds at arrival time.
//!
//! Each ledger guards its rows with a `parking_lot::RwLock`. Every
//! admission takes the owning ledger's write lock for the whole
//! check-then-write, so two admissions can never jointly overflow a
//! table. Reads take the read lock and see a consistent snapshot.

pub mod arrivals;
pub mod bookings;
pub mod tables;

pub use arrivals::{ArrivalError, ArrivalLedger};
pub use bookings::{BookingError, BookingLedger};
pub use tables::{TableLedger, TableLedgerError};
