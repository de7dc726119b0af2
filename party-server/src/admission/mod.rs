//! AdmissionController - orchestration over the capacity ledgers
//!
//! Every mutating request enters here and is delegated to the owning
//! ledger as a single atomic check-then-write; reads are lock-free
//! snapshots. The wire protocol counts accompanying guests, the ledgers
//! count whole parties - the conversion (`accompanying + 1`) happens at
//! this boundary and nowhere else.
//!
//! # Request flow
//!
//! ```text
//! book_guest(name, table, accompanying)
//!     └─ BookingLedger::admit         (atomic vs other bookings)
//! check_in_guest(name, accompanying)
//!     └─ ArrivalLedger::check_in      (atomic vs other check-ins)
//! remove_departed_guest(name)
//!     └─ ArrivalLedger::remove        (the booking is untouched)
//! available_seats()
//!     └─ total capacity - total arrived
//! ```

mod error;
pub use error::{AdmissionError, AdmissionResult};

#[cfg(test)]
mod tests;

use std::sync::Arc;

use shared::models::{Arrival, Booking, PartyTable};

use crate::ledger::{ArrivalLedger, BookingLedger, TableLedger};

/// Orchestrates the three capacity ledgers.
///
/// Per guest the reachable states are
/// `Unbooked -> Booked -> Arrived -> Departed`, with `Departed ->
/// Arrived` reachable again through a fresh check-in. Bookings are
/// never cancelled here.
#[derive(Debug)]
pub struct AdmissionController {
    tables: Arc<TableLedger>,
    bookings: Arc<BookingLedger>,
    arrivals: Arc<ArrivalLedger>,
}

impl AdmissionController {
    /// The named guest counts too; rejects a head count that does not
    /// fit in a party size.
    fn whole_party(accompanying_guests: u32) -> AdmissionResult<u32> {
        accompanying_guests
            .checked_add(1)
            .ok_or(AdmissionError::PartyTooLarge(accompanying_guests))
    }

    pub fn new() -> Self {
        let tables = Arc::new(TableLedger::new());
        let bookings = Arc::new(BookingLedger::new(tables.clone()));
        let arrivals = Arc::new(ArrivalLedger::new(tables.clone(), bookings.clone()));
        Self {
            tables,
            bookings,
            arrivals,
        }
    }

    // ========== Tables ==========

    /// Register a new table.
    pub fn add_table(&self, id: i64, capacity: u32) -> AdmissionResult<PartyTable> {
        let table = self.tables.register(id, capacity)?;
        tracing::info!(table_id = id, capacity, "Table registered");
        Ok(table)
    }

    /// Replace a table's capacity. Committed bookings and arrivals are
    /// left as they are; a shrink just blocks further admissions.
    pub fn update_table(&self, id: i64, capacity: u32) -> AdmissionResult<PartyTable> {
        let table = self.tables.update_capacity(id, capacity)?;
        tracing::info!(table_id = id, capacity, "Table capacity updated");
        Ok(table)
    }

    pub fn table_list(&self) -> Vec<PartyTable> {
        self.tables.list()
    }

    // ========== Bookings ==========

    /// Book a table for `name` plus `accompanying_guests` friends.
    pub fn book_guest(
        &self,
        name: &str,
        table_id: i64,
        accompanying_guests: u32,
    ) -> AdmissionResult<Booking> {
        // The ledgers always store the whole party
        let party_size = Self::whole_party(accompanying_guests)?;
        match self.bookings.admit(name, table_id, party_size) {
            Ok(booking) => {
                tracing::info!(guest = name, table_id, party_size, "Booking admitted");
                Ok(booking)
            }
            Err(e) => {
                tracing::debug!(guest = name, table_id, party_size, reason = %e, "Booking rejected");
                Err(e.into())
            }
        }
    }

    pub fn guest_list(&self) -> Vec<Booking> {
        self.bookings.list()
    }

    /// Seats booked on one table.
    pub fn occupied_seats(&self, table_id: i64) -> u64 {
        self.bookings.occupied_seats(table_id)
    }

    // ========== Arrivals ==========

    /// Check in `name` plus `accompanying_guests` friends. The party
    /// may differ in size from the booking as long as the booked
    /// table's physical capacity holds.
    pub fn check_in_guest(
        &self,
        name: &str,
        accompanying_guests: u32,
    ) -> AdmissionResult<Arrival> {
        let party_size = Self::whole_party(accompanying_guests)?;
        match self.arrivals.check_in(name, party_size) {
            Ok(arrival) => {
                tracing::info!(guest = name, party_size, "Check-in admitted");
                Ok(arrival)
            }
            Err(e) => {
                tracing::debug!(guest = name, party_size, reason = %e, "Check-in rejected");
                Err(e.into())
            }
        }
    }

    /// Remove a guest who left the party. Their whole party leaves with
    /// them; the booking record stays.
    pub fn remove_departed_guest(&self, name: &str) -> AdmissionResult<()> {
        if !self.arrivals.has_arrived(name) {
            return Err(AdmissionError::NotArrived(name.to_string()));
        }
        let removed = self.arrivals.remove(name);
        if removed == 0 {
            // The existence check just passed, so a zero-row delete
            // means the atomicity guarantee is broken somewhere.
            let err = AdmissionError::Inconsistency(format!(
                "arrival for guest {name} vanished during removal"
            ));
            tracing::error!(guest = name, "{err}");
            return Err(err);
        }
        tracing::info!(guest = name, "Departed guest removed");
        Ok(())
    }

    pub fn arrived_list(&self) -> Vec<Arrival> {
        self.arrivals.list()
    }

    // ========== Seats ==========

    /// Free seats across the whole party plan: total registered
    /// capacity minus everyone who has arrived. Signed because a table
    /// may legally shrink below its already-arrived head count.
    pub fn available_seats(&self) -> i64 {
        self.tables.total_capacity() as i64 - self.arrivals.total_arrived() as i64
    }
}

impl Default for AdmissionController {
    fn default() -> Self {
        Self::new()
    }
}
