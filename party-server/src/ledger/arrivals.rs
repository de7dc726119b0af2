//! Arrival Ledger
//!
//! Owns the guest name -> arrival mapping and enforces the arrival-time
//! capacity invariant: the arrived party sizes on a table never sum
//! past its capacity. Arrived totals are counted against the table each
//! guest *booked*, independently of the booked totals - a party may
//! show up larger or smaller than its booking.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use parking_lot::RwLock;
use shared::models::Arrival;
use thiserror::Error;

use super::{BookingLedger, TableLedger};

/// Check-in outcomes that reject the write
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ArrivalError {
    #[error("Guest with name {0} did not book a table")]
    NotBooked(String),

    #[error("No available space for {party_size} people at the table with ID = {table_id}")]
    NoAvailableSpace { table_id: i64, party_size: u32 },
}

pub type ArrivalResult<T> = Result<T, ArrivalError>;

/// In-process arrival store.
///
/// Like the booking ledger, `check_in` holds the write lock across the
/// capacity sum and the insert. A guest re-checking-in is handled as a
/// fresh admission against their current booking table; their earlier
/// arrival still counts in the occupied sum, and the row keyed by their
/// name is superseded on success.
#[derive(Debug)]
pub struct ArrivalLedger {
    tables: Arc<TableLedger>,
    bookings: Arc<BookingLedger>,
    arrivals: RwLock<HashMap<String, Arrival>>,
}

impl ArrivalLedger {
    pub fn new(tables: Arc<TableLedger>, bookings: Arc<BookingLedger>) -> Self {
        Self {
            tables,
            bookings,
            arrivals: RwLock::new(HashMap::new()),
        }
    }

    /// Atomically admit an arrival of `party_size` people.
    ///
    /// Requires a prior booking; the arrived total on the booked table
    /// must stay within the table's capacity. On rejection nothing is
    /// written.
    pub fn check_in(&self, name: &str, party_size: u32) -> ArrivalResult<Arrival> {
        let mut arrivals = self.arrivals.write();

        let booking = self
            .bookings
            .get(name)
            .ok_or_else(|| ArrivalError::NotBooked(name.to_string()))?;
        let table_id = booking.table_id;
        // Tables are never deleted, so a booked table always resolves.
        let capacity = self.tables.capacity(table_id).unwrap_or(0);

        let occupied: u64 = arrivals
            .values()
            .filter(|a| {
                self.bookings
                    .get(&a.name)
                    .is_some_and(|b| b.table_id == table_id)
            })
            .map(|a| a.party_size as u64)
            .sum();
        if occupied + party_size as u64 > capacity as u64 {
            return Err(ArrivalError::NoAvailableSpace {
                table_id,
                party_size,
            });
        }

        let arrival = Arrival {
            name: name.to_string(),
            party_size,
            arrived_at: Utc::now(),
        };
        arrivals.insert(name.to_string(), arrival.clone());
        Ok(arrival)
    }

    /// Whether an arrival record exists for this guest.
    pub fn has_arrived(&self, name: &str) -> bool {
        self.arrivals.read().contains_key(name)
    }

    /// Delete the guest's arrival record, leaving the booking alone.
    /// Returns the number of rows removed (0 or 1).
    pub fn remove(&self, name: &str) -> usize {
        match self.arrivals.write().remove(name) {
            Some(_) => 1,
            None => 0,
        }
    }

    /// All arrivals, ordered by arrival time then name.
    pub fn list(&self) -> Vec<Arrival> {
        let mut all: Vec<Arrival> = self.arrivals.read().values().cloned().collect();
        all.sort_by(|a, b| a.arrived_at.cmp(&b.arrived_at).then(a.name.cmp(&b.name)));
        all
    }

    /// Sum of everyone who has arrived, across all tables.
    pub fn total_arrived(&self) -> u64 {
        self.arrivals
            .read()
            .values()
            .map(|a| a.party_size as u64)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seated_party() -> (Arc<TableLedger>, Arc<BookingLedger>, ArrivalLedger) {
        let tables = Arc::new(TableLedger::new());
        tables.register(1, 10).unwrap();
        let bookings = Arc::new(BookingLedger::new(tables.clone()));
        let arrivals = ArrivalLedger::new(tables.clone(), bookings.clone());
        (tables, bookings, arrivals)
    }

    #[test]
    fn check_in_requires_booking() {
        let (_, _, arrivals) = seated_party();
        assert_eq!(
            arrivals.check_in("Ghost", 1),
            Err(ArrivalError::NotBooked("Ghost".to_string()))
        );
    }

    #[test]
    fn check_in_records_arrival() {
        let (_, bookings, arrivals) = seated_party();
        bookings.admit("Jon Snow", 1, 4).unwrap();
        let arrival = arrivals.check_in("Jon Snow", 4).unwrap();
        assert_eq!(arrival.party_size, 4);
        assert!(arrivals.has_arrived("Jon Snow"));
        assert_eq!(arrivals.total_arrived(), 4);
    }

    #[test]
    fn party_may_arrive_larger_than_booked_if_table_fits() {
        let (_, bookings, arrivals) = seated_party();
        bookings.admit("Jon Snow", 1, 4).unwrap();
        // booked 4, shows up with 6 - physical capacity 10 still holds
        arrivals.check_in("Jon Snow", 6).unwrap();
        assert_eq!(arrivals.total_arrived(), 6);
    }

    #[test]
    fn arrived_total_is_capped_independently_of_booked_total() {
        let (_, bookings, arrivals) = seated_party();
        bookings.admit("Jon Snow", 1, 5).unwrap();
        bookings.admit("Arya Stark", 1, 5).unwrap();
        arrivals.check_in("Jon Snow", 7).unwrap();
        // Arya booked 5 but only 3 physical seats remain
        assert_eq!(
            arrivals.check_in("Arya Stark", 5),
            Err(ArrivalError::NoAvailableSpace {
                table_id: 1,
                party_size: 5
            })
        );
        arrivals.check_in("Arya Stark", 3).unwrap();
        assert_eq!(arrivals.total_arrived(), 10);
    }

    #[test]
    fn re_check_in_is_a_fresh_admission_counting_prior_arrival() {
        let (_, bookings, arrivals) = seated_party();
        bookings.admit("Jon Snow", 1, 4).unwrap();
        arrivals.check_in("Jon Snow", 6).unwrap();
        // 6 already seated, so another 6 does not fit
        assert_eq!(
            arrivals.check_in("Jon Snow", 6),
            Err(ArrivalError::NoAvailableSpace {
                table_id: 1,
                party_size: 6
            })
        );
        // but 4 more does, superseding the earlier row
        arrivals.check_in("Jon Snow", 4).unwrap();
        assert_eq!(arrivals.total_arrived(), 4);
        assert_eq!(arrivals.list().len(), 1);
    }

    #[test]
    fn remove_deletes_arrival_but_not_booking() {
        let (_, bookings, arrivals) = seated_party();
        bookings.admit("Jon Snow", 1, 4).unwrap();
        arrivals.check_in("Jon Snow", 4).unwrap();
        assert_eq!(arrivals.remove("Jon Snow"), 1);
        assert_eq!(arrivals.remove("Jon Snow"), 0);
        assert!(!arrivals.has_arrived("Jon Snow"));
        assert!(bookings.get("Jon Snow").is_some());
        // departed guests may come back
        arrivals.check_in("Jon Snow", 4).unwrap();
        assert!(arrivals.has_arrived("Jon Snow"));
    }

    #[test]
    fn shrunk_table_blocks_new_arrivals_but_keeps_existing() {
        let (tables, bookings, arrivals) = seated_party();
        bookings.admit("Jon Snow", 1, 4).unwrap();
        bookings.admit("Arya Stark", 1, 4).unwrap();
        arrivals.check_in("Jon Snow", 4).unwrap();
        tables.update_capacity(1, 2).unwrap();
        assert_eq!(
            arrivals.check_in("Arya Stark", 4),
            Err(ArrivalError::NoAvailableSpace {
                table_id: 1,
                party_size: 4
            })
        );
        assert_eq!(arrivals.total_arrived(), 4);
    }
}
