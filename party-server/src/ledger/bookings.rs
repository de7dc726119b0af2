//! Booking Ledger
//!
//! Owns the guest name -> booking mapping and enforces the booking-time
//! capacity invariant: the booked party sizes on a table never sum past
//! its capacity.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use shared::models::Booking;
use thiserror::Error;

use super::TableLedger;

/// Booking admission outcomes that reject the write
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BookingError {
    #[error("Guest with name {0} already exists")]
    AlreadyBooked(String),

    #[error("There is no table with ID = {0}")]
    NoSuchTable(i64),

    #[error("There is no free space at the table with ID = {0}")]
    NoFreeSpace(i64),
}

pub type BookingResult<T> = Result<T, BookingError>;

/// In-process booking store.
///
/// `admit` is the only writer. It holds the write lock across the
/// capacity check and the insert, so concurrent admissions on the same
/// table serialize and can never jointly overspend the remaining seats.
#[derive(Debug)]
pub struct BookingLedger {
    tables: Arc<TableLedger>,
    bookings: RwLock<HashMap<String, Booking>>,
}

impl BookingLedger {
    pub fn new(tables: Arc<TableLedger>) -> Self {
        Self {
            tables,
            bookings: RwLock::new(HashMap::new()),
        }
    }

    /// Atomically admit a booking of `party_size` seats on `table_id`.
    ///
    /// Verifies in one indivisible step that the guest holds no booking
    /// yet, that the table exists, and that the booked total stays
    /// within capacity. On any rejection nothing is written.
    pub fn admit(&self, name: &str, table_id: i64, party_size: u32) -> BookingResult<Booking> {
        let mut bookings = self.bookings.write();

        if bookings.contains_key(name) {
            return Err(BookingError::AlreadyBooked(name.to_string()));
        }
        let capacity = self
            .tables
            .capacity(table_id)
            .ok_or(BookingError::NoSuchTable(table_id))?;

        let booked: u64 = bookings
            .values()
            .filter(|b| b.table_id == table_id)
            .map(|b| b.party_size as u64)
            .sum();
        if booked + party_size as u64 > capacity as u64 {
            return Err(BookingError::NoFreeSpace(table_id));
        }

        let booking = Booking {
            name: name.to_string(),
            table_id,
            party_size,
        };
        bookings.insert(name.to_string(), booking.clone());
        Ok(booking)
    }

    pub fn get(&self, name: &str) -> Option<Booking> {
        self.bookings.read().get(name).cloned()
    }

    /// All bookings, ordered by guest name.
    pub fn list(&self) -> Vec<Booking> {
        let mut all: Vec<Booking> = self.bookings.read().values().cloned().collect();
        all.sort_by(|a, b| a.name.cmp(&b.name));
        all
    }

    /// Seats booked on one table.
    pub fn occupied_seats(&self, table_id: i64) -> u64 {
        self.bookings
            .read()
            .values()
            .filter(|b| b.table_id == table_id)
            .map(|b| b.party_size as u64)
            .sum()
    }
}
