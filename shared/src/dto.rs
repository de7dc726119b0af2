//! Request and response payloads for the HTTP API
//!
//! The wire format counts `accompanying_guests` (friends of the named
//! guest); ledger entities count the whole party. Conversions between
//! the two live here so handlers never do the arithmetic by hand.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{Arrival, Booking, PartyTable};

/// Book a table: `POST /guest_list/{name}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookGuestRequest {
    pub table: i64,
    pub accompanying_guests: u32,
}

/// Check in an arrived guest: `PUT /guests/{name}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckInRequest {
    pub accompanying_guests: u32,
}

/// Response carrying just the guest's name
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuestResponse {
    pub name: String,
}

/// One entry of the booked guest list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuestEntry {
    pub name: String,
    pub table: i64,
    pub accompanying_guests: u32,
}

impl From<Booking> for GuestEntry {
    fn from(b: Booking) -> Self {
        Self {
            name: b.name,
            table: b.table_id,
            // party_size includes the named guest
            accompanying_guests: b.party_size.saturating_sub(1),
        }
    }
}

/// `GET /guest_list`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuestListResponse {
    pub guests: Vec<GuestEntry>,
}

/// One entry of the arrived guest list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArrivedGuestEntry {
    pub name: String,
    pub accompanying_guests: u32,
    pub time_arrived: DateTime<Utc>,
}

impl From<Arrival> for ArrivedGuestEntry {
    fn from(a: Arrival) -> Self {
        Self {
            name: a.name,
            accompanying_guests: a.party_size.saturating_sub(1),
            time_arrived: a.arrived_at,
        }
    }
}

/// `GET /guests`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArrivedGuestListResponse {
    pub guests: Vec<ArrivedGuestEntry>,
}

/// `GET /seats_empty`
///
/// Whole-plan seat count across all tables. Signed: shrinking a table
/// below its already-arrived head count is allowed, so the balance can
/// briefly go negative.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeatsResponse {
    pub seats_empty: i64,
}

/// `GET /tables`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableListResponse {
    pub tables: Vec<PartyTable>,
}
