//! Arrival Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A checked-in party physically occupying seats.
///
/// Tracked separately from the booking: the arrived head count may
/// differ from the booked one. One arrival per guest name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Arrival {
    pub name: String,
    pub party_size: u32,
    pub arrived_at: DateTime<Utc>,
}
