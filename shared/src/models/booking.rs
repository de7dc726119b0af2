//! Booking Model

use serde::{Deserialize, Serialize};

/// A guest's advance reservation of table capacity.
///
/// `party_size` is the total head count, including the named guest.
/// One booking per guest name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    pub name: String,
    pub table_id: i64,
    pub party_size: u32,
}
