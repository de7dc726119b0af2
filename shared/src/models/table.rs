//! Party Table Model

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Party table entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartyTable {
    pub id: i64,
    /// Fixed seat count for this table
    pub capacity: u32,
}

/// Create table payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct TableCreate {
    #[validate(range(min = 0))]
    pub id: i64,
    pub capacity: u32,
}

/// Update table payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableUpdate {
    pub capacity: u32,
}
