//! Table Ledger
//!
//! Owns table identities and their seat capacity. Tables are registered
//! once and never deleted; capacity may be replaced at any time.

use std::collections::BTreeMap;

use parking_lot::RwLock;
use shared::models::PartyTable;
use thiserror::Error;

/// Table ledger errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TableLedgerError {
    #[error("The table with ID = {0} already exists")]
    AlreadyExists(i64),

    #[error("Table with ID = {0} does not exist")]
    NotFound(i64),
}

pub type TableLedgerResult<T> = Result<T, TableLedgerError>;

/// In-process table registry.
///
/// A `BTreeMap` keeps listings in id order.
#[derive(Debug, Default)]
pub struct TableLedger {
    tables: RwLock<BTreeMap<i64, u32>>,
}

impl TableLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new table. Fails if the id is already taken.
    pub fn register(&self, id: i64, capacity: u32) -> TableLedgerResult<PartyTable> {
        let mut tables = self.tables.write();
        if tables.contains_key(&id) {
            return Err(TableLedgerError::AlreadyExists(id));
        }
        tables.insert(id, capacity);
        Ok(PartyTable { id, capacity })
    }

    /// Replace a table's capacity.
    ///
    /// Existing bookings and arrivals are not re-validated: shrinking
    /// capacity below already-committed totals is accepted and simply
    /// blocks further admissions on that table.
    pub fn update_capacity(&self, id: i64, capacity: u32) -> TableLedgerResult<PartyTable> {
        let mut tables = self.tables.write();
        match tables.get_mut(&id) {
            Some(slot) => {
                *slot = capacity;
                Ok(PartyTable { id, capacity })
            }
            None => Err(TableLedgerError::NotFound(id)),
        }
    }

    pub fn exists(&self, id: i64) -> bool {
        self.tables.read().contains_key(&id)
    }

    /// Capacity of a table, if registered.
    pub fn capacity(&self, id: i64) -> Option<u32> {
        self.tables.read().get(&id).copied()
    }

    /// All registered tables, in id order.
    pub fn list(&self) -> Vec<PartyTable> {
        self.tables
            .read()
            .iter()
            .map(|(&id, &capacity)| PartyTable { id, capacity })
            .collect()
    }

    /// Sum of every registered capacity.
    pub fn total_capacity(&self) -> u64 {
        self.tables.read().values().map(|&c| c as u64).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_rejects_duplicate_id() {
        let ledger = TableLedger::new();
        assert!(!ledger.exists(1));
        assert!(ledger.register(1, 10).is_ok());
        assert!(ledger.exists(1));
        assert_eq!(
            ledger.register(1, 4),
            Err(TableLedgerError::AlreadyExists(1))
        );
        // the original capacity survives the failed registration
        assert_eq!(ledger.capacity(1), Some(10));
    }

    #[test]
    fn update_capacity_replaces_value() {
        let ledger = TableLedger::new();
        ledger.register(1, 10).unwrap();
        assert_eq!(
            ledger.update_capacity(1, 2),
            Ok(PartyTable { id: 1, capacity: 2 })
        );
        assert_eq!(ledger.capacity(1), Some(2));
        assert_eq!(
            ledger.update_capacity(7, 2),
            Err(TableLedgerError::NotFound(7))
        );
    }

    #[test]
    fn list_is_ordered_by_id() {
        let ledger = TableLedger::new();
        ledger.register(3, 6).unwrap();
        ledger.register(1, 10).unwrap();
        ledger.register(2, 0).unwrap();
        let ids: Vec<i64> = ledger.list().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(ledger.total_capacity(), 16);
    }
}
