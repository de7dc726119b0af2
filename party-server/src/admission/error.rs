use thiserror::Error;

use crate::ledger::{ArrivalError, BookingError, TableLedgerError};

/// Admission errors, as surfaced to the request layer.
///
/// Conflicts and capacity rejections are ordinary outcomes of running a
/// party and are never logged as errors. `Inconsistency` means a write
/// that a prior check promised would succeed did not take effect - that
/// breaks the atomicity guarantee and is surfaced loudly instead of
/// being retried.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AdmissionError {
    // ========== Validation ==========
    #[error("A party with {0} accompanying guests cannot be admitted")]
    PartyTooLarge(u32),

    // ========== Conflict ==========
    #[error("Guest with name {0} already exists")]
    AlreadyBooked(String),

    #[error("The table with ID = {0} already exists")]
    TableExists(i64),

    // ========== NotFound ==========
    #[error("There is no table with ID = {0}")]
    NoSuchTable(i64),

    #[error("Table with ID = {0} does not exist")]
    TableNotFound(i64),

    #[error("Guest with name {0} did not book a table")]
    NotBooked(String),

    #[error("Guest with name {0} did not arrive")]
    NotArrived(String),

    // ========== CapacityExceeded ==========
    #[error("There is no free space at the table with ID = {0}")]
    NoFreeSpace(i64),

    #[error("No available space for {party_size} people at the table with ID = {table_id}")]
    NoAvailableSpace { table_id: i64, party_size: u32 },

    // ========== InternalInconsistency ==========
    #[error("Ledger inconsistency: {0}")]
    Inconsistency(String),
}

impl From<TableLedgerError> for AdmissionError {
    fn from(err: TableLedgerError) -> Self {
        match err {
            TableLedgerError::AlreadyExists(id) => AdmissionError::TableExists(id),
            TableLedgerError::NotFound(id) => AdmissionError::TableNotFound(id),
        }
    }
}

impl From<BookingError> for AdmissionError {
    fn from(err: BookingError) -> Self {
        match err {
            BookingError::AlreadyBooked(name) => AdmissionError::AlreadyBooked(name),
            BookingError::NoSuchTable(id) => AdmissionError::NoSuchTable(id),
            BookingError::NoFreeSpace(id) => AdmissionError::NoFreeSpace(id),
        }
    }
}

impl From<ArrivalError> for AdmissionError {
    fn from(err: ArrivalError) -> Self {
        match err {
            ArrivalError::NotBooked(name) => AdmissionError::NotBooked(name),
            ArrivalError::NoAvailableSpace {
                table_id,
                party_size,
            } => AdmissionError::NoAvailableSpace {
                table_id,
                party_size,
            },
        }
    }
}

pub type AdmissionResult<T> = Result<T, AdmissionError>;
