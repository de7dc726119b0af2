//! Party Server - seating capacity admission control
//!
//! # Architecture overview
//!
//! The server admits guest bookings and guest arrivals against a fixed
//! pool of table capacity. Two capacity ledgers are enforced
//! independently: seats reserved on paper (bookings) and seats
//! physically occupied (arrivals). Neither may ever exceed a table's
//! capacity, even under concurrent requests.
//!
//! # Module structure
//!
//! ```text
//! party-server/src/
//! ├── core/       # config, state, server bootstrap
//! ├── ledger/     # table, booking and arrival ledgers
//! ├── admission/  # admission controller (atomic check-then-write)
//! ├── api/        # HTTP routes and handlers
//! └── utils/      # errors, logging
//! ```

pub mod admission;
pub mod api;
pub mod core;
pub mod ledger;
pub mod utils;

// Re-export public types
pub use admission::{AdmissionController, AdmissionError};
pub use core::{Config, Server, ServerState};
pub use ledger::{ArrivalLedger, BookingLedger, TableLedger};
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

pub fn print_banner() {
    println!(
        r#"
    ____             __
   / __ \____ ______/ /___  __
  / /_/ / __ `/ ___/ __/ / / /
 / ____/ /_/ / /  / /_/ /_/ /
/_/    \__,_/_/   \__/\__, /
                     /____/
    "#
    );
}
