use std::sync::Arc;

use crate::admission::AdmissionController;
use crate::core::Config;

/// Server state - shared handle to every service
///
/// `ServerState` is cheap to clone: the admission controller (and the
/// ledgers behind it) live in an `Arc`, so each request handler works
/// against the same capacity books.
#[derive(Clone, Debug)]
pub struct ServerState {
    /// Server configuration (immutable)
    pub config: Config,
    /// Admission controller owning the three ledgers
    pub admission: Arc<AdmissionController>,
}

impl ServerState {
    pub fn new(config: Config, admission: Arc<AdmissionController>) -> Self {
        Self { config, admission }
    }

    /// Initialize server state with empty ledgers.
    pub fn initialize(config: &Config) -> Self {
        Self::new(config.clone(), Arc::new(AdmissionController::new()))
    }

    /// Admission controller handle
    pub fn admission(&self) -> &AdmissionController {
        &self.admission
    }
}
