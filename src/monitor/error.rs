//! Monitor lifecycle errors.

use thiserror::Error;

/// Errors that can occur when driving a [`DossierMonitor`](super::DossierMonitor)
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MonitorError {
    #[error("Monitor is already running. Call .stop() before starting again")]
    AlreadyRunning,
}
