//! # Service Error Type
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Tracker                            │
//! │                                                                         │
//! │  ParcelService operation                                                │
//! │         │                                                               │
//! │         ├── store failed?  ─── DbError ───────► ServiceError::Db        │
//! │         │                      (unchanged, transparent Display)         │
//! │         │                                                               │
//! │         ├── report failed? ─── io::Error ─────► ServiceError::Report    │
//! │         │                                                               │
//! │         └── conditional no-op ────────────────► Ok(())                  │
//! │                                                                         │
//! │  run() logs the first error and skips the remaining steps.             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io;

use parcel_db::DbError;
use thiserror::Error;

/// Errors returned by [`crate::ParcelService`].
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The store rejected or failed a round-trip.
    #[error(transparent)]
    Db(#[from] DbError),

    /// Writing a report line to the output sink failed.
    #[error("Failed to write report: {0}")]
    Report(#[from] io::Error),
}

impl ServiceError {
    /// Returns the underlying store error, if any.
    pub fn as_db(&self) -> Option<&DbError> {
        match self {
            ServiceError::Db(err) => Some(err),
            ServiceError::Report(_) => None,
        }
    }
}

/// Result type for service operations.
pub type ServiceResult<T> = Result<T, ServiceError>;
