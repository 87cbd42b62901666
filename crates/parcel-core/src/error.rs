//! # Error Types
//!
//! Domain-specific error types for parcel-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  parcel-core errors (this file)                                        │
//! │  └── CoreError        - Malformed domain values                        │
//! │                                                                         │
//! │  parcel-db errors (separate crate)                                     │
//! │  └── DbError          - Database operation failures                    │
//! │                                                                         │
//! │  tracker errors (app)                                                  │
//! │  └── ServiceError     - DbError verbatim, or a failed report write     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Conditional no-ops (address change or delete on a parcel that already
//! left `registered`, advancing a delivered parcel) are successes and have
//! no error variant.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Domain errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// A status string is not one of `registered`, `sent`, `delivered`.
    #[error("Unknown parcel status: '{0}'")]
    UnknownStatus(String),
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::UnknownStatus("lost".to_string());
        assert_eq!(err.to_string(), "Unknown parcel status: 'lost'");
    }
}
