//! # parcel-core: Domain Model for the Parcel Tracker
//!
//! This crate holds the parcel entity and its status state machine as pure
//! types with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Parcel Tracker Architecture                        │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    tracker (ParcelService)                      │   │
//! │  │    register, next_status, change_address, delete, print         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ parcel-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌────────────────┐  ┌──────────────────┐  ┌──────────────┐   │   │
//! │  │   │     types      │  │  ParcelStatus    │  │    error     │   │   │
//! │  │   │    Parcel      │  │  registered ──►  │  │  CoreError   │   │   │
//! │  │   │  timestamps    │  │  sent ──►        │  │              │   │   │
//! │  │   │                │  │  delivered (end) │  │              │   │   │
//! │  │   └────────────────┘  └──────────────────┘  └──────────────┘   │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO CONSOLE • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                   parcel-db (Database Layer)                    │   │
//! │  │              SQLite queries, migrations, repository             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Parcel, ParcelStatus) and timestamp helpers
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use parcel_core::ParcelStatus;
//!
//! let status = ParcelStatus::Registered;
//! assert_eq!(status.next(), Some(ParcelStatus::Sent));
//! assert_eq!(ParcelStatus::Delivered.next(), None);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod types;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult};
pub use types::*;
