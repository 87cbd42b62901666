//! # parcel-db: Database Layer for the Parcel Tracker
//!
//! This crate is the parcel **store**. It uses SQLite with sqlx and owns
//! every query issued against the `parcel` table.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Parcel Tracker Data Flow                           │
//! │                                                                         │
//! │  ParcelService::register(client, address)                              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     parcel-db (THIS CRATE)                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌────────────────┐   ┌──────────────┐  │   │
//! │  │   │   Database    │    │  Repository    │   │  Migrations  │  │   │
//! │  │   │   (pool.rs)   │    │  (parcel.rs)   │   │  (embedded)  │  │   │
//! │  │   │               │◄───│ ParcelRepo     │   │ 001_create   │  │   │
//! │  │   │ SqlitePool    │    │                │   │   _parcel    │  │   │
//! │  │   └───────────────┘    └────────────────┘   └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     SQLite Database (tracker.db)                │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection handle creation and configuration
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Database error types
//! - [`repository`] - Repository implementations
//!
//! ## Usage
//!
//! ```rust,ignore
//! use parcel_db::{Database, DbConfig};
//!
//! let db = Database::new(DbConfig::new("tracker.db")).await?;
//! let parcels = db.parcels().get_by_client(1).await?;
//! db.close().await;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};
pub use repository::parcel::ParcelRepository;
