//! # Repository Module
//!
//! Database repository implementations for the parcel tracker.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern                                   │
//! │                                                                         │
//! │  ParcelService                                                         │
//! │       │                                                                 │
//! │       │  db.parcels().get(number)                                      │
//! │       ▼                                                                 │
//! │  ParcelRepository                                                      │
//! │  ├── add(&self, parcel)                                                │
//! │  ├── get(&self, number)                                                │
//! │  ├── get_by_client(&self, client)                                      │
//! │  ├── set_status(&self, number, status)                                 │
//! │  ├── set_address(&self, number, address)                               │
//! │  └── delete(&self, number)                                             │
//! │       │                                                                 │
//! │       │  Parameterized SQL                                              │
//! │       ▼                                                                 │
//! │  SQLite Database                                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Repositories hold no business rules: the only status check that lives
//! here is the `status = 'registered'` predicate on address change and delete.

pub mod parcel;
