//! # Parcel Service
//!
//! Lifecycle rules and console reporting on top of [`ParcelRepository`].
//!
//! ## Operations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  register ──────────► add ──► stamp number ──► report                   │
//! │  print_client_parcels ► get_by_client ──► header, lines, blank line     │
//! │  next_status ───────► get ──► status.next()                             │
//! │                                 ├── Some(s) ──► report ──► set_status   │
//! │                                 └── None ────► Ok(()) (delivered)       │
//! │  change_address ────► set_address  (store guards on 'registered')       │
//! │  delete ────────────► delete       (store guards on 'registered')       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Reports go to any [`Write`] sink; stdout by default. The lines are for
//! people, not parsers.

use std::io::{self, Stdout, Write};

use parcel_core::{timestamp_now, Parcel};
use parcel_db::ParcelRepository;
use tracing::{debug, info, warn};

use crate::error::ServiceResult;

/// Business-rule layer over the parcel store.
#[derive(Debug)]
pub struct ParcelService<W = Stdout> {
    store: ParcelRepository,
    out: W,
}

impl ParcelService<Stdout> {
    /// Creates a service reporting to stdout.
    pub fn new(store: ParcelRepository) -> Self {
        ParcelService::with_writer(store, io::stdout())
    }
}

impl<W: Write> ParcelService<W> {
    /// Creates a service reporting to `out`.
    pub fn with_writer(store: ParcelRepository, out: W) -> Self {
        ParcelService { store, out }
    }

    /// Returns the report sink.
    pub fn writer(&self) -> &W {
        &self.out
    }

    /// Consumes the service, returning the report sink.
    pub fn into_writer(self) -> W {
        self.out
    }

    /// Registers a new parcel for `client` at the current UTC time.
    ///
    /// The row is already stored when the confirmation is written. If that
    /// write fails the parcel stays registered and its number is only
    /// reported through the `warn!` event.
    pub async fn register(&mut self, client: i64, address: &str) -> ServiceResult<Parcel> {
        let mut parcel = Parcel::new(client, address, timestamp_now());

        parcel.number = self.store.add(&parcel).await?;

        info!(number = parcel.number, client, "Parcel registered");
        writeln!(
            self.out,
            "New parcel #{} to address {} from client {} registered at {}",
            parcel.number, parcel.address, parcel.client, parcel.created_at
        )
        .inspect_err(|e| {
            warn!(number = parcel.number, error = %e, "Registered parcel but failed to report it")
        })?;

        Ok(parcel)
    }

    /// Writes one line per parcel of `client`, then a blank line.
    ///
    /// Nothing is written when the fetch fails.
    pub async fn print_client_parcels(&mut self, client: i64) -> ServiceResult<()> {
        let parcels = self.store.get_by_client(client).await?;

        debug!(client, count = parcels.len(), "Printing client parcels");

        writeln!(self.out, "Parcels of client {}:", client)?;
        for parcel in &parcels {
            writeln!(
                self.out,
                "Parcel #{} to address {} from client {} registered at {}, status {}",
                parcel.number, parcel.address, parcel.client, parcel.created_at, parcel.status
            )?;
        }
        writeln!(self.out)?;

        Ok(())
    }

    /// Advances a parcel one step along `registered → sent → delivered`.
    ///
    /// A delivered parcel is left as is: no write, no report, no error.
    pub async fn next_status(&mut self, number: i64) -> ServiceResult<()> {
        let parcel = self.store.get(number).await?;

        let Some(next) = parcel.status.next() else {
            debug!(number, status = %parcel.status, "Parcel already in terminal status");
            return Ok(());
        };

        info!(number, from = %parcel.status, to = %next, "Advancing parcel status");
        writeln!(self.out, "Parcel #{} has new status: {}", number, next)?;

        self.store.set_status(number, next).await?;

        Ok(())
    }

    /// Changes the address; inert unless the parcel is still registered.
    pub async fn change_address(&mut self, number: i64, address: &str) -> ServiceResult<()> {
        debug!(number, "Changing parcel address");
        self.store.set_address(number, address).await?;
        Ok(())
    }

    /// Deletes the parcel; inert unless it is still registered.
    pub async fn delete(&mut self, number: i64) -> ServiceResult<()> {
        debug!(number, "Deleting parcel");
        self.store.delete(number).await?;
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
