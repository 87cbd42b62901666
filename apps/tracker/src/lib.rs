//! # Parcel Tracker
//!
//! The service layer of the parcel tracker and the demo that drives it.
//!
//! ## Module Organization
//! ```text
//! parcel_tracker/
//! ├── lib.rs          ◄─── You are here (logging setup & demo run)
//! ├── service.rs      ◄─── ParcelService: lifecycle rules + reports
//! └── error.rs        ◄─── ServiceError
//! ```

pub mod error;
pub mod service;

use std::path::Path;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use parcel_db::{Database, DbConfig};

pub use error::{ServiceError, ServiceResult};
pub use service::ParcelService;

/// Database file used by the demo binary, relative to the working directory.
pub const DEFAULT_DATABASE_PATH: &str = "tracker.db";

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=parcel=trace` - Show trace for parcel crates only
/// - Default: INFO, DEBUG for parcel crates
///
/// Logs go to stderr so stdout carries only the service's reports.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,parcel=debug,sqlx=warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Opens the database at `path`, runs the demo scenario and closes it.
///
/// ## Scenario
/// ```text
/// register(1, A) ─► change_address(B) ─► next_status ─► print
///     ─► delete (inert: parcel is sent) ─► print
///     ─► register(1, A) ─► delete (effective) ─► print
/// ```
///
/// The first failing step is logged and the remaining steps are skipped.
/// The handle is closed whatever the outcome.
pub async fn run(path: impl AsRef<Path>) -> ServiceResult<()> {
    info!("Starting parcel tracker");

    let db = Database::new(DbConfig::new(path.as_ref()))
        .await
        .inspect_err(|e| error!(error = %e, "Failed to open the database"))?;

    let mut service = ParcelService::new(db.parcels());
    let result = scenario(&mut service).await;

    db.close().await;
    result
}

async fn scenario<W: std::io::Write>(service: &mut ParcelService<W>) -> ServiceResult<()> {
    let client = 1;
    let address = "Pskov, Kolotushkina St 5";

    let parcel = service
        .register(client, address)
        .await
        .inspect_err(|e| error!(error = %e, "Failed to register parcel"))?;

    service
        .change_address(parcel.number, "Saratov, Kozlova St 25")
        .await
        .inspect_err(|e| error!(error = %e, "Failed to change address"))?;

    service
        .next_status(parcel.number)
        .await
        .inspect_err(|e| error!(error = %e, "Failed to update status"))?;

    print_parcels(service, client).await?;

    service
        .delete(parcel.number)
        .await
        .inspect_err(|e| error!(error = %e, "Failed to delete parcel"))?;

    print_parcels(service, client).await?;

    let parcel = service
        .register(client, address)
        .await
        .inspect_err(|e| error!(error = %e, "Failed to register parcel"))?;

    service
        .delete(parcel.number)
        .await
        .inspect_err(|e| error!(error = %e, "Failed to delete parcel"))?;

    print_parcels(service, client).await
}

async fn print_parcels<W: std::io::Write>(
    service: &mut ParcelService<W>,
    client: i64,
) -> ServiceResult<()> {
    service
        .print_client_parcels(client)
        .await
        .inspect_err(|e| error!(error = %e, "Failed to print client parcels"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use parcel_core::ParcelStatus;

    #[tokio::test]
    async fn test_scenario_leaves_sent_parcel_only() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let mut service = ParcelService::with_writer(db.parcels(), Vec::new());

        scenario(&mut service).await.unwrap();

        let parcels = db.parcels().get_by_client(1).await.unwrap();
        assert_eq!(parcels.len(), 1);
        assert_eq!(parcels[0].status, ParcelStatus::Sent);
        assert_eq!(parcels[0].address, "Saratov, Kozlova St 25");

        let out = String::from_utf8(service.into_writer()).unwrap();
        assert_eq!(out.matches("Parcels of client 1:").count(), 3);
        assert_eq!(out.matches("New parcel #").count(), 2);
    }
}
