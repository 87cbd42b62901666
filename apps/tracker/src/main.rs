//! # Parcel Tracker Entry Point
//!
//! ## Startup Sequence
//! 1. Initialize tracing (logging)
//! 2. Open `tracker.db` & run migrations
//! 3. Replay the demo scenario
//! 4. Close the database

use std::process::ExitCode;

use parcel_tracker::DEFAULT_DATABASE_PATH;

#[tokio::main]
async fn main() -> ExitCode {
    parcel_tracker::init_tracing();

    // Failures are already logged by the step that hit them
    match parcel_tracker::run(DEFAULT_DATABASE_PATH).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}
