//! # Domain Types
//!
//! Core domain types used throughout the parcel tracker.
//!
//! ## Status State Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        ParcelStatus                                     │
//! │                                                                         │
//! │   ┌────────────┐  next()  ┌────────────┐  next()  ┌────────────┐      │
//! │   │ registered │ ───────► │    sent    │ ───────► │ delivered  │      │
//! │   └────────────┘          └────────────┘          └────────────┘      │
//! │        ▲                                                │              │
//! │     initial              address change + delete        │ next()=None  │
//! │                          only take effect here          ▼  (terminal)  │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! No regression and no skipping: the only way forward is [`ParcelStatus::next`].

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// =============================================================================
// Parcel Status
// =============================================================================

/// The lifecycle stage of a parcel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlx", sqlx(rename_all = "lowercase"))]
#[serde(rename_all = "lowercase")]
pub enum ParcelStatus {
    /// Accepted but not yet handed to a carrier.
    #[default]
    Registered,
    /// In transit.
    Sent,
    /// Handed to the recipient. Terminal.
    Delivered,
}

impl ParcelStatus {
    /// Returns the status that follows this one, or `None` when terminal.
    pub const fn next(self) -> Option<Self> {
        match self {
            ParcelStatus::Registered => Some(ParcelStatus::Sent),
            ParcelStatus::Sent => Some(ParcelStatus::Delivered),
            ParcelStatus::Delivered => None,
        }
    }

    /// Returns the stored text form.
    pub const fn as_str(self) -> &'static str {
        match self {
            ParcelStatus::Registered => "registered",
            ParcelStatus::Sent => "sent",
            ParcelStatus::Delivered => "delivered",
        }
    }
}

impl fmt::Display for ParcelStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ParcelStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "registered" => Ok(ParcelStatus::Registered),
            "sent" => Ok(ParcelStatus::Sent),
            "delivered" => Ok(ParcelStatus::Delivered),
            other => Err(CoreError::UnknownStatus(other.to_string())),
        }
    }
}

// =============================================================================
// Parcel
// =============================================================================

/// A shipment tracked from registration to delivery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Parcel {
    /// Store-assigned identifier. `0` until the parcel is persisted.
    pub number: i64,

    /// Owning client.
    pub client: i64,

    /// Current lifecycle stage.
    pub status: ParcelStatus,

    /// Delivery address. Only changes while `status` is `Registered`.
    pub address: String,

    /// Creation time, see [`format_timestamp`].
    pub created_at: String,
}

impl Parcel {
    /// Builds an unpersisted parcel in the `registered` state.
    pub fn new(client: i64, address: impl Into<String>, created_at: impl Into<String>) -> Self {
        Parcel {
            number: 0,
            client,
            status: ParcelStatus::Registered,
            address: address.into(),
            created_at: created_at.into(),
        }
    }
}

// =============================================================================
// Timestamps
// =============================================================================

/// Formats a creation time as RFC 3339 UTC with second precision,
/// e.g. `2024-05-01T10:20:30Z`.
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Current UTC time in the `created_at` format.
pub fn timestamp_now() -> String {
    format_timestamp(Utc::now())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_status_advances_forward_only() {
        let mut seen = vec![ParcelStatus::default()];
        while let Some(next) = seen.last().copied().and_then(ParcelStatus::next) {
            seen.push(next);
        }
        assert_eq!(
            seen,
            vec![
                ParcelStatus::Registered,
                ParcelStatus::Sent,
                ParcelStatus::Delivered
            ]
        );
        assert_eq!(ParcelStatus::Delivered.next(), None);
    }

    #[test]
    fn test_status_text_form() {
        for status in [
            ParcelStatus::Registered,
            ParcelStatus::Sent,
            ParcelStatus::Delivered,
        ] {
            assert_eq!(status.as_str().parse::<ParcelStatus>(), Ok(status));
            assert_eq!(status.to_string(), status.as_str());
        }

        assert_eq!(
            "Sent".parse::<ParcelStatus>(),
            Err(CoreError::UnknownStatus("Sent".to_string()))
        );
    }

    #[test]
    fn test_default_status_is_registered() {
        assert_eq!(ParcelStatus::default(), ParcelStatus::Registered);
    }

    #[test]
    fn test_status_serde_names() {
        let json = serde_json::to_string(&ParcelStatus::Delivered).unwrap();
        assert_eq!(json, "\"delivered\"");
    }

    #[test]
    fn test_new_parcel_is_registered_and_unnumbered() {
        let parcel = Parcel::new(7, "Main St 1", "2024-05-01T10:20:30Z");
        assert_eq!(parcel.status, ParcelStatus::Registered);
        assert_eq!(parcel.client, 7);
        assert_eq!(parcel.address, "Main St 1");
        assert_eq!(parcel.number, 0);
    }

    #[test]
    fn test_timestamp_format() {
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 10, 20, 30).unwrap();
        assert_eq!(format_timestamp(at), "2024-05-01T10:20:30Z");

        let now = timestamp_now();
        assert!(now.ends_with('Z'));
        assert!(DateTime::parse_from_rfc3339(&now).is_ok());
    }
}
