//! # Parcel Repository
//!
//! Database operations for parcels.
//!
//! ## Conditional Mutations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │               set_address / delete guard                                │
//! │                                                                         │
//! │  WHERE number = ?1 AND status = 'registered'                           │
//! │       │                                                                 │
//! │       ├── registered       → 1 row affected, change applied            │
//! │       └── sent / delivered → 0 rows affected, Ok(()) all the same      │
//! │                                                                         │
//! │  set_status has no guard: the service owns the forward-only rule.      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use parcel_core::{Parcel, ParcelStatus};

/// Repository for parcel database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = ParcelRepository::new(pool);
///
/// let number = repo.add(&parcel).await?;
/// let stored = repo.get(number).await?;
/// ```
#[derive(Debug, Clone)]
pub struct ParcelRepository {
    pool: SqlitePool,
}

impl ParcelRepository {
    /// Creates a new ParcelRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ParcelRepository { pool }
    }

    /// Inserts a parcel and returns its newly assigned number.
    ///
    /// `client`, `status`, `address` and `created_at` are written as given;
    /// `parcel.number` is ignored.
    pub async fn add(&self, parcel: &Parcel) -> DbResult<i64> {
        let result = sqlx::query(
            r#"
            INSERT INTO parcel (client, status, address, created_at)
            VALUES (?1, ?2, ?3, ?4)
            "#,
        )
        .bind(parcel.client)
        .bind(parcel.status)
        .bind(&parcel.address)
        .bind(&parcel.created_at)
        .execute(&self.pool)
        .await?;

        let number = result.last_insert_rowid();
        debug!(number, client = parcel.client, "Inserted parcel");

        Ok(number)
    }

    /// Gets a parcel by number.
    ///
    /// ## Errors
    /// [`DbError::NotFound`] when no row has this number.
    pub async fn get(&self, number: i64) -> DbResult<Parcel> {
        debug!(number, "Fetching parcel");

        sqlx::query_as::<_, Parcel>(
            r#"
            SELECT number, client, status, address, created_at
            FROM parcel
            WHERE number = ?1
            "#,
        )
        .bind(number)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| DbError::not_found("Parcel", number))
    }

    /// Gets every parcel of a client. Row order is unspecified.
    pub async fn get_by_client(&self, client: i64) -> DbResult<Vec<Parcel>> {
        let parcels = sqlx::query_as::<_, Parcel>(
            r#"
            SELECT number, client, status, address, created_at
            FROM parcel
            WHERE client = ?1
            "#,
        )
        .bind(client)
        .fetch_all(&self.pool)
        .await?;

        debug!(client, count = parcels.len(), "Fetched client parcels");

        Ok(parcels)
    }

    /// Overwrites the status of a parcel.
    pub async fn set_status(&self, number: i64, status: ParcelStatus) -> DbResult<()> {
        let result = sqlx::query("UPDATE parcel SET status = ?2 WHERE number = ?1")
            .bind(number)
            .bind(status)
            .execute(&self.pool)
            .await?;

        debug!(number, %status, rows = result.rows_affected(), "Updated parcel status");

        Ok(())
    }

    /// Changes the address of a parcel that is still `registered`.
    ///
    /// A parcel in any other status is left untouched without error.
    pub async fn set_address(&self, number: i64, address: &str) -> DbResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE parcel SET address = ?2
            WHERE number = ?1 AND status = ?3
            "#,
        )
        .bind(number)
        .bind(address)
        .bind(ParcelStatus::Registered)
        .execute(&self.pool)
        .await?;

        debug!(number, rows = result.rows_affected(), "Updated parcel address");

        Ok(())
    }

    /// Deletes a parcel that is still `registered`.
    ///
    /// A parcel in any other status is left in place without error.
    pub async fn delete(&self, number: i64) -> DbResult<()> {
        let result = sqlx::query("DELETE FROM parcel WHERE number = ?1 AND status = ?2")
            .bind(number)
            .bind(ParcelStatus::Registered)
            .execute(&self.pool)
            .await?;

        debug!(number, rows = result.rows_affected(), "Deleted parcel");

        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Database, DbConfig};
    use parcel_core::timestamp_now;

    async fn repo() -> ParcelRepository {
        Database::new(DbConfig::in_memory()).await.unwrap().parcels()
    }

    fn test_parcel() -> Parcel {
        Parcel::new(1000, "test", timestamp_now())
    }

    #[tokio::test]
    async fn test_add_get_delete() {
        let repo = repo().await;
        let parcel = test_parcel();

        let number = repo.add(&parcel).await.unwrap();
        assert!(number > 0);

        let stored = repo.get(number).await.unwrap();
        assert_eq!(stored.number, number);
        assert_eq!(stored.client, parcel.client);
        assert_eq!(stored.status, parcel.status);
        assert_eq!(stored.address, parcel.address);
        assert_eq!(stored.created_at, parcel.created_at);

        repo.delete(number).await.unwrap();

        let err = repo.get(number).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_numbers_are_not_reused() {
        let repo = repo().await;

        let first = repo.add(&test_parcel()).await.unwrap();
        repo.delete(first).await.unwrap();
        let second = repo.add(&test_parcel()).await.unwrap();

        assert!(second > first);
    }

    #[tokio::test]
    async fn test_get_missing_parcel() {
        let repo = repo().await;

        let err = repo.get(404).await.unwrap_err();
        assert_eq!(err.to_string(), "Parcel not found: 404");
    }

    #[tokio::test]
    async fn test_set_address() {
        let repo = repo().await;
        let number = repo.add(&test_parcel()).await.unwrap();

        repo.set_address(number, "new test address").await.unwrap();

        let stored = repo.get(number).await.unwrap();
        assert_eq!(stored.address, "new test address");
    }

    #[tokio::test]
    async fn test_set_address_ignored_once_sent() {
        let repo = repo().await;

        for status in [ParcelStatus::Sent, ParcelStatus::Delivered] {
            let number = repo.add(&test_parcel()).await.unwrap();
            repo.set_status(number, status).await.unwrap();

            repo.set_address(number, "elsewhere").await.unwrap();

            let stored = repo.get(number).await.unwrap();
            assert_eq!(stored.address, "test");
            assert_eq!(stored.status, status);
        }
    }

    #[tokio::test]
    async fn test_delete_ignored_once_sent() {
        let repo = repo().await;
        let number = repo.add(&test_parcel()).await.unwrap();
        repo.set_status(number, ParcelStatus::Sent).await.unwrap();

        repo.delete(number).await.unwrap();

        let stored = repo.get(number).await.unwrap();
        assert_eq!(stored.status, ParcelStatus::Sent);
    }

    #[tokio::test]
    async fn test_set_status_is_unconditional() {
        let repo = repo().await;
        let number = repo.add(&test_parcel()).await.unwrap();

        repo.set_status(number, ParcelStatus::Delivered).await.unwrap();
        assert_eq!(repo.get(number).await.unwrap().status, ParcelStatus::Delivered);

        repo.set_status(number, ParcelStatus::Registered).await.unwrap();
        assert_eq!(repo.get(number).await.unwrap().status, ParcelStatus::Registered);
    }

    #[tokio::test]
    async fn test_get_by_client() {
        let repo = repo().await;

        let mut added = Vec::new();
        for address in ["first", "second", "third"] {
            let mut parcel = Parcel::new(7, address, timestamp_now());
            parcel.number = repo.add(&parcel).await.unwrap();
            added.push(parcel);
        }
        repo.add(&Parcel::new(8, "other client", timestamp_now()))
            .await
            .unwrap();

        let mut stored = repo.get_by_client(7).await.unwrap();
        stored.sort_by_key(|p| p.number);

        assert_eq!(stored, added);
        assert!(repo.get_by_client(9).await.unwrap().is_empty());
    }
}
