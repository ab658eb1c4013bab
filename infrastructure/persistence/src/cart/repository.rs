use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;

use business::domain::cart::model::Cart;
use business::domain::cart::repository::CartRepository;
use business::domain::errors::RepositoryError;

use super::entity::{StorageSlotEntity, decode_snapshot, encode_snapshot};

/// Default slot name, shared with the storefront web client.
pub const DEFAULT_CART_KEY: &str = "@RocketShoes:cart";

/// Cart snapshot stored in a single named row of `local_storage`.
pub struct CartRepositorySqlite {
    pool: SqlitePool,
    key: String,
}

impl CartRepositorySqlite {
    pub fn new(pool: SqlitePool, key: impl Into<String>) -> Self {
        Self {
            pool,
            key: key.into(),
        }
    }
}

#[async_trait]
impl CartRepository for CartRepositorySqlite {
    async fn load(&self) -> Result<Option<Cart>, RepositoryError> {
        let slot = sqlx::query_as::<_, StorageSlotEntity>(
            "SELECT key, value, updated_at FROM local_storage WHERE key = ?",
        )
        .bind(&self.key)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!(key = %self.key, error = %e, "cart slot read failed");
            RepositoryError::DatabaseError
        })?;

        let Some(slot) = slot else {
            return Ok(None);
        };

        tracing::debug!(key = %slot.key, updated_at = %slot.updated_at, "cart slot loaded");
        decode_snapshot(&slot.value).map(Some)
    }

    async fn save(&self, cart: &Cart) -> Result<(), RepositoryError> {
        let value = encode_snapshot(cart)?;

        sqlx::query(
            r#"INSERT INTO local_storage (key, value, updated_at)
            VALUES (?, ?, ?)
            ON CONFLICT (key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at"#,
        )
        .bind(&self.key)
        .bind(value)
        .bind(Utc::now())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!(key = %self.key, error = %e, "cart slot write failed");
            RepositoryError::Persistence
        })?;

        Ok(())
    }

    async fn clear(&self) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM local_storage WHERE key = ?")
            .bind(&self.key)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!(key = %self.key, error = %e, "cart slot delete failed");
                RepositoryError::Persistence
            })?;

        Ok(())
    }
}
