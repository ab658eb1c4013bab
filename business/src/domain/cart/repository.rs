use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::Cart;

/// Local persistent slot holding the serialized cart snapshot.
#[async_trait]
pub trait CartRepository: Send + Sync {
    /// Returns `None` when no snapshot has been stored.
    async fn load(&self) -> Result<Option<Cart>, RepositoryError>;
    async fn save(&self, cart: &Cart) -> Result<(), RepositoryError>;
    /// Removes the slot entirely.
    async fn clear(&self) -> Result<(), RepositoryError>;
}
