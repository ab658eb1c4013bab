use tokio::sync::{Mutex, MutexGuard};

use crate::domain::cart::model::Cart;
use crate::domain::cart::repository::CartRepository;
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;

/// In-memory cart of the running session.
///
/// Mutating use cases hold the guard for their whole run, so two mutations on
/// the same session never interleave. The stock check itself stays
/// best-effort: the remote stock can still change between check and write.
pub struct CartSession {
    cart: Mutex<Cart>,
}

impl CartSession {
    pub fn new(cart: Cart) -> Self {
        Self {
            cart: Mutex::new(cart),
        }
    }

    /// Restores the cart from the persistent slot.
    ///
    /// An absent slot yields an empty cart. A snapshot that cannot be decoded is
    /// discarded with a warning and replaced on the next successful mutation.
    pub async fn restore(
        repository: &dyn CartRepository,
        logger: &dyn Logger,
    ) -> Result<Self, RepositoryError> {
        let cart = match repository.load().await {
            Ok(Some(cart)) => cart,
            Ok(None) => Cart::new(),
            Err(RepositoryError::Serialization) => {
                logger.warn("Stored cart snapshot is unreadable, starting with an empty cart");
                Cart::new()
            }
            Err(other) => return Err(other),
        };

        logger.info(&format!("Cart restored with {} products", cart.len()));
        Ok(Self::new(cart))
    }

    /// Read-only copy of the current cart.
    pub async fn snapshot(&self) -> Cart {
        self.cart.lock().await.clone()
    }

    pub(crate) async fn lock(&self) -> MutexGuard<'_, Cart> {
        self.cart.lock().await
    }
}

/// Writes `cart` to the persistent slot; an empty cart clears the slot.
pub(crate) async fn persist(
    repository: &dyn CartRepository,
    cart: &Cart,
) -> Result<(), RepositoryError> {
    if cart.is_empty() {
        repository.clear().await
    } else {
        repository.save(cart).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cart::model::{CartItem, ProductDetails};
    use crate::domain::shared::value_objects::ProductId;
    use async_trait::async_trait;
    use mockall::mock;

    mock! {
        pub CartRepo {}

        #[async_trait]
        impl CartRepository for CartRepo {
            async fn load(&self) -> Result<Option<Cart>, RepositoryError>;
            async fn save(&self, cart: &Cart) -> Result<(), RepositoryError>;
            async fn clear(&self) -> Result<(), RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> MockLog {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        logger
    }

    fn stored_cart() -> Cart {
        Cart::from_repository(vec![CartItem::from_repository(
            ProductId::new(1),
            ProductDetails {
                title: "Running Sneakers".to_string(),
                price: 179.9,
                image: "sneakers.jpg".to_string(),
            },
            2,
        )])
    }

    #[tokio::test]
    async fn should_restore_stored_cart() {
        let mut repo = MockCartRepo::new();
        repo.expect_load().returning(|| Ok(Some(stored_cart())));

        let session = CartSession::restore(&repo, &mock_logger()).await.unwrap();

        assert_eq!(session.snapshot().await, stored_cart());
    }

    #[tokio::test]
    async fn should_start_empty_when_slot_absent() {
        let mut repo = MockCartRepo::new();
        repo.expect_load().returning(|| Ok(None));

        let session = CartSession::restore(&repo, &mock_logger()).await.unwrap();

        assert!(session.snapshot().await.is_empty());
    }

    #[tokio::test]
    async fn should_start_empty_when_snapshot_unreadable() {
        let mut repo = MockCartRepo::new();
        repo.expect_load()
            .returning(|| Err(RepositoryError::Serialization));

        let session = CartSession::restore(&repo, &mock_logger()).await.unwrap();

        assert!(session.snapshot().await.is_empty());
    }

    #[tokio::test]
    async fn should_fail_when_store_unreachable() {
        let mut repo = MockCartRepo::new();
        repo.expect_load()
            .returning(|| Err(RepositoryError::DatabaseError));

        let result = CartSession::restore(&repo, &mock_logger()).await;

        assert!(matches!(result, Err(RepositoryError::DatabaseError)));
    }

    #[tokio::test]
    async fn should_clear_slot_instead_of_saving_empty_cart() {
        let mut repo = MockCartRepo::new();
        repo.expect_clear().times(1).returning(|| Ok(()));
        repo.expect_save().never();

        let result = persist(&repo, &Cart::new()).await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_save_non_empty_cart() {
        let mut repo = MockCartRepo::new();
        repo.expect_save()
            .withf(|cart| cart.len() == 1)
            .times(1)
            .returning(|_| Ok(()));
        repo.expect_clear().never();

        let result = persist(&repo, &stored_cart()).await;

        assert!(result.is_ok());
    }
}
