use std::sync::Arc;

use async_trait::async_trait;

use crate::application::cart::session::{CartSession, persist};
use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::remove_product::{RemoveProductParams, RemoveProductUseCase};
use crate::domain::logger::Logger;

pub struct RemoveProductUseCaseImpl {
    pub session: Arc<CartSession>,
    pub repository: Arc<dyn CartRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RemoveProductUseCase for RemoveProductUseCaseImpl {
    async fn execute(&self, params: RemoveProductParams) -> Result<Cart, CartError> {
        let product_id = params.product_id;
        self.logger
            .info(&format!("Removing product {} from cart", product_id));

        let mut cart = self.session.lock().await;

        let updated = cart.without(product_id).inspect_err(|_| {
            self.logger
                .warn(&format!("Product {} is not in the cart", product_id))
        })?;

        persist(self.repository.as_ref(), &updated)
            .await
            .inspect_err(|e| self.logger.error(&format!("Cart not persisted: {}", e)))?;
        *cart = updated.clone();

        self.logger.info(&format!(
            "Product {} removed, {} products left",
            product_id,
            updated.len()
        ));
        Ok(updated)
    }
}
