use std::sync::Arc;

use async_trait::async_trait;

use crate::application::cart::session::{CartSession, persist};
use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::{Cart, requested_amount};
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::services::StockService;
use crate::domain::cart::use_cases::update_amount::{
    UpdateProductAmountParams, UpdateProductAmountUseCase,
};
use crate::domain::logger::Logger;

pub struct UpdateProductAmountUseCaseImpl {
    pub session: Arc<CartSession>,
    pub repository: Arc<dyn CartRepository>,
    pub stock: Arc<dyn StockService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateProductAmountUseCase for UpdateProductAmountUseCaseImpl {
    async fn execute(&self, params: UpdateProductAmountParams) -> Result<Cart, CartError> {
        let product_id = params.product_id;
        self.logger.info(&format!(
            "Updating product {} amount to {}",
            product_id, params.amount
        ));

        let amount = requested_amount(params.amount).inspect_err(|_| {
            self.logger
                .warn(&format!("Rejected amount {} for product {}", params.amount, product_id))
        })?;

        let mut cart = self.session.lock().await;

        if !cart.contains(product_id) {
            self.logger
                .warn(&format!("Product {} is not in the cart", product_id));
            return Err(CartError::NotFound);
        }

        let available = self
            .stock
            .find_stock(product_id)
            .await
            .inspect_err(|e| {
                self.logger
                    .error(&format!("Stock lookup failed for product {}: {}", product_id, e))
            })?
            .map_or(0, |stock| stock.amount);

        if amount > available {
            self.logger.warn(&format!(
                "Product {} out of stock: requested {}, available {}",
                product_id, amount, available
            ));
            return Err(CartError::OutOfStock);
        }

        let updated = cart.with_amount(product_id, amount)?;

        persist(self.repository.as_ref(), &updated)
            .await
            .inspect_err(|e| self.logger.error(&format!("Cart not persisted: {}", e)))?;
        *cart = updated.clone();

        self.logger
            .info(&format!("Product {} now at {} units", product_id, amount));
        Ok(updated)
    }
}
