use std::sync::Arc;

use async_trait::async_trait;

use crate::application::cart::session::{CartSession, persist};
use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::services::{CatalogService, StockService};
use crate::domain::cart::use_cases::add_product::{AddProductParams, AddProductUseCase};
use crate::domain::logger::Logger;

pub struct AddProductUseCaseImpl {
    pub session: Arc<CartSession>,
    pub repository: Arc<dyn CartRepository>,
    pub stock: Arc<dyn StockService>,
    pub catalog: Arc<dyn CatalogService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AddProductUseCase for AddProductUseCaseImpl {
    async fn execute(&self, params: AddProductParams) -> Result<Cart, CartError> {
        let product_id = params.product_id;
        self.logger
            .info(&format!("Adding product {} to cart", product_id));

        let mut cart = self.session.lock().await;

        let available = self
            .stock
            .find_stock(product_id)
            .await
            .inspect_err(|e| {
                self.logger
                    .error(&format!("Stock lookup failed for product {}: {}", product_id, e))
            })?
            .map_or(0, |stock| stock.amount);

        let desired = cart.amount_of(product_id).saturating_add(1);
        if desired > available {
            self.logger.warn(&format!(
                "Product {} out of stock: requested {}, available {}",
                product_id, desired, available
            ));
            return Err(CartError::OutOfStock);
        }

        let updated = if cart.contains(product_id) {
            cart.with_incremented(product_id)?
        } else {
            let details = self
                .catalog
                .get_product(product_id)
                .await
                .inspect_err(|e| {
                    self.logger
                        .error(&format!("Catalog lookup failed for product {}: {}", product_id, e))
                })?;
            cart.with_added(product_id, details)
        };

        persist(self.repository.as_ref(), &updated)
            .await
            .inspect_err(|e| self.logger.error(&format!("Cart not persisted: {}", e)))?;
        *cart = updated.clone();

        self.logger.info(&format!(
            "Product {} now at {} units",
            product_id,
            updated.amount_of(product_id)
        ));
        Ok(updated)
    }
}
