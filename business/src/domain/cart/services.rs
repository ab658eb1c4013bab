use async_trait::async_trait;

use crate::domain::errors::ServiceError;
use crate::domain::shared::value_objects::ProductId;

use super::model::{ProductDetails, Stock};

/// Service port for the storefront's stock levels.
///
/// Adapters that only expose the bulk listing get `find_stock` for free; a
/// missing entry means the product has no stock record at all.
#[async_trait]
pub trait StockService: Send + Sync {
    async fn list_stock(&self) -> Result<Vec<Stock>, ServiceError>;

    async fn find_stock(&self, product_id: ProductId) -> Result<Option<Stock>, ServiceError> {
        let stock = self.list_stock().await?;
        Ok(stock.into_iter().find(|entry| entry.product_id == product_id))
    }
}

/// Service port for the product catalog (display attributes).
#[async_trait]
pub trait CatalogService: Send + Sync {
    async fn get_product(&self, product_id: ProductId) -> Result<ProductDetails, ServiceError>;
}
