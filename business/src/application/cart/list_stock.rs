use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Stock;
use crate::domain::cart::services::StockService;
use crate::domain::cart::use_cases::list_stock::ListStockUseCase;
use crate::domain::logger::Logger;

pub struct ListStockUseCaseImpl {
    pub stock: Arc<dyn StockService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ListStockUseCase for ListStockUseCaseImpl {
    async fn execute(&self) -> Result<Vec<Stock>, CartError> {
        self.logger.info("Listing stock");
        let stock = self
            .stock
            .list_stock()
            .await
            .inspect_err(|e| self.logger.error(&format!("Stock listing failed: {}", e)))?;
        self.logger
            .info(&format!("Retrieved {} stock entries", stock.len()));
        Ok(stock)
    }
}
