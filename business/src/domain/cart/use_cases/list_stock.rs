use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Stock;

#[async_trait]
pub trait ListStockUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<Stock>, CartError>;
}
