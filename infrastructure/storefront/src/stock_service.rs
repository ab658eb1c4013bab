use async_trait::async_trait;
use reqwest::StatusCode;

use business::domain::cart::model::Stock;
use business::domain::cart::services::StockService;
use business::domain::errors::ServiceError;
use business::domain::shared::value_objects::ProductId;

use crate::client::StorefrontClient;
use crate::dto::StockDto;

pub struct StockServiceHttp {
    client: StorefrontClient,
}

impl StockServiceHttp {
    pub fn new(client: StorefrontClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl StockService for StockServiceHttp {
    async fn list_stock(&self) -> Result<Vec<Stock>, ServiceError> {
        let url = self.client.stock_url();

        let response = self.client.client.get(&url).send().await.map_err(|e| {
            tracing::warn!(%url, error = %e, "stock listing request failed");
            ServiceError::Unavailable
        })?;

        if !response.status().is_success() {
            tracing::warn!(%url, status = %response.status(), "stock listing rejected");
            return Err(ServiceError::Unavailable);
        }

        let data: Vec<StockDto> = response.json().await.map_err(|e| {
            tracing::warn!(%url, error = %e, "stock listing undecodable");
            ServiceError::InvalidResponse
        })?;

        Ok(data.into_iter().map(StockDto::into_domain).collect())
    }

    async fn find_stock(&self, product_id: ProductId) -> Result<Option<Stock>, ServiceError> {
        let url = self.client.stock_item_url(product_id.value());

        let response = self.client.client.get(&url).send().await.map_err(|e| {
            tracing::warn!(%url, error = %e, "stock request failed");
            ServiceError::Unavailable
        })?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            tracing::warn!(%url, status = %response.status(), "stock request rejected");
            return Err(ServiceError::Unavailable);
        }

        let data: StockDto = response.json().await.map_err(|e| {
            tracing::warn!(%url, error = %e, "stock entry undecodable");
            ServiceError::InvalidResponse
        })?;

        if data.id != product_id.value() {
            tracing::warn!(%url, returned = data.id, "stock entry for another product");
            return Err(ServiceError::InvalidResponse);
        }

        Ok(Some(data.into_domain()))
    }
}
