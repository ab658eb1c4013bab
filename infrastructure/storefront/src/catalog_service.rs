use async_trait::async_trait;
use reqwest::StatusCode;

use business::domain::cart::model::ProductDetails;
use business::domain::cart::services::CatalogService;
use business::domain::errors::ServiceError;
use business::domain::shared::value_objects::ProductId;

use crate::client::StorefrontClient;
use crate::dto::ProductDto;

pub struct CatalogServiceHttp {
    client: StorefrontClient,
}

impl CatalogServiceHttp {
    pub fn new(client: StorefrontClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CatalogService for CatalogServiceHttp {
    async fn get_product(&self, product_id: ProductId) -> Result<ProductDetails, ServiceError> {
        let url = self.client.product_url(product_id.value());

        let response = self.client.client.get(&url).send().await.map_err(|e| {
            tracing::warn!(%url, error = %e, "catalog request failed");
            ServiceError::Unavailable
        })?;

        match response.status() {
            StatusCode::NOT_FOUND => return Err(ServiceError::NotFound),
            status if !status.is_success() => {
                tracing::warn!(%url, %status, "catalog request rejected");
                return Err(ServiceError::Unavailable);
            }
            _ => {}
        }

        let data: ProductDto = response.json().await.map_err(|e| {
            tracing::warn!(%url, error = %e, "catalog product undecodable");
            ServiceError::InvalidResponse
        })?;

        Ok(data.into_domain())
    }
}
