use std::time::Duration;

use reqwest::Client;

/// Shared HTTP client configuration for the storefront API.
#[derive(Clone)]
pub struct StorefrontClient {
    pub client: Client,
    pub base_url: String,
}

impl StorefrontClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_default();

        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Returns the bulk stock listing endpoint URL.
    pub fn stock_url(&self) -> String {
        format!("{}/stock", self.base_url)
    }

    /// Returns the stock endpoint URL for a single product.
    pub fn stock_item_url(&self, product_id: u64) -> String {
        format!("{}/stock/{}", self.base_url, product_id)
    }

    /// Returns the catalog endpoint URL for a single product.
    pub fn product_url(&self, product_id: u64) -> String {
        format!("{}/products/{}", self.base_url, product_id)
    }
}
