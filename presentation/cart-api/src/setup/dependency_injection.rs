use std::sync::Arc;

use logger::TracingLogger;
use persistence::cart::repository::CartRepositorySqlite;
use storefront::catalog_service::CatalogServiceHttp;
use storefront::client::StorefrontClient;
use storefront::stock_service::StockServiceHttp;

use business::application::cart::add_product::AddProductUseCaseImpl;
use business::application::cart::get_cart::GetCartUseCaseImpl;
use business::application::cart::list_stock::ListStockUseCaseImpl;
use business::application::cart::remove_product::RemoveProductUseCaseImpl;
use business::application::cart::session::CartSession;
use business::application::cart::update_amount::UpdateProductAmountUseCaseImpl;

use crate::config::storage_config::StorageConfig;
use crate::config::storefront_config::StorefrontConfig;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub cart_api: crate::api::cart::routes::CartApi,
    pub stock_api: crate::api::stock::routes::StockApi,
}

impl DependencyContainer {
    pub async fn new(
        pool: sqlx::SqlitePool,
        storefront: &StorefrontConfig,
        storage: &StorageConfig,
    ) -> anyhow::Result<Self> {
        let logger = Arc::new(TracingLogger);
        let health_api = crate::api::health::routes::Api::new();

        // Infrastructure adapters
        let cart_repository = Arc::new(CartRepositorySqlite::new(pool, storage.cart_key.clone()));
        let storefront_client =
            StorefrontClient::new(storefront.base_url.clone(), storefront.timeout);
        let stock_service = Arc::new(StockServiceHttp::new(storefront_client.clone()));
        let catalog_service = Arc::new(CatalogServiceHttp::new(storefront_client));

        // One cart session per process, restored from local storage
        let session = Arc::new(
            CartSession::restore(cart_repository.as_ref(), logger.as_ref()).await?,
        );

        // Cart use cases
        let get_cart_use_case = Arc::new(GetCartUseCaseImpl {
            session: session.clone(),
            logger: logger.clone(),
        });
        let add_product_use_case = Arc::new(AddProductUseCaseImpl {
            session: session.clone(),
            repository: cart_repository.clone(),
            stock: stock_service.clone(),
            catalog: catalog_service,
            logger: logger.clone(),
        });
        let update_amount_use_case = Arc::new(UpdateProductAmountUseCaseImpl {
            session: session.clone(),
            repository: cart_repository.clone(),
            stock: stock_service.clone(),
            logger: logger.clone(),
        });
        let remove_product_use_case = Arc::new(RemoveProductUseCaseImpl {
            session,
            repository: cart_repository,
            logger: logger.clone(),
        });

        // Stock use cases
        let list_stock_use_case = Arc::new(ListStockUseCaseImpl {
            stock: stock_service,
            logger,
        });

        let cart_api = crate::api::cart::routes::CartApi::new(
            get_cart_use_case,
            add_product_use_case,
            update_amount_use_case,
            remove_product_use_case,
        );

        let stock_api = crate::api::stock::routes::StockApi::new(list_stock_use_case);

        Ok(Self {
            health_api,
            cart_api,
            stock_api,
        })
    }
}
