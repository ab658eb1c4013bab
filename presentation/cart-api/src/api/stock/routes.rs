use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::cart::use_cases::list_stock::ListStockUseCase;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::stock::dto::StockResponse;
use crate::api::tags::ApiTags;

pub struct StockApi {
    list_stock_use_case: Arc<dyn ListStockUseCase>,
}

impl StockApi {
    pub fn new(list_stock_use_case: Arc<dyn ListStockUseCase>) -> Self {
        Self {
            list_stock_use_case,
        }
    }
}

/// Stock availability API
#[OpenApi]
impl StockApi {
    /// List stock
    ///
    /// Proxies the storefront stock listing.
    #[oai(path = "/stock", method = "get", tag = "ApiTags::Stock")]
    async fn list_stock(&self) -> ListStockResponse {
        match self.list_stock_use_case.execute().await {
            Ok(stock) => ListStockResponse::Ok(Json(stock.into_iter().map(Into::into).collect())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    502 => ListStockResponse::BadGateway(json),
                    _ => ListStockResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum ListStockResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<StockResponse>>),
    #[oai(status = 502)]
    BadGateway(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
