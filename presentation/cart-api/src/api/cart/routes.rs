use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::cart::use_cases::add_product::{AddProductParams, AddProductUseCase};
use business::domain::cart::use_cases::get_cart::GetCartUseCase;
use business::domain::cart::use_cases::remove_product::{
    RemoveProductParams, RemoveProductUseCase,
};
use business::domain::cart::use_cases::update_amount::{
    UpdateProductAmountParams, UpdateProductAmountUseCase,
};
use business::domain::shared::value_objects::ProductId;

use crate::api::cart::dto::{CartResponse, UpdateAmountRequest};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;

pub struct CartApi {
    get_cart_use_case: Arc<dyn GetCartUseCase>,
    add_product_use_case: Arc<dyn AddProductUseCase>,
    update_amount_use_case: Arc<dyn UpdateProductAmountUseCase>,
    remove_product_use_case: Arc<dyn RemoveProductUseCase>,
}

impl CartApi {
    pub fn new(
        get_cart_use_case: Arc<dyn GetCartUseCase>,
        add_product_use_case: Arc<dyn AddProductUseCase>,
        update_amount_use_case: Arc<dyn UpdateProductAmountUseCase>,
        remove_product_use_case: Arc<dyn RemoveProductUseCase>,
    ) -> Self {
        Self {
            get_cart_use_case,
            add_product_use_case,
            update_amount_use_case,
            remove_product_use_case,
        }
    }
}

/// Shopping cart API
///
/// Endpoints the storefront UI calls to read and change the local cart.
#[OpenApi]
impl CartApi {
    /// Get the cart
    ///
    /// Returns the cart lines in insertion order with totals.
    #[oai(path = "/cart", method = "get", tag = "ApiTags::Cart")]
    async fn get_cart(&self) -> GetCartResponse {
        match self.get_cart_use_case.execute().await {
            Ok(cart) => GetCartResponse::Ok(Json(cart.into())),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetCartResponse::InternalError(json)
            }
        }
    }

    /// Add one unit of a product
    ///
    /// Adds the product with a single unit, or increments it when already in
    /// the cart. Fails when the cart would exceed the available stock.
    #[oai(
        path = "/cart/products/:product_id",
        method = "post",
        tag = "ApiTags::Cart"
    )]
    async fn add_product(&self, product_id: Path<u64>) -> AddProductResponse {
        let params = AddProductParams {
            product_id: ProductId::new(product_id.0),
        };

        match self.add_product_use_case.execute(params).await {
            Ok(cart) => AddProductResponse::Ok(Json(cart.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    409 => AddProductResponse::Conflict(json),
                    502 => AddProductResponse::BadGateway(json),
                    _ => AddProductResponse::InternalError(json),
                }
            }
        }
    }

    /// Set the amount of a product
    ///
    /// The amount must be positive and not exceed the available stock.
    #[oai(
        path = "/cart/products/:product_id",
        method = "put",
        tag = "ApiTags::Cart"
    )]
    async fn update_amount(
        &self,
        product_id: Path<u64>,
        body: Json<UpdateAmountRequest>,
    ) -> UpdateAmountResponse {
        let params = UpdateProductAmountParams {
            product_id: ProductId::new(product_id.0),
            amount: body.0.amount,
        };

        match self.update_amount_use_case.execute(params).await {
            Ok(cart) => UpdateAmountResponse::Ok(Json(cart.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => UpdateAmountResponse::BadRequest(json),
                    404 => UpdateAmountResponse::NotFound(json),
                    409 => UpdateAmountResponse::Conflict(json),
                    502 => UpdateAmountResponse::BadGateway(json),
                    _ => UpdateAmountResponse::InternalError(json),
                }
            }
        }
    }

    /// Remove a product
    ///
    /// Removes the whole line. Removing the last line clears the stored cart.
    #[oai(
        path = "/cart/products/:product_id",
        method = "delete",
        tag = "ApiTags::Cart"
    )]
    async fn remove_product(&self, product_id: Path<u64>) -> RemoveProductResponse {
        let params = RemoveProductParams {
            product_id: ProductId::new(product_id.0),
        };

        match self.remove_product_use_case.execute(params).await {
            Ok(cart) => RemoveProductResponse::Ok(Json(cart.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => RemoveProductResponse::NotFound(json),
                    _ => RemoveProductResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetCartResponse {
    #[oai(status = 200)]
    Ok(Json<CartResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum AddProductResponse {
    #[oai(status = 200)]
    Ok(Json<CartResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 502)]
    BadGateway(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdateAmountResponse {
    #[oai(status = 200)]
    Ok(Json<CartResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 502)]
    BadGateway(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum RemoveProductResponse {
    #[oai(status = 200)]
    Ok(Json<CartResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
