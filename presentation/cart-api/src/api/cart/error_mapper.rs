use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::cart::errors::CartError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for CartError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name) = match &self {
            CartError::OutOfStock => (StatusCode::CONFLICT, "OutOfStock"),
            CartError::NotFound => (StatusCode::NOT_FOUND, "NotFound"),
            CartError::InvalidQuantity => (StatusCode::BAD_REQUEST, "ValidationError"),
            CartError::Service(_) => (StatusCode::BAD_GATEWAY, "ServiceUnavailable"),
            CartError::Repository(_) => (StatusCode::INTERNAL_SERVER_ERROR, "InternalError"),
        };

        (status, Json(ErrorResponse::new(name, self.to_string())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::errors::{RepositoryError, ServiceError};

    fn map(err: CartError) -> (u16, String, String) {
        let (status, json) = err.into_error_response();
        (status.as_u16(), json.0.name, json.0.message)
    }

    #[test]
    fn should_map_out_of_stock_to_conflict() {
        let (status, name, message) = map(CartError::OutOfStock);

        assert_eq!(status, 409);
        assert_eq!(name, "OutOfStock");
        assert_eq!(message, "cart.out_of_stock");
    }

    #[test]
    fn should_map_not_found() {
        let (status, _, message) = map(CartError::NotFound);

        assert_eq!(status, 404);
        assert_eq!(message, "cart.product_not_found");
    }

    #[test]
    fn should_map_invalid_quantity_to_bad_request() {
        let (status, name, message) = map(CartError::InvalidQuantity);

        assert_eq!(status, 400);
        assert_eq!(name, "ValidationError");
        assert_eq!(message, "cart.invalid_amount");
    }

    #[test]
    fn should_map_transient_failures() {
        let (status, _, message) = map(CartError::Service(ServiceError::Unavailable));
        assert_eq!(status, 502);
        assert_eq!(message, "cart.service_unavailable");

        let (status, _, message) = map(CartError::Repository(RepositoryError::Persistence));
        assert_eq!(status, 500);
        assert_eq!(message, "repository.persistence");
    }
}
