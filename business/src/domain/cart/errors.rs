use crate::domain::errors::{RepositoryError, ServiceError};

#[derive(Debug, thiserror::Error)]
pub enum CartError {
    #[error("cart.out_of_stock")]
    OutOfStock,
    #[error("cart.product_not_found")]
    NotFound,
    #[error("cart.invalid_amount")]
    InvalidQuantity,
    #[error("cart.service_unavailable")]
    Service(#[from] ServiceError),
    #[error("repository.persistence")]
    Repository(#[from] RepositoryError),
}
