use std::sync::Arc;

use async_trait::async_trait;

use crate::application::cart::session::CartSession;
use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::cart::use_cases::get_cart::GetCartUseCase;
use crate::domain::logger::Logger;

pub struct GetCartUseCaseImpl {
    pub session: Arc<CartSession>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetCartUseCase for GetCartUseCaseImpl {
    async fn execute(&self) -> Result<Cart, CartError> {
        let cart = self.session.snapshot().await;
        self.logger
            .debug(&format!("Cart holds {} products", cart.len()));
        Ok(cart)
    }
}
