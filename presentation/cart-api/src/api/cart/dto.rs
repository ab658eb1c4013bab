use poem_openapi::Object;

use business::domain::cart::model::{Cart, CartItem};

#[derive(Debug, Clone, Object)]
pub struct UpdateAmountRequest {
    /// Target amount (must be positive and within stock)
    pub amount: i64,
}

#[derive(Debug, Clone, Object)]
pub struct CartItemResponse {
    /// Product identifier
    pub id: u64,
    /// Product title
    pub title: String,
    /// Unit price
    pub price: f64,
    /// Product image URL
    pub image: String,
    /// Units held in the cart
    pub amount: u32,
    /// Unit price times amount
    pub subtotal: f64,
}

impl From<CartItem> for CartItemResponse {
    fn from(item: CartItem) -> Self {
        let subtotal = item.subtotal();
        Self {
            id: item.id.value(),
            title: item.details.title,
            price: item.details.price,
            image: item.details.image,
            amount: item.amount,
            subtotal,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct CartResponse {
    /// Cart lines in insertion order
    pub items: Vec<CartItemResponse>,
    /// Number of distinct products (header badge)
    pub product_count: u64,
    /// Sum of all amounts
    pub total_units: u64,
    /// Sum of all subtotals
    pub total: f64,
}

impl From<Cart> for CartResponse {
    fn from(cart: Cart) -> Self {
        let product_count = cart.len() as u64;
        let total_units = cart.total_units();
        let total = cart.total();
        Self {
            items: cart.into_items().into_iter().map(Into::into).collect(),
            product_count,
            total_units,
            total,
        }
    }
}
