use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use business::domain::cart::model::{Cart, CartItem, ProductDetails};
use business::domain::errors::RepositoryError;
use business::domain::shared::value_objects::ProductId;

/// One cart line inside the stored JSON snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItemEntity {
    pub id: u64,
    pub title: String,
    pub price: f64,
    pub image: String,
    pub amount: u32,
}

impl CartItemEntity {
    pub fn from_domain(item: &CartItem) -> Self {
        Self {
            id: item.id.value(),
            title: item.details.title.clone(),
            price: item.details.price,
            image: item.details.image.clone(),
            amount: item.amount,
        }
    }

    pub fn into_domain(self) -> CartItem {
        CartItem::from_repository(
            ProductId::new(self.id),
            ProductDetails {
                title: self.title,
                price: self.price,
                image: self.image,
            },
            self.amount,
        )
    }
}

/// A named slot of the local storage table.
#[derive(Debug, FromRow)]
pub struct StorageSlotEntity {
    pub key: String,
    pub value: String,
    pub updated_at: DateTime<Utc>,
}

/// Serializes the cart as a JSON array, in cart order.
pub fn encode_snapshot(cart: &Cart) -> Result<String, RepositoryError> {
    let entities: Vec<CartItemEntity> = cart.items().iter().map(CartItemEntity::from_domain).collect();
    serde_json::to_string(&entities).map_err(|_| RepositoryError::Serialization)
}

/// Decodes a stored snapshot. Snapshots with zero amounts or repeated ids are
/// rejected as unreadable.
pub fn decode_snapshot(raw: &str) -> Result<Cart, RepositoryError> {
    let entities: Vec<CartItemEntity> =
        serde_json::from_str(raw).map_err(|_| RepositoryError::Serialization)?;

    let mut seen = HashSet::new();
    if entities
        .iter()
        .any(|entity| entity.amount == 0 || !seen.insert(entity.id))
    {
        return Err(RepositoryError::Serialization);
    }

    Ok(Cart::from_repository(
        entities.into_iter().map(CartItemEntity::into_domain).collect(),
    ))
}
